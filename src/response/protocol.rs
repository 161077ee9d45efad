//! Response protocol.
//!
//! Opening a window either settles it on the spot (armor dodges, or the
//! responder holds no answering card) or leaves it pending until
//! `respond` is called for the responder.
//!
//! ## Dodge requests
//!
//! 1. Armor with automatic dodge rolls once; success closes the window.
//! 2. Otherwise the target plays a Dodge (window closes, no damage) or
//!    declines (damage applies, window closes).
//!
//! ## Duel challenges
//!
//! The target discards a Slash, which swaps the two roles and keeps the
//! window open, or declines and takes the damage.

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{GameState, RuleError, Side};
use crate::effects::EffectResolver;

use super::PendingAction;

/// Opens and resolves response windows.
pub struct ResponseProtocol;

impl ResponseProtocol {
    /// Open a response window.
    ///
    /// Fails with `ResponsePending` if one is already open.
    pub fn open(state: &mut GameState, action: PendingAction) -> Result<(), RuleError> {
        if state.is_over() {
            return Err(RuleError::GameOver);
        }
        if state.pending.is_some() {
            return Err(RuleError::ResponsePending);
        }

        let responder = action.responder();
        if let PendingAction::DodgeRequest { .. } = action {
            if state.players[responder].equipment.has_auto_dodge() {
                let chance = state.config().armor_dodge_chance;
                if state.rng.roll(chance) {
                    state
                        .log
                        .system(format!("Eight Trigrams: {responder} dodges automatically."));
                    debug!(%responder, "armor dodge succeeded");
                    return Ok(());
                }
                state
                    .log
                    .system(format!("Eight Trigrams fails to protect {responder}."));
            }
        }

        state.pending = Some(action);
        state.log.system(format!(
            "{responder} must respond with {}.",
            action.required_card()
        ));
        Self::settle(state);
        Ok(())
    }

    /// Hand indices the responder may answer with. Empty when nothing is pending.
    #[must_use]
    pub fn legal_responses(state: &GameState) -> SmallVec<[usize; 8]> {
        let Some(pending) = state.pending() else {
            return SmallVec::new();
        };
        let required = pending.required_card();
        state
            .player(pending.responder())
            .hand
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is(required))
            .map(|(i, _)| i)
            .collect()
    }

    /// Answer the open window: `Some(index)` plays that card, `None` declines.
    ///
    /// Checks everything before mutating; an `Err` leaves state untouched.
    pub fn respond(
        state: &mut GameState,
        side: Side,
        choice: Option<usize>,
    ) -> Result<(), RuleError> {
        if state.is_over() {
            return Err(RuleError::GameOver);
        }
        let pending = state.pending.ok_or(RuleError::NoPendingResponse)?;
        if pending.responder() != side {
            return Err(RuleError::NotPrompted { side });
        }

        let Some(index) = choice else {
            state.log.side(side, format!("{side} does not respond."));
            Self::decline(state, pending);
            return Ok(());
        };

        if !Self::legal_responses(state).contains(&index) {
            return Err(RuleError::IllegalMove { index });
        }
        let card = state.players[side]
            .take_from_hand(index)
            .ok_or(RuleError::IllegalMove { index })?;
        state.log.side(side, format!("{side} plays {card}."));
        state.deck.discard(card);

        match pending {
            PendingAction::DodgeRequest { source, .. } => {
                state.pending = None;
                state.log.system(format!("{source}'s Slash is dodged."));
            }
            PendingAction::DuelChallenge { source, target, damage } => {
                let swapped = PendingAction::DuelChallenge {
                    source: target,
                    target: source,
                    damage,
                };
                state.pending = Some(swapped);
                state
                    .log
                    .system(format!("{source} must discard a Slash or take {damage} damage."));
                Self::settle(state);
            }
        }
        Ok(())
    }

    /// Decline automatically when the responder holds no answering card.
    fn settle(state: &mut GameState) {
        let Some(pending) = state.pending else {
            return;
        };
        if Self::legal_responses(state).is_empty() {
            let responder = pending.responder();
            state.log.system(format!(
                "{responder} has no {} to respond with.",
                pending.required_card()
            ));
            Self::decline(state, pending);
        }
    }

    fn decline(state: &mut GameState, pending: PendingAction) {
        state.pending = None;
        EffectResolver::apply_damage(state, pending.responder(), pending.damage());
    }
}
