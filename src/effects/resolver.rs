//! Effect resolution: applying effects to game state.
//!
//! Effects resolve strictly in batch order. If the match ends part way
//! through a batch, the remaining effects are dropped.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{EquipSlot, HeroSkill};
use crate::core::{GameState, RuleError, Side};
use crate::response::ResponseProtocol;

use super::{Effect, EffectBatch};

/// Outcome of resolving a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionStatus {
    /// Every effect applied; nothing is waiting.
    Complete,

    /// A response window is open, waiting on this side.
    AwaitingResponse(Side),

    /// The match ended during resolution.
    GameOver,
}

/// Applies effects to game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve a batch of effects in order.
    ///
    /// Returns `RuleError::GameOver` without touching state if the match has
    /// already ended.
    pub fn resolve_batch(
        state: &mut GameState,
        batch: EffectBatch,
    ) -> Result<ResolutionStatus, RuleError> {
        if state.is_over() {
            return Err(RuleError::GameOver);
        }

        for effect in batch {
            Self::resolve_single(state, effect)?;
            if state.is_over() {
                return Ok(ResolutionStatus::GameOver);
            }
        }

        Ok(match state.pending() {
            Some(pending) => ResolutionStatus::AwaitingResponse(pending.responder()),
            None => ResolutionStatus::Complete,
        })
    }

    /// Apply a single effect.
    pub fn resolve_single(state: &mut GameState, effect: Effect) -> Result<(), RuleError> {
        match effect {
            Effect::Discard(card) => {
                state.deck.discard(card);
            }

            Effect::Equip { side, card } => {
                let Some(slot) = card.kind.slot() else {
                    state.deck.discard(card);
                    return Ok(());
                };
                let name = card.kind;
                if let Some(replaced) = state.players[side].equipment.equip(slot, card) {
                    state.log.system(format!("{side} discards {}.", replaced.kind));
                    state.deck.discard(replaced);
                }
                state.log.system(format!("{side} equips {name} ({}).", slot_name(slot)));
            }

            Effect::Damage { target, amount } => {
                Self::apply_damage(state, target, amount);
            }

            Effect::Heal { target, amount } => {
                let gained = state.players[target].recover_hp(amount);
                let player = &state.players[target];
                state.log.system(format!(
                    "{target} recovers {gained} HP ({}/{}).",
                    player.hp(),
                    player.max_hp()
                ));
            }

            Effect::Draw { side, count } => {
                let drawn = state.draw_into_hand(side, count);
                state.log.system(format!("{side} draws {drawn} card(s)."));
            }

            Effect::MarkAttack => {
                state.turn.flags.attacks_used += 1;
            }

            Effect::OpenResponse(action) => {
                ResponseProtocol::open(state, action)?;
            }
        }
        Ok(())
    }

    /// Deal `amount` damage to `target`, clamped at 0 HP.
    ///
    /// Reaching 0 HP ends the match immediately with the other side as
    /// winner. A surviving Cao Cao draws one card.
    pub fn apply_damage(state: &mut GameState, target: Side, amount: u32) {
        if state.is_over() {
            return;
        }

        let lost = state.players[target].lose_hp(amount);
        let player = &state.players[target];
        let (hp, max_hp) = (player.hp(), player.max_hp());
        state
            .log
            .system(format!("{target} takes {lost} damage ({hp}/{max_hp})."));
        debug!(%target, lost, hp, "damage applied");

        if hp == 0 {
            state.finish(target.opponent());
            return;
        }

        if lost > 0 && state.players[target].hero.skill() == HeroSkill::Ambition {
            let drawn = state.draw_into_hand(target, 1);
            state.log.side(
                target,
                format!("Ambition: {target} draws {drawn} card(s) after taking damage."),
            );
        }
    }
}

fn slot_name(slot: EquipSlot) -> &'static str {
    match slot {
        EquipSlot::Weapon => "weapon",
        EquipSlot::Armor => "armor",
        EquipSlot::OffenseMount => "offense mount",
        EquipSlot::DefenseMount => "defense mount",
    }
}
