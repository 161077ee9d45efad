//! Turn engine: the phase state machine.
//!
//! `START → DRAW → PLAY → DISCARD → START` (other side), with `GAME_OVER`
//! reachable from anywhere.
//!
//! - `advance` runs the automatic phases (start, draw, end of turn) until
//!   a decision is needed or the match is over.
//! - `prompt` reports the outstanding decision without changing anything.
//! - `submit` applies one decision for one side.
//!
//! Nothing changes between a `prompt` and the matching `submit`, so there
//! is never more than one decision request outstanding.

use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::cards::HeroSkill;
use crate::core::{GameState, Phase, RuleError, Side, TurnFlags};
use crate::effects::{card_effects, EffectResolver};
use crate::response::ResponseProtocol;

use super::legal;
use super::moves::{Move, Prompt, PromptKind, Step};

/// Drives a match through its phases.
pub struct TurnEngine;

impl TurnEngine {
    /// Run automatic phases until a side must decide or the match ends.
    pub fn advance(state: &mut GameState) -> Step {
        loop {
            if let Some(winner) = state.winner() {
                return Step::Finished(winner);
            }
            if let Some(prompt) = Self::prompt(state) {
                return Step::Prompt(prompt);
            }

            match state.turn.phase {
                Phase::Start => Self::start_turn(state),
                Phase::Draw => Self::draw_phase(state),
                Phase::Discard => Self::end_turn(state),
                Phase::Play | Phase::GameOver => {
                    unreachable!("play always prompts and a finished match has a winner")
                }
            }
        }
    }

    /// The decision the engine is waiting on, if any.
    #[must_use]
    pub fn prompt(state: &GameState) -> Option<Prompt> {
        if state.is_over() {
            return None;
        }

        if let Some(pending) = state.pending() {
            return Some(Prompt {
                side: pending.responder(),
                kind: PromptKind::Respond(pending.kind()),
                legal: ResponseProtocol::legal_responses(state),
                skill_available: false,
            });
        }

        let side = state.active_side();
        match state.phase() {
            Phase::Play => Some(Prompt {
                side,
                kind: PromptKind::Play,
                legal: legal::playable_indices(state, side),
                skill_available: legal::skill_available(state, side),
            }),
            Phase::Discard if Self::must_discard(state, side) => Some(Prompt {
                side,
                kind: PromptKind::Discard,
                legal: legal::discard_indices(state, side),
                skill_available: false,
            }),
            _ => None,
        }
    }

    /// Apply one decision from `side`.
    ///
    /// A rejected decision changes nothing except appending a log entry.
    /// Once the match is over every decision gets `RuleError::GameOver`
    /// and the state is not touched at all.
    pub fn submit(state: &mut GameState, side: Side, mv: Move) -> Result<(), RuleError> {
        if state.is_over() {
            return Err(RuleError::GameOver);
        }

        let result = Self::apply(state, side, &mv);
        if let Err(err) = &result {
            Self::reject(state, side, &mv, err);
        }
        result
    }

    /// Record a rejected decision in the match log.
    pub fn reject(state: &mut GameState, side: Side, mv: &Move, err: &RuleError) {
        state.log.side(side, format!("{side} tried to {mv}: {err}."));
        warn!(%side, %mv, %err, "decision rejected");
    }

    fn apply(state: &mut GameState, side: Side, mv: &Move) -> Result<(), RuleError> {
        let prompt = Self::prompt(state).ok_or(RuleError::WrongPhase {
            phase: state.phase(),
        })?;
        if prompt.side != side {
            return Err(RuleError::NotPrompted { side });
        }

        match (prompt.kind, mv) {
            (PromptKind::Play, Move::PlayCard(index)) => {
                Self::check_index(&prompt, *index)?;
                let card = state.players[side]
                    .take_from_hand(*index)
                    .ok_or(RuleError::IllegalMove { index: *index })?;
                state.log.side(side, format!("{side} plays {card}."));
                debug!(%side, kind = ?card.kind, "card played");
                EffectResolver::resolve_batch(state, card_effects(side, card))?;
                Ok(())
            }

            (PromptKind::Play, Move::EndTurn) => {
                state.log.side(side, format!("{side} ends the play phase."));
                state.turn.phase = Phase::Discard;
                Ok(())
            }

            (PromptKind::Play, Move::UseSkill(indices)) => Self::use_skill(state, side, indices),

            (PromptKind::Discard, Move::Discard(index)) => {
                Self::check_index(&prompt, *index)?;
                let card = state.players[side]
                    .take_from_hand(*index)
                    .ok_or(RuleError::IllegalMove { index: *index })?;
                state.log.side(side, format!("{side} discards {card}."));
                state.deck.discard(card);
                Ok(())
            }

            (PromptKind::Respond(_), Move::Respond(index)) => {
                ResponseProtocol::respond(state, side, Some(*index))
            }

            (PromptKind::Respond(_), Move::Decline) => ResponseProtocol::respond(state, side, None),

            (kind, other) => Err(RuleError::UnexpectedMove {
                action: other.name(),
                prompt: kind,
            }),
        }
    }

    fn check_index(prompt: &Prompt, index: usize) -> Result<(), RuleError> {
        if prompt.legal.contains(&index) {
            Ok(())
        } else {
            Err(RuleError::IllegalMove { index })
        }
    }

    fn must_discard(state: &GameState, side: Side) -> bool {
        let player = state.player(side);
        player.hand.len() > player.hp() as usize
    }

    // === Automatic phases ===

    fn start_turn(state: &mut GameState) {
        state.turn.flags = TurnFlags::default();
        let side = state.turn.active;
        let hero = state.players[side].hero;
        state.log.system(format!(
            "Turn {}: {side} ({hero}).",
            state.turn.turn_number
        ));
        debug!(turn = state.turn.turn_number, %side, "turn start");
        state.turn.phase = Phase::Draw;
    }

    fn draw_phase(state: &mut GameState) {
        let side = state.turn.active;
        let player = state.player(side);
        let extra = match player.hero.skill() {
            HeroSkill::Moon => 1,
            HeroSkill::Benevolence if player.hp() < 2 => 1,
            _ => 0,
        };
        if extra > 0 {
            let skill = player.hero.skill();
            state
                .log
                .side(side, format!("{skill:?}: {side} draws an extra card."));
        }

        let count = state.config().draw_per_turn + extra;
        let drawn = state.draw_into_hand(side, count);
        state.log.system(format!("{side} draws {drawn} card(s)."));
        state.turn.phase = Phase::Play;
    }

    fn end_turn(state: &mut GameState) {
        let side = state.turn.active;
        state.log.system(format!("{side}'s turn ends."));
        state.turn.active = side.opponent();
        state.turn.turn_number += 1;
        state.turn.phase = Phase::Start;
        info!(turn = state.turn.turn_number, next = %state.turn.active, "turn passed");
    }

    // === Hero skills ===

    /// Balance: discard the chosen cards, draw that many plus one.
    fn use_skill(state: &mut GameState, side: Side, indices: &[usize]) -> Result<(), RuleError> {
        let player = state.player(side);
        if player.hero.skill() != HeroSkill::Balance {
            return Err(RuleError::SkillUnavailable {
                reason: "hero has no activated skill",
            });
        }
        if state.turn.flags.skill_used {
            return Err(RuleError::SkillUnavailable {
                reason: "already used this turn",
            });
        }
        if indices.is_empty() {
            return Err(RuleError::SkillUnavailable {
                reason: "no cards chosen",
            });
        }

        let mut sorted: SmallVec<[usize; 8]> = indices.iter().copied().collect();
        sorted.sort_unstable();
        for pair in sorted.windows(2) {
            if pair[0] == pair[1] {
                return Err(RuleError::IllegalMove { index: pair[0] });
            }
        }
        if let Some(&index) = sorted.iter().find(|&&i| i >= player.hand.len()) {
            return Err(RuleError::IllegalMove { index });
        }

        for &index in sorted.iter().rev() {
            if let Some(card) = state.players[side].take_from_hand(index) {
                state.deck.discard(card);
            }
        }
        state.turn.flags.skill_used = true;

        let count = sorted.len();
        let drawn = state.draw_into_hand(side, count + 1);
        state.log.side(
            side,
            format!("Balance: {side} discards {count} card(s) and draws {drawn}."),
        );
        Ok(())
    }
}
