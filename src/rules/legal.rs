//! Legal-move sets.

use smallvec::SmallVec;

use crate::cards::{Card, CardKind};
use crate::core::{GameState, Phase, PlayerState, Side};

/// Whether `player` may play `card` proactively in its play phase.
///
/// Slash only while attacks remain this turn, Peach only while hurt, Dodge
/// never. Scrolls and equipment are always playable.
#[must_use]
pub fn can_play(state: &GameState, player: &PlayerState, card: &Card) -> bool {
    match card.kind {
        CardKind::Slash => state.turn().flags.attacks_used < state.config().attacks_per_turn,
        CardKind::Peach => player.is_hurt(),
        CardKind::Dodge => false,
        CardKind::RenewedVigor
        | CardKind::Duel
        | CardKind::BarbarianIncursion
        | CardKind::ArrowBarrage
        | CardKind::EightTrigrams
        | CardKind::RedHare
        | CardKind::ShadowRunner => true,
    }
}

/// Hand indices `side` may play right now.
#[must_use]
pub fn playable_indices(state: &GameState, side: Side) -> SmallVec<[usize; 8]> {
    let player = state.player(side);
    player
        .hand
        .iter()
        .enumerate()
        .filter(|(_, card)| can_play(state, player, card))
        .map(|(i, _)| i)
        .collect()
}

/// Every hand index of `side`.
#[must_use]
pub fn discard_indices(state: &GameState, side: Side) -> SmallVec<[usize; 8]> {
    (0..state.player(side).hand.len()).collect()
}

/// Whether `side` may activate its hero skill now.
///
/// Only activated skills count; they need the play phase, no open response, a
/// non-empty hand and must not have been used this turn.
#[must_use]
pub fn skill_available(state: &GameState, side: Side) -> bool {
    let player = state.player(side);
    player.hero.skill().is_active()
        && state.phase() == Phase::Play
        && state.active_side() == side
        && state.pending().is_none()
        && !state.turn().flags.skill_used
        && !player.hand.is_empty()
}
