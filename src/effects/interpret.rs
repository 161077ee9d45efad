//! Card interpreter: what a played card does.
//!
//! `card_effects` is a pure function of the actor and the card. The first
//! effect always moves the card out of the hand (to the discard pile or an
//! equipment slot); the rest follow the card table.

use crate::cards::{Card, CardKind};
use crate::core::Side;
use crate::response::PendingAction;

use super::{Effect, EffectBatch};

/// Damage dealt by Slash, Duel and the area scrolls.
pub const BASE_DAMAGE: u32 = 1;

/// Cards drawn by Renewed Vigor.
pub const VIGOR_DRAW: usize = 2;

/// Effects of `actor` playing `card` from hand.
///
/// ## Example
///
/// ```
/// use duel_engine::cards::{Card, CardInstanceId, CardKind, Rank, Suit};
/// use duel_engine::core::Side;
/// use duel_engine::effects::{card_effects, Effect};
///
/// let peach = Card::new(CardInstanceId::new(0), CardKind::Peach, Suit::Heart, Rank::new(3));
/// let batch = card_effects(Side::A, peach.clone());
///
/// let effects: Vec<_> = batch.into_iter().collect();
/// assert_eq!(effects, vec![Effect::Discard(peach), Effect::heal(Side::A, 1)]);
/// ```
#[must_use]
pub fn card_effects(actor: Side, card: Card) -> EffectBatch {
    let kind = card.kind;
    let mut batch = EffectBatch::new();

    match kind.slot() {
        Some(_) => batch.push(Effect::Equip { side: actor, card }),
        None => batch.push(Effect::Discard(card)),
    }

    match kind {
        CardKind::Slash => {
            batch.push(Effect::MarkAttack);
            batch.push(Effect::OpenResponse(PendingAction::DodgeRequest {
                source: actor,
                target: actor.opponent(),
                damage: BASE_DAMAGE,
            }));
        }
        CardKind::Peach => batch.push(Effect::heal(actor, 1)),
        CardKind::RenewedVigor => batch.push(Effect::draw(actor, VIGOR_DRAW)),
        CardKind::Duel => batch.push(Effect::OpenResponse(PendingAction::DuelChallenge {
            source: actor,
            target: actor.opponent(),
            damage: BASE_DAMAGE,
        })),
        CardKind::BarbarianIncursion | CardKind::ArrowBarrage => {
            for other in actor.others() {
                batch.push(Effect::damage(other, BASE_DAMAGE));
            }
        }
        // Only spent as a response.
        CardKind::Dodge => {}
        CardKind::EightTrigrams | CardKind::RedHare | CardKind::ShadowRunner => {}
    }

    batch
}
