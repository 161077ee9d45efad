//! Effect definitions.
//!
//! Effects are the atomic state changes a played card causes. The card
//! interpreter produces them; the resolver applies them in order.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::Side;
use crate::response::PendingAction;

/// An atomic game effect.
///
/// ## Card Movement
///
/// - `Discard`: Put a card on the discard pile
/// - `Equip`: Put a card in its slot, discarding whatever it replaces
///
/// ## Player State
///
/// - `Damage`, `Heal`: Change HP, clamped to `0..=max_hp`
/// - `Draw`: Draw from the shared deck into a hand
///
/// ## Turn and Response
///
/// - `MarkAttack`: Count one basic attack against the per-turn limit
/// - `OpenResponse`: Open a response window against another side
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    // === Card Movement ===
    Discard(Card),

    Equip { side: Side, card: Card },

    // === Player State ===
    Damage { target: Side, amount: u32 },

    Heal { target: Side, amount: u32 },

    Draw { side: Side, count: usize },

    // === Turn / Response ===
    MarkAttack,

    OpenResponse(PendingAction),
}

impl Effect {
    /// Create a damage effect.
    #[must_use]
    pub fn damage(target: Side, amount: u32) -> Self {
        Self::Damage { target, amount }
    }

    /// Create a heal effect.
    #[must_use]
    pub fn heal(target: Side, amount: u32) -> Self {
        Self::Heal { target, amount }
    }

    /// Create a draw effect.
    #[must_use]
    pub fn draw(side: Side, count: usize) -> Self {
        Self::Draw { side, count }
    }

    /// Whether this effect moves the played card out of the hand.
    #[must_use]
    pub fn is_card_movement(&self) -> bool {
        matches!(self, Effect::Discard(_) | Effect::Equip { .. })
    }
}

/// Ordered list of effects from one decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectBatch {
    effects: Vec<Effect>,
}

impl EffectBatch {
    /// Create an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an effect.
    pub fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with(mut self, effect: Effect) -> Self {
        self.push(effect);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }
}

impl IntoIterator for EffectBatch {
    type Item = Effect;
    type IntoIter = std::vec::IntoIter<Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.into_iter()
    }
}

impl FromIterator<Effect> for EffectBatch {
    fn from_iter<I: IntoIterator<Item = Effect>>(iter: I) -> Self {
        Self {
            effects: iter.into_iter().collect(),
        }
    }
}
