//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! A duel always has exactly two sides, `A` and `B`.
//!
//! ## SideMap
//!
//! Per-side data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Side`.
//!
//! ## PlayerState
//!
//! The mutable record each side owns for the length of a match.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::{Card, HeroId};
use crate::zones::Equipment;

/// One of the two sides of a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides, in seating order.
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    /// Get the raw side index (0 for `A`, 1 for `B`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Every side except this one.
    ///
    /// ```
    /// use duel_engine::core::Side;
    ///
    /// let others: Vec<_> = Side::A.others().collect();
    /// assert_eq!(others, vec![Side::B]);
    /// ```
    pub fn others(self) -> impl Iterator<Item = Side> {
        Side::BOTH.into_iter().filter(move |&s| s != self)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "Side A"),
            Side::B => write!(f, "Side B"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use duel_engine::core::{Side, SideMap};
///
/// let mut hp: SideMap<u32> = SideMap::new(|_| 4);
/// hp[Side::B] = 3;
///
/// assert_eq!(hp[Side::A], 4);
/// assert_eq!(hp[Side::B], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::A), factory(Side::B)],
        }
    }

    /// Create a new SideMap from side A's and side B's values.
    pub fn from_pair(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().zip(self.data.iter())
    }

    /// Build a new map by transforming each entry.
    pub fn map<U>(&self, f: impl Fn(Side, &T) -> U) -> SideMap<U> {
        SideMap::new(|side| f(side, self.get(side)))
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

/// Mutable per-side record: hero, HP, hand and equipment.
///
/// `hp` stays within `0..=max_hp` at all times. The hand is addressed by
/// index for decisions; its order carries no rules meaning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Hero chosen at match start.
    pub hero: HeroId,

    /// Current hit points.
    hp: u32,

    /// Cards in hand.
    pub hand: Vector<Card>,

    /// Equipped cards, one per slot.
    pub equipment: Equipment,
}

impl PlayerState {
    /// Create a player at full health with an empty hand.
    #[must_use]
    pub fn new(hero: HeroId) -> Self {
        Self {
            hero,
            hp: hero.profile().max_hp,
            hand: Vector::new(),
            equipment: Equipment::default(),
        }
    }

    /// Current hit points.
    #[must_use]
    pub fn hp(&self) -> u32 {
        self.hp
    }

    /// Maximum hit points, fixed by the hero.
    #[must_use]
    pub fn max_hp(&self) -> u32 {
        self.hero.profile().max_hp
    }

    /// Check if the player is below maximum health.
    #[must_use]
    pub fn is_hurt(&self) -> bool {
        self.hp < self.max_hp()
    }

    /// Check if the player has been defeated.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Lose up to `amount` HP, stopping at 0. Returns the HP actually lost.
    pub fn lose_hp(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }

    /// Recover up to `amount` HP, stopping at max. Returns the HP actually gained.
    pub fn recover_hp(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max_hp() - self.hp);
        self.hp += gained;
        gained
    }

    /// Set HP directly, clamped to `0..=max_hp`.
    ///
    /// Used for scenario setup; rules code goes through `lose_hp`/`recover_hp`.
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.max_hp());
    }

    /// Remove the card at `index` from the hand.
    pub fn take_from_hand(&mut self, index: usize) -> Option<Card> {
        if index < self.hand.len() {
            Some(self.hand.remove(index))
        } else {
            None
        }
    }
}
