//! Immutable views of a match for presentation layers and providers.
//!
//! ## GameSnapshot
//!
//! Everything a board renderer needs after a transition. Built from
//! `im` structures, so taking one is cheap.
//!
//! ## PlayerView / PublicPlayerView
//!
//! A side's full record, and the part of it the opponent may see (hand
//! size but not hand contents).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::SnapshotError;
use super::log::LogEntry;
use super::player::{PlayerState, Side, SideMap};
use super::state::{GameState, TurnState};
use crate::cards::{Card, HeroId};
use crate::response::PendingAction;
use crate::zones::Equipment;

/// A side's full record, including its hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub hero: HeroId,
    pub hp: u32,
    pub max_hp: u32,
    pub hand: Vector<Card>,
    pub equipment: Equipment,
}

impl From<&PlayerState> for PlayerView {
    fn from(player: &PlayerState) -> Self {
        Self {
            hero: player.hero,
            hp: player.hp(),
            max_hp: player.max_hp(),
            hand: player.hand.clone(),
            equipment: player.equipment.clone(),
        }
    }
}

/// What the other side may see of a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicPlayerView {
    pub hero: HeroId,
    pub hp: u32,
    pub max_hp: u32,
    pub hand_size: usize,
    pub equipment: Equipment,
}

impl From<&PlayerState> for PublicPlayerView {
    fn from(player: &PlayerState) -> Self {
        Self {
            hero: player.hero,
            hp: player.hp(),
            max_hp: player.max_hp(),
            hand_size: player.hand.len(),
            equipment: player.equipment.clone(),
        }
    }
}

/// Read-only picture of a match after a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub deck_size: usize,
    pub discard_size: usize,
    pub discard_top: Option<Card>,
    pub players: SideMap<PlayerView>,
    pub turn: TurnState,
    pub log: Vector<LogEntry>,
    pub pending: Option<PendingAction>,
    pub winner: Option<Side>,
}

impl GameSnapshot {
    /// Encode for an out-of-process presentation layer.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by `encode`.
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl GameState {
    /// Take a snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            deck_size: self.deck.draw_len(),
            discard_size: self.deck.discard_len(),
            discard_top: self.deck.discard_top().cloned(),
            players: self.players.map(|_, p| PlayerView::from(p)),
            turn: self.turn,
            log: self.log.entries().clone(),
            pending: self.pending.clone(),
            winner: self.winner,
        }
    }
}
