//! Card and hero catalogs.
//!
//! ## Key Types
//!
//! - `Card`: One physical card (instance id, kind, suit, rank)
//! - `CardKind`: Closed set of card identities; every rule matches on it
//! - `DeckList`: Printed deck composition, built into physical cards
//! - `HeroId` / `HeroProfile`: Hero roster with max HP and skill
//!
//! Catalogs are static and read-only once a match starts.

pub mod definition;
pub mod deck_list;
pub mod hero;

pub use definition::{Card, CardInstanceId, CardKind, CardType, EquipSlot, Rank, Suit};
pub use deck_list::DeckList;
pub use hero::{HeroId, HeroProfile, HeroSkill};
