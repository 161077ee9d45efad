//! Card locations outside the hand.
//!
//! ## Key Types
//!
//! - `Deck`: Shared draw pile and discard pile, with recycling
//! - `Equipment`: A side's four equipment slots
//!
//! Hands live on `PlayerState`. Together these hold every card in a match,
//! and the total never changes.

pub mod deck;
pub mod equipment;

pub use deck::Deck;
pub use equipment::Equipment;
