//! Turn rules: legal moves and the phase state machine.
//!
//! - `Move`: One decision (play, end turn, discard, respond, decline, skill)
//! - `Prompt`: The single outstanding decision request
//! - `TurnEngine`: `advance` through automatic phases, `submit` decisions
//!
//! The engine never interprets cards itself; played cards go through
//! `effects::card_effects` and the effect resolver.

pub mod engine;
pub mod legal;
pub mod moves;

pub use engine::TurnEngine;
pub use moves::{Move, Prompt, PromptKind, Step};
