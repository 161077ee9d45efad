//! Card effects and their resolution.
//!
//! - `Effect`: Atomic state change (damage, heal, draw, card movement, ...)
//! - `card_effects`: Pure interpreter from a played card to an `EffectBatch`
//! - `EffectResolver`: Applies a batch to `GameState`
//!
//! Card effects are a closed set: adding a card kind means adding a
//! `CardKind` variant and a match arm in `card_effects`.

mod effect;
mod interpret;
mod resolver;

pub use effect::{Effect, EffectBatch};
pub use interpret::{card_effects, BASE_DAMAGE, VIGOR_DRAW};
pub use resolver::{EffectResolver, ResolutionStatus};
