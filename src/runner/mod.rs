//! Async match loop.
//!
//! `DuelRunner` owns the `GameState` and both providers. Each `step`
//! advances the engine to the next prompt, awaits one decision and
//! submits it. A snapshot is published on a `watch` channel after every
//! transition.

mod duel;

pub use duel::DuelRunner;
