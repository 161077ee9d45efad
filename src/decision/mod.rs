//! Decision providers.
//!
//! - `DecisionProvider`: Async trait every side is driven through
//! - `HeuristicProvider`: Deterministic local strategy, also the fallback
//! - `InteractiveProvider` / `InteractiveHandle`: UI-driven decisions
//! - `WithFallback`: Deadline wrapper for automated providers
//! - `ScriptedProvider`: Fixed move list for tests and replays

mod fallback;
mod heuristic;
mod interactive;
mod provider;
mod scripted;

pub use fallback::WithFallback;
pub use heuristic::{fallback_decision, HeuristicProvider};
pub use interactive::{interactive_channel, InteractiveHandle, InteractiveProvider};
pub use provider::{Decision, DecisionProvider, DecisionRequest, ProviderError};
pub use scripted::ScriptedProvider;
