//! # duel-engine
//!
//! Turn engine for a two-player card duel: one interactive side against one
//! automated side.
//!
//! ## Design Principles
//!
//! 1. **Explicit State Machine**: `TurnEngine::advance` runs automatic phases
//!    until a decision is needed; `TurnEngine::submit` applies one decision.
//!    Nothing happens between those two calls.
//!
//! 2. **One Owned Aggregate**: all match state lives in `GameState`. Outside
//!    layers only ever see `GameSnapshot`s.
//!
//! 3. **Closed Card Effects**: every card is a `CardKind` variant, matched
//!    exhaustively by the resolver.
//!
//! ## Architecture
//!
//! - **Single Pending Response**: at most one `PendingAction` is open; while
//!   it is, only the responding side may act.
//!
//! - **Async Decision Boundary**: both sides are `DecisionProvider`s. Automated
//!   providers are wrapped with a timeout and fall back to a deterministic
//!   heuristic, so the engine never stalls on them.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, configuration, state, log, snapshots, errors
//! - `cards`: Card values, deck composition, hero roster
//! - `zones`: Draw/discard piles and equipment slots
//! - `effects`: Effect values and their application
//! - `response`: Pending actions and the response protocol
//! - `rules`: Legal moves and the turn engine
//! - `decision`: Provider trait, heuristic, interactive handle, fallback
//! - `runner`: Async match loop

pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod response;
pub mod rules;
pub mod decision;
pub mod runner;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap, PlayerState,
    GameRng, GameRngState,
    MatchConfig, MatchConfigBuilder,
    Phase, TurnFlags, TurnState, GameState,
    GameLog, LogEntry, LogSource,
    GameSnapshot, PlayerView, PublicPlayerView,
    ConfigError, IntegrityError, RuleError, SnapshotError,
};

pub use crate::cards::{
    Card, CardInstanceId, CardKind, CardType, EquipSlot, Rank, Suit,
    DeckList, HeroId, HeroProfile, HeroSkill,
};

pub use crate::zones::{Deck, Equipment};

pub use crate::effects::{Effect, EffectBatch, EffectResolver, ResolutionStatus};

pub use crate::response::{PendingAction, ResponseKind, ResponseProtocol};

pub use crate::rules::{Move, Prompt, PromptKind, Step, TurnEngine};

pub use crate::decision::{
    Decision, DecisionProvider, DecisionRequest, ProviderError,
    HeuristicProvider, InteractiveHandle, InteractiveProvider, ScriptedProvider, WithFallback,
    interactive_channel,
};

pub use crate::runner::DuelRunner;
