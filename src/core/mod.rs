//! Core engine types: sides, RNG, configuration, state, log, snapshots, errors.
//!
//! Everything else in the crate reads or mutates a `GameState`; this module
//! defines it and the small value types around it.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod log;
pub mod state;
pub mod snapshot;

pub use player::{PlayerState, Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use config::{MatchConfig, MatchConfigBuilder};
pub use error::{ConfigError, IntegrityError, RuleError, SnapshotError};
pub use log::{GameLog, LogEntry, LogSource};
pub use state::{GameState, Phase, TurnFlags, TurnState};
pub use snapshot::{GameSnapshot, PlayerView, PublicPlayerView};
