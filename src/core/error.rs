//! Error types for rule violations, configuration and snapshots.

use thiserror::Error;

use super::player::Side;
use super::state::Phase;
use crate::rules::PromptKind;

/// A decision or request the rules refuse.
///
/// A rejected decision never mutates match state; the engine appends a log
/// entry and returns one of these.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The match has ended; only inspection is allowed.
    #[error("the match is over")]
    GameOver,

    /// The engine is not waiting on a decision from this side.
    #[error("{side} is not being asked for a decision")]
    NotPrompted { side: Side },

    /// The decision does not answer the current prompt.
    #[error("{action} does not answer a {prompt} prompt")]
    UnexpectedMove { action: &'static str, prompt: PromptKind },

    /// The card index is not in the legal-move set.
    #[error("card index {index} is not a legal move")]
    IllegalMove { index: usize },

    /// The hero skill cannot be used right now.
    #[error("hero skill is not available: {reason}")]
    SkillUnavailable { reason: &'static str },

    /// A response window is already open.
    #[error("a response is already pending")]
    ResponsePending,

    /// The operation needs a response window but none is open.
    #[error("no response is pending")]
    NoPendingResponse,

    /// The engine was asked to do something the current phase does not allow.
    #[error("operation not valid in {phase:?} phase")]
    WrongPhase { phase: Phase },
}

/// Invalid match configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("draw_per_turn must be at least 1")]
    ZeroDraw,

    #[error("deck_copies must be at least 1")]
    ZeroDeckCopies,

    #[error("armor dodge chance {0} is outside 0.0..=1.0")]
    DodgeChance(f64),

    #[error("attacks_per_turn must be at least 1")]
    ZeroAttacks,

    #[error("starting hands need {needed} cards but the deck holds {available}")]
    DeckTooSmall { needed: usize, available: usize },

    #[error("both sides cannot play the same hero")]
    DuplicateHero,
}

/// A broken conservation or uniqueness invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("card count drifted: expected {expected}, found {found}")]
    CardCount { expected: usize, found: usize },

    #[error("card instance {0} appears more than once")]
    DuplicateCard(u32),

    #[error("{side} has {hp} HP, above its maximum of {max_hp}")]
    HpOutOfRange { side: Side, hp: u32, max_hp: u32 },

    #[error("match has a defeated side but is not over")]
    MissingGameOver,
}

/// Snapshot encoding failures.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}
