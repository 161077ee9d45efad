//! Pending response interactions.

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::core::Side;

/// What kind of card a response window asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseKind {
    /// Play a Dodge or take the damage.
    Dodge,
    /// Discard a Slash or take the damage.
    Duel,
}

impl ResponseKind {
    /// The card that answers this window.
    #[must_use]
    pub const fn required_card(self) -> CardKind {
        match self {
            ResponseKind::Dodge => CardKind::Dodge,
            ResponseKind::Duel => CardKind::Slash,
        }
    }
}

impl std::fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseKind::Dodge => write!(f, "dodge"),
            ResponseKind::Duel => write!(f, "duel"),
        }
    }
}

/// An open response window. At most one exists at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingAction {
    /// `target` must Dodge or take `damage` from `source`.
    DodgeRequest { source: Side, target: Side, damage: u32 },

    /// `target` must discard a Slash or take `damage`. Discarding swaps
    /// `source` and `target`.
    DuelChallenge { source: Side, target: Side, damage: u32 },
}

impl PendingAction {
    #[must_use]
    pub const fn kind(&self) -> ResponseKind {
        match self {
            PendingAction::DodgeRequest { .. } => ResponseKind::Dodge,
            PendingAction::DuelChallenge { .. } => ResponseKind::Duel,
        }
    }

    /// The side that caused the window.
    #[must_use]
    pub const fn source(&self) -> Side {
        match *self {
            PendingAction::DodgeRequest { source, .. }
            | PendingAction::DuelChallenge { source, .. } => source,
        }
    }

    /// The side that must answer.
    #[must_use]
    pub const fn responder(&self) -> Side {
        match *self {
            PendingAction::DodgeRequest { target, .. }
            | PendingAction::DuelChallenge { target, .. } => target,
        }
    }

    /// Damage applied if the responder declines.
    #[must_use]
    pub const fn damage(&self) -> u32 {
        match *self {
            PendingAction::DodgeRequest { damage, .. }
            | PendingAction::DuelChallenge { damage, .. } => damage,
        }
    }

    #[must_use]
    pub const fn required_card(&self) -> CardKind {
        self.kind().required_card()
    }
}
