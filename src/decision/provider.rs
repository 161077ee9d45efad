//! Decision provider contract.
//!
//! Both sides of a match are driven through `DecisionProvider`. The engine
//! builds a `DecisionRequest` for the prompted side and awaits one
//! `Decision`. Providers may be local (heuristic, scripted) or backed by
//! user input; the runner does not care which.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::cards::Card;
use crate::core::{GameState, Phase, PlayerView, PublicPlayerView, Side};
use crate::response::PendingAction;
use crate::rules::{Move, Prompt, PromptKind};

/// Everything a provider gets to see when asked for a decision.
///
/// The deciding side sees its own hand; of the opponent it sees only the
/// public view (hand size, HP, equipment).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// Request counter, unique within a match.
    pub sequence: u64,
    pub side: Side,
    pub phase: Phase,
    pub turn_number: u32,
    pub kind: PromptKind,
    /// Legal hand indices for the card-carrying move of this prompt.
    pub legal_moves: SmallVec<[usize; 8]>,
    pub skill_available: bool,
    pub actor: PlayerView,
    pub opponent: PublicPlayerView,
    pub pending: Option<PendingAction>,
}

impl DecisionRequest {
    /// Build the request for `prompt` from the current state.
    #[must_use]
    pub fn new(state: &GameState, prompt: &Prompt, sequence: u64) -> Self {
        let side = prompt.side;
        Self {
            sequence,
            side,
            phase: state.phase(),
            turn_number: state.turn().turn_number,
            kind: prompt.kind,
            legal_moves: prompt.legal.clone(),
            skill_available: prompt.skill_available,
            actor: PlayerView::from(state.player(side)),
            opponent: PublicPlayerView::from(state.player(side.opponent())),
            pending: state.pending().copied(),
        }
    }

    /// The card at a hand index of the deciding side.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.actor.hand.get(index)
    }

    /// Legal indices paired with their cards.
    pub fn legal_cards(&self) -> impl Iterator<Item = (usize, &Card)> {
        self.legal_moves
            .iter()
            .filter_map(|&i| self.card(i).map(|card| (i, card)))
    }
}

/// One answer from a provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Move,
    /// Optional free text, shown in the match log under the deciding side.
    pub reasoning: Option<String>,
}

impl Decision {
    #[must_use]
    pub fn new(action: Move) -> Self {
        Self {
            action,
            reasoning: None,
        }
    }

    #[must_use]
    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }
}

/// Why a provider could not produce a decision.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider has nothing to offer (remote service down, script exhausted).
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// The provider did not answer in time.
    #[error("provider timed out after {0} ms")]
    Timeout(u64),

    /// The provider answered with something that is not a decision.
    #[error("malformed decision: {0}")]
    Malformed(String),

    /// The other end of an interactive channel is gone.
    #[error("decision channel closed")]
    ChannelClosed,

    /// An interactive intent arrived for a prompt that is no longer open.
    #[error("intent `{0}` does not belong to the open prompt")]
    Stale(Move),
}

/// Source of decisions for one side.
///
/// Implementations can be a local heuristic, a scripted queue, a remote
/// model or a human behind an `InteractiveHandle`.
#[async_trait]
pub trait DecisionProvider: Send {
    /// Whether a person answers this provider's prompts.
    ///
    /// Rejected decisions from interactive providers are asked again;
    /// automated ones are replaced with a safe default.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Produce a decision for `request`.
    async fn decide(&mut self, request: &DecisionRequest) -> Result<Decision, ProviderError>;
}

#[async_trait]
impl<P: DecisionProvider + ?Sized> DecisionProvider for Box<P> {
    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }

    async fn decide(&mut self, request: &DecisionRequest) -> Result<Decision, ProviderError> {
        (**self).decide(request).await
    }
}
