//! Decisions and the prompts that ask for them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Side;
use crate::response::ResponseKind;

/// One decision from a side.
///
/// Card indices address the deciding side's hand as it stands when the
/// prompt was issued.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Play the card at this hand index.
    PlayCard(usize),
    /// Leave the play phase.
    EndTurn,
    /// Discard the card at this hand index during the discard phase.
    Discard(usize),
    /// Answer the open response window with the card at this hand index.
    Respond(usize),
    /// Let the open response window resolve against you.
    Decline,
    /// Activate the hero skill, discarding these hand indices.
    UseSkill(SmallVec<[usize; 4]>),
}

impl Move {
    /// Short name used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Move::PlayCard(_) => "play card",
            Move::EndTurn => "end turn",
            Move::Discard(_) => "discard",
            Move::Respond(_) => "respond",
            Move::Decline => "decline",
            Move::UseSkill(_) => "use skill",
        }
    }

    /// The single hand index this move refers to, if any.
    #[must_use]
    pub fn card_index(&self) -> Option<usize> {
        match *self {
            Move::PlayCard(i) | Move::Discard(i) | Move::Respond(i) => Some(i),
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::UseSkill(indices) => write!(f, "use skill {:?}", indices.as_slice()),
            other => match other.card_index() {
                Some(i) => write!(f, "{} #{i}", other.name()),
                None => f.write_str(other.name()),
            },
        }
    }
}

/// What the engine is asking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromptKind {
    /// Play a card, use a skill or end the turn.
    Play,
    /// Discard down to current HP.
    Discard,
    /// Answer a response window.
    Respond(ResponseKind),
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptKind::Play => write!(f, "play"),
            PromptKind::Discard => write!(f, "discard"),
            PromptKind::Respond(kind) => write!(f, "{kind} response"),
        }
    }
}

/// The single outstanding decision request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Side that must decide.
    pub side: Side,
    pub kind: PromptKind,
    /// Legal hand indices for the card-carrying move of this prompt.
    pub legal: SmallVec<[usize; 8]>,
    /// Whether `Move::UseSkill` is currently allowed.
    pub skill_available: bool,
}

impl Prompt {
    /// A move that is always accepted for this prompt.
    ///
    /// Ends the turn, discards the first legal card, or declines.
    #[must_use]
    pub fn safe_default(&self) -> Move {
        match self.kind {
            PromptKind::Play => Move::EndTurn,
            PromptKind::Discard => Move::Discard(self.legal.first().copied().unwrap_or(0)),
            PromptKind::Respond(_) => Move::Decline,
        }
    }
}

/// Result of advancing the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// A side must decide before anything else can happen.
    Prompt(Prompt),
    /// The match is over.
    Finished(Side),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(kind: PromptKind, legal: &[usize]) -> Prompt {
        Prompt {
            side: Side::A,
            kind,
            legal: legal.iter().copied().collect(),
            skill_available: false,
        }
    }

    #[test]
    fn test_safe_defaults() {
        assert_eq!(prompt(PromptKind::Play, &[0, 2]).safe_default(), Move::EndTurn);
        assert_eq!(prompt(PromptKind::Discard, &[0, 1, 2]).safe_default(), Move::Discard(0));
        assert_eq!(
            prompt(PromptKind::Respond(ResponseKind::Duel), &[1]).safe_default(),
            Move::Decline
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::PlayCard(3).to_string(), "play card #3");
        assert_eq!(Move::EndTurn.to_string(), "end turn");
        assert_eq!(PromptKind::Respond(ResponseKind::Dodge).to_string(), "dodge response");
    }
}
