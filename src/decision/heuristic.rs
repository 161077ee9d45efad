//! Deterministic local decision heuristic.
//!
//! Used as an automated opponent on its own and as the fallback whenever
//! another provider fails or times out. It only ever picks from the legal
//! set, so its decisions are always accepted.
//!
//! ## Play priority
//!
//! 1. Peach (legal only while hurt)
//! 2. Slash (legal only while attacks remain)
//! 3. Utility scrolls: Renewed Vigor, Duel, the area scrolls
//! 4. Equipment for an empty slot
//! 5. End turn

use async_trait::async_trait;

use crate::cards::{CardKind, CardType};
use crate::rules::{Move, PromptKind};

use super::provider::{Decision, DecisionProvider, DecisionRequest, ProviderError};

/// Scroll preference, most useful first.
const SCROLL_ORDER: [CardKind; 4] = [
    CardKind::RenewedVigor,
    CardKind::Duel,
    CardKind::BarbarianIncursion,
    CardKind::ArrowBarrage,
];

/// The heuristic decision for `request`.
#[must_use]
pub fn fallback_decision(request: &DecisionRequest) -> Decision {
    match request.kind {
        PromptKind::Play => play_decision(request),
        PromptKind::Discard => {
            let index = request.legal_moves.first().copied().unwrap_or(0);
            Decision::new(Move::Discard(index)).with_reasoning("Discarding down to hand limit.")
        }
        PromptKind::Respond(_) => match request.legal_moves.first() {
            Some(&index) => Decision::new(Move::Respond(index)),
            None => Decision::new(Move::Decline),
        },
    }
}

fn play_decision(request: &DecisionRequest) -> Decision {
    let find = |kind: CardKind| {
        request
            .legal_cards()
            .find(|(_, card)| card.is(kind))
            .map(|(i, _)| i)
    };

    if let Some(i) = find(CardKind::Peach) {
        return Decision::new(Move::PlayCard(i)).with_reasoning("Healing while hurt.");
    }
    if let Some(i) = find(CardKind::Slash) {
        return Decision::new(Move::PlayCard(i)).with_reasoning("Attacking.");
    }
    if let Some(i) = SCROLL_ORDER.into_iter().find_map(find) {
        return Decision::new(Move::PlayCard(i)).with_reasoning("Using a scroll.");
    }

    let equipment = request.legal_cards().find(|(_, card)| {
        card.card_type() == CardType::Equipment
            && card
                .kind
                .slot()
                .is_some_and(|slot| request.actor.equipment.get(slot).is_none())
    });
    if let Some((i, _)) = equipment {
        return Decision::new(Move::PlayCard(i)).with_reasoning("Equipping.");
    }

    Decision::new(Move::EndTurn).with_reasoning("Nothing useful to play.")
}

/// Provider that always answers with `fallback_decision`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicProvider;

impl HeuristicProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DecisionProvider for HeuristicProvider {
    async fn decide(&mut self, request: &DecisionRequest) -> Result<Decision, ProviderError> {
        Ok(fallback_decision(request))
    }
}
