//! Interactive provider: decisions from a presentation layer.
//!
//! `interactive_channel` returns a provider for the runner and a handle
//! for the UI. The provider publishes each request on a `watch` channel
//! and waits for the handle to send an intent over an `mpsc` channel.
//! There is no timeout on this side.
//!
//! Every intent is tagged with the request it answers. An intent sent
//! while no prompt is open, or for an older prompt, is reported as
//! `ProviderError::Stale` so the engine can reject and log it.

use async_trait::async_trait;
use smallvec::SmallVec;
use tokio::sync::{mpsc, watch};

use crate::rules::Move;

use super::provider::{Decision, DecisionProvider, DecisionRequest, ProviderError};

#[derive(Debug)]
struct Intent {
    sequence: Option<u64>,
    action: Move,
}

/// Create a connected provider/handle pair.
///
/// `capacity` bounds how many intents can queue before `send` waits.
#[must_use]
pub fn interactive_channel(capacity: usize) -> (InteractiveProvider, InteractiveHandle) {
    let (intent_tx, intent_rx) = mpsc::channel(capacity.max(1));
    let (prompt_tx, prompt_rx) = watch::channel(None);

    let provider = InteractiveProvider {
        intents: intent_rx,
        prompts: prompt_tx,
    };
    let handle = InteractiveHandle {
        intents: intent_tx,
        prompts: prompt_rx,
        answered: None,
    };
    (provider, handle)
}

/// Runner-side end of an interactive channel.
#[derive(Debug)]
pub struct InteractiveProvider {
    intents: mpsc::Receiver<Intent>,
    prompts: watch::Sender<Option<DecisionRequest>>,
}

#[async_trait]
impl DecisionProvider for InteractiveProvider {
    fn is_interactive(&self) -> bool {
        true
    }

    async fn decide(&mut self, request: &DecisionRequest) -> Result<Decision, ProviderError> {
        self.prompts.send_replace(Some(request.clone()));
        let intent = self.intents.recv().await.ok_or(ProviderError::ChannelClosed);
        self.prompts.send_replace(None);

        let intent = intent?;
        if intent.sequence != Some(request.sequence) {
            return Err(ProviderError::Stale(intent.action));
        }
        Ok(Decision::new(intent.action))
    }
}

/// UI-side end of an interactive channel.
///
/// Intents are only meaningful while this side is being prompted; anything
/// else reaches the engine as a stale intent and is rejected there.
#[derive(Debug)]
pub struct InteractiveHandle {
    intents: mpsc::Sender<Intent>,
    prompts: watch::Receiver<Option<DecisionRequest>>,
    answered: Option<u64>,
}

impl InteractiveHandle {
    /// The open request, if this side is being prompted right now.
    #[must_use]
    pub fn current_request(&self) -> Option<DecisionRequest> {
        self.prompts.borrow().clone()
    }

    /// Wait until a request this handle has not yet answered is open.
    pub async fn next_request(&mut self) -> Result<DecisionRequest, ProviderError> {
        loop {
            let open = self.prompts.borrow_and_update().clone();
            if let Some(request) = open {
                if self.answered.map_or(true, |seq| request.sequence > seq) {
                    return Ok(request);
                }
            }
            self.prompts
                .changed()
                .await
                .map_err(|_| ProviderError::ChannelClosed)?;
        }
    }

    pub async fn play_card(&mut self, index: usize) -> Result<(), ProviderError> {
        self.send(Move::PlayCard(index)).await
    }

    pub async fn end_turn(&mut self) -> Result<(), ProviderError> {
        self.send(Move::EndTurn).await
    }

    pub async fn discard(&mut self, index: usize) -> Result<(), ProviderError> {
        self.send(Move::Discard(index)).await
    }

    /// Answer a response window: `Some(index)` plays that card, `None` declines.
    pub async fn respond_dodge(&mut self, index: Option<usize>) -> Result<(), ProviderError> {
        let action = match index {
            Some(i) => Move::Respond(i),
            None => Move::Decline,
        };
        self.send(action).await
    }

    pub async fn use_skill(&mut self, indices: &[usize]) -> Result<(), ProviderError> {
        self.send(Move::UseSkill(SmallVec::from_slice(indices))).await
    }

    /// Send a raw decision for the currently open request.
    pub async fn send(&mut self, action: Move) -> Result<(), ProviderError> {
        let sequence = self.prompts.borrow().as_ref().map(|r| r.sequence);
        self.intents
            .send(Intent { sequence, action })
            .await
            .map_err(|_| ProviderError::ChannelClosed)?;
        if sequence.is_some() {
            self.answered = sequence;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, MatchConfig};
    use crate::rules::TurnEngine;

    fn request(sequence: u64) -> DecisionRequest {
        let mut state = GameState::new(MatchConfig::default()).unwrap();
        TurnEngine::advance(&mut state);
        let prompt = TurnEngine::prompt(&state).unwrap();
        DecisionRequest::new(&state, &prompt, sequence)
    }

    #[tokio::test]
    async fn test_intent_for_open_prompt_is_accepted() {
        let (mut provider, mut handle) = interactive_channel(4);
        let request = request(1);

        let ui = tokio::spawn(async move {
            let seen = handle.next_request().await.unwrap();
            assert_eq!(seen.sequence, 1);
            handle.end_turn().await.unwrap();
            handle
        });

        let decision = provider.decide(&request).await.unwrap();
        assert_eq!(decision.action, Move::EndTurn);

        let handle = ui.await.unwrap();
        assert!(handle.current_request().is_none());
    }

    #[tokio::test]
    async fn test_intent_without_prompt_is_stale() {
        let (mut provider, mut handle) = interactive_channel(4);
        handle.play_card(0).await.unwrap();

        let result = provider.decide(&request(1)).await;
        assert_eq!(result, Err(ProviderError::Stale(Move::PlayCard(0))));
    }

    #[tokio::test]
    async fn test_dropped_handle_closes_channel() {
        let (mut provider, handle) = interactive_channel(1);
        drop(handle);

        let result = provider.decide(&request(1)).await;
        assert_eq!(result, Err(ProviderError::ChannelClosed));
    }

    #[tokio::test]
    async fn test_respond_dodge_maps_to_moves() {
        let (mut provider, mut handle) = interactive_channel(4);
        let request = request(7);

        let ui = tokio::spawn(async move {
            handle.next_request().await.unwrap();
            handle.respond_dodge(None).await.unwrap();
        });

        assert_eq!(provider.decide(&request).await.unwrap().action, Move::Decline);
        ui.await.unwrap();
    }
}
