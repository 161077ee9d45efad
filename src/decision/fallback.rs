//! Timeout and failure fallback for automated providers.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use super::heuristic::fallback_decision;
use super::provider::{Decision, DecisionProvider, DecisionRequest, ProviderError};

/// Wraps a provider with a deadline.
///
/// If the inner provider errors or misses the deadline, the deterministic
/// heuristic answers instead. `decide` never fails.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use duel_engine::decision::{HeuristicProvider, WithFallback};
///
/// let provider = WithFallback::new(HeuristicProvider::new(), Duration::from_millis(250));
/// assert_eq!(provider.timeout(), Duration::from_millis(250));
/// ```
#[derive(Debug)]
pub struct WithFallback<P> {
    inner: P,
    timeout: Duration,
}

impl<P: DecisionProvider> WithFallback<P> {
    #[must_use]
    pub fn new(inner: P, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl<P: DecisionProvider> DecisionProvider for WithFallback<P> {
    fn is_interactive(&self) -> bool {
        self.inner.is_interactive()
    }

    async fn decide(&mut self, request: &DecisionRequest) -> Result<Decision, ProviderError> {
        let error = match tokio::time::timeout(self.timeout, self.inner.decide(request)).await {
            Ok(Ok(decision)) => return Ok(decision),
            Ok(Err(err)) => err,
            Err(_) => ProviderError::Timeout(self.timeout.as_millis() as u64),
        };

        warn!(side = %request.side, %error, "provider failed, using heuristic");
        let fallback = fallback_decision(request);
        let reasoning = match fallback.reasoning.as_deref() {
            Some(text) => format!("Fallback ({error}): {text}"),
            None => format!("Fallback ({error})."),
        };
        Ok(fallback.with_reasoning(reasoning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, MatchConfig};
    use crate::decision::ScriptedProvider;
    use crate::rules::{Move, TurnEngine};

    struct Silent;

    #[async_trait]
    impl DecisionProvider for Silent {
        async fn decide(&mut self, _request: &DecisionRequest) -> Result<Decision, ProviderError> {
            std::future::pending().await
        }
    }

    fn request() -> DecisionRequest {
        let mut state = GameState::new(MatchConfig::builder().seed(12).build().unwrap()).unwrap();
        TurnEngine::advance(&mut state);
        let prompt = TurnEngine::prompt(&state).unwrap();
        DecisionRequest::new(&state, &prompt, 1)
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_uses_heuristic() {
        let mut provider = WithFallback::new(Silent, Duration::from_millis(100));
        let request = request();

        let decision = provider.decide(&request).await.unwrap();

        assert_eq!(decision.action, fallback_decision(&request).action);
        assert!(decision.reasoning.unwrap().contains("timed out after 100 ms"));
    }

    #[tokio::test]
    async fn test_error_uses_heuristic() {
        let mut provider =
            WithFallback::new(ScriptedProvider::new(Vec::new()), Duration::from_secs(1));

        let decision = provider.decide(&request()).await.unwrap();
        assert!(decision.reasoning.unwrap().starts_with("Fallback (provider unavailable"));
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let mut provider =
            WithFallback::new(ScriptedProvider::new([Move::EndTurn]), Duration::from_secs(1));

        let decision = provider.decide(&request()).await.unwrap();
        assert_eq!(decision, Decision::new(Move::EndTurn));
    }
}
