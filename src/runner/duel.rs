//! The match runner.

use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::core::{ConfigError, GameSnapshot, GameState, MatchConfig, RuleError, Side, SideMap};
use crate::decision::{
    fallback_decision, DecisionProvider, DecisionRequest, ProviderError, WithFallback,
};
use crate::rules::{Step, TurnEngine};

/// Drives one match between two decision providers.
///
/// ## Example
///
/// ```
/// use duel_engine::core::{MatchConfig, Side};
/// use duel_engine::decision::HeuristicProvider;
/// use duel_engine::runner::DuelRunner;
///
/// # tokio_test_block(async {
/// let config = MatchConfig::builder().seed(3).build().unwrap();
/// let mut runner = DuelRunner::new(
///     config,
///     Box::new(HeuristicProvider::new()),
///     Box::new(HeuristicProvider::new()),
/// )
/// .unwrap();
///
/// let winner = runner.run().await.unwrap();
/// assert_eq!(runner.state().winner(), Some(winner));
/// # });
/// # fn tokio_test_block(f: impl std::future::Future<Output = ()>) {
/// #     tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(f)
/// # }
/// ```
pub struct DuelRunner {
    state: GameState,
    providers: SideMap<Box<dyn DecisionProvider>>,
    snapshots: watch::Sender<GameSnapshot>,
    requests: u64,
}

impl DuelRunner {
    /// Start a new match between `side_a` and `side_b`.
    pub fn new(
        config: MatchConfig,
        side_a: Box<dyn DecisionProvider>,
        side_b: Box<dyn DecisionProvider>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_state(GameState::new(config)?, side_a, side_b))
    }

    /// Resume from an existing state, for example a prepared scenario.
    ///
    /// Automated providers are held to `MatchConfig::provider_timeout`;
    /// interactive ones may take as long as they like.
    #[must_use]
    pub fn from_state(
        state: GameState,
        side_a: Box<dyn DecisionProvider>,
        side_b: Box<dyn DecisionProvider>,
    ) -> Self {
        let deadline = state.config().provider_timeout();
        let (snapshots, _) = watch::channel(state.snapshot());
        Self {
            state,
            providers: SideMap::from_pair(
                with_deadline(side_a, deadline),
                with_deadline(side_b, deadline),
            ),
            snapshots,
            requests: 0,
        }
    }

    /// Receive a snapshot after every transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshots.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Advance to the next prompt, obtain one decision and apply it.
    ///
    /// Returns the winner once the match is over.
    pub async fn step(&mut self) -> Result<Option<Side>, RuleError> {
        let prompt = match TurnEngine::advance(&mut self.state) {
            Step::Finished(winner) => {
                self.publish();
                return Ok(Some(winner));
            }
            Step::Prompt(prompt) => prompt,
        };
        self.publish();

        let side = prompt.side;
        self.requests += 1;
        let request = DecisionRequest::new(&self.state, &prompt, self.requests);
        let provider = &mut self.providers[side];
        let interactive = provider.is_interactive();

        let decision = match provider.decide(&request).await {
            Ok(decision) => decision,
            Err(ProviderError::Stale(action)) => {
                TurnEngine::reject(&mut self.state, side, &action, &RuleError::NotPrompted { side });
                self.publish();
                return Ok(None);
            }
            Err(err) => {
                warn!(%side, %err, "decision provider failed");
                self.state.log.system(format!(
                    "{side}'s decision provider failed ({err}); the fallback decides."
                ));
                fallback_decision(&request)
            }
        };

        if let Some(reasoning) = decision.reasoning.as_deref() {
            self.state.log.side(side, reasoning);
        }

        match TurnEngine::submit(&mut self.state, side, decision.action) {
            Ok(()) => {}
            // Interactive sides are simply asked again on the next step.
            Err(_) if interactive => {}
            Err(_) => {
                let correction = prompt.safe_default();
                self.state
                    .log
                    .system(format!("{side}'s decision is replaced with: {correction}."));
                TurnEngine::submit(&mut self.state, side, correction)?;
            }
        }

        self.publish();
        if let Some(winner) = self.state.winner() {
            info!(%winner, turns = self.state.turn().turn_number, "match finished");
        }
        Ok(self.state.winner())
    }

    /// Run until the match ends and return the winner.
    pub async fn run(&mut self) -> Result<Side, RuleError> {
        loop {
            if let Some(winner) = self.step().await? {
                return Ok(winner);
            }
        }
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.state.snapshot());
    }
}

fn with_deadline(provider: Box<dyn DecisionProvider>, deadline: Duration) -> Box<dyn DecisionProvider> {
    if provider.is_interactive() {
        provider
    } else {
        Box::new(WithFallback::new(provider, deadline))
    }
}
