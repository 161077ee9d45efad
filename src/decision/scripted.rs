//! Scripted provider: replays a fixed list of moves.
//!
//! Useful for tests and replays. Once the script runs out it reports
//! `ProviderError::Unavailable`, which the runner answers with the
//! heuristic.

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::rules::Move;

use super::provider::{Decision, DecisionProvider, DecisionRequest, ProviderError};

#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    moves: VecDeque<Move>,
    interactive: bool,
    asked: usize,
}

impl ScriptedProvider {
    #[must_use]
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            interactive: false,
            asked: 0,
        }
    }

    /// Report as interactive, so rejected moves are asked again.
    #[must_use]
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Moves not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }

    /// How many times `decide` was called.
    #[must_use]
    pub fn asked(&self) -> usize {
        self.asked
    }
}

#[async_trait]
impl DecisionProvider for ScriptedProvider {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    async fn decide(&mut self, _request: &DecisionRequest) -> Result<Decision, ProviderError> {
        self.asked += 1;
        self.moves
            .pop_front()
            .map(Decision::new)
            .ok_or_else(|| ProviderError::Unavailable("script exhausted".to_string()))
    }
}
