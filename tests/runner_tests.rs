//! Runner tests: whole matches between decision providers.
//!
//! Covers the automated fallback paths and the interactive channel.

use std::time::Duration;

use async_trait::async_trait;

use duel_engine::cards::HeroId;
use duel_engine::core::{MatchConfig, Phase, Side};
use duel_engine::decision::{
    fallback_decision, interactive_channel, Decision, DecisionProvider, DecisionRequest,
    HeuristicProvider, ProviderError, ScriptedProvider, WithFallback,
};
use duel_engine::rules::Move;
use duel_engine::runner::DuelRunner;

/// Upper bound on steps before a test gives up on a match.
const MAX_STEPS: usize = 20_000;

fn config(seed: u64) -> MatchConfig {
    MatchConfig::builder()
        .seed(seed)
        .heroes(HeroId::LiuBei, HeroId::CaoCao)
        .build()
        .unwrap()
}

fn heuristic() -> Box<dyn DecisionProvider> {
    Box::new(HeuristicProvider::new())
}

async fn play_out(runner: &mut DuelRunner) -> Side {
    for _ in 0..MAX_STEPS {
        if let Some(winner) = runner.step().await.unwrap() {
            return winner;
        }
    }
    panic!("match did not finish within {MAX_STEPS} steps");
}

/// Never answers.
struct Silent;

#[async_trait]
impl DecisionProvider for Silent {
    async fn decide(&mut self, _request: &DecisionRequest) -> Result<Decision, ProviderError> {
        std::future::pending().await
    }
}

// =============================================================================
// Automated matches
// =============================================================================

#[tokio::test]
async fn test_heuristic_matches_finish() {
    for seed in [1, 7, 42, 1234] {
        let mut runner = DuelRunner::new(config(seed), heuristic(), heuristic()).unwrap();

        let winner = play_out(&mut runner).await;

        let state = runner.state();
        assert_eq!(state.winner(), Some(winner));
        assert_eq!(state.phase(), Phase::GameOver);
        assert_eq!(state.player(winner.opponent()).hp(), 0);
        assert!(state.audit().is_ok(), "seed {seed}");
    }
}

#[tokio::test]
async fn test_same_seed_same_log() {
    let mut first = DuelRunner::new(config(77), heuristic(), heuristic()).unwrap();
    let mut second = DuelRunner::new(config(77), heuristic(), heuristic()).unwrap();

    play_out(&mut first).await;
    play_out(&mut second).await;

    assert_eq!(first.state().snapshot(), second.state().snapshot());
}

#[tokio::test]
async fn test_subscriber_sees_final_snapshot() {
    let mut runner = DuelRunner::new(config(5), heuristic(), heuristic()).unwrap();
    let snapshots = runner.subscribe();

    let winner = play_out(&mut runner).await;

    let last = snapshots.borrow().clone();
    assert_eq!(last.winner, Some(winner));
    assert_eq!(last.players[winner.opponent()].hp, 0);
    assert_eq!(last, runner.state().snapshot());
}

// =============================================================================
// Fallbacks
// =============================================================================

#[tokio::test]
async fn test_exhausted_script_falls_back() {
    let script = ScriptedProvider::new([Move::EndTurn]);
    let mut runner = DuelRunner::new(config(3), Box::new(script), heuristic()).unwrap();

    play_out(&mut runner).await;

    assert!(runner
        .state()
        .log()
        .contains("Fallback (provider unavailable: script exhausted)"));
}

#[tokio::test(start_paused = true)]
async fn test_runner_enforces_configured_timeout() {
    let config = MatchConfig::builder()
        .seed(11)
        .heroes(HeroId::LiuBei, HeroId::CaoCao)
        .provider_timeout_ms(50)
        .build()
        .unwrap();
    let mut runner = DuelRunner::new(config, Box::new(Silent), heuristic()).unwrap();

    let first = tokio::time::timeout(Duration::from_secs(3600), runner.step()).await;
    assert!(matches!(first, Ok(Ok(_))), "side A was never replaced");
    assert!(runner
        .state()
        .log()
        .contains("Fallback (provider timed out after 50 ms)"));

    let winner = play_out(&mut runner).await;
    assert_eq!(runner.state().winner(), Some(winner));
}

#[tokio::test(start_paused = true)]
async fn test_silent_providers_are_replaced_by_heuristic() {
    let a = WithFallback::new(Silent, Duration::from_millis(50));
    let b = WithFallback::new(Silent, Duration::from_millis(50));
    let mut runner = DuelRunner::new(config(11), Box::new(a), Box::new(b)).unwrap();

    let winner = play_out(&mut runner).await;

    assert_eq!(runner.state().winner(), Some(winner));
    assert!(runner.state().log().contains("Fallback (provider timed out after 50 ms)"));
}

#[tokio::test]
async fn test_illegal_automated_move_is_corrected() {
    let script = ScriptedProvider::new([Move::PlayCard(99)]);
    let mut runner = DuelRunner::new(config(3), Box::new(script), heuristic()).unwrap();

    assert_eq!(runner.step().await.unwrap(), None);

    let log = runner.state().log();
    assert!(log.contains("Side A tried to play card #99"));
    assert!(log.contains("Side A's decision is replaced with: end turn."));
    assert!(log.contains("Side A ends the play phase."));

    // Six cards at 4 HP: two discards before the turn passes.
    assert_eq!(runner.state().phase(), Phase::Discard);
    assert_eq!(runner.state().active_side(), Side::A);
}

// =============================================================================
// Interactive side
// =============================================================================

#[tokio::test]
async fn test_interactive_side_plays_full_match() {
    let (provider, mut handle) = interactive_channel(4);
    let mut runner = DuelRunner::new(config(9), Box::new(provider), heuristic()).unwrap();

    let ui = tokio::spawn(async move {
        let mut answered = 0usize;
        while let Ok(request) = handle.next_request().await {
            assert_eq!(request.side, Side::A);
            let action = fallback_decision(&request).action;
            if handle.send(action).await.is_err() {
                break;
            }
            answered += 1;
        }
        answered
    });

    let winner = play_out(&mut runner).await;
    assert_eq!(runner.state().winner(), Some(winner));
    assert!(!runner.state().log().contains("tried to"));

    drop(runner);
    assert!(ui.await.unwrap() > 0);
}

#[tokio::test]
async fn test_stale_intent_is_rejected() {
    let (provider, mut handle) = interactive_channel(4);
    let mut runner = DuelRunner::new(config(9), Box::new(provider), heuristic()).unwrap();

    // Nothing is being asked yet.
    handle.end_turn().await.unwrap();

    assert_eq!(runner.step().await.unwrap(), None);

    let state = runner.state();
    assert!(state.log().contains("Side A tried to end turn"));
    assert_eq!(state.phase(), Phase::Play);
    assert_eq!(state.active_side(), Side::A);
}

#[tokio::test]
async fn test_interactive_illegal_move_is_asked_again() {
    let script = ScriptedProvider::new([Move::PlayCard(99), Move::EndTurn]).interactive();
    let mut runner = DuelRunner::new(config(3), Box::new(script), heuristic()).unwrap();

    runner.step().await.unwrap();
    assert!(runner.state().log().contains("Side A tried to play card #99"));
    assert!(!runner.state().log().contains("replaced with"));
    assert_eq!(runner.state().phase(), Phase::Play);

    runner.step().await.unwrap();
    assert!(runner.state().log().contains("Side A ends the play phase."));
    assert_eq!(runner.state().phase(), Phase::Discard);
}

#[tokio::test]
async fn test_closed_interactive_channel_uses_heuristic() {
    let (provider, handle) = interactive_channel(1);
    drop(handle);
    let mut runner = DuelRunner::new(config(21), Box::new(provider), heuristic()).unwrap();

    play_out(&mut runner).await;

    assert!(runner.state().log().contains("decision channel closed"));
}
