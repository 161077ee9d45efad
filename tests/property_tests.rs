//! Property tests: invariants that hold across arbitrary play.
//!
//! A synchronous driver walks the engine with moves picked from each
//! prompt, mixing in deliberately illegal ones.

use proptest::prelude::*;
use smallvec::smallvec;

use duel_engine::cards::{DeckList, HeroId};
use duel_engine::core::{GameRng, GameState, MatchConfig, Side};
use duel_engine::rules::{Move, Prompt, PromptKind, Step, TurnEngine};
use duel_engine::zones::Deck;

const HEROES: [HeroId; 4] = HeroId::ROSTER;

/// Candidate moves for a prompt. The first entries are always legal.
fn candidates(prompt: &Prompt) -> Vec<Move> {
    let mut moves: Vec<Move> = match prompt.kind {
        PromptKind::Play => prompt.legal.iter().map(|&i| Move::PlayCard(i)).collect(),
        PromptKind::Discard => prompt.legal.iter().map(|&i| Move::Discard(i)).collect(),
        PromptKind::Respond(_) => prompt.legal.iter().map(|&i| Move::Respond(i)).collect(),
    };
    match prompt.kind {
        PromptKind::Play => moves.push(Move::EndTurn),
        PromptKind::Respond(_) => moves.push(Move::Decline),
        PromptKind::Discard => {}
    }
    moves
}

/// A move the prompt never accepts.
fn illegal(prompt: &Prompt, pick: u8) -> Move {
    match (prompt.kind, pick % 3) {
        (_, 0) => Move::PlayCard(40 + pick as usize),
        (PromptKind::Play, 1) => Move::Decline,
        (_, 1) => Move::EndTurn,
        (PromptKind::Discard, _) => Move::Respond(0),
        _ => Move::Discard(0),
    }
}

fn match_config(seed: u64, a: usize, b: usize) -> MatchConfig {
    let hero_a = HEROES[a % HEROES.len()];
    let mut hero_b = HEROES[b % HEROES.len()];
    if hero_a == hero_b {
        hero_b = HEROES[(b + 1) % HEROES.len()];
    }
    MatchConfig::builder()
        .seed(seed)
        .heroes(hero_a, hero_b)
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_invariants_hold_during_play(
        seed in any::<u64>(),
        a in 0usize..4,
        b in 0usize..4,
        picks in prop::collection::vec(any::<u8>(), 1..500),
    ) {
        let mut state = GameState::new(match_config(seed, a, b)).unwrap();
        let limit = state.config().attacks_per_turn;

        for pick in picks {
            let prompt = match TurnEngine::advance(&mut state) {
                Step::Prompt(prompt) => prompt,
                Step::Finished(winner) => {
                    prop_assert_eq!(state.player(winner.opponent()).hp(), 0);
                    break;
                }
            };

            if let Some(pending) = state.pending() {
                prop_assert_eq!(prompt.side, pending.responder());
            }

            if pick >= 230 {
                let players = state.players().clone();
                let deck = state.deck().clone();
                let turn = *state.turn();
                let mv = illegal(&prompt, pick);

                prop_assert!(TurnEngine::submit(&mut state, prompt.side, mv).is_err());
                prop_assert_eq!(state.players(), &players);
                prop_assert_eq!(state.deck(), &deck);
                prop_assert_eq!(state.turn(), &turn);

                let other = prompt.side.opponent();
                prop_assert!(TurnEngine::submit(&mut state, other, Move::EndTurn).is_err());
                prop_assert_eq!(state.players(), &players);
                continue;
            }

            let moves = candidates(&prompt);
            let mv = if prompt.skill_available && pick % 17 == 0 {
                Move::UseSkill(smallvec![0])
            } else {
                moves[pick as usize % moves.len()].clone()
            };
            let is_skill = matches!(mv, Move::UseSkill(_));
            let result = TurnEngine::submit(&mut state, prompt.side, mv);
            if !is_skill {
                prop_assert!(result.is_ok(), "{:?}", result);
            }

            prop_assert!(state.audit().is_ok(), "{:?}", state.audit());
            prop_assert!(state.turn().flags.attacks_used <= limit);
            for side in Side::BOTH {
                let player = state.player(side);
                prop_assert!(player.hp() <= player.max_hp());
            }
        }
    }

    #[test]
    fn test_snapshot_does_not_change_state(seed in any::<u64>(), steps in 0usize..60) {
        let mut state = GameState::new(match_config(seed, 0, 1)).unwrap();
        for _ in 0..steps {
            let Step::Prompt(prompt) = TurnEngine::advance(&mut state) else {
                break;
            };
            let mv = candidates(&prompt).remove(0);
            TurnEngine::submit(&mut state, prompt.side, mv).unwrap();
        }

        let first = state.snapshot();
        let second = state.snapshot();
        prop_assert_eq!(&first, &second);

        let decoded = duel_engine::core::GameSnapshot::decode(&first.encode().unwrap()).unwrap();
        prop_assert_eq!(decoded, first);
    }

    #[test]
    fn test_draw_reshuffles_only_when_short(
        total in 0usize..=30,
        keep in 0usize..=30,
        n in 0usize..10,
        seed in any::<u64>(),
    ) {
        let keep = keep.min(total);
        let mut deck = Deck::new(DeckList::standard().build(1).into_iter().take(total));
        deck.bury(keep);
        let discarded = deck.discard_len();
        let mut rng = GameRng::new(seed);

        let drawn = deck.draw(n, &mut rng);

        let expect_reshuffle = keep < n && discarded > 0;
        prop_assert_eq!(deck.reshuffle_count(), u32::from(expect_reshuffle));
        prop_assert_eq!(drawn.len(), n.min(keep + discarded));
        prop_assert_eq!(drawn.len() + deck.len(), total);
    }
}
