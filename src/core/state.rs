//! Match state: the single owned aggregate.
//!
//! ## TurnState
//!
//! Whose turn it is, the active phase and per-turn flags. Only the turn
//! engine moves it.
//!
//! ## GameState
//!
//! Complete match state:
//! - Configuration
//! - Deck (draw and discard piles)
//! - Both players
//! - Turn state and the pending response, if any
//! - Match log
//! - RNG

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::config::MatchConfig;
use super::error::{ConfigError, IntegrityError};
use super::log::GameLog;
use super::player::{PlayerState, Side, SideMap};
use super::rng::GameRng;
use crate::cards::{Card, CardKind, DeckList, HeroId};
use crate::response::PendingAction;
use crate::zones::Deck;

/// Turn phases.
///
/// `Start → Draw → Play → Discard → Start` (other side), with `GameOver`
/// reachable from any of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Start,
    Draw,
    Play,
    Discard,
    GameOver,
}

/// Flags that reset at the start of every turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnFlags {
    /// Basic attacks played this turn.
    pub attacks_used: u32,
    /// Whether the active hero's once-per-turn skill has been used.
    pub skill_used: bool,
}

/// Whose turn it is and how far it has progressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub active: Side,
    pub phase: Phase,
    /// Turn number (starts at 1).
    pub turn_number: u32,
    pub flags: TurnFlags,
}

impl TurnState {
    fn new() -> Self {
        Self {
            active: Side::A,
            phase: Phase::Start,
            turn_number: 1,
            flags: TurnFlags::default(),
        }
    }
}

/// Full match state.
///
/// All mutation flows through the turn engine, the effect resolver and the
/// response protocol. Outside layers read `snapshot()`.
pub struct GameState {
    config: MatchConfig,
    pub(crate) deck: Deck,
    pub(crate) players: SideMap<PlayerState>,
    pub(crate) turn: TurnState,
    pub(crate) pending: Option<PendingAction>,
    pub(crate) log: GameLog,
    pub(crate) rng: GameRng,
    pub(crate) winner: Option<Side>,
    total_cards: usize,
}

impl GameState {
    /// Create a match: pick heroes, shuffle the deck and deal starting hands.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = GameRng::new(config.seed);
        let hero_a = config.hero_a.unwrap_or(HeroId::ROSTER[0]);
        let hero_b = match config.hero_b {
            Some(hero) => hero,
            None => {
                let others: Vec<HeroId> =
                    HeroId::ROSTER.iter().copied().filter(|&h| h != hero_a).collect();
                rng.choose(&others).copied().unwrap_or(HeroId::ROSTER[1])
            }
        };

        let mut deck = Deck::new(DeckList::standard().build(config.deck_copies));
        deck.shuffle_draw(&mut rng);
        let total_cards = deck.len();

        let mut players = SideMap::new(|side| match side {
            Side::A => PlayerState::new(hero_a),
            Side::B => PlayerState::new(hero_b),
        });
        for side in Side::BOTH {
            let dealt = deck.draw(config.starting_hand, &mut rng);
            players[side].hand.extend(dealt);
        }

        let mut log = GameLog::new();
        log.system(format!(
            "Match start: {} vs {}.",
            hero_a.profile().name,
            hero_b.profile().name
        ));
        info!(seed = config.seed, ?hero_a, ?hero_b, "match created");

        Ok(Self {
            config,
            deck,
            players,
            turn: TurnState::new(),
            pending: None,
            log,
            rng,
            winner: None,
            total_cards,
        })
    }

    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn player(&self, side: Side) -> &PlayerState {
        &self.players[side]
    }

    #[must_use]
    pub fn players(&self) -> &SideMap<PlayerState> {
        &self.players
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.turn.phase
    }

    #[must_use]
    pub fn active_side(&self) -> Side {
        self.turn.active
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    /// The winning side once the match is over.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.turn.phase == Phase::GameOver
    }

    /// Cards in play; fixed for the whole match.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    // === Scenario setup ===

    /// Mutable access to a player, for setting up positions.
    ///
    /// Moving cards in or out of a hand through this reference breaks card
    /// conservation; use `move_to_hand` / `discard_hand` for that.
    pub fn player_mut(&mut self, side: Side) -> &mut PlayerState {
        &mut self.players[side]
    }

    /// Pull the first card of `kind` out of the piles into a side's hand.
    ///
    /// Looks in the draw pile first, then the discard pile.
    pub fn move_to_hand(&mut self, side: Side, kind: CardKind) -> Option<Card> {
        let card = self.deck.take_kind(kind)?;
        self.players[side].hand.push_back(card.clone());
        Some(card)
    }

    /// Put a side's whole hand on the discard pile.
    pub fn discard_hand(&mut self, side: Side) {
        let hand = std::mem::take(&mut self.players[side].hand);
        for card in hand {
            self.deck.discard(card);
        }
    }

    /// Move the whole discard pile back onto the bottom of the draw pile, unshuffled.
    pub fn return_discards(&mut self) {
        self.deck.return_discards();
    }

    // === Engine internals ===

    /// End the match with `winner` as the victor.
    pub(crate) fn finish(&mut self, winner: Side) {
        self.turn.phase = Phase::GameOver;
        self.winner = Some(winner);
        self.pending = None;
        self.log.system(format!("{} wins the match.", winner));
        info!(%winner, turn = self.turn.turn_number, "match over");
    }

    /// Draw `count` cards into a side's hand. Returns how many were drawn.
    pub(crate) fn draw_into_hand(&mut self, side: Side, count: usize) -> usize {
        let reshuffles = self.deck.reshuffle_count();
        let drawn = self.deck.draw(count, &mut self.rng);
        if self.deck.reshuffle_count() != reshuffles {
            self.log.system("Discard pile reshuffled into the deck.");
        }
        let n = drawn.len();
        self.players[side].hand.extend(drawn);
        n
    }

    // === Invariants ===

    /// Verify card conservation, card uniqueness and HP bounds.
    pub fn audit(&self) -> Result<(), IntegrityError> {
        let mut seen = FxHashSet::default();
        let all_cards = self
            .deck
            .iter_all()
            .chain(self.players.iter().flat_map(|(_, p)| {
                p.hand.iter().chain(p.equipment.iter())
            }));

        let mut found = 0;
        for card in all_cards {
            found += 1;
            if !seen.insert(card.id) {
                return Err(IntegrityError::DuplicateCard(card.id.raw()));
            }
        }
        if found != self.total_cards {
            return Err(IntegrityError::CardCount {
                expected: self.total_cards,
                found,
            });
        }

        for (side, player) in self.players.iter() {
            if player.hp() > player.max_hp() {
                return Err(IntegrityError::HpOutOfRange {
                    side,
                    hp: player.hp(),
                    max_hp: player.max_hp(),
                });
            }
            if player.is_defeated() && !self.is_over() {
                return Err(IntegrityError::MissingGameOver);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state(seed: u64) -> GameState {
        GameState::new(MatchConfig::builder().seed(seed).build().unwrap()).unwrap()
    }

    #[test]
    fn test_new_match_deals_hands() {
        let state = new_state(42);

        assert_eq!(state.player(Side::A).hand.len(), 4);
        assert_eq!(state.player(Side::B).hand.len(), 4);
        assert_eq!(state.deck().draw_len(), 60 - 8);
        assert_eq!(state.phase(), Phase::Start);
        assert_eq!(state.active_side(), Side::A);
        assert_eq!(state.total_cards(), 60);
        assert!(state.log().contains("Match start"));
        assert!(state.audit().is_ok());
    }

    #[test]
    fn test_random_hero_differs_from_side_a() {
        for seed in 0..20 {
            let state = new_state(seed);
            assert_eq!(state.player(Side::A).hero, HeroId::ROSTER[0]);
            assert_ne!(state.player(Side::B).hero, state.player(Side::A).hero);
        }
    }

    #[test]
    fn test_same_seed_same_deal() {
        let s1 = new_state(7);
        let s2 = new_state(7);
        assert_eq!(s1.player(Side::A).hand, s2.player(Side::A).hand);
        assert_eq!(s1.player(Side::B).hero, s2.player(Side::B).hero);
    }

    #[test]
    fn test_move_to_hand_conserves_cards() {
        let mut state = new_state(1);
        state.discard_hand(Side::B);
        assert!(state.player(Side::B).hand.is_empty());

        let card = state.move_to_hand(Side::B, CardKind::Dodge).unwrap();
        assert_eq!(card.kind, CardKind::Dodge);
        assert_eq!(state.player(Side::B).hand.len(), 1);
        assert!(state.audit().is_ok());
    }

    #[test]
    fn test_audit_detects_missing_game_over() {
        let mut state = new_state(3);
        state.player_mut(Side::B).set_hp(0);
        assert_eq!(state.audit(), Err(IntegrityError::MissingGameOver));

        state.finish(Side::A);
        assert!(state.audit().is_ok());
        assert_eq!(state.winner(), Some(Side::A));
    }

    #[test]
    fn test_audit_detects_lost_card() {
        let mut state = new_state(3);
        state.player_mut(Side::A).hand.pop_back();
        assert!(matches!(state.audit(), Err(IntegrityError::CardCount { .. })));
    }
}
