//! Draw and discard piles.
//!
//! The draw pile is ordered: index 0 is the next card drawn. The discard
//! pile is append-only until it is recycled into the draw pile.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, CardKind};
use crate::core::GameRng;

/// Shared deck: draw pile plus discard pile.
///
/// ## Example
///
/// ```
/// use duel_engine::cards::DeckList;
/// use duel_engine::core::GameRng;
/// use duel_engine::zones::Deck;
///
/// let mut rng = GameRng::new(1);
/// let mut deck = Deck::new(DeckList::standard().build(1));
/// deck.shuffle_draw(&mut rng);
///
/// let hand = deck.draw(4, &mut rng);
/// assert_eq!(hand.len(), 4);
/// assert_eq!(deck.draw_len(), 26);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    draw: Vector<Card>,
    discard: Vector<Card>,
    reshuffles: u32,
}

impl Deck {
    /// Create a deck with `cards` as the draw pile, in the given order.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            draw: cards.into_iter().collect(),
            discard: Vector::new(),
            reshuffles: 0,
        }
    }

    /// Shuffle the draw pile in place.
    pub fn shuffle_draw(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.draw.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.draw = cards.into_iter().collect();
    }

    /// Remove and return up to `n` cards from the front of the draw pile.
    ///
    /// When the draw pile holds fewer than `n` cards and the discard pile is
    /// not empty, the discard pile is shuffled and appended behind the
    /// remaining draw pile first. That happens at most once per call. If both
    /// piles together hold fewer than `n` cards, every remaining card is
    /// returned.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> Vec<Card> {
        if self.draw.len() < n && !self.discard.is_empty() {
            self.reshuffle(rng);
        }
        let take = n.min(self.draw.len());
        let rest = self.draw.split_off(take);
        let drawn = std::mem::replace(&mut self.draw, rest);
        drawn.into_iter().collect()
    }

    fn reshuffle(&mut self, rng: &mut GameRng) {
        let mut recycled: Vec<Card> = std::mem::take(&mut self.discard).into_iter().collect();
        rng.shuffle(&mut recycled);
        debug!(cards = recycled.len(), "discard pile recycled");
        self.draw.extend(recycled);
        self.reshuffles += 1;
    }

    /// Put a card on top of the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard.push_back(card);
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    /// Cards in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Total cards across both piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw.is_empty() && self.discard.is_empty()
    }

    /// Most recently discarded card.
    #[must_use]
    pub fn discard_top(&self) -> Option<&Card> {
        self.discard.last()
    }

    /// Number of times the discard pile has been recycled.
    #[must_use]
    pub fn reshuffle_count(&self) -> u32 {
        self.reshuffles
    }

    /// Draw pile, front first.
    pub fn draw_pile(&self) -> impl Iterator<Item = &Card> {
        self.draw.iter()
    }

    /// Every card in both piles.
    pub fn iter_all(&self) -> impl Iterator<Item = &Card> {
        self.draw.iter().chain(self.discard.iter())
    }

    /// Remove the first card of `kind`, searching the draw pile then the discard pile.
    pub fn take_kind(&mut self, kind: CardKind) -> Option<Card> {
        if let Some(pos) = self.draw.iter().position(|c| c.is(kind)) {
            return Some(self.draw.remove(pos));
        }
        let pos = self.discard.iter().position(|c| c.is(kind))?;
        Some(self.discard.remove(pos))
    }

    /// Move the whole discard pile to the bottom of the draw pile, in order.
    pub fn return_discards(&mut self) {
        let discards = std::mem::take(&mut self.discard);
        self.draw.append(discards);
    }

    /// Move cards from the bottom of the draw pile onto the discard pile
    /// until only `keep` remain in the draw pile.
    pub fn bury(&mut self, keep: usize) {
        while self.draw.len() > keep {
            if let Some(card) = self.draw.pop_back() {
                self.discard.push_back(card);
            }
        }
    }
}
