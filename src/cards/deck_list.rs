//! Deck composition.
//!
//! A `DeckList` is the printed card list: kind, suit and rank for each
//! card. `build` turns it into physical `Card`s with unique instance ids.

use super::definition::{Card, CardInstanceId, CardKind, Rank, Suit};

/// Printed deck list.
///
/// ## Example
///
/// ```
/// use duel_engine::cards::{CardKind, DeckList};
///
/// let list = DeckList::standard();
/// assert_eq!(list.len(), 30);
/// assert_eq!(list.count(CardKind::Slash), 12);
///
/// let cards = list.build(2);
/// assert_eq!(cards.len(), 60);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DeckList {
    entries: Vec<(CardKind, Suit, Rank)>,
}

impl DeckList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one printed card (builder pattern).
    #[must_use]
    pub fn with(mut self, kind: CardKind, suit: Suit, rank: u8) -> Self {
        self.entries.push((kind, suit, Rank::new(rank)));
        self
    }

    /// The standard 30-card list.
    #[must_use]
    pub fn standard() -> Self {
        use CardKind::*;
        use Suit::*;

        let slashes = [
            (Spade, 7), (Spade, 8), (Spade, 8), (Spade, 9), (Spade, 10),
            (Club, 2), (Club, 3), (Club, 4),
            (Heart, 10),
            (Diamond, 13), (Diamond, 6), (Diamond, 7),
        ];
        let dodges = [
            (Diamond, 2), (Diamond, 2), (Diamond, 3),
            (Heart, 2), (Heart, 13), (Heart, 13),
        ];
        let peaches = [(Heart, 3), (Heart, 4), (Heart, 12), (Diamond, 12)];

        let mut list = Self::new();
        for (suit, rank) in slashes {
            list = list.with(Slash, suit, rank);
        }
        for (suit, rank) in dodges {
            list = list.with(Dodge, suit, rank);
        }
        for (suit, rank) in peaches {
            list = list.with(Peach, suit, rank);
        }
        list.with(RenewedVigor, Heart, 7)
            .with(RenewedVigor, Heart, 8)
            .with(Duel, Spade, 1)
            .with(Duel, Diamond, 1)
            .with(BarbarianIncursion, Spade, 7)
            .with(ArrowBarrage, Heart, 1)
            .with(EightTrigrams, Club, 2)
            .with(RedHare, Heart, 5)
    }

    /// Number of printed cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of printed cards of one kind.
    #[must_use]
    pub fn count(&self, kind: CardKind) -> usize {
        self.entries.iter().filter(|(k, _, _)| *k == kind).count()
    }

    /// Create `copies` copies of the list as physical cards, ids 0 upward.
    #[must_use]
    pub fn build(&self, copies: usize) -> Vec<Card> {
        (0..copies)
            .flat_map(|_| self.entries.iter())
            .enumerate()
            .map(|(i, &(kind, suit, rank))| Card::new(CardInstanceId::new(i as u32), kind, suit, rank))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_composition() {
        let list = DeckList::standard();

        assert_eq!(list.count(CardKind::Slash), 12);
        assert_eq!(list.count(CardKind::Dodge), 6);
        assert_eq!(list.count(CardKind::Peach), 4);
        assert_eq!(list.count(CardKind::RenewedVigor), 2);
        assert_eq!(list.count(CardKind::Duel), 2);
        assert_eq!(list.count(CardKind::BarbarianIncursion), 1);
        assert_eq!(list.count(CardKind::ArrowBarrage), 1);
        assert_eq!(list.count(CardKind::EightTrigrams), 1);
        assert_eq!(list.count(CardKind::RedHare), 1);
        assert_eq!(list.count(CardKind::ShadowRunner), 0);
        assert_eq!(list.len(), 30);
    }

    #[test]
    fn test_build_assigns_unique_ids() {
        let cards = DeckList::standard().build(2);
        let mut ids: Vec<_> = cards.iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 60);
    }

    #[test]
    fn test_custom_list() {
        let list = DeckList::new()
            .with(CardKind::Slash, Suit::Spade, 1)
            .with(CardKind::ShadowRunner, Suit::Club, 5);

        let cards = list.build(1);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].kind, CardKind::ShadowRunner);
        assert_eq!(cards[1].rank, Rank::new(5));
    }
}
