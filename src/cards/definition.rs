//! Card values.
//!
//! A `Card` is immutable. Its `kind` decides everything the rules care
//! about; `suit` and `rank` are printed on the card but no rule in this
//! engine reads them. The `id` is unique per physical card so a
//! presentation layer can track it between zones.

use serde::{Deserialize, Serialize};

/// Unique identifier for one physical card in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardInstanceId(pub u32);

impl CardInstanceId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Club,
    Diamond,
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Club => '♣',
            Suit::Diamond => '♦',
        };
        write!(f, "{symbol}")
    }
}

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank. Panics outside `1..=13`.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(value >= 1 && value <= 13, "rank must be 1..=13");
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{n}"),
        }
    }
}

/// Broad card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Basic,
    Scroll,
    Equipment,
}

/// Equipment slot. Each side holds at most one card per slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Armor,
    OffenseMount,
    DefenseMount,
}

/// Card identity. Every rule in the engine keys off this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardKind {
    /// Basic attack: 1 damage unless dodged.
    Slash,
    /// Cancels one Slash; only ever spent as a response.
    Dodge,
    /// Restores 1 HP.
    Peach,
    /// Draw two cards.
    RenewedVigor,
    /// Alternate discarding Slashes with the target; first to fail takes 1 damage.
    Duel,
    /// 1 damage to every other side.
    BarbarianIncursion,
    /// 1 damage to every other side.
    ArrowBarrage,
    /// Armor with a chance to dodge automatically.
    EightTrigrams,
    /// Offense mount.
    RedHare,
    /// Defense mount.
    ShadowRunner,
}

impl CardKind {
    /// Every kind, in catalog order.
    pub const ALL: [CardKind; 10] = [
        CardKind::Slash,
        CardKind::Dodge,
        CardKind::Peach,
        CardKind::RenewedVigor,
        CardKind::Duel,
        CardKind::BarbarianIncursion,
        CardKind::ArrowBarrage,
        CardKind::EightTrigrams,
        CardKind::RedHare,
        CardKind::ShadowRunner,
    ];

    #[must_use]
    pub const fn card_type(self) -> CardType {
        match self {
            CardKind::Slash | CardKind::Dodge | CardKind::Peach => CardType::Basic,
            CardKind::RenewedVigor
            | CardKind::Duel
            | CardKind::BarbarianIncursion
            | CardKind::ArrowBarrage => CardType::Scroll,
            CardKind::EightTrigrams | CardKind::RedHare | CardKind::ShadowRunner => {
                CardType::Equipment
            }
        }
    }

    /// Slot this card occupies when played, if it is equipment.
    #[must_use]
    pub const fn slot(self) -> Option<EquipSlot> {
        match self {
            CardKind::EightTrigrams => Some(EquipSlot::Armor),
            CardKind::RedHare => Some(EquipSlot::OffenseMount),
            CardKind::ShadowRunner => Some(EquipSlot::DefenseMount),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardKind::Slash => "Slash",
            CardKind::Dodge => "Dodge",
            CardKind::Peach => "Peach",
            CardKind::RenewedVigor => "Renewed Vigor",
            CardKind::Duel => "Duel",
            CardKind::BarbarianIncursion => "Barbarian Incursion",
            CardKind::ArrowBarrage => "Arrow Barrage",
            CardKind::EightTrigrams => "Eight Trigrams",
            CardKind::RedHare => "Red Hare",
            CardKind::ShadowRunner => "Shadow Runner",
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One physical card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardInstanceId,
    pub kind: CardKind,
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub fn new(id: CardInstanceId, kind: CardKind, suit: Suit, rank: Rank) -> Self {
        Self { id, kind, suit, rank }
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.kind.card_type()
    }

    #[must_use]
    pub fn is(&self, kind: CardKind) -> bool {
        self.kind == kind
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}{}", self.kind, self.suit, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_display() {
        assert_eq!(Rank::ACE.to_string(), "A");
        assert_eq!(Rank::new(7).to_string(), "7");
        assert_eq!(Rank::new(10).to_string(), "10");
        assert_eq!(Rank::KING.to_string(), "K");
    }

    #[test]
    #[should_panic(expected = "rank must be 1..=13")]
    fn test_rank_out_of_range() {
        let _ = Rank::new(14);
    }

    #[test]
    fn test_card_types() {
        assert_eq!(CardKind::Slash.card_type(), CardType::Basic);
        assert_eq!(CardKind::Peach.card_type(), CardType::Basic);
        assert_eq!(CardKind::Duel.card_type(), CardType::Scroll);
        assert_eq!(CardKind::EightTrigrams.card_type(), CardType::Equipment);
    }

    #[test]
    fn test_only_equipment_has_slots() {
        for kind in CardKind::ALL {
            assert_eq!(kind.slot().is_some(), kind.card_type() == CardType::Equipment, "{kind}");
        }
    }

    #[test]
    fn test_card_display() {
        let card = Card::new(CardInstanceId::new(3), CardKind::Slash, Suit::Spade, Rank::new(7));
        assert_eq!(card.to_string(), "Slash ♠7");
        assert!(card.is(CardKind::Slash));
    }
}
