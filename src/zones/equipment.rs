//! Equipment slots.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind, EquipSlot};

/// One optional card per equipment slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Card>,
    pub armor: Option<Card>,
    pub offense_mount: Option<Card>,
    pub defense_mount: Option<Card>,
}

impl Equipment {
    #[must_use]
    pub fn get(&self, slot: EquipSlot) -> Option<&Card> {
        self.slot(slot).as_ref()
    }

    fn slot(&self, slot: EquipSlot) -> &Option<Card> {
        match slot {
            EquipSlot::Weapon => &self.weapon,
            EquipSlot::Armor => &self.armor,
            EquipSlot::OffenseMount => &self.offense_mount,
            EquipSlot::DefenseMount => &self.defense_mount,
        }
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<Card> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
            EquipSlot::OffenseMount => &mut self.offense_mount,
            EquipSlot::DefenseMount => &mut self.defense_mount,
        }
    }

    /// Put `card` in `slot`. Returns the card it replaced.
    pub fn equip(&mut self, slot: EquipSlot, card: Card) -> Option<Card> {
        self.slot_mut(slot).replace(card)
    }

    /// Equipped cards in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        [&self.weapon, &self.armor, &self.offense_mount, &self.defense_mount]
            .into_iter()
            .flatten()
    }

    /// Whether the equipped armor can dodge on its own.
    #[must_use]
    pub fn has_auto_dodge(&self) -> bool {
        self.armor.as_ref().is_some_and(|c| c.is(CardKind::EightTrigrams))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardInstanceId, Rank, Suit};

    fn card(id: u32, kind: CardKind) -> Card {
        Card::new(CardInstanceId::new(id), kind, Suit::Club, Rank::new(2))
    }

    #[test]
    fn test_equip_replaces() {
        let mut equipment = Equipment::default();
        assert_eq!(equipment.iter().count(), 0);

        assert!(equipment.equip(EquipSlot::Armor, card(1, CardKind::EightTrigrams)).is_none());
        let old = equipment.equip(EquipSlot::Armor, card(2, CardKind::EightTrigrams));

        assert_eq!(old.map(|c| c.id.raw()), Some(1));
        assert_eq!(equipment.iter().count(), 1);
        assert_eq!(equipment.get(EquipSlot::Armor).map(|c| c.id.raw()), Some(2));
    }

    #[test]
    fn test_auto_dodge_needs_trigrams() {
        let mut equipment = Equipment::default();
        assert!(!equipment.has_auto_dodge());

        equipment.equip(EquipSlot::OffenseMount, card(5, CardKind::RedHare));
        assert!(!equipment.has_auto_dodge());

        equipment.equip(EquipSlot::Armor, card(6, CardKind::EightTrigrams));
        assert!(equipment.has_auto_dodge());
        assert_eq!(equipment.iter().count(), 2);
    }
}
