//! Hero roster.
//!
//! Each side plays one hero for the whole match. A hero fixes maximum HP
//! and carries one skill; the turn engine and the effect resolver check
//! `HeroSkill` at the points where a skill can fire.

use serde::{Deserialize, Serialize};

/// Hero identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroId {
    LiuBei,
    CaoCao,
    SunQuan,
    DiaoChan,
}

/// Hero skill. Each hero has exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroSkill {
    /// Draw one extra card in the draw phase while below 2 HP.
    Benevolence,
    /// Draw one card after surviving damage.
    Ambition,
    /// Once per turn: discard any number of cards, draw that many plus one.
    Balance,
    /// Draw one extra card in the draw phase.
    Moon,
}

impl HeroSkill {
    /// Whether the skill is activated by a decision rather than firing on its own.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, HeroSkill::Balance)
    }
}

/// Static hero data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroProfile {
    pub id: HeroId,
    pub name: &'static str,
    pub title: &'static str,
    pub max_hp: u32,
    pub skill: HeroSkill,
}

static LIU_BEI: HeroProfile = HeroProfile {
    id: HeroId::LiuBei,
    name: "Liu Bei",
    title: "Virtuous Ruler",
    max_hp: 4,
    skill: HeroSkill::Benevolence,
};

static CAO_CAO: HeroProfile = HeroProfile {
    id: HeroId::CaoCao,
    name: "Cao Cao",
    title: "Hero of Chaos",
    max_hp: 4,
    skill: HeroSkill::Ambition,
};

static SUN_QUAN: HeroProfile = HeroProfile {
    id: HeroId::SunQuan,
    name: "Sun Quan",
    title: "Young Emperor",
    max_hp: 4,
    skill: HeroSkill::Balance,
};

static DIAO_CHAN: HeroProfile = HeroProfile {
    id: HeroId::DiaoChan,
    name: "Diao Chan",
    title: "Peerless Beauty",
    max_hp: 3,
    skill: HeroSkill::Moon,
};

impl HeroId {
    /// Every hero, in roster order.
    pub const ROSTER: [HeroId; 4] = [
        HeroId::LiuBei,
        HeroId::CaoCao,
        HeroId::SunQuan,
        HeroId::DiaoChan,
    ];

    /// Static profile for this hero.
    #[must_use]
    pub fn profile(self) -> &'static HeroProfile {
        match self {
            HeroId::LiuBei => &LIU_BEI,
            HeroId::CaoCao => &CAO_CAO,
            HeroId::SunQuan => &SUN_QUAN,
            HeroId::DiaoChan => &DIAO_CHAN,
        }
    }

    #[must_use]
    pub fn skill(self) -> HeroSkill {
        self.profile().skill
    }
}

impl std::fmt::Display for HeroId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.profile().name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_hp() {
        let hp: Vec<u32> = HeroId::ROSTER.iter().map(|h| h.profile().max_hp).collect();
        assert_eq!(hp, vec![4, 4, 4, 3]);
    }

    #[test]
    fn test_profile_ids_match() {
        for hero in HeroId::ROSTER {
            assert_eq!(hero.profile().id, hero);
        }
    }

    #[test]
    fn test_only_balance_is_active() {
        let active: Vec<_> = HeroId::ROSTER.iter().filter(|h| h.skill().is_active()).collect();
        assert_eq!(active, vec![&HeroId::SunQuan]);
    }
}
