//! Match configuration.
//!
//! `MatchConfig` fixes every tunable rule constant at match start. Build it
//! with `MatchConfig::builder()` or deserialize it; either way call
//! `validate()` (the builder does) before starting a match.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ConfigError;
use crate::cards::{DeckList, HeroId};

/// Rule constants and hero picks for one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Seed for shuffles, armor rolls and random hero picks.
    pub seed: u64,

    /// Cards drawn in the DRAW phase before hero passives.
    pub draw_per_turn: usize,

    /// Cards dealt to each side before the first turn.
    pub starting_hand: usize,

    /// Copies of the standard deck list shuffled together.
    pub deck_copies: usize,

    /// Chance that armor dodges a `DodgeRequest` on its own.
    pub armor_dodge_chance: f64,

    /// Basic attacks allowed per turn.
    pub attacks_per_turn: u32,

    /// How long an automated provider may think before the fallback decides.
    pub provider_timeout_ms: u64,

    /// Hero for side A. `None` takes the first roster entry.
    pub hero_a: Option<HeroId>,

    /// Hero for side B. `None` picks a random hero other than side A's.
    pub hero_b: Option<HeroId>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            draw_per_turn: 2,
            starting_hand: 4,
            deck_copies: 2,
            armor_dodge_chance: 0.5,
            attacks_per_turn: 1,
            provider_timeout_ms: 5_000,
            hero_a: None,
            hero_b: None,
        }
    }
}

impl MatchConfig {
    /// Start a builder from the default configuration.
    #[must_use]
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::default()
    }

    /// Provider timeout as a `Duration`.
    #[must_use]
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_millis(self.provider_timeout_ms)
    }

    /// Total cards in play for this configuration.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        DeckList::standard().len() * self.deck_copies
    }

    /// Check every field for a usable value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.draw_per_turn == 0 {
            return Err(ConfigError::ZeroDraw);
        }
        if self.deck_copies == 0 {
            return Err(ConfigError::ZeroDeckCopies);
        }
        if !(0.0..=1.0).contains(&self.armor_dodge_chance) {
            return Err(ConfigError::DodgeChance(self.armor_dodge_chance));
        }
        if self.attacks_per_turn == 0 {
            return Err(ConfigError::ZeroAttacks);
        }
        let needed = self.starting_hand * 2;
        let available = self.deck_size();
        if needed > available {
            return Err(ConfigError::DeckTooSmall { needed, available });
        }
        if let (Some(a), Some(b)) = (self.hero_a, self.hero_b) {
            if a == b {
                return Err(ConfigError::DuplicateHero);
            }
        }
        Ok(())
    }
}

/// Builder for `MatchConfig`.
#[derive(Clone, Debug, Default)]
pub struct MatchConfigBuilder {
    config: MatchConfig,
}

impl MatchConfigBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn draw_per_turn(mut self, count: usize) -> Self {
        self.config.draw_per_turn = count;
        self
    }

    pub fn starting_hand(mut self, size: usize) -> Self {
        self.config.starting_hand = size;
        self
    }

    pub fn deck_copies(mut self, copies: usize) -> Self {
        self.config.deck_copies = copies;
        self
    }

    pub fn armor_dodge_chance(mut self, chance: f64) -> Self {
        self.config.armor_dodge_chance = chance;
        self
    }

    pub fn attacks_per_turn(mut self, count: u32) -> Self {
        self.config.attacks_per_turn = count;
        self
    }

    pub fn provider_timeout_ms(mut self, millis: u64) -> Self {
        self.config.provider_timeout_ms = millis;
        self
    }

    pub fn heroes(mut self, a: HeroId, b: HeroId) -> Self {
        self.config.hero_a = Some(a);
        self.config.hero_b = Some(b);
        self
    }

    pub fn hero_a(mut self, hero: HeroId) -> Self {
        self.config.hero_a = Some(hero);
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<MatchConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = MatchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.draw_per_turn, 2);
        assert_eq!(config.starting_hand, 4);
        assert_eq!(config.deck_size(), 60);
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::builder()
            .seed(9)
            .armor_dodge_chance(1.0)
            .heroes(HeroId::SunQuan, HeroId::CaoCao)
            .build()
            .unwrap();

        assert_eq!(config.seed, 9);
        assert_eq!(config.armor_dodge_chance, 1.0);
        assert_eq!(config.hero_b, Some(HeroId::CaoCao));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            MatchConfig::builder().draw_per_turn(0).build(),
            Err(ConfigError::ZeroDraw)
        );
        assert_eq!(
            MatchConfig::builder().armor_dodge_chance(1.5).build(),
            Err(ConfigError::DodgeChance(1.5))
        );
        assert_eq!(
            MatchConfig::builder().heroes(HeroId::LiuBei, HeroId::LiuBei).build(),
            Err(ConfigError::DuplicateHero)
        );
        assert!(matches!(
            MatchConfig::builder().deck_copies(1).starting_hand(40).build(),
            Err(ConfigError::DeckTooSmall { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{ "seed": 5, "hero_a": "DiaoChan" }"#).unwrap();
        assert_eq!(config.seed, 5);
        assert_eq!(config.hero_a, Some(HeroId::DiaoChan));
        assert_eq!(config.draw_per_turn, 2);
    }
}
