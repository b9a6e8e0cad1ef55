//! Duel configuration.
//!
//! The defaults reproduce the standard game: 100 HP, 50 MP, 5 opening
//! cards, 4 copies of each template, and a 1.5 second CPU pause.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::engine::DuelEngine;

/// Configuration for a duel.
///
/// ## Example
///
/// ```
/// use card_duel::DuelConfig;
///
/// let engine = DuelConfig::new()
///     .starting_hp(30)
///     .starting_mp(10)
///     .build(42);
///
/// assert_eq!(engine.deck_size(), 10); // 20 cards - 2x5 dealt
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelConfig {
    /// HP both combatants start with.
    pub starting_hp: i64,

    /// MP both combatants start with.
    pub starting_mp: i64,

    /// Cards dealt to each combatant before the first turn.
    pub starting_hand_size: usize,

    /// Copies of each template in the deck.
    pub copies_per_spec: usize,

    /// How long the presentation should wait before each `advance()` call.
    pub think_delay: Duration,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            starting_hp: 100,
            starting_mp: 50,
            starting_hand_size: 5,
            copies_per_spec: 4,
            think_delay: Duration::from_millis(1500),
        }
    }
}

impl DuelConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn starting_hp(mut self, hp: i64) -> Self {
        assert!(hp > 0, "Starting HP must be positive");
        self.starting_hp = hp;
        self
    }

    #[must_use]
    pub fn starting_mp(mut self, mp: i64) -> Self {
        assert!(mp >= 0, "Starting MP must be non-negative");
        self.starting_mp = mp;
        self
    }

    #[must_use]
    pub fn starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn copies_per_spec(mut self, copies: usize) -> Self {
        assert!(copies > 0, "Need at least one copy of each template");
        self.copies_per_spec = copies;
        self
    }

    #[must_use]
    pub fn think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// Build a fresh engine with this configuration and seed.
    #[must_use]
    pub fn build(self, seed: u64) -> DuelEngine {
        DuelEngine::with_config(self, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DuelConfig::default();

        assert_eq!(config.starting_hp, 100);
        assert_eq!(config.starting_mp, 50);
        assert_eq!(config.starting_hand_size, 5);
        assert_eq!(config.copies_per_spec, 4);
        assert_eq!(config.think_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_builder() {
        let config = DuelConfig::new()
            .starting_hp(30)
            .starting_mp(5)
            .starting_hand_size(3)
            .copies_per_spec(2)
            .think_delay(Duration::ZERO);

        assert_eq!(config.starting_hp, 30);
        assert_eq!(config.starting_mp, 5);
        assert_eq!(config.starting_hand_size, 3);
        assert_eq!(config.copies_per_spec, 2);
        assert_eq!(config.think_delay, Duration::ZERO);
    }

    #[test]
    #[should_panic(expected = "Starting HP must be positive")]
    fn test_zero_hp_panics() {
        let _ = DuelConfig::new().starting_hp(0);
    }

    #[test]
    #[should_panic(expected = "at least one copy")]
    fn test_zero_copies_panics() {
        let _ = DuelConfig::new().copies_per_spec(0);
    }

    #[test]
    fn test_serialization() {
        let config = DuelConfig::new().starting_hp(60);

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: DuelConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
