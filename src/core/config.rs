//! Battle configuration.
//!
//! Every tunable rule constant lives in `BattleConfig`:
//! - deck size and starting lives
//! - damage variance bounds
//! - placeholder combatant stats used to pad short rosters
//! - roster fetching policy (mock fallback, roster cap)
//!
//! Configs can be built in code with the `with_*` builders or loaded
//! from TOML. Missing keys take their default values.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Name given to placeholder combatants.
pub const PLACEHOLDER_NAME: &str = "Recruiting...";

/// Flavor text given to placeholder combatants.
pub const PLACEHOLDER_FLAVOR: &str = "A promising newcomer, still on the way.";

/// Stats of the synthetic combatants that pad a short roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    /// Display name; also how placeholders are told apart from real cards.
    pub name: String,
    /// Hit points.
    pub max_hp: u32,
    /// Base attack.
    pub attack: u32,
    /// Flavor text.
    pub flavor: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            name: PLACEHOLDER_NAME.to_string(),
            max_hp: 600,
            attack: 150,
            flavor: PLACEHOLDER_FLAVOR.to_string(),
        }
    }
}

/// How rosters are fetched from a card pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Substitute a generated roster when the pool lookup fails.
    pub mock_fallback: bool,
    /// Size of a generated fallback roster.
    pub mock_size: usize,
    /// Maximum number of cards taken from a pool for one side.
    pub max_roster: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            mock_fallback: false,
            mock_size: 5,
            max_roster: 20,
        }
    }
}

/// Battle rule configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Combatants per deck (active plus bench).
    pub deck_size: usize,
    /// Lives each side starts with.
    pub starting_lives: u32,
    /// Lower bound of the damage multiplier.
    pub variance_low: f64,
    /// Upper bound of the damage multiplier.
    pub variance_high: f64,
    /// Placeholder stats.
    pub placeholder: PlaceholderConfig,
    /// Roster fetching policy.
    pub roster: RosterConfig,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            deck_size: 5,
            starting_lives: 3,
            variance_low: 0.9,
            variance_high: 1.1,
            placeholder: PlaceholderConfig::default(),
            roster: RosterConfig::default(),
        }
    }
}

impl BattleConfig {
    /// Parse and validate a TOML config.
    ///
    /// ```
    /// use circle_battle::core::BattleConfig;
    ///
    /// let config = BattleConfig::from_toml_str("starting_lives = 5").unwrap();
    /// assert_eq!(config.starting_lives, 5);
    /// assert_eq!(config.deck_size, 5);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: BattleConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the rule constants for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deck_size == 0 {
            return Err(ConfigError::EmptyDeck);
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        let finite = self.variance_low.is_finite() && self.variance_high.is_finite();
        if !finite || self.variance_low < 0.0 || self.variance_low > self.variance_high {
            return Err(ConfigError::InvalidVariance {
                low: self.variance_low,
                high: self.variance_high,
            });
        }
        Ok(())
    }

    /// Set the deck size.
    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    /// Set the starting lives.
    #[must_use]
    pub fn with_starting_lives(mut self, lives: u32) -> Self {
        self.starting_lives = lives;
        self
    }

    /// Set the damage multiplier bounds.
    #[must_use]
    pub fn with_variance(mut self, low: f64, high: f64) -> Self {
        self.variance_low = low;
        self.variance_high = high;
        self
    }

    /// Enable or disable mock roster fallback.
    #[must_use]
    pub fn with_mock_fallback(mut self, enabled: bool) -> Self {
        self.roster.mock_fallback = enabled;
        self
    }
}
