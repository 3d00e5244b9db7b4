use crate::deck::DECK_SIZE;
use crate::HAND_SIZE;

/// Default number of rows per side.
pub const DEFAULT_ROWS: usize = 5;

/// Most rows a single deck can fill for both sides.
pub const MAX_ROWS: usize = DECK_SIZE / (2 * HAND_SIZE);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("a match needs at least one row")]
    NoRows,
    #[error("too many rows: max {max}, got {rows}")]
    TooManyRows { rows: usize, max: usize },
}

/// Settings for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct MatchConfig {
    /// Rows per side.
    pub rows: usize,
    /// Deck shuffle seed; `None` shuffles from OS entropy.
    pub seed: Option<u64>,
}

impl MatchConfig {
    pub fn new(rows: usize) -> Self {
        Self { rows, seed: None }
    }

    /// Set a deterministic seed for a reproducible deal.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.rows {
            0 => Err(ConfigError::NoRows),
            rows if rows > MAX_ROWS => Err(ConfigError::TooManyRows { rows, max: MAX_ROWS }),
            _ => Ok(()),
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS)
    }
}
