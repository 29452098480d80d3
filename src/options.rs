//! Table configuration options.

use std::time::Duration;

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twenty_one::TableOptions;
///
/// let options = TableOptions::default()
///     .with_bet_limits(5, 200)
///     .with_starting_balance(250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Minimum bet per round.
    pub min_bet: usize,
    /// Maximum bet per round.
    pub max_bet: usize,
    /// Minimum number of bot opponents.
    pub min_bots: usize,
    /// Maximum number of bot opponents.
    pub max_bots: usize,
    /// Balance every participant starts with.
    pub starting_balance: usize,
    /// Rounding mode for fractional payouts.
    pub rounding: RoundingMode,
    /// Pause inserted between beats of play. Zero disables pacing.
    pub pace: Duration,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            min_bet: 2,
            max_bet: 500,
            min_bots: 1,
            max_bots: 4,
            starting_balance: 100,
            rounding: RoundingMode::Nearest,
            pace: Duration::from_millis(1500),
        }
    }
}

impl TableOptions {
    /// Sets the bet limits.
    ///
    /// # Example
    ///
    /// ```
    /// use twenty_one::TableOptions;
    ///
    /// let options = TableOptions::default().with_bet_limits(10, 100);
    /// assert_eq!(options.min_bet, 10);
    /// assert_eq!(options.max_bet, 100);
    /// ```
    #[must_use]
    pub const fn with_bet_limits(mut self, min: usize, max: usize) -> Self {
        self.min_bet = min;
        self.max_bet = max;
        self
    }

    /// Sets how many bot opponents may be seated.
    ///
    /// # Example
    ///
    /// ```
    /// use twenty_one::TableOptions;
    ///
    /// let options = TableOptions::default().with_bot_limits(2, 6);
    /// assert_eq!(options.min_bots, 2);
    /// assert_eq!(options.max_bots, 6);
    /// ```
    #[must_use]
    pub const fn with_bot_limits(mut self, min: usize, max: usize) -> Self {
        self.min_bots = min;
        self.max_bots = max;
        self
    }

    /// Sets the balance every participant starts with.
    ///
    /// # Example
    ///
    /// ```
    /// use twenty_one::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_balance(1000);
    /// assert_eq!(options.starting_balance, 1000);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the rounding mode for fractional payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use twenty_one::{RoundingMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_rounding(RoundingMode::Down);
    /// assert_eq!(options.rounding, RoundingMode::Down);
    /// ```
    #[must_use]
    pub const fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }

    /// Sets the pause inserted between beats of play.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use twenty_one::TableOptions;
    ///
    /// let options = TableOptions::default().with_pace(Duration::ZERO);
    /// assert_eq!(options.pace, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }
}
