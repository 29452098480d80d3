//! Error types for table operations.
//!
//! Only unrecoverable conditions live here. Malformed console input
//! (non-numeric bets, out-of-range counts, unrecognized y/n answers) is
//! handled by re-prompting at the prompt site and never becomes an error
//! value.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The draw pile has no cards left.
    #[error("the deck is out of cards")]
    Exhausted,
}

/// Errors that can occur when drawing from the bot name pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    /// Every candidate name has already been handed out.
    #[error("no opponent names left in the pool")]
    Exhausted,
}

/// Fatal, session-ending failures.
#[derive(Debug, Error)]
pub enum GameError {
    /// The shared deck ran dry mid-deal.
    #[error("cannot deal: {0}")]
    Deck(#[from] DeckError),
    /// The name pool ran dry while seating opponents.
    #[error("cannot seat opponents: {0}")]
    Names(#[from] NameError),
    /// Console input or output failed (for example, stdin closed).
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
