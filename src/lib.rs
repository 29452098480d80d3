//! A console blackjack table: one player against the house and a table of
//! scripted opponents.
//!
//! The crate provides a [`Session`] that owns the deck, the seated roster,
//! and the play-again loop, and a [`Round`] controller that drives a single
//! round from betting through payout. All interaction goes through the
//! [`Console`] trait, so the table can be driven from a terminal or from a
//! scripted harness.
//!
//! # Example
//!
//! ```no_run
//! use twenty_one::{Session, StdConsole, TableOptions};
//!
//! let mut session = Session::new(TableOptions::default(), StdConsole, 42);
//! let _ = session.run();
//! ```

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod names;
pub mod options;
pub mod participant;
pub mod render;
pub mod round;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use console::{Console, StdConsole};
pub use deck::Deck;
pub use error::{DeckError, GameError, NameError};
pub use names::NamePool;
pub use options::{RoundingMode, TableOptions};
pub use participant::{Participant, Variant};
pub use render::render_hand;
pub use round::{Outcome, PayoutEntry, Round, RoundPhase, RoundSummary};
pub use session::Session;
