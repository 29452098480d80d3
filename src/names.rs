//! The bot name pool.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::error::NameError;

/// Candidate opponent names. Handed out without replacement within a session.
const CANDIDATES: [&str; 25] = [
    "Alice Johnson",
    "Brian Martinez",
    "Cynthia Lee",
    "David Anderson",
    "Emily Rodriguez",
    "Frank Mitchell",
    "Grace Taylor",
    "Henry Wright",
    "Isabel Davis",
    "Jack Turner",
    "Katherine White",
    "Liam Harris",
    "Megan Brown",
    "Nathan Clark",
    "Olivia King",
    "Noah Brown",
    "Olivia Reed",
    "Peyton Smith",
    "Quinn Nelson",
    "Riley Baker",
    "Samantha Cox",
    "Tristan Walker",
    "Uma Hayes",
    "Violet Anderson",
    "William Foster",
];

/// A pool of opponent names, owned by the session.
///
/// Names are drawn uniformly at random and removed from the pool, so no two
/// bots in a session ever share one.
#[derive(Debug, Clone)]
pub struct NamePool {
    names: Vec<&'static str>,
}

impl NamePool {
    /// A fresh pool with every candidate available.
    #[must_use]
    pub fn new() -> Self {
        Self {
            names: CANDIDATES.to_vec(),
        }
    }

    /// Draws one name at random, removing it from the pool.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Exhausted`] once every candidate has been taken.
    pub fn take(&mut self, rng: &mut ChaCha8Rng) -> Result<&'static str, NameError> {
        if self.names.is_empty() {
            return Err(NameError::Exhausted);
        }
        let index = rng.random_range(0..self.names.len());
        Ok(self.names.swap_remove(index))
    }

    /// Number of names still available.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.names.len()
    }
}

impl Default for NamePool {
    fn default() -> Self {
        Self::new()
    }
}
