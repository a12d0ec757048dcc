//! In-memory vote tally.
//!
//! One `TallyStore` is built at startup and shared between request tasks through
//! `Arc`. The option set is fixed at construction; counts only ever go up.

use std::sync::{Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;
use log::debug;

/// Labels offered when no other set is supplied.
pub const DEFAULT_OPTIONS: [&str; 3] = ["Absolutely, yes!", "Not really", "Maybe, still exploring"];

/// Ordered mapping from option label to vote count.
pub type Tally = IndexMap<String, u64>;

pub struct TallyStore {
    options: Vec<String>,
    counts: Mutex<Tally>,
}

impl Default for TallyStore {
    fn default() -> Self {
        Self::new(DEFAULT_OPTIONS)
    }
}

impl TallyStore {
    /// Build a store over `options`, every count starting at zero.
    /// Duplicate labels collapse into the first occurrence.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = Tally::new();
        for option in options {
            counts.entry(option.into()).or_insert(0);
        }
        let options = counts.keys().cloned().collect();

        Self {
            options,
            counts: Mutex::new(counts),
        }
    }

    /// Add one vote for `option`. Labels outside the option set are ignored.
    ///
    /// Returns whether the vote was counted.
    pub fn record(&self, option: &str) -> bool {
        let mut counts = self.lock();
        match counts.get_mut(option) {
            Some(count) => {
                *count += 1;
                true
            }
            None => {
                debug!("Ignoring vote for unknown option {:?}", option);
                false
            }
        }
    }

    /// Copy of the current counts, taken under the lock.
    pub fn snapshot(&self) -> Tally {
        self.lock().clone()
    }

    /// The valid labels, in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    // Counts stay consistent even if a holder panicked: the only mutation is a
    // single integer increment.
    fn lock(&self) -> MutexGuard<'_, Tally> {
        self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
