//! Selection iterators over ranked preference lists.
//!
//! - [`Greedy`] — yields entries in ranked order
//! - [`BiasedRandomized`] — quasi-geometric draws favoring top-ranked entries
//!
//! Both consume a list sorted best-first and hand out one entry per request,
//! skipping entries the caller reports as already taken. They are
//! interchangeable through [`SelectionIterator`], and [`SelectionStrategy`]
//! picks one at runtime.

mod biased;
mod greedy;

pub use biased::{bra_index, BiasedRandomized};
pub use greedy::Greedy;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::SolverError;

/// A one-shot producer of entries from a ranked list.
pub trait SelectionIterator<T> {
    /// Returns the next entry for which `taken` is `false`, or `None` once
    /// the iterator is exhausted.
    fn next_with<R, F>(&mut self, rng: &mut R, taken: F) -> Option<T>
    where
        R: Rng + ?Sized,
        F: FnMut(&T) -> bool;

    /// Number of entries consumed so far (yielded and skipped).
    fn draws(&self) -> usize;

    /// Returns `true` once no further entry can be produced.
    fn is_exhausted(&self) -> bool;
}

/// Which selection iterator to wrap a ranked list in.
///
/// # Examples
///
/// ```
/// use u_orienteering::selection::{SelectionIterator, SelectionStrategy};
///
/// let mut rng = rand::rng();
/// let mut sel = SelectionStrategy::Greedy.build(vec![3, 1, 2]).unwrap();
/// assert_eq!(sel.next_with(&mut rng, |&n| n == 3), Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Ranked order.
    #[default]
    Greedy,
    /// Biased randomization with the given `beta` in (0, 1).
    BiasedRandomized {
        /// Quasi-geometric parameter; values near 1 behave greedily.
        beta: f64,
    },
}

impl SelectionStrategy {
    /// Checks the strategy parameters.
    pub fn validate(&self) -> Result<(), SolverError> {
        match *self {
            Self::Greedy => Ok(()),
            Self::BiasedRandomized { beta } => check_beta(beta),
        }
    }

    /// Wraps `ranked` (best first) in the chosen iterator.
    pub fn build<T>(self, ranked: Vec<T>) -> Result<Selector<T>, SolverError> {
        Ok(match self {
            Self::Greedy => Selector::Greedy(Greedy::new(ranked)),
            Self::BiasedRandomized { beta } => {
                Selector::BiasedRandomized(BiasedRandomized::new(ranked, beta)?)
            }
        })
    }
}

/// Runtime choice between the selection iterators.
#[derive(Debug, Clone)]
pub enum Selector<T> {
    /// Ranked-order selection.
    Greedy(Greedy<T>),
    /// Biased-randomized selection.
    BiasedRandomized(BiasedRandomized<T>),
}

impl<T> SelectionIterator<T> for Selector<T> {
    fn next_with<R, F>(&mut self, rng: &mut R, taken: F) -> Option<T>
    where
        R: Rng + ?Sized,
        F: FnMut(&T) -> bool,
    {
        match self {
            Self::Greedy(s) => s.next_with(rng, taken),
            Self::BiasedRandomized(s) => s.next_with(rng, taken),
        }
    }

    fn draws(&self) -> usize {
        match self {
            Self::Greedy(s) => s.draws(),
            Self::BiasedRandomized(s) => s.draws(),
        }
    }

    fn is_exhausted(&self) -> bool {
        match self {
            Self::Greedy(s) => s.is_exhausted(),
            Self::BiasedRandomized(s) => s.is_exhausted(),
        }
    }
}

pub(crate) fn check_beta(beta: f64) -> Result<(), SolverError> {
    if beta > 0.0 && beta < 1.0 {
        Ok(())
    } else {
        Err(SolverError::InvalidParameter(format!(
            "beta must lie in (0, 1), got {beta}"
        )))
    }
}
