//! Greedy selection in ranked order.

use std::collections::VecDeque;

use rand::Rng;

use super::SelectionIterator;

/// Yields entries best-first, skipping those already taken.
///
/// # Examples
///
/// ```
/// use u_orienteering::selection::{Greedy, SelectionIterator};
///
/// let mut rng = rand::rng();
/// let mut g = Greedy::new(vec!['a', 'b', 'c']);
/// assert_eq!(g.next_with(&mut rng, |&c| c == 'a'), Some('b'));
/// assert_eq!(g.next_with(&mut rng, |_| false), Some('c'));
/// assert_eq!(g.next_with(&mut rng, |_| false), None);
/// ```
#[derive(Debug, Clone)]
pub struct Greedy<T> {
    ranked: VecDeque<T>,
    draws: usize,
}

impl<T> Greedy<T> {
    /// Wraps a best-first list.
    pub fn new(ranked: Vec<T>) -> Self {
        Self {
            ranked: ranked.into(),
            draws: 0,
        }
    }

    /// Entries not consumed yet.
    pub fn remaining(&self) -> usize {
        self.ranked.len()
    }
}

impl<T> SelectionIterator<T> for Greedy<T> {
    fn next_with<R, F>(&mut self, _rng: &mut R, mut taken: F) -> Option<T>
    where
        R: Rng + ?Sized,
        F: FnMut(&T) -> bool,
    {
        while let Some(item) = self.ranked.pop_front() {
            self.draws += 1;
            if !taken(&item) {
                return Some(item);
            }
        }
        None
    }

    fn draws(&self) -> usize {
        self.draws
    }

    fn is_exhausted(&self) -> bool {
        self.ranked.is_empty()
    }
}
