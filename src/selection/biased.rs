//! Biased-randomized selection (BRA).
//!
//! Each draw picks position
//!
//! ```text
//! idx = floor(ln(U) / ln(1 − β)) mod remaining,   U ~ Uniform(0, 1]
//! ```
//!
//! from the remaining list, which follows a quasi-geometric distribution:
//! β close to 1 almost always picks the head, β close to 0 approaches a
//! uniform random permutation.
//!
//! # Reference
//!
//! Grasas, A., Juan, A.A., Faulin, J., de Armas, J. & Ramalhinho, H. (2017).
//! "Biased randomization of heuristics using skewed probability
//! distributions", *Computers & Industrial Engineering* 110, 216-228.

use rand::Rng;

use super::{check_beta, SelectionIterator};
use crate::SolverError;

/// Draws a quasi-geometric position in `0..len`.
///
/// # Panics
///
/// Panics if `len` is zero.
pub fn bra_index<R: Rng + ?Sized>(len: usize, beta: f64, rng: &mut R) -> usize {
    assert!(len > 0, "cannot draw from an empty list");
    // 1 - [0, 1) keeps U away from zero
    let u: f64 = 1.0 - rng.random::<f64>();
    let k = (u.ln() / (1.0 - beta).ln()).floor();
    // float → int casts saturate, so huge or NaN ratios still land in range
    (k as usize) % len
}

/// Biased-randomized iterator over a best-first list.
///
/// Runs exactly `L` draws for a list of length `L`. A draw removes the
/// chosen entry; entries reported as taken are dropped without being
/// yielded, so fewer than `L` entries may come out.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_orienteering::selection::{BiasedRandomized, SelectionIterator};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let mut bra = BiasedRandomized::new(vec![1, 2, 3, 4], 0.3).unwrap();
/// let mut out = Vec::new();
/// while let Some(v) = bra.next_with(&mut rng, |_| false) {
///     out.push(v);
/// }
/// out.sort();
/// assert_eq!(out, vec![1, 2, 3, 4]);
/// assert_eq!(bra.draws(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct BiasedRandomized<T> {
    options: Vec<T>,
    beta: f64,
    draws: usize,
}

impl<T> BiasedRandomized<T> {
    /// Wraps a best-first list; `beta` must lie in (0, 1).
    pub fn new(ranked: Vec<T>, beta: f64) -> Result<Self, SolverError> {
        check_beta(beta)?;
        Ok(Self {
            options: ranked,
            beta,
            draws: 0,
        })
    }

    /// The bias parameter.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Draws left before exhaustion.
    pub fn remaining(&self) -> usize {
        self.options.len()
    }
}

impl<T> SelectionIterator<T> for BiasedRandomized<T> {
    fn next_with<R, F>(&mut self, rng: &mut R, mut taken: F) -> Option<T>
    where
        R: Rng + ?Sized,
        F: FnMut(&T) -> bool,
    {
        while !self.options.is_empty() {
            let idx = bra_index(self.options.len(), self.beta, rng);
            let item = self.options.remove(idx);
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
        self.options.is_empty()
    }
}
