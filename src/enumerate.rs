//! Exhaustive enumeration of a spec's objects in rank order.
//!
//! Intended for validation and exhaustive search over small spaces: the
//! iterator unranks every index, so walking a space of $N$ objects costs $N$
//! independent unrank calls.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{Error, Result};
use crate::spec::Spec;

/// Iterator over `(rank, object)` pairs of a spec.
///
/// Finite and restartable: clone it (or call [`Spec::enumerate_all`] again) to
/// walk the same range from the start.
#[derive(Debug, Clone)]
pub struct Enumerate<'a> {
    spec: &'a Spec,
    next: BigUint,
    end: BigUint,
}

impl Spec {
    /// Enumerate every object, ranks `0..cardinality` in order.
    pub fn enumerate_all(&self) -> Enumerate<'_> {
        self.enumerate_range(BigUint::zero(), self.cardinality().clone())
    }

    /// Enumerate ranks `start..end`, with `end` clamped to the cardinality.
    pub fn enumerate_range(&self, start: BigUint, end: BigUint) -> Enumerate<'_> {
        let end = end.min(self.cardinality().clone());
        Enumerate {
            spec: self,
            next: start,
            end,
        }
    }

    /// Unrank every index and check that it ranks back to itself.
    ///
    /// Returns the number of objects checked, or the first
    /// [`Error::RankMismatch`].
    pub fn verify_all(&self) -> Result<BigUint> {
        let mut checked = BigUint::zero();
        for item in self.enumerate_all() {
            let (expected, object) = item?;
            let actual = self.rank(&object)?;
            if actual != expected {
                log::warn!(
                    "{} rank mismatch: {expected} unranked to {object:?}, re-ranked to {actual}",
                    self.shape()
                );
                return Err(Error::RankMismatch { expected, actual });
            }
            checked += BigUint::one();
        }
        log::debug!("verified {checked} objects of {}", self.shape());
        Ok(checked)
    }
}

impl Iterator for Enumerate<'_> {
    type Item = Result<(BigUint, Vec<usize>)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let rank = self.next.clone();
        self.next += BigUint::one();
        log::trace!("enumerating rank {rank} of {}", self.spec.shape());
        Some(self.spec.unrank(&rank).map(|object| (rank, object)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next >= self.end {
            return (0, Some(0));
        }
        match (&self.end - &self.next).to_usize() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}
