//! Ranking: object to integer.
//!
//! Each family is ranked in one left-to-right (or right-to-left) scan:
//!
//! - **Radix**: Horner evaluation, least significant digit at position 0.
//! - **Permutation**: factorial number system over the Lehmer code. The
//!   Lehmer digit at position $i$ is the number of later values smaller than
//!   `perm[i]`, which equals `perm[i]` minus the number of earlier values
//!   smaller than it; a Fenwick tree answers the latter in $O(\log n)$.
//! - **Combination**: combinatorial number system, summing
//!   $\binom{i}{z}$ for each zero at position $i$ while $z$ counts down.
//! - **Word**: mixed-radix multinomial system. With $C$ the number of
//!   arrangements of the remaining multiset and $L$ the remaining length,
//!   placing symbol $s$ skips $C \cdot \text{offset}(s) / L$ ranks, where
//!   $\text{offset}(s)$ is the remaining count of symbols below $s$.
//!
//! Entries are range-checked as they are scanned; no separate validation pass
//! is made.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::cardinality::{big, binomial, exact_div};
use crate::error::{Error, Result};
use crate::fenwick::Fenwick;
use crate::spec::{Shape, Spec};

impl Spec {
    /// Return the index of `object` in `[0, cardinality)`.
    ///
    /// Entries are checked as they are scanned and a non-member fails with
    /// [`Error::InvalidObject`]. Words are only partially checked: the scan
    /// stops once the remaining arrangement is forced, so a bad tail (e.g.
    /// `[0, 0, 0, 1]` for counts `[2, 2]`) still ranks. Use
    /// [`Spec::contains`] for a full membership test.
    pub fn rank(&self, object: &[usize]) -> Result<BigUint> {
        if object.len() != self.size() {
            return Err(Error::InvalidObject(format!(
                "expected length {}, got {}",
                self.size(),
                object.len()
            )));
        }
        match self.shape() {
            Shape::Radix { radix, .. } => rank_radix(object, *radix),
            Shape::Permutation { .. } => rank_permutation(object),
            Shape::Combination { zero_count, .. } => rank_combination(object, *zero_count),
            Shape::Word { type_counts, .. } => {
                rank_word(object, type_counts, self.cardinality())
            }
        }
    }
}

fn rank_radix(digits: &[usize], radix: usize) -> Result<BigUint> {
    let base = big(radix);
    digits.iter().enumerate().rev().try_fold(BigUint::zero(), |acc, (i, &d)| {
        if d >= radix {
            return Err(Error::InvalidObject(format!(
                "digit {d} at position {i} is not below radix {radix}"
            )));
        }
        Ok(acc * &base + big(d))
    })
}

fn rank_permutation(perm: &[usize]) -> Result<BigUint> {
    let n = perm.len();
    let mut seen = Fenwick::new(n);
    let mut rank = BigUint::zero();
    for (i, &v) in perm.iter().enumerate() {
        if v >= n {
            return Err(Error::InvalidObject(format!(
                "value {v} at position {i} is out of range for size {n}"
            )));
        }
        if seen.get(v) {
            return Err(Error::InvalidObject(format!(
                "value {v} repeated at position {i}"
            )));
        }
        // Smaller values not yet seen are exactly those that appear later.
        let digit = v - seen.rank1(v);
        seen.insert(v);
        if i + 1 < n {
            rank = rank * big(n - i) + big(digit);
        }
    }
    Ok(rank)
}

fn rank_combination(bits: &[usize], zero_count: usize) -> Result<BigUint> {
    let mut z = zero_count;
    let mut rank = BigUint::zero();
    for (i, &b) in bits.iter().enumerate().rev() {
        match b {
            0 if z == 0 => {
                return Err(Error::InvalidObject(format!(
                    "more than {zero_count} zeros"
                )))
            }
            0 => {
                rank += binomial(i, z);
                z -= 1;
            }
            1 => {}
            _ => {
                return Err(Error::InvalidObject(format!(
                    "entry {b} at position {i} is not 0 or 1"
                )))
            }
        }
    }
    if z != 0 {
        return Err(Error::InvalidObject(format!(
            "fewer than {zero_count} zeros"
        )));
    }
    Ok(rank)
}

fn rank_word(word: &[usize], type_counts: &[usize], cardinality: &BigUint) -> Result<BigUint> {
    let size = word.len();
    let mut remaining = type_counts.to_vec();
    let mut count = cardinality.clone();
    let mut rank = BigUint::zero();

    for (p, &s) in word.iter().enumerate() {
        if count <= BigUint::one() {
            break;
        }
        let available = remaining.get(s).copied().unwrap_or(0);
        if available == 0 {
            return Err(Error::InvalidObject(format!(
                "symbol {s} at position {p} exceeds its multiplicity"
            )));
        }
        let offset: usize = remaining[..s].iter().sum();
        let len = big(size - p);
        rank += exact_div(&(&count * big(offset)), &len, "word rank offset")?;
        count = exact_div(&(&count * big(available)), &len, "word rank count")?;
        remaining[s] -= 1;
    }
    Ok(rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_radix() {
        let spec = Spec::radix(3, 2).unwrap();
        assert_eq!(spec.rank(&[0, 0, 0]).unwrap(), big(0));
        assert_eq!(spec.rank(&[1, 0, 0]).unwrap(), big(1));
        assert_eq!(spec.rank(&[0, 1, 1]).unwrap(), big(6));
        assert_eq!(spec.rank(&[1, 1, 1]).unwrap(), big(7));
        assert!(spec.rank(&[2, 0, 0]).is_err());
    }

    #[test]
    fn test_rank_permutation() {
        let spec = Spec::permutation(4);
        assert_eq!(spec.rank(&[0, 1, 2, 3]).unwrap(), big(0));
        assert_eq!(spec.rank(&[0, 1, 3, 2]).unwrap(), big(1));
        assert_eq!(spec.rank(&[1, 0, 2, 3]).unwrap(), big(6));
        assert_eq!(spec.rank(&[3, 2, 1, 0]).unwrap(), big(23));
        assert!(spec.rank(&[0, 1, 1, 3]).is_err());
        assert!(spec.rank(&[0, 1, 4, 3]).is_err());
        assert!(spec.rank(&[0, 1, 2]).is_err());
    }

    #[test]
    fn test_rank_combination() {
        let spec = Spec::combination(4, 2).unwrap();
        // Zeros at {0, 1} rank lowest, zeros at {2, 3} rank highest.
        assert_eq!(spec.rank(&[0, 0, 1, 1]).unwrap(), big(0));
        assert_eq!(spec.rank(&[1, 1, 0, 0]).unwrap(), big(5));
        assert_eq!(spec.rank(&[0, 1, 0, 1]).unwrap(), big(1));
        assert!(spec.rank(&[0, 0, 0, 1]).is_err());
        assert!(spec.rank(&[0, 1, 1, 1]).is_err());
        assert!(spec.rank(&[0, 0, 2, 1]).is_err());
    }

    #[test]
    fn test_rank_word() {
        let spec = Spec::word(4, 2, vec![2, 2]).unwrap();
        assert_eq!(spec.rank(&[0, 0, 1, 1]).unwrap(), big(0));
        assert_eq!(spec.rank(&[1, 1, 0, 0]).unwrap(), big(5));
        assert!(spec.rank(&[2, 0, 1, 1]).is_err());

        let spec = Spec::word(4, 3, vec![1, 1, 2]).unwrap();
        assert!(spec.rank(&[0, 0, 2, 2]).is_err());
    }

    #[test]
    fn test_rank_word_stops_once_forced() {
        // After [0, 0] only the ones remain, so the tail is not inspected.
        let spec = Spec::word(4, 2, vec![2, 2]).unwrap();
        assert_eq!(spec.rank(&[0, 0, 0, 1]).unwrap(), big(0));
        assert!(!spec.contains(&[0, 0, 0, 1]));
    }

    #[test]
    fn test_rank_word_matches_permutation_when_counts_are_one() {
        let word = Spec::word(4, 4, vec![1, 1, 1, 1]).unwrap();
        let perm = Spec::permutation(4);
        for object in [[0, 1, 2, 3], [2, 0, 3, 1], [3, 2, 1, 0], [1, 3, 0, 2]] {
            assert_eq!(word.rank(&object).unwrap(), perm.rank(&object).unwrap());
        }
    }

    #[test]
    fn test_rank_empty_objects() {
        assert_eq!(Spec::radix(0, 3).unwrap().rank(&[]).unwrap(), big(0));
        assert_eq!(Spec::permutation(0).rank(&[]).unwrap(), big(0));
        assert_eq!(Spec::combination(0, 0).unwrap().rank(&[]).unwrap(), big(0));
        assert_eq!(Spec::word(0, 0, vec![]).unwrap().rank(&[]).unwrap(), big(0));
    }
}
