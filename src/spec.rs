//! Specs: immutable descriptors of a combinatorial family.
//!
//! A [`Spec`] pairs a [`Shape`] (the family and its parameters) with a
//! write-once cell holding the family's cardinality. Every object described
//! by a spec is a `Vec<usize>` of length [`Spec::size`].
//!
//! | Shape | Objects | Cardinality |
//! |---|---|---|
//! | `Radix` | digits in $[0, r)$ | $r^n$ |
//! | `Permutation` | permutations of $0..n$ | $n!$ |
//! | `Combination` | 0/1 strings with $z$ zeros | $\binom{n}{z}$ |
//! | `Word` | symbol $s$ repeated $c_s$ times | $n! / \prod_s c_s!$ |

use std::fmt;
use std::sync::OnceLock;

use num_bigint::BigUint;

use crate::cardinality;
use crate::error::{Error, Result};

/// The family a spec describes, with its shape parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Fixed-radix digit strings, least significant digit first.
    Radix {
        /// Number of positions.
        size: usize,
        /// Number of distinct digit values (at least 1).
        radix: usize,
    },
    /// Permutations of `0..size`.
    Permutation {
        /// Number of positions.
        size: usize,
    },
    /// Binary strings with a fixed number of zeros.
    Combination {
        /// Number of positions.
        size: usize,
        /// Number of positions holding `0`.
        zero_count: usize,
    },
    /// Multiset permutations over `0..type_counts.len()`.
    Word {
        /// Number of positions.
        size: usize,
        /// Multiplicity of each symbol; sums to `size`.
        type_counts: Vec<usize>,
    },
}

impl Shape {
    /// Number of positions in every object of this family.
    pub fn size(&self) -> usize {
        match *self {
            Shape::Radix { size, .. }
            | Shape::Permutation { size }
            | Shape::Combination { size, .. }
            | Shape::Word { size, .. } => size,
        }
    }

    /// Short name of the family.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Radix { .. } => "radix",
            Shape::Permutation { .. } => "permutation",
            Shape::Combination { .. } => "combination",
            Shape::Word { .. } => "word",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Radix { size, radix } => write!(f, "radix(size={size}, radix={radix})"),
            Shape::Permutation { size } => write!(f, "permutation(size={size})"),
            Shape::Combination { size, zero_count } => {
                write!(f, "combination(size={size}, zeros={zero_count})")
            }
            Shape::Word { size, type_counts } => {
                write!(f, "word(size={size}, counts={type_counts:?})")
            }
        }
    }
}

/// An immutable combinatorial spec with a lazily computed cardinality.
#[derive(Clone)]
pub struct Spec {
    shape: Shape,
    cardinality: OnceLock<BigUint>,
}

impl fmt::Debug for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spec")
            .field("shape", &self.shape)
            .field("cardinality", &self.cardinality.get())
            .finish()
    }
}

impl PartialEq for Spec {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape
    }
}

impl Eq for Spec {}

impl Spec {
    fn from_shape(shape: Shape) -> Self {
        log::debug!("built {shape} spec");
        Self {
            shape,
            cardinality: OnceLock::new(),
        }
    }

    /// Digit strings of length `size` over `[0, radix)`.
    pub fn radix(size: usize, radix: usize) -> Result<Self> {
        if radix < 1 {
            return Err(Error::InvalidSpec(format!(
                "radix must be at least 1, got {radix}"
            )));
        }
        Ok(Self::from_shape(Shape::Radix { size, radix }))
    }

    /// Permutations of `0..size`.
    pub fn permutation(size: usize) -> Self {
        Self::from_shape(Shape::Permutation { size })
    }

    /// Binary strings of length `size` with exactly `zero_count` zeros.
    pub fn combination(size: usize, zero_count: usize) -> Result<Self> {
        if zero_count > size {
            return Err(Error::InvalidSpec(format!(
                "zero count {zero_count} exceeds size {size}"
            )));
        }
        Ok(Self::from_shape(Shape::Combination { size, zero_count }))
    }

    /// Arrangements of `types` symbols where symbol `s` appears
    /// `type_counts[s]` times.
    pub fn word(size: usize, types: usize, type_counts: Vec<usize>) -> Result<Self> {
        if type_counts.len() != types {
            return Err(Error::InvalidSpec(format!(
                "expected {types} type counts, got {}",
                type_counts.len()
            )));
        }
        let total = type_counts
            .iter()
            .try_fold(0usize, |acc, &c| acc.checked_add(c))
            .ok_or_else(|| Error::InvalidSpec("type counts overflow".to_string()))?;
        if total != size {
            return Err(Error::InvalidSpec(format!(
                "type counts sum to {total}, expected size {size}"
            )));
        }
        Ok(Self::from_shape(Shape::Word { size, type_counts }))
    }

    /// Radix spec sized to `digits`, with an explicit radix.
    ///
    /// Fails if any digit is not below `radix`.
    pub fn radix_from_array(digits: &[usize], radix: usize) -> Result<Self> {
        if let Some(i) = digits.iter().position(|&d| d >= radix) {
            return Err(Error::InvalidSpec(format!(
                "digit {} at position {i} is not below radix {radix}",
                digits[i]
            )));
        }
        Self::radix(digits.len(), radix)
    }

    /// Permutation spec sized to `perm`.
    ///
    /// Unlike the other inference constructors this one rejects input that
    /// is not a permutation of `0..perm.len()`.
    pub fn permutation_from_array(perm: &[usize]) -> Result<Self> {
        let mut seen = vec![false; perm.len()];
        for (i, &v) in perm.iter().enumerate() {
            match seen.get_mut(v) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(Error::InvalidSpec(format!(
                        "value {v} repeated at position {i}"
                    )))
                }
                None => {
                    return Err(Error::InvalidSpec(format!(
                        "value {v} at position {i} is out of range for size {}",
                        perm.len()
                    )))
                }
            }
        }
        Ok(Self::permutation(perm.len()))
    }

    /// Combination spec inferred by counting zeros in a 0/1 array.
    pub fn combination_from_array(bits: &[usize]) -> Result<Self> {
        let mut zeros = 0;
        for (i, &b) in bits.iter().enumerate() {
            match b {
                0 => zeros += 1,
                1 => {}
                _ => {
                    return Err(Error::InvalidSpec(format!(
                        "entry {b} at position {i} is not 0 or 1"
                    )))
                }
            }
        }
        Self::combination(bits.len(), zeros)
    }

    /// Word spec inferred from an example object.
    ///
    /// `types` is one past the largest symbol; `type_counts` are the
    /// occurrence counts of each symbol.
    pub fn word_from_array(word: &[usize]) -> Result<Self> {
        let mut sorted = word.to_vec();
        sorted.sort_unstable();
        let types = match sorted.last() {
            Some(&m) => m.checked_add(1).ok_or_else(|| {
                Error::InvalidSpec(format!("symbol {m} leaves no room for a type count"))
            })?,
            None => 0,
        };
        let mut type_counts = Vec::new();
        type_counts.try_reserve_exact(types).map_err(|e| {
            Error::InvalidSpec(format!("cannot hold {types} type counts: {e}"))
        })?;
        type_counts.resize(types, 0usize);
        for &s in &sorted {
            type_counts[s] += 1;
        }
        Self::word(word.len(), types, type_counts)
    }

    /// The family and its parameters.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Number of positions in every object.
    pub fn size(&self) -> usize {
        self.shape.size()
    }

    /// Short name of the family.
    pub fn kind(&self) -> &'static str {
        self.shape.kind()
    }

    /// Number of distinct objects this spec describes.
    ///
    /// Computed on first use and cached for the life of the spec.
    pub fn cardinality(&self) -> &BigUint {
        self.cardinality
            .get_or_init(|| cardinality::of_shape(&self.shape))
    }

    /// Return true if `object` is a member of this spec's family.
    pub fn contains(&self, object: &[usize]) -> bool {
        if object.len() != self.size() {
            return false;
        }
        match &self.shape {
            Shape::Radix { radix, .. } => object.iter().all(|&d| d < *radix),
            Shape::Permutation { size } => {
                let mut seen = vec![false; *size];
                object.iter().all(|&v| match seen.get_mut(v) {
                    Some(slot) if !*slot => {
                        *slot = true;
                        true
                    }
                    _ => false,
                })
            }
            Shape::Combination { zero_count, .. } => {
                object.iter().all(|&b| b <= 1)
                    && object.iter().filter(|&&b| b == 0).count() == *zero_count
            }
            Shape::Word { type_counts, .. } => {
                let mut remaining = type_counts.clone();
                object.iter().all(|&s| match remaining.get_mut(s) {
                    Some(c) if *c > 0 => {
                        *c -= 1;
                        true
                    }
                    _ => false,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_reject_bad_parameters() {
        assert!(matches!(Spec::radix(3, 0), Err(Error::InvalidSpec(_))));
        assert!(matches!(Spec::combination(3, 4), Err(Error::InvalidSpec(_))));
        assert!(matches!(
            Spec::word(4, 2, vec![2, 1]),
            Err(Error::InvalidSpec(_))
        ));
        assert!(matches!(
            Spec::word(4, 3, vec![2, 2]),
            Err(Error::InvalidSpec(_))
        ));
        assert!(Spec::combination(3, 3).is_ok());
        assert!(Spec::radix(0, 1).is_ok());
    }

    #[test]
    fn test_word_from_array_counts_symbols() {
        let spec = Spec::word_from_array(&[2, 0, 2, 1, 2]).unwrap();
        assert_eq!(
            spec.shape(),
            &Shape::Word {
                size: 5,
                type_counts: vec![1, 1, 3]
            }
        );

        let empty = Spec::word_from_array(&[]).unwrap();
        assert_eq!(
            empty.shape(),
            &Shape::Word {
                size: 0,
                type_counts: vec![]
            }
        );
    }

    #[test]
    fn test_word_from_array_keeps_absent_symbols() {
        let spec = Spec::word_from_array(&[3, 0, 3]).unwrap();
        assert_eq!(
            spec.shape(),
            &Shape::Word {
                size: 3,
                type_counts: vec![1, 0, 0, 2]
            }
        );
    }

    #[test]
    fn test_word_from_array_rejects_max_symbol() {
        assert!(matches!(
            Spec::word_from_array(&[usize::MAX]),
            Err(Error::InvalidSpec(_))
        ));
        assert!(matches!(
            Spec::word_from_array(&[0, usize::MAX - 1]),
            Err(Error::InvalidSpec(_))
        ));
    }

    #[test]
    fn test_permutation_from_array_validates() {
        assert_eq!(
            Spec::permutation_from_array(&[2, 0, 1]).unwrap(),
            Spec::permutation(3)
        );
        assert!(Spec::permutation_from_array(&[0, 0, 1]).is_err());
        assert!(Spec::permutation_from_array(&[0, 3, 1]).is_err());
    }

    #[test]
    fn test_radix_and_combination_from_array() {
        assert_eq!(
            Spec::radix_from_array(&[1, 0, 2], 3).unwrap(),
            Spec::radix(3, 3).unwrap()
        );
        assert!(Spec::radix_from_array(&[1, 3], 3).is_err());
        assert_eq!(
            Spec::combination_from_array(&[1, 0, 0, 1, 0]).unwrap(),
            Spec::combination(5, 3).unwrap()
        );
        assert!(Spec::combination_from_array(&[1, 2]).is_err());
    }

    #[test]
    fn test_contains() {
        let word = Spec::word(4, 2, vec![2, 2]).unwrap();
        assert!(word.contains(&[0, 1, 1, 0]));
        assert!(!word.contains(&[0, 1, 1, 1]));
        assert!(!word.contains(&[0, 1, 1]));

        let perm = Spec::permutation(3);
        assert!(perm.contains(&[1, 2, 0]));
        assert!(!perm.contains(&[1, 1, 0]));

        let comb = Spec::combination(3, 1).unwrap();
        assert!(comb.contains(&[1, 0, 1]));
        assert!(!comb.contains(&[0, 0, 1]));
    }

    #[test]
    fn test_cardinality_is_cached() {
        let spec = Spec::permutation(5);
        let first = spec.cardinality() as *const BigUint;
        let second = spec.cardinality() as *const BigUint;
        assert_eq!(first, second);
        assert_eq!(*spec.cardinality(), BigUint::from(120u32));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_spec_is_send_sync() {
        assert_send_sync::<Spec>();
        assert_send_sync::<Shape>();
    }

    #[test]
    fn test_cardinality_written_once_across_threads() {
        let spec = Spec::word(12, 3, vec![4, 4, 4]).unwrap();
        let seen: Vec<(usize, BigUint)> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        let c = spec.cardinality();
                        (c as *const BigUint as usize, c.clone())
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        let stored = spec.cardinality() as *const BigUint as usize;
        for (ptr, value) in seen {
            assert_eq!(ptr, stored);
            assert_eq!(value, BigUint::from(34650u32));
        }
    }

    #[test]
    fn test_display() {
        let spec = Spec::combination(5, 2).unwrap();
        assert_eq!(spec.shape().to_string(), "combination(size=5, zeros=2)");
        assert_eq!(spec.kind(), "combination");
    }
}
