//! Unranking: integer to object.
//!
//! The exact inverse of [`Spec::rank`]. Every algorithm threads a single
//! state tuple (the remaining index, and for words the running count and
//! remaining multiplicities) through positions once, writing a freshly
//! allocated object.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::ToPrimitive;

use crate::cardinality::{big, binomial, exact_div};
use crate::error::{Error, Result};
use crate::fenwick::Fenwick;
use crate::spec::{Shape, Spec};

impl Spec {
    /// Return the object at `index`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] unless `index < cardinality`.
    pub fn unrank(&self, index: &BigUint) -> Result<Vec<usize>> {
        let cardinality = self.cardinality();
        if index >= cardinality {
            return Err(Error::IndexOutOfRange {
                index: index.clone(),
                cardinality: cardinality.clone(),
            });
        }
        let size = self.size();
        match self.shape() {
            Shape::Radix { radix, .. } => unrank_radix(index, size, *radix),
            Shape::Permutation { .. } => unrank_permutation(index, size),
            Shape::Combination { zero_count, .. } => {
                Ok(unrank_combination(index, size, *zero_count))
            }
            Shape::Word { type_counts, .. } => {
                unrank_word(index, size, type_counts, cardinality)
            }
        }
    }

    /// Convenience wrapper for indices that fit in a `u64`.
    pub fn unrank_u64(&self, index: u64) -> Result<Vec<usize>> {
        self.unrank(&BigUint::from(index))
    }
}

/// Narrow a quotient remainder that is known to be below a `usize` bound.
fn small(n: &BigUint) -> Result<usize> {
    n.to_usize()
        .ok_or(Error::ArithmeticInvariant("digit does not fit in usize"))
}

fn unrank_radix(index: &BigUint, size: usize, radix: usize) -> Result<Vec<usize>> {
    let base = big(radix);
    let mut idx = index.clone();
    let mut digits = Vec::with_capacity(size);
    for _ in 0..size {
        let (q, r) = idx.div_rem(&base);
        digits.push(small(&r)?);
        idx = q;
    }
    Ok(digits)
}

fn unrank_permutation(index: &BigUint, size: usize) -> Result<Vec<usize>> {
    // Lehmer digits, last position first; the final digit is always 0.
    let mut lehmer = vec![0usize; size];
    let mut idx = index.clone();
    for i in (0..size.saturating_sub(1)).rev() {
        let (q, r) = idx.div_rem(&big(size - i));
        lehmer[i] = small(&r)?;
        idx = q;
    }

    // Each digit picks the digit-th smallest value not used earlier.
    let mut unused = Fenwick::full(size);
    lehmer
        .into_iter()
        .map(|d| -> Result<usize> {
            let v = unused
                .select1(d)
                .ok_or(Error::ArithmeticInvariant("lehmer digit exceeds unused values"))?;
            unused.remove(v);
            Ok(v)
        })
        .collect()
}

fn unrank_combination(index: &BigUint, size: usize, zero_count: usize) -> Vec<usize> {
    let mut bits = vec![1usize; size];
    let mut idx = index.clone();
    let mut z = zero_count;
    for i in (0..size).rev() {
        if z == 0 {
            break;
        }
        let tmp = binomial(i, z);
        if idx >= tmp {
            idx -= tmp;
            bits[i] = 0;
            z -= 1;
        }
    }
    bits
}

fn unrank_word(
    index: &BigUint,
    size: usize,
    type_counts: &[usize],
    cardinality: &BigUint,
) -> Result<Vec<usize>> {
    let mut remaining = type_counts.to_vec();
    let mut count = cardinality.clone();
    let mut idx = index.clone();
    let mut word = Vec::with_capacity(size);

    for p in 0..size {
        let len = big(size - p);
        let selector = &idx * &len / &count;

        let mut offset = 0usize;
        let mut chosen = None;
        for (s, &c) in remaining.iter().enumerate() {
            if selector < big(offset + c) {
                chosen = Some(s);
                break;
            }
            offset += c;
        }
        let s = chosen.ok_or(Error::ArithmeticInvariant("word selector past last symbol"))?;

        idx -= exact_div(&(&count * big(offset)), &len, "word unrank offset")?;
        count = exact_div(&(&count * big(remaining[s])), &len, "word unrank count")?;
        remaining[s] -= 1;
        word.push(s);
    }
    Ok(word)
}
