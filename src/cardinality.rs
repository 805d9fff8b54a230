//! Cardinality formulas and exact big-integer helpers.
//!
//! All quantities are `BigUint`: $12!$ already exceeds `u32` and $21!$
//! exceeds `u64`, so machine words are not an option for the permutation and
//! word families.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::spec::Shape;

const CHECK_INVARIANTS: bool = cfg!(any(debug_assertions, feature = "strict-invariants"));

#[inline]
pub(crate) fn big(n: usize) -> BigUint {
    BigUint::from(n)
}

/// $n!$
pub fn factorial(n: usize) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * big(k))
}

/// $\binom{n}{k}$, or zero when $k > n$.
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let k = k.min(n - k);
    let mut acc = BigUint::one();
    for i in 0..k {
        // acc = C(n, i) here, so the division is exact.
        acc = acc * big(n - i) / big(i + 1);
    }
    acc
}

/// $(\sum c_s)! / \prod c_s!$, the number of arrangements of a multiset.
pub fn multinomial(counts: &[usize]) -> BigUint {
    let n: usize = counts.iter().sum();
    counts.iter().fold(factorial(n), |acc, &c| {
        let (q, r) = acc.div_rem(&factorial(c));
        debug_assert!(r.is_zero(), "multinomial division left a remainder");
        q
    })
}

/// Divide `num` by `den`, reporting a remainder as an invariant violation.
///
/// The remainder is only inspected in debug builds or with the
/// `strict-invariants` feature.
pub(crate) fn exact_div(num: &BigUint, den: &BigUint, context: &'static str) -> Result<BigUint> {
    if CHECK_INVARIANTS {
        let (q, r) = num.div_rem(den);
        if !r.is_zero() {
            return Err(Error::ArithmeticInvariant(context));
        }
        Ok(q)
    } else {
        Ok(num / den)
    }
}

pub(crate) fn of_shape(shape: &Shape) -> BigUint {
    match shape {
        Shape::Radix { size, radix } => num_traits::pow(big(*radix), *size),
        Shape::Permutation { size } => factorial(*size),
        Shape::Combination { size, zero_count } => binomial(*size, *zero_count),
        Shape::Word { type_counts, .. } => multinomial(type_counts),
    }
}
