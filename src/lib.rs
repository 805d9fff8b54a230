//! # Combinatorial Ranking
//!
//! *Exact bijections between integers and combinatorial objects.*
//!
//! ## Intuition First
//!
//! Picture every arrangement of a deck, every bit string with three zeros, or
//! every anagram of "BANANA" laid out in one long numbered row. Ranking tells
//! you the seat number of a given arrangement; unranking walks to a seat and
//! reads off who sits there. Neither needs to build the row: each is a single
//! pass over the object's positions.
//!
//! ## The Problem
//!
//! Exhaustive search and puzzle solvers want to store states compactly and
//! index tables by state:
//! - **Naive encodings** (one slot per position) waste space and leave holes:
//!   most bit patterns are not valid permutations.
//! - **Hash maps** are dense but give no ordering, no inverse, and cost memory
//!   per state.
//!
//! A ranking is a perfect, order-preserving hash onto $[0, N)$ where $N$ is
//! the number of valid objects, with a cheap inverse.
//!
//! ## Historical Context
//!
//! ```text
//! 1888  Laisant     Factorial number system for permutations
//! 1929  Lehmer      Lehmer code; ranking used for machine enumeration
//! 1964  Lehmer      "The machine tools of combinatorics"
//! 1968  Knuth       TAOCP vol. 4 drafts: combinatorial number system
//! 1978  Nijenhuis   Combinatorial Algorithms: rank/unrank as a standard toolkit
//! 2001  Myrvold     Linear-time permutation ranking
//! ```
//!
//! ## Mathematical Formulation
//!
//! Each family is a numeral system whose digits are read off the object:
//! - **Radix**: $r = \sum_i a_i \, b^i$ (little-endian, base $b$).
//! - **Permutation**: $r = \sum_i d_i \, (n - 1 - i)!$ with $d_i$ the Lehmer
//!   digit (count of later, smaller values).
//! - **Combination**: $r = \sum_{j} \binom{p_j}{j + 1}$ over zero positions
//!   $p_0 < p_1 < \dots$ (the combinatorial number system).
//! - **Word**: a mixed-radix system over the multinomial coefficients of the
//!   remaining multiset.
//!
//! ## Complexity Analysis
//!
//! - **Radix, Word**: $O(n)$ big-integer operations.
//! - **Permutation**: $O(n \log n)$, a Fenwick tree replaces the $O(n^2)$
//!   inversion count.
//! - **Combination**: $O(n \cdot z)$ from recomputing binomials.
//!
//! ## What Could Go Wrong
//!
//! 1. **Overflow**: $21!$ does not fit in a `u64`. All ranks are `BigUint`.
//! 2. **Non-members**: ranking an object outside the family. Entries are
//!    range-checked during the scan; use [`Spec::contains`] for a full test.
//! 3. **Huge spaces**: [`Spec::enumerate_all`] is finite but may be
//!    astronomically long.
//!
//! ## Usage
//!
//! ```
//! use combrank::Spec;
//! use num_bigint::BigUint;
//!
//! let spec = Spec::permutation(4);
//! assert_eq!(*spec.cardinality(), BigUint::from(24u32));
//! assert_eq!(spec.rank(&[3, 2, 1, 0]).unwrap(), BigUint::from(23u32));
//! assert_eq!(spec.unrank_u64(0).unwrap(), vec![0, 1, 2, 3]);
//! ```
//!
//! ## References
//!
//! - Lehmer, D. H. (1960). "Teaching combinatorial tricks to a computer."
//! - Knuth, D. E. (2011). *The Art of Computer Programming*, Vol. 4A, §7.2.1.
//! - Myrvold, W., & Ruskey, F. (2001). "Ranking and unranking permutations
//!   in linear time."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cardinality;
pub mod enumerate;
pub mod error;
mod fenwick;
mod rank;
pub mod spec;
mod unrank;

pub use cardinality::{binomial, factorial, multinomial};
pub use enumerate::Enumerate;
pub use error::{Error, Result};
pub use spec::{Shape, Spec};
