// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Modular arithmetic primitives shared by every pitch-class collection.
//!
//! These functions operate on raw element lists and never sort or
//! deduplicate; the owning collection applies its own canonicalization
//! to the result.
//!
//! Every function expects `univ >= 1`. Collections only store checked
//! universes, so the transforms reached through them never see zero.

use super::{PitchClass, Universe};

/// Reduce any integer into `[0, univ)`
///
/// # Panics
///
/// Panics when `univ` is 0.
pub fn reduce(value: i64, univ: Universe) -> PitchClass {
    value.rem_euclid(univ as i64) as PitchClass
}

/// Add `t` to every element
pub fn transposed(pcs: &[PitchClass], t: i64, univ: Universe) -> Vec<PitchClass> {
    let t = reduce(t, univ) as u64;
    pcs.iter()
        .map(|&pc| ((pc as u64 + t) % univ as u64) as PitchClass)
        .collect()
}

/// Reflect every element around `axis`
pub fn inverted(pcs: &[PitchClass], axis: i64, univ: Universe) -> Vec<PitchClass> {
    let axis = reduce(axis, univ) as i64;
    pcs.iter().map(|&pc| reduce(axis - pc as i64, univ)).collect()
}

/// Multiply every element by `m`
///
/// `m` need not be coprime to the universe, so the mapping may collapse
/// distinct elements onto the same pitch class.
pub fn m_transformed(pcs: &[PitchClass], m: i64, univ: Universe) -> Vec<PitchClass> {
    let m = reduce(m, univ) as u64;
    pcs.iter()
        .map(|&pc| ((pc as u64 * m) % univ as u64) as PitchClass)
        .collect()
}

/// Reverse element order
pub fn retrograded(pcs: &[PitchClass]) -> Vec<PitchClass> {
    pcs.iter().rev().copied().collect()
}

/// Negate every element
pub fn negated(values: &[PitchClass], univ: Universe) -> Vec<PitchClass> {
    values.iter().map(|&v| reduce(-(v as i64), univ)).collect()
}

/// Greatest common divisor (`gcd(0, 0) == 0`)
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple (`lcm(0, x) == 0`)
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_negative() {
        assert_eq!(reduce(-1, 12), 11);
        assert_eq!(reduce(-13, 12), 11);
        assert_eq!(reduce(25, 12), 1);
        assert_eq!(reduce(5, 1), 0);
    }

    #[test]
    fn test_transposed_keeps_order() {
        assert_eq!(transposed(&[0, 1, 2], 1, 12), vec![1, 2, 3]);
        assert_eq!(transposed(&[0, 1, 2], 11, 12), vec![11, 0, 1]);
        assert_eq!(transposed(&[0, 1, 0], -1, 12), vec![11, 0, 11]);
    }

    #[test]
    fn test_transposed_large_offset() {
        assert_eq!(transposed(&[3], i64::MAX, 12), vec![10]);
        assert_eq!(transposed(&[3], i64::MIN, 7), vec![2]);
    }

    #[test]
    fn test_inverted() {
        assert_eq!(inverted(&[0, 1, 2], 0, 12), vec![0, 11, 10]);
        assert_eq!(inverted(&[0, 1, 2], 2, 12), vec![2, 1, 0]);
    }

    #[test]
    fn test_m_transformed() {
        assert_eq!(m_transformed(&[0, 1, 2], 5, 12), vec![0, 5, 10]);
        assert_eq!(m_transformed(&[0, 1, 2], 11, 12), vec![0, 11, 10]);
        // Non-coprime multiplier collapses elements
        assert_eq!(m_transformed(&[0, 3, 6, 9], 4, 12), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_retrograded() {
        assert_eq!(retrograded(&[0, 1, 2, 0]), vec![0, 2, 1, 0]);
        assert!(retrograded(&[]).is_empty());
    }

    #[test]
    fn test_negated() {
        assert_eq!(negated(&[1, 4], 12), vec![11, 8]);
        assert_eq!(negated(&[0, 6], 12), vec![0, 6]);
    }

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(0, 12), 12);
        assert_eq!(gcd(7, 12), 1);
        assert_eq!(lcm(12, 3), 12);
        assert_eq!(lcm(7, 12), 84);
        assert_eq!(lcm(0, 5), 0);
    }
}
