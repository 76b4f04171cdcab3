// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch-class sets.
//!
//! A set is sorted and free of duplicates. Sets in different universes
//! compare by their images in the least common multiple of the two
//! universes; that comparison is lexicographic over the sorted elements,
//! not subset inclusion.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::collection::{
    checked_universe, from_canonical, from_parts, reduce_all, Parts, PitchClasses, RawCollection,
    Storage,
};
use super::input::parse_pitch_classes;
use super::normalize::common_images;
use super::{modular, IntervalVector, PitchClass, RescaleMode, Universe, DEFAULT_UNIVERSE};
use crate::error::{Result, TheoryError};

/// Sorted, deduplicated pitch classes in a fixed universe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawCollection", into = "RawCollection")]
pub struct PitchClassSet {
    univ: Universe,
    pcs: Vec<PitchClass>,
}

impl Storage for PitchClassSet {
    fn canonicalize(mut pcs: Vec<PitchClass>) -> Vec<PitchClass> {
        pcs.sort_unstable();
        pcs.dedup();
        pcs
    }

    fn from_canonical(parts: Parts) -> Self {
        Self {
            univ: parts.univ,
            pcs: parts.pcs,
        }
    }
}

impl PitchClasses for PitchClassSet {
    fn univ(&self) -> Universe {
        self.univ
    }

    fn pcs(&self) -> &[PitchClass] {
        &self.pcs
    }
}

impl PitchClassSet {
    /// Create a set in the default universe
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        from_parts(DEFAULT_UNIVERSE, reduce_all(values, DEFAULT_UNIVERSE))
    }

    /// Create a set in universe `univ`
    pub fn with_univ<I>(values: I, univ: Universe) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        let univ = checked_universe(univ)?;
        Ok(from_parts(univ, reduce_all(values, univ)))
    }

    /// Number of distinct pitch classes
    pub fn cardinality(&self) -> usize {
        self.pcs.len()
    }

    /// True for the empty set
    pub fn is_empty(&self) -> bool {
        self.pcs.is_empty()
    }

    /// Check membership of a (reduced) pitch class
    pub fn contains(&self, pc: i64) -> bool {
        self.pcs.binary_search(&modular::reduce(pc, self.univ)).is_ok()
    }

    /// Every pitch class of the universe not in this set
    pub fn complement(&self) -> Self {
        let pcs = (0..self.univ).filter(|pc| self.pcs.binary_search(pc).is_err()).collect();
        from_canonical(self.univ, pcs)
    }

    /// Interval-class content
    pub fn vector(&self) -> IntervalVector {
        IntervalVector::of(self)
    }

    fn same_universe(&self, other: &Self) -> Result<()> {
        if self.univ != other.univ {
            return Err(TheoryError::IncompatibleUniverse {
                left: self.univ,
                right: other.univ,
            });
        }
        Ok(())
    }

    /// Elements in either set
    pub fn union(&self, other: &Self) -> Result<Self> {
        self.same_universe(other)?;
        let pcs = self.pcs.iter().chain(&other.pcs).copied().collect();
        Ok(from_parts(self.univ, pcs))
    }

    /// Elements in both sets
    pub fn intersection(&self, other: &Self) -> Result<Self> {
        self.same_universe(other)?;
        let pcs = self
            .pcs
            .iter()
            .filter(|pc| other.pcs.binary_search(pc).is_ok())
            .copied()
            .collect();
        Ok(from_canonical(self.univ, pcs))
    }

    /// Elements of this set missing from `other`
    pub fn difference(&self, other: &Self) -> Result<Self> {
        self.same_universe(other)?;
        let pcs = self
            .pcs
            .iter()
            .filter(|pc| other.pcs.binary_search(pc).is_err())
            .copied()
            .collect();
        Ok(from_canonical(self.univ, pcs))
    }

    /// Elements in exactly one of the two sets
    pub fn symmetric_difference(&self, other: &Self) -> Result<Self> {
        let left = self.difference(other)?;
        let right = other.difference(self)?;
        left.union(&right)
    }
}

/// Compare two sets through their images in the common universe
fn cross_universe_cmp(a: &PitchClassSet, b: &PitchClassSet) -> Ordering {
    if a.univ == b.univ {
        return a.pcs.cmp(&b.pcs);
    }
    let (a_image, b_image, _) = common_images(&a.pcs, a.univ, &b.pcs, b.univ);
    a_image.cmp(&b_image)
}

impl PartialEq for PitchClassSet {
    fn eq(&self, other: &Self) -> bool {
        cross_universe_cmp(self, other) == Ordering::Equal
    }
}

impl Eq for PitchClassSet {}

impl PartialOrd for PitchClassSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PitchClassSet {
    fn cmp(&self, other: &Self) -> Ordering {
        cross_universe_cmp(self, other)
    }
}

impl BitOr for &PitchClassSet {
    type Output = Result<PitchClassSet>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitAnd for &PitchClassSet {
    type Output = Result<PitchClassSet>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl BitXor for &PitchClassSet {
    type Output = Result<PitchClassSet>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl Sub for &PitchClassSet {
    type Output = Result<PitchClassSet>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl TryFrom<RawCollection> for PitchClassSet {
    type Error = TheoryError;

    fn try_from(raw: RawCollection) -> Result<Self> {
        raw.build()
    }
}

impl From<PitchClassSet> for RawCollection {
    fn from(set: PitchClassSet) -> Self {
        RawCollection::capture(&set)
    }
}

impl FromStr for PitchClassSet {
    type Err = TheoryError;

    /// Parse `"0 4 7"`, `"0,4,7"` or `"[0, 4, 7]"` in the default universe
    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::new(parse_pitch_classes(s)?))
    }
}

impl fmt::Display for PitchClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PitchClassSet {:?}", self.pcs)
    }
}

/// Every pitch class of universe `univ`
pub fn aggregate(univ: Universe) -> Result<PitchClassSet> {
    let univ = checked_universe(univ)?;
    Ok(from_canonical(univ, (0..univ).collect()))
}

/// The `k`-element set spread as evenly as floor rounding allows
///
/// The aggregate of universe `k` is rescaled into `univ` with
/// [`RescaleMode::Floor`].
pub fn maximally_distributed(k: Universe, univ: Universe) -> Result<PitchClassSet> {
    aggregate(k)?.as_univ(univ, RescaleMode::Floor)
}
