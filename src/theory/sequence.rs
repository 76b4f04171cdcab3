// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Ordered pitch-class sequences (melodies).

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::collection::{
    checked_universe, from_parts, reduce_all, Parts, PitchClasses, RawCollection, Storage,
};
use super::input::{parse_pitch_classes, SetInput};
use super::{
    modular, IntervalSequence, IntervalVector, PitchClass, PitchClassSet, Universe,
    DEFAULT_UNIVERSE,
};
use crate::error::{Result, TheoryError};

/// Pitch classes in order, duplicates allowed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCollection", into = "RawCollection")]
pub struct PitchClassSequence {
    univ: Universe,
    pcs: Vec<PitchClass>,
}

impl Storage for PitchClassSequence {
    fn canonicalize(pcs: Vec<PitchClass>) -> Vec<PitchClass> {
        pcs
    }

    fn from_canonical(parts: Parts) -> Self {
        Self {
            univ: parts.univ,
            pcs: parts.pcs,
        }
    }
}

impl PitchClasses for PitchClassSequence {
    fn univ(&self) -> Universe {
        self.univ
    }

    fn pcs(&self) -> &[PitchClass] {
        &self.pcs
    }
}

impl PitchClassSequence {
    /// Create a sequence in the default universe
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        from_parts(DEFAULT_UNIVERSE, reduce_all(values, DEFAULT_UNIVERSE))
    }

    /// Create a sequence in universe `univ`
    pub fn with_univ<I>(values: I, univ: Universe) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        let univ = checked_universe(univ)?;
        Ok(from_parts(univ, reduce_all(values, univ)))
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.pcs.len()
    }

    /// True when the sequence has no elements
    pub fn is_empty(&self) -> bool {
        self.pcs.is_empty()
    }

    /// Concatenate two sequences of the same universe
    pub fn concat(&self, other: &Self) -> Result<Self> {
        let mut joined = self.clone();
        joined.extend(other)?;
        Ok(joined)
    }

    /// Append every element of `other`
    pub fn extend(&mut self, other: &Self) -> Result<()> {
        if self.univ != other.univ {
            return Err(TheoryError::IncompatibleUniverse {
                left: self.univ,
                right: other.univ,
            });
        }
        self.pcs.extend_from_slice(&other.pcs);
        Ok(())
    }

    /// Append one pitch class, reduced into the universe
    pub fn append(&mut self, pc: i64) {
        self.pcs.push(modular::reduce(pc, self.univ));
    }

    /// Append from dynamically typed input, which must be a single pitch class
    pub fn try_append(&mut self, input: &SetInput) -> Result<()> {
        match input {
            SetInput::Pc(pc) => {
                self.append(*pc);
                Ok(())
            }
            other => Err(TheoryError::TypeMismatch(other.describe())),
        }
    }

    /// Copy in reverse order
    pub fn retrograded(&self) -> Self {
        from_parts(self.univ, modular::retrograded(&self.pcs))
    }

    /// Reverse in place
    pub fn retrograde(&mut self) {
        self.pcs.reverse();
    }

    /// Distinct pitch classes, ignoring order and multiplicity
    pub fn pc_inventory(&self) -> PitchClassSet {
        from_parts(self.univ, self.pcs.clone())
    }

    /// Interval-class content of the inventory
    pub fn vector(&self) -> IntervalVector {
        self.pc_inventory().vector()
    }

    /// Directed steps between consecutive elements
    pub fn intervals(&self) -> IntervalSequence {
        let steps = self
            .pcs
            .windows(2)
            .map(|pair| modular::reduce(pair[1] as i64 - pair[0] as i64, self.univ))
            .collect();
        IntervalSequence::from_parts(self.univ, steps)
    }
}

impl Add for &PitchClassSequence {
    type Output = Result<PitchClassSequence>;

    fn add(self, rhs: Self) -> Self::Output {
        self.concat(rhs)
    }
}

impl TryFrom<RawCollection> for PitchClassSequence {
    type Error = TheoryError;

    fn try_from(raw: RawCollection) -> Result<Self> {
        raw.build()
    }
}

impl From<PitchClassSequence> for RawCollection {
    fn from(seq: PitchClassSequence) -> Self {
        RawCollection::capture(&seq)
    }
}

impl FromStr for PitchClassSequence {
    type Err = TheoryError;

    /// Parse `"0 4 7 4"` or `"[0, 4, 7, 4]"` in the default universe
    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::new(parse_pitch_classes(s)?))
    }
}

impl fmt::Display for PitchClassSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PitchClassSequence {:?}", self.pcs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::RescaleMode;

    #[test]
    fn test_keeps_order_and_duplicates() {
        let mut seq = PitchClassSequence::new([0]);
        seq.set_pcs([0, 1, 0]);
        assert_eq!(seq.pcs(), &[0, 1, 0]);
        assert_eq!(PitchClassSequence::new([12, 13, -1]).pcs(), &[0, 1, 11]);
    }

    #[test]
    fn test_concat() {
        let a = PitchClassSequence::new([0, 1, 2]);
        let b = PitchClassSequence::new([1, 2]);
        assert_eq!((&a + &b).unwrap().pcs(), &[0, 1, 2, 1, 2]);
        assert_eq!((&b + &a).unwrap().pcs(), &[1, 2, 0, 1, 2]);

        let other = PitchClassSequence::with_univ([1], 7).unwrap();
        assert_eq!(
            a.concat(&other),
            Err(TheoryError::IncompatibleUniverse { left: 12, right: 7 })
        );
    }

    #[test]
    fn test_extend() {
        let mut a = PitchClassSequence::new([0, 1, 2]);
        a.extend(&PitchClassSequence::new([1, 2])).unwrap();
        assert_eq!(a.pcs(), &[0, 1, 2, 1, 2]);

        let before = a.clone();
        assert!(a.extend(&PitchClassSequence::with_univ([1], 5).unwrap()).is_err());
        assert_eq!(a, before);
    }

    #[test]
    fn test_append() {
        let mut seq = PitchClassSequence::new([0, 1, 2]);
        seq.append(5);
        assert_eq!(seq.pcs(), &[0, 1, 2, 5]);
        seq.append(-1);
        assert_eq!(seq.pcs(), &[0, 1, 2, 5, 11]);
    }

    #[test]
    fn test_try_append_requires_single_pc() {
        let mut seq = PitchClassSequence::new([0]);
        seq.try_append(&SetInput::Pc(4)).unwrap();
        assert_eq!(seq.pcs(), &[0, 4]);
        assert!(matches!(
            seq.try_append(&SetInput::Collection(vec![1, 2])),
            Err(TheoryError::TypeMismatch(_))
        ));
        assert_eq!(seq.pcs(), &[0, 4]);
    }

    #[test]
    fn test_transforms() {
        let seq = PitchClassSequence::new([0, 1, 0]);
        assert_eq!(seq.transposed(1).pcs(), &[1, 2, 1]);
        assert_eq!(seq.transposed(11).pcs(), &[11, 0, 11]);
        assert_eq!(seq.inverted(0).pcs(), &[0, 11, 0]);
        assert_eq!(seq.inverted(2).pcs(), &[2, 1, 2]);
        assert_eq!(PitchClassSequence::new([0, 3, 0]).m_transformed(5).pcs(), &[0, 3, 0]);
        assert_eq!(PitchClassSequence::new([0, 3, 0]).m_transformed(11).pcs(), &[0, 9, 0]);
    }

    #[test]
    fn test_in_place_transforms() {
        let mut seq = PitchClassSequence::new([0, 1, 2]);
        seq.transpose(1);
        assert_eq!(seq.pcs(), &[1, 2, 3]);
        seq.transpose(10);
        assert_eq!(seq.pcs(), &[11, 0, 1]);

        let mut seq = PitchClassSequence::new([0, 1, 0]);
        seq.invert(0);
        assert_eq!(seq.pcs(), &[0, 11, 0]);
        seq.invert(10);
        assert_eq!(seq.pcs(), &[10, 11, 10]);

        let mut seq = PitchClassSequence::new([0, 4, 0]);
        seq.m_transform(5);
        assert_eq!(seq.pcs(), &[0, 8, 0]);
        seq.m_transform(11);
        assert_eq!(seq.pcs(), &[0, 4, 0]);
    }

    #[test]
    fn test_retrograde() {
        assert_eq!(PitchClassSequence::new([0, 1, 3, 0]).retrograded().pcs(), &[0, 3, 1, 0]);
        let mut seq = PitchClassSequence::new([0, 1, 4, 0]);
        seq.retrograde();
        assert_eq!(seq.pcs(), &[0, 4, 1, 0]);
    }

    #[test]
    fn test_pc_inventory() {
        let seq = PitchClassSequence::new([0, 1, 2, 0]);
        assert_eq!(seq.pc_inventory().pcs(), &[0, 1, 2]);
        assert_eq!(seq.vector().intervals(), &[2, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_rescale() {
        let seq = PitchClassSequence::new([0, 2, 4, 0]);
        assert_eq!(seq.as_univ(6, RescaleMode::Exception).unwrap().pcs(), &[0, 1, 2, 0]);

        let seq = PitchClassSequence::with_univ([0, 1, 2, 0], 8).unwrap();
        assert_eq!(seq.as_univ(16, RescaleMode::Exception).unwrap().pcs(), &[0, 2, 4, 0]);

        let mut seq = PitchClassSequence::new([7, 7, 7, 3]);
        seq.set_univ(24, RescaleMode::Exception).unwrap();
        assert_eq!(seq.univ(), 24);
        assert_eq!(seq.pcs(), &[14, 14, 14, 6]);
    }

    #[test]
    fn test_minimized_keeps_order() {
        let seq = PitchClassSequence::new([8, 0, 4, 8]);
        let min = seq.minimized_univ().unwrap();
        assert_eq!(min.univ(), 3);
        assert_eq!(min.pcs(), &[2, 0, 1, 2]);
    }

    #[test]
    fn test_intervals() {
        assert_eq!(PitchClassSequence::new([0, 1, 3]).intervals().intervals(), &[1, 2]);
        assert_eq!(PitchClassSequence::new([3, 1, 0]).intervals().intervals(), &[10, 11]);
        assert!(PitchClassSequence::new([5]).intervals().is_empty());
        assert!(PitchClassSequence::new([]).intervals().is_empty());
    }

    #[test]
    fn test_from_str() {
        let seq: PitchClassSequence = "0, 4, 7, 4".parse().unwrap();
        assert_eq!(seq.pcs(), &[0, 4, 7, 4]);
        assert_eq!(seq.to_string(), "PitchClassSequence [0, 4, 7, 4]");
    }
}
