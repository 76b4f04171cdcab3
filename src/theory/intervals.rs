// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval views derived from sets and sequences.
//!
//! An [`IntervalVector`] counts interval classes across every unordered
//! pair of a set. An [`IntervalSequence`] lists the directed steps of a
//! melody and can rebuild the melody from a starting pitch class.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::collection::{checked_universe, from_parts, reduce_all, PitchClasses};
use super::{
    default_universe, modular, PitchClass, PitchClassSequence, PitchClassSet, Universe,
    DEFAULT_UNIVERSE,
};
use crate::error::{Result, TheoryError};

/// Interval-class content of a pitch-class set
///
/// Entry `k - 1` counts the pairs whose interval class is `k`. Intervals
/// `k` and `univ - k` are folded into the same class, so a universe of
/// size `univ` yields `univ / 2` entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntervalVector {
    univ: Universe,
    intervals: Vec<u32>,
}

impl IntervalVector {
    /// Wrap precomputed interval-class counts
    pub fn new(intervals: Vec<u32>, univ: Universe) -> Self {
        Self { univ, intervals }
    }

    /// Count interval classes across all unordered pairs of `set`
    pub fn of(set: &PitchClassSet) -> Self {
        let univ = set.univ();
        let pcs = set.pcs();
        let mut counts = vec![0u32; univ.saturating_sub(1) as usize];

        for (i, &low) in pcs.iter().enumerate() {
            for &high in &pcs[i + 1..] {
                let interval = modular::reduce(low as i64 - high as i64, univ) as usize;
                if interval > 0 {
                    counts[interval - 1] += 1;
                }
            }
        }

        // Fold interval u - k onto k; an odd-length middle entry stays put
        let half = counts.len() / 2;
        let last = counts.len().saturating_sub(1);
        for i in 0..half {
            counts[i] += counts[last - i];
        }
        counts.truncate(counts.len() - half);

        Self::new(counts, univ)
    }

    /// Universe size
    pub fn univ(&self) -> Universe {
        self.univ
    }

    /// Interval-class counts, class 1 first
    pub fn intervals(&self) -> &[u32] {
        &self.intervals
    }

    /// Count for interval class `class` (1-based)
    pub fn count(&self, class: usize) -> Option<u32> {
        class
            .checked_sub(1)
            .and_then(|i| self.intervals.get(i))
            .copied()
    }

    /// Number of pairs counted
    pub fn total(&self) -> u32 {
        self.intervals.iter().sum()
    }

    /// Number of interval classes
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// True for universes too small to have interval classes
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl fmt::Display for IntervalVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntervalVector {:?}", self.intervals)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawIntervals {
    #[serde(default = "default_universe")]
    univ: Universe,
    #[serde(default)]
    intervals: Vec<i64>,
}

impl TryFrom<RawIntervals> for IntervalSequence {
    type Error = TheoryError;

    fn try_from(raw: RawIntervals) -> Result<Self> {
        IntervalSequence::with_univ(raw.intervals, raw.univ)
    }
}

impl From<IntervalSequence> for RawIntervals {
    fn from(seq: IntervalSequence) -> Self {
        Self {
            univ: seq.univ,
            intervals: seq.intervals.into_iter().map(i64::from).collect(),
        }
    }
}

/// Directed steps between consecutive pitch classes of a melody
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawIntervals", into = "RawIntervals")]
pub struct IntervalSequence {
    univ: Universe,
    intervals: Vec<PitchClass>,
}

impl IntervalSequence {
    /// Create an interval sequence in the default universe
    pub fn new<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        Self::from_parts(DEFAULT_UNIVERSE, reduce_all(intervals, DEFAULT_UNIVERSE))
    }

    /// Create an interval sequence in universe `univ`
    pub fn with_univ<I>(intervals: I, univ: Universe) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        let univ = checked_universe(univ)?;
        Ok(Self::from_parts(univ, reduce_all(intervals, univ)))
    }

    pub(crate) fn from_parts(univ: Universe, intervals: Vec<PitchClass>) -> Self {
        Self { univ, intervals }
    }

    /// Universe size
    pub fn univ(&self) -> Universe {
        self.univ
    }

    /// Steps, each in `[0, univ)`
    pub fn intervals(&self) -> &[PitchClass] {
        &self.intervals
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// True when there are no steps
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Rebuild a melody by accumulating every step onto `start`
    pub fn melody(&self, start: i64) -> PitchClassSequence {
        let mut current = modular::reduce(start, self.univ);
        let mut pcs = Vec::with_capacity(self.intervals.len() + 1);
        pcs.push(current);
        for &step in &self.intervals {
            current = ((current as u64 + step as u64) % self.univ as u64) as PitchClass;
            pcs.push(current);
        }
        from_parts(self.univ, pcs)
    }

    /// Copy with every step negated
    pub fn inverted(&self) -> Self {
        Self::from_parts(self.univ, modular::negated(&self.intervals, self.univ))
    }

    /// Negate every step in place
    pub fn invert(&mut self) {
        self.intervals = modular::negated(&self.intervals, self.univ);
    }

    /// Copy describing the melody played backwards
    ///
    /// Reversing traversal flips the direction of every step, so the steps
    /// are both reversed and negated.
    pub fn retrograded(&self) -> Self {
        let reversed = modular::retrograded(&self.intervals);
        Self::from_parts(self.univ, modular::negated(&reversed, self.univ))
    }

    /// Retrograde in place
    pub fn retrograde(&mut self) {
        *self = self.retrograded();
    }
}

impl fmt::Display for IntervalSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntervalSequence {:?}", self.intervals)
    }
}
