// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch-class set theory over arbitrary finite universes.
//!
//! This module provides the set and sequence value types, their derived
//! interval views, and the modular, rescaling and normalization
//! machinery they share.

pub mod collection;
pub mod input;
pub mod intervals;
pub mod modular;
pub mod normalize;
pub mod rescale;
pub mod sequence;
pub mod set;

pub use collection::{PitchClasses, RawCollection};
pub use input::{build_set_list, parse_pitch_classes, SetInput, SetOperation};
pub use intervals::{IntervalSequence, IntervalVector};
pub use rescale::RescaleMode;
pub use sequence::PitchClassSequence;
pub use set::{aggregate, maximally_distributed, PitchClassSet};

/// Pitch class value, always in `[0, univ)` once stored
pub type PitchClass = u32;

/// Universe size (modulus), at least 1
pub type Universe = u32;

/// Twelve-tone equal temperament
pub const DEFAULT_UNIVERSE: Universe = 12;

/// Serde default for an omitted universe
pub(crate) fn default_universe() -> Universe {
    DEFAULT_UNIVERSE
}
