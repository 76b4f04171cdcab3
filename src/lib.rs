// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch-class set theory value types.
//!
//! Sets, sequences and their interval views over any finite universe,
//! with transposition, inversion, multiplication, retrograde and exact
//! rescaling between universes.

pub mod config;
pub mod error;
pub mod theory;

pub use error::{Result, TheoryError};
pub use theory::{
    aggregate, build_set_list, maximally_distributed, IntervalSequence, IntervalVector,
    PitchClass, PitchClassSequence, PitchClassSet, PitchClasses, RescaleMode, SetInput,
    SetOperation, Universe, DEFAULT_UNIVERSE,
};
