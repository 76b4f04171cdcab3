// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Rational rescaling between universes.
//!
//! Every element is scaled by the exact ratio `to / from`. The product
//! `pc * to` is divided by `from` with integer arithmetic, so an element
//! fits exactly when the remainder is zero. [`RescaleMode`] decides what
//! happens to the elements that do not fit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::collection::checked_universe;
use super::{modular, PitchClass, Universe};
use crate::error::{Result, TheoryError};

/// Policy for scaled values that are not integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RescaleMode {
    /// Fail the whole operation
    #[default]
    #[serde(alias = "e")]
    Exception,
    /// Omit the element
    #[serde(alias = "d")]
    Drop,
    /// Round up
    #[serde(alias = "c")]
    Ceiling,
    /// Round to nearest, ties to even
    #[serde(alias = "r")]
    Round,
    /// Round down
    #[serde(alias = "f")]
    Floor,
}

impl RescaleMode {
    /// All modes in declaration order
    pub const ALL: [RescaleMode; 5] = [
        RescaleMode::Exception,
        RescaleMode::Drop,
        RescaleMode::Ceiling,
        RescaleMode::Round,
        RescaleMode::Floor,
    ];

    /// Long name of this mode
    pub fn name(self) -> &'static str {
        match self {
            RescaleMode::Exception => "exception",
            RescaleMode::Drop => "drop",
            RescaleMode::Ceiling => "ceiling",
            RescaleMode::Round => "round",
            RescaleMode::Floor => "floor",
        }
    }
}

impl FromStr for RescaleMode {
    type Err = TheoryError;

    /// Parse a mode from its long name or single-letter token
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "e" | "exception" => Ok(RescaleMode::Exception),
            "d" | "drop" => Ok(RescaleMode::Drop),
            "c" | "ceiling" => Ok(RescaleMode::Ceiling),
            "r" | "round" => Ok(RescaleMode::Round),
            "f" | "floor" => Ok(RescaleMode::Floor),
            _ => Err(TheoryError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for RescaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Scale a single value, returning `None` when `mode` drops it
fn scale_one(pc: PitchClass, from: Universe, to: Universe, mode: RescaleMode) -> Result<Option<u64>> {
    let numerator = pc as u64 * to as u64;
    let from = from as u64;
    let quotient = numerator / from;
    let remainder = numerator % from;

    if remainder == 0 {
        return Ok(Some(quotient));
    }

    let scaled = match mode {
        RescaleMode::Exception => {
            return Err(TheoryError::InvalidRescale { value: pc, univ: to });
        }
        RescaleMode::Drop => None,
        RescaleMode::Ceiling => Some(quotient + 1),
        RescaleMode::Floor => Some(quotient),
        RescaleMode::Round => {
            let twice = remainder * 2;
            if twice > from || (twice == from && quotient % 2 == 1) {
                Some(quotient + 1)
            } else {
                Some(quotient)
            }
        }
    };
    Ok(scaled)
}

/// Rescale `pcs` from universe `from` into universe `to`
///
/// Element order is preserved; results are reduced into `[0, to)`. Under
/// [`RescaleMode::Exception`] the first inexact element aborts the call
/// and nothing is returned. A zero universe on either side fails with
/// [`TheoryError::InvalidUniverse`].
pub fn rescale(
    pcs: &[PitchClass],
    from: Universe,
    to: Universe,
    mode: RescaleMode,
) -> Result<Vec<PitchClass>> {
    let to = checked_universe(to)?;
    let from = checked_universe(from)?;
    let mut scaled = Vec::with_capacity(pcs.len());
    for &pc in pcs {
        if let Some(value) = scale_one(pc, from, to, mode)? {
            scaled.push(modular::reduce(value as i64, to));
        }
    }

    if scaled.len() < pcs.len() {
        debug!(
            from,
            to,
            dropped = pcs.len() - scaled.len(),
            "rescale dropped inexact pitch classes"
        );
    }
    Ok(scaled)
}
