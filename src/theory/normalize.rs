// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Universe normalization: minimal universes and common universes.

use tracing::trace;

use super::modular::{gcd, lcm};
use super::rescale::{rescale, RescaleMode};
use super::{PitchClass, Universe};
use crate::error::Result;

/// Smallest universe that preserves the structure of `pcs`
///
/// Divides the universe and every element by their common gcd. The
/// rescale always succeeds because the divisor divides every element.
pub fn minimized(pcs: &[PitchClass], univ: Universe) -> Result<(Vec<PitchClass>, Universe)> {
    let divisor = pcs
        .iter()
        .fold(univ as u64, |acc, &pc| gcd(acc, pc as u64));
    let target = (univ as u64 / divisor.max(1)) as Universe;
    trace!(univ, divisor, target, "minimizing universe");
    Ok((rescale(pcs, univ, target, RescaleMode::Exception)?, target))
}

/// Images of two collections in the lcm of their universes
///
/// Each element is multiplied by `lcm / univ`, which is exact, and element
/// order is kept. Images are `u64`: the lcm of two `u32` universes and
/// every scaled element fit, so the conversion never fails. Returns both
/// images and the common universe.
pub fn common_images(
    a: &[PitchClass],
    a_univ: Universe,
    b: &[PitchClass],
    b_univ: Universe,
) -> (Vec<u64>, Vec<u64>, u64) {
    let common = lcm(a_univ as u64, b_univ as u64);
    let image = |pcs: &[PitchClass], univ: Universe| -> Vec<u64> {
        let factor = common / (univ as u64).max(1);
        pcs.iter().map(|&pc| pc as u64 * factor).collect()
    };
    (image(a, a_univ), image(b, b_univ), common)
}
