// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Behavior shared by pitch-class sets and sequences.
//!
//! A collection type only decides how a raw element list is canonicalized
//! (sets sort and deduplicate, sequences keep order). Transposition,
//! inversion, multiplication and rescaling are provided here once, each
//! as a returning form and an in-place form built on the same primitive.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{default_universe, modular, normalize, rescale, PitchClass, RescaleMode, Universe};
use crate::error::{Result, TheoryError};

pub(crate) use sealed::{Parts, Storage};

mod sealed {
    use super::{PitchClass, Universe};

    /// A checked universe with elements already reduced into it
    ///
    /// Only this crate can build one, so every stored collection keeps
    /// `univ >= 1` and elements in `[0, univ)`.
    pub struct Parts {
        pub(crate) univ: Universe,
        pub(crate) pcs: Vec<PitchClass>,
    }

    /// Storage hooks of a collection type
    pub trait Storage: Sized {
        /// Canonicalization rule applied to every replacement element list
        fn canonicalize(pcs: Vec<PitchClass>) -> Vec<PitchClass>;

        /// Wrap an already canonical element list
        fn from_canonical(parts: Parts) -> Self;
    }
}

/// Check that a universe size is usable
pub fn checked_universe(univ: Universe) -> Result<Universe> {
    if univ == 0 {
        return Err(TheoryError::InvalidUniverse(0));
    }
    Ok(univ)
}

/// Reduce raw integers into `[0, univ)`, keeping order
///
/// `univ` must already have passed [`checked_universe`].
pub(crate) fn reduce_all<I>(values: I, univ: Universe) -> Vec<PitchClass>
where
    I: IntoIterator<Item = i64>,
{
    values
        .into_iter()
        .map(|v| modular::reduce(v, univ))
        .collect()
}

/// Wrap elements that are already reduced and canonical
pub(crate) fn from_canonical<T: Storage>(univ: Universe, pcs: Vec<PitchClass>) -> T {
    T::from_canonical(Parts { univ, pcs })
}

/// Canonicalize reduced elements and wrap them
pub(crate) fn from_parts<T: Storage>(univ: Universe, pcs: Vec<PitchClass>) -> T {
    from_canonical(univ, T::canonicalize(pcs))
}

/// A finite collection of pitch classes in a fixed universe
///
/// Implemented by [`PitchClassSet`](super::PitchClassSet) and
/// [`PitchClassSequence`](super::PitchClassSequence); values are only
/// built through their validating constructors.
pub trait PitchClasses: Storage {
    /// Universe size
    fn univ(&self) -> Universe;

    /// Stored elements, already canonical
    fn pcs(&self) -> &[PitchClass];

    /// Replace the elements, reducing them into the current universe
    fn set_pcs<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = i64>,
    {
        let univ = self.univ();
        *self = from_parts(univ, reduce_all(values, univ));
    }

    /// Copy transposed by `t`
    fn transposed(&self, t: i64) -> Self {
        from_parts(self.univ(), modular::transposed(self.pcs(), t, self.univ()))
    }

    /// Transpose in place by `t`
    fn transpose(&mut self, t: i64) {
        *self = self.transposed(t);
    }

    /// Copy inverted around `axis`
    fn inverted(&self, axis: i64) -> Self {
        from_parts(self.univ(), modular::inverted(self.pcs(), axis, self.univ()))
    }

    /// Invert in place around `axis`
    fn invert(&mut self, axis: i64) {
        *self = self.inverted(axis);
    }

    /// Copy multiplied by `m`
    fn m_transformed(&self, m: i64) -> Self {
        from_parts(self.univ(), modular::m_transformed(self.pcs(), m, self.univ()))
    }

    /// Multiply in place by `m`
    fn m_transform(&mut self, m: i64) {
        *self = self.m_transformed(m);
    }

    /// Copy rescaled into universe `univ`
    fn as_univ(&self, univ: Universe, mode: RescaleMode) -> Result<Self> {
        let pcs = rescale::rescale(self.pcs(), self.univ(), univ, mode)?;
        Ok(from_parts(univ, pcs))
    }

    /// Rescale in place; on error the collection is left untouched
    fn set_univ(&mut self, univ: Universe, mode: RescaleMode) -> Result<()> {
        let rescaled = self.as_univ(univ, mode)?;
        debug!(from = self.univ(), to = univ, %mode, "replacing universe");
        *self = rescaled;
        Ok(())
    }

    /// Copy expressed in the smallest universe preserving its structure
    fn minimized_univ(&self) -> Result<Self> {
        let (pcs, univ) = normalize::minimized(self.pcs(), self.univ())?;
        Ok(from_parts(univ, pcs))
    }

    /// Minimize the universe in place
    fn minimize_univ(&mut self) -> Result<()> {
        *self = self.minimized_univ()?;
        Ok(())
    }
}

/// Serialized shape of a collection: `{ univ, pcs }`
///
/// Elements may be any integers; they are reduced and canonicalized on
/// the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCollection {
    #[serde(default = "default_universe")]
    pub univ: Universe,
    #[serde(default)]
    pub pcs: Vec<i64>,
}

impl RawCollection {
    /// Build a collection of type `T`, validating the universe
    pub fn build<T: PitchClasses>(self) -> Result<T> {
        let univ = checked_universe(self.univ)?;
        Ok(from_parts(univ, reduce_all(self.pcs, univ)))
    }

    /// Capture the state of any collection
    pub fn capture<T: PitchClasses>(collection: &T) -> Self {
        Self {
            univ: collection.univ(),
            pcs: collection.pcs().iter().map(|&pc| pc as i64).collect(),
        }
    }
}
