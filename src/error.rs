// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for pitch-class operations.

use thiserror::Error;

/// Errors raised by pitch-class set and sequence operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Binary operation between values living in different universes
    #[error("incompatible universes: {left} and {right}")]
    IncompatibleUniverse { left: u32, right: u32 },

    /// Right-hand side of a binary operation has the wrong shape
    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    /// A value has no exact image in the target universe
    #[error("pitch class {value} cannot be expressed exactly in universe {univ}")]
    InvalidRescale { value: u32, univ: u32 },

    /// Unrecognized rescaling policy token
    #[error("invalid rescale mode '{0}' (expected exception, drop, ceiling, round or floor)")]
    InvalidMode(String),

    /// Single-element input that is not an integer pitch class
    #[error("expected an integer pitch class, got {0}")]
    TypeMismatch(String),

    /// Universe size below 1
    #[error("universe size must be at least 1, got {0}")]
    InvalidUniverse(i64),
}

/// Result alias for pitch-class operations
pub type Result<T> = std::result::Result<T, TheoryError>;
