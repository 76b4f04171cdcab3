// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Dynamically shaped input: tagged values, text and runtime-selected
//! set operations.
//!
//! Typed callers use the methods on [`PitchClassSet`] directly. These
//! helpers serve callers whose operands only become known at runtime
//! (command lines, config files) and are where operand shape errors are
//! reported.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::collection::PitchClasses;
use super::{PitchClassSet, Universe};
use crate::error::{Result, TheoryError};

/// A single pitch class, a loose collection, or an existing set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SetInput {
    /// One integer
    Pc(i64),
    /// Integers to be canonicalized into a set
    Collection(Vec<i64>),
    /// An already built set
    Set(PitchClassSet),
}

impl SetInput {
    /// Short description used in error messages
    pub fn describe(&self) -> String {
        match self {
            SetInput::Pc(pc) => format!("pitch class {}", pc),
            SetInput::Collection(values) => format!("collection {:?}", values),
            SetInput::Set(set) => set.to_string(),
        }
    }

    /// Build a set in universe `univ`
    ///
    /// An existing set must already live in `univ`.
    pub fn into_set(self, univ: Universe) -> Result<PitchClassSet> {
        match self {
            SetInput::Pc(pc) => PitchClassSet::with_univ([pc], univ),
            SetInput::Collection(values) => PitchClassSet::with_univ(values, univ),
            SetInput::Set(set) if set.univ() == univ => Ok(set),
            SetInput::Set(set) => Err(TheoryError::IncompatibleUniverse {
                left: univ,
                right: set.univ(),
            }),
        }
    }
}

impl From<i64> for SetInput {
    fn from(pc: i64) -> Self {
        SetInput::Pc(pc)
    }
}

impl From<Vec<i64>> for SetInput {
    fn from(values: Vec<i64>) -> Self {
        SetInput::Collection(values)
    }
}

impl From<PitchClassSet> for SetInput {
    fn from(set: PitchClassSet) -> Self {
        SetInput::Set(set)
    }
}

/// Normalize heterogeneous inputs into an ordered list of sets sharing `univ`
pub fn build_set_list<I>(inputs: I, univ: Universe) -> Result<Vec<PitchClassSet>>
where
    I: IntoIterator<Item = SetInput>,
{
    inputs.into_iter().map(|input| input.into_set(univ)).collect()
}

/// Binary set operation selected at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetOperation {
    Union,
    Intersection,
    Difference,
    SymmetricDifference,
}

impl SetOperation {
    /// Apply to `lhs` and `rhs`; the right-hand side must be a set
    pub fn apply(self, lhs: &PitchClassSet, rhs: &SetInput) -> Result<PitchClassSet> {
        let rhs = match rhs {
            SetInput::Set(set) => set,
            other => return Err(TheoryError::InvalidOperand(other.describe())),
        };
        match self {
            SetOperation::Union => lhs.union(rhs),
            SetOperation::Intersection => lhs.intersection(rhs),
            SetOperation::Difference => lhs.difference(rhs),
            SetOperation::SymmetricDifference => lhs.symmetric_difference(rhs),
        }
    }

    /// Operator symbol
    pub fn symbol(self) -> &'static str {
        match self {
            SetOperation::Union => "|",
            SetOperation::Intersection => "&",
            SetOperation::Difference => "-",
            SetOperation::SymmetricDifference => "^",
        }
    }
}

impl FromStr for SetOperation {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_lowercase().replace([' ', '_'], "");
        match token.as_str() {
            "|" | "union" | "or" => Ok(SetOperation::Union),
            "&" | "intersection" | "and" => Ok(SetOperation::Intersection),
            "-" | "difference" | "sub" | "minus" => Ok(SetOperation::Difference),
            "^" | "symmetricdifference" | "symmetric-difference" | "xor" => {
                Ok(SetOperation::SymmetricDifference)
            }
            _ => Err(TheoryError::InvalidOperand(format!("unknown set operation '{}'", s))),
        }
    }
}

impl fmt::Display for SetOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parse integers from `"0 4 7"`, `"0,4,7"`, `"[0, 4, 7]"` or `"{0, 4, 7}"`
///
/// Tokens that are not integers fail with [`TheoryError::TypeMismatch`];
/// unbalanced brackets fail with [`TheoryError::InvalidOperand`].
pub fn parse_pitch_classes(text: &str) -> Result<Vec<i64>> {
    let trimmed = text.trim();
    let inner = match (trimmed.chars().next(), trimmed.chars().last()) {
        (Some('['), Some(']')) | (Some('{'), Some('}')) | (Some('('), Some(')')) => {
            &trimmed[1..trimmed.len() - 1]
        }
        (Some('[' | '{' | '('), _) | (_, Some(']' | '}' | ')')) => {
            return Err(TheoryError::InvalidOperand(format!("unbalanced brackets in '{}'", text)));
        }
        _ => trimmed,
    };

    inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| TheoryError::TypeMismatch(format!("'{}'", token)))
        })
        .collect()
}
