// Copyright 2025 Formula Lab Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Formula evaluation
//!
//! Three closed-form formulas, each selected by a [`FunctionKind`]. Every
//! computation yields an [`Evaluation`]: either a finite number or the single
//! `Invalid` marker that covers division by zero, overflow and NaN alike.

pub mod error;
pub mod functions;
pub mod params;

pub use error::ParamError;
pub use functions::{MAX_SUMMATION_BOUND, first_fc, second_fc, third_fc};
pub use params::FormulaParams;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier selecting one of the three formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionKind {
    FirstFc,
    SecondFc,
    ThirdFc,
}

impl FunctionKind {
    /// All supported kinds, in form page order
    pub fn all() -> &'static [FunctionKind] {
        &[
            FunctionKind::FirstFc,
            FunctionKind::SecondFc,
            FunctionKind::ThirdFc,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionKind::FirstFc => "FirstFc",
            FunctionKind::SecondFc => "SecondFc",
            FunctionKind::ThirdFc => "ThirdFc",
        }
    }

    /// Parameter names required by this kind, in the order the form shows them
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            FunctionKind::FirstFc => &["a", "b", "c"],
            FunctionKind::SecondFc => &["i", "d", "m"],
            FunctionKind::ThirdFc => &["n", "c"],
        }
    }

    /// Form page title
    pub fn title(&self) -> &'static str {
        match self {
            FunctionKind::FirstFc => "solve Y1",
            FunctionKind::SecondFc => "solve y",
            FunctionKind::ThirdFc => "solve f",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known function kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid function type: {0}")]
pub struct UnknownFunctionKind(pub String);

impl FromStr for FunctionKind {
    type Err = UnknownFunctionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FirstFc" => Ok(FunctionKind::FirstFc),
            "SecondFc" => Ok(FunctionKind::SecondFc),
            "ThirdFc" => Ok(FunctionKind::ThirdFc),
            other => Err(UnknownFunctionKind(other.to_string())),
        }
    }
}

/// Outcome of a formula computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    /// A finite real result
    Valid(f64),
    /// The result was infinite or not a number, or a precondition failed
    Invalid,
}

impl Evaluation {
    /// Apply the finiteness check to a raw computed value
    pub fn from_value(value: f64) -> Self {
        if value.is_finite() {
            Evaluation::Valid(value)
        } else {
            Evaluation::Invalid
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Evaluation::Valid(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Evaluation::Valid(v) => Some(*v),
            Evaluation::Invalid => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_kind_round_trips_through_str() {
        for kind in FunctionKind::all() {
            assert_eq!(kind.as_str().parse::<FunctionKind>(), Ok(*kind));
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "Bogus".parse::<FunctionKind>().unwrap_err();
        assert_eq!(err, UnknownFunctionKind("Bogus".to_string()));
        assert!("firstfc".parse::<FunctionKind>().is_err());
    }

    #[test]
    fn form_pages_follow_kind_order() {
        let titles: Vec<_> = FunctionKind::all().iter().map(|k| k.title()).collect();
        assert_eq!(titles, ["solve Y1", "solve y", "solve f"]);
        assert_eq!(FunctionKind::SecondFc.fields(), ["i", "d", "m"]);
    }

    #[test]
    fn finiteness_check() {
        assert_eq!(Evaluation::from_value(1.5), Evaluation::Valid(1.5));
        assert_eq!(Evaluation::from_value(f64::INFINITY), Evaluation::Invalid);
        assert_eq!(Evaluation::from_value(f64::NEG_INFINITY), Evaluation::Invalid);
        assert_eq!(Evaluation::from_value(f64::NAN), Evaluation::Invalid);
        assert_eq!(Evaluation::Valid(2.0).value(), Some(2.0));
        assert_eq!(Evaluation::Invalid.value(), None);
    }
}
