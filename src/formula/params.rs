//! Typed parameter sets, one per function kind

use super::error::ParamError;
use super::functions::{MAX_SUMMATION_BOUND, first_fc, second_fc, third_fc};
use super::{Evaluation, FunctionKind};
use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::debug;

/// Validated parameters for a single formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormulaParams {
    First { a: f64, b: f64, c: f64 },
    Second { m: f64, d: f64, i: f64 },
    Third { n: f64, c: f64 },
}

impl FormulaParams {
    /// Validate an untyped `params` object against the field set of `kind`
    ///
    /// Missing (or `null`) fields are reported before anything else, so a
    /// payload lacking a required name always yields [`ParamError::Missing`].
    pub fn from_json(kind: FunctionKind, params: &JsonValue) -> Result<Self, ParamError> {
        let map = params.as_object().ok_or(ParamError::NotAnObject)?;
        let fields = kind.fields();

        if fields
            .iter()
            .any(|name| map.get(*name).is_none_or(JsonValue::is_null))
        {
            return Err(ParamError::Missing { kind });
        }

        if let Some(extra) = map.keys().find(|key| !fields.contains(&key.as_str())) {
            return Err(ParamError::Unexpected {
                kind,
                name: extra.clone(),
            });
        }

        let get = |name: &str| number_field(kind, map, name);

        let params = match kind {
            FunctionKind::FirstFc => FormulaParams::First {
                a: get("a")?,
                b: get("b")?,
                c: get("c")?,
            },
            FunctionKind::SecondFc => FormulaParams::Second {
                m: get("m")?,
                d: get("d")?,
                i: get("i")?,
            },
            FunctionKind::ThirdFc => {
                let n = get("n")?;
                if n > MAX_SUMMATION_BOUND {
                    return Err(ParamError::TooManyTerms {
                        n,
                        max: MAX_SUMMATION_BOUND,
                    });
                }
                FormulaParams::Third { n, c: get("c")? }
            }
        };

        Ok(params)
    }

    pub fn kind(&self) -> FunctionKind {
        match self {
            FormulaParams::First { .. } => FunctionKind::FirstFc,
            FormulaParams::Second { .. } => FunctionKind::SecondFc,
            FormulaParams::Third { .. } => FunctionKind::ThirdFc,
        }
    }

    /// Run the formula selected by this parameter set
    pub fn evaluate(&self) -> Evaluation {
        let evaluation = match *self {
            FormulaParams::First { a, b, c } => first_fc(a, b, c),
            FormulaParams::Second { m, d, i } => second_fc(m, d, i),
            FormulaParams::Third { n, c } => third_fc(n, c),
        };

        if !evaluation.is_valid() {
            debug!(params = ?self, "formula produced a non-finite result");
        }

        evaluation
    }
}

fn number_field(
    kind: FunctionKind,
    map: &JsonMap<String, JsonValue>,
    name: &str,
) -> Result<f64, ParamError> {
    map.get(name)
        .and_then(JsonValue::as_f64)
        .ok_or_else(|| ParamError::NotANumber {
            kind,
            name: name.to_string(),
        })
}
