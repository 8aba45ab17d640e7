//! Parameter validation errors

use super::FunctionKind;
use thiserror::Error;

/// Errors raised while turning an untyped `params` object into [`super::FormulaParams`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("Missing parameters for {kind}")]
    Missing { kind: FunctionKind },

    #[error("Invalid parameter '{name}' for {kind}: expected a number")]
    NotANumber { kind: FunctionKind, name: String },

    #[error("Unexpected parameter '{name}' for {kind}")]
    Unexpected { kind: FunctionKind, name: String },

    #[error("Parameter n for ThirdFc must not exceed {max}, got {n}")]
    TooManyTerms { n: f64, max: f64 },

    #[error("Invalid params: expected an object")]
    NotAnObject,
}
