//! Local formula evaluation

use crate::cli::output::{OutputFormat, SolveOutcome};
use crate::cli::server::error::ServerError;
use crate::formula::{Evaluation, FormulaParams, FunctionKind};
use crate::inputs::FormInputs;
use std::path::Path;
use tracing::debug;

/// Arguments of the `solve` subcommand
#[derive(Debug, Clone)]
pub struct SolveArgs<'a> {
    pub kind: FunctionKind,
    pub params: &'a [String],
    pub inputs: Option<&'a Path>,
    pub save_inputs: Option<&'a Path>,
    pub format: OutputFormat,
    pub no_color: bool,
}

/// Evaluate `kind` against form inputs, with the same messages the API uses
pub fn solve(kind: FunctionKind, inputs: &FormInputs) -> SolveOutcome {
    let params = match inputs.params_for(kind) {
        Ok(params) => params,
        Err(e) => return SolveOutcome::Error(e.to_string()),
    };

    match FormulaParams::from_json(kind, &params) {
        Ok(params) => match params.evaluate() {
            Evaluation::Valid(value) => SolveOutcome::Result(value),
            Evaluation::Invalid => SolveOutcome::Error(ServerError::InvalidResult.to_string()),
        },
        Err(e) => SolveOutcome::Error(e.to_string()),
    }
}

/// Handle `solve`; returns whether the computation succeeded
pub fn handle_solve(args: &SolveArgs<'_>) -> anyhow::Result<bool> {
    let mut inputs = match args.inputs {
        Some(path) => FormInputs::load(path)?,
        None => FormInputs::new(),
    };

    for pair in args.params {
        let (name, value) = parse_param(pair)?;
        inputs.set(name, value)?;
    }

    if let Some(path) = args.save_inputs {
        inputs.save(path)?;
        debug!("saved form inputs to {}", path.display());
    }

    let outcome = solve(args.kind, &inputs);
    println!("{}", outcome.render(args.format, args.no_color));

    Ok(outcome.is_success())
}

fn parse_param(pair: &str) -> anyhow::Result<(&str, &str)> {
    pair.split_once('=')
        .map(|(name, value)| (name.trim(), value))
        .ok_or_else(|| anyhow::anyhow!("Invalid parameter format: {pair:?} (expected name=value)"))
}
