//! Output formatting for CLI commands

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable `Result: ...` / `Error: ...` lines (default)
    #[default]
    Pretty,
    /// The same JSON body the HTTP endpoint returns
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Result of a local solve, shaped like the form's result line
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    Result(f64),
    Error(String),
}

impl SolveOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SolveOutcome::Result(_))
    }

    pub fn render(&self, format: OutputFormat, no_color: bool) -> String {
        match format {
            OutputFormat::Json => match self {
                SolveOutcome::Result(value) => serde_json::json!({ "result": value }),
                SolveOutcome::Error(message) => serde_json::json!({ "error": message }),
            }
            .to_string(),
            OutputFormat::Pretty => {
                let line = match self {
                    SolveOutcome::Result(value) => format!("Result: {}", value),
                    SolveOutcome::Error(message) => format!("Error: {}", message),
                };
                if no_color {
                    line
                } else if self.is_success() {
                    line.green().to_string()
                } else {
                    line.red().to_string()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_matches_form_text() {
        assert_eq!(
            SolveOutcome::Result(56.0).render(OutputFormat::Pretty, true),
            "Result: 56"
        );
        assert_eq!(
            SolveOutcome::Error("Invalid data: result is NaN".to_string())
                .render(OutputFormat::Pretty, true),
            "Error: Invalid data: result is NaN"
        );
    }

    #[test]
    fn json_matches_api_body() {
        let rendered = SolveOutcome::Result(1.5).render(OutputFormat::Json, false);
        assert_eq!(rendered, r#"{"result":1.5}"#);
    }
}
