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

//! CLI module for formula evaluation and the HTTP server

pub mod config;
pub mod handlers;
pub mod output;
pub mod server;

use crate::formula::FunctionKind;
use clap::{Parser, Subcommand};
use output::OutputFormat;
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[command(name = "formula-lab")]
#[command(about = "Formula Lab: three closed-form formulas over HTTP and the command line")]
#[command(version)]
pub struct Cli {
    /// Output format (overrides the config file)
    #[arg(long, short = 'o', value_enum, global = true)]
    pub output_format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Start the HTTP server with the browser form
    Serve {
        /// Port to bind the server to
        #[arg(short, long)]
        port: Option<u16>,
        /// Host to bind to
        #[arg(long)]
        host: Option<IpAddr>,
        /// Directory for the read/write file actions
        #[arg(short, long)]
        storage: Option<PathBuf>,
        /// Enable CORS for all origins (development mode)
        #[arg(long)]
        cors_all: bool,
        /// Maximum request body size in MB
        #[arg(long)]
        max_body_size: Option<u64>,
    },
    /// Evaluate one formula locally
    Solve {
        /// Function kind: FirstFc, SecondFc or ThirdFc
        kind: FunctionKind,
        /// Field value in format name=value (can be used multiple times)
        #[arg(long = "param", short = 'p')]
        params: Vec<String>,
        /// Saved form inputs to start from
        #[arg(long, short = 'i')]
        inputs: Option<PathBuf>,
        /// Save the resulting form inputs to this file
        #[arg(long)]
        save_inputs: Option<PathBuf>,
    },
    /// Configuration file management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Show which configuration file is in use
    Path,
    /// Write a sample configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
        /// Target path (default: ~/.formularc)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_solve_arguments() {
        let cli = Cli::try_parse_from([
            "formula-lab",
            "solve",
            "SecondFc",
            "-p",
            "m=2",
            "--param",
            "d=1",
            "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.output_format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Solve { kind, params, .. } => {
                assert_eq!(kind, FunctionKind::SecondFc);
                assert_eq!(params, vec!["m=2", "d=1"]);
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["formula-lab", "solve", "Bogus"]).is_err());
    }
}
