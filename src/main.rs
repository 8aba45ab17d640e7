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

//! Formula Lab command line
//!
//! Runs the HTTP server or evaluates a formula directly.

use clap::Parser;
use formula_lab::cli::config::{CliConfig, ServerOverrides};
use formula_lab::cli::handlers::{SolveArgs, handle_config, handle_serve, handle_solve};
use formula_lab::cli::{Cli, Commands};
use std::process;

#[tokio::main]
async fn main() {
    // Setup human-panic for better error messages
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring invalid configuration file: {}", e);
            CliConfig::default()
        }
    };

    let format = cli
        .output_format
        .or(config.output_format)
        .unwrap_or_default();
    let no_color = cli.no_color || config.no_color;

    let result = match &cli.command {
        Commands::Serve {
            port,
            host,
            storage,
            cors_all,
            max_body_size,
        } => {
            let overrides = ServerOverrides {
                host: *host,
                port: *port,
                storage_dir: storage.clone(),
                cors_all: *cors_all,
                max_body_size_mb: *max_body_size,
            };
            handle_serve(&config, &overrides).await
        }
        Commands::Solve {
            kind,
            params,
            inputs,
            save_inputs,
        } => {
            let args = SolveArgs {
                kind: *kind,
                params,
                inputs: inputs.as_deref(),
                save_inputs: save_inputs.as_deref(),
                format,
                no_color,
            };
            match handle_solve(&args) {
                Ok(true) => Ok(()),
                Ok(false) => process::exit(1),
                Err(e) => Err(e),
            }
        }
        Commands::Config { command } => handle_config(command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
