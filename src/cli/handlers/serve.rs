//! `serve` command handler

use crate::cli::config::{CliConfig, ServerOverrides};
use crate::cli::server::start_server;

pub async fn handle_serve(config: &CliConfig, overrides: &ServerOverrides) -> anyhow::Result<()> {
    let server_config = config.server_config(overrides);
    start_server(server_config).await
}
