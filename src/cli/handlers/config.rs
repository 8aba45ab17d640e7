//! Configuration management handler

use crate::cli::ConfigCommands;
use crate::cli::config::CliConfig;
use std::path::{Path, PathBuf};

/// Handle config subcommands
pub fn handle_config(command: &ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => handle_show(),
        ConfigCommands::Path => handle_path(),
        ConfigCommands::Init { force, path } => handle_init(*force, path.as_deref()),
    }
}

fn handle_show() -> anyhow::Result<()> {
    let config = CliConfig::load()?;
    let toml_str = toml::to_string_pretty(&config)?;

    println!("📄 Current Configuration:\n");
    println!("{}", toml_str);

    if let Some(path) = CliConfig::find_config_file() {
        println!("\n💾 Loaded from: {}", path.display());
    } else {
        println!("\n💡 No configuration file found (using defaults)");
        println!("   Run `formula-lab config init` to create one");
    }

    Ok(())
}

fn handle_path() -> anyhow::Result<()> {
    if let Some(path) = CliConfig::find_config_file() {
        println!("📍 Config file: {}", path.display());
    } else {
        println!("❌ No configuration file found");
        if let Some(default_path) = CliConfig::default_path() {
            println!("💡 Default location: {}", default_path.display());
        }
    }
    Ok(())
}

fn handle_init(force: bool, path: Option<&Path>) -> anyhow::Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => CliConfig::default_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
    };

    if target_path.exists() && !force {
        return Err(anyhow::anyhow!(
            "Configuration file already exists: {}\nUse --force to overwrite",
            target_path.display()
        ));
    }

    std::fs::write(&target_path, CliConfig::sample_config())?;
    println!("✅ Created configuration file: {}", target_path.display());

    Ok(())
}
