use anyhow::{Context, Result};
use clap::Subcommand;
use occ_config::{BaseUrls, ConfigManager};
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Initialize a config file with default values
    Init,

    /// Print the effective configuration, including environment overrides
    Show,

    /// Show config file path
    Path,

    /// Validate config file
    Validate,
}

pub fn handle_config_command(cmd: ConfigCommand, config_path: Option<PathBuf>) -> Result<()> {
    let runtime = Runtime::new().context("Failed to create tokio runtime")?;

    runtime.block_on(async {
        match cmd {
            ConfigCommand::Init => init_config(config_path.as_deref()).await,
            ConfigCommand::Show => show_config(&resolve_path(config_path)).await,
            ConfigCommand::Path => show_config_path(&resolve_path(config_path)),
            ConfigCommand::Validate => validate_config(&resolve_path(config_path)).await,
        }
    })
}

fn resolve_path(config_path: Option<PathBuf>) -> PathBuf {
    config_path.unwrap_or_else(ConfigManager::config_path)
}

async fn init_config(config_path: Option<&Path>) -> Result<()> {
    let target = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(ConfigManager::config_path);
    if target.exists() {
        println!("Config already exists at: {}", target.display());
        println!("To reinitialize, please delete the existing config first.");
        return Ok(());
    }

    let manager = match config_path {
        Some(path) => ConfigManager::init_at(path).await?,
        None => ConfigManager::init().await?,
    };
    println!("✓ Initialized config at: {}", manager.path().display());
    Ok(())
}

async fn show_config(config_path: &Path) -> Result<()> {
    let manager = ConfigManager::load_from(config_path)
        .await
        .context("Config not found. Run 'occ config init' first.")?;
    let config = manager.into_config().with_env_overrides();

    println!("Config: {}", config_path.display());
    println!("  Version: {}", config.version);
    println!("  API base URL: {}", config.api_base_url().unwrap_or("(unset)"));
    println!("  API prefix: {}", config.backend.occ.prefix);
    println!(
        "  Media base URL: {}",
        config.media_base_url().unwrap_or("(falls back to API base URL)")
    );
    Ok(())
}

fn show_config_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

async fn validate_config(config_path: &Path) -> Result<()> {
    let manager = ConfigManager::load_from(config_path)
        .await
        .context("Config not found or invalid. Run 'occ config init' first.")?;

    manager
        .validate()
        .with_context(|| format!("Config at {} is invalid", config_path.display()))?;

    let config = manager.config();
    println!("✓ Config is valid");
    println!("  Version: {}", config.version);

    if config.api_base_url().is_none() && config.media_base_url().is_none() {
        println!("\nWarning: no base URL configured, image URLs will stay relative");
    }

    Ok(())
}
