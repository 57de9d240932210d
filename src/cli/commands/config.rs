//! Configuration management commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::cli::output::{print_formatted, print_success, OutputFormat};
use crate::config::{self, Config};
use crate::ui::theme::ThemePreset;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Get a specific config value
    Get {
        /// Config key (e.g., "backend.origin", "auth.require_sign_in")
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., "backend.origin", "auth.require_sign_in")
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

#[derive(Serialize)]
struct ConfigPathResult {
    path: String,
    exists: bool,
}

pub async fn run(command: ConfigCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => show(format),
        ConfigCommands::Get { key } => get(&key, format),
        ConfigCommands::Set { key, value } => set(&key, &value, quiet),
        ConfigCommands::Path => path(format),
    }
}

fn show(format: OutputFormat) -> Result<()> {
    let config = Config::load()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Text => println!("{}", toml::to_string_pretty(&config)?),
    }

    Ok(())
}

fn get(key: &str, format: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let value = get_config_value(&config, key)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&value)?),
        OutputFormat::Text => println!("{}", value),
    }

    Ok(())
}

fn get_config_value(config: &Config, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["backend", "origin"] => Ok(config.backend.origin.clone()),
        ["auth", "require_sign_in"] => Ok(config.auth.require_sign_in.to_string()),
        ["auth", "sign_in_url"] => Ok(config
            .auth
            .sign_in_url
            .clone()
            .unwrap_or_else(|| "<not set>".to_string())),
        ["ui", "theme"] => Ok(config.ui.theme.name().to_lowercase()),
        ["ui", "fetch_on_start"] => Ok(config.ui.fetch_on_start.to_string()),
        _ => anyhow::bail!("Unknown config key: {}", key),
    }
}

fn set(key: &str, value: &str, quiet: bool) -> Result<()> {
    let mut config = Config::load()?;

    set_config_value(&mut config, key, value)?;
    config.save()?;

    print_success(&format!("Set {} = {}", key, value), quiet);
    Ok(())
}

fn set_config_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["backend", "origin"] => {
            config::validate_origin(value)?;
            config.backend.origin = value.to_string();
        }
        ["auth", "require_sign_in"] => {
            config.auth.require_sign_in = value.parse()?;
        }
        ["auth", "sign_in_url"] => {
            config.auth.sign_in_url = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            };
        }
        ["ui", "theme"] => {
            config.ui.theme = ThemePreset::from_name(value)
                .ok_or_else(|| anyhow::anyhow!("Unknown theme: {}", value))?;
        }
        ["ui", "fetch_on_start"] => {
            config.ui.fetch_on_start = value.parse()?;
        }
        _ => anyhow::bail!("Unknown config key: {}", key),
    }

    Ok(())
}

fn path(format: OutputFormat) -> Result<()> {
    let path = Config::config_path()?;
    let exists = path.exists();

    let result = ConfigPathResult {
        path: path.to_string_lossy().to_string(),
        exists,
    };

    print_formatted(&result, format, |r| {
        format!("{}{}", r.path, if r.exists { "" } else { " (not found)" })
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let mut config = Config::default();

        set_config_value(&mut config, "backend.origin", "https://ideas.example.com").unwrap();
        set_config_value(&mut config, "auth.require_sign_in", "true").unwrap();
        set_config_value(&mut config, "ui.theme", "indigo").unwrap();
        set_config_value(&mut config, "ui.fetch_on_start", "false").unwrap();

        assert_eq!(
            get_config_value(&config, "backend.origin").unwrap(),
            "https://ideas.example.com"
        );
        assert_eq!(get_config_value(&config, "auth.require_sign_in").unwrap(), "true");
        assert_eq!(get_config_value(&config, "ui.theme").unwrap(), "indigo");
        assert_eq!(get_config_value(&config, "ui.fetch_on_start").unwrap(), "false");
    }

    #[test]
    fn test_sign_in_url_can_be_cleared() {
        let mut config = Config::default();
        set_config_value(&mut config, "auth.sign_in_url", "https://accounts.example.com").unwrap();
        assert_eq!(config.auth.sign_in_url.as_deref(), Some("https://accounts.example.com"));

        set_config_value(&mut config, "auth.sign_in_url", "").unwrap();
        assert_eq!(get_config_value(&config, "auth.sign_in_url").unwrap(), "<not set>");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = Config::default();
        assert!(set_config_value(&mut config, "backend.origin", "localhost").is_err());
        assert!(set_config_value(&mut config, "auth.require_sign_in", "maybe").is_err());
        assert!(set_config_value(&mut config, "ui.theme", "neon").is_err());
        assert!(set_config_value(&mut config, "game.directory", "/tmp").is_err());
        assert_eq!(config, Config::default());
    }
}
