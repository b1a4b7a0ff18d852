//! Config command - show or change the API base URL

use anyhow::Result;
use colored::Colorize;
use levelup_core::config::{BASE_URL_ENV, DEFAULT_BASE_URL};
use serde_json::json;

use super::{get_context, get_levelup_dir};
use crate::output;

pub fn run(base_url: Option<String>, reset: bool, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let mut config = ctx.config;

    let changed = if reset {
        config.set_base_url(DEFAULT_BASE_URL)?;
        true
    } else if let Some(url) = base_url {
        config.set_base_url(&url)?;
        true
    } else {
        false
    };

    if changed {
        config.save(&get_levelup_dir()?)?;
    }

    let env_override = std::env::var(BASE_URL_ENV).ok().filter(|v| !v.trim().is_empty());

    if json {
        let value = json!({
            "baseUrl": config.base_url,
            "isDefault": config.is_default(),
            "envOverride": env_override,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if changed {
        output::success(&format!("API base URL set to {}", config.base_url));
    } else {
        let suffix = if config.is_default() { " (default)".dimmed().to_string() } else { String::new() };
        println!("{} {}{}", "API base URL:".bold(), config.base_url, suffix);
    }

    if let Some(value) = env_override {
        output::warning(&format!("{} is set and takes precedence: {}", BASE_URL_ENV, value));
    }

    Ok(())
}
