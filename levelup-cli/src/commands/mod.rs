//! CLI command implementations

pub mod config;
pub mod login;
pub mod logout;
pub mod register;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::{Input, Password};
use levelup_core::LevelUpContext;

/// Get the LevelUp directory from environment or default
pub fn get_levelup_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("LEVELUP_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(".levelup"))
}

/// Get or create LevelUp context
pub fn get_context() -> Result<LevelUpContext> {
    let levelup_dir = get_levelup_dir()?;

    // Create directory if it doesn't exist
    std::fs::create_dir_all(&levelup_dir)
        .with_context(|| format!("Failed to create LevelUp directory: {:?}", levelup_dir))?;

    LevelUpContext::new(&levelup_dir).context("Failed to initialize LevelUp context")
}

/// Use the flag value, otherwise ask on the terminal
pub fn value_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    if let Some(v) = value {
        return Ok(v);
    }
    let v: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(v)
}

/// Use the flag value, otherwise ask for a hidden password
pub fn password_or_prompt(value: Option<String>, confirm: bool) -> Result<String> {
    if let Some(p) = value {
        return Ok(p);
    }
    let mut prompt = Password::new().with_prompt("Password").allow_empty_password(true);
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    Ok(prompt.interact()?)
}

/// Print a failure either as a JSON envelope or in red, then fail the command
pub fn report_failure(message: &str, json: bool) -> Result<()> {
    if json {
        let result = levelup_core::OperationResult::<()>::fail(message);
        println!("{}", serde_json::to_string_pretty(&result)?);
        std::process::exit(1);
    }
    anyhow::bail!("{}", message)
}
