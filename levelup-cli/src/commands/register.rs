//! Register command - create an account and start a session

use anyhow::Result;
use colored::Colorize;
use levelup_core::services::messages;
use levelup_core::{OperationResult, RegistrationData};

use super::{get_context, password_or_prompt, report_failure};
use crate::output;

pub async fn run(
    username: String,
    email: String,
    password: Option<String>,
    full_name: Option<String>,
    json: bool,
) -> Result<()> {
    let password = password_or_prompt(password, true)?;

    if let Err(message) = messages::check_credentials(&username, &password) {
        return report_failure(message, json);
    }

    let mut data = RegistrationData::new(username, email, password);
    if let Some(name) = full_name.filter(|n| !n.trim().is_empty()) {
        data = data.with_full_name(name);
    }

    let ctx = get_context()?;

    let spinner = output::spinner("Creating account...", json);
    let result = ctx.auth_service.register(data).await;
    spinner.finish_and_clear();

    let user = match result {
        Ok(user) => user,
        Err(e) => {
            tracing::debug!(error = %e, "registration failed");
            return report_failure(messages::failure_message(&e), json);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&OperationResult::ok(user))?);
        return Ok(());
    }

    println!("\n{} Account created for {}\n", "✓".green(), user.username.bold());
    println!("{}", output::user_table(&user));

    Ok(())
}
