//! Login command - sign in and store the session token

use anyhow::Result;
use colored::Colorize;
use levelup_core::services::messages;
use levelup_core::OperationResult;

use super::{get_context, password_or_prompt, report_failure, value_or_prompt};
use crate::output;

pub async fn run(username: Option<String>, password: Option<String>, json: bool) -> Result<()> {
    let username = value_or_prompt(username, "Username")?;
    let password = password_or_prompt(password, false)?;

    if let Err(message) = messages::check_credentials(&username, &password) {
        return report_failure(message, json);
    }

    let ctx = get_context()?;

    let spinner = output::spinner("Signing in...", json);
    let result = ctx.auth_service.login(&username, &password).await;
    spinner.finish_and_clear();

    let user = match result {
        Ok(user) => user,
        Err(e) => {
            tracing::debug!(error = %e, "login failed");
            return report_failure(messages::failure_message(&e), json);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&OperationResult::ok(user))?);
        return Ok(());
    }

    println!("\n{} Signed in as {}\n", "✓".green(), user.username.bold());
    println!("{}", output::user_table(&user));

    Ok(())
}
