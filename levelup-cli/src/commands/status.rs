//! Status command - show session status

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::get_context;
use crate::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionStatus {
    authenticated: bool,
    base_url: String,
    session_path: String,
    token: Option<String>,
}

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let token = ctx.auth_service.token()?;

    let status = SessionStatus {
        authenticated: token.is_some(),
        base_url: ctx.http_client().base_url().to_string(),
        session_path: ctx.session_path.display().to_string(),
        token: token.as_deref().map(output::mask_token),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "Session Status".bold());
    println!();

    let mut table = output::create_table();
    let state = if status.authenticated {
        "Signed in".green().to_string()
    } else {
        "Signed out".dimmed().to_string()
    };
    table.add_row(vec!["Session".to_string(), state]);
    table.add_row(vec!["API".to_string(), status.base_url.clone()]);
    table.add_row(vec!["Token file".to_string(), status.session_path.clone()]);
    if let Some(token) = &status.token {
        table.add_row(vec!["Token".to_string(), token.clone()]);
    }
    println!("{}", table);

    if !status.authenticated {
        println!();
        output::warning("Not signed in. Use 'lu login' to start a session.");
    }

    Ok(())
}
