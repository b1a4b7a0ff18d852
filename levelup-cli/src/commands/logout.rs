//! Logout command - forget the stored session token

use anyhow::Result;
use levelup_core::OperationResult;
use serde_json::json;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let was_authenticated = ctx.auth_service.is_authenticated();

    ctx.auth_service.logout()?;

    if json {
        let result = OperationResult::ok(())
            .with_context("wasAuthenticated", json!(was_authenticated));
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if was_authenticated {
        output::success("Signed out");
    } else {
        output::info("No active session");
    }

    Ok(())
}
