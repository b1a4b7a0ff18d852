//! Output formatting utilities

use std::time::Duration;

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use levelup_core::User;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Loading indicator shown while a request is in flight
///
/// Hidden when stderr is not a terminal or when output is JSON.
pub fn spinner(msg: &str, json: bool) -> ProgressBar {
    if json || atty::isnt(atty::Stream::Stderr) {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(msg.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Key-value table describing a user
pub fn user_table(user: &User) -> Table {
    let mut table = create_table();
    table.add_row(vec!["ID", user.id.as_str()]);
    table.add_row(vec!["Username", user.username.as_str()]);
    table.add_row(vec!["Email", user.email.as_str()]);
    if let Some(full_name) = &user.full_name {
        table.add_row(vec!["Name", full_name.as_str()]);
    }
    if let Some(url) = &user.profile_image_url {
        table.add_row(vec!["Profile image", url.as_str()]);
    }
    if let Some(created_at) = &user.created_at {
        table.add_row(vec!["Member since".to_string(), created_at.format("%Y-%m-%d").to_string()]);
    }
    if let Some(last_login_at) = &user.last_login_at {
        table.add_row(vec![
            "Last login".to_string(),
            last_login_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        ]);
    }
    table
}

/// Show only the edges of a token
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
