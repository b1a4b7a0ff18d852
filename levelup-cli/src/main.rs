//! LevelUp CLI - account access from the terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{config, login, logout, register, status};

/// Environment variable holding the tracing filter
const LOG_ENV: &str = "LEVELUP_LOG";

/// LevelUp - sign in and manage your session
#[derive(Parser)]
#[command(name = "lu", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session token
    Login {
        /// Account username (prompted when omitted)
        #[arg(short, long)]
        username: Option<String>,
        /// Account password (prompted when omitted)
        #[arg(short, long, env = "LEVELUP_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create an account and sign in
    Register {
        /// Desired username
        #[arg(short, long)]
        username: String,
        /// Contact email
        #[arg(short, long)]
        email: String,
        /// Account password (prompted when omitted)
        #[arg(short, long, env = "LEVELUP_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Display name
        #[arg(long)]
        full_name: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Forget the stored session token
    Logout {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show session status
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change the API base URL
    Config {
        /// New API base URL
        #[arg(long)]
        base_url: Option<String>,
        /// Restore the default API base URL
        #[arg(long, conflicts_with = "base_url")]
        reset: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr subscriber; `LEVELUP_LOG` accepts EnvFilter directives
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login { username, password, json } => login::run(username, password, json).await,
        Commands::Register { username, email, password, full_name, json } => {
            register::run(username, email, password, full_name, json).await
        }
        Commands::Logout { json } => logout::run(json),
        Commands::Status { json } => status::run(json),
        Commands::Config { base_url, reset, json } => config::run(base_url, reset, json),
    }
}
