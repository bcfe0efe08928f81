//! Command-line driver for the login form.
//!
//! Builds an in-memory login page, fills in the two fields, clicks the button
//! and prints the outcome of every request.
//!
//! # Usage
//!
//! ```bash
//! # Prompt for credentials, post once
//! cargo run
//!
//! # Non-interactive, against another server
//! cargo run -- --base-url https://auth.example.com -u alice@example.com -p hunter2
//!
//! # Three rapid clicks, three independent requests
//! cargo run -- -u alice -p hunter2 --clicks 3
//! ```
//!
//! Exits with status 0 once every outcome has been printed, whether the
//! requests succeeded or not. Setup failures (bad configuration, missing
//! elements) exit non-zero.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::{Input, Password};
use tracing_subscriber::EnvFilter;

use login_form::config::{self, Config};
use login_form::prelude::*;

/// Posts login credentials as JSON to an OAuth2 login endpoint.
#[derive(Parser)]
#[command(name = "login-form")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Origin the login path is resolved against (overrides LOGIN_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Value typed into the email field (prompted for if omitted)
    #[arg(short, long)]
    username: Option<String>,

    /// Value typed into the password field (prompted for if omitted)
    #[arg(short, long)]
    password: Option<String>,

    /// Number of times the login button is clicked
    #[arg(short = 'n', long, default_value_t = 1)]
    clicks: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env(cli.base_url.as_deref())?;
    init_tracing(&config);
    config.print_summary();

    let username = match cli.username {
        Some(username) => username,
        None => Input::<String>::new()
            .with_prompt("Email")
            .allow_empty(true)
            .interact_text()?,
    };
    let password = match cli.password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?,
    };

    let page = MemoryDocument::new()
        .with_button(BUTTON_ID)
        .with_input(IDENTIFIER_INPUT_ID, username)
        .with_input(SECRET_INPUT_ID, password);

    let transport = HttpLoginTransport::new(config.parsed_base_url()?, config.max_redirects)
        .context("Failed to create HTTP client")?;
    let (reporter, mut reports) = ChannelReporter::channel();

    bind_login_form(&page, Arc::new(transport), Arc::new(reporter))
        .context("Failed to bind login form")?;

    let button = page
        .button(BUTTON_ID)
        .context("Login button disappeared after binding")?;

    for _ in 0..cli.clicks {
        button.click();
    }

    let log = TracingReporter::new();
    let mut received = 0;

    while received < cli.clicks {
        tokio::select! {
            report = reports.recv() => {
                let Some(report) = report else { break };
                received += 1;
                print_report(&log, &report);
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::warn!(pending = cli.clicks - received, "Interrupted");
                break;
            }
        }
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn print_report(log: &TracingReporter, report: &Report) {
    match report {
        Report::Response(response) => {
            log.response(response);
            println!(
                "{} {} {}",
                "✓".green(),
                response.status.to_string().dimmed(),
                response.to_json_string()
            );
        }
        Report::Failure(error) => {
            log.failure(error);
            println!("{} {}", "✗".red(), error.to_string().red());
        }
    }
}
