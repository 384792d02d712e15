//! Command-line link checker.
//!
//! Runs the same validation as the HTTP service without starting a server,
//! which is handy when triaging a broken QR code.
//!
//! # Usage
//!
//! ```bash
//! # Check links the way POST /validate does
//! cargo run --bin check -- https://1drv.ms/x/s!abc https://contoso.sharepoint.com/doc
//!
//! # Probe any host, like POST /validate-batch
//! cargo run --bin check -- --all-domains https://example.com/file
//!
//! # Shorter per-probe timeout
//! cargo run --bin check -- --timeout 3 https://1drv.ms/x/s!abc
//! ```
//!
//! Exits with status 1 if any URL is invalid.
//!
//! # Environment Variables
//!
//! `PROBE_*` variables are honoured as in the server; `--timeout` overrides
//! `PROBE_TIMEOUT_SECONDS`.

use qr_link_validator::application::services::ValidationService;
use qr_link_validator::config::Config;
use qr_link_validator::domain::entities::ValidationResult;
use qr_link_validator::infrastructure::probe::HttpProber;

use anyhow::Result;
use clap::Parser;
use colored::*;
use std::process::ExitCode;
use std::sync::Arc;

/// Check OneDrive/SharePoint links from the command line.
#[derive(Parser)]
#[command(name = "check")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URLs to check
    #[arg(required = true)]
    urls: Vec<String>,

    /// Per-probe timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Probe every URL, skipping the OneDrive/SharePoint allow-list
    #[arg(short, long)]
    all_domains: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(timeout) = cli.timeout {
        config.probe_timeout_seconds = timeout;
    }
    config.validate()?;

    let prober = HttpProber::new(&config.probe_settings())?;
    let service = ValidationService::new(Arc::new(prober));

    let results = if cli.all_domains {
        service.validate_batch(cli.urls).await.results
    } else {
        let mut results = Vec::with_capacity(cli.urls.len());
        for url in &cli.urls {
            results.push(service.validate(url).await);
        }
        results
    };

    for result in &results {
        print_result(result);
    }

    let invalid = results.iter().filter(|r| !r.valid).count();
    println!();
    println!(
        "{} checked, {} valid, {} invalid",
        results.len(),
        (results.len() - invalid).to_string().green(),
        invalid.to_string().red()
    );

    Ok(if invalid == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_result(result: &ValidationResult) {
    if result.valid {
        println!("{} {}", "VALID  ".green().bold(), result.url);
    } else {
        println!(
            "{} {} ({})",
            "INVALID".red().bold(),
            result.url,
            result.error.as_deref().unwrap_or("unknown reason").dimmed()
        );
    }
}
