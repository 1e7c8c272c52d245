use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use warden_cli::{WardenCli, run};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = WardenCli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let response = run(&cli).await?;
    std::io::stdout().lock().write_all(&cli.output(&response)?)?;

    if let Some(message) = response.message() {
        if !cli.json {
            eprintln!("Error: {message}");
        }
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
