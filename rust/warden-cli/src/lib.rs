#![warn(missing_docs)]

//! Drive a warden ledger stored in a local directory from the command line.

mod cli;
pub use cli::*;

use anyhow::{Context, Result};
use warden_access::Identity;
use warden_chaincode::{Chaincode, ChaincodeSettings, Engine, Invocation, Response};
use warden_storage::FileSystemLedger;

impl WardenCli {
    /// The caller's raw credential, read from `--caller-file` or taken
    /// from `--caller`. `None` when neither is given.
    pub async fn credential(&self) -> Result<Option<Vec<u8>>> {
        if let Some(path) = &self.caller_file {
            let credential = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read credential from {}", path.display()))?;
            return Ok(Some(credential));
        }
        Ok(self.caller.as_ref().map(|caller| caller.as_bytes().to_vec()))
    }

    /// The chaincode settings, read from `--settings` if given
    pub async fn settings(&self) -> Result<ChaincodeSettings> {
        match &self.settings {
            Some(path) => {
                let json = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read settings from {}", path.display()))?;
                ChaincodeSettings::from_json(&json)
                    .with_context(|| format!("Invalid settings in {}", path.display()))
            }
            None => Ok(ChaincodeSettings::default()),
        }
    }

    /// What to print on stdout for `response`: its JSON form with `--json`,
    /// otherwise the payload of a success followed by a newline (nothing for
    /// an empty payload or a failure).
    pub fn output(&self, response: &Response) -> Result<Vec<u8>> {
        let mut output = if self.json {
            serde_json::to_vec(response)?
        } else {
            response.payload().to_vec()
        };
        if !output.is_empty() {
            output.push(b'\n');
        }
        Ok(output)
    }
}

/// Run the command described by `cli` and return the chaincode's response
pub async fn run(cli: &WardenCli) -> Result<Response> {
    let credential = cli.credential().await?;
    tracing::debug!(ledger = %cli.ledger.display(), command = ?cli.command, "Running command");

    Ok(match &cli.command {
        Command::Identity => {
            let credential =
                credential.context("No caller given; pass --caller or --caller-file")?;
            let identity = Identity::resolve(&credential);
            Response::success(identity.as_str().as_bytes().to_vec())
        }
        Command::Init => open(cli).await?.init(credential).await,
        Command::Invoke { function, args } => {
            let invocation = Invocation::new(function.as_str(), args.iter().cloned());
            open(cli).await?.invoke(credential, &invocation).await
        }
    })
}

async fn open(cli: &WardenCli) -> Result<Engine<FileSystemLedger>> {
    let settings = cli.settings().await?;
    let ledger = FileSystemLedger::new(&cli.ledger)
        .await
        .with_context(|| format!("Failed to open ledger at {}", cli.ledger.display()))?;
    Ok(Engine::new(Chaincode::new(settings), ledger))
}
