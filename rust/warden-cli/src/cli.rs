use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Invoke a warden ledger stored in a local directory
#[derive(Debug, Parser)]
#[command(name = "warden")]
#[command(bin_name = "warden")]
#[command(version, about, long_about = None)]
pub struct WardenCli {
    /// Directory holding the ledger state
    #[arg(short, long, env = "WARDEN_LEDGER", default_value = ".warden")]
    pub ledger: PathBuf,

    /// The caller's credential, taken verbatim as bytes
    #[arg(short, long, env = "WARDEN_CALLER", conflicts_with = "caller_file")]
    pub caller: Option<String>,

    /// A file holding the caller's raw credential (e.g. a certificate)
    #[arg(long, env = "WARDEN_CALLER_FILE")]
    pub caller_file: Option<PathBuf>,

    /// JSON file with chaincode settings
    #[arg(short, long, env = "WARDEN_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Print the whole response as JSON instead of the raw payload
    #[arg(long)]
    pub json: bool,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// The commands understood by `warden`
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Instantiate the ledger, making the caller its owner
    Init,

    /// Invoke an operation (role-assign, save, query)
    Invoke {
        /// Operation name
        function: String,

        /// Operation arguments
        args: Vec<String>,
    },

    /// Print the identity string of the caller
    Identity,
}
