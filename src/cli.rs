use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::crypto::KeySize;
use crate::defaults::Defaults;

/// Offline RSA key pair generator with PEM output
#[derive(Parser, Debug)]
#[command(version, about = "Offline RSA key pair generator (SPKI / PKCS#8 PEM)")]
pub struct Cli {
    /// RSA modulus length: 1024, 2048, 3072 or 4096
    #[arg(long, global = true, env = "PEM_KEYGEN_BITS", default_value_t = Defaults::KEY_SIZE, value_parser = parse_key_size)]
    pub bits: KeySize,

    /// Directory that downloaded/saved keys are written to
    #[arg(long, global = true, env = "PEM_KEYGEN_OUT_DIR", default_value = Defaults::OUT_DIR)]
    pub out_dir: PathBuf,

    /// Log file used while the interactive page owns the terminal
    #[arg(long, global = true, env = "PEM_KEYGEN_LOG_FILE", default_value = Defaults::LOG_FILE)]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive key generation page (default)
    Tui,

    /// Generate one key pair without the UI
    Generate {
        /// Write public_key.pem / private_key.pem into --out-dir instead of printing
        #[arg(long)]
        save: bool,

        /// Print a JSON object instead of the two PEM blocks
        #[arg(long, conflicts_with = "save")]
        json: bool,
    },

    /// Check that a PEM file is well formed and holds an RSA key
    Verify {
        /// Path to the .pem file
        path: PathBuf,
    },
}

fn parse_key_size(s: &str) -> Result<KeySize, String> {
    s.parse().map_err(|e: crate::error::KeygenError| e.to_string())
}
