use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use pem_keygen::app::{self, AppConfig};
use pem_keygen::cli::{Cli, Command};
use pem_keygen::commands::{keygen, verify};
use pem_keygen::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    app::block_on(run(cli))?
}

async fn run(cli: Cli) -> Result<()> {
    match cli.cmd.clone().unwrap_or(Command::Tui) {
        Command::Tui => {
            logging::init_file(&cli.log_file)?;
            app::run(AppConfig { key_size: cli.bits, out_dir: cli.out_dir }).await
        }

        Command::Generate { save, json } => {
            logging::init_stderr();
            let keys = keygen::generate_async(cli.bits)
                .await
                .with_context(|| format!("generating {}-bit RSA key pair", cli.bits.bits()))?;
            keygen::emit(&keys, save.then_some(cli.out_dir), json)
        }

        Command::Verify { path } => {
            logging::init_stderr();
            let text = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            let found = verify::inspect(&text).with_context(|| format!("checking {}", path.display()))?;
            println!(
                "✓ {}: {} key, {}-bit modulus, {} DER bytes",
                path.display(),
                found.kind,
                found.modulus_bits,
                found.der_len
            );
            Ok(())
        }
    }
}
