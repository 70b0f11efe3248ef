use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey};
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use serde::Serialize;
use tokio::sync::oneshot;
use tracing::{debug, info};
use zeroize::Zeroizing;

use super::key_save::save_pem;
use crate::crypto::{format_pem, KeyKind, KeySize};
use crate::defaults::Defaults;
use crate::error::{KeygenError, KeygenResult};

/// One generated key pair, already rendered as PEM text.
pub struct GeneratedKeys {
    pub size: KeySize,
    pub public_pem: String,
    pub private_pem: Zeroizing<String>,
}

impl GeneratedKeys {
    pub fn pem(&self, kind: KeyKind) -> &str {
        match kind {
            KeyKind::Public => &self.public_pem,
            KeyKind::Private => &self.private_pem,
        }
    }
}

impl fmt::Debug for GeneratedKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedKeys")
            .field("size", &self.size)
            .field("public_pem", &self.public_pem)
            .field("private_pem", &"<redacted>")
            .finish()
    }
}

/// Generate a key pair from the OS CSPRNG.
pub fn generate(size: KeySize) -> KeygenResult<GeneratedKeys> {
    generate_with_rng(&mut OsRng, size)
}

/// Generate a key pair with exponent 65537, export public as SPKI and private as
/// PKCS#8, and render both as PEM.
pub fn generate_with_rng<R>(rng: &mut R, size: KeySize) -> KeygenResult<GeneratedKeys>
where
    R: CryptoRng + RngCore,
{
    let started = Instant::now();
    debug!(bits = size.bits(), "generating RSA key pair");

    let exponent = BigUint::from(Defaults::PUBLIC_EXPONENT);
    let private_key = RsaPrivateKey::new_with_exp(rng, size.bits(), &exponent)?;
    let public_key = RsaPublicKey::from(&private_key);

    // SecretDocument zeroizes the private DER on drop
    let private_der = private_key.to_pkcs8_der().map_err(KeygenError::ExportPrivate)?;
    let public_der = public_key.to_public_key_der().map_err(KeygenError::ExportPublic)?;

    let keys = GeneratedKeys {
        size,
        public_pem: format_pem(public_der.as_bytes(), KeyKind::Public),
        private_pem: Zeroizing::new(format_pem(private_der.as_bytes(), KeyKind::Private)),
    };

    info!(
        bits = size.bits(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "generated RSA key pair"
    );
    Ok(keys)
}

/// Run [`generate`] on tokio's blocking pool. The receiver resolves once the key
/// pair is ready; it reports `Closed` if the task panicked.
pub fn spawn(size: KeySize) -> oneshot::Receiver<KeygenResult<GeneratedKeys>> {
    let (tx, rx) = oneshot::channel();
    tokio::task::spawn_blocking(move || {
        // receiver dropped means nobody is waiting any more
        let _ = tx.send(generate(size));
    });
    rx
}

pub async fn generate_async(size: KeySize) -> KeygenResult<GeneratedKeys> {
    spawn(size)
        .await
        .map_err(|_| KeygenError::Worker("task exited without a result".into()))?
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KeyRecord<'a> {
    bits: usize,
    public_key: &'a str,
    private_key: &'a str,
}

/// Headless output: write both PEM files into `out_dir`, or print them to stdout.
pub fn emit(keys: &GeneratedKeys, out_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let stdout = io::stdout();
    write_output(&mut stdout.lock(), keys, out_dir.as_deref(), json)
}

/// [`emit`] against any writer. Saved files are reported one `✓ Wrote` line each;
/// otherwise the PEMs go to `out`, public first.
pub fn write_output<W: Write>(
    out: &mut W,
    keys: &GeneratedKeys,
    out_dir: Option<&Path>,
    json: bool,
) -> Result<()> {
    if let Some(dir) = out_dir {
        for kind in KeyKind::ALL {
            let path = save_pem(dir, kind, keys.pem(kind))
                .with_context(|| format!("saving {kind} key"))?;
            writeln!(out, "✓ Wrote {}", path.display())?;
        }
    } else if json {
        let record = KeyRecord {
            bits: keys.size.bits(),
            public_key: &keys.public_pem,
            private_key: &keys.private_pem,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
    } else {
        writeln!(out, "{}", keys.public_pem)?;
        writeln!(out, "{}", keys.private_pem.as_str())?;
    }
    out.flush()?;
    Ok(())
}
