//! Error types for key generation, export and the copy/download actions.

use std::path::PathBuf;

use thiserror::Error;

use crate::crypto::KeyKind;

pub type KeygenResult<T> = Result<T, KeygenError>;

#[derive(Error, Debug)]
pub enum KeygenError {
    #[error("unsupported key size: {0} bits (expected 1024, 2048, 3072 or 4096)")]
    UnsupportedKeySize(usize),

    #[error("invalid key size {0:?}")]
    InvalidKeySize(String),

    #[error("{0}")]
    Generate(#[from] rsa::Error),

    #[error("PKCS#8 export failed: {0}")]
    ExportPrivate(#[source] rsa::pkcs8::Error),

    #[error("SPKI export failed: {0}")]
    ExportPublic(#[source] rsa::pkcs8::spki::Error),

    /// The blocking generation task went away without reporting a result.
    #[error("key generation task failed: {0}")]
    Worker(String),

    #[error("key generation already in progress")]
    Busy,

    #[error("no {0} key to export")]
    EmptyKey(KeyKind),

    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("clipboard write failed: {0}")]
    Clipboard(#[source] std::io::Error),

    #[error("malformed PEM: {0}")]
    Pem(String),

    #[error("not a valid {kind} key: {reason}")]
    InvalidKey { kind: KeyKind, reason: String },
}
