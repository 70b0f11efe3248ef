//! Local RSA key pair generation with PEM output, as an interactive terminal page
//! (`app`, `screens`) and as headless commands (`commands`).

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod crypto;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod screens;
pub mod session;
pub mod ui;

pub use commands::keygen::{generate, generate_with_rng, GeneratedKeys};
pub use crypto::{decode_pem, format_pem, KeyKind, KeySize};
pub use error::{KeygenError, KeygenResult};
