//! Central place for all default values.
//! Update these and the whole app picks them up.

use std::time::Duration;

use crate::crypto::KeySize;

pub struct Defaults;

impl Defaults {
    /* Key generation */
    pub const KEY_SIZE: KeySize = KeySize::Rsa2048;
    pub const PUBLIC_EXPONENT: u32 = 65_537;

    /* Download */
    pub const OUT_DIR: &'static str = "./generated_keys";
    pub const PUBLIC_KEY_FILENAME: &'static str = "public_key.pem";
    pub const PRIVATE_KEY_FILENAME: &'static str = "private_key.pem";

    /* Logging */
    pub const LOG_FILE: &'static str = "./pem-keygen.log";
    pub const LOG_FILTER: &'static str = "info";

    /* UI timing */
    pub const TOAST_DURATION: Duration = Duration::from_secs(3);
    pub const TICK: Duration = Duration::from_millis(100);
}
