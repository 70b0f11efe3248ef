//! State behind the key generation page: the selected key size, whether a
//! generation is running, and the most recent key pair.

use tracing::error;

use crate::commands::keygen::GeneratedKeys;
use crate::crypto::{KeyKind, KeySize};
use crate::error::{KeygenError, KeygenResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Generating,
}

#[derive(Debug, Default)]
pub struct KeygenSession {
    key_size: KeySize,
    phase: Phase,
    keys: Option<GeneratedKeys>,
}

impl KeygenSession {
    pub fn new(key_size: KeySize) -> Self {
        Self { key_size, ..Self::default() }
    }

    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// The selector is frozen while a generation is running.
    pub fn set_key_size(&mut self, size: KeySize) {
        if !self.is_generating() {
            self.key_size = size;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_generating(&self) -> bool {
        self.phase == Phase::Generating
    }

    /// Start a generation. Hides the previous pair and returns the size to use.
    pub fn begin(&mut self) -> KeygenResult<KeySize> {
        if self.is_generating() {
            return Err(KeygenError::Busy);
        }
        self.phase = Phase::Generating;
        self.keys = None;
        Ok(self.key_size)
    }

    /// Record the outcome and go back to idle. On failure returns the message to
    /// show the user; nothing of the failed attempt is kept.
    pub fn finish(&mut self, outcome: KeygenResult<GeneratedKeys>) -> Option<String> {
        self.phase = Phase::Idle;
        match outcome {
            Ok(keys) => {
                self.keys = Some(keys);
                None
            }
            Err(e) => {
                error!(error = %e, bits = self.key_size.bits(), "key generation failed");
                self.keys = None;
                Some(format!("Error generating keys: {e}"))
            }
        }
    }

    pub fn keys(&self) -> Option<&GeneratedKeys> {
        self.keys.as_ref()
    }

    /// PEM text for `kind`, or `None` when there is nothing to copy or download.
    pub fn pem(&self, kind: KeyKind) -> Option<&str> {
        self.keys
            .as_ref()
            .map(|k| k.pem(kind))
            .filter(|text| !text.is_empty())
    }
}
