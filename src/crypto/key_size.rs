use std::fmt;
use std::str::FromStr;

use crate::defaults::Defaults;
use crate::error::KeygenError;

/// RSA modulus lengths offered by the key-size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySize {
    Rsa1024,
    Rsa2048,
    Rsa3072,
    Rsa4096,
}

impl KeySize {
    pub const ALL: [KeySize; 4] = [
        KeySize::Rsa1024,
        KeySize::Rsa2048,
        KeySize::Rsa3072,
        KeySize::Rsa4096,
    ];

    pub fn bits(self) -> usize {
        match self {
            KeySize::Rsa1024 => 1024,
            KeySize::Rsa2048 => 2048,
            KeySize::Rsa3072 => 3072,
            KeySize::Rsa4096 => 4096,
        }
    }

    pub fn from_bits(bits: usize) -> Result<Self, KeygenError> {
        Self::ALL
            .into_iter()
            .find(|s| s.bits() == bits)
            .ok_or(KeygenError::UnsupportedKeySize(bits))
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next larger size, wrapping to the smallest.
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Next smaller size, wrapping to the largest.
    pub fn prev(self) -> Self {
        let n = Self::ALL.len();
        Self::ALL[(self.position() + n - 1) % n]
    }
}

impl Default for KeySize {
    fn default() -> Self {
        Defaults::KEY_SIZE
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.bits())
    }
}

impl FromStr for KeySize {
    type Err = KeygenError;

    /// Accepts `2048` as well as the display form `2048 bits`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_end_matches("bits").trim();
        let bits: usize = digits
            .parse()
            .map_err(|_| KeygenError::InvalidKeySize(s.to_string()))?;
        Self::from_bits(bits)
    }
}
