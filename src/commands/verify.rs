use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::crypto::{decode_pem, KeyKind};
use crate::error::{KeygenError, KeygenResult};

/// What `verify` found in a PEM file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub kind: KeyKind,
    pub der_len: usize,
    pub modulus_bits: usize,
}

/// Decode PEM text and make sure the body parses as the RSA key its label claims.
pub fn inspect(text: &str) -> KeygenResult<Inspection> {
    let (kind, der) = decode_pem(text)?;

    let public = match kind {
        KeyKind::Public => RsaPublicKey::from_public_key_der(&der).map_err(|e| {
            KeygenError::InvalidKey { kind, reason: e.to_string() }
        })?,
        KeyKind::Private => {
            let private = RsaPrivateKey::from_pkcs8_der(&der).map_err(|e| {
                KeygenError::InvalidKey { kind, reason: e.to_string() }
            })?;
            RsaPublicKey::from(&private)
        }
    };

    Ok(Inspection {
        kind,
        der_len: der.len(),
        modulus_bits: public.size() * 8,
    })
}
