//! PEM text framing for exported key buffers.
//!
//! The DER bytes come straight from the `rsa`/`pkcs8` exporters; this module only
//! base64-encodes them, wraps the body at 64 columns and adds the delimiter lines.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use zeroize::Zeroizing;

use crate::defaults::Defaults;
use crate::error::{KeygenError, KeygenResult};

/// Maximum number of base64 characters on one body line.
pub const LINE_WIDTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// SubjectPublicKeyInfo (SPKI) DER.
    Public,
    /// PKCS#8 PrivateKeyInfo DER.
    Private,
}

impl KeyKind {
    pub const ALL: [KeyKind; 2] = [KeyKind::Public, KeyKind::Private];

    pub fn label(self) -> &'static str {
        match self {
            KeyKind::Public => "PUBLIC KEY",
            KeyKind::Private => "PRIVATE KEY",
        }
    }

    pub fn header(self) -> String {
        format!("-----BEGIN {}-----", self.label())
    }

    pub fn footer(self) -> String {
        format!("-----END {}-----", self.label())
    }

    /// File name used by the download action.
    pub fn default_filename(self) -> &'static str {
        match self {
            KeyKind::Public => Defaults::PUBLIC_KEY_FILENAME,
            KeyKind::Private => Defaults::PRIVATE_KEY_FILENAME,
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyKind::Public => "public",
            KeyKind::Private => "private",
        })
    }
}

/// Frame `der` as PEM: header, base64 body in lines of at most [`LINE_WIDTH`]
/// characters, footer. Lines are separated by `\n`, no newline after the footer.
pub fn format_pem(der: &[u8], kind: KeyKind) -> String {
    // The base64 body of a private key is as sensitive as the DER itself.
    let body = Zeroizing::new(BASE64.encode(der));
    let header = kind.header();
    let footer = kind.footer();

    let mut out = String::with_capacity(
        header.len() + footer.len() + body.len() + body.len() / LINE_WIDTH + 2,
    );
    out.push_str(&header);
    out.push('\n');

    let mut rest = body.as_str();
    while !rest.is_empty() {
        // base64 is pure ASCII, any byte offset is a char boundary
        let (line, tail) = rest.split_at(rest.len().min(LINE_WIDTH));
        out.push_str(line);
        out.push('\n');
        rest = tail;
    }

    out.push_str(&footer);
    out
}

/// Parse PEM text produced by [`format_pem`] (or any strict RFC 7468 encoder for
/// the two key labels) back into its kind and DER bytes.
pub fn decode_pem(text: &str) -> KeygenResult<(KeyKind, Vec<u8>)> {
    let mut lines = text.trim().lines();

    let header = lines
        .next()
        .filter(|l| !l.is_empty())
        .ok_or_else(|| KeygenError::Pem("empty input".into()))?;
    let kind = KeyKind::ALL
        .into_iter()
        .find(|k| header == k.header())
        .ok_or_else(|| KeygenError::Pem(format!("unrecognized header {header:?}")))?;
    let footer = kind.footer();

    let mut body = Zeroizing::new(String::new());
    let mut closed = false;
    for line in lines {
        if closed {
            return Err(KeygenError::Pem("data after footer".into()));
        }
        if line == footer {
            closed = true;
            continue;
        }
        if line.starts_with("-----") {
            return Err(KeygenError::Pem(format!("mismatched delimiter {line:?}")));
        }
        if line.len() > LINE_WIDTH {
            return Err(KeygenError::Pem(format!(
                "body line of {} characters exceeds {LINE_WIDTH}",
                line.len()
            )));
        }
        body.push_str(line);
    }
    if !closed {
        return Err(KeygenError::Pem(format!("missing {footer:?}")));
    }

    let der = BASE64
        .decode(body.as_bytes())
        .map_err(|e| KeygenError::Pem(format!("invalid base64 body: {e}")))?;
    Ok((kind, der))
}
