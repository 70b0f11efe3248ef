//! Copy-to-clipboard through the terminal (OSC 52).
//!
//! The terminal emulator owns the system clipboard, so the copy is an escape
//! sequence written to the same output stream the UI draws on. Works over SSH.

use std::fmt;
use std::io::Write;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use crossterm::{queue, Command};

use crate::error::{KeygenError, KeygenResult};

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> KeygenResult<()>;
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub struct SetClipboard<'a>(pub &'a str);

impl Command for SetClipboard<'_> {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b]52;c;{}\x07", BASE64.encode(self.0))
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "clipboard copy needs an ANSI capable terminal",
        ))
    }
}

pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ClipboardSink for Osc52Clipboard<W> {
    fn set_text(&mut self, text: &str) -> KeygenResult<()> {
        queue!(self.out, SetClipboard(text)).map_err(KeygenError::Clipboard)?;
        self.out.flush().map_err(KeygenError::Clipboard)
    }
}
