use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::crypto::KeyKind;
use crate::error::{KeygenError, KeygenResult};

/// "Download" a PEM: write it to `<dir>/<kind's default file name>`.
///
/// Empty text is refused, the directory is created on demand and the file is
/// terminated with a newline. On Unix the private key file is left readable by
/// the owner only.
pub fn save_pem(dir: &Path, kind: KeyKind, text: &str) -> KeygenResult<PathBuf> {
    if text.trim().is_empty() {
        return Err(KeygenError::EmptyKey(kind));
    }

    fs::create_dir_all(dir).map_err(|source| KeygenError::Io {
        action: "creating directory",
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(kind.default_filename());
    write_key_file(&path, kind, text).map_err(|source| KeygenError::Io {
        action: "writing",
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), %kind, "saved key");
    Ok(path)
}

fn write_key_file(path: &Path, kind: KeyKind, text: &str) -> io::Result<()> {
    let mut file = open_for(path, kind)?;
    file.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        file.write_all(b"\n")?;
    }
    file.flush()
}

#[cfg(unix)]
fn open_for(path: &Path, kind: KeyKind) -> io::Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mode = match kind {
        KeyKind::Public => 0o644,
        KeyKind::Private => 0o600,
    };
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(mode)
        .open(path)?;
    // mode() only applies on creation; tighten a pre-existing file too
    if kind == KeyKind::Private {
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    Ok(file)
}

#[cfg(not(unix))]
fn open_for(path: &Path, _kind: KeyKind) -> io::Result<File> {
    OpenOptions::new().write(true).create(true).truncate(true).open(path)
}
