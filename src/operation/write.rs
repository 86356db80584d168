use crate::error::{Error, Result};

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Replace `target` with `contents` in one step.
///
/// The bytes go to a temporary file in the target's directory, which is then
/// renamed over the target. The parent directory is never created.
pub(crate) fn write_atomic(target: &Path, contents: &str) -> Result<()> {
    let write_failed = |cause: std::io::Error| Error::DestinationWrite {
        path: target.to_path_buf(),
        cause,
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_failed)?;
    file.write_all(contents.as_bytes()).map_err(write_failed)?;
    file.as_file().sync_all().map_err(write_failed)?;
    keep_permissions(&file, target).map_err(write_failed)?;

    file.persist(target).map_err(|e| write_failed(e.error))?;
    Ok(())
}

/// Give the temporary file the permissions the target has, or would get from
/// a plain create.
#[cfg(unix)]
fn keep_permissions(file: &NamedTempFile, target: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(target) {
        Ok(metadata) => metadata.permissions(),
        Err(_) => fs::Permissions::from_mode(0o644),
    };
    file.as_file().set_permissions(permissions)
}

#[cfg(not(unix))]
fn keep_permissions(file: &NamedTempFile, target: &Path) -> std::io::Result<()> {
    if let Ok(metadata) = fs::metadata(target) {
        file.as_file().set_permissions(metadata.permissions())?;
    }
    Ok(())
}
