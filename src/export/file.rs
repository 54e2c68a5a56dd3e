//! Writing encoded images to disk.

use super::types::{ExportError, ExportOptions};
use crate::draw::Canvas;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Path of the temporary file written before the final rename.
pub fn partial_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

/// Writes `bytes` to `path` so that readers never observe a half-written file.
///
/// The data goes to a sibling `.part` file which is then renamed over `path`.
/// The parent directory is not created; if it is missing the write fails and
/// nothing is left behind.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let partial = partial_path(path);

    let result = fs::write(&partial, bytes).and_then(|()| fs::rename(&partial, path));
    if let Err(source) = result {
        let _ = fs::remove_file(&partial);
        return Err(ExportError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}

/// Renders `canvas` and saves it as a PNG at `path`.
///
/// # Returns
/// Path to the saved file
pub fn save_png(
    canvas: &Canvas,
    path: &Path,
    options: &ExportOptions,
) -> Result<PathBuf, ExportError> {
    let bytes = super::encode_png(canvas, options)?;

    log::info!("Saving figure to: {} ({} bytes)", path.display(), bytes.len());
    write_atomically(path, &bytes)?;

    if let Ok(metadata) = fs::metadata(path) {
        log::debug!("File written: {} bytes", metadata.len());
    }

    Ok(path.to_path_buf())
}
