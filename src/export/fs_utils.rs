// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::path::Path;

/// Check that the output file may be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists without `force` → error, nothing is written
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() {
        return Ok(());
    }

    if force {
        info(format!("Existing file '{}' will be overwritten.", path.display()));
        return Ok(());
    }

    Err(AppError::Export(format!(
        "file '{}' already exists (use --force to overwrite)",
        path.display()
    )))
}
