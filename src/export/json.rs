use super::model::SessionExport;
use crate::errors::AppResult;
use std::path::Path;

/// Scrive le sessioni in JSON formattato.
pub(crate) fn write_json(path: &Path, rows: &[SessionExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
