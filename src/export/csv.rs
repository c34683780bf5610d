use super::model::SessionExport;
use crate::errors::AppResult;
use std::path::Path;

/// Scrive le sessioni in CSV nel file indicato.
pub(crate) fn write_csv(path: &Path, rows: &[SessionExport]) -> AppResult<()> {
    let mut wtr = ::csv::Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
