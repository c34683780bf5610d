use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::action::Action;
use crate::models::action_log::ActionLogEntry;
use crate::utils::time::normalize_timestamp;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, Result, Row, params};

const SELECT_ACTIONS: &str =
    "SELECT staff_id, date, action, time_stamp, device, created_by FROM action_logs";

/// Action log of one staff member on one date, in chronological order.
pub fn load_actions(
    pool: &mut DbPool,
    staff_id: &str,
    date: &NaiveDate,
) -> AppResult<Vec<ActionLogEntry>> {
    let sql = format!(
        "{SELECT_ACTIONS}
         WHERE staff_id = ?1 AND date = ?2
         ORDER BY time_stamp ASC, id ASC"
    );
    let mut stmt = pool.conn.prepare_cached(&sql)?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map(params![staff_id, date_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Action log of one staff member between two dates (inclusive),
/// ordered by date, then chronologically.
pub fn load_actions_in_range(
    pool: &mut DbPool,
    staff_id: &str,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<ActionLogEntry>> {
    let sql = format!(
        "{SELECT_ACTIONS}
         WHERE staff_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date ASC, time_stamp ASC, id ASC"
    );
    let mut stmt = pool.conn.prepare_cached(&sql)?;

    let rows = stmt.query_map(
        params![
            staff_id,
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Distinct staff ids that have at least one action logged.
pub fn staff_ids(pool: &mut DbPool) -> AppResult<Vec<String>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT DISTINCT staff_id FROM action_logs ORDER BY staff_id ASC")?;

    let ids = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>>>()?;

    Ok(ids)
}

pub fn map_row(row: &Row) -> Result<ActionLogEntry> {
    let action: String = row.get("action")?;

    Ok(ActionLogEntry {
        staff_id: row.get("staff_id")?,
        date: row.get("date")?,
        action: Action::from_db_str(&action),
        time_stamp: row.get("time_stamp")?,
        device: row.get("device")?,
        created_by: row.get("created_by")?,
    })
}

/// Store one entry. Parseable timestamps are normalized so that SQL ordering
/// on `time_stamp` is chronological; malformed ones are kept verbatim.
pub fn insert_action(conn: &Connection, entry: &ActionLogEntry, source: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO action_logs (staff_id, date, action, time_stamp, device, created_by, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            entry.staff_id,
            entry.date,
            entry.action.as_str(),
            normalize_timestamp(&entry.time_stamp),
            entry.device,
            entry.created_by,
            source,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Store many entries in a single transaction.
pub fn insert_actions(pool: &mut DbPool, entries: &[ActionLogEntry], source: &str) -> AppResult<usize> {
    let tx = pool.conn.transaction()?;
    for e in entries {
        insert_action(&tx, e, source)?;
    }
    tx.commit()?;
    Ok(entries.len())
}
