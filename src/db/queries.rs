use crate::errors::{AppError, AppResult};
use crate::models::range::DateRange;
use crate::models::shift::{DATE_FMT, ShiftRecord, TIMESTAMP_FMT};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use uuid::Uuid;

const SELECT_SHIFTS: &str = "SELECT id, date, start_time, end_time, break_minutes, hourly_wage, memo, created_at, updated_at
     FROM shifts";

const ORDER_NEWEST_FIRST: &str = "ORDER BY date DESC, start_time DESC";

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<ShiftRecord> {
    let id_str: String = row.get("id")?;
    let date_str: String = row.get("date")?;
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    let id = Uuid::parse_str(&id_str)
        .map_err(|_| conversion_error(0, AppError::NotFound(id_str.clone())))?;

    let date = NaiveDate::parse_from_str(&date_str, DATE_FMT)
        .map_err(|_| conversion_error(1, AppError::InvalidDate(date_str.clone())))?;

    let start_time = NaiveDateTime::parse_from_str(&start_str, TIMESTAMP_FMT)
        .map_err(|_| conversion_error(2, AppError::InvalidTime(start_str.clone())))?;

    let end_time = NaiveDateTime::parse_from_str(&end_str, TIMESTAMP_FMT)
        .map_err(|_| conversion_error(3, AppError::InvalidTime(end_str.clone())))?;

    Ok(ShiftRecord {
        id,
        date,
        start_time,
        end_time,
        break_minutes: row.get("break_minutes")?,
        hourly_wage: row.get("hourly_wage")?,
        memo: row.get("memo")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn insert_shift(conn: &Connection, rec: &ShiftRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO shifts (id, date, start_time, end_time, break_minutes, hourly_wage, memo, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            rec.id.to_string(),
            rec.date.format(DATE_FMT).to_string(),
            rec.start_time.format(TIMESTAMP_FMT).to_string(),
            rec.end_time.format(TIMESTAMP_FMT).to_string(),
            rec.break_minutes,
            rec.hourly_wage,
            rec.memo,
            rec.created_at,
            rec.updated_at,
        ],
    )?;
    Ok(())
}

/// Update a shift (all fields except id and created_at).
/// Returns the number of rows touched: 0 means the id does not exist.
pub fn update_shift(conn: &Connection, rec: &ShiftRecord) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE shifts
         SET date = ?1, start_time = ?2, end_time = ?3,
             break_minutes = ?4, hourly_wage = ?5,
             memo = ?6, updated_at = ?7
         WHERE id = ?8",
        params![
            rec.date.format(DATE_FMT).to_string(),
            rec.start_time.format(TIMESTAMP_FMT).to_string(),
            rec.end_time.format(TIMESTAMP_FMT).to_string(),
            rec.break_minutes,
            rec.hourly_wage,
            rec.memo,
            rec.updated_at,
            rec.id.to_string(),
        ],
    )?;
    Ok(n)
}

pub fn delete_shift(conn: &Connection, id: &Uuid) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM shifts WHERE id = ?1", [id.to_string()])?;
    Ok(n)
}

pub fn load_shift(conn: &Connection, id: &Uuid) -> AppResult<Option<ShiftRecord>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_SHIFTS} WHERE id = ?1"))?;
    let rec = stmt.query_row([id.to_string()], map_row).optional()?;
    Ok(rec)
}

/// Load shifts, newest first, optionally bounded to a date range.
pub fn load_shifts(conn: &Connection, range: Option<&DateRange>) -> AppResult<Vec<ShiftRecord>> {
    let mut out = Vec::new();

    match range {
        None => {
            let mut stmt = conn.prepare(&format!("{SELECT_SHIFTS} {ORDER_NEWEST_FIRST}"))?;
            let rows = stmt.query_map([], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        Some(r) => {
            let mut stmt = conn.prepare(&format!(
                "{SELECT_SHIFTS} WHERE date BETWEEN ?1 AND ?2 {ORDER_NEWEST_FIRST}"
            ))?;
            let rows = stmt.query_map(
                params![
                    r.from.format(DATE_FMT).to_string(),
                    r.to.format(DATE_FMT).to_string()
                ],
                map_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

/// Ids whose hyphen-less form starts with `prefix` (lowercase hex).
pub fn find_ids_by_prefix(conn: &Connection, prefix: &str) -> AppResult<Vec<Uuid>> {
    let mut stmt = conn.prepare(
        "SELECT id FROM shifts WHERE replace(id, '-', '') LIKE ?1 || '%' ORDER BY id",
    )?;
    let rows = stmt.query_map([prefix], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        let s = r?;
        let id = Uuid::parse_str(&s).map_err(|_| AppError::NotFound(s.clone()))?;
        out.push(id);
    }
    Ok(out)
}

/// First and last logged dates, if any shift exists.
pub fn date_bounds(conn: &Connection) -> AppResult<Option<(String, String)>> {
    let bounds: (Option<String>, Option<String>) = conn.query_row(
        "SELECT MIN(date), MAX(date) FROM shifts",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    Ok(match bounds {
        (Some(first), Some(last)) => Some((first, last)),
        _ => None,
    })
}
