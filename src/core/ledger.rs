//! The shift ledger: CRUD over the `shifts` table.
//!
//! Every read goes to the database and returns an owned snapshot; there is no
//! cache, so a read after a write always observes the write.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::range::DateRange;
use crate::models::shift::{ShiftFields, ShiftRecord};
use rusqlite::Connection;
use uuid::Uuid;

/// Minimum number of hex characters accepted as an id prefix.
pub const MIN_ID_PREFIX: usize = 4;

pub struct ShiftLedger {
    pool: DbPool,
}

impl ShiftLedger {
    /// Wrap an open pool, bringing its schema up to date.
    pub fn new(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn open(path: &str) -> AppResult<Self> {
        Self::new(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::new(DbPool::in_memory()?)
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    /// Insert a new record with a fresh id. Does not validate `fields`;
    /// that is the job of the form boundary.
    pub fn create(&mut self, fields: ShiftFields) -> AppResult<ShiftRecord> {
        let rec = ShiftRecord::new(fields);
        queries::insert_shift(&self.pool.conn, &rec)?;
        Ok(rec)
    }

    /// Overwrite every mutable field of the record with `id`.
    pub fn update(&mut self, id: &Uuid, fields: ShiftFields) -> AppResult<ShiftRecord> {
        let mut rec = self.get(id)?;
        rec.apply(fields);

        if queries::update_shift(&self.pool.conn, &rec)? == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }
        Ok(rec)
    }

    /// Remove the record with `id`. Deleting a missing id is not an error;
    /// the return value tells whether a row was actually removed.
    pub fn delete(&mut self, id: &Uuid) -> AppResult<bool> {
        Ok(queries::delete_shift(&self.pool.conn, id)? > 0)
    }

    pub fn get(&self, id: &Uuid) -> AppResult<ShiftRecord> {
        queries::load_shift(&self.pool.conn, id)?.ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Records inside `range` (all records when `None`) that satisfy
    /// `predicate`, newest date first.
    ///
    /// The rows are read eagerly into a snapshot; the predicate is applied
    /// lazily while the caller iterates. Calling again re-reads current state.
    pub fn query<P>(
        &self,
        range: Option<&DateRange>,
        predicate: P,
    ) -> AppResult<impl Iterator<Item = ShiftRecord> + use<P>>
    where
        P: FnMut(&ShiftRecord) -> bool,
    {
        let snapshot = queries::load_shifts(&self.pool.conn, range)?;
        Ok(snapshot.into_iter().filter(predicate))
    }

    /// Shorthand for an unfiltered `query` collected into a vector.
    pub fn list(&self, range: Option<&DateRange>) -> AppResult<Vec<ShiftRecord>> {
        Ok(self.query(range, |_| true)?.collect())
    }

    /// Records of one calendar month, newest first.
    pub fn in_month(&self, year: i32, month: u32) -> AppResult<Vec<ShiftRecord>> {
        self.list(Some(&DateRange::month(year, month)?))
    }

    /// Resolve a full UUID or a unique prefix of its hex digits.
    pub fn resolve_id(&self, text: &str) -> AppResult<Uuid> {
        let needle = text.trim().to_ascii_lowercase();

        if let Ok(id) = Uuid::parse_str(&needle) {
            return Ok(id);
        }

        let prefix = needle.replace('-', "");
        if prefix.len() < MIN_ID_PREFIX || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AppError::NotFound(text.to_string()));
        }

        let ids = queries::find_ids_by_prefix(&self.pool.conn, &prefix)?;
        match ids.as_slice() {
            [] => Err(AppError::NotFound(text.to_string())),
            [id] => Ok(*id),
            many => Err(AppError::AmbiguousId(text.to_string(), many.len())),
        }
    }
}
