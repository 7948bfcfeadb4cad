//! Persistent booking ledger: one shared CSV file, append-only growth.
//!
//! Every append is a read-normalize-append-rewrite cycle. The original
//! system did this with no locking and could lose a concurrent write; here
//! the whole cycle runs under an exclusive advisory lock on a sidecar
//! `.lock` file (blocking acquire, so concurrent writers queue), and the
//! rewrite lands atomically via a temp file + rename in the same directory.
//! Readers take the same lock because normalization may rewrite the file.

use crate::errors::{AppError, AppResult};
use crate::ledger::normalize;
use crate::ledger::queries::{self, DateField};
use crate::models::event::BookingEvent;
use crate::models::meal::Meal;
use chrono::NaiveDate;
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".lock");
        self.path.with_file_name(name)
    }

    /// Acquire the writer lock. Blocks until the holder releases it; the
    /// flock is released when the returned handle drops.
    fn lock_exclusive(&self) -> AppResult<File> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())?;
        file.lock_exclusive()?;
        Ok(file)
    }

    /// Append one event. Fails with `StorageWrite` when the ledger cannot
    /// be persisted; the caller must then report the action as not applied.
    pub fn append(&self, event: BookingEvent) -> AppResult<()> {
        let guard = self
            .lock_exclusive()
            .map_err(|e| AppError::StorageWrite(e.to_string()))?;

        let mut normalized = normalize::load(&self.path);
        normalized.events.push(event);
        write_atomic(&self.path, &normalized.events)?;

        drop(guard);
        Ok(())
    }

    /// Normalized view of the whole ledger, in ledger order.
    ///
    /// Reads are fail-soft: a corrupt or unreadable file yields an empty
    /// snapshot. The normalized form is persisted back so future loads skip
    /// re-migration; if that persist fails the snapshot is still served.
    pub fn snapshot(&self) -> Vec<BookingEvent> {
        let guard = self.lock_exclusive().ok();
        let normalized = normalize::load(&self.path);
        if normalized.migrated && guard.is_some() {
            let _ = write_atomic(&self.path, &normalized.events);
        }
        normalized.events
    }

    pub fn latest_status(
        &self,
        booking_date: NaiveDate,
        student_id: &str,
        meal: Meal,
    ) -> (bool, Option<String>) {
        queries::latest_status(&self.snapshot(), booking_date, student_id, meal)
    }

    pub fn events_for_date(&self, field: DateField, date: NaiveDate) -> Vec<BookingEvent> {
        queries::events_for_date(&self.snapshot(), field, date)
    }

    pub fn booked_counts(&self, field: DateField, date: NaiveDate) -> [(Meal, usize); 3] {
        queries::booked_counts(&self.snapshot(), field, date)
    }
}

/// Write the full canonical table (header + rows) atomically: temp file in
/// the ledger's directory, fsync, rename over the ledger.
pub fn write_atomic(path: &Path, events: &[BookingEvent]) -> AppResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut buf = Vec::new();
    {
        let mut wtr = csv::Writer::from_writer(&mut buf);
        wtr.write_record(BookingEvent::COLUMNS)
            .map_err(|e| AppError::StorageWrite(e.to_string()))?;
        for ev in events {
            wtr.write_record(ev.as_record())
                .map_err(|e| AppError::StorageWrite(e.to_string()))?;
        }
        wtr.flush().map_err(|e| AppError::StorageWrite(e.to_string()))?;
    }

    let mut tmp =
        tempfile::NamedTempFile::new_in(&dir).map_err(|e| AppError::StorageWrite(e.to_string()))?;
    tmp.write_all(&buf)
        .map_err(|e| AppError::StorageWrite(e.to_string()))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| AppError::StorageWrite(e.to_string()))?;
    tmp.persist(path)
        .map_err(|e| AppError::StorageWrite(e.to_string()))?;
    Ok(())
}
