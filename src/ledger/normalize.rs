//! Schema normalizer for the booking ledger.
//!
//! The ledger file went through several layouts over the life of the
//! original system: a single "date" column instead of booking_date,
//! headerless five-column rows, and assorted date formats. This module
//! migrates whatever is on disk into the canonical layout on every load,
//! idempotently, so the rest of the ledger code only ever sees canonical
//! rows. Rules, applied in order per load:
//!
//!   1. header "date" with no "booking_date"  -> rename
//!   2. missing/unparseable meal_date         -> booking_date + 1 day
//!   3. no header row                         -> positional columns
//!   4. dates                                 -> canonical ISO YYYY-MM-DD
//!   5. all canonical columns present, canonical order, persisted back
//!
//! Loading fails soft: an unreadable or corrupt file yields an empty table
//! and is left untouched on disk.

use crate::models::event::BookingEvent;
use crate::utils::date;
use std::path::Path;

/// Result of one normalization pass. `migrated` is true when the on-disk
/// form differs from canonical and should be rewritten (rule 5).
pub struct Normalized {
    pub events: Vec<BookingEvent>,
    pub migrated: bool,
}

pub fn load(path: &Path) -> Normalized {
    if !path.exists() {
        // First run: persisting the empty table creates the header row.
        return Normalized {
            events: Vec::new(),
            migrated: true,
        };
    }

    let rows = match read_rows(path) {
        Ok(rows) => rows,
        // Unreadable/corrupt store: treat as empty, do not touch the file.
        Err(_) => {
            return Normalized {
                events: Vec::new(),
                migrated: false,
            };
        }
    };

    if rows.is_empty() {
        // Zero-byte file: canonical empty form is a lone header row.
        return Normalized {
            events: Vec::new(),
            migrated: true,
        };
    }

    let mut migrated = false;
    let mut events = if let Some(header) = detect_header(&rows[0]) {
        from_named_columns(&header, &rows[1..], &mut migrated)
    } else {
        // Rule 3: headerless rows are read positionally.
        migrated = true;
        from_positional(&rows)
    };

    for ev in &mut events {
        normalize_dates(ev, &mut migrated);
    }

    Normalized { events, migrated }
}

fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let cells: Vec<String> = rec.iter().map(|c| c.trim().to_string()).collect();
        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }
        rows.push(cells);
    }
    Ok(rows)
}

/// A first row counts as a header when any cell matches a known column
/// name, current or legacy.
fn detect_header(first: &[String]) -> Option<Vec<String>> {
    const KNOWN: [&str; 7] = [
        "booking_date",
        "meal_date",
        "student_id",
        "meal",
        "status",
        "timestamp",
        "date",
    ];
    let lowered: Vec<String> = first.iter().map(|c| c.to_ascii_lowercase()).collect();
    if lowered.iter().any(|c| KNOWN.contains(&c.as_str())) {
        Some(lowered)
    } else {
        None
    }
}

fn from_named_columns(
    header: &[String],
    rows: &[Vec<String>],
    migrated: &mut bool,
) -> Vec<BookingEvent> {
    let find = |name: &str| header.iter().position(|h| h == name);

    // Rule 1: the oldest layout called the booking date just "date".
    let booking_idx = match find("booking_date") {
        Some(i) => Some(i),
        None => {
            let legacy = find("date");
            if legacy.is_some() {
                *migrated = true;
            }
            legacy
        }
    };
    let meal_date_idx = find("meal_date");
    if meal_date_idx.is_none() {
        *migrated = true;
    }

    let is_canonical = header.len() == BookingEvent::COLUMNS.len()
        && header.iter().zip(BookingEvent::COLUMNS).all(|(h, c)| h == c);
    if !is_canonical {
        *migrated = true;
    }

    let cell = |row: &[String], idx: Option<usize>| -> String {
        idx.and_then(|i| row.get(i)).cloned().unwrap_or_default()
    };

    rows.iter()
        .map(|row| BookingEvent {
            booking_date: cell(row, booking_idx),
            meal_date: cell(row, meal_date_idx),
            student_id: cell(row, find("student_id")),
            meal: cell(row, find("meal")),
            status: cell(row, find("status")),
            timestamp: cell(row, find("timestamp")),
        })
        .collect()
}

/// Positional mapping for headerless files. Six or more fields follow the
/// canonical order (extra trailing fields dropped); shorter rows follow the
/// legacy five-column layout [booking_date, student_id, meal, status,
/// timestamp] with missing trailing fields padded empty. meal_date is
/// backfilled afterwards by the date pass.
fn from_positional(rows: &[Vec<String>]) -> Vec<BookingEvent> {
    let cell = |row: &[String], i: usize| -> String { row.get(i).cloned().unwrap_or_default() };

    rows.iter()
        .map(|row| {
            if row.len() >= 6 {
                BookingEvent {
                    booking_date: cell(row, 0),
                    meal_date: cell(row, 1),
                    student_id: cell(row, 2),
                    meal: cell(row, 3),
                    status: cell(row, 4),
                    timestamp: cell(row, 5),
                }
            } else {
                BookingEvent {
                    booking_date: cell(row, 0),
                    meal_date: String::new(),
                    student_id: cell(row, 1),
                    meal: cell(row, 2),
                    status: cell(row, 3),
                    timestamp: cell(row, 4),
                }
            }
        })
        .collect()
}

/// Rules 2 and 4: canonicalize both dates, recomputing meal_date from
/// booking_date where it is absent or unparseable.
fn normalize_dates(ev: &mut BookingEvent, migrated: &mut bool) {
    let booking = date::parse_date_lenient(&ev.booking_date);

    let canonical_booking = booking.map(date::iso).unwrap_or_default();
    if canonical_booking != ev.booking_date {
        ev.booking_date = canonical_booking;
        *migrated = true;
    }

    let canonical_meal = match date::parse_date_lenient(&ev.meal_date) {
        Some(d) => date::iso(d),
        None => booking.map(|d| date::iso(date::next_day(d))).unwrap_or_default(),
    };
    if canonical_meal != ev.meal_date {
        ev.meal_date = canonical_meal;
        *migrated = true;
    }
}
