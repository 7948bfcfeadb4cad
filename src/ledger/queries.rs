//! Pure queries over a normalized ledger snapshot.
//!
//! Ledger order is authoritative: appends are serialized writes to one
//! file, so "last row wins" resolves the effective status, not the
//! timestamp column.

use crate::models::event::BookingEvent;
use crate::models::meal::Meal;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Which date column a report is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Booking,
    Meal,
}

impl DateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateField::Booking => "booking_date",
            DateField::Meal => "meal_date",
        }
    }

    fn value<'a>(&self, ev: &'a BookingEvent) -> &'a str {
        match self {
            DateField::Booking => &ev.booking_date,
            DateField::Meal => &ev.meal_date,
        }
    }
}

/// Effective status for (booking_date, student, meal): the last matching
/// row in ledger order. No matching row means "no record", which is
/// distinct from cancelled.
pub fn latest_status(
    events: &[BookingEvent],
    booking_date: NaiveDate,
    student_id: &str,
    meal: Meal,
) -> (bool, Option<String>) {
    let date = booking_date.format("%Y-%m-%d").to_string();
    let last = events
        .iter()
        .filter(|ev| {
            ev.booking_date == date && ev.student_id == student_id && ev.meal == meal.as_str()
        })
        .next_back();

    match last {
        Some(ev) => (ev.is_booked(), Some(ev.status.clone())),
        None => (false, None),
    }
}

/// All events whose selected date column matches, in ledger order, with no
/// status filtering. Used for reporting and export.
pub fn events_for_date(
    events: &[BookingEvent],
    field: DateField,
    date: NaiveDate,
) -> Vec<BookingEvent> {
    let date = date.format("%Y-%m-%d").to_string();
    events
        .iter()
        .filter(|ev| field.value(ev) == date)
        .cloned()
        .collect()
}

/// Per-meal count of students whose effective status on `date` is booked.
/// Folds to the last row per (student, meal) first, so a booked-then-
/// cancelled student is not counted.
pub fn booked_counts(
    events: &[BookingEvent],
    field: DateField,
    date: NaiveDate,
) -> [(Meal, usize); 3] {
    let day = events_for_date(events, field, date);

    let mut effective: HashMap<(String, String), bool> = HashMap::new();
    for ev in &day {
        effective.insert((ev.student_id.clone(), ev.meal.clone()), ev.is_booked());
    }

    let mut counts = [(Meal::Breakfast, 0), (Meal::Lunch, 0), (Meal::Dinner, 0)];
    for ((_, meal), booked) in &effective {
        if !booked {
            continue;
        }
        for slot in &mut counts {
            if slot.0.as_str() == meal {
                slot.1 += 1;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::BookingStatus;

    fn d(s: &str) -> NaiveDate {
        crate::utils::date::parse_date(s).unwrap()
    }

    fn ev(date: &str, student: &str, meal: Meal, status: BookingStatus) -> BookingEvent {
        BookingEvent::new(
            d(date),
            student,
            meal,
            status,
            d(date).and_hms_opt(12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn empty_ledger_means_no_record() {
        let (booked, status) = latest_status(&[], d("2024-01-01"), "H001", Meal::Lunch);
        assert!(!booked);
        assert_eq!(status, None);
    }

    #[test]
    fn last_write_wins_in_ledger_order() {
        let events = vec![
            ev("2024-03-01", "H001", Meal::Lunch, BookingStatus::Booked),
            ev("2024-03-01", "H001", Meal::Lunch, BookingStatus::Cancelled),
            ev("2024-03-01", "H001", Meal::Lunch, BookingStatus::Booked),
        ];
        let (booked, status) = latest_status(&events, d("2024-03-01"), "H001", Meal::Lunch);
        assert!(booked);
        assert_eq!(status.as_deref(), Some("booked"));
    }

    #[test]
    fn cancellation_is_distinct_from_no_record() {
        let events = vec![
            ev("2024-03-01", "H001", Meal::Lunch, BookingStatus::Booked),
            ev("2024-03-01", "H001", Meal::Lunch, BookingStatus::Cancelled),
        ];
        let (booked, status) = latest_status(&events, d("2024-03-01"), "H001", Meal::Lunch);
        assert!(!booked);
        assert_eq!(status.as_deref(), Some("cancelled"));
    }

    #[test]
    fn status_is_scoped_to_date_student_and_meal() {
        let events = vec![
            ev("2024-03-01", "H001", Meal::Lunch, BookingStatus::Booked),
            ev("2024-03-02", "H001", Meal::Lunch, BookingStatus::Cancelled),
            ev("2024-03-01", "H002", Meal::Lunch, BookingStatus::Cancelled),
        ];
        let (booked, _) = latest_status(&events, d("2024-03-01"), "H001", Meal::Lunch);
        assert!(booked);
        let (booked, _) = latest_status(&events, d("2024-03-01"), "H001", Meal::Dinner);
        assert!(!booked);
    }

    #[test]
    fn events_for_date_can_key_by_either_column() {
        let events = vec![
            ev("2024-03-01", "H001", Meal::Lunch, BookingStatus::Booked),
            ev("2024-03-02", "H002", Meal::Dinner, BookingStatus::Booked),
        ];
        // meal_date of the first event is 2024-03-02, same as the booking
        // date of the second.
        let by_booking = events_for_date(&events, DateField::Booking, d("2024-03-02"));
        assert_eq!(by_booking.len(), 1);
        assert_eq!(by_booking[0].student_id, "H002");

        let by_meal = events_for_date(&events, DateField::Meal, d("2024-03-02"));
        assert_eq!(by_meal.len(), 1);
        assert_eq!(by_meal[0].student_id, "H001");
    }

    #[test]
    fn booked_counts_fold_to_effective_status() {
        let events = vec![
            ev("2024-03-01", "H001", Meal::Lunch, BookingStatus::Booked),
            ev("2024-03-01", "H002", Meal::Lunch, BookingStatus::Booked),
            ev("2024-03-01", "H002", Meal::Lunch, BookingStatus::Cancelled),
            ev("2024-03-01", "H003", Meal::Dinner, BookingStatus::Booked),
        ];
        let counts = booked_counts(&events, DateField::Booking, d("2024-03-01"));
        assert_eq!(counts[Meal::Breakfast.idx()].1, 0);
        assert_eq!(counts[Meal::Lunch.idx()].1, 1);
        assert_eq!(counts[Meal::Dinner.idx()].1, 1);
    }
}
