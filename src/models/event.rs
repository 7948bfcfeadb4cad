use super::{meal::Meal, status::BookingStatus};
use crate::utils::date;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One row of the booking ledger, in canonical column order.
///
/// All fields are strings because the ledger is a plain CSV file and must
/// round-trip legacy rows without loss; typed values (`Meal`,
/// `BookingStatus`, `NaiveDate`) exist only on the write path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingEvent {
    pub booking_date: String, // ⇔ date the book/cancel action was taken
    pub meal_date: String,    // ⇔ date the meal is served (booking_date + 1)
    pub student_id: String,
    pub meal: String,   // 'breakfast' | 'lunch' | 'dinner'
    pub status: String, // 'booked' | 'cancelled' (raw strings on read)
    pub timestamp: String, // "YYYY-MM-DD HH:MM:SS"
}

impl BookingEvent {
    /// Canonical ledger header.
    pub const COLUMNS: [&'static str; 6] = [
        "booking_date",
        "meal_date",
        "student_id",
        "meal",
        "status",
        "timestamp",
    ];

    /// Build a new event for appending.
    ///
    /// `meal_date` is always computed here as booking_date + 1 day; it is
    /// never taken from the caller, so the invariant holds for every write.
    pub fn new(
        booking_date: NaiveDate,
        student_id: &str,
        meal: Meal,
        status: BookingStatus,
        stamped_at: NaiveDateTime,
    ) -> Self {
        let meal_date = date::next_day(booking_date);
        Self {
            booking_date: booking_date.format("%Y-%m-%d").to_string(),
            meal_date: meal_date.format("%Y-%m-%d").to_string(),
            student_id: student_id.to_string(),
            meal: meal.as_str().to_string(),
            status: status.as_str().to_string(),
            timestamp: stamped_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    pub fn is_booked(&self) -> bool {
        self.status.eq_ignore_ascii_case("booked")
    }

    /// Row in canonical column order, for the CSV writer.
    pub fn as_record(&self) -> [&str; 6] {
        [
            &self.booking_date,
            &self.meal_date,
            &self.student_id,
            &self.meal,
            &self.status,
            &self.timestamp,
        ]
    }
}
