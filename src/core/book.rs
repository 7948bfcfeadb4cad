use crate::core::clock::Clock;
use crate::core::windows::WindowTable;
use crate::errors::{AppError, AppResult};
use crate::ledger::store::LedgerStore;
use crate::models::event::BookingEvent;
use crate::models::meal::Meal;
use crate::models::status::BookingStatus;
use crate::ui::messages::{info, success};
use crate::utils::date;

/// High-level business logic for the `book` command.
pub struct BookLogic;

impl BookLogic {
    /// Book tomorrow's `meal` for `student_id`, if the booking window is
    /// open right now. Booking twice is a no-op, not an error (the original
    /// UI simply hid the button).
    pub fn apply(
        store: &LedgerStore,
        table: &WindowTable,
        clock: &Clock,
        student_id: &str,
        meal: Meal,
    ) -> AppResult<()> {
        let now = clock.now();

        if !table.can_book(meal, now.time()) {
            let w = table.get(meal);
            return Err(AppError::WindowClosed(format!(
                "Booking window for {} is closed at {} (open {}-{})",
                meal,
                now.time().format("%H:%M"),
                w.book_start.format("%H:%M"),
                w.book_end.format("%H:%M"),
            )));
        }

        let booking_date = now.date();
        let (booked, last_status) = store.latest_status(booking_date, student_id, meal);
        if booked {
            info(format!(
                "{} already booked for {} ({}).",
                meal,
                student_id,
                last_status.unwrap_or_default()
            ));
            return Ok(());
        }

        store.append(BookingEvent::new(
            booking_date,
            student_id,
            meal,
            BookingStatus::Booked,
            now,
        ))?;

        success(format!(
            "{} booked for {} (booking date {}, meal date {}).",
            meal,
            student_id,
            date::iso(booking_date),
            date::iso(date::next_day(booking_date)),
        ));
        Ok(())
    }
}
