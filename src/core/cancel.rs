use crate::core::clock::Clock;
use crate::core::windows::WindowTable;
use crate::errors::{AppError, AppResult};
use crate::ledger::store::LedgerStore;
use crate::models::event::BookingEvent;
use crate::models::meal::Meal;
use crate::models::status::BookingStatus;
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// High-level business logic for the `cancel` command.
pub struct CancelLogic;

impl CancelLogic {
    /// Cancel an active booking, if the cancel window is open right now.
    /// Cancellation appends a new `cancelled` event; nothing is ever
    /// updated or deleted.
    pub fn apply(
        store: &LedgerStore,
        table: &WindowTable,
        clock: &Clock,
        student_id: &str,
        meal: Meal,
    ) -> AppResult<()> {
        let now = clock.now();

        if !table.can_cancel(meal, now.time()) {
            let w = table.get(meal);
            return Err(AppError::WindowClosed(format!(
                "Cancel window for {} is closed at {} (open {}-{})",
                meal,
                now.time().format("%H:%M"),
                w.cancel_start.format("%H:%M"),
                w.cancel_end.format("%H:%M"),
            )));
        }

        let booking_date = now.date();
        let (booked, _) = store.latest_status(booking_date, student_id, meal);
        if !booked {
            warning(format!(
                "No active {} booking for {} on {}.",
                meal,
                student_id,
                date::iso(booking_date)
            ));
            return Ok(());
        }

        store.append(BookingEvent::new(
            booking_date,
            student_id,
            meal,
            BookingStatus::Cancelled,
            now,
        ))?;

        success(format!(
            "{} cancelled for {} (booking date {}).",
            meal,
            student_id,
            date::iso(booking_date)
        ));
        Ok(())
    }
}
