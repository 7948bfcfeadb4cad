use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};
use crate::ledger::queries::{self, DateField};
use crate::ledger::store::LedgerStore;
use crate::ui::messages::{header, info};
use crate::utils::date;

/// Print a date's booking events plus per-meal booked counts.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &Clock) -> AppResult<()> {
    if let Commands::List {
        date: date_arg,
        by_meal_date,
    } = cmd
    {
        let day = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => clock.booking_date(),
        };
        let field = if *by_meal_date {
            DateField::Meal
        } else {
            DateField::Booking
        };

        let store = LedgerStore::new(cfg.ledger_file());
        let snapshot = store.snapshot();
        let rows = queries::events_for_date(&snapshot, field, day);

        header(format!("Bookings for {} {}", field.as_str(), date::iso(day)));

        if rows.is_empty() {
            info("No events recorded.");
            return Ok(());
        }

        println!(
            "  {:<12} {:<12} {:<10} {:<10} {:<10} {}",
            "booking", "meal", "student", "meal", "status", "timestamp"
        );
        for ev in &rows {
            println!(
                "  {:<12} {:<12} {:<10} {:<10} {:<10} {}",
                ev.booking_date, ev.meal_date, ev.student_id, ev.meal, ev.status, ev.timestamp
            );
        }

        println!();
        for (meal, count) in queries::booked_counts(&snapshot, field, day) {
            println!("  {:<10} {} booked", meal.as_str(), count);
        }
    }

    Ok(())
}
