use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};
use crate::ledger::queries::DateField;
use crate::ledger::store::LedgerStore;
use crate::models::event::BookingEvent;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use std::path::Path;

/// Export a date's booking events to a CSV file.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &Clock) -> AppResult<()> {
    if let Commands::Export {
        file,
        date: date_arg,
        by_meal_date,
        force,
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

        let path = Path::new(file);
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let store = LedgerStore::new(cfg.ledger_file());
        let rows = store.events_for_date(field, day);
        if rows.is_empty() {
            warning(format!("No events for {} {}.", field.as_str(), date::iso(day)));
            return Ok(());
        }

        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(BookingEvent::COLUMNS)?;
        for ev in &rows {
            wtr.write_record(ev.as_record())?;
        }
        wtr.flush()?;

        success(format!(
            "CSV export completed: {} ({} rows)",
            path.display(),
            rows.len()
        ));
    }

    Ok(())
}
