use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};
use crate::ledger::queries;
use crate::ledger::store::LedgerStore;
use crate::models::meal::Meal;
use crate::ui::messages::header;
use crate::utils::date;

/// Show a student's effective status per meal for a booking date.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &Clock) -> AppResult<()> {
    if let Commands::Status {
        student_id,
        meal,
        date: date_arg,
        json,
    } = cmd
    {
        let booking_date = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => clock.booking_date(),
        };

        let meals: Vec<Meal> = match meal {
            Some(m) => vec![*m],
            None => Meal::ALL.to_vec(),
        };

        let store = LedgerStore::new(cfg.ledger_file());
        let snapshot = store.snapshot();

        if *json {
            let mut map = serde_json::Map::new();
            for m in &meals {
                let (booked, status) =
                    queries::latest_status(&snapshot, booking_date, student_id, *m);
                map.insert(
                    m.as_str().to_string(),
                    serde_json::json!({ "is_booked": booked, "last_status": status }),
                );
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::Value::Object(map))?
            );
            return Ok(());
        }

        header(format!(
            "Status for {} on booking date {}",
            student_id,
            date::iso(booking_date)
        ));
        for m in &meals {
            let (booked, status) = queries::latest_status(&snapshot, booking_date, student_id, *m);
            let shown = if booked {
                "booked".to_string()
            } else {
                status.unwrap_or_else(|| "no record".to_string())
            };
            println!("  {:<10} {}", m.as_str(), shown);
        }
    }

    Ok(())
}
