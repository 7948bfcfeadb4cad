use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ledger::store;
use crate::ui::messages::{info, success};
use std::fs;
use std::path::Path;

/// Create the data directory, demo roster, empty ledger and configuration.
/// Existing files are never overwritten.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    fs::create_dir_all(&cfg.data_dir)?;
    fs::create_dir_all(cfg.menu_dir())?;

    // Config file only for runs against the default location; --data runs
    // (tests, ad hoc directories) leave the user's config alone.
    if cli.data.is_none() && !Config::config_file().exists() {
        cfg.save()?;
        success(format!("Config file: {}", Config::config_file().display()));
    }

    let roster = cfg.roster_file();
    if roster.exists() {
        info("Roster already present, leaving it untouched.");
    } else {
        seed_roster(&roster)?;
        success(format!("Seeded demo roster: {}", roster.display()));
    }

    let ledger = cfg.ledger_file();
    if ledger.exists() {
        info("Ledger already present.");
    } else {
        store::write_atomic(&ledger, &[])?;
        success(format!("Created empty ledger: {}", ledger.display()));
    }

    Ok(())
}

/// Demo accounts H001..H100 plus ADMIN, matching the original deployment.
fn seed_roster(path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["student_id", "name", "password"])?;
    for i in 1..=100 {
        wtr.write_record([
            format!("H{:03}", i),
            format!("Student {}", i),
            format!("P{:03}", i),
        ])?;
    }
    wtr.write_record(["ADMIN", "Admin", "admin123"])?;
    wtr.flush()?;
    Ok(())
}
