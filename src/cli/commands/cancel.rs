use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cancel::CancelLogic;
use crate::core::clock::Clock;
use crate::core::windows::WindowTable;
use crate::errors::AppResult;
use crate::ledger::store::LedgerStore;
use crate::models::user::Roster;

/// Cancel a student's active booking.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &Clock) -> AppResult<()> {
    if let Commands::Cancel {
        meal,
        student_id,
        password,
    } = cmd
    {
        let roster = Roster::load(&cfg.roster_file())?;
        roster.authenticate(student_id, password)?;

        let table = WindowTable::from_config(cfg)?;
        let store = LedgerStore::new(cfg.ledger_file());

        CancelLogic::apply(&store, &table, clock, student_id, *meal)?;
    }

    Ok(())
}
