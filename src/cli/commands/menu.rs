use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Store or resolve the menu image for a meal date. The image is an opaque
/// blob, stored under a deterministic name: `menu_<meal_date>.<ext>`.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &Clock) -> AppResult<()> {
    if let Commands::Menu { set, date: date_arg } = cmd {
        let meal_date = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => clock.meal_date(),
        };
        let dir = cfg.menu_dir();

        match set {
            Some(src) => {
                let src = Path::new(src);
                let ext = src
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("png");
                fs::create_dir_all(&dir)?;
                let dest = dir.join(format!("menu_{}.{}", date::iso(meal_date), ext));
                fs::copy(src, &dest)?;
                success(format!(
                    "Menu image for meal date {} saved: {}",
                    date::iso(meal_date),
                    dest.display()
                ));
            }
            None => match find_menu_image(&dir, meal_date)? {
                Some(path) => println!("{}", path.display()),
                None => warning(format!(
                    "No menu image for meal date {}.",
                    date::iso(meal_date)
                )),
            },
        }
    }

    Ok(())
}

fn find_menu_image(dir: &Path, meal_date: NaiveDate) -> AppResult<Option<PathBuf>> {
    if !dir.exists() {
        return Ok(None);
    }
    let prefix = format!("menu_{}.", date::iso(meal_date));
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with(&prefix) {
            return Ok(Some(entry.path()));
        }
    }
    Ok(None)
}
