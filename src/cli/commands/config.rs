use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

/// Inspect the active configuration.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        if *path {
            println!("{}", Config::config_file().display());
            return Ok(());
        }
        if *print_config {
            let yaml =
                serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            print!("{}", yaml);
            return Ok(());
        }
        info("Nothing to do: use --print or --path.");
    }

    Ok(())
}
