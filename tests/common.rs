use assert_cmd::Command;
use std::env;
use std::path::PathBuf;

pub fn mb() -> Command {
    Command::cargo_bin("mealbook").expect("mealbook binary")
}

/// Create a unique, empty data directory inside the system temp dir.
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_mealbook", name));

    // Reset leftovers from earlier runs.
    std::fs::remove_dir_all(&path).ok();
    std::fs::create_dir_all(&path).expect("create test data dir");

    path.to_string_lossy().to_string()
}
