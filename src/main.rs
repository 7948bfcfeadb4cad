//! mealbook main entrypoint.

use mealbook::run;
use mealbook::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
