use crate::models::meal::Meal;
use clap::{Parser, Subcommand};

/// Command-line interface definition for mealbook
/// CLI application to book hostel meals backed by a CSV ledger
#[derive(Parser)]
#[command(
    name = "mealbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Hostel meal booking: book or cancel tomorrow's meals inside fixed time windows",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (ledger, roster, menu images)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Override the current time, "YYYY-MM-DD HH:MM" (for tests)
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory, demo roster, ledger and configuration
    Init,

    /// Book tomorrow's meal (only inside the booking window)
    Book {
        /// Meal to book
        meal: Meal,

        /// Student id (e.g. H001)
        #[arg(long = "id")]
        student_id: String,

        /// Roster password
        #[arg(long = "password", short = 'p')]
        password: String,
    },

    /// Cancel an active booking (only inside the cancel window)
    Cancel {
        /// Meal to cancel
        meal: Meal,

        /// Student id (e.g. H001)
        #[arg(long = "id")]
        student_id: String,

        /// Roster password
        #[arg(long = "password", short = 'p')]
        password: String,
    },

    /// Show a student's effective booking status per meal
    Status {
        /// Student id
        #[arg(long = "id")]
        student_id: String,

        /// Restrict to one meal
        #[arg(long)]
        meal: Option<Meal>,

        #[arg(long, help = "Booking date (YYYY-MM-DD), default today")]
        date: Option<String>,

        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List a date's booking events and per-meal booked counts
    List {
        #[arg(long, help = "Date to report on (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(
            long = "by-meal-date",
            help = "Key the report by meal date instead of booking date"
        )]
        by_meal_date: bool,
    },

    /// Export a date's booking events to a CSV file
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Date to export (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(
            long = "by-meal-date",
            help = "Key the export by meal date instead of booking date"
        )]
        by_meal_date: bool,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Store or show the menu image for a meal date
    Menu {
        #[arg(long, value_name = "FILE", help = "Image file to store for the date")]
        set: Option<String>,

        #[arg(long, help = "Meal date (YYYY-MM-DD), default tomorrow")]
        date: Option<String>,
    },

    /// Manage the configuration file (view location or contents)
    Config {
        #[arg(long = "print", help = "Print the active configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },
}
