use clap::ValueEnum;
use serde::Serialize;

/// The three bookable meals. Unknown meal names are rejected at the CLI
/// boundary, so core code never sees an invalid meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl Meal {
    pub const ALL: [Meal; 3] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner];

    /// Canonical lowercase name used in the ledger.
    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
        }
    }

    pub fn idx(&self) -> usize {
        match self {
            Meal::Breakfast => 0,
            Meal::Lunch => 1,
            Meal::Dinner => 2,
        }
    }
}

impl std::fmt::Display for Meal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
