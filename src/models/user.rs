use crate::errors::{AppError, AppResult};
use std::path::Path;

/// One roster entry. The roster is externally provisioned and read-only to
/// the core; `mealbook init` only seeds the demo accounts when it is absent.
#[derive(Debug, Clone)]
pub struct User {
    pub student_id: String,
    pub name: String,
    pub password: String,
}

/// In-memory view of `users.csv`.
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    pub fn load(path: &Path) -> AppResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| AppError::Roster(format!("cannot read {}: {}", path.display(), e)))?;

        let mut users = Vec::new();
        for rec in rdr.records() {
            let rec = rec.map_err(|e| AppError::Roster(e.to_string()))?;
            users.push(User {
                student_id: rec.get(0).unwrap_or("").trim().to_string(),
                name: rec.get(1).unwrap_or("").trim().to_string(),
                password: rec.get(2).unwrap_or("").to_string(),
            });
        }
        Ok(Self { users })
    }

    pub fn find(&self, student_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.student_id == student_id)
    }

    /// Credential check for book/cancel. There are no sessions: identity is
    /// an explicit parameter to every command.
    pub fn authenticate(&self, student_id: &str, password: &str) -> AppResult<&User> {
        self.find(student_id)
            .filter(|u| u.password == password)
            .ok_or(AppError::InvalidCredentials)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
