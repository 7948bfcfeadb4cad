//! Clock source: local time at a fixed UTC offset (the original site ran on
//! IST, +05:30). A fixed instant can be injected for tests via --now.

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, Utc};

#[derive(Debug, Clone)]
pub struct Clock {
    offset: FixedOffset,
    fixed: Option<NaiveDateTime>,
}

impl Clock {
    pub fn new(utc_offset_minutes: i32) -> AppResult<Self> {
        let offset = FixedOffset::east_opt(utc_offset_minutes * 60).ok_or_else(|| {
            AppError::Config(format!("invalid UTC offset: {} minutes", utc_offset_minutes))
        })?;
        Ok(Self {
            offset,
            fixed: None,
        })
    }

    /// Pin the clock to a fixed instant. Every `now()` returns it verbatim.
    pub fn fixed_at(mut self, at: NaiveDateTime) -> Self {
        self.fixed = Some(at);
        self
    }

    pub fn now(&self) -> NaiveDateTime {
        self.fixed
            .unwrap_or_else(|| Utc::now().with_timezone(&self.offset).naive_local())
    }

    /// The date a book/cancel action taken right now is recorded under.
    pub fn booking_date(&self) -> NaiveDate {
        self.now().date()
    }

    /// The date the meal booked right now is served: always tomorrow.
    pub fn meal_date(&self) -> NaiveDate {
        date::next_day(self.booking_date())
    }
}
