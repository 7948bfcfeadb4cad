//! Time-window table and eligibility evaluator.
//!
//! Booking and cancellation are each allowed inside a fixed, same-day,
//! inclusive-inclusive clock interval per meal. The intervals come from
//! configuration; the defaults are the windows the original site used.
//! Windows never span midnight: table construction rejects start > end
//! instead of wrapping.

use crate::config::{Config, WindowConfig};
use crate::errors::{AppError, AppResult};
use crate::models::meal::Meal;
use crate::utils::time::parse_time_or_err;
use chrono::NaiveTime;

#[derive(Debug, Clone, Copy)]
pub struct TimeWindow {
    pub meal: Meal,
    pub book_start: NaiveTime,
    pub book_end: NaiveTime,
    pub cancel_start: NaiveTime,
    pub cancel_end: NaiveTime,
}

impl TimeWindow {
    fn from_config(meal: Meal, cfg: &WindowConfig) -> AppResult<Self> {
        let w = Self {
            meal,
            book_start: parse_time_or_err(&cfg.book_start)?,
            book_end: parse_time_or_err(&cfg.book_end)?,
            cancel_start: parse_time_or_err(&cfg.cancel_start)?,
            cancel_end: parse_time_or_err(&cfg.cancel_end)?,
        };
        // Each interval must be non-decreasing; the book and cancel intervals
        // of the same meal are allowed to overlap each other.
        if w.book_start > w.book_end {
            return Err(AppError::Config(format!(
                "{}: book window start {} is after end {}",
                meal, cfg.book_start, cfg.book_end
            )));
        }
        if w.cancel_start > w.cancel_end {
            return Err(AppError::Config(format!(
                "{}: cancel window start {} is after end {}",
                meal, cfg.cancel_start, cfg.cancel_end
            )));
        }
        Ok(w)
    }
}

pub struct WindowTable {
    windows: [TimeWindow; 3],
}

impl WindowTable {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            windows: [
                TimeWindow::from_config(Meal::Breakfast, &cfg.windows.breakfast)?,
                TimeWindow::from_config(Meal::Lunch, &cfg.windows.lunch)?,
                TimeWindow::from_config(Meal::Dinner, &cfg.windows.dinner)?,
            ],
        })
    }

    pub fn get(&self, meal: Meal) -> &TimeWindow {
        &self.windows[meal.idx()]
    }

    /// True iff booking `meal` is open at `now` (inclusive both ends).
    pub fn can_book(&self, meal: Meal, now: NaiveTime) -> bool {
        let w = self.get(meal);
        in_window(w.book_start, w.book_end, now)
    }

    /// True iff cancelling `meal` is open at `now` (inclusive both ends).
    pub fn can_cancel(&self, meal: Meal, now: NaiveTime) -> bool {
        let w = self.get(meal);
        in_window(w.cancel_start, w.cancel_end, now)
    }
}

fn in_window(start: NaiveTime, end: NaiveTime, now: NaiveTime) -> bool {
    now >= start && now <= end
}
