//! The tracking-period calendar

use chrono::NaiveDate;
use presence_util::date_key;
use std::collections::HashSet;

/// The fixed, inclusive range of trackable dates for a tracking period.
///
/// `dates` is the authoritative universe for "total days" in every
/// statistic; per-person records outside it are ignored in aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    pub start: NaiveDate,
    pub end: NaiveDate,
    dates: Vec<String>,
    date_set: HashSet<String>,
}

impl Calendar {
    /// Build the ordered date-key sequence from `start` to `end` inclusive.
    ///
    /// Returns `None` when `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if start > end {
            return None;
        }

        let mut dates = Vec::new();
        let mut current = start;
        while current <= end {
            dates.push(date_key(current));
            current = current.succ_opt()?;
        }

        let date_set = dates.iter().cloned().collect();
        Some(Self {
            start,
            end,
            dates,
            date_set,
        })
    }

    /// Ordered date-keys, one per trackable column
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    /// Number of trackable days
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Whether a date-key falls inside the tracking period
    pub fn contains(&self, date_key: &str) -> bool {
        self.date_set.contains(date_key)
    }
}
