use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::person::Person;

/// One employment stint. A missing `end_date` means ongoing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Id<Experience>,
    pub person_id: Id<Person>,
    pub company: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl Experience {
    /// The last day this stint counts for, treating open-ended stints as running through `today`.
    pub fn effective_end(&self, today: NaiveDate) -> NaiveDate {
        self.end_date.unwrap_or(today)
    }

    /// Whole days shared by both windows, zero when they are disjoint.
    pub fn overlap_days(&self, other: &Experience, today: NaiveDate) -> i64 {
        overlap_days(
            (self.start_date, self.effective_end(today)),
            (other.start_date, other.effective_end(today)),
        )
    }

    /// Normalized company text used for matching and grouping.
    pub fn company_key(&self) -> String {
        self.company.trim().to_lowercase()
    }
}

/// Whether `company` contains `text`, ignoring case for any script.
pub fn company_contains(company: &str, text: &str) -> bool {
    company.to_lowercase().contains(&text.to_lowercase())
}

/// `max(0, min(end1, end2) - max(start1, start2))` in days.
pub fn overlap_days(a: (NaiveDate, NaiveDate), b: (NaiveDate, NaiveDate)) -> i64 {
    let start = a.0.max(b.0);
    let end = a.1.min(b.1);
    (end - start).num_days().max(0)
}
