//! Client-side ranking of scored tasks.
//!
//! The backend already orders its response, but the order shown to the user
//! always comes from the strategy selected at render time. Every strategy
//! is a stable sort over a copy of the input, so ties keep their original
//! relative order and the caller's slice is never touched.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::task::TaskRecord;

/// Ranking mode chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Strategy {
    /// Shortest estimated effort first.
    Fast,
    /// Highest importance first, score breaks ties.
    Impact,
    /// Earliest due date first.
    Deadline,
    /// Highest backend score first.
    #[default]
    Balanced,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Fast,
        Strategy::Impact,
        Strategy::Deadline,
        Strategy::Balanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Fast => "fast",
            Strategy::Impact => "impact",
            Strategy::Deadline => "deadline",
            Strategy::Balanced => "balanced",
        }
    }

    /// Map a strategy name to a mode. Unrecognized names, including the
    /// empty string, select [`Strategy::Balanced`].
    pub fn from_name(name: &str) -> Self {
        Self::from_known_name(name).unwrap_or(Strategy::Balanced)
    }

    /// Strict lookup: `None` unless `name` is exactly one of the four
    /// strategy names.
    pub fn from_known_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for Strategy {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.as_str().to_string()
    }
}

/// Return a newly ordered copy of `tasks` for the given strategy.
pub fn rank(tasks: &[TaskRecord], strategy: Strategy) -> Vec<TaskRecord> {
    let mut sorted = tasks.to_vec();
    match strategy {
        Strategy::Fast => sorted.sort_by(by_hours_asc),
        Strategy::Impact => sorted.sort_by(by_importance_then_score_desc),
        Strategy::Deadline => {
            log_unsortable_dates(&sorted);
            sorted.sort_by(by_deadline_asc);
        }
        Strategy::Balanced => sorted.sort_by(by_score_desc),
    }
    sorted
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    // Coerced fields are always finite, so this only folds -0.0 into 0.0.
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn by_hours_asc(a: &TaskRecord, b: &TaskRecord) -> Ordering {
    cmp_f64(a.sort_hours(), b.sort_hours())
}

fn by_importance_then_score_desc(a: &TaskRecord, b: &TaskRecord) -> Ordering {
    cmp_f64(b.sort_importance(), a.sort_importance())
        .then_with(|| cmp_f64(b.sort_score(), a.sort_score()))
}

fn by_deadline_asc(a: &TaskRecord, b: &TaskRecord) -> Ordering {
    a.deadline_key().cmp(&b.deadline_key())
}

fn by_score_desc(a: &TaskRecord, b: &TaskRecord) -> Ordering {
    cmp_f64(b.sort_score(), a.sort_score())
}

/// Deadline ordering compares raw text, which only matches calendar order
/// for zero-padded `YYYY-MM-DD`. Other formats still sort by their text.
fn log_unsortable_dates(tasks: &[TaskRecord]) {
    for (index, task) in tasks.iter().enumerate() {
        if let Some(due) = task.due_date() {
            if chrono::NaiveDate::parse_from_str(&due, "%Y-%m-%d").is_err() || due.len() != 10 {
                tracing::debug!(index, due_date = %due, "due date is not YYYY-MM-DD; ordering by raw text");
            }
        }
    }
}
