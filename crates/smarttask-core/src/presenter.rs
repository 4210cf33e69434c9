//! Maps ranked task records to display cards.
//!
//! Cards are plain data: whatever draws them (terminal, JSON, a web page)
//! only decides layout. Every rule about defaults lives here.

use serde::Serialize;

use crate::ranking::{rank, Strategy};
use crate::task::TaskRecord;

/// Shown in place of cards when there is nothing to display.
pub const EMPTY_PLACEHOLDER: &str = "No tasks to show yet.";

const DUE_FALLBACK: &str = "(not specified)";
const HOURS_FALLBACK: &str = "?";

/// Discrete priority derived from importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn from_importance(importance: f64) -> Self {
        if importance >= 8.0 {
            Priority::High
        } else if importance <= 4.0 {
            Priority::Low
        } else {
            Priority::Medium
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Style class for the badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Priority::High => "badge-high",
            Priority::Medium => "badge-medium",
            Priority::Low => "badge-low",
        }
    }

    /// Badge text, e.g. `High Priority`.
    pub fn badge_text(&self) -> String {
        format!("{} Priority", self.label())
    }
}

/// Everything needed to draw one task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayCard {
    pub title: String,
    /// `Score: 42.0`, or `None` when the task has no score.
    pub score: Option<String>,
    pub priority: Priority,
    pub badge: String,
    /// `Due: ... • Estimated: ...h`
    pub meta: String,
    pub explanation: String,
}

/// Result of presenting a whole task sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    Cards(Vec<DisplayCard>),
    Placeholder(&'static str),
}

impl Presentation {
    pub fn cards(&self) -> &[DisplayCard] {
        match self {
            Presentation::Cards(cards) => cards,
            Presentation::Placeholder(_) => &[],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Presentation::Placeholder(_))
    }

    pub fn len(&self) -> usize {
        self.cards().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }
}

/// Build the card for a single task. Never fails.
pub fn present(task: &TaskRecord) -> DisplayCard {
    let priority = Priority::from_importance(task.badge_importance());
    DisplayCard {
        title: task.title().into_owned(),
        score: task.score().map(format_score),
        priority,
        badge: priority.badge_text(),
        meta: meta_line(task),
        explanation: task.explanation().to_string(),
    }
}

/// Rank `tasks` for `strategy` and present each one, or return the
/// placeholder when there are none.
pub fn present_all(tasks: &[TaskRecord], strategy: Strategy) -> Presentation {
    if tasks.is_empty() {
        return Presentation::Placeholder(EMPTY_PLACEHOLDER);
    }
    Presentation::Cards(rank(tasks, strategy).iter().map(present).collect())
}

fn format_score(score: f64) -> String {
    // + 0.0 turns a negative zero into "0.0"
    format!("Score: {:.1}", round_half_away(score) + 0.0)
}

/// Settle exact ties at the second decimal away from zero before `{:.1}`,
/// which would otherwise round them to even. Only `.25` and `.75` can be
/// exact ties in binary; every other value already rounds to nearest.
fn round_half_away(score: f64) -> f64 {
    let magnitude = score.abs();
    let frac = magnitude.fract();
    if frac == 0.25 || frac == 0.75 {
        score.signum() * ((magnitude * 10.0).floor() + 1.0) / 10.0
    } else {
        score
    }
}

fn meta_line(task: &TaskRecord) -> String {
    let due = task.due_date();
    let due = due.as_deref().unwrap_or(DUE_FALLBACK);
    let hours = task.estimate_text();
    let hours = hours.as_deref().unwrap_or(HOURS_FALLBACK);
    format!("Due: {due} • Estimated: {hours}h")
}
