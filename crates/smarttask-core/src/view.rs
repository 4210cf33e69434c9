//! Rendering targets for the dashboard.
//!
//! A view owns three pieces of UI state: the selected strategy, a single
//! error slot and a single results slot. The dashboard reads the strategy
//! when it renders and overwrites the slots wholesale, so with overlapping
//! actions the last one to finish is what the user sees.

use std::sync::{Mutex, MutexGuard};

use crate::presenter::Presentation;
use crate::ranking::Strategy;

/// Where dashboard output goes.
///
/// Methods take `&self` so several in-flight actions can share one view;
/// implementations synchronize internally.
pub trait View: Send + Sync {
    /// Strategy currently selected by the user. Read at render time.
    fn strategy(&self) -> Strategy;

    /// Replace the error slot with `message`.
    fn show_error(&self, message: &str);

    /// Empty the error slot.
    fn clear_error(&self);

    /// Replace the results slot.
    fn show_results(&self, presentation: Presentation);
}

/// In-memory view, used by tests and by callers that render after the fact.
#[derive(Debug, Default)]
pub struct MemoryView {
    strategy: Mutex<Strategy>,
    error: Mutex<Option<String>>,
    results: Mutex<Option<Presentation>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panicked writer leaves a fully-replaced value behind, never a torn one.
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MemoryView {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy: Mutex::new(strategy),
            ..Default::default()
        }
    }

    pub fn set_strategy(&self, strategy: Strategy) {
        *lock(&self.strategy) = strategy;
    }

    /// Current error slot contents, `None` when clear.
    pub fn error(&self) -> Option<String> {
        lock(&self.error).clone()
    }

    /// Current results slot contents, `None` before the first render.
    pub fn results(&self) -> Option<Presentation> {
        lock(&self.results).clone()
    }
}

impl View for MemoryView {
    fn strategy(&self) -> Strategy {
        *lock(&self.strategy)
    }

    fn show_error(&self, message: &str) {
        *lock(&self.error) = if message.is_empty() {
            None
        } else {
            Some(message.to_string())
        };
    }

    fn clear_error(&self) {
        *lock(&self.error) = None;
    }

    fn show_results(&self, presentation: Presentation) {
        *lock(&self.results) = Some(presentation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::EMPTY_PLACEHOLDER;

    #[test]
    fn error_slot_is_overwritten_and_cleared() {
        let view = MemoryView::default();
        view.show_error("first");
        view.show_error("second");
        assert_eq!(view.error().as_deref(), Some("second"));
        view.clear_error();
        assert_eq!(view.error(), None);
        view.show_error("");
        assert_eq!(view.error(), None);
    }

    #[test]
    fn results_slot_keeps_last_write() {
        let view = MemoryView::new(Strategy::Fast);
        assert_eq!(view.results(), None);
        view.show_results(Presentation::Cards(vec![]));
        view.show_results(Presentation::Placeholder(EMPTY_PLACEHOLDER));
        assert_eq!(view.results(), Some(Presentation::Placeholder(EMPTY_PLACEHOLDER)));
    }

    #[test]
    fn strategy_can_change_between_renders() {
        let view = MemoryView::new(Strategy::Fast);
        assert_eq!(view.strategy(), Strategy::Fast);
        view.set_strategy(Strategy::Deadline);
        assert_eq!(view.strategy(), Strategy::Deadline);
    }
}
