//! Top-level user actions: analyze and suggest.
//!
//! Each action clears the error slot, parses the input, calls the scoring
//! API and renders whatever comes back. Failures end up as one line in the
//! error slot; nothing is returned to the caller as an error, and the
//! results slot is only touched on success.

use crate::client::{Endpoint, TaskApiClient};
use crate::parser::parse_tasks;
use crate::presenter::present_all;
use crate::task::TaskRecord;
use crate::view::View;

/// How an action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Results slot was replaced with `count` cards (0 = placeholder).
    Rendered { count: usize },
    /// Input could not be parsed; no request was sent.
    InvalidInput,
    /// Request or response handling failed; results were left as they were.
    RequestFailed,
}

impl ActionOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, ActionOutcome::Rendered { .. })
    }
}

/// Drives the scoring API on behalf of a [`View`].
#[derive(Debug, Clone)]
pub struct Dashboard {
    client: TaskApiClient,
}

impl Dashboard {
    pub fn new(client: TaskApiClient) -> Self {
        Self { client }
    }

    /// Score the tasks in `raw`. Unparseable input aborts before any
    /// request is made.
    pub async fn analyze<V: View + ?Sized>(&self, raw: &str, view: &V) -> ActionOutcome {
        view.clear_error();
        let tasks = match parse_tasks(raw) {
            Ok(tasks) => tasks,
            Err(err) => {
                view.show_error(&err.to_string());
                return ActionOutcome::InvalidInput;
            }
        };
        self.invoke(Endpoint::Analyze, &tasks, view).await
    }

    /// Ask for suggestions seeded with the tasks in `raw`. Unparseable input
    /// is reported but the request still goes out with no seed tasks.
    pub async fn suggest<V: View + ?Sized>(&self, raw: &str, view: &V) -> ActionOutcome {
        view.clear_error();
        let tasks = parse_tasks(raw).unwrap_or_else(|err| {
            view.show_error(&err.to_string());
            Vec::new()
        });
        self.invoke(Endpoint::Suggest, &tasks, view).await
    }

    async fn invoke<V: View + ?Sized>(
        &self,
        endpoint: Endpoint,
        tasks: &[TaskRecord],
        view: &V,
    ) -> ActionOutcome {
        match self.client.post_tasks(endpoint, tasks).await {
            Ok(scored) => ActionOutcome::Rendered {
                count: render(&scored, view),
            },
            Err(err) => {
                tracing::debug!(endpoint = endpoint.as_str(), error = %err, "action failed");
                view.show_error(&format!("{}{err}", failure_prefix(endpoint)));
                ActionOutcome::RequestFailed
            }
        }
    }
}

/// Rank `tasks` with the view's current strategy and replace its results.
/// Returns the number of cards shown.
pub fn render<V: View + ?Sized>(tasks: &[TaskRecord], view: &V) -> usize {
    let presentation = present_all(tasks, view.strategy());
    let count = presentation.len();
    view.show_results(presentation);
    count
}

fn failure_prefix(endpoint: Endpoint) -> &'static str {
    match endpoint {
        Endpoint::Analyze => "Failed to analyze tasks: ",
        Endpoint::Suggest => "Failed to get suggestions: ",
    }
}
