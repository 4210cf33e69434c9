//! # SmartTask Core Library
//!
//! Client-side logic for the Smart Task Analyzer. Users paste a JSON list
//! of tasks; the scoring backend assigns each one a `score` and an
//! `explanation`; this library ranks the result for the strategy the user
//! picked and turns every task into a display card.
//!
//! ## Architecture
//!
//! - **Parser**: raw text to [`TaskRecord`]s, or a [`ParseError`]
//! - **Ranking**: stable, non-mutating sort per [`Strategy`]
//! - **Presenter**: [`TaskRecord`] to [`DisplayCard`], with every field default
//! - **Client**: `POST /api/tasks/analyze/` and `/api/tasks/suggest/`
//! - **Dashboard**: the two user actions, writing into an injected [`View`]
//!
//! ## Key Components
//!
//! - [`Dashboard`]: analyze/suggest actions
//! - [`TaskApiClient`]: scoring API transport
//! - [`Config`]: application configuration management

pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod parser;
pub mod presenter;
pub mod ranking;
pub mod task;
pub mod view;

pub use client::{Endpoint, TaskApiClient, API_BASE_PATH};
pub use config::{Config, OutputFormat};
pub use dashboard::{ActionOutcome, Dashboard};
pub use error::{ConfigError, CoreError, InvokeError, ParseError};
pub use parser::parse_tasks;
pub use presenter::{present, present_all, DisplayCard, Presentation, Priority, EMPTY_PLACEHOLDER};
pub use ranking::{rank, Strategy};
pub use task::TaskRecord;
pub use view::{MemoryView, View};
