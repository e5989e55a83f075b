//! Page view-state
//!
//! Views own their cached data and talk to the backend only through
//! [`AdminApi`](thal_client::AdminApi). Each async operation has a split
//! form (`begin_*`/`apply_*`) so the terminal front-end can run the request
//! on a background task and apply the result later.

pub mod dashboard;
pub mod editor;
pub mod menu;
pub mod orders;

pub use dashboard::{DashboardView, Metric, SUMMARY_METRICS, Trend, initials};
pub use editor::{DraftError, EditorMode, MenuDraft, MenuEditor, Submission};
pub use menu::{MenuView, SubmitOutcome, send_submission};
pub use orders::OrdersView;
