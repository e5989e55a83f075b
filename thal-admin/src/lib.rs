//! Thal admin console
//!
//! View-state for the restaurant admin pages (dashboard, orders, menu) over
//! the [`thal_client`] façade, plus the terminal front-end that renders it.

pub mod config;
pub mod filter;
pub mod list;
pub mod logger;
pub mod notify;
pub mod preview;
pub mod shell;
pub mod tui;
pub mod views;

pub use config::AdminConfig;
pub use filter::{ALL_STATUS, StatusFilter, filter_menu, filter_orders};
pub use list::{ListState, LoadState};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use preview::{ImagePreview, LocalPreview};
pub use shell::{MountScope, Navigation, Page, Shell};
pub use views::{DashboardView, MenuEditor, MenuView, OrdersView};
