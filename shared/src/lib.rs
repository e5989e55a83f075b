//! Shared types for the Thal admin console
//!
//! Wire models and the response envelope used by both the HTTP client
//! and the admin front-end.

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    DEFAULT_CATEGORIES, DashboardSnapshot, MenuItem, MenuItemFields, Order, OrderLine,
    OrderStatus, OrderStatusUpdate, ParseOrderStatusError, Reservation, default_categories,
    merge_categories,
};
pub use response::{ApiResponse, CategoryListResponse};
