//! Thal Client - HTTP client for the restaurant backend
//!
//! Provides the data access façade used by the admin console: every call
//! to the backend goes through [`AdminApi`] and comes back as a
//! [`ClientResult`].

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod upload;

pub use api::AdminApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use upload::ImageUpload;

// Re-export shared types for convenience
pub use shared::{
    ApiResponse, DashboardSnapshot, MenuItem, MenuItemFields, Order, OrderStatus, Reservation,
};
