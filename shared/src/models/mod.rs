//! Data models
//!
//! Shared between the HTTP client and the admin views.
//! Backend documents carry Mongo-style `_id` string identifiers.

pub mod category;
pub mod dashboard;
pub mod menu_item;
pub mod order;
pub mod reservation;

// Re-exports
pub use category::*;
pub use dashboard::*;
pub use menu_item::*;
pub use order::*;
pub use reservation::*;
