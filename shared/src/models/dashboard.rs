//! Dashboard snapshot
//!
//! Combined payload of `GET /api/dashboard`. Unlike the other endpoints it is
//! not wrapped in an [`ApiResponse`](crate::response::ApiResponse).

use serde::{Deserialize, Serialize};

use super::{Order, Reservation};

/// Recent orders plus today's reservations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(rename = "recentOrders", default)]
    pub recent_orders: Vec<Order>,
    #[serde(rename = "todaysReservations", default)]
    pub todays_reservations: Vec<Reservation>,
}
