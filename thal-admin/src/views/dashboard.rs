//! Dashboard overview
//!
//! One snapshot fetch per mount (recent orders and today's reservations)
//! next to a row of fixed summary cards.

use chrono::{DateTime, Local, Utc};
use shared::{DashboardSnapshot, Order, Reservation};
use thal_client::{AdminApi, ClientResult};

use crate::notify::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// A summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

/// Placeholder figures shown above the live lists
///
/// Not derived from the snapshot.
pub const SUMMARY_METRICS: [Metric; 5] = [
    Metric {
        title: "Total Revenue",
        value: "$45,231",
        change: "+20.1%",
        trend: Trend::Up,
    },
    Metric {
        title: "Orders Today",
        value: "89",
        change: "+12%",
        trend: Trend::Up,
    },
    Metric {
        title: "Active Tables",
        value: "24",
        change: "+8%",
        trend: Trend::Up,
    },
    Metric {
        title: "Avg. Wait Time",
        value: "12 min",
        change: "-5%",
        trend: Trend::Down,
    },
    Metric {
        title: "Reservations",
        value: "156",
        change: "+15%",
        trend: Trend::Up,
    },
];

/// Badge shown when an order has no customer name
pub const NO_INITIALS: &str = "NA";

/// Two-letter badge for a customer name
pub fn initials(name: Option<&str>) -> String {
    let badge: String = name
        .unwrap_or_default()
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();

    if badge.is_empty() {
        NO_INITIALS.to_string()
    } else {
        badge
    }
}

/// `created_at` as local wall-clock time
pub fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// "3 items • 12:30:05"
pub fn order_summary(order: &Order) -> String {
    format!("{} items • {}", order.item_count(), local_time(order.created_at))
}

pub fn format_total(total: f64) -> String {
    format!("₹{total}")
}

/// "19:30 • 4 people"
pub fn reservation_summary(reservation: &Reservation) -> String {
    format!("{} • {} people", reservation.time, reservation.party_size)
}

pub fn table_label(reservation: &Reservation) -> String {
    format!("Table {}", reservation.table_number)
}

#[derive(Debug, Default)]
pub struct DashboardView {
    snapshot: DashboardSnapshot,
    loading: bool,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metrics(&self) -> &'static [Metric] {
        &SUMMARY_METRICS
    }

    pub fn recent_orders(&self) -> &[Order] {
        &self.snapshot.recent_orders
    }

    pub fn todays_reservations(&self) -> &[Reservation] {
        &self.snapshot.todays_reservations
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Failure leaves both lists empty
    pub fn apply_snapshot(&mut self, result: ClientResult<DashboardSnapshot>, notices: &mut Notifier) {
        self.loading = false;
        match result {
            Ok(snapshot) => {
                tracing::debug!(
                    orders = snapshot.recent_orders.len(),
                    reservations = snapshot.todays_reservations.len(),
                    "Dashboard loaded"
                );
                self.snapshot = snapshot;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load dashboard");
                self.snapshot = DashboardSnapshot::default();
                notices.warning("Failed to load dashboard");
            }
        }
    }

    pub async fn mount(&mut self, api: &dyn AdminApi, notices: &mut Notifier) {
        self.begin_load();
        let result = api.dashboard().await;
        self.apply_snapshot(result, notices);
    }
}
