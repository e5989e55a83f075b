//! Reservation Model

use serde::{Deserialize, Serialize};

/// Table reservation entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "_id")]
    pub id: String,
    /// Guest name
    pub name: String,
    /// Booking time as entered at the front desk (e.g. "19:30")
    pub time: String,
    #[serde(rename = "partySize")]
    pub party_size: u32,
    #[serde(rename = "tableNumber")]
    pub table_number: u32,
}
