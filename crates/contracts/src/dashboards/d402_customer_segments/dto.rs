use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::{OrderStatus, PackageName};

/// Request for customer segments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerSegmentsRequest {
    /// Campaign year; the server uses the reference date's year when absent
    pub year: Option<i32>,
    /// Only lapsed customers carrying this tag, e.g. "VIP"
    pub tag: Option<String>,
}

/// Customer who bought in one of the two previous campaigns but not in this one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapsedCustomer {
    pub id: String,
    pub name: String,
    pub contact_handle: String,
    pub email: Option<String>,
    pub last_package: Option<PackageName>,
    pub last_order_at: Option<NaiveDateTime>,
    pub total_spent: f64,
}

/// Order of the year with no photo session booked yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwaitingSessionEntry {
    pub order_id: String,
    pub customer_id: String,
    /// `None` when the customer is missing from the fixtures
    pub customer_name: Option<String>,
    pub package_name: PackageName,
    pub created_at: NaiveDateTime,
    pub status: OrderStatus,
}

/// Orders of one year split by whether a session is booked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCounts {
    pub year: i32,
    pub with_session: u32,
    pub without_session: u32,
    /// Rounded share of orders with a session, 0 when the year has none
    pub booked_pct: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSegmentsResponse {
    pub year: i32,
    pub tag: Option<String>,
    pub lapsed: Vec<LapsedCustomer>,
    pub awaiting_session: Vec<AwaitingSessionEntry>,
    /// Two years back up to `year`, oldest first
    pub sessions_by_year: Vec<SessionCounts>,
}
