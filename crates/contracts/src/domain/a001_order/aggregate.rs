use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::enums::{OrderStatus, PackageName, PaymentMethod};

/// Заказ кампании
///
/// Immutable once loaded. `session_at` stays empty until the photo session is
/// booked; the absence is meaningful (the "awaiting session" segment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Campaign year the order belongs to
    pub year: i32,
    pub customer_id: String,
    #[serde(with = "crate::shared::timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(
        default,
        with = "crate::shared::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub session_at: Option<NaiveDateTime>,
    pub package_name: PackageName,
    pub entry_amount: f64,
    pub total_amount: f64,
    pub entry_payment_method: PaymentMethod,
    pub status: OrderStatus,
}

impl Order {
    /// Local calendar day the order was created on
    pub fn created_date(&self) -> NaiveDate {
        self.created_at.date()
    }

    pub fn has_session(&self) -> bool {
        self.session_at.is_some()
    }

    /// Whole days from creation to the session, truncated toward zero
    pub fn lead_time_days(&self) -> Option<i64> {
        self.session_at
            .map(|session| (session - self.created_at).num_days())
    }
}
