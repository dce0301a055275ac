use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{PackageName, PaymentMethod};

/// Number of orders created on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: u32,
}

/// Orders and revenue of one package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageShare {
    pub name: PackageName,
    pub count: u32,
    pub revenue: f64,
}

/// Orders paid (entry) with one payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentShare {
    pub method: PaymentMethod,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadTimeBucket {
    /// Range label, e.g. "8–14" or "31+"
    pub range: String,
    pub count: u32,
}

/// Lead time (days between order and photo session) statistics
///
/// `median` is the upper median: `sorted[n / 2]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeadTimeStats {
    pub avg: i64,
    pub median: i64,
    pub buckets: Vec<LeadTimeBucket>,
}
