use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::PackageName;
use crate::shared::series::{AmountPoint, SeriesPoint, YearValue};

/// Request for the campaign snapshot dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignSnapshotRequest {
    /// Reference date "YYYY-MM-DD"; the server decides when absent
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub metric: SalesMetric,
    #[serde(default)]
    pub view: SalesView,
}

/// What the sales chart measures per day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesMetric {
    #[default]
    Orders,
    /// Sum of order totals
    Revenue,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesView {
    #[default]
    Daily,
    /// Running sum from the campaign start
    Accumulated,
}

/// Point-in-time view of the campaign
///
/// Fully recomputed from orders, pricing and the reference date on every
/// request. Every collection is a `Vec` or `BTreeMap` so the JSON is stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSnapshot {
    pub today: NaiveDate,
    pub campaign: CampaignWindow,
    pub kpis: CampaignKpis,
    pub packages: Vec<PackageRollup>,
    pub goals: CampaignGoals,
    pub insights: CampaignInsights,
    pub charts: CampaignCharts,
    pub ruler: Vec<RulerRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignWindow {
    /// e.g. "Dia das Mães 2026"
    pub name: String,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
    pub days_left: i64,
    pub active_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignKpis {
    /// Campaign-to-date orders, oldest year first
    pub orders: Vec<YearValue>,
    pub revenue: f64,
    pub avg_ticket: f64,
    pub lead_time_median: i64,
}

/// Current-year package with its sales across the compared years
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageRollup {
    pub name: PackageName,
    pub price: f64,
    pub entry: f64,
    pub installments_count: u32,
    pub installment_value: f64,
    pub sold: Vec<YearValue>,
    /// Current-year campaign revenue
    pub revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub target: f64,
    pub current: f64,
    pub remaining: f64,
    /// 0..=100
    pub progress_pct: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageGoal {
    pub name: PackageName,
    pub progress: GoalProgress,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignGoals {
    pub orders: GoalProgress,
    /// Orders per remaining day needed to hit the target
    pub orders_pace_per_day: u32,
    pub by_package: Vec<PackageGoal>,
    pub revenue: GoalProgress,
    /// Orders with a booked session
    pub sessions: GoalProgress,
    /// Same-date order counts of the previous campaigns
    pub previous_campaigns: Vec<YearValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakDay {
    /// "dd/MM"
    pub date: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearPeakDays {
    pub year: i32,
    pub days: Vec<PeakDay>,
}

/// Current-year pace extended over the whole campaign
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CampaignProjection {
    /// Current-year orders per elapsed campaign day
    pub avg_daily: f64,
    pub projected: u32,
    /// Previous year's total orders
    pub previous_total: u32,
    /// Rounded percent; `None` when the previous year has no orders
    pub change_pct: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignInsights {
    pub peak_days: Vec<YearPeakDays>,
    /// Orders in the 7 days starting today's month/day, previous years
    pub next_7_days: Vec<YearValue>,
    pub projection: CampaignProjection,
    /// Previous-year days with at least two orders
    pub busy_days: Vec<PeakDay>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadTimeSummary {
    pub year: i32,
    pub avg: i64,
    pub median: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadTimeChart {
    pub stats: Vec<LeadTimeSummary>,
    /// One row per range, one value per year
    pub buckets: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSeries {
    pub metric: SalesMetric,
    pub view: SalesView,
    /// Campaign start to today, aligned by month/day like `day_series`
    pub points: Vec<AmountPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignCharts {
    pub day_series: Vec<SeriesPoint>,
    pub sales_series: SalesSeries,
    pub package_comparison: Vec<SeriesPoint>,
    pub lead_time: LeadTimeChart,
    pub payment_distribution: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulerMetrics {
    pub daily: u32,
    pub accum_total: u32,
    pub accum_revenue: f64,
    pub packages: BTreeMap<PackageName, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulerYear {
    pub year: i32,
    /// `None` for days that have not happened yet in the current year
    pub metrics: Option<RulerMetrics>,
}

/// One day of the "today" ruler (today ± a few days)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulerRow {
    pub offset: i64,
    /// "Hoje", "+1", "-2"...
    pub label: String,
    /// "dd/MM"
    pub date: String,
    pub years: Vec<RulerYear>,
}
