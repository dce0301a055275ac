use serde::{Deserialize, Serialize};

use crate::enums::PackageName;

/// Package price of one year with its year-over-year deltas
///
/// Delta fields are `None` for the first year of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageYearDelta {
    pub year: i32,
    pub total: f64,
    pub entry: f64,
    pub installments_count: u32,
    pub installment_value: f64,
    /// total - entry
    pub balance: f64,
    /// entry + installments_count * installment_value
    pub calculated_total: f64,
    pub needs_adjustment_badge: bool,
    pub delta_total_rs: Option<f64>,
    pub delta_total_pct: Option<f64>,
    pub delta_entry_rs: Option<f64>,
    pub delta_entry_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraPhotoYearDelta {
    pub year: i32,
    pub unit_price: f64,
    pub delta_unit_rs: Option<f64>,
    pub delta_unit_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageAdjustmentReport {
    pub package: PackageName,
    pub rows: Vec<PackageYearDelta>,
    /// CAGR of the total price, percent, one step per listed year.
    /// `None` with fewer than three years.
    pub total_cagr: Option<f64>,
}

/// Years shown in the report, counted back from the latest priced year
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingInterval {
    #[default]
    All,
    Last2,
    Last3,
}

/// Request for the pricing adjustments report and its CSV
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingAdjustmentsRequest {
    #[serde(default)]
    pub interval: PricingInterval,
}

/// Largest year-over-year increase of a package total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceIncrease {
    pub package: PackageName,
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageYear {
    pub package: PackageName,
    pub year: i32,
}

/// Change of the extra photo price in the latest year shown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtraPhotoVariation {
    pub year: i32,
    pub delta_rs: f64,
    pub delta_pct: f64,
}

/// Headline numbers over the rows shown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingSummary {
    /// Biggest positive increase in percent; `None` when no total went up
    pub largest_increase_pct: Option<PriceIncrease>,
    /// Biggest positive increase in R$
    pub largest_increase_rs: Option<PriceIncrease>,
    /// Package-years whose total did not change
    pub no_adjustment: Vec<PackageYear>,
    pub extra_photo_variation: Option<ExtraPhotoVariation>,
}

/// Response for the pricing adjustments report
///
/// Deltas are computed over the full history, then rows outside the
/// requested interval are dropped, so the first row shown may carry a delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingAdjustmentsResponse {
    pub interval: PricingInterval,
    /// Union of the years of the rows shown, ascending
    pub years: Vec<i32>,
    pub packages: Vec<PackageAdjustmentReport>,
    pub extra_photo: Vec<ExtraPhotoYearDelta>,
    pub extra_photo_cagr: Option<f64>,
    /// Number of package-years whose installment plan does not add up
    pub flagged_rows: usize,
    pub summary: PricingSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_defaults_to_all() {
        let request: PricingAdjustmentsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.interval, PricingInterval::All);

        let request: PricingAdjustmentsRequest =
            serde_json::from_str(r#"{"interval":"last2"}"#).unwrap();
        assert_eq!(request.interval, PricingInterval::Last2);
    }
}
