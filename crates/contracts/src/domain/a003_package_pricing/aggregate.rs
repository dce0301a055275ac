use serde::{Deserialize, Serialize};

use crate::enums::PackageName;

/// Price of a package in one campaign year
///
/// `entry + installments_count * installment_value` should equal `total`,
/// but real price lists diverge; the mismatch is reported, never corrected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageYearPrice {
    pub year: i32,
    pub total: f64,
    pub entry: f64,
    pub installments_count: u32,
    pub installment_value: f64,
}

impl PackageYearPrice {
    /// Amount left after the entry payment ("saldo")
    pub fn balance(&self) -> f64 {
        self.total - self.entry
    }

    pub fn calculated_total(&self) -> f64 {
        self.entry + f64::from(self.installments_count) * self.installment_value
    }

    /// Exact comparison, no tolerance
    pub fn needs_adjustment(&self) -> bool {
        self.calculated_total() != self.total
    }
}

/// Unit price of an extra photo in one campaign year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraPhotoYearPrice {
    pub year: i32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagePriceSeries {
    pub package: PackageName,
    pub years: Vec<PackageYearPrice>,
}

/// Прайс-лист по годам
///
/// Package order is kept as loaded: it is the row order of the export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTable {
    pub packages: Vec<PackagePriceSeries>,
    #[serde(default)]
    pub extra_photo: Vec<ExtraPhotoYearPrice>,
}

impl PricingTable {
    pub fn series(&self, package: PackageName) -> Option<&PackagePriceSeries> {
        self.packages.iter().find(|s| s.package == package)
    }

    /// Price of a package in an exact year
    pub fn price_for(&self, package: PackageName, year: i32) -> Option<&PackageYearPrice> {
        self.series(package)
            .and_then(|s| s.years.iter().find(|p| p.year == year))
    }
}
