use anyhow::Result;
use contracts::dashboards::d401_pricing_adjustments::PricingAdjustmentsResponse;

pub const EXPORT_FILE_NAME: &str = "reajustes_precificacao.csv";

/// Column order is fixed
const HEADER: [&str; 10] = [
    "Pacote",
    "Ano",
    "Total",
    "Entrada",
    "Parcelas",
    "Saldo",
    "Delta Total R$",
    "Delta Total %",
    "Delta Entrada R$",
    "Delta Entrada %",
];

const EXTRA_PHOTO_LABEL: &str = "Foto Extra";

/// Flat CSV of the adjustments report
///
/// One row per package-year, then one row per extra photo year. Delta cells
/// are left empty for the first year and when there was no change.
pub fn export_adjustments_csv(report: &PricingAdjustmentsResponse) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;

    for package in &report.packages {
        for row in &package.rows {
            writer.write_record([
                package.package.display_name().to_string(),
                row.year.to_string(),
                row.total.to_string(),
                row.entry.to_string(),
                format!("{}x {}", row.installments_count, row.installment_value),
                row.balance.to_string(),
                delta_cell(row.delta_total_rs),
                delta_cell(row.delta_total_pct),
                delta_cell(row.delta_entry_rs),
                delta_cell(row.delta_entry_pct),
            ])?;
        }
    }

    for row in &report.extra_photo {
        writer.write_record([
            EXTRA_PHOTO_LABEL.to_string(),
            row.year.to_string(),
            row.unit_price.to_string(),
            "-".to_string(),
            String::new(),
            String::new(),
            delta_cell(row.delta_unit_rs),
            delta_cell(row.delta_unit_pct),
            String::new(),
            String::new(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn delta_cell(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => v.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pricing::deltas::{compute_extra_photo_deltas, compute_yearly_deltas};
    use contracts::dashboards::d401_pricing_adjustments::{
        PackageAdjustmentReport, PricingInterval, PricingSummary,
    };
    use contracts::domain::a003_package_pricing::{ExtraPhotoYearPrice, PackageYearPrice};
    use contracts::enums::PackageName;

    fn report() -> PricingAdjustmentsResponse {
        let coruja = [
            PackageYearPrice {
                year: 2024,
                total: 100.0,
                entry: 50.0,
                installments_count: 1,
                installment_value: 50.0,
            },
            PackageYearPrice {
                year: 2025,
                total: 120.0,
                entry: 50.0,
                installments_count: 1,
                installment_value: 70.5,
            },
        ];
        let extra = [
            ExtraPhotoYearPrice { year: 2024, unit_price: 16.0 },
            ExtraPhotoYearPrice { year: 2025, unit_price: 20.0 },
        ];
        PricingAdjustmentsResponse {
            interval: PricingInterval::All,
            years: vec![2024, 2025],
            packages: vec![PackageAdjustmentReport {
                package: PackageName::MamaeCoruja,
                rows: compute_yearly_deltas(&coruja),
                total_cagr: None,
            }],
            extra_photo: compute_extra_photo_deltas(&extra),
            extra_photo_cagr: None,
            flagged_rows: 1,
            summary: PricingSummary::default(),
        }
    }

    #[test]
    fn test_export_layout() {
        let csv = export_adjustments_csv(&report()).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Pacote,Ano,Total,Entrada,Parcelas,Saldo,Delta Total R$,Delta Total %,Delta Entrada R$,Delta Entrada %",
                "Mamãe Coruja,2024,100,50,1x 50,50,,,,",
                "Mamãe Coruja,2025,120,50,1x 70.5,70,20,20,,",
                "Foto Extra,2024,16,-,,,,,,",
                "Foto Extra,2025,20,-,,,4,25,,",
            ]
        );
    }

    #[test]
    fn test_every_row_has_ten_fields() {
        let csv = export_adjustments_csv(&report()).unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        for record in reader.records() {
            assert_eq!(record.unwrap().len(), 10);
        }
    }

    #[test]
    fn test_empty_report_is_header_only() {
        let empty = PricingAdjustmentsResponse {
            interval: PricingInterval::All,
            years: vec![],
            packages: vec![],
            extra_photo: vec![],
            extra_photo_cagr: None,
            flagged_rows: 0,
            summary: PricingSummary::default(),
        };
        let csv = export_adjustments_csv(&empty).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
