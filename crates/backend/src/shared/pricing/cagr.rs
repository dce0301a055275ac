/// Fewer points than this give no growth rate
pub const MIN_CAGR_POINTS: usize = 3;

/// Compound annual growth rate, percent
///
/// `years` is the number of compounding steps. Returns 0 when `years <= 0`
/// or `start_value <= 0`.
pub fn compute_cagr(start_value: f64, end_value: f64, years: i32) -> f64 {
    if years <= 0 || start_value <= 0.0 {
        return 0.0;
    }
    ((end_value / start_value).powf(1.0 / f64::from(years)) - 1.0) * 100.0
}

/// CAGR from the first to the last of year-ordered values
///
/// One step per listed value, whatever the calendar gap between them.
/// `None` below `MIN_CAGR_POINTS` values.
pub fn series_cagr(values: &[f64]) -> Option<f64> {
    match values {
        [first, .., last] if values.len() >= MIN_CAGR_POINTS => {
            Some(compute_cagr(*first, *last, (values.len() - 1) as i32))
        }
        _ => None,
    }
}
