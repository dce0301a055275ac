use chrono::NaiveDate;
use contracts::domain::a001_order::Order;

/// Orders of one campaign year (by the order's `year` field)
pub fn filter_by_year(orders: &[Order], year: i32) -> Vec<&Order> {
    orders.iter().filter(|o| o.year == year).collect()
}

/// Orders created within `[from, to]`, both days included
pub fn filter_by_date_range<'a>(orders: &[&'a Order], from: NaiveDate, to: NaiveDate) -> Vec<&'a Order> {
    orders
        .iter()
        .copied()
        .filter(|o| {
            let day = o.created_date();
            day >= from && day <= to
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::test_support::{date, order, refs};
    use contracts::enums::PackageName;

    #[test]
    fn test_filter_by_year() {
        let orders = vec![
            order("1", 2025, 2, 10, PackageName::SuperMae),
            order("2", 2026, 2, 10, PackageName::SuperMae),
            order("3", 2026, 2, 11, PackageName::MamaeCoruja),
        ];
        let ids: Vec<_> = filter_by_year(&orders, 2026).iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_date_range_includes_both_ends() {
        let mut late = order("3", 2026, 2, 20, PackageName::SuperMae);
        late.created_at = date(2026, 2, 20).and_hms_opt(23, 59, 59).unwrap();
        let orders = vec![
            order("1", 2026, 1, 31, PackageName::SuperMae),
            order("2", 2026, 2, 1, PackageName::SuperMae),
            late,
            order("4", 2026, 2, 21, PackageName::SuperMae),
        ];
        let all = refs(&orders);
        let ids: Vec<_> = filter_by_date_range(&all, date(2026, 2, 1), date(2026, 2, 20))
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "3"]);
    }
}
