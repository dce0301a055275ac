use contracts::dashboards::d402_customer_segments::SessionCounts;
use contracts::domain::a001_order::Order;
use contracts::domain::a002_customer::Customer;
use std::collections::HashSet;

use super::filters::filter_by_year;
use super::math::round_half_up;

/// Customers who ordered in one of the two previous years but not in `year`
pub fn customers_missing_year<'a>(orders: &[Order], customers: &'a [Customer], year: i32) -> Vec<&'a Customer> {
    let current: HashSet<&str> = filter_by_year(orders, year)
        .iter()
        .map(|o| o.customer_id.as_str())
        .collect();
    let previous: HashSet<&str> = orders
        .iter()
        .filter(|o| o.year == year - 1 || o.year == year - 2)
        .map(|o| o.customer_id.as_str())
        .collect();

    customers
        .iter()
        .filter(|c| previous.contains(c.id.as_str()) && !current.contains(c.id.as_str()))
        .collect()
}

/// Orders of `year` whose photo session is not booked yet
pub fn awaiting_session(orders: &[Order], year: i32) -> Vec<&Order> {
    filter_by_year(orders, year)
        .into_iter()
        .filter(|o| !o.has_session())
        .collect()
}

/// Booked vs not booked orders of `year`
pub fn session_counts(orders: &[Order], year: i32) -> SessionCounts {
    let year_orders = filter_by_year(orders, year);
    let with_session = year_orders.iter().filter(|o| o.has_session()).count() as u32;
    let total = year_orders.len() as u32;
    let booked_pct = if total == 0 {
        0
    } else {
        round_half_up(f64::from(with_session) / f64::from(total) * 100.0) as u32
    };

    SessionCounts {
        year,
        with_session,
        without_session: total - with_session,
        booked_pct,
    }
}

/// Most recent order of a customer; the earliest listed wins a tie
pub fn customer_last_order<'a>(customer_id: &str, orders: &'a [Order]) -> Option<&'a Order> {
    orders
        .iter()
        .filter(|o| o.customer_id == customer_id)
        .reduce(|best, o| if o.created_at > best.created_at { o } else { best })
}

pub fn customer_total_spent(customer_id: &str, orders: &[Order]) -> f64 {
    orders
        .iter()
        .filter(|o| o.customer_id == customer_id)
        .map(|o| o.total_amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::test_support::{order, with_session_after};
    use contracts::enums::PackageName;

    fn customer(id: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: format!("Cliente {}", id),
            contact_handle: "(21) 98000-1000".to_string(),
            email: None,
            tags: Default::default(),
        }
    }

    fn order_for(customer_id: &str, id: &str, year: i32, month: u32) -> Order {
        let mut o = order(id, year, month, 10, PackageName::SuperMae);
        o.customer_id = customer_id.to_string();
        o
    }

    #[test]
    fn test_customers_missing_year() {
        let customers = vec![customer("a"), customer("b"), customer("c"), customer("d")];
        let orders = vec![
            order_for("a", "1", 2024, 4),
            order_for("b", "2", 2025, 4),
            order_for("b", "3", 2026, 2),
            order_for("c", "4", 2023, 4),
            order_for("d", "5", 2026, 2),
        ];

        let ids: Vec<_> = customers_missing_year(&orders, &customers, 2026)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn test_awaiting_session() {
        let orders = vec![
            order_for("a", "1", 2026, 2),
            with_session_after(order_for("b", "2", 2026, 2), 10),
            order_for("c", "3", 2025, 2),
        ];
        let ids: Vec<_> = awaiting_session(&orders, 2026).iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn test_session_counts() {
        let orders = vec![
            with_session_after(order_for("a", "1", 2025, 2), 3),
            order_for("b", "2", 2025, 3),
            order_for("c", "3", 2025, 4),
            order_for("d", "4", 2026, 2),
        ];

        assert_eq!(
            session_counts(&orders, 2025),
            SessionCounts {
                year: 2025,
                with_session: 1,
                without_session: 2,
                booked_pct: 33,
            }
        );
        assert_eq!(session_counts(&orders, 2026).booked_pct, 0);
        assert_eq!(session_counts(&orders, 2024).without_session, 0);
    }

    #[test]
    fn test_customer_last_order_and_total() {
        let mut orders = vec![
            order_for("a", "1", 2024, 4),
            order_for("a", "2", 2025, 3),
            order_for("b", "3", 2026, 2),
        ];
        orders[0].total_amount = 350.0;
        orders[1].total_amount = 400.0;

        assert_eq!(customer_last_order("a", &orders).map(|o| o.id.as_str()), Some("2"));
        assert_eq!(customer_last_order("z", &orders), None);
        assert_eq!(customer_total_spent("a", &orders), 750.0);
        assert_eq!(customer_total_spent("z", &orders), 0.0);
    }
}
