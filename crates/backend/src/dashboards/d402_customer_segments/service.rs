use anyhow::Result;
use chrono::Datelike;
use contracts::dashboards::d402_customer_segments::{
    AwaitingSessionEntry, CustomerSegmentsRequest, CustomerSegmentsResponse, LapsedCustomer,
};
use contracts::domain::a001_order::Order;
use contracts::domain::a002_customer::Customer;
use std::collections::HashMap;

use crate::dashboards::resolve_today;
use crate::shared::analytics::segments::{
    awaiting_session, customer_last_order, customer_total_spent, customers_missing_year,
    session_counts,
};
use crate::shared::config::get_config;
use crate::shared::data::fixtures::get_store;

/// Get customer segments; the year defaults to the reference date's year
pub fn get_customer_segments(request: CustomerSegmentsRequest) -> Result<CustomerSegmentsResponse> {
    let store = get_store()?;
    let year = match request.year {
        Some(year) => year,
        None => resolve_today(None, &get_config()?.campaign).year(),
    };

    Ok(build_customer_segments(
        &store.orders,
        &store.customers,
        year,
        request.tag.as_deref(),
    ))
}

/// Lapsed customers to win back and orders still waiting for a session
///
/// `tag` narrows the lapsed list only.
pub fn build_customer_segments(
    orders: &[Order],
    customers: &[Customer],
    year: i32,
    tag: Option<&str>,
) -> CustomerSegmentsResponse {
    let lapsed = customers_missing_year(orders, customers, year)
        .into_iter()
        .filter(|customer| tag.map_or(true, |t| customer.has_tag(t)))
        .map(|customer| {
            let last = customer_last_order(&customer.id, orders);
            LapsedCustomer {
                id: customer.id.clone(),
                name: customer.name.clone(),
                contact_handle: customer.contact_handle.clone(),
                email: customer.email.clone(),
                last_package: last.map(|o| o.package_name),
                last_order_at: last.map(|o| o.created_at),
                total_spent: customer_total_spent(&customer.id, orders),
            }
        })
        .collect();

    let names: HashMap<&str, &str> = customers
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let awaiting = awaiting_session(orders, year)
        .into_iter()
        .map(|o| AwaitingSessionEntry {
            order_id: o.id.clone(),
            customer_id: o.customer_id.clone(),
            customer_name: names.get(o.customer_id.as_str()).map(|n| n.to_string()),
            package_name: o.package_name,
            created_at: o.created_at,
            status: o.status,
        })
        .collect();

    CustomerSegmentsResponse {
        year,
        tag: tag.map(str::to_string),
        lapsed,
        awaiting_session: awaiting,
        sessions_by_year: (year - 2..=year).map(|y| session_counts(orders, y)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::test_support::{at, order, with_session_after};
    use crate::shared::data::generator::{generate_customers, generate_orders};
    use contracts::enums::PackageName;
    use std::collections::BTreeSet;

    fn customer(id: &str, name: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            contact_handle: "(21) 98000-1000".to_string(),
            email: None,
            tags: BTreeSet::new(),
        }
    }

    #[test]
    fn test_lapsed_and_awaiting() {
        let mut old = order("1", 2024, 3, 10, PackageName::MamaeCoruja);
        old.customer_id = "ana".to_string();
        let mut newer = order("2", 2025, 4, 2, PackageName::SuperMae);
        newer.customer_id = "ana".to_string();
        let mut returning = order("3", 2025, 3, 1, PackageName::SuperMae);
        returning.customer_id = "bia".to_string();
        let mut this_year = order("4", 2026, 2, 5, PackageName::SuperMae);
        this_year.customer_id = "bia".to_string();
        let booked = with_session_after(order("5", 2026, 2, 6, PackageName::MamaeCoruja), 7);
        let mut unknown = order("6", 2026, 2, 7, PackageName::MamaeCoruja);
        unknown.customer_id = "ghost".to_string();

        let orders = vec![old, newer, returning, this_year, booked, unknown];
        let customers = vec![customer("ana", "Ana Silva"), customer("bia", "Bia Souza")];

        let response = build_customer_segments(&orders, &customers, 2026, None);
        assert_eq!(response.year, 2026);

        assert_eq!(response.lapsed.len(), 1);
        let ana = &response.lapsed[0];
        assert_eq!(ana.id, "ana");
        assert_eq!(ana.last_package, Some(PackageName::SuperMae));
        assert_eq!(ana.last_order_at, Some(at(2025, 4, 2, 10)));
        assert_eq!(ana.total_spent, 400.0);

        let ids: Vec<_> = response.awaiting_session.iter().map(|e| e.order_id.as_str()).collect();
        assert_eq!(ids, vec!["4", "6"]);
        assert_eq!(response.awaiting_session[0].customer_name.as_deref(), Some("Bia Souza"));
        assert_eq!(response.awaiting_session[1].customer_name, None);
    }

    #[test]
    fn test_tag_narrows_lapsed_only() {
        let mut vip = customer("ana", "Ana Silva");
        vip.tags.insert("VIP".to_string());
        let plain = customer("bia", "Bia Souza");

        let mut first = order("1", 2025, 3, 1, PackageName::SuperMae);
        first.customer_id = "ana".to_string();
        let mut second = order("2", 2024, 3, 1, PackageName::SuperMae);
        second.customer_id = "bia".to_string();
        let mut open = order("3", 2026, 2, 3, PackageName::SuperMae);
        open.customer_id = "carla".to_string();
        let orders = vec![first, second, open];

        let all = build_customer_segments(&orders, &[vip.clone(), plain.clone()], 2026, None);
        assert_eq!(all.lapsed.len(), 2);

        let tagged = build_customer_segments(&orders, &[vip, plain], 2026, Some("VIP"));
        assert_eq!(tagged.tag.as_deref(), Some("VIP"));
        let ids: Vec<_> = tagged.lapsed.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["ana"]);
        assert_eq!(tagged.awaiting_session.len(), 1);
    }

    #[test]
    fn test_sessions_by_year() {
        let orders = vec![
            with_session_after(order("1", 2026, 2, 6, PackageName::MamaeCoruja), 7),
            order("2", 2026, 2, 7, PackageName::MamaeCoruja),
            with_session_after(order("3", 2025, 2, 6, PackageName::SuperMae), 3),
        ];
        let response = build_customer_segments(&orders, &[], 2026, None);

        let years: Vec<_> = response.sessions_by_year.iter().map(|s| s.year).collect();
        assert_eq!(years, vec![2024, 2025, 2026]);
        assert_eq!(response.sessions_by_year[0].booked_pct, 0);
        assert_eq!(response.sessions_by_year[1].booked_pct, 100);
        assert_eq!(response.sessions_by_year[2].with_session, 1);
        assert_eq!(response.sessions_by_year[2].without_session, 1);
        assert_eq!(response.sessions_by_year[2].booked_pct, 50);
    }

    #[test]
    fn test_synthetic_segments() {
        let customers = generate_customers();
        let orders = generate_orders(&customers);
        let response = build_customer_segments(&orders, &customers, 2026, None);

        assert!(!response.lapsed.is_empty());
        for lapsed in &response.lapsed {
            assert!(!orders.iter().any(|o| o.year == 2026 && o.customer_id == lapsed.id));
            assert!(lapsed.total_spent > 0.0);
        }
        assert!(response.awaiting_session.iter().all(|e| e.customer_name.is_some()));
    }
}
