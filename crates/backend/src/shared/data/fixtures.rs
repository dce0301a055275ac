use contracts::domain::a001_order::Order;
use contracts::domain::a002_customer::Customer;
use contracts::domain::a003_package_pricing::PricingTable;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use std::path::Path;

use super::error::DataError;
use super::generator;
use crate::shared::config::{resolve_path, FixturesConfig};

/// Everything the dashboards read, loaded once at startup and never mutated
#[derive(Debug, Clone)]
pub struct FixtureStore {
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,
    pub pricing: PricingTable,
}

static STORE: OnceCell<FixtureStore> = OnceCell::new();

/// Load fixtures from the configured JSON files
///
/// Any file that is not configured is replaced by the built-in synthetic
/// data, so the dashboards work out of the box.
pub fn initialize_fixtures(config: &FixturesConfig) -> Result<(), DataError> {
    let store = load_store(config)?;

    tracing::info!(
        "Fixtures loaded: {} orders, {} customers, {} priced packages",
        store.orders.len(),
        store.customers.len(),
        store.pricing.packages.len()
    );

    STORE.set(store).map_err(|_| DataError::AlreadyInitialized)
}

pub fn get_store() -> Result<&'static FixtureStore, DataError> {
    STORE.get().ok_or(DataError::NotInitialized)
}

pub fn load_store(config: &FixturesConfig) -> Result<FixtureStore, DataError> {
    let customers = match &config.customers {
        Some(path) => load_json::<Vec<Customer>>(&resolve_path(path))?,
        None => {
            tracing::info!("No customers fixture configured, using synthetic customers");
            generator::generate_customers()
        }
    };

    let orders = match &config.orders {
        Some(path) => load_json::<Vec<Order>>(&resolve_path(path))?,
        None => {
            tracing::info!("No orders fixture configured, using synthetic orders");
            generator::generate_orders(&customers)
        }
    };

    let pricing = match &config.pricing {
        Some(path) => load_json::<PricingTable>(&resolve_path(path))?,
        None => generator::default_pricing(),
    };

    let unknown = orders
        .iter()
        .filter(|o| !customers.iter().any(|c| c.id == o.customer_id))
        .count();
    if unknown > 0 {
        tracing::warn!("{} orders reference customers missing from the fixtures", unknown);
    }

    Ok(FixtureStore {
        orders,
        customers,
        pricing,
    })
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    tracing::info!("Loading fixture: {}", path.display());

    let contents = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| DataError::Json {
        path: path.display().to_string(),
        source,
    })
}
