//! Deterministic synthetic data set
//!
//! Used when no fixture files are configured. The generator is a seeded
//! Park–Miller LCG, so every run (and every test) sees the same orders.

use chrono::{Datelike, Duration, NaiveDate};
use contracts::domain::a001_order::Order;
use contracts::domain::a002_customer::Customer;
use contracts::domain::a003_package_pricing::{
    ExtraPhotoYearPrice, PackagePriceSeries, PackageYearPrice, PricingTable,
};
use contracts::enums::{OrderStatus, PackageName, PaymentMethod};
use std::collections::{BTreeMap, BTreeSet};

const SEED: u64 = 42;
const MODULUS: u64 = 2_147_483_647;

/// Park–Miller minimal standard generator, values in `[0, 1)`
struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> f64 {
        self.state = self.state * 16_807 % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// Integer in `[0, n)`
    fn below(&mut self, n: u32) -> u32 {
        (self.next() * f64::from(n)).floor() as u32
    }
}

const FIRST_NAMES: [&str; 80] = [
    "Ana", "Beatriz", "Camila", "Daniela", "Eduarda", "Fernanda", "Gabriela", "Helena",
    "Isabela", "Juliana", "Karen", "Larissa", "Mariana", "Natália", "Olívia", "Patrícia",
    "Rafaela", "Sabrina", "Tatiana", "Valéria", "Adriana", "Bruna", "Carolina", "Débora",
    "Eliane", "Fabiana", "Giovana", "Heloísa", "Ingrid", "Jéssica", "Karina", "Letícia",
    "Michele", "Nathalia", "Priscila", "Renata", "Simone", "Talita", "Vivian", "Aline",
    "Bianca", "Cristina", "Diana", "Elisa", "Flávia", "Giulia", "Lorena", "Monique",
    "Paula", "Raquel", "Sandra", "Thaís", "Vanessa", "Yasmin", "Amanda", "Cíntia",
    "Denise", "Érica", "Gisele", "Joana", "Lívia", "Marta", "Nina", "Rosana",
    "Solange", "Tereza", "Vera", "Andréa", "Clara", "Estela", "Graziela", "Ivone",
    "Luana", "Márcia", "Norma", "Paloma", "Regina", "Sueli", "Tamires", "Vitória",
];

const LAST_NAMES: [&str; 20] = [
    "Silva", "Santos", "Oliveira", "Souza", "Lima", "Pereira", "Costa", "Rodrigues",
    "Almeida", "Nascimento", "Araújo", "Melo", "Barbosa", "Ribeiro", "Carvalho",
    "Gomes", "Martins", "Rocha", "Dias", "Ferreira",
];

/// (year, package, month, number of orders)
const ORDER_PLAN: [(i32, PackageName, u32, u32); 21] = [
    (2024, PackageName::MamaeCoruja, 3, 15),
    (2024, PackageName::MamaeCoruja, 4, 35),
    (2024, PackageName::MamaeCoruja, 5, 9),
    (2024, PackageName::SuperMae, 3, 14),
    (2024, PackageName::SuperMae, 4, 41),
    (2024, PackageName::SuperMae, 5, 4),
    (2024, PackageName::SuperMae, 6, 1),
    (2025, PackageName::MelhorMaeDoMundo, 2, 1),
    (2025, PackageName::MelhorMaeDoMundo, 4, 1),
    (2025, PackageName::MelhorMaeDoMundo, 5, 1),
    (2025, PackageName::MamaeCoruja, 2, 8),
    (2025, PackageName::MamaeCoruja, 3, 11),
    (2025, PackageName::MamaeCoruja, 4, 23),
    (2025, PackageName::MamaeCoruja, 5, 17),
    (2025, PackageName::SuperMae, 2, 4),
    (2025, PackageName::SuperMae, 3, 11),
    (2025, PackageName::SuperMae, 4, 12),
    (2025, PackageName::SuperMae, 5, 4),
    (2026, PackageName::MamaeCoruja, 2, 7),
    (2026, PackageName::SuperMae, 2, 5),
    (2026, PackageName::MelhorMaeDoMundo, 2, 3),
];

/// The current campaign is only generated up to this day of the month
const PARTIAL_YEAR: i32 = 2026;
const PARTIAL_YEAR_LAST_DAY: u32 = 23;

/// (entry, total) charged per year and package
fn order_prices(year: i32, package: PackageName) -> (f64, f64) {
    match (year, package) {
        (2024, PackageName::MamaeCoruja) => (75.0, 150.0),
        (2024, PackageName::SuperMae) => (120.0, 350.0),
        (2024, PackageName::MelhorMaeDoMundo) => (180.0, 700.0),
        (2025, PackageName::MamaeCoruja) => (90.0, 180.0),
        (2025, PackageName::SuperMae) => (130.0, 400.0),
        (2025, PackageName::MelhorMaeDoMundo) => (200.0, 750.0),
        (_, PackageName::MamaeCoruja) => (98.0, 196.0),
        (_, PackageName::SuperMae) => (120.0, 450.0),
        (_, PackageName::MelhorMaeDoMundo) => (180.0, 885.0),
    }
}

/// First customer index used by each year, so campaigns overlap partially
fn first_customer_index(year: i32) -> usize {
    match year {
        2024 => 0,
        2025 => 10,
        _ => 30,
    }
}

fn strip_accents(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

pub fn generate_customers() -> Vec<Customer> {
    FIRST_NAMES
        .iter()
        .enumerate()
        .map(|(i, first)| {
            let email = (i % 3 == 0)
                .then(|| format!("{}{}@email.com", strip_accents(&first.to_lowercase()), i));

            let tags: BTreeSet<String> = if i % 10 == 0 {
                ["VIP".to_string()].into()
            } else if i % 7 == 0 {
                ["voltou_2025".to_string()].into()
            } else {
                BTreeSet::new()
            };

            Customer {
                id: format!("c{}", i + 1),
                name: format!("{} {}", first, LAST_NAMES[i % LAST_NAMES.len()]),
                contact_handle: format!("(21) 9{:04}-{:04}", 8000 + i, (1000 + i * 7) % 10_000),
                email,
                tags,
            }
        })
        .collect()
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

/// Synthetic orders following `ORDER_PLAN`, spread evenly over each month
pub fn generate_orders(customers: &[Customer]) -> Vec<Order> {
    let mut rng = SeededRandom::new(SEED);
    let mut orders = Vec::new();
    let mut next_customer: BTreeMap<i32, usize> = BTreeMap::new();

    for (year, package, month, count) in ORDER_PLAN {
        let max_day = if year == PARTIAL_YEAR {
            PARTIAL_YEAR_LAST_DAY
        } else {
            last_day_of_month(year, month)
        };
        let (entry, total) = order_prices(year, package);

        for i in 0..count {
            let day = ((f64::from(i) / f64::from(count) * f64::from(max_day)).floor() as u32 + 1)
                .clamp(1, max_day);

            let customer_id = if customers.is_empty() {
                String::new()
            } else {
                let slot = next_customer
                    .entry(year)
                    .or_insert_with(|| first_customer_index(year));
                let id = customers[*slot % customers.len()].id.clone();
                *slot += 1;
                id
            };

            let hour = 8 + rng.below(12);
            let minute = rng.below(60);
            let Some(created_at) = NaiveDate::from_ymd_opt(year, month, day)
                .and_then(|d| d.and_hms_opt(hour, minute, 0))
            else {
                continue;
            };

            let session_at = if rng.next() < 0.6 {
                Some(created_at + Duration::days(i64::from(7 + rng.below(23))))
            } else {
                None
            };

            let status = match (session_at.is_some(), rng.next() < 0.5) {
                (true, true) => OrderStatus::Photographed,
                (true, false) => OrderStatus::PostSale,
                (false, true) => OrderStatus::Reserved,
                (false, false) => OrderStatus::Scheduled,
            };

            let methods = PaymentMethod::all();
            let entry_payment_method = methods[rng.below(methods.len() as u32) as usize];

            orders.push(Order {
                id: format!("o{}", orders.len() + 1),
                year,
                customer_id,
                created_at,
                session_at,
                package_name: package,
                entry_amount: entry,
                total_amount: total,
                entry_payment_method,
                status,
            });
        }
    }

    orders
}

/// Price history as published by the studio
pub fn default_pricing() -> PricingTable {
    fn p(year: i32, total: f64, entry: f64, count: u32, value: f64) -> PackageYearPrice {
        PackageYearPrice {
            year,
            total,
            entry,
            installments_count: count,
            installment_value: value,
        }
    }

    PricingTable {
        packages: vec![
            PackagePriceSeries {
                package: PackageName::MamaeCoruja,
                years: vec![
                    p(2023, 116.0, 58.0, 1, 58.0),
                    p(2024, 136.0, 68.0, 1, 68.0),
                    p(2025, 178.0, 89.0, 1, 89.0),
                    p(2026, 196.0, 98.0, 1, 98.0),
                ],
            },
            PackagePriceSeries {
                package: PackageName::SuperMae,
                years: vec![
                    p(2022, 288.0, 48.0, 5, 48.0),
                    p(2023, 348.0, 58.0, 5, 58.0),
                    p(2024, 348.0, 58.0, 5, 58.0),
                    p(2025, 419.0, 89.0, 3, 110.0),
                    p(2026, 450.0, 120.0, 3, 110.0),
                ],
            },
            PackagePriceSeries {
                package: PackageName::MelhorMaeDoMundo,
                years: vec![
                    p(2025, 819.0, 159.0, 3, 220.0),
                    p(2026, 885.0, 180.0, 3, 235.0),
                ],
            },
        ],
        extra_photo: vec![
            ExtraPhotoYearPrice { year: 2022, unit_price: 15.0 },
            ExtraPhotoYearPrice { year: 2023, unit_price: 16.0 },
            ExtraPhotoYearPrice { year: 2024, unit_price: 18.0 },
            ExtraPhotoYearPrice { year: 2025, unit_price: 19.0 },
            ExtraPhotoYearPrice { year: 2026, unit_price: 20.0 },
        ],
    }
}
