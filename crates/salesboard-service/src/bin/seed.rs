//! Seed the salesboard store with the sample dataset.
//!
//! Deletes any existing sales, then inserts the demo records used by the
//! dashboard. Reads `DATA_DIR` like the service itself.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use salesboard_core::SaleDraft;
use salesboard_service::ServiceConfig;
use salesboard_store::{RocksStore, SaleStore};

/// One seed row: product, amount, region, customer, rep, (y, m, d), category, profit, cost.
type SeedRow = (
    &'static str,
    f64,
    &'static str,
    &'static str,
    &'static str,
    (i32, u32, u32),
    &'static str,
    f64,
    f64,
);

const SALES_DATA: &[SeedRow] = &[
    ("Laptop Pro", 1299.99, "North America", "TechCorp Inc.", "John Smith", (2023, 1, 15), "Electronics", 350.0, 949.99),
    ("Smartphone X", 899.99, "Europe", "Digital Solutions Ltd.", "Emma Johnson", (2023, 1, 20), "Electronics", 250.0, 649.99),
    ("Office Suite Pro", 199.99, "Asia", "Global Services Co.", "Michael Chen", (2023, 1, 25), "Software", 150.0, 49.99),
    ("Cloud Storage Plan", 49.99, "South America", "Data Systems S.A.", "Ana Rodriguez", (2023, 2, 5), "Services", 40.0, 9.99),
    ("Marketing Strategy", 4999.99, "North America", "Retail Giants Inc.", "John Smith", (2023, 2, 10), "Consulting", 3000.0, 1999.99),
    ("Server Hardware", 2499.99, "Europe", "TechCorp Inc.", "Emma Johnson", (2023, 2, 15), "Hardware", 800.0, 1699.99),
    ("AI Software License", 1499.99, "Asia", "Innovation Tech", "Michael Chen", (2023, 2, 20), "Software", 1000.0, 499.99),
    ("Security Suite", 299.99, "Africa", "Secure Solutions", "David Okafor", (2023, 3, 5), "Software", 200.0, 99.99),
    ("Laptop Pro", 1299.99, "North America", "Education First", "Sarah Wilson", (2023, 3, 10), "Electronics", 350.0, 949.99),
    ("Smartphone X", 899.99, "Europe", "Mobile Retail Ltd.", "Emma Johnson", (2023, 3, 15), "Electronics", 250.0, 649.99),
    ("Data Analysis", 3499.99, "North America", "Finance Corp", "John Smith", (2023, 3, 20), "Consulting", 2500.0, 999.99),
    ("Network Setup", 1999.99, "Asia", "Global Services Co.", "Michael Chen", (2023, 4, 5), "Services", 1200.0, 799.99),
    ("Cloud Storage Plan", 49.99, "South America", "Small Business Inc.", "Ana Rodriguez", (2023, 4, 10), "Services", 40.0, 9.99),
    ("Laptop Pro", 1299.99, "Europe", "Tech Innovations", "Emma Johnson", (2023, 4, 15), "Electronics", 350.0, 949.99),
    ("Server Hardware", 2499.99, "North America", "Data Center Co.", "John Smith", (2023, 4, 20), "Hardware", 800.0, 1699.99),
    ("Project Management Tool", 199.99, "Europe", "Creative Studios", "Emma Johnson", (2023, 5, 5), "Software", 150.0, 49.99),
    ("Enterprise CRM", 4999.99, "North America", "Global Retail Inc.", "John Smith", (2023, 5, 10), "Software", 3500.0, 1499.99),
    ("Networking Equipment", 3499.99, "Asia", "Tech Solutions Ltd.", "Michael Chen", (2023, 5, 15), "Hardware", 1200.0, 2299.99),
    ("Digital Marketing Campaign", 7999.99, "Europe", "Fashion Brand Co.", "Emma Johnson", (2023, 5, 20), "Services", 5000.0, 2999.99),
    ("VR Headset Pro", 499.99, "North America", "Gaming Paradise", "Sarah Wilson", (2023, 6, 5), "Electronics", 200.0, 299.99),
];

fn midnight_utc(ymd: (i32, u32, u32)) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(ymd.0, ymd.1, ymd.2, 0, 0, 0)
        .single()
        .expect("valid seed date")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env();

    tracing::info!(path = %config.data_dir, "Opening RocksDB store");
    let store = Arc::new(RocksStore::open(&config.data_dir)?);

    // Delete existing data
    let existing = store.scan()?;
    for sale in &existing {
        store.delete(&sale.id)?;
    }
    tracing::info!(count = existing.len(), "Existing sales data deleted");

    // Insert new data
    for row in SALES_DATA {
        let (product, amount, region, customer, sales_rep, ymd, category, profit, cost) = *row;
        let draft = SaleDraft {
            product: product.into(),
            amount,
            region: region.into(),
            customer: customer.into(),
            sales_rep: sales_rep.into(),
            date: Some(midnight_utc(ymd)),
            category: category.into(),
            profit,
            cost,
        };
        let sale = store.insert(draft)?;
        tracing::debug!(sale_id = %sale.id, product = %sale.product, "Seeded sale");
    }

    tracing::info!(
        count = SALES_DATA.len(),
        "Sales records inserted successfully"
    );

    Ok(())
}
