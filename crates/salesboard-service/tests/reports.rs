//! Reporting endpoint integration tests.
//!
//! Covers the dashboard contract: grouped totals, the top-rep ranking,
//! monthly buckets, and the zero-defaulted financial summary.

mod common;

use common::{sale_body, TestHarness};
use serde_json::json;

// ============================================================================
// By region / by category
// ============================================================================

#[tokio::test]
async fn by_region_groups_and_sums() {
    let harness = TestHarness::new();

    harness
        .create_sale(sale_body("Europe", "A", 100.0, "2023-01-05T00:00:00Z"))
        .await;
    harness
        .create_sale(sale_body("Europe", "B", 200.0, "2023-02-05T00:00:00Z"))
        .await;
    harness
        .create_sale(sale_body("Europe", "C", 50.0, "2023-03-05T00:00:00Z"))
        .await;
    harness
        .create_sale(sale_body("Asia", "A", 999.0, "2023-01-05T00:00:00Z"))
        .await;

    let response = harness.server.get("/api/sales/by-region").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    let europe = body
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["key"] == "Europe")
        .expect("Europe group present");
    assert_eq!(europe["totalAmount"], 350.0);
    assert_eq!(europe["count"], 3);
}

#[tokio::test]
async fn by_category_groups_and_sums() {
    let harness = TestHarness::new();

    let mut software = sale_body("Europe", "A", 200.0, "2023-01-05T00:00:00Z");
    software["category"] = json!("Software");
    harness.create_sale(software).await;
    harness
        .create_sale(sale_body("Asia", "B", 100.0, "2023-01-05T00:00:00Z"))
        .await;

    let response = harness.server.get("/api/sales/by-category").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let groups = body.as_array().unwrap();

    assert_eq!(groups.len(), 2);
    let software = groups.iter().find(|g| g["key"] == "Software").unwrap();
    assert_eq!(software["totalAmount"], 200.0);
    assert_eq!(software["count"], 1);
}

#[tokio::test]
async fn by_region_empty_store_is_empty_array() {
    let harness = TestHarness::new();

    let response = harness.server.get("/api/sales/by-region").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!([]));
}

// ============================================================================
// Top sales reps
// ============================================================================

#[tokio::test]
async fn top_reps_sorted_desc_and_capped_at_five() {
    let harness = TestHarness::new();

    for i in 1..=7 {
        harness
            .create_sale(sale_body(
                "Europe",
                &format!("Rep{i}"),
                f64::from(i * 100),
                "2023-01-05T00:00:00Z",
            ))
            .await;
    }

    let response = harness.server.get("/api/sales/top-sales-reps").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let reps = body.as_array().unwrap();

    assert_eq!(reps.len(), 5);
    assert_eq!(reps[0]["key"], "Rep7");
    assert_eq!(reps[0]["totalAmount"], 700.0);
    for pair in reps.windows(2) {
        assert!(pair[0]["totalAmount"].as_f64() >= pair[1]["totalAmount"].as_f64());
    }
}

#[tokio::test]
async fn top_reps_accumulate_per_rep() {
    let harness = TestHarness::new();

    harness
        .create_sale(sale_body("Europe", "Emma Johnson", 100.0, "2023-01-05T00:00:00Z"))
        .await;
    harness
        .create_sale(sale_body("Asia", "Emma Johnson", 150.0, "2023-02-05T00:00:00Z"))
        .await;

    let response = harness.server.get("/api/sales/top-sales-reps").await;
    let body: serde_json::Value = response.json();
    let reps = body.as_array().unwrap();

    assert_eq!(reps.len(), 1);
    assert_eq!(reps[0]["key"], "Emma Johnson");
    assert_eq!(reps[0]["totalAmount"], 250.0);
    assert_eq!(reps[0]["count"], 2);
}

// ============================================================================
// Monthly totals
// ============================================================================

#[tokio::test]
async fn monthly_buckets_same_month_together() {
    let harness = TestHarness::new();

    harness
        .create_sale(sale_body("Europe", "A", 500.0, "2023-03-10T00:00:00Z"))
        .await;
    harness
        .create_sale(sale_body("Europe", "A", 700.0, "2023-03-20T00:00:00Z"))
        .await;

    let response = harness.server.get("/api/sales/monthly").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let months = body.as_array().unwrap();

    assert_eq!(months.len(), 1);
    assert_eq!(months[0]["month"]["year"], 2023);
    assert_eq!(months[0]["month"]["month"], 3);
    assert_eq!(months[0]["totalAmount"], 1200.0);
    assert_eq!(months[0]["count"], 2);
}

#[tokio::test]
async fn monthly_sorted_ascending() {
    let harness = TestHarness::new();

    harness
        .create_sale(sale_body("Europe", "A", 1.0, "2023-05-01T00:00:00Z"))
        .await;
    harness
        .create_sale(sale_body("Europe", "A", 1.0, "2023-02-01T00:00:00Z"))
        .await;
    harness
        .create_sale(sale_body("Europe", "A", 1.0, "2022-12-01T00:00:00Z"))
        .await;

    let response = harness.server.get("/api/sales/monthly").await;
    let body: serde_json::Value = response.json();
    let months = body.as_array().unwrap();

    let keys: Vec<(i64, i64)> = months
        .iter()
        .map(|m| {
            (
                m["month"]["year"].as_i64().unwrap(),
                m["month"]["month"].as_i64().unwrap(),
            )
        })
        .collect();
    assert_eq!(keys, vec![(2022, 12), (2023, 2), (2023, 5)]);
}

// ============================================================================
// Financials
// ============================================================================

#[tokio::test]
async fn financials_sums_snapshot() {
    let harness = TestHarness::new();

    harness
        .create_sale(json!({
            "product": "A", "amount": 100.0, "region": "Europe",
            "customer": "C", "salesRep": "R", "date": "2023-01-01T00:00:00Z",
            "category": "X", "profit": 30.0, "cost": 70.0,
        }))
        .await;
    harness
        .create_sale(json!({
            "product": "B", "amount": 50.0, "region": "Asia",
            "customer": "C", "salesRep": "R", "date": "2023-02-01T00:00:00Z",
            "category": "X", "profit": 20.0, "cost": 25.0,
        }))
        .await;

    let response = harness.server.get("/api/sales/financials").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["totalRevenue"], 150.0);
    assert_eq!(body["totalProfit"], 50.0);
    assert_eq!(body["totalCost"], 95.0);
}

#[tokio::test]
async fn financials_zero_defaulted_when_empty() {
    let harness = TestHarness::new();

    let response = harness.server.get("/api/sales/financials").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    // A well-formed zero object, not an empty array.
    assert_eq!(
        body,
        json!({ "totalRevenue": 0.0, "totalProfit": 0.0, "totalCost": 0.0 })
    );
}

// ============================================================================
// Route precedence
// ============================================================================

#[tokio::test]
async fn report_paths_not_shadowed_by_id_capture() {
    let harness = TestHarness::new();

    // All five static report paths must resolve even though /:id is routed.
    for path in [
        "/api/sales/by-region",
        "/api/sales/by-category",
        "/api/sales/top-sales-reps",
        "/api/sales/monthly",
        "/api/sales/financials",
    ] {
        harness.server.get(path).await.assert_status_ok();
    }
}
