//! Derived reporting summaries over the sale collection.
//!
//! Every function here is a pure function of a snapshot slice: the service
//! scans the store and hands the records in. Nothing is cached or maintained
//! incrementally; each call re-derives its result from scratch, so a summary
//! always reflects exactly the snapshot it was computed from.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::sale::Sale;

/// Number of entries returned by [`top_sales_reps`].
pub const TOP_REPS_LIMIT: usize = 5;

/// One group in a keyed summary (region, category, or sales rep).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTotal {
    /// Grouping key value.
    pub key: String,
    /// Sum of `amount` across the group.
    pub total_amount: f64,
    /// Number of sale rows in the group.
    pub count: u64,
}

/// Calendar bucket for monthly totals, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
}

/// Total for one `(year, month)` bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotal {
    /// The calendar bucket.
    pub month: MonthKey,
    /// Sum of `amount` across the bucket.
    pub total_amount: f64,
    /// Number of sale rows in the bucket.
    pub count: u64,
}

/// Whole-collection financial summary.
///
/// The empty collection yields the zero-valued record rather than no rows;
/// callers depend on always receiving a well-formed object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financials {
    /// Sum of `amount` across all sales.
    pub total_revenue: f64,
    /// Sum of `profit` across all sales.
    pub total_profit: f64,
    /// Sum of `cost` across all sales.
    pub total_cost: f64,
}

/// Group sales by region, summing `amount`. Keys ascend alphabetically.
#[must_use]
pub fn totals_by_region(sales: &[Sale]) -> Vec<GroupTotal> {
    group_totals(sales, |sale| sale.region.as_str())
}

/// Group sales by category, summing `amount`. Keys ascend alphabetically.
#[must_use]
pub fn totals_by_category(sales: &[Sale]) -> Vec<GroupTotal> {
    group_totals(sales, |sale| sale.category.as_str())
}

/// Top sales representatives by summed `amount`.
///
/// Sorted by `total_amount` descending; equal totals are broken by rep name
/// ascending so the ranking is deterministic. At most [`TOP_REPS_LIMIT`]
/// entries are returned.
#[must_use]
pub fn top_sales_reps(sales: &[Sale]) -> Vec<GroupTotal> {
    let mut groups = group_totals(sales, |sale| sale.sales_rep.as_str());
    // group_totals returns keys ascending; a stable sort on the total alone
    // therefore keeps the name-ascending tie-break.
    groups.sort_by(|a, b| b.total_amount.total_cmp(&a.total_amount));
    groups.truncate(TOP_REPS_LIMIT);
    groups
}

/// Group sales into `(year, month)` buckets of their UTC date.
///
/// Sorted ascending by `(year, month)`.
#[must_use]
pub fn monthly_totals(sales: &[Sale]) -> Vec<MonthlyTotal> {
    let mut buckets: BTreeMap<MonthKey, (f64, u64)> = BTreeMap::new();
    for sale in sales {
        let key = MonthKey {
            year: sale.date.year(),
            month: sale.date.month(),
        };
        let entry = buckets.entry(key).or_insert((0.0, 0));
        entry.0 += sale.amount;
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(month, (total_amount, count))| MonthlyTotal {
            month,
            total_amount,
            count,
        })
        .collect()
}

/// Sum revenue, profit, and cost across the whole collection.
///
/// An empty slice yields `Financials::default()` (all zeros).
#[must_use]
pub fn financials(sales: &[Sale]) -> Financials {
    let mut summary = Financials::default();
    for sale in sales {
        summary.total_revenue += sale.amount;
        summary.total_profit += sale.profit;
        summary.total_cost += sale.cost;
    }
    summary
}

fn group_totals<F>(sales: &[Sale], key_of: F) -> Vec<GroupTotal>
where
    F: Fn(&Sale) -> &str,
{
    let mut groups: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    for sale in sales {
        let entry = groups.entry(key_of(sale)).or_insert((0.0, 0));
        entry.0 += sale.amount;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(key, (total_amount, count))| GroupTotal {
            key: key.to_string(),
            total_amount,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SaleId;
    use chrono::{TimeZone, Utc};

    fn sale(region: &str, rep: &str, category: &str, amount: f64, date: (i32, u32, u32)) -> Sale {
        Sale {
            id: SaleId::generate(),
            product: "Widget".into(),
            amount,
            region: region.into(),
            customer: "Acme".into(),
            sales_rep: rep.into(),
            date: Utc.with_ymd_and_hms(date.0, date.1, date.2, 0, 0, 0).unwrap(),
            category: category.into(),
            profit: amount * 0.3,
            cost: amount * 0.7,
        }
    }

    #[test]
    fn by_region_groups_and_sums() {
        let sales = vec![
            sale("Europe", "A", "Electronics", 100.0, (2023, 1, 1)),
            sale("Europe", "B", "Software", 200.0, (2023, 2, 1)),
            sale("Europe", "C", "Services", 50.0, (2023, 3, 1)),
            sale("Asia", "A", "Electronics", 10.0, (2023, 1, 5)),
        ];

        let groups = totals_by_region(&sales);
        let europe = groups.iter().find(|g| g.key == "Europe").unwrap();
        assert_eq!(europe.total_amount, 350.0);
        assert_eq!(europe.count, 3);
    }

    #[test]
    fn by_region_keys_ascend() {
        let sales = vec![
            sale("South America", "A", "X", 1.0, (2023, 1, 1)),
            sale("Asia", "A", "X", 1.0, (2023, 1, 1)),
            sale("Europe", "A", "X", 1.0, (2023, 1, 1)),
        ];
        let keys: Vec<_> = totals_by_region(&sales).into_iter().map(|g| g.key).collect();
        assert_eq!(keys, vec!["Asia", "Europe", "South America"]);
    }

    #[test]
    fn by_category_groups_independently_of_region() {
        let sales = vec![
            sale("Europe", "A", "Electronics", 100.0, (2023, 1, 1)),
            sale("Asia", "B", "Electronics", 50.0, (2023, 1, 1)),
        ];
        let groups = totals_by_category(&sales);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, "Electronics");
        assert_eq!(groups[0].total_amount, 150.0);
        assert_eq!(groups[0].count, 2);
    }

    #[test]
    fn top_reps_sorted_desc_and_truncated() {
        let sales: Vec<Sale> = (0..7)
            .map(|i| sale("EU", &format!("Rep{i}"), "X", f64::from(i * 100), (2023, 1, 1)))
            .collect();

        let top = top_sales_reps(&sales);
        assert_eq!(top.len(), TOP_REPS_LIMIT);
        for pair in top.windows(2) {
            assert!(pair[0].total_amount >= pair[1].total_amount);
        }
        assert_eq!(top[0].key, "Rep6");
    }

    #[test]
    fn top_reps_ties_break_by_name_ascending() {
        let sales = vec![
            sale("EU", "Zara", "X", 100.0, (2023, 1, 1)),
            sale("EU", "Anna", "X", 100.0, (2023, 1, 1)),
            sale("EU", "Mike", "X", 100.0, (2023, 1, 1)),
        ];
        let names: Vec<_> = top_sales_reps(&sales).into_iter().map(|g| g.key).collect();
        assert_eq!(names, vec!["Anna", "Mike", "Zara"]);
    }

    #[test]
    fn monthly_buckets_by_year_and_month() {
        let sales = vec![
            sale("EU", "A", "X", 500.0, (2023, 3, 10)),
            sale("EU", "A", "X", 700.0, (2023, 3, 20)),
            sale("EU", "A", "X", 42.0, (2023, 4, 1)),
        ];

        let months = monthly_totals(&sales);
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].month, MonthKey { year: 2023, month: 3 });
        assert_eq!(months[0].total_amount, 1200.0);
        assert_eq!(months[0].count, 2);
        assert_eq!(months[1].month, MonthKey { year: 2023, month: 4 });
    }

    #[test]
    fn monthly_sorted_across_year_boundary() {
        let sales = vec![
            sale("EU", "A", "X", 1.0, (2024, 1, 1)),
            sale("EU", "A", "X", 1.0, (2023, 12, 31)),
            sale("EU", "A", "X", 1.0, (2023, 2, 1)),
        ];
        let keys: Vec<_> = monthly_totals(&sales).into_iter().map(|m| m.month).collect();
        assert_eq!(
            keys,
            vec![
                MonthKey { year: 2023, month: 2 },
                MonthKey { year: 2023, month: 12 },
                MonthKey { year: 2024, month: 1 },
            ]
        );
    }

    #[test]
    fn financials_sums_all_three_fields() {
        let mut a = sale("EU", "A", "X", 100.0, (2023, 1, 1));
        a.profit = 30.0;
        a.cost = 70.0;
        let mut b = sale("EU", "A", "X", 50.0, (2023, 1, 1));
        b.profit = 20.0;
        b.cost = 25.0;

        let summary = financials(&[a, b]);
        assert_eq!(summary.total_revenue, 150.0);
        assert_eq!(summary.total_profit, 50.0);
        assert_eq!(summary.total_cost, 95.0);
    }

    #[test]
    fn financials_zero_defaults_on_empty() {
        let summary = financials(&[]);
        assert_eq!(summary, Financials::default());
        assert_eq!(summary.total_revenue, 0.0);
    }

    #[test]
    fn group_total_wire_names_are_camel_case() {
        let sales = vec![sale("EU", "A", "X", 1.0, (2023, 1, 1))];
        let json = serde_json::to_value(totals_by_region(&sales)).unwrap();
        assert!(json[0].get("totalAmount").is_some());
        assert!(json[0].get("total_amount").is_none());
    }
}
