//! Shared aggregation helpers used by the chart builders.
//!
//! Grouping is BTreeMap-based so category and month ordering stays
//! deterministic across runs. Aggregations skip undefined fields.

use appdash_common::Listing;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Arithmetic mean, `None` for an empty input.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

/// Groups rows by category name.
pub fn group_by_category<'a, I>(rows: I) -> BTreeMap<&'a str, Vec<&'a Listing>>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut groups: BTreeMap<&str, Vec<&Listing>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.category.as_str()).or_default().push(row);
    }
    groups
}

/// Sums defined install counts over a group.
pub fn total_installs(rows: &[&Listing]) -> u64 {
    rows.iter().filter_map(|r| r.installs).sum()
}

/// The `limit` category names with the highest total installs, descending.
/// Ties keep alphabetical order.
pub fn top_by_total_installs<'a>(
    groups: &BTreeMap<&'a str, Vec<&'a Listing>>,
    limit: usize,
) -> Vec<&'a str> {
    let mut totals: Vec<(&str, u64)> = groups
        .iter()
        .map(|(category, rows)| (*category, total_installs(rows)))
        .collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals.truncate(limit);
    totals.into_iter().map(|(category, _)| category).collect()
}

/// Sums installs per (category, month), dropping rows with no month.
/// Rows whose install count is undefined still anchor their group at zero,
/// matching how the aggregation behaves when every value is missing.
pub fn monthly_installs_by_category<'a, I>(
    rows: I,
) -> BTreeMap<&'a str, BTreeMap<NaiveDate, u64>>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut series: BTreeMap<&str, BTreeMap<NaiveDate, u64>> = BTreeMap::new();
    for row in rows {
        let Some(month) = row.month else { continue };
        *series
            .entry(row.category.as_str())
            .or_default()
            .entry(month)
            .or_insert(0) += row.installs.unwrap_or(0);
    }
    series
}
