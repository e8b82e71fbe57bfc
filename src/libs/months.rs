//! Month-range labels for report titles.
//!
//! The distinct `(year, month)` pairs of a row set are grouped by year and
//! partitioned into maximal runs of consecutive months. Each run renders as
//! `"Juni/Juli/August 2025"`, single months as `"Juni 2025"`, and runs and
//! years are joined with `", "`. The grouping is a pure function of the
//! distinct date set; month naming is an injected strategy so the algorithm
//! stays locale-agnostic.

use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

/// Naming strategy from month number (1-12) to a display name.
pub trait MonthNames {
    fn name(&self, month: u32) -> &'static str;
}

/// Business-locale month names, the default for reports.
pub struct GermanMonths;

/// Fallback locale used when German output is not wanted.
pub struct EnglishMonths;

const GERMAN: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

const ENGLISH: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl MonthNames for GermanMonths {
    fn name(&self, month: u32) -> &'static str {
        GERMAN[month.saturating_sub(1).min(11) as usize]
    }
}

impl MonthNames for EnglishMonths {
    fn name(&self, month: u32) -> &'static str {
        ENGLISH[month.saturating_sub(1).min(11) as usize]
    }
}

/// Renders the month-range label for a set of dates. Duplicate dates and
/// input order do not affect the result; an empty set yields an empty string.
pub fn months_range_label(dates: &[NaiveDate], names: &dyn MonthNames) -> String {
    let mut by_year: BTreeMap<i32, BTreeSet<u32>> = BTreeMap::new();
    for date in dates {
        by_year.entry(date.year()).or_default().insert(date.month());
    }

    let mut parts: Vec<String> = Vec::new();
    for (year, months) in &by_year {
        for block in consecutive_blocks(months) {
            let joined = block.iter().map(|&m| names.name(m)).collect::<Vec<_>>().join("/");
            parts.push(format!("{} {}", joined, year));
        }
    }
    parts.join(", ")
}

/// Renders the label with the default business locale.
pub fn months_range_label_default(dates: &[NaiveDate]) -> String {
    months_range_label(dates, &GermanMonths)
}

/// Partitions sorted distinct month numbers into maximal consecutive runs:
/// {6, 7, 8} becomes one block, {6, 8} becomes two.
fn consecutive_blocks(months: &BTreeSet<u32>) -> Vec<Vec<u32>> {
    let mut blocks: Vec<Vec<u32>> = Vec::new();
    for &month in months {
        match blocks.last_mut() {
            Some(block) if block.last() == Some(&(month - 1)) => block.push(month),
            _ => blocks.push(vec![month]),
        }
    }
    blocks
}
