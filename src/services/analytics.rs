//! Pure aggregation over a ledger snapshot: totals, per-category rankings, trailing-window
//! averages and bucketed time series.
//!
//! Nothing here talks to the store. Records whose `date` is not a valid `YYYY-MM-DD` are left
//! out of every windowed or bucketed computation but still count towards all-time totals.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

use crate::date_utils::{self, Bucket, Window};
use crate::models::{
    Category, CategoryMonthlyExpense, DailyExpense, Expense, ExpenseSummary, MonthlyExpense,
    WeeklyExpense,
};

pub const TOP_CATEGORY_LIMIT: usize = 5;

#[derive(Debug, Default)]
struct BucketTotal {
    total: f64,
    count: usize,
    latest: Option<NaiveDate>,
}

impl BucketTotal {
    fn add(&mut self, amount: f64, date: NaiveDate) {
        self.total += amount;
        self.count += 1;
        self.latest = self.latest.max(Some(date));
    }
}

fn dated_in_window(
    expenses: &[Expense],
    window: Window,
    today: NaiveDate,
) -> impl Iterator<Item = (NaiveDate, &Expense)> {
    let start = window.start(today);
    expenses.iter().filter_map(move |e| match date_utils::parse_date(&e.date) {
        Some(date) if date >= start => Some((date, e)),
        Some(_) => None,
        None => {
            tracing::trace!(expense_id = e.id, date = %e.date, "Skipping undated expense");
            None
        }
    })
}

fn group_by_bucket(
    expenses: &[Expense],
    window: Window,
    bucket: Bucket,
    today: NaiveDate,
) -> BTreeMap<String, BucketTotal> {
    let mut buckets: BTreeMap<String, BucketTotal> = BTreeMap::new();
    for (date, expense) in dated_in_window(expenses, window, today) {
        buckets
            .entry(bucket.key(date))
            .or_default()
            .add(expense.amount, date);
    }
    buckets
}

pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Mean of the per-bucket totals inside the trailing window.
///
/// Each bucket with activity counts once however many expenses it holds; buckets without
/// activity are not counted. An empty window yields 0.
pub fn rolling_average(
    expenses: &[Expense],
    window: Window,
    bucket: Bucket,
    today: NaiveDate,
) -> f64 {
    let buckets = group_by_bucket(expenses, window, bucket, today);
    if buckets.is_empty() {
        return 0.0;
    }
    let sum: f64 = buckets.values().map(|b| b.total).sum();
    sum / buckets.len() as f64
}

fn rank_descending(summaries: &mut [ExpenseSummary]) {
    // Stable: equal totals keep their incoming order.
    summaries.sort_by(|a, b| b.total.total_cmp(&a.total));
}

fn accumulate<'a>(
    summaries: &mut Vec<ExpenseSummary>,
    index: &mut HashMap<String, usize>,
    expenses: impl IntoIterator<Item = &'a Expense>,
) {
    for expense in expenses {
        match index.get(&expense.category) {
            Some(&i) => summaries[i].total += expense.amount,
            None => {
                index.insert(expense.category.clone(), summaries.len());
                summaries.push(ExpenseSummary {
                    category: expense.category.clone(),
                    total: expense.amount,
                });
            }
        }
    }
}

/// Totals for categories that have at least one expense, highest first.
///
/// Ties keep the order in which the categories first appear in `expenses`.
pub fn category_breakdown(expenses: &[Expense]) -> Vec<ExpenseSummary> {
    let mut summaries = Vec::new();
    let mut index = HashMap::new();
    accumulate(&mut summaries, &mut index, expenses);
    rank_descending(&mut summaries);
    summaries
}

/// Totals for every defined category, zero-spend ones included, highest first.
///
/// Ties keep the order of `categories`. Expenses filed under a name missing from `categories`
/// are still reported so the totals always add up to the ledger total.
pub fn category_summary(categories: &[Category], expenses: &[Expense]) -> Vec<ExpenseSummary> {
    let mut summaries = Vec::with_capacity(categories.len());
    let mut index = HashMap::with_capacity(categories.len());
    for category in categories {
        if index.contains_key(&category.name) {
            continue;
        }
        index.insert(category.name.clone(), summaries.len());
        summaries.push(ExpenseSummary {
            category: category.name.clone(),
            total: 0.0,
        });
    }

    accumulate(&mut summaries, &mut index, expenses);
    rank_descending(&mut summaries);
    summaries
}

/// The first `limit` entries of an already-ranked breakdown.
pub fn top_categories(breakdown: &[ExpenseSummary], limit: usize) -> Vec<ExpenseSummary> {
    breakdown.iter().take(limit).cloned().collect()
}

/// Buckets of a series, most recent first. Buckets whose amounts cancel out to 0 are dropped
/// along with those that have no expenses.
fn series_buckets(
    expenses: &[Expense],
    window: Window,
    bucket: Bucket,
    today: NaiveDate,
) -> impl Iterator<Item = (String, BucketTotal)> {
    group_by_bucket(expenses, window, bucket, today)
        .into_iter()
        .rev()
        .filter(|(_, bucket)| bucket.total != 0.0)
}

/// Monthly totals inside the window, most recent month first.
///
/// Month keys are built from already-parsed dates, so `month_name` always resolves here;
/// records with a malformed date never reach a bucket.
pub fn monthly_series(expenses: &[Expense], window: Window, today: NaiveDate) -> Vec<MonthlyExpense> {
    series_buckets(expenses, window, Bucket::Month, today)
        .map(|(month, bucket)| MonthlyExpense {
            month_name: date_utils::month_name(&month).unwrap_or_default(),
            month,
            total: bucket.total,
            count: bucket.count,
        })
        .collect()
}

/// Weekly totals inside the window, most recent week first.
pub fn weekly_series(expenses: &[Expense], window: Window, today: NaiveDate) -> Vec<WeeklyExpense> {
    series_buckets(expenses, window, Bucket::Week, today)
        .map(|(week, bucket)| {
            let week_range = bucket
                .latest
                .map(|date| {
                    let (start, end) = date_utils::week_bounds(date);
                    date_utils::format_week_range(&start.to_string(), &end.to_string())
                })
                .unwrap_or_default();
            WeeklyExpense {
                week,
                week_range,
                total: bucket.total,
                count: bucket.count,
            }
        })
        .collect()
}

/// Daily totals inside the window, most recent day first.
pub fn daily_series(expenses: &[Expense], window: Window, today: NaiveDate) -> Vec<DailyExpense> {
    series_buckets(expenses, window, Bucket::Day, today)
        .map(|(date, bucket)| DailyExpense {
            date,
            total: bucket.total,
            count: bucket.count,
        })
        .collect()
}

/// Per-category monthly totals inside the window, ordered by month (newest first) and then by
/// total (highest first).
pub fn category_monthly_series(
    expenses: &[Expense],
    window: Window,
    today: NaiveDate,
) -> Vec<CategoryMonthlyExpense> {
    let mut buckets: BTreeMap<(String, String), BucketTotal> = BTreeMap::new();
    for (date, expense) in dated_in_window(expenses, window, today) {
        buckets
            .entry((date_utils::month_key(date), expense.category.clone()))
            .or_default()
            .add(expense.amount, date);
    }

    let mut series: Vec<CategoryMonthlyExpense> = buckets
        .into_iter()
        .filter(|(_, bucket)| bucket.total != 0.0)
        .map(|((month, category), bucket)| CategoryMonthlyExpense {
            category,
            month,
            total: bucket.total,
            count: bucket.count,
        })
        .collect();
    series.sort_by(|a, b| {
        b.month
            .cmp(&a.month)
            .then_with(|| b.total.total_cmp(&a.total))
    });
    series
}
