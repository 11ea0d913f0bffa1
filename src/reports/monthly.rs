//! Income vs. expense per calendar month
//!
//! Drives the grouped-bar comparison on the dashboard.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Money, Transaction, TransactionType};

/// Summed amounts keyed by (first day of month, type)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthlyComparison {
    amounts: BTreeMap<(NaiveDate, TransactionType), Money>,
}

/// One month of the comparison, both sides filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRow {
    pub month: NaiveDate,
    pub income: Money,
    pub expense: Money,
}

impl MonthlyComparison {
    pub fn get(&self, month: NaiveDate, kind: TransactionType) -> Option<Money> {
        self.amounts.get(&(month_start(month), kind)).copied()
    }

    /// Raw entries in (month, type) order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, TransactionType, Money)> + '_ {
        self.amounts.iter().map(|((m, k), a)| (*m, *k, *a))
    }

    /// One row per month present, with the missing side as zero
    pub fn rows(&self) -> Vec<MonthRow> {
        let mut rows: Vec<MonthRow> = Vec::new();
        for (month, kind, amount) in self.iter() {
            if rows.last().map(|r| r.month) != Some(month) {
                rows.push(MonthRow {
                    month,
                    income: Money::zero(),
                    expense: Money::zero(),
                });
            }
            if let Some(row) = rows.last_mut() {
                match kind {
                    TransactionType::Income => row.income = amount,
                    TransactionType::Expense => row.expense = amount,
                }
            }
        }
        rows
    }

    /// Largest single bar, for scaling charts
    pub fn max_amount(&self) -> Money {
        self.amounts.values().copied().max().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Bucket rows by month and sum per (month, type); undated rows are skipped
pub fn by_month<'a, I>(view: I) -> MonthlyComparison
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut amounts: BTreeMap<(NaiveDate, TransactionType), Money> = BTreeMap::new();
    for txn in view {
        if let Some(date) = txn.date {
            *amounts.entry((month_start(date), txn.kind)).or_default() += txn.amount;
        }
    }
    MonthlyComparison { amounts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Ledger, TransactionInput};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(d: Option<NaiveDate>, cents: i64, kind: TransactionType) -> TransactionInput {
        TransactionInput {
            date: d,
            description: String::new(),
            category: Category::Other,
            amount: Money::from_cents(cents),
            kind,
        }
    }

    #[test]
    fn test_buckets_by_month_and_type() {
        let ledger = Ledger::from_inputs(vec![
            row(Some(date(2024, 1, 5)), 200_000, TransactionType::Income),
            row(Some(date(2024, 1, 10)), 80_000, TransactionType::Expense),
            row(Some(date(2024, 1, 31)), 5_000, TransactionType::Expense),
            row(Some(date(2024, 2, 1)), 1_000, TransactionType::Expense),
            row(None, 7_777, TransactionType::Expense),
        ]);

        let monthly = by_month(&ledger);

        assert_eq!(monthly.len(), 3);
        assert_eq!(
            monthly.get(date(2024, 1, 1), TransactionType::Income),
            Some(Money::from_cents(200_000))
        );
        assert_eq!(
            monthly.get(date(2024, 1, 20), TransactionType::Expense),
            Some(Money::from_cents(85_000))
        );
        assert_eq!(
            monthly.get(date(2024, 2, 1), TransactionType::Expense),
            Some(Money::from_cents(1_000))
        );
        assert_eq!(monthly.get(date(2024, 2, 1), TransactionType::Income), None);
        assert_eq!(monthly.max_amount(), Money::from_cents(200_000));
    }

    #[test]
    fn test_rows_fill_missing_side() {
        let ledger = Ledger::from_inputs(vec![
            row(Some(date(2024, 2, 3)), 1_000, TransactionType::Expense),
            row(Some(date(2023, 12, 24)), 3_000, TransactionType::Income),
        ]);

        let rows = by_month(&ledger).rows();

        assert_eq!(
            rows,
            vec![
                MonthRow {
                    month: date(2023, 12, 1),
                    income: Money::from_cents(3_000),
                    expense: Money::zero(),
                },
                MonthRow {
                    month: date(2024, 2, 1),
                    income: Money::zero(),
                    expense: Money::from_cents(1_000),
                },
            ]
        );
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(date(2024, 2, 29)), date(2024, 2, 1));
        assert_eq!(month_start(date(2024, 3, 1)), date(2024, 3, 1));
    }

    #[test]
    fn test_empty() {
        let monthly = by_month(&Ledger::new());
        assert!(monthly.is_empty());
        assert!(monthly.rows().is_empty());
        assert_eq!(monthly.max_amount(), Money::zero());
    }
}
