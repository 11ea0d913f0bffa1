//! Date-range views over the ledger

use chrono::{Datelike, NaiveDate};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Ledger, Transaction};

/// Inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range; `start` must not be after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> FinanceResult<Self> {
        if start > end {
            return Err(FinanceError::Validation(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// First day of `today`'s month through `today`
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self {
            start: today.with_day(1).unwrap_or(today),
            end: today,
        }
    }

    /// A range that admits every dated transaction
    pub fn all() -> Self {
        Self {
            start: NaiveDate::MIN,
            end: NaiveDate::MAX,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Rows with `start <= date <= end`, in ledger order
///
/// Rows without a date are never part of a view.
pub fn filter_by_range(ledger: &Ledger, start: NaiveDate, end: NaiveDate) -> Vec<&Transaction> {
    ledger.iter().filter(|t| t.in_range(start, end)).collect()
}

/// [`filter_by_range`] over a [`DateRange`]
pub fn filter_view(ledger: &Ledger, range: DateRange) -> Vec<&Transaction> {
    filter_by_range(ledger, range.start, range.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionInput, TransactionType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger() -> Ledger {
        let dated = |d: Option<NaiveDate>, description: &str| TransactionInput {
            date: d,
            description: description.to_string(),
            category: Category::Food,
            amount: Money::from_cents(100),
            kind: TransactionType::Expense,
        };
        Ledger::from_inputs(vec![
            dated(Some(date(2024, 1, 31)), "jan-31"),
            dated(Some(date(2024, 2, 1)), "feb-1"),
            dated(None, "undated"),
            dated(Some(date(2024, 2, 29)), "feb-29"),
            dated(Some(date(2024, 3, 1)), "mar-1"),
        ])
    }

    fn names(view: &[&Transaction]) -> Vec<String> {
        view.iter().map(|t| t.description.clone()).collect()
    }

    #[test]
    fn test_inclusive_bounds() {
        let ledger = ledger();
        let view = filter_by_range(&ledger, date(2024, 2, 1), date(2024, 2, 29));
        assert_eq!(names(&view), vec!["feb-1", "feb-29"]);
    }

    #[test]
    fn test_undated_rows_always_excluded() {
        let ledger = ledger();
        let view = filter_view(&ledger, DateRange::all());
        assert_eq!(view.len(), 4);
        assert!(view.iter().all(|t| t.date.is_some()));
    }

    #[test]
    fn test_empty_range() {
        let ledger = ledger();
        assert!(filter_by_range(&ledger, date(2023, 1, 1), date(2023, 12, 31)).is_empty());
        // Reversed bounds select nothing
        assert!(filter_by_range(&ledger, date(2024, 3, 1), date(2024, 1, 1)).is_empty());
    }

    #[test]
    fn test_view_keeps_ids() {
        let ledger = ledger();
        let view = filter_by_range(&ledger, date(2024, 2, 1), date(2024, 3, 1));
        let ids: Vec<_> = view.iter().map(|t| t.id).collect();
        let all = ledger.transactions();
        assert_eq!(ids, vec![all[1].id, all[3].id, all[4].id]);
    }

    #[test]
    fn test_month_to_date() {
        let range = DateRange::month_to_date(date(2024, 5, 17));
        assert_eq!(range.start, date(2024, 5, 1));
        assert_eq!(range.end, date(2024, 5, 17));
        assert!(range.contains(date(2024, 5, 1)));
        assert!(!range.contains(date(2024, 5, 18)));
    }

    #[test]
    fn test_new_rejects_reversed() {
        assert!(DateRange::new(date(2024, 2, 1), date(2024, 1, 1)).is_err());
        assert!(DateRange::new(date(2024, 1, 1), date(2024, 1, 1)).is_ok());
    }
}
