//! Reports module for fintrack
//!
//! Pure functions over a ledger snapshot: date-range views, totals, expense
//! breakdown by category, and the monthly income/expense comparison.

pub mod category;
pub mod filter;
pub mod monthly;
pub mod totals;

pub use category::{by_category, CategoryBreakdown};
pub use filter::{filter_by_range, filter_view, DateRange};
pub use monthly::{by_month, month_start, MonthRow, MonthlyComparison};
pub use totals::{totals, Totals};

use crate::models::{Ledger, Transaction};

/// Everything the dashboard shows for one date range
#[derive(Debug, Clone)]
pub struct DashboardReport<'a> {
    pub range: DateRange,
    /// The filtered view, in ledger order
    pub view: Vec<&'a Transaction>,
    pub totals: Totals,
    pub by_category: CategoryBreakdown,
    pub by_month: MonthlyComparison,
}

impl<'a> DashboardReport<'a> {
    /// Filter `ledger` to `range` and compute every aggregate over the view
    pub fn generate(ledger: &'a Ledger, range: DateRange) -> Self {
        let view = filter_view(ledger, range);
        let totals = totals(view.iter().copied());
        let by_category = by_category(view.iter().copied());
        let by_month = by_month(view.iter().copied());

        Self {
            range,
            view,
            totals,
            by_category,
            by_month,
        }
    }
}
