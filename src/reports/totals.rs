//! Income, expense and balance over a view

use crate::models::{Money, Transaction, TransactionType};

/// Aggregate totals of a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    /// `income - expense`
    pub balance: Money,
}

/// Sum income and expense amounts; an empty view is all zero
pub fn totals<'a, I>(view: I) -> Totals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut income = Money::zero();
    let mut expense = Money::zero();

    for txn in view {
        match txn.kind {
            TransactionType::Income => income += txn.amount,
            TransactionType::Expense => expense += txn.amount,
        }
    }

    Totals {
        income,
        expense,
        balance: income - expense,
    }
}
