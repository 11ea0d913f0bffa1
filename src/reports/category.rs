//! Expense breakdown by category
//!
//! Drives the proportional (pie-style) chart on the dashboard.

use std::collections::BTreeMap;

use crate::models::{Category, Money, Transaction};

/// Summed expense per category
///
/// Only categories with at least one expense row appear.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryBreakdown {
    amounts: BTreeMap<Category, Money>,
}

impl CategoryBreakdown {
    pub fn get(&self, category: Category) -> Option<Money> {
        self.amounts.get(&category).copied()
    }

    /// Entries in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.amounts.iter().map(|(c, m)| (*c, *m))
    }

    /// Entries sorted by amount, largest first
    pub fn sorted_by_amount(&self) -> Vec<(Category, Money)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }

    /// Sum of every category
    pub fn total(&self) -> Money {
        self.amounts.values().sum()
    }

    /// Percentage of the total taken by `category`
    pub fn share(&self, category: Category) -> f64 {
        let total = self.total();
        match self.get(category) {
            Some(amount) if !total.is_zero() => amount.as_f64() / total.as_f64() * 100.0,
            _ => 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

/// Sum expense amounts per category
pub fn by_category<'a, I>(view: I) -> CategoryBreakdown
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut amounts: BTreeMap<Category, Money> = BTreeMap::new();
    for txn in view.into_iter().filter(|t| t.is_expense()) {
        *amounts.entry(txn.category).or_default() += txn.amount;
    }
    // A category whose rows cancel out is still "zero summed expense"
    amounts.retain(|_, amount| !amount.is_zero());

    CategoryBreakdown { amounts }
}
