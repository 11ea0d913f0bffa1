//! The ledger: every transaction in insertion order
//!
//! A `Ledger` is an owned snapshot. Operations take one and hand back the
//! updated one; nothing holds it globally.
//!
//! Ids are a function of row content and order (see [`TransactionId`]).
//! After every mutation they are re-derived, so an in-memory ledger always
//! carries the ids a fresh load of its saved file would produce.

use std::collections::HashSet;

use super::ids::TransactionId;
use super::transaction::{Transaction, TransactionInput};

/// Ordered collection of transactions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from rows in file order
    pub fn from_inputs(rows: impl IntoIterator<Item = TransactionInput>) -> Self {
        let mut ledger = Self::new();
        for row in rows {
            ledger.push(row);
        }
        ledger
    }

    /// Append a row, returning the id it was given
    pub fn push(&mut self, input: TransactionInput) -> TransactionId {
        let id = TransactionId::derive_unique(&input, |id| self.get(id).is_some());
        self.transactions.push(Transaction::from_input(id, input));
        id
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Position of the row with `id`
    pub fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| t.id == id)
    }

    /// Overwrite the row with `id` in place, returning its new id
    pub fn replace(&mut self, id: TransactionId, input: TransactionInput) -> Option<TransactionId> {
        let index = self.position(id)?;
        self.transactions[index].apply(input);
        self.rederive_ids();
        Some(self.transactions[index].id)
    }

    /// Remove the row with `id`, closing the gap
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.position(id)?;
        let removed = self.transactions.remove(index);
        self.rederive_ids();
        Some(removed)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    // Only salted duplicates can move; every other row keeps its id.
    fn rederive_ids(&mut self) {
        let mut taken = HashSet::with_capacity(self.transactions.len());
        for txn in &mut self.transactions {
            let id = TransactionId::derive_unique(&txn.to_input(), |id| taken.contains(&id));
            taken.insert(id);
            txn.id = id;
        }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
