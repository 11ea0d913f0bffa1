//! Transaction model
//!
//! One row of the ledger: a dated income or expense with a category and a
//! positive amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, TransactionType};
use super::ids::TransactionId;
use super::money::Money;

/// The user-supplied fields of a transaction
///
/// This is what the add/edit form produces and what an import row parses to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// `None` when the source date could not be parsed
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub amount: Money,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl TransactionInput {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        category: Category,
        amount: Money,
        kind: TransactionType,
    ) -> Self {
        Self {
            date: Some(date),
            description: description.into(),
            category,
            amount,
            kind,
        }
    }
}

/// A financial transaction stored in the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Stable identifier, assigned when the row entered the ledger
    pub id: TransactionId,

    /// Transaction date, `None` if the stored value was unparseable
    pub date: Option<NaiveDate>,

    /// Free-text label
    #[serde(default)]
    pub description: String,

    pub category: Category,

    /// Magnitude of the transaction; direction comes from `kind`
    pub amount: Money,

    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    /// Create a transaction from form input under the given id
    pub fn from_input(id: TransactionId, input: TransactionInput) -> Self {
        Self {
            id,
            date: input.date,
            description: input.description,
            category: input.category,
            amount: input.amount,
            kind: input.kind,
        }
    }

    /// Overwrite every user-facing field, keeping the id
    pub fn apply(&mut self, input: TransactionInput) {
        self.date = input.date;
        self.description = input.description;
        self.category = input.category;
        self.amount = input.amount;
        self.kind = input.kind;
    }

    /// The user-facing fields of this transaction
    pub fn to_input(&self) -> TransactionInput {
        TransactionInput {
            date: self.date,
            description: self.description.clone(),
            category: self.category,
            amount: self.amount,
            kind: self.kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    /// Amount with the sign of its direction (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Whether the date falls inside `start..=end`; undated rows never do
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.date.is_some_and(|d| d >= start && d <= end)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "????-??-??".to_string());
        write!(
            f,
            "#{} {} {} [{}] {}",
            self.id,
            date,
            self.description,
            self.category,
            self.signed_amount()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rent_id() -> TransactionId {
        "0000002a".parse().unwrap()
    }

    fn rent() -> Transaction {
        Transaction::from_input(
            rent_id(),
            TransactionInput::new(
                date(2024, 1, 10),
                "Rent",
                Category::Housing,
                Money::from_cents(80_000),
                TransactionType::Expense,
            ),
        )
    }

    #[test]
    fn test_from_input() {
        let txn = rent();
        assert_eq!(txn.id, rent_id());
        assert_eq!(txn.date, Some(date(2024, 1, 10)));
        assert_eq!(txn.description, "Rent");
        assert_eq!(txn.category, Category::Housing);
        assert_eq!(txn.amount, Money::from_cents(80_000));
        assert!(txn.is_expense());
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut txn = rent();
        txn.apply(TransactionInput::new(
            date(2024, 2, 1),
            "Bus pass",
            Category::Transport,
            Money::from_cents(4_500),
            TransactionType::Expense,
        ));

        assert_eq!(txn.id, rent_id());
        assert_eq!(txn.description, "Bus pass");
        assert_eq!(txn.category, Category::Transport);
        assert_eq!(txn.to_input().amount, Money::from_cents(4_500));
    }

    #[test]
    fn test_signed_amount() {
        let mut txn = rent();
        assert_eq!(txn.signed_amount(), Money::from_cents(-80_000));
        txn.kind = TransactionType::Income;
        assert_eq!(txn.signed_amount(), Money::from_cents(80_000));
    }

    #[test]
    fn test_in_range() {
        let mut txn = rent();
        assert!(txn.in_range(date(2024, 1, 10), date(2024, 1, 10)));
        assert!(txn.in_range(date(2024, 1, 1), date(2024, 1, 31)));
        assert!(!txn.in_range(date(2024, 1, 11), date(2024, 1, 31)));

        txn.date = None;
        assert!(!txn.in_range(date(2000, 1, 1), date(2100, 1, 1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(rent().to_string(), "#2 2024-01-10 Rent [Housing] -800.00");
    }

    #[test]
    fn test_serialization() {
        let txn = rent();
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"type\":\"Expense\""));

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
