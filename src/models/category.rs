//! Spending categories and transaction types
//!
//! Both are closed sets: a value outside them is rejected when a ledger or
//! import file is parsed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category a transaction is filed under
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Category {
    Food,
    Housing,
    Leisure,
    Transport,
    #[default]
    Other,
}

impl Category {
    /// All categories, in display order
    pub fn all() -> &'static [Category] {
        &[
            Category::Food,
            Category::Housing,
            Category::Leisure,
            Category::Transport,
            Category::Other,
        ]
    }

    /// Canonical name as written to the ledger file
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Housing => "Housing",
            Self::Leisure => "Leisure",
            Self::Transport => "Transport",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownValue {
                kind: "category",
                value: s.to_string(),
            })
    }
}

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn all() -> &'static [TransactionType] {
        &[TransactionType::Income, TransactionType::Expense]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransactionType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        TransactionType::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownValue {
                kind: "transaction type",
                value: s.to_string(),
            })
    }
}

/// A value that is not part of a closed enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownValue {}
