//! Transaction service
//!
//! Add, edit, delete and import-merge against an explicit ledger snapshot.
//! Every mutation is flushed to storage before the updated ledger is
//! returned.

use tracing::info;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Ledger, TransactionId, TransactionInput};
use crate::storage::Storage;

/// Service for transaction management
///
/// Field values are not validated here; the input form is responsible for
/// rejecting non-positive amounts.
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load the current ledger
    pub fn load(&self) -> FinanceResult<Ledger> {
        self.storage.ledger.load()
    }

    /// Append a transaction and persist
    pub fn add(&self, mut ledger: Ledger, input: TransactionInput) -> FinanceResult<Ledger> {
        let id = ledger.push(input);
        self.storage.ledger.save(&ledger)?;

        info!(%id, rows = ledger.len(), "transaction added");
        Ok(ledger)
    }

    /// Overwrite the transaction with `id` and persist
    pub fn edit(
        &self,
        mut ledger: Ledger,
        id: TransactionId,
        input: TransactionInput,
    ) -> FinanceResult<Ledger> {
        let new_id = ledger
            .replace(id, input)
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;
        self.storage.ledger.save(&ledger)?;

        info!(%id, %new_id, "transaction edited");
        Ok(ledger)
    }

    /// Remove the transaction with `id` and persist
    pub fn delete(&self, mut ledger: Ledger, id: TransactionId) -> FinanceResult<Ledger> {
        ledger
            .remove(id)
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;
        self.storage.ledger.save(&ledger)?;

        info!(%id, rows = ledger.len(), "transaction deleted");
        Ok(ledger)
    }

    /// Append every external row verbatim and persist
    ///
    /// No de-duplication: importing the same file twice doubles its rows.
    pub fn import_merge(
        &self,
        mut ledger: Ledger,
        external: Vec<TransactionInput>,
    ) -> FinanceResult<Ledger> {
        let count = external.len();
        for input in external {
            ledger.push(input);
        }
        self.storage.ledger.save(&ledger)?;

        info!(imported = count, rows = ledger.len(), "transactions imported");
        Ok(ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinancePaths;
    use crate::config::settings::Settings;
    use crate::models::{Category, Money, TransactionType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    fn reopen(temp_dir: &TempDir) -> Storage {
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        Storage::new(paths, &Settings::default()).unwrap()
    }

    fn unknown_id() -> TransactionId {
        "ffffffff".parse().unwrap()
    }

    fn input(day: u32, description: &str, cents: i64, kind: TransactionType) -> TransactionInput {
        TransactionInput::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            description,
            Category::Food,
            Money::from_cents(cents),
            kind,
        )
    }

    #[test]
    fn test_add_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let ledger = service.load().unwrap();
        let before = ledger.len();
        let new_row = input(5, "Groceries", 4_250, TransactionType::Expense);

        let ledger = service.add(ledger, new_row.clone()).unwrap();

        assert_eq!(ledger.len(), before + 1);
        let last = ledger.transactions().last().unwrap();
        assert_eq!(last.to_input(), new_row);

        // Persisted
        assert_eq!(reopen(&_temp_dir).ledger.load().unwrap().len(), 1);
    }

    #[test]
    fn test_add_does_not_validate() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let ledger = service
            .add(Ledger::new(), input(1, "odd", -100, TransactionType::Expense))
            .unwrap();
        assert_eq!(ledger.transactions()[0].amount, Money::from_cents(-100));
    }

    #[test]
    fn test_edit_transaction_by_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let mut ledger = Ledger::new();
        for day in 1..=3 {
            ledger = service
                .add(ledger, input(day, &format!("row {}", day), 100, TransactionType::Expense))
                .unwrap();
        }

        let target = ledger.transactions()[1].id;
        let replacement = input(20, "edited", 999, TransactionType::Income);
        let ledger = service.edit(ledger, target, replacement.clone()).unwrap();

        let descriptions: Vec<_> = ledger.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["row 1", "edited", "row 3"]);
        assert_eq!(ledger.transactions()[1].to_input(), replacement);
        assert_eq!(reopen(&_temp_dir).ledger.load().unwrap(), ledger);
    }

    #[test]
    fn test_edit_unknown_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let result = service.edit(
            Ledger::new(),
            unknown_id(),
            input(1, "x", 1, TransactionType::Expense),
        );
        assert!(matches!(result, Err(FinanceError::NotFound { .. })));
    }

    #[test]
    fn test_delete_then_reload() {
        let (temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let mut ledger = Ledger::new();
        for day in 1..=4 {
            ledger = service
                .add(ledger, input(day, &format!("row {}", day), 100 * day as i64, TransactionType::Expense))
                .unwrap();
        }
        let ids: Vec<_> = ledger.iter().map(|t| t.id).collect();
        let ledger = service.delete(ledger, ids[1]).unwrap();
        assert_eq!(ledger.len(), 3);

        // A separate session sees the remaining rows under their old ids
        let reloaded = reopen(&temp_dir).ledger.load().unwrap();
        let rows: Vec<_> = reloaded
            .iter()
            .map(|t| (t.id, t.description.as_str(), t.amount.cents()))
            .collect();
        assert_eq!(
            rows,
            vec![(ids[0], "row 1", 100), (ids[2], "row 3", 300), (ids[3], "row 4", 400)]
        );
    }

    #[test]
    fn test_ids_stable_across_sessions() {
        let (temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let mut ledger = Ledger::new();
        for (day, name) in [(1, "A"), (2, "B"), (3, "C")] {
            ledger = service
                .add(ledger, input(day, name, 100, TransactionType::Expense))
                .unwrap();
        }
        let ids: Vec<_> = ledger.iter().map(|t| t.id).collect();

        // Each delete runs against a freshly opened store, as separate commands do
        for id in [ids[0], ids[1]] {
            let session = reopen(&temp_dir);
            let service = TransactionService::new(&session);
            service.delete(service.load().unwrap(), id).unwrap();
        }

        let remaining = reopen(&temp_dir).ledger.load().unwrap();
        let names: Vec<_> = remaining.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["C"]);
        assert_eq!(remaining.transactions()[0].id, ids[2]);
    }

    #[test]
    fn test_delete_unknown_id_keeps_ledger() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let ledger = service
            .add(Ledger::new(), input(1, "a", 1, TransactionType::Expense))
            .unwrap();
        let result = service.delete(ledger, unknown_id());
        assert!(matches!(result, Err(FinanceError::NotFound { .. })));
        assert_eq!(service.load().unwrap().len(), 1);
    }

    #[test]
    fn test_import_merge_appends_verbatim() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let ledger = service
            .add(Ledger::new(), input(1, "existing", 100, TransactionType::Expense))
            .unwrap();
        let external = vec![
            input(1, "existing", 100, TransactionType::Expense),
            input(2, "bonus", 50_000, TransactionType::Income),
        ];

        let ledger = service.import_merge(ledger, external).unwrap();

        assert_eq!(ledger.len(), 3);
        // Duplicates are kept
        assert_eq!(
            ledger.iter().filter(|t| t.description == "existing").count(),
            2
        );
        let ids: std::collections::HashSet<_> = ledger.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(reopen(&_temp_dir).ledger.load().unwrap(), ledger);
    }
}
