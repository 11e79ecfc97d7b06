//! Transaction ledger
//!
//! Owns every recorded transaction in insertion order and hands out
//! sequential ids starting at 1. Ids are never reused, even after a delete.
//! Writes that reference a category are checked against the category
//! registry at the moment they happen.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction, TransactionId, TransactionType};
use crate::services::CategoryRegistry;

/// Requested changes to a transaction, as raw user input
///
/// `None` (or blank text) keeps the current value. Fields are applied in
/// the order amount, type, category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionEdit {
    pub amount: Option<String>,
    pub kind: Option<String>,
    pub category: Option<String>,
}

impl TransactionEdit {
    /// Build an edit from three prompt answers, treating blank answers as
    /// "keep current"
    pub fn from_inputs(amount: &str, kind: &str, category: &str) -> Self {
        fn keep_if_blank(input: &str) -> Option<String> {
            if input.trim().is_empty() {
                None
            } else {
                Some(input.to_string())
            }
        }

        Self {
            amount: keep_if_blank(amount),
            kind: keep_if_blank(kind),
            category: keep_if_blank(category),
        }
    }
}

/// Ordered collection of transactions
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new transaction
    ///
    /// Fails with `InvalidCategory` (and records nothing) if `category` is
    /// not registered.
    pub fn add(
        &mut self,
        registry: &CategoryRegistry,
        amount: Money,
        kind: TransactionType,
        category: &str,
    ) -> TrackerResult<Transaction> {
        registry.require(category)?;

        let id = self.next_id;
        self.next_id = id.next();

        let txn = Transaction::new(id, amount, kind, category);
        tracing::debug!(transaction = %txn, "added transaction");
        self.transactions.push(txn.clone());
        Ok(txn)
    }

    /// All transactions in insertion order
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Look up a transaction by id
    pub fn find_by_id(&self, id: TransactionId) -> TrackerResult<&Transaction> {
        self.transactions
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TrackerError::transaction_not_found(id))
    }

    /// Apply `edit` to the stored transaction in place
    ///
    /// An unparseable amount fails with `InvalidAmount` before anything is
    /// applied. An unregistered category fails with `InvalidCategory`, but
    /// the amount and type from the same edit have already been applied by
    /// then and stay applied.
    pub fn edit(
        &mut self,
        registry: &CategoryRegistry,
        id: TransactionId,
        edit: &TransactionEdit,
    ) -> TrackerResult<Transaction> {
        let txn = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TrackerError::transaction_not_found(id))?;

        if let Some(input) = edit.amount.as_deref().filter(|s| !s.trim().is_empty()) {
            txn.amount =
                Money::parse(input).map_err(|_| TrackerError::InvalidAmount(input.to_string()))?;
        }

        if let Some(input) = edit.kind.as_deref().filter(|s| !s.trim().is_empty()) {
            txn.kind = TransactionType::from_input(input);
        }

        // TODO: validate the category before touching amount/type once the
        // partial-apply behaviour is signed off as a bug
        if let Some(name) = edit.category.as_deref().filter(|s| !s.trim().is_empty()) {
            registry.require(name)?;
            txn.category = name.to_string();
        }

        tracing::debug!(transaction = %txn, "edited transaction");
        Ok(txn.clone())
    }

    /// Delete the transaction with the given id, reporting whether one existed
    pub fn remove(&mut self, id: TransactionId) -> bool {
        let Some(index) = self.transactions.iter().position(|t| t.id == id) else {
            return false;
        };
        self.transactions.remove(index);
        tracing::debug!(id = %id, "removed transaction");
        true
    }

    /// Transactions recorded against `category`
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Transaction> {
        self.transactions.iter().filter(move |t| t.category == category)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CategoryRegistry {
        CategoryRegistry::with_defaults(["Food", "Utilities", "Transport"])
    }

    fn ledger_with_food() -> (Ledger, CategoryRegistry) {
        let registry = registry();
        let mut ledger = Ledger::new();
        ledger
            .add(&registry, Money::from_cents(5000), TransactionType::Expense, "Food")
            .unwrap();
        (ledger, registry)
    }

    #[test]
    fn test_ids_increase_from_one() {
        let registry = registry();
        let mut ledger = Ledger::new();
        for _ in 0..4 {
            ledger
                .add(&registry, Money::from_cents(100), TransactionType::Income, "Utilities")
                .unwrap();
        }

        let ids: Vec<u32> = ledger.list().iter().map(|t| t.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn test_failed_add_records_nothing() {
        let registry = registry();
        let mut ledger = Ledger::new();
        let err = ledger
            .add(&registry, Money::from_cents(100), TransactionType::Expense, "Travel")
            .unwrap_err();

        assert!(matches!(err, TrackerError::InvalidCategory(_)));
        assert!(ledger.is_empty());

        // the failed add does not consume an id
        let txn = ledger
            .add(&registry, Money::from_cents(100), TransactionType::Expense, "Food")
            .unwrap();
        assert_eq!(txn.id, TransactionId::new(1));
    }

    #[test]
    fn test_find_by_id() {
        let (ledger, _) = ledger_with_food();
        let txn = ledger.find_by_id(TransactionId::new(1)).unwrap();
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.amount, Money::from_cents(5000));
        assert_eq!(txn.kind, TransactionType::Expense);

        assert!(ledger.find_by_id(TransactionId::new(2)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_edit_all_fields() {
        let (mut ledger, registry) = ledger_with_food();
        let edit = TransactionEdit::from_inputs("75.25", "income", "Transport");

        let txn = ledger.edit(&registry, TransactionId::FIRST, &edit).unwrap();
        assert_eq!(txn.amount, Money::from_cents(7525));
        assert_eq!(txn.kind, TransactionType::Income);
        assert_eq!(txn.category, "Transport");
        assert_eq!(ledger.find_by_id(TransactionId::FIRST).unwrap(), &txn);
    }

    #[test]
    fn test_blank_fields_keep_current() {
        let (mut ledger, registry) = ledger_with_food();
        let edit = TransactionEdit::from_inputs("", "  ", "");
        assert_eq!(edit, TransactionEdit::default());

        let txn = ledger.edit(&registry, TransactionId::FIRST, &edit).unwrap();
        assert_eq!(txn.amount, Money::from_cents(5000));
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(txn.category, "Food");
    }

    #[test]
    fn test_invalid_amount_abandons_whole_edit() {
        let (mut ledger, registry) = ledger_with_food();
        let edit = TransactionEdit::from_inputs("twelve", "Income", "Transport");

        let err = ledger.edit(&registry, TransactionId::FIRST, &edit).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidAmount(ref s) if s == "twelve"));

        let txn = ledger.find_by_id(TransactionId::FIRST).unwrap();
        assert_eq!(txn.amount, Money::from_cents(5000));
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(txn.category, "Food");
    }

    #[test]
    fn test_invalid_category_keeps_category() {
        let (mut ledger, registry) = ledger_with_food();
        let edit = TransactionEdit::from_inputs("", "", "Nonexistent");

        let err = ledger.edit(&registry, TransactionId::FIRST, &edit).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidCategory(_)));
        assert_eq!(ledger.find_by_id(TransactionId::FIRST).unwrap().category, "Food");
    }

    #[test]
    fn test_invalid_category_after_amount_leaves_amount_applied() {
        let (mut ledger, registry) = ledger_with_food();
        let edit = TransactionEdit::from_inputs("10", "Income", "Nonexistent");

        assert!(ledger.edit(&registry, TransactionId::FIRST, &edit).is_err());

        let txn = ledger.find_by_id(TransactionId::FIRST).unwrap();
        assert_eq!(txn.amount, Money::from_cents(1000));
        assert_eq!(txn.kind, TransactionType::Income);
        assert_eq!(txn.category, "Food");
    }

    #[test]
    fn test_edit_missing_id() {
        let (mut ledger, registry) = ledger_with_food();
        let err = ledger
            .edit(&registry, TransactionId::new(9), &TransactionEdit::from_inputs("1", "", ""))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove() {
        let (mut ledger, _) = ledger_with_food();
        assert!(!ledger.remove(TransactionId::new(99)));
        assert_eq!(ledger.len(), 1);

        assert!(ledger.remove(TransactionId::FIRST));
        assert!(ledger.is_empty());
        assert!(!ledger.remove(TransactionId::FIRST));
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let (mut ledger, registry) = ledger_with_food();
        ledger.remove(TransactionId::FIRST);

        let txn = ledger
            .add(&registry, Money::from_cents(1), TransactionType::Expense, "Food")
            .unwrap();
        assert_eq!(txn.id, TransactionId::new(2));
    }

    #[test]
    fn test_in_category() {
        let (mut ledger, registry) = ledger_with_food();
        ledger
            .add(&registry, Money::from_cents(10), TransactionType::Income, "Transport")
            .unwrap();
        ledger
            .add(&registry, Money::from_cents(20), TransactionType::Income, "Food")
            .unwrap();

        assert_eq!(ledger.in_category("Food").count(), 2);
        assert_eq!(ledger.in_category("Utilities").count(), 0);
    }
}
