//! Application state
//!
//! `Tracker` owns every component of one run: credentials, categories,
//! ledger, budgets and the audit trail. All writes go through it so that
//! each successful change is audited exactly once.

use crate::audit::{AuditEntry, AuditTrail, EntityType};
use crate::config::Settings;
use crate::error::TrackerResult;
use crate::models::{Money, Transaction, TransactionId, TransactionType};
use crate::reports::SpendingReport;
use crate::services::{BudgetTable, CategoryRegistry, CredentialStore, Ledger, TransactionEdit};

/// The complete in-memory state of the expense tracker
#[derive(Debug)]
pub struct Tracker {
    settings: Settings,
    credentials: CredentialStore,
    categories: CategoryRegistry,
    ledger: Ledger,
    budgets: BudgetTable,
    audit: AuditTrail,
}

impl Tracker {
    /// Build the startup state described by `settings`: seeded
    /// credentials and default categories, an empty ledger and no budgets
    pub fn new(settings: Settings) -> Self {
        let mut credentials = CredentialStore::new();
        for user in &settings.seed_users {
            credentials.add_user(user.login_id.clone(), user.password.clone());
        }

        let categories = CategoryRegistry::with_defaults(settings.default_categories.iter().cloned());

        Self {
            settings,
            credentials,
            categories,
            ledger: Ledger::new(),
            budgets: BudgetTable::new(),
            audit: AuditTrail::new(),
        }
    }

    /// Replace the audit trail (e.g. with one that writes to disk)
    pub fn with_audit_trail(mut self, audit: AuditTrail) -> Self {
        self.audit = audit;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn budgets(&self) -> &BudgetTable {
        &self.budgets
    }

    /// Check a login id / password pair against the credential store
    pub fn authenticate(&self, login_id: &str, password: &str) -> bool {
        self.credentials.authenticate(login_id, password)
    }

    /// Record a new transaction against a registered category
    pub fn add_transaction(
        &mut self,
        amount: Money,
        kind: TransactionType,
        category: &str,
    ) -> TrackerResult<Transaction> {
        let txn = self.ledger.add(&self.categories, amount, kind, category)?;
        self.record(AuditEntry::create(
            EntityType::Transaction,
            txn.id.to_string(),
            &txn,
        ));
        Ok(txn)
    }

    /// Edit a transaction in place
    ///
    /// If the edit fails after some fields were applied, the partial change
    /// is still audited.
    pub fn edit_transaction(
        &mut self,
        id: TransactionId,
        edit: &TransactionEdit,
    ) -> TrackerResult<Transaction> {
        let before = self.ledger.find_by_id(id)?.clone();
        let result = self.ledger.edit(&self.categories, id, edit);

        let changed = self
            .ledger
            .find_by_id(id)
            .ok()
            .filter(|after| **after != before)
            .cloned();
        if let Some(after) = changed {
            self.record(AuditEntry::update(
                EntityType::Transaction,
                id.to_string(),
                &before,
                &after,
            ));
        }

        result
    }

    /// Delete a transaction, reporting whether it existed
    pub fn delete_transaction(&mut self, id: TransactionId) -> bool {
        let Some(txn) = self.ledger.find_by_id(id).ok().cloned() else {
            return false;
        };
        self.ledger.remove(id);
        self.record(AuditEntry::delete(EntityType::Transaction, id.to_string(), &txn));
        true
    }

    /// Add a category if it is not already registered
    pub fn add_category(&mut self, name: &str) -> TrackerResult<bool> {
        let inserted = self.categories.add(name)?;
        if inserted {
            self.record(AuditEntry::create(EntityType::Category, name, &name));
        }
        Ok(inserted)
    }

    /// Set (or overwrite) the budget for a registered category
    pub fn set_budget(&mut self, category: &str, amount: Money) -> TrackerResult<()> {
        let entry = match self.budgets.set(&self.categories, category, amount)? {
            Some(previous) => AuditEntry::update(EntityType::Budget, category, &previous, &amount),
            None => AuditEntry::create(EntityType::Budget, category, &amount),
        };
        self.record(entry);
        Ok(())
    }

    /// Per-category spending paired with budgets, in registry order
    pub fn spending_report(&self) -> TrackerResult<SpendingReport> {
        SpendingReport::generate(&self.categories, &self.ledger, &self.budgets)
    }

    fn record(&self, entry: AuditEntry) {
        if let Err(e) = self.audit.record(&entry) {
            tracing::warn!(error = %e, "failed to write audit entry");
        }
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
