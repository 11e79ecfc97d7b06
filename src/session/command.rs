//! Menu commands
//!
//! Menu input is parsed into these enums once, and dispatch matches on the
//! enum rather than on raw strings.

use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Top-level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ViewTransactions,
    AddTransaction,
    EditDeleteTransaction,
    Categories,
    Budgets,
    TrackSpending,
    Exit,
}

/// The main menu in display order: (key, label, command)
pub const MENU: [(&str, &str, MenuCommand); 7] = [
    ("1", "View Transactions", MenuCommand::ViewTransactions),
    ("2", "Add Transaction", MenuCommand::AddTransaction),
    ("3", "Edit/Delete Transaction", MenuCommand::EditDeleteTransaction),
    ("4", "View/Add Categories", MenuCommand::Categories),
    ("5", "Enter/View Budgets", MenuCommand::Budgets),
    ("6", "Track Spending", MenuCommand::TrackSpending),
    ("7", "Exit", MenuCommand::Exit),
];

impl MenuCommand {
    /// Label shown in the menu
    pub fn label(&self) -> &'static str {
        MENU.iter()
            .find(|(_, _, cmd)| cmd == self)
            .map(|(_, label, _)| *label)
            .unwrap_or_default()
    }
}

impl FromStr for MenuCommand {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        MENU.iter()
            .find(|(k, _, _)| *k == key)
            .map(|(_, _, cmd)| *cmd)
            .ok_or_else(|| TrackerError::InvalidChoice(key.to_string()))
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Entries of the budgets sub-menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetCommand {
    Enter,
    View,
}

impl FromStr for BudgetCommand {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Enter),
            "2" => Ok(Self::View),
            other => Err(TrackerError::InvalidChoice(other.to_string())),
        }
    }
}

/// What to do with a selected transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionAction {
    Edit,
    Delete,
}

impl FromStr for TransactionAction {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "E" => Ok(Self::Edit),
            "D" => Ok(Self::Delete),
            _ => Err(TrackerError::InvalidChoice(s.trim().to_string())),
        }
    }
}
