//! Interactive session controller
//!
//! Runs the login gate and the numbered menu loop over any reader/writer
//! pair. All domain work is delegated to [`Tracker`]; this module only
//! prompts, parses and reports.
//!
//! Recoverable errors (bad amounts, unknown categories, missing ids, bad
//! menu choices) are reported and the loop continues. End of input at any
//! prompt ends the session as if Exit had been chosen, abandoning whatever
//! flow was in progress. Only console I/O failures end a session with an
//! error.

pub mod command;
pub mod prompt;

pub use command::{BudgetCommand, MenuCommand, TransactionAction, MENU};
pub use prompt::Prompter;

use std::io::{BufRead, Write};

use crate::display;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, TransactionId, TransactionType};
use crate::services::TransactionEdit;
use crate::tracker::Tracker;

/// Where the session state machine currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    MenuIdle,
    Exited,
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user picked Exit from the menu
    Exited,
    /// The single login attempt failed
    LoginFailed,
    /// Input ran out before Exit was chosen
    InputClosed,
}

/// One interactive run against a tracker
pub struct Session<R, W> {
    tracker: Tracker,
    prompter: Prompter<R, W>,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(tracker: Tracker, input: R, output: W) -> Self {
        Self {
            tracker,
            prompter: Prompter::new(input, output),
            state: SessionState::LoggedOut,
        }
    }

    /// Read the password from the terminal without echo
    pub fn hide_password(mut self, hide: bool) -> Self {
        self.prompter = self.prompter.hide_secrets(hide);
        self
    }

    /// Split the session back into its tracker and output
    pub fn into_parts(self) -> (Tracker, W) {
        let (_, output) = self.prompter.into_inner();
        (self.tracker, output)
    }

    /// Log in, then serve menu commands until Exit or end of input
    ///
    /// A session runs once; calling `run` again fails with `Validation`.
    pub fn run(&mut self) -> TrackerResult<SessionOutcome> {
        if self.state != SessionState::LoggedOut {
            return Err(TrackerError::Validation("Session has already run".into()));
        }

        let result = self.login_then_serve();
        self.state = SessionState::Exited;

        let outcome = match result {
            Err(TrackerError::EndOfInput) => SessionOutcome::InputClosed,
            other => other?,
        };
        tracing::info!(?outcome, "session ended");
        Ok(outcome)
    }

    fn login_then_serve(&mut self) -> TrackerResult<SessionOutcome> {
        self.prompter
            .say("\nWelcome to Expense Tracker Application. Please login to continue:")?;

        match self.login() {
            Ok(()) => {}
            Err(TrackerError::AuthenticationFailed) => {
                self.prompter.say("Invalid login. Please try again.")?;
                return Ok(SessionOutcome::LoginFailed);
            }
            Err(e) => return Err(e),
        }

        self.prompter.say("Authentication Successful..!!")?;
        self.state = SessionState::MenuIdle;
        self.menu_loop()
    }

    fn login(&mut self) -> TrackerResult<()> {
        let login_id = self.prompter.ask("Enter email id: ")?;
        let password = self.prompter.ask_secret("Enter password: ")?;

        if self.tracker.authenticate(&login_id, &password) {
            tracing::info!(login_id = %login_id, "login succeeded");
            Ok(())
        } else {
            tracing::info!(login_id = %login_id, "login failed");
            Err(TrackerError::AuthenticationFailed)
        }
    }

    fn menu_loop(&mut self) -> TrackerResult<SessionOutcome> {
        loop {
            self.print_menu()?;
            let choice = self.prompter.ask("Select an option: ")?;

            let command = match choice.parse::<MenuCommand>() {
                Ok(command) => command,
                Err(e) => {
                    tracing::debug!(error = %e, "rejected menu input");
                    self.prompter
                        .say("Invalid choice. Please select a valid option.")?;
                    continue;
                }
            };

            tracing::debug!(command = %command, "dispatching");
            let result = match command {
                MenuCommand::ViewTransactions => self.view_transactions(),
                MenuCommand::AddTransaction => self.add_transaction(),
                MenuCommand::EditDeleteTransaction => self.edit_delete_transaction(),
                MenuCommand::Categories => self.view_add_categories(),
                MenuCommand::Budgets => self.budgets_menu(),
                MenuCommand::TrackSpending => self.track_spending(),
                MenuCommand::Exit => return Ok(SessionOutcome::Exited),
            };

            if let Err(e) = result {
                if !e.is_recoverable() {
                    return Err(e);
                }
                tracing::warn!(command = %command, error = %e, "command failed");
                self.prompter.say(e.to_string())?;
            }
        }
    }

    fn print_menu(&mut self) -> TrackerResult<()> {
        self.prompter.say("")?;
        for (key, label, _) in MENU.iter() {
            self.prompter.say(format!("{}. {}", key, label))?;
        }
        Ok(())
    }

    fn symbol(&self) -> &str {
        &self.tracker.settings().currency_symbol
    }

    fn view_transactions(&mut self) -> TrackerResult<()> {
        let text =
            display::format_transaction_list(self.tracker.ledger().list(), self.tracker.settings());
        self.prompter.print(&text)
    }

    fn add_transaction(&mut self) -> TrackerResult<()> {
        let amount_input = self.prompter.ask("Enter transaction amount: ")?;
        let amount = match Money::parse(&amount_input) {
            Ok(amount) => amount,
            Err(e) => {
                tracing::debug!(error = %e, "rejected transaction amount");
                return self.prompter.say("Invalid amount. Transaction not added.");
            }
        };

        let kind = self.prompter.ask("Enter transaction type (Income/Expense): ")?;
        let category = self.prompter.ask("Enter category: ")?;

        match self
            .tracker
            .add_transaction(amount, TransactionType::from_input(&kind), &category)
        {
            Ok(_) => self.prompter.say("Transaction added successfully."),
            Err(TrackerError::InvalidCategory(name)) => self.prompter.say(format!(
                "Category '{}' does not exist. Please add it under the 'View/Add Categories' menu.",
                name
            )),
            Err(e) => Err(e),
        }
    }

    fn edit_delete_transaction(&mut self) -> TrackerResult<()> {
        self.prompter.say("Enter transaction ID to edit/delete:")?;
        let id_input = self.prompter.ask("")?;

        let Ok(raw_id) = id_input.trim().parse::<i64>() else {
            return self.prompter.say("Invalid ID. Please enter a numeric value.");
        };

        // negative or oversized ids can never match
        let id = match u32::try_from(raw_id) {
            Ok(value) => TransactionId::new(value),
            Err(_) => return self.prompter.say("Transaction not found."),
        };
        if self.tracker.ledger().find_by_id(id).is_err() {
            return self.prompter.say("Transaction not found.");
        }

        self.prompter
            .say("Do you want to (E)dit or (D)elete this transaction? (E/D)")?;
        let action = self.prompter.ask("")?;

        match action.parse::<TransactionAction>() {
            Ok(TransactionAction::Edit) => self.edit_transaction(id),
            Ok(TransactionAction::Delete) => {
                self.tracker.delete_transaction(id);
                self.prompter.say("Transaction deleted.")
            }
            Err(_) => self.prompter.say("Invalid action."),
        }
    }

    fn edit_transaction(&mut self, id: TransactionId) -> TrackerResult<()> {
        let amount = self
            .prompter
            .ask("Enter new amount (leave blank to keep current): ")?;
        if !amount.trim().is_empty() && Money::parse(&amount).is_err() {
            return self.prompter.say("Invalid amount. Transaction not updated.");
        }

        let kind = self
            .prompter
            .ask("Enter new type (Income/Expense) or leave blank to keep current: ")?;
        let category = self
            .prompter
            .ask("Enter new category or leave blank to keep current: ")?;

        let edit = TransactionEdit::from_inputs(&amount, &kind, &category);
        match self.tracker.edit_transaction(id, &edit) {
            Ok(_) => self.prompter.say("Transaction updated successfully."),
            Err(TrackerError::InvalidAmount(_)) => {
                self.prompter.say("Invalid amount. Transaction not updated.")
            }
            Err(TrackerError::InvalidCategory(_)) => {
                self.prompter.say("Invalid category. Transaction not updated.")
            }
            Err(e) if e.is_not_found() => self.prompter.say("Transaction not found."),
            Err(e) => Err(e),
        }
    }

    fn view_add_categories(&mut self) -> TrackerResult<()> {
        let text = display::format_category_list(self.tracker.categories().list());
        self.prompter.print(&text)?;

        self.prompter.say("Do you want to add a new category? (Y/N)")?;
        let answer = self.prompter.ask("")?;
        if answer.trim().to_uppercase() != "Y" {
            return Ok(());
        }

        let name = self.prompter.ask("Enter new category name: ")?;
        let name = name.trim();
        match self.tracker.add_category(name) {
            Ok(true) => self.prompter.say(format!("{} added.", name)),
            Ok(false) => self.prompter.say("Category already exists."),
            Err(TrackerError::Validation(msg)) => self.prompter.say(format!("{}.", msg)),
            Err(e) => Err(e),
        }
    }

    fn budgets_menu(&mut self) -> TrackerResult<()> {
        self.prompter.say("1. Enter budget for a category")?;
        self.prompter.say("2. View budgets")?;
        let choice = self.prompter.ask("")?;

        match choice.parse::<BudgetCommand>() {
            Ok(BudgetCommand::Enter) => self.enter_budget(),
            Ok(BudgetCommand::View) => self.view_budgets(),
            Err(_) => self.prompter.say("Invalid choice."),
        }
    }

    fn enter_budget(&mut self) -> TrackerResult<()> {
        let category = self.prompter.ask("Enter category: ")?;
        let category = category.trim();
        if !self.tracker.categories().contains(category) {
            return self.prompter.say("Category does not exist.");
        }

        let amount_input = self.prompter.ask("Enter budget amount: ")?;
        let Ok(amount) = Money::parse(&amount_input) else {
            return self.prompter.say("Invalid amount. Budget not set.");
        };

        match self.tracker.set_budget(category, amount) {
            Ok(()) => {
                let message = format!(
                    "Budget of {} set for {}.",
                    amount.format_with_symbol(self.symbol()),
                    category
                );
                self.prompter.say(message)
            }
            Err(TrackerError::InvalidCategory(_)) => self.prompter.say("Category does not exist."),
            Err(e) => Err(e),
        }
    }

    fn view_budgets(&mut self) -> TrackerResult<()> {
        let text = display::format_budget_list(self.tracker.budgets().list_all(), self.symbol());
        self.prompter.print(&text)
    }

    fn track_spending(&mut self) -> TrackerResult<()> {
        let report = self.tracker.spending_report()?;
        let text = display::format_spending_report(&report, self.symbol());
        self.prompter.print(&text)
    }
}
