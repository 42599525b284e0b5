use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

use super::demos;
use crate::config::Settings;
use crate::currency;
use crate::ledger::Budget;
use crate::models::{Category, TransactionType};
use crate::ui::theme::Theme;
use crate::ui::util::{format_amount, or_placeholder, parse_amount};

const DEFAULT_USER_NAME: &str = "User";
const DEFAULT_DESCRIPTION: &str = "No description";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

/// Line-oriented menu loop over any reader/writer pair.
///
/// Closing the input counts as choosing "Exit", wherever the shell happens
/// to be waiting, so piped scripts always terminate.
pub(crate) struct Shell<R, W> {
    input: R,
    out: W,
    theme: Theme,
    settings: Settings,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub(crate) fn new(input: R, out: W, theme: Theme, settings: Settings) -> Self {
        Self {
            input,
            out,
            theme,
            settings,
        }
    }

    /// Run the session to completion and hand back the ledger it built.
    pub(crate) fn run(mut self) -> Result<Budget> {
        self.print_banner()?;

        let name = match self.prompt("\nEnter your name: ")? {
            Some(line) => or_placeholder(&line, DEFAULT_USER_NAME),
            None => DEFAULT_USER_NAME.to_string(),
        };
        let mut budget = Budget::new(name, &self.settings);
        tracing::info!(user = budget.user_name(), "budget session started");
        writeln!(
            self.out,
            "\nWelcome, {}! Your budget has been created.",
            budget.user_name()
        )?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("\nChoose an option: ")? else {
                break;
            };

            let control = match choice.trim() {
                "1" => self.add_entry(&mut budget, TransactionType::Income)?,
                "2" => self.add_entry(&mut budget, TransactionType::Expense)?,
                "3" => {
                    budget.display_transactions(&mut self.out, &self.theme, None)?;
                    LoopControl::Continue
                }
                "4" => self.filter_by_categories(&budget)?,
                "5" => {
                    budget.display_statistics(&mut self.out, &self.theme)?;
                    LoopControl::Continue
                }
                "6" => {
                    self.convert_balance(&budget)?;
                    LoopControl::Continue
                }
                "7" => {
                    demos::value_vs_reference(&mut self.out, &self.theme)?;
                    LoopControl::Continue
                }
                "8" => {
                    demos::bitwise_operations(&mut self.out, &self.theme)?;
                    LoopControl::Continue
                }
                "0" => LoopControl::Exit,
                _ => {
                    let msg = self.theme.error("Invalid choice. Please try again.");
                    writeln!(self.out, "\n{msg}")?;
                    LoopControl::Continue
                }
            };

            if control == LoopControl::Exit {
                break;
            }
        }

        writeln!(self.out, "\nThanks for using the budget tracker! Goodbye!")?;
        self.out.flush()?;
        tracing::info!(transactions = budget.len(), "budget session ended");
        Ok(budget)
    }

    // ── Input ────────────────────────────────────────────────────

    /// Print `text` and read one line. `None` means the input is closed.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask until the answer parses as a decimal no larger than the
    /// configured maximum.
    fn read_decimal(&mut self, text: &str) -> Result<Option<Decimal>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            let msg = match parse_amount(&line) {
                Some(amount) if amount <= self.settings.max_amount => return Ok(Some(amount)),
                Some(_) => format!(
                    "The amount must not exceed {}.",
                    format_amount(self.settings.max_amount)
                ),
                None => "Invalid value. Please enter a number.".to_string(),
            };
            writeln!(self.out, "{}", self.theme.error(&msg))?;
        }
    }

    fn select_category(&mut self, kind: TransactionType) -> Result<Option<Category>> {
        writeln!(self.out, "\nChoose a category:")?;
        match kind {
            TransactionType::Income => {
                writeln!(self.out, "1. Salary")?;
                writeln!(self.out, "2. Other")?;
            }
            TransactionType::Expense => {
                for (i, name) in [
                    "Food",
                    "Transport",
                    "Housing",
                    "Entertainment",
                    "Healthcare",
                    "Education",
                    "Other",
                ]
                .iter()
                .enumerate()
                {
                    writeln!(self.out, "{}. {name}", i + 1)?;
                }
            }
        }

        let Some(choice) = self.prompt("> ")? else {
            return Ok(None);
        };
        Ok(Some(match kind {
            TransactionType::Income => Category::from_income_choice(&choice),
            TransactionType::Expense => Category::from_expense_choice(&choice),
        }))
    }

    // ── Handlers ─────────────────────────────────────────────────

    fn add_entry(&mut self, budget: &mut Budget, kind: TransactionType) -> Result<LoopControl> {
        let (title, noun) = match kind {
            TransactionType::Income => ("--- ADD INCOME ---", "Income"),
            TransactionType::Expense => ("--- ADD EXPENSE ---", "Expense"),
        };
        writeln!(self.out, "\n{}", self.theme.heading(title))?;

        let text = format!("Enter the {} amount (UAH): ", noun.to_lowercase());
        let Some(amount) = self.read_decimal(&text)? else {
            return Ok(LoopControl::Exit);
        };
        if amount <= Decimal::ZERO {
            let msg = self.theme.error("The amount must be greater than 0.");
            writeln!(self.out, "{msg}")?;
            return Ok(LoopControl::Continue);
        }

        let Some(category) = self.select_category(kind)? else {
            return Ok(LoopControl::Exit);
        };

        let Some(description) = self.prompt("Description: ")? else {
            return Ok(LoopControl::Exit);
        };
        let description = or_placeholder(&description, DEFAULT_DESCRIPTION);

        match budget.add_transaction(kind, amount, category, description) {
            Ok(added) => {
                if added.large_expense {
                    let msg = format!("WARNING: Large expense of {}!", format_amount(amount));
                    writeln!(self.out, "\n{}", self.theme.warning(&msg))?;
                }
                let msg = format!(
                    "✓ {noun} of {} added successfully! (#{})",
                    format_amount(amount),
                    added.id
                );
                writeln!(self.out, "\n{}", self.theme.success(&msg))?;
            }
            Err(err) => {
                writeln!(self.out, "\n{}", self.theme.warning(&err.to_string()))?;
            }
        }
        Ok(LoopControl::Continue)
    }

    fn filter_by_categories(&mut self, budget: &Budget) -> Result<LoopControl> {
        writeln!(self.out, "\n{}", self.theme.heading("--- FILTER BY CATEGORIES ---"))?;
        writeln!(self.out, "Choose categories (several allowed, comma-separated):")?;
        for (i, (_, name)) in Category::all().iter().enumerate() {
            writeln!(self.out, "{}. {name}", i + 1)?;
        }

        let Some(input) = self.prompt("\nYour choice (e.g. 1,2,3): ")? else {
            return Ok(LoopControl::Exit);
        };
        if input.trim().is_empty() {
            budget.display_transactions(&mut self.out, &self.theme, None)?;
            return Ok(LoopControl::Continue);
        }

        let filter = Category::parse_filter(&input);
        if filter.is_empty() {
            writeln!(self.out, "{}", self.theme.warning("No categories selected."))?;
            return Ok(LoopControl::Continue);
        }

        if !budget.has_categories(filter) {
            let msg = format!("No transactions recorded yet for: {filter}");
            writeln!(self.out, "{}", self.theme.dim(&msg))?;
        }
        budget.display_transactions(&mut self.out, &self.theme, Some(filter))?;
        Ok(LoopControl::Continue)
    }

    fn convert_balance(&mut self, budget: &Budget) -> Result<()> {
        writeln!(self.out, "\n{}", self.theme.heading("--- CURRENCY CONVERSION ---"))?;
        let balance = match budget.balance() {
            Ok(balance) => balance,
            Err(err) => {
                writeln!(self.out, "{}", self.theme.warning(&err.to_string()))?;
                return Ok(());
            }
        };
        writeln!(self.out, "Current balance: {}", format_amount(balance))?;
        currency::display_conversions(&mut self.out, balance)?;
        Ok(())
    }

    // ── Output ───────────────────────────────────────────────────

    fn print_banner(&mut self) -> Result<()> {
        let lines = [
            "╔════════════════════════════════════════════════════╗",
            "║           PERSONAL BUDGET TRACKER v1.0             ║",
            "╚════════════════════════════════════════════════════╝",
        ];
        for line in lines {
            writeln!(self.out, "{}", self.theme.heading(line))?;
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        let lines = [
            "┌──────────────────────────────────────────────────┐",
            "│                      MENU                        │",
            "├──────────────────────────────────────────────────┤",
            "│ 1. Add income                                    │",
            "│ 2. Add expense                                   │",
            "│ 3. Show all transactions                         │",
            "│ 4. Filter by categories                          │",
            "│ 5. Show statistics                               │",
            "│ 6. Convert balance to foreign currency           │",
            "│ 7. Demo: value vs shared reference               │",
            "│ 8. Demo: bitwise operations                      │",
            "│ 0. Exit                                          │",
            "└──────────────────────────────────────────────────┘",
        ];
        writeln!(self.out)?;
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
