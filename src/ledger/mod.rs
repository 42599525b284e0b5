mod stats;

use std::io::Write;

use chrono::{DateTime, Local};
use rust_decimal::Decimal;

use crate::config::Settings;
use crate::error::LedgerError;
use crate::models::{Category, Transaction, TransactionType};
use crate::ui::theme::Theme;
use crate::ui::util::{format_amount, format_percent};

pub(crate) use stats::Statistics;

/// What the ledger reports back after accepting a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Added {
    pub id: u32,
    /// The entry is an expense above the warning threshold.
    pub large_expense: bool,
}

/// In-memory ledger for one session. Transactions are kept in insertion
/// order, ids start at 1 and only ever grow.
pub(crate) struct Budget {
    user_name: String,
    created_at: DateTime<Local>,
    transactions: Vec<Transaction>,
    next_id: u32,
    max_transactions: usize,
    max_amount: Decimal,
    large_expense_threshold: Decimal,
}

impl Budget {
    pub(crate) fn new(user_name: String, settings: &Settings) -> Self {
        Self {
            user_name,
            created_at: Local::now(),
            transactions: Vec::new(),
            next_id: 1,
            max_transactions: settings.max_transactions,
            max_amount: settings.max_amount,
            large_expense_threshold: settings.large_expense_threshold,
        }
    }

    pub(crate) fn user_name(&self) -> &str {
        &self.user_name
    }

    #[cfg(test)]
    pub(crate) fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    #[cfg(test)]
    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.transactions.len() >= self.max_transactions
    }

    /// Record a new entry. Amount positivity is the caller's job; amounts
    /// above the configured maximum are refused.
    pub(crate) fn add_transaction(
        &mut self,
        kind: TransactionType,
        amount: Decimal,
        category: Category,
        description: String,
    ) -> Result<Added, LedgerError> {
        if self.is_full() {
            tracing::warn!(max = self.max_transactions, "transaction rejected, ledger full");
            return Err(LedgerError::CapacityReached {
                max: self.max_transactions,
            });
        }
        if amount > self.max_amount {
            tracing::warn!(
                %amount,
                max = %self.max_amount,
                "transaction rejected, amount too large"
            );
            return Err(LedgerError::AmountTooLarge {
                max: self.max_amount,
            });
        }

        let txn = Transaction::new(self.next_id, kind, amount, category, description);
        self.next_id += 1;

        let added = Added {
            id: txn.id(),
            large_expense: txn.is_expense() && txn.amount() > self.large_expense_threshold,
        };
        tracing::debug!(
            id = txn.id(),
            kind = %txn.kind(),
            amount = %txn.amount(),
            category = %txn.category(),
            description = txn.description(),
            "transaction added"
        );
        if added.large_expense {
            tracing::warn!(id = added.id, %amount, "large expense recorded");
        }
        self.transactions.push(txn);

        Ok(added)
    }

    /// Exact sum of signed amounts over every stored transaction.
    pub(crate) fn balance(&self) -> Result<Decimal, LedgerError> {
        self.transactions
            .iter()
            .map(Transaction::signed_amount)
            .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
            .ok_or(LedgerError::Overflow)
    }

    /// Transactions in insertion order, restricted to those sharing at least
    /// one flag with `filter` when one is given.
    pub(crate) fn transactions_matching(&self, filter: Option<Category>) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| filter.map_or(true, |f| t.category().intersects(f)))
            .collect()
    }

    pub(crate) fn has_categories(&self, categories: Category) -> bool {
        self.transactions
            .iter()
            .any(|t| t.category().intersects(categories))
    }

    /// `Ok(None)` when there is nothing to analyze.
    pub(crate) fn statistics(&self) -> Result<Option<Statistics>, LedgerError> {
        if self.transactions.is_empty() {
            return Ok(None);
        }
        Statistics::collect(&self.transactions, self.balance()?).map(Some)
    }

    pub(crate) fn display_transactions(
        &self,
        out: &mut impl Write,
        theme: &Theme,
        filter: Option<Category>,
    ) -> std::io::Result<()> {
        let rule = "=".repeat(60);
        writeln!(out)?;
        writeln!(out, "{rule}")?;
        writeln!(out, "{}", theme.heading(&format!("Transactions of {}", self.user_name)))?;
        writeln!(
            out,
            "Budget created: {}",
            self.created_at.format("%d.%m.%Y %H:%M")
        )?;
        writeln!(out, "{rule}")?;

        let shown = self.transactions_matching(filter);
        if shown.is_empty() {
            writeln!(out, "No transactions to display.")?;
            return Ok(());
        }

        for txn in &shown {
            let line = txn.to_string();
            let line = if txn.is_income() {
                theme.income(&line)
            } else {
                theme.expense(&line)
            };
            writeln!(out, "{line}")?;
        }

        writeln!(out, "{}", "-".repeat(60))?;
        writeln!(out, "Total transactions: {}", shown.len())?;
        Ok(())
    }

    pub(crate) fn display_statistics(
        &self,
        out: &mut impl Write,
        theme: &Theme,
    ) -> std::io::Result<()> {
        let stats = match self.statistics() {
            Ok(Some(stats)) => stats,
            Ok(None) => {
                writeln!(out)?;
                writeln!(out, "No transactions to analyze.")?;
                return Ok(());
            }
            Err(err) => {
                tracing::warn!(%err, "statistics unavailable");
                writeln!(out)?;
                writeln!(out, "{}", theme.warning(&err.to_string()))?;
                return Ok(());
            }
        };

        let rule = "=".repeat(50);
        writeln!(out)?;
        writeln!(out, "{rule}")?;
        writeln!(out, "{}", theme.heading("BUDGET STATISTICS"))?;
        writeln!(out, "{rule}")?;
        writeln!(
            out,
            "Total income:   {:>18} ({} transactions)",
            format_amount(stats.total_income),
            stats.income_count
        )?;
        writeln!(
            out,
            "Total expense:  {:>18} ({} transactions)",
            format_amount(stats.total_expense),
            stats.expense_count
        )?;
        writeln!(out, "{}", "-".repeat(50))?;
        writeln!(out, "Balance:        {:>18}", format_amount(stats.balance))?;
        let status = if stats.is_surplus() {
            theme.income("Surplus")
        } else {
            theme.expense("Deficit")
        };
        writeln!(out, "Status:         {status}")?;
        match stats.savings_rate() {
            Ok(Some(rate)) => writeln!(out, "Savings rate:   {:>18}", format_percent(rate))?,
            Ok(None) => {}
            Err(_) => writeln!(out, "Savings rate:   {}", theme.warning("out of range"))?,
        }
        writeln!(out, "{rule}")?;
        Ok(())
    }
}
