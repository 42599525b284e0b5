use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::models::{Transaction, TransactionType};

/// Income/expense totals for a non-empty ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Statistics {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub income_count: usize,
    pub expense_count: usize,
    pub balance: Decimal,
}

impl Statistics {
    /// Single pass over `transactions`, splitting them by type.
    pub(crate) fn collect(
        transactions: &[Transaction],
        balance: Decimal,
    ) -> Result<Self, LedgerError> {
        let mut stats = Self {
            total_income: Decimal::ZERO,
            total_expense: Decimal::ZERO,
            income_count: 0,
            expense_count: 0,
            balance,
        };

        for txn in transactions {
            let (total, count) = match txn.kind() {
                TransactionType::Income => (&mut stats.total_income, &mut stats.income_count),
                TransactionType::Expense => (&mut stats.total_expense, &mut stats.expense_count),
            };
            *total = total
                .checked_add(txn.amount())
                .ok_or(LedgerError::Overflow)?;
            *count += 1;
        }

        Ok(stats)
    }

    pub(crate) fn is_surplus(&self) -> bool {
        self.balance >= Decimal::ZERO
    }

    /// `(income - expense) / income * 100`, only defined for positive income.
    pub(crate) fn savings_rate(&self) -> Result<Option<Decimal>, LedgerError> {
        if self.total_income <= Decimal::ZERO {
            return Ok(None);
        }
        self.total_income
            .checked_sub(self.total_expense)
            .and_then(|saved| saved.checked_div(self.total_income))
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(Some)
            .ok_or(LedgerError::Overflow)
    }
}
