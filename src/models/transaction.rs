use chrono::{DateTime, Local};
use rust_decimal::Decimal;

use super::Category;
use crate::ui::util::round_money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// One ledger entry. Built once by the ledger and never changed afterwards.
#[derive(Debug, Clone)]
pub struct Transaction {
    id: u32,
    kind: TransactionType,
    amount: Decimal,
    category: Category,
    description: String,
    created_at: DateTime<Local>,
}

impl Transaction {
    pub fn new(
        id: u32,
        kind: TransactionType,
        amount: Decimal,
        category: Category,
        description: String,
    ) -> Self {
        Self {
            id,
            kind,
            amount,
            category,
            description,
            created_at: Local::now(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    #[cfg(test)]
    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Amount with the sign of its type: expenses count negative.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} | {:<8} | {}{:>8.2} UAH | {:<15} | {}",
            self.id,
            self.created_at.format("%d.%m.%Y %H:%M"),
            self.kind,
            self.kind.sign(),
            round_money(self.amount),
            self.category,
            self.description,
        )
    }
}
