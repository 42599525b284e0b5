use rust_decimal::Decimal;
use thiserror::Error;

/// Rejections reported by the ledger. None of them are fatal: the shell
/// prints them as advisories and carries on.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum LedgerError {
    #[error("Maximum number of transactions reached ({max})")]
    CapacityReached { max: usize },
    #[error("The amount must not exceed {max} UAH")]
    AmountTooLarge { max: Decimal },
    #[error("Totals are too large to calculate")]
    Overflow,
}
