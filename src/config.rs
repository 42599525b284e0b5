use std::io::IsTerminal;

use rust_decimal::Decimal;

/// Environment variable holding the tracing filter directive.
pub(crate) const LOG_ENV: &str = "BUDGET_TRACKER_LOG";

pub(crate) const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub max_transactions: usize,
    /// Expenses strictly above this amount trigger an advisory.
    pub large_expense_threshold: Decimal,
    /// Largest single amount the ledger accepts.
    pub max_amount: Decimal,
    pub color: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_transactions: 1000,
            large_expense_threshold: Decimal::new(100_000, 2),
            max_amount: Decimal::new(1_000_000_000_000, 0),
            color: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    pub(crate) fn from_env() -> Self {
        let color = std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal();
        let log_filter = std::env::var(LOG_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self {
            color,
            log_filter,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.max_transactions, 1000);
        assert_eq!(settings.large_expense_threshold, dec!(1000.00));
        assert_eq!(settings.max_amount, dec!(1000000000000));
        assert!(!settings.color);
        assert_eq!(settings.log_filter, "warn");
    }
}
