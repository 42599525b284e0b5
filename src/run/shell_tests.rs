#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

/// Feed `script` to a fresh shell; returns the final ledger and everything printed.
fn run_script(script: &str) -> (Budget, String) {
    run_script_with(script, Settings::default())
}

fn run_script_with(script: &str, settings: Settings) -> (Budget, String) {
    let mut out = Vec::new();
    let budget = Shell::new(script.as_bytes(), &mut out, Theme::plain(), settings)
        .run()
        .unwrap();
    (budget, String::from_utf8(out).unwrap())
}

// ── Session ───────────────────────────────────────────────────

#[test]
fn test_exit_immediately() {
    let (budget, out) = run_script("Olena\n0\n");
    assert_eq!(budget.user_name(), "Olena");
    assert_eq!(budget.len(), 0);
    assert!(out.contains("PERSONAL BUDGET TRACKER"));
    assert!(out.contains("Welcome, Olena! Your budget has been created."));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn test_blank_name_uses_placeholder() {
    let (budget, out) = run_script("   \n0\n");
    assert_eq!(budget.user_name(), "User");
    assert!(out.contains("Welcome, User!"));
}

#[test]
fn test_end_of_input_ends_session() {
    let (budget, out) = run_script("");
    assert_eq!(budget.user_name(), "User");
    assert!(out.contains("Goodbye!"));

    let (_, out) = run_script("Ann\n3\n");
    assert!(out.contains("No transactions to display."));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn test_unknown_choice_reprompts() {
    let (_, out) = run_script("Ann\n9\nhello\n0\n");
    assert_eq!(out.matches("Invalid choice. Please try again.").count(), 2);
    // Menu shown once at start plus once after each bad choice
    assert_eq!(out.matches("│ 0. Exit").count(), 3);
}

// ── Adding ────────────────────────────────────────────────────

#[test]
fn test_add_income_and_expense() {
    let (budget, out) = run_script("Ann\n1\n5000\n1\nJune salary\n2\n1500\n1\nGroceries\n0\n");
    assert_eq!(budget.len(), 2);
    assert_eq!(budget.balance(), Ok(dec!(3500)));

    let salary = &budget.transactions()[0];
    assert_eq!(salary.kind(), TransactionType::Income);
    assert_eq!(salary.category(), Category::SALARY);
    assert_eq!(salary.description(), "June salary");

    let food = &budget.transactions()[1];
    assert_eq!(food.kind(), TransactionType::Expense);
    assert_eq!(food.category(), Category::FOOD);

    assert!(out.contains("✓ Income of 5,000.00 UAH added successfully!"));
    assert!(out.contains("✓ Expense of 1,500.00 UAH added successfully!"));
    assert!(!out.contains("WARNING"));
}

#[test]
fn test_non_numeric_amount_retries() {
    let (budget, out) = run_script("Ann\n2\nabc\n12,5\n12.5\n2\nBus\n0\n");
    assert_eq!(out.matches("Invalid value. Please enter a number.").count(), 2);
    assert_eq!(budget.len(), 1);
    assert_eq!(budget.transactions()[0].amount(), dec!(12.5));
    assert_eq!(budget.transactions()[0].category(), Category::TRANSPORT);
}

#[test]
fn test_non_positive_amount_rejected_without_loop() {
    let (budget, out) = run_script("Ann\n1\n0\n2\n-10\n0\n");
    assert_eq!(budget.len(), 0);
    assert_eq!(out.matches("The amount must be greater than 0.").count(), 2);
}

#[test]
fn test_unknown_category_digit_falls_back_to_other() {
    let (budget, _) = run_script("Ann\n1\n100\n5\n\n2\n20\nx\n\n0\n");
    assert_eq!(budget.transactions()[0].category(), Category::OTHER);
    assert_eq!(budget.transactions()[1].category(), Category::OTHER);
}

#[test]
fn test_blank_description_uses_placeholder() {
    let (budget, _) = run_script("Ann\n2\n10\n3\n  \n0\n");
    assert_eq!(budget.transactions()[0].description(), "No description");
    assert_eq!(budget.transactions()[0].category(), Category::HOUSING);
}

#[test]
fn test_description_kept_as_typed() {
    let (budget, _) = run_script("Ann\n2\n10\n1\n  Coffee, oat milk \n0\n");
    assert_eq!(budget.transactions()[0].description(), "  Coffee, oat milk ");
}

#[test]
fn test_amount_above_maximum_retries() {
    let script = "Ann\n1\n79228162514264337593543950335\n1000000000000.01\n5000\n1\n\n0\n";
    let (budget, out) = run_script(script);
    let refusal = "The amount must not exceed 1,000,000,000,000.00 UAH.";
    assert_eq!(out.matches(refusal).count(), 2);
    assert_eq!(budget.len(), 1);
    assert_eq!(budget.balance(), Ok(dec!(5000)));
}

#[test]
fn test_large_expense_warning() {
    let (_, out) = run_script("Ann\n2\n1200\n3\nRent\n2\n800\n1\nFood\n0\n");
    assert_eq!(out.matches("WARNING: Large expense").count(), 1);
    assert!(out.contains("WARNING: Large expense of 1,200.00 UAH!"));
}

#[test]
fn test_capacity_advisory() {
    let settings = Settings {
        max_transactions: 1,
        ..Settings::default()
    };
    let (budget, out) =
        run_script_with("Ann\n1\n10\n1\na\n1\n20\n1\nb\n0\n", settings);
    assert_eq!(budget.len(), 1);
    assert_eq!(budget.balance(), Ok(dec!(10)));
    assert!(out.contains("Maximum number of transactions reached (1)"));
    assert_eq!(out.matches("added successfully").count(), 1);
}

#[test]
fn test_end_of_input_mid_add() {
    let (budget, out) = run_script("Ann\n1\n100\n");
    assert_eq!(budget.len(), 0);
    assert!(out.contains("Goodbye!"));
}

// ── Listing and filtering ─────────────────────────────────────

const SEEDED: &str = "Ann\n1\n5000\n1\nSalary\n2\n1500\n1\nFood\n2\n300\n2\nTaxi\n";

#[test]
fn test_list_all() {
    let (_, out) = run_script(&format!("{SEEDED}3\n0\n"));
    assert!(out.contains("Transactions of Ann"));
    assert!(out.contains("Total transactions: 3"));
}

#[test]
fn test_filter_multiple_categories() {
    let (_, out) = run_script(&format!("{SEEDED}4\n1, 2\n0\n"));
    assert!(out.contains("--- FILTER BY CATEGORIES ---"));
    assert!(out.contains("8. Other"));
    assert!(out.contains("| Food"));
    assert!(out.contains("| Taxi"));
    assert!(!out.contains("| Salary\n"));
    assert!(out.contains("Total transactions: 2"));
}

#[test]
fn test_filter_blank_lists_everything() {
    let (_, out) = run_script(&format!("{SEEDED}4\n\n0\n"));
    assert!(out.contains("Total transactions: 3"));
}

#[test]
fn test_filter_without_valid_choice() {
    let (_, out) = run_script(&format!("{SEEDED}4\n9,abc\n0\n"));
    assert!(out.contains("No categories selected."));
    assert!(!out.contains("Total transactions"));
}

#[test]
fn test_filter_with_no_matches() {
    let (_, out) = run_script(&format!("{SEEDED}4\n6\n0\n"));
    assert!(out.contains("No transactions recorded yet for: Education"));
    assert!(out.contains("No transactions to display."));
}

// ── Statistics and conversion ─────────────────────────────────

#[test]
fn test_statistics_scenario() {
    let (_, out) = run_script("Ann\n1\n5000\n1\n\n2\n1500\n1\n\n5\n0\n");
    assert!(out.contains("BUDGET STATISTICS"));
    assert!(out.contains("3,500.00 UAH"));
    assert!(out.contains("Surplus"));
    assert!(out.contains("70.00%"));
}

#[test]
fn test_statistics_with_maximum_incomes() {
    let max = "1000000000000";
    let (budget, out) = run_script(&format!("Ann\n1\n{max}\n1\n\n1\n{max}\n1\n\n5\n0\n"));
    assert_eq!(budget.len(), 2);
    assert!(out.contains("2,000,000,000,000.00 UAH (2 transactions)"));
    assert!(out.contains("100.00%"));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn test_statistics_savings_rate_out_of_range() {
    let tiny = "0.0000000000000000000000000001";
    let (_, out) = run_script(&format!("Ann\n1\n{tiny}\n2\n\n2\n1000\n1\n\n5\n0\n"));
    assert!(out.contains("BUDGET STATISTICS"));
    assert!(out.contains("Deficit"));
    assert!(out.contains("Savings rate:   out of range"));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn test_statistics_empty() {
    let (_, out) = run_script("Ann\n5\n0\n");
    assert!(out.contains("No transactions to analyze."));
}

#[test]
fn test_convert_balance() {
    let (_, out) = run_script("Ann\n1\n1000\n1\n\n6\n0\n");
    assert!(out.contains("--- CURRENCY CONVERSION ---"));
    assert!(out.contains("Current balance: 1,000.00 UAH"));
    assert!(out.contains("1000.00 UAH ="));
    assert!(out.contains("  27.00 USD"));
    assert!(out.contains("  25.00 EUR"));
    assert!(out.contains("  999.00 UAH from USD"));
    assert!(out.contains("  1012.50 UAH from EUR"));
}

// ── Demos ─────────────────────────────────────────────────────

#[test]
fn test_demos_leave_ledger_untouched() {
    let (budget, out) = run_script("Ann\n7\n8\n0\n");
    assert_eq!(budget.len(), 0);
    assert!(out.contains("list2 count: 4"));
    assert!(out.contains("After removing Transport: Food, Entertainment"));
}
