//! Menu options 7 and 8: small walkthroughs of copy semantics and flag
//! arithmetic. Neither touches the session's ledger.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use rust_decimal::Decimal;

use crate::models::{Category, Transaction, TransactionType};
use crate::ui::theme::Theme;
use crate::ui::util::binary8;

pub(super) fn value_vs_reference(out: &mut impl Write, theme: &Theme) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.heading("--- DEMO: VALUE vs SHARED REFERENCE ---"))?;

    writeln!(out)?;
    writeln!(out, "1. Values (Transaction):")?;
    let first = Transaction::new(
        1,
        TransactionType::Income,
        Decimal::ONE_HUNDRED,
        Category::SALARY,
        "Income 1".into(),
    );
    let second = first.clone();
    writeln!(out, "first amount:  {}", first.amount())?;
    writeln!(out, "second amount: {}", second.amount())?;
    writeln!(out, "Copying a value produces an independent copy.")?;

    writeln!(out)?;
    writeln!(out, "2. Shared references (Rc<RefCell<Vec<i32>>>):")?;
    let list1 = Rc::new(RefCell::new(vec![1, 2, 3]));
    let list2 = Rc::clone(&list1);
    list2.borrow_mut().push(4);
    writeln!(out, "list1 count: {}", list1.borrow().len())?;
    writeln!(out, "list2 count: {}", list2.borrow().len())?;
    writeln!(out, "Both handles point at the same list.")?;
    Ok(())
}

pub(super) fn bitwise_operations(out: &mut impl Write, theme: &Theme) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.heading("--- DEMO: BITWISE OPERATIONS ---"))?;

    writeln!(out)?;
    writeln!(out, "1. Combining categories:")?;
    let mut combined = Category::FOOD | Category::TRANSPORT;
    writeln!(out, "Food | Transport = {combined}")?;

    writeln!(out)?;
    writeln!(out, "2. Membership:")?;
    let has_food = (combined & Category::FOOD) == Category::FOOD;
    let has_education = (combined & Category::EDUCATION) == Category::EDUCATION;
    writeln!(out, "Contains Food? {has_food}")?;
    writeln!(out, "Contains Education? {has_education}")?;

    writeln!(out)?;
    writeln!(out, "3. Adding a category:")?;
    combined.insert(Category::ENTERTAINMENT);
    writeln!(out, "After adding Entertainment: {combined}")?;

    writeln!(out)?;
    writeln!(out, "4. Removing a category:")?;
    combined.remove(Category::TRANSPORT);
    writeln!(out, "After removing Transport: {combined}")?;
    let masked =
        (Category::FOOD | Category::TRANSPORT | Category::ENTERTAINMENT) & !Category::TRANSPORT;
    writeln!(out, "Same via AND NOT: {masked}")?;

    writeln!(out)?;
    writeln!(out, "5. Bit pattern:")?;
    let food = Category::FOOD.bits();
    writeln!(out, "Category::FOOD = {food} = {} (binary)", binary8(food))?;
    let raw = Category::from_bits_truncate(0b1_0000_1001);
    writeln!(
        out,
        "Raw 0b100001001 keeps only named bits: {raw} = {} (binary)",
        binary8(raw.bits())
    )?;
    Ok(())
}
