//! Fixed-rate conversion between hryvnia and USD/EUR.
//!
//! Each direction has its own constant. The backward rates are not the
//! reciprocals of the forward ones, so `from_usd(to_usd(x)) != x`.

use std::io::Write;

use rust_decimal::Decimal;

use crate::ui::util::round_money;

/// UAH → USD, 0.027
pub(crate) const UAH_TO_USD: Decimal = Decimal::from_parts(27, 0, 0, false, 3);
/// UAH → EUR, 0.025
pub(crate) const UAH_TO_EUR: Decimal = Decimal::from_parts(25, 0, 0, false, 3);
/// USD → UAH, 37.00
pub(crate) const USD_TO_UAH: Decimal = Decimal::from_parts(3700, 0, 0, false, 2);
/// EUR → UAH, 40.50
pub(crate) const EUR_TO_UAH: Decimal = Decimal::from_parts(4050, 0, 0, false, 2);

pub(crate) fn convert_to_usd(amount_uah: Decimal) -> Decimal {
    amount_uah * UAH_TO_USD
}

pub(crate) fn convert_to_eur(amount_uah: Decimal) -> Decimal {
    amount_uah * UAH_TO_EUR
}

/// `None` when the product does not fit in a `Decimal`.
pub(crate) fn convert_from_usd(amount_usd: Decimal) -> Option<Decimal> {
    amount_usd.checked_mul(USD_TO_UAH)
}

pub(crate) fn convert_from_eur(amount_eur: Decimal) -> Option<Decimal> {
    amount_eur.checked_mul(EUR_TO_UAH)
}

pub(crate) fn display_conversions(
    out: &mut impl Write,
    amount_uah: Decimal,
) -> std::io::Result<()> {
    let usd = round_money(convert_to_usd(amount_uah));
    let eur = round_money(convert_to_eur(amount_uah));

    writeln!(out)?;
    writeln!(out, "{:.2} UAH =", round_money(amount_uah))?;
    writeln!(out, "  {usd:.2} USD")?;
    writeln!(out, "  {eur:.2} EUR")?;

    writeln!(out, "Back to UAH at the buy rates:")?;
    for (back, from) in [(convert_from_usd(usd), "USD"), (convert_from_eur(eur), "EUR")] {
        match back {
            Some(uah) => writeln!(out, "  {:.2} UAH from {from}", round_money(uah))?,
            None => writeln!(out, "  out of range from {from}")?,
        }
    }
    Ok(())
}
