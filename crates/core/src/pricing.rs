//! Pricing
//!
//! Subtotal, tax and total for a sequence of priced lines. Prices enter as
//! minor units and leave as exact decimals in major units; rounding happens
//! only when formatting for display.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso};
use serde::{Deserialize, Serialize};

/// A line that contributes `unit_price × quantity` to a total.
pub trait PricedLine {
    /// Unit price in minor units.
    fn unit_price(&self) -> u64;

    /// Number of units on the line.
    fn quantity(&self) -> u32;

    /// `unit_price × quantity` in minor units, saturating on overflow.
    fn line_total(&self) -> u64 {
        self.unit_price().saturating_mul(u64::from(self.quantity()))
    }
}

/// Computed totals for a cart or an order.
///
/// Amounts serialize as decimal strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of line totals, in major units.
    pub subtotal: Decimal,

    /// Sales tax on the subtotal.
    pub tax: Decimal,

    /// `subtotal + tax`
    pub total: Decimal,

    /// Sum of line quantities.
    pub item_count: u64,
}

/// The fixed sales tax rate (10%).
pub fn tax_rate() -> Percentage {
    Percentage::from(Decimal::new(10, 2))
}

/// Convert minor units (cents) to an exact major-unit decimal.
pub fn minor_to_decimal(minor: u64) -> Decimal {
    Decimal::from(minor) / Decimal::ONE_HUNDRED
}

/// Compute totals over the given lines.
pub fn totals<'a, L, I>(lines: I) -> CartTotals
where
    L: PricedLine + 'a,
    I: IntoIterator<Item = &'a L>,
{
    let (subtotal_minor, item_count) = lines
        .into_iter()
        .fold((0_u64, 0_u64), |(subtotal, count), line| {
            (
                subtotal.saturating_add(line.line_total()),
                count.saturating_add(u64::from(line.quantity())),
            )
        });

    let subtotal = minor_to_decimal(subtotal_minor);
    let tax = tax_rate() * subtotal;

    CartTotals {
        subtotal,
        tax,
        total: subtotal + tax,
        item_count,
    }
}

/// Format a major-unit amount as USD, rounded half away from zero to cents.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Money::from_decimal(rounded, iso::USD).to_string()
}
