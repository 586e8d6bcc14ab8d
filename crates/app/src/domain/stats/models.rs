//! Stats Models

use rust_decimal::Decimal;

/// Store-wide counters for the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub users: u64,

    /// Live books only
    pub books: u64,

    pub orders: u64,

    /// Sum of order totals, cancelled orders excluded.
    pub revenue: Decimal,
}
