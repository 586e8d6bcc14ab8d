//! Receipt

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Style, Theme,
        object::{Columns, Rows},
    },
};

use crate::{
    cart::CartItem,
    pricing::{self, PricedLine, format_money, minor_to_decimal},
};

/// One printed line of a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptLine<'a> {
    /// Book title
    pub title: &'a str,

    /// Book author
    pub author: &'a str,

    /// Unit price in minor units
    pub unit_price: u64,

    /// Copies bought
    pub quantity: u32,
}

impl PricedLine for ReceiptLine<'_> {
    fn unit_price(&self) -> u64 {
        self.unit_price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl<'a> From<&'a CartItem> for ReceiptLine<'a> {
    fn from(item: &'a CartItem) -> Self {
        Self {
            title: &item.book.title,
            author: &item.book.author,
            unit_price: item.book.price,
            quantity: item.quantity,
        }
    }
}

/// Render `lines` as a table followed by subtotal, tax and total rows.
pub fn render_receipt(lines: &[ReceiptLine<'_>]) -> String {
    let totals = pricing::totals(lines);
    let mut builder = Builder::default();

    builder.push_record(["Title", "Author", "Price", "Qty", "Amount"]);

    for line in lines {
        builder.push_record([
            line.title.to_string(),
            line.author.to_string(),
            format_money(minor_to_decimal(line.unit_price)),
            line.quantity.to_string(),
            format_money(minor_to_decimal(line.line_total())),
        ]);
    }

    let summary_start = builder.count_records();

    for (label, amount) in [
        ("Subtotal", totals.subtotal),
        ("Tax (10%)", totals.tax),
        ("Total", totals.total),
    ] {
        builder.push_record([
            String::new(),
            label.to_string(),
            String::new(),
            String::new(),
            format_money(amount),
        ]);
    }

    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);
    theme.insert_horizontal_line(summary_start, separator);

    table.with(theme);
    table.modify(Columns::new(2..5), Alignment::right());
    table.modify(Rows::first(), Alignment::center());

    table.to_string()
}
