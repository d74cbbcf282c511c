//! Receipt
//!
//! Table rendering for priced lines and promotion listings.

use std::{io, ops::Range};

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    channels::Channel, presentations::Presentation, pricing::PricingResult, promotions::Promotion,
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Output could not be written
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// Write a priced line as a table, followed by a short summary.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_quote(
    mut out: impl io::Write,
    presentation: &Presentation<'_>,
    channel: Channel,
    result: &PricingResult<'_, '_>,
) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record([
        "Presentation",
        "Channel",
        "Qty",
        "Unit Price",
        "Base Total",
        "Total",
        "Promotion",
    ]);

    let promotion = result.applied.map_or_else(
        || "-".to_string(),
        |promotion| format!("{} ({})", promotion.name, promotion.discount),
    );

    builder.push_record([
        presentation.name.clone(),
        channel.to_string(),
        result.quantity.to_string(),
        presentation.unit_price(channel).to_string(),
        result.base_total.to_string(),
        result.total.to_string(),
        promotion,
    ]);

    write_table(&mut out, builder, 2..6)?;

    if result.is_discounted() {
        writeln!(out, " Savings: {}", result.savings())?;
    }

    if let Some(unit) = result.effective_unit_price() {
        writeln!(out, " Effective unit price: {unit}")?;
    }

    Ok(())
}

/// Write a listing of promotions.
///
/// `presentations` is used to show the targeted presentation by name; ids
/// without a match are shown as `#id`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_promotions<'p, 'a: 'p>(
    mut out: impl io::Write,
    presentations: &[Presentation<'_>],
    promotions: impl IntoIterator<Item = &'p Promotion<'a>>,
) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record([
        "Id",
        "Promotion",
        "Presentation",
        "Min Qty",
        "Type",
        "Benefit",
        "Schedule",
        "Channel",
        "Active",
    ]);

    for promotion in promotions {
        let presentation = presentations
            .iter()
            .find(|presentation| presentation.id == promotion.presentation)
            .map_or_else(
                || format!("#{}", promotion.presentation),
                |presentation| presentation.name.clone(),
            );

        builder.push_record([
            promotion.id.to_string(),
            promotion.name.clone(),
            presentation,
            promotion.min_quantity.to_string(),
            promotion.discount.type_as_str().to_string(),
            promotion.discount.to_string(),
            promotion.schedule.to_string(),
            promotion.channel.to_string(),
            if promotion.is_active { "yes" } else { "no" }.to_string(),
        ]);
    }

    write_table(&mut out, builder, 3..4)
}

fn write_table(
    out: &mut impl io::Write,
    builder: Builder,
    numeric: Range<usize>,
) -> Result<(), ReceiptError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(
        1,
        HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
    );

    table.with(theme);
    table.modify(Rows::first(), Alignment::center());
    table.modify(Columns::new(numeric), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}
