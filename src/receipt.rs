//! Receipt

use std::io;

use rusty_money::MoneyError;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    cart::Cart,
    pricing::{self, TotalPriceError},
};

/// Errors that can occur when rendering a cart summary.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error totalling the cart lines.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error
    #[error("IO error")]
    Io(#[from] io::Error),
}

/// Write a line-item summary of the cart followed by its totals.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if the cart total cannot be computed or the
/// summary cannot be written.
pub fn write_summary(mut out: impl io::Write, cart: &Cart) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Type", "Qty", "Unit Price", "Line Total"]);

    for line in cart.iter() {
        builder.push_record([
            line.artwork().title.clone(),
            line.artwork().kind.label().to_string(),
            line.quantity().to_string(),
            line.artwork().price.to_string(),
            pricing::line_total(line).to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.modify(Columns::new(2..), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(out)?;
    writeln!(out, "Items: {}", cart.total_items())?;
    writeln!(out, "Total: {}", cart.total_price()?)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use crate::artworks::{Artwork, ArtworkType};

    use super::*;

    #[test]
    fn summary_lists_lines_and_totals() -> TestResult {
        let mut cart = Cart::new(USD);

        cart.add(
            Artwork::new("dusk", "Dusk", Money::from_minor(1000, USD), ArtworkType::Physical),
            2,
        )?;
        cart.add(
            Artwork::new("ember", "Ember", Money::from_minor(2550, USD), ArtworkType::Digital),
            1,
        )?;

        let mut rendered = Vec::new();
        write_summary(&mut rendered, &cart)?;
        let rendered = String::from_utf8(rendered)?;

        assert!(rendered.contains("Dusk"));
        assert!(rendered.contains("Digital Download"));
        assert!(rendered.contains("Items: 3"));
        assert!(rendered.contains("45.50"));

        Ok(())
    }

    #[test]
    fn summary_of_empty_cart_has_zero_totals() -> TestResult {
        let cart = Cart::new(USD);

        let mut rendered = Vec::new();
        write_summary(&mut rendered, &cart)?;
        let rendered = String::from_utf8(rendered)?;

        assert!(rendered.contains("Items: 0"));
        assert!(rendered.contains('0'));

        Ok(())
    }
}
