//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::cart::CartItem;

/// Errors that can occur while totalling cart lines.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// No lines were provided, so currency could not be determined.
    #[error("no items provided; cannot determine currency")]
    NoItems,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Price of a single cart line: unit price times quantity.
#[must_use]
pub fn line_total(item: &CartItem) -> Money<'static, Currency> {
    let minor_units = item
        .artwork()
        .price
        .to_minor_units()
        .saturating_mul(i64::from(item.quantity()));

    Money::from_minor(minor_units, item.artwork().price.currency())
}

/// Calculates the total price of a list of cart lines.
///
/// # Errors
///
/// - [`TotalPriceError::NoItems`]: No lines were provided, so currency could not be determined.
/// - [`TotalPriceError::Money`]: Wrapped money arithmetic or currency mismatch error.
pub fn total_price(items: &[CartItem]) -> Result<Money<'static, Currency>, TotalPriceError> {
    let first = items.first().ok_or(TotalPriceError::NoItems)?;

    let total = items.iter().try_fold(
        Money::from_minor(0, first.artwork().price.currency()),
        |acc, item| acc.add(line_total(item)),
    )?;

    Ok(total)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::artworks::{Artwork, ArtworkType};

    use super::*;

    fn line(id: &str, minor: i64, quantity: u32) -> CartItem {
        CartItem::new(
            Artwork::new(id, id, Money::from_minor(minor, iso::USD), ArtworkType::Digital),
            quantity,
        )
    }

    #[test]
    fn line_total_multiplies_unit_price_by_quantity() {
        assert_eq!(
            line_total(&line("a", 1000, 2)),
            Money::from_minor(2000, iso::USD)
        );
    }

    #[test]
    fn total_price_sums_line_totals() -> TestResult {
        let items = [line("a", 1000, 2), line("b", 2550, 1)];

        assert_eq!(total_price(&items)?, Money::from_minor(4550, iso::USD));

        Ok(())
    }

    #[test]
    fn total_price_empty_errors() {
        let items: [CartItem; 0] = [];

        assert!(matches!(total_price(&items), Err(TotalPriceError::NoItems)));
    }

    #[test]
    fn total_price_mixed_currencies_errors() {
        let items = [
            line("a", 1000, 1),
            CartItem::new(
                Artwork::new("b", "b", Money::from_minor(1000, iso::GBP), ArtworkType::Digital),
                1,
            ),
        ];

        assert!(matches!(
            total_price(&items),
            Err(TotalPriceError::Money(_))
        ));
    }
}
