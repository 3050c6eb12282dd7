//! Cart

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    artworks::{Artwork, ArtworkId},
    pricing::{TotalPriceError, total_price},
};

/// Errors related to cart mutation.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// An artwork's currency differs from the cart currency (artwork id, artwork currency, cart currency).
    #[error("Artwork {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ArtworkId, &'static str, &'static str),
}

/// One distinct product line in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    artwork: Artwork,
    quantity: u32,
}

impl CartItem {
    /// Create a new line for the given artwork snapshot.
    #[must_use]
    pub fn new(artwork: Artwork, quantity: u32) -> Self {
        Self { artwork, quantity }
    }

    /// The artwork snapshot captured when this line was first added.
    #[must_use]
    pub fn artwork(&self) -> &Artwork {
        &self.artwork
    }

    /// Number of units of this artwork.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Ordered collection of cart lines with a fixed currency.
///
/// At most one line exists per distinct artwork id; re-adding an artwork
/// merges into the existing line, keeping its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
    currency: &'static Currency,
}

impl Cart {
    /// Create a new empty cart in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` units of an artwork.
    ///
    /// If a line for the same artwork id already exists its quantity is
    /// incremented in place; otherwise a new line is appended. Adding zero
    /// units leaves the cart unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::CurrencyMismatch`] when the artwork is priced in
    /// a different currency than the cart.
    pub fn add(&mut self, artwork: Artwork, quantity: u32) -> Result<(), CartError> {
        let artwork_currency = artwork.price.currency();

        if artwork_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                artwork.id,
                artwork_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if quantity == 0 {
            return Ok(());
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.artwork.id == artwork.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartItem::new(artwork, quantity));
        }

        Ok(())
    }

    /// Delete the line for the given artwork id; no-op when absent.
    pub fn remove(&mut self, id: &ArtworkId) {
        self.items.retain(|i| &i.artwork.id != id);
    }

    /// Replace the quantity of the line for the given artwork id, keeping
    /// its position. Zero removes the line entirely; an unknown id is a
    /// no-op.
    pub fn set_quantity(&mut self, id: &ArtworkId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.artwork.id == id) {
            item.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get the line for the given artwork id.
    #[must_use]
    pub fn get(&self, id: &ArtworkId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.artwork.id == id)
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |sum, item| sum.saturating_add(item.quantity))
    }

    /// Total price of the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if there was a money arithmetic or
    /// currency mismatch error.
    pub fn total_price(&self) -> Result<Money<'static, Currency>, TotalPriceError> {
        if self.is_empty() {
            return Ok(Money::from_minor(0, self.currency));
        }

        total_price(&self.items)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
