//! Fixtures
//!
//! YAML-backed catalog fixtures for tests and demos. Prices are written as
//! `"<amount> <currency>"` strings, e.g. `"25.50 USD"`.

use std::{fs, path::Path};

use jiff::Timestamp;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashSet;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;
use thiserror::Error;

use crate::artworks::{Artwork, ArtworkCategory, ArtworkId, ArtworkType};

/// Fixture parsing errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Two artworks in the same fixture share an id
    #[error("Duplicate artwork id: {0}")]
    DuplicateArtwork(ArtworkId),
}

/// Catalog fixture file
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Artworks in the catalog
    pub artworks: Vec<ArtworkFixture>,
}

/// A single artwork entry in a catalog fixture
#[derive(Debug, Deserialize)]
pub struct ArtworkFixture {
    /// Unique id
    pub id: String,

    /// Display title
    pub title: String,

    /// Longer description
    #[serde(default)]
    pub description: Option<String>,

    /// Category label (`Paintings`, `Digital Art`, `Logos`)
    #[serde(default)]
    pub category: Option<ArtworkCategory>,

    /// Price as `"<amount> <currency>"`
    pub price: String,

    /// Delivery type
    #[serde(rename = "type")]
    pub kind: ArtworkType,

    /// Units in stock; omit for unlimited
    #[serde(default)]
    pub stock_quantity: Option<u32>,

    /// Original image URL
    #[serde(default)]
    pub image_url: String,

    /// Watermarked preview URL
    #[serde(default)]
    pub watermarked_url: String,

    /// Featured on the landing page
    #[serde(default)]
    pub is_featured: bool,

    /// Visible in the gallery
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// When the artwork was listed
    #[serde(default)]
    pub created_at: Option<Timestamp>,

    /// When the listing was last updated
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

fn default_active() -> bool {
    true
}

impl TryFrom<ArtworkFixture> for Artwork {
    type Error = FixtureError;

    fn try_from(fixture: ArtworkFixture) -> Result<Self, FixtureError> {
        let price = parse_price(&fixture.price)?;

        Ok(Artwork {
            id: ArtworkId::new(fixture.id),
            title: fixture.title,
            description: fixture.description,
            category: fixture.category,
            price,
            kind: fixture.kind,
            stock_quantity: fixture.stock_quantity,
            image_url: fixture.image_url,
            watermarked_url: fixture.watermarked_url,
            is_featured: fixture.is_featured,
            is_active: fixture.is_active,
            created_at: fixture.created_at.unwrap_or(Timestamp::UNIX_EPOCH),
            updated_at: fixture.updated_at.unwrap_or(Timestamp::UNIX_EPOCH),
        })
    }
}

/// Parse a fixture price string like `"25.50 USD"`.
///
/// # Errors
///
/// - [`FixtureError::InvalidPrice`]: The string is not `"<amount> <currency>"`
///   or the amount is not a decimal number.
/// - [`FixtureError::UnknownCurrency`]: The currency code is not supported.
pub fn parse_price(raw: &str) -> Result<Money<'static, Currency>, FixtureError> {
    let parts: Vec<&str> = raw.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {raw}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(raw.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(raw.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok(Money::from_minor(minor_units, currency))
}

/// Load a catalog fixture from a YAML file.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the file cannot be read or parsed, or if
/// two artworks share an id.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Artwork>, FixtureError> {
    catalog_from_str(&fs::read_to_string(path)?)
}

/// Parse a catalog fixture from a YAML string.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the YAML cannot be parsed, a price or
/// currency is invalid, or two artworks share an id.
pub fn catalog_from_str(yaml: &str) -> Result<Vec<Artwork>, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    let mut seen = FxHashSet::default();
    let mut artworks = Vec::with_capacity(fixture.artworks.len());

    for entry in fixture.artworks {
        let artwork = Artwork::try_from(entry)?;

        if !seen.insert(artwork.id.clone()) {
            return Err(FixtureError::DuplicateArtwork(artwork.id));
        }

        artworks.push(artwork);
    }

    Ok(artworks)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    const CATALOG: &str = r#"
artworks:
  - id: dusk
    title: Dusk Over The Harbour
    category: Paintings
    price: "120.00 USD"
    type: physical
    stock_quantity: 1
    is_featured: true
    created_at: "2025-03-01T12:00:00Z"
  - id: ember-logo
    title: Ember Logo Pack
    category: Logos
    price: "25.50 USD"
    type: digital
"#;

    #[test]
    fn parse_price_reads_amount_and_currency() -> TestResult {
        assert_eq!(parse_price("25.50 USD")?, Money::from_minor(2550, USD));

        Ok(())
    }

    #[test]
    fn parse_price_without_currency_errors() {
        assert!(matches!(
            parse_price("25.50"),
            Err(FixtureError::InvalidPrice(_))
        ));
    }

    #[test]
    fn parse_price_with_unknown_currency_errors() {
        assert!(matches!(
            parse_price("25.50 ZZZ"),
            Err(FixtureError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn parse_price_with_bad_amount_errors() {
        assert!(matches!(
            parse_price("twenty USD"),
            Err(FixtureError::InvalidPrice(_))
        ));
    }

    #[test]
    fn catalog_parses_with_defaults_applied() -> TestResult {
        let artworks = catalog_from_str(CATALOG)?;

        assert_eq!(artworks.len(), 2);

        let dusk = artworks.first().ok_or("missing first artwork")?;
        assert_eq!(dusk.price, Money::from_minor(12000, USD));
        assert_eq!(dusk.kind, ArtworkType::Physical);
        assert_eq!(dusk.stock_quantity, Some(1));
        assert!(dusk.is_featured);
        assert!(dusk.is_active, "is_active defaults to true");

        let logo = artworks.get(1).ok_or("missing second artwork")?;
        assert_eq!(logo.category, Some(ArtworkCategory::Logos));
        assert_eq!(logo.stock_quantity, None);
        assert_eq!(logo.created_at, Timestamp::UNIX_EPOCH);

        Ok(())
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let yaml = r#"
artworks:
  - id: dusk
    title: Dusk
    price: "10.00 USD"
    type: physical
  - id: dusk
    title: Dusk Again
    price: "12.00 USD"
    type: physical
"#;

        assert!(matches!(
            catalog_from_str(yaml),
            Err(FixtureError::DuplicateArtwork(id)) if id.as_str() == "dusk"
        ));
    }
}
