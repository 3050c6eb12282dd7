//! Artworks

use std::fmt;

use jiff::Timestamp;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

/// Unique catalog key for an artwork.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtworkId(String);

impl ArtworkId {
    /// Create a new artwork id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArtworkId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ArtworkId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// How an artwork is delivered to the buyer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkType {
    /// Delivered as a download.
    Digital,

    /// Shipped to the buyer.
    Physical,
}

impl ArtworkType {
    /// Storefront label for this delivery type.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Digital => "Digital Download",
            Self::Physical => "Physical",
        }
    }

    /// Parse a gallery query parameter, case-insensitively.
    ///
    /// `"All"` or an unrecognised value clears the filter.
    #[must_use]
    pub fn from_param(param: &str) -> Option<Self> {
        match param.to_ascii_lowercase().as_str() {
            "digital" => Some(Self::Digital),
            "physical" => Some(Self::Physical),
            _ => None,
        }
    }
}

/// Catalog category an artwork is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtworkCategory {
    /// Original paintings.
    Paintings,

    /// Digital art prints and downloads.
    #[serde(rename = "Digital Art")]
    DigitalArt,

    /// Custom logo commissions.
    Logos,
}

impl ArtworkCategory {
    /// Parse a gallery query parameter.
    ///
    /// `"All"` or an unrecognised value clears the filter.
    #[must_use]
    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "Paintings" => Some(Self::Paintings),
            "Digital Art" => Some(Self::DigitalArt),
            "Logos" => Some(Self::Logos),
            _ => None,
        }
    }
}

impl fmt::Display for ArtworkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Paintings => "Paintings",
            Self::DigitalArt => "Digital Art",
            Self::Logos => "Logos",
        })
    }
}

/// Immutable catalog snapshot of a single artwork.
///
/// The cart denormalizes a clone of this record at the moment a line is
/// added; later catalog changes do not propagate into existing cart lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    /// Unique catalog key.
    pub id: ArtworkId,

    /// Display title.
    pub title: String,

    /// Longer description shown on the artwork page.
    pub description: Option<String>,

    /// Catalog category.
    pub category: Option<ArtworkCategory>,

    /// Listed price.
    pub price: Money<'static, Currency>,

    /// Delivery type.
    pub kind: ArtworkType,

    /// Units in stock; `None` means unlimited.
    pub stock_quantity: Option<u32>,

    /// Original image URL.
    pub image_url: String,

    /// Watermarked preview URL shown in the gallery.
    pub watermarked_url: String,

    /// Featured on the landing page.
    pub is_featured: bool,

    /// Visible in the gallery.
    pub is_active: bool,

    /// When the artwork was listed.
    pub created_at: Timestamp,

    /// When the listing was last updated.
    pub updated_at: Timestamp,
}

impl Artwork {
    /// Minimal active catalog entry with the given id, title, price and
    /// delivery type. All other fields are left empty.
    #[must_use]
    pub fn new(
        id: impl Into<ArtworkId>,
        title: impl Into<String>,
        price: Money<'static, Currency>,
        kind: ArtworkType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            category: None,
            price,
            kind,
            stock_quantity: None,
            image_url: String::new(),
            watermarked_url: String::new(),
            is_featured: false,
            is_active: true,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}
