//! Gallery
//!
//! Filtering and sorting for the public gallery grid, mirroring the
//! storefront's query parameters (`category`, `type`, `sort`).

use std::cmp::Reverse;

use crate::artworks::{Artwork, ArtworkCategory, ArtworkType};

/// Sort order for the gallery grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GallerySort {
    /// Most recently listed first.
    #[default]
    Newest,

    /// Cheapest first.
    PriceAsc,

    /// Most expensive first.
    PriceDesc,
}

impl GallerySort {
    /// Parse a `sort` query parameter; anything unrecognised sorts newest-first.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("price_asc") => Self::PriceAsc,
            Some("price_desc") => Self::PriceDesc,
            _ => Self::Newest,
        }
    }

    /// The query-parameter value for this sort.
    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
        }
    }
}

/// Active gallery filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryFilter {
    /// Only show artworks in this category.
    pub category: Option<ArtworkCategory>,

    /// Only show artworks with this delivery type.
    pub kind: Option<ArtworkType>,

    /// Sort order.
    pub sort: GallerySort,
}

impl GalleryFilter {
    /// Build a filter from raw query parameters.
    ///
    /// `"All"` and unrecognised values clear their filter, matching how the
    /// storefront drops those parameters from the URL.
    #[must_use]
    pub fn from_params(
        category: Option<&str>,
        kind: Option<&str>,
        sort: Option<&str>,
    ) -> Self {
        Self {
            category: category.and_then(ArtworkCategory::from_param),
            kind: kind.and_then(ArtworkType::from_param),
            sort: GallerySort::from_param(sort),
        }
    }

    /// Apply the filter to a catalog slice.
    ///
    /// Inactive artworks are always dropped; the remainder is filtered and
    /// sorted. Prices are compared by minor units.
    #[must_use]
    pub fn apply<'a>(&self, artworks: &'a [Artwork]) -> Vec<&'a Artwork> {
        let mut matches: Vec<&Artwork> = artworks
            .iter()
            .filter(|a| a.is_active)
            .filter(|a| self.category.is_none_or(|category| a.category == Some(category)))
            .filter(|a| self.kind.is_none_or(|kind| a.kind == kind))
            .collect();

        match self.sort {
            GallerySort::Newest => matches.sort_by_key(|a| Reverse(a.created_at)),
            GallerySort::PriceAsc => matches.sort_by_key(|a| a.price.to_minor_units()),
            GallerySort::PriceDesc => matches.sort_by_key(|a| Reverse(a.price.to_minor_units())),
        }

        matches
    }
}
