//! Blaze prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    artworks::{Artwork, ArtworkCategory, ArtworkId, ArtworkType},
    cart::{Cart, CartError, CartItem},
    fixtures::{FixtureError, catalog_from_str, load_catalog},
    gallery::{GalleryFilter, GallerySort},
    media::Watermark,
    orders::{Order, OrderDraft, OrderItem, OrderStatus, ShippingAddress},
    pricing::TotalPriceError,
    receipt::{ReceiptError, write_summary},
    store::{CartSnapshot, CartStore, MissingStoreError, StoreContext, Subscription},
};
