//! Blaze
//!
//! Blaze is the commerce core for an independent artist's storefront: a catalog
//! data model, an observable client-side cart store with identity-stable
//! snapshots, gallery filtering, watermarked media URLs and order drafting.

pub mod artworks;
pub mod cart;
pub mod fixtures;
pub mod gallery;
pub mod media;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod store;
