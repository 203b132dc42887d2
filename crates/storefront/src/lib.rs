//! Shopfront Storefront - the client side of the shop.
//!
//! Everything the browser frontend did that was not DOM glue lives here:
//!
//! - [`client`] - API client with degrade-to-mock fallback
//! - [`catalog`] - Category filtering and sorting of fetched products
//! - [`cart`] - Local cart state persisted through a pluggable storage
//!   backend, one snapshot entry per unit
//! - [`mock`] - The bundled fallback catalog
//!
//! The cart is entirely client-local: nothing here synchronizes with the
//! backend store, and stock quantities are never reserved or decremented.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod client;
pub mod mock;
