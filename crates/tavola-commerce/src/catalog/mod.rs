//! Product catalog module.
//!
//! Snapshot types for products and variants as the cart consumes them.
//! The catalog of record lives in the external data store; these types
//! carry the fields the cart needs to price and display a line.

mod product;

pub use product::{Product, ProductStatus, ProductVariant};
