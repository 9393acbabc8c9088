//! Cart, pricing, and checkout domain logic for Tavola.
//!
//! This crate provides the storefront's cart computation core:
//!
//! - **Catalog**: product and variant snapshot types the cart prices from
//! - **Cart**: line items, mutation API, derived totals with fixed-rate tax
//! - **Checkout**: order numbers and the order-draft payload built from a cart
//!
//! With the `storage` feature (default), [`cart::CartSession`] pairs a
//! cart with a `tavola-store` key-value store and persists a full
//! snapshot after every mutation.
//!
//! # Example
//!
//! ```rust
//! use tavola_commerce::prelude::*;
//!
//! let product = Product::new("margherita", "Margherita Pizza", Money::new(1200, Currency::USD));
//!
//! let mut cart = Cart::new();
//! cart.add_item(&product, None, 2).unwrap();
//!
//! let totals = cart.totals().unwrap();
//! assert_eq!(totals.subtotal.amount_cents, 2400);
//! assert_eq!(totals.tax.amount_cents, 120); // 5% GST
//! assert_eq!(totals.total.amount_cents, 2520);
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod tax;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use tax::TaxRate;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::tax::TaxRate;

    // Catalog
    pub use crate::catalog::{Product, ProductStatus, ProductVariant};

    // Cart
    pub use crate::cart::{Cart, CartTotals, LineItem};
    #[cfg(feature = "storage")]
    pub use crate::cart::CartSession;

    // Checkout
    pub use crate::checkout::{OrderDraft, OrderDraftLine, OrderNumber};
}
