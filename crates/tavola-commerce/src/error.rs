//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart and checkout operations.
///
/// All of these are local and recoverable; nothing here should take
/// down the hosting application. Persistence failures in particular
/// are handled inside [`crate::cart::CartSession`] and never surface
/// through this enum.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Requested quantity was not positive.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// A quantity update targeted a line that is not in the cart.
    #[error("Line item not in cart: {0}")]
    LineNotFound(String),

    /// Order draft requested from an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow in money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
