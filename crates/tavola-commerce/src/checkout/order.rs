//! Order numbers and order drafts.

use crate::cart::{Cart, CartTotals, LineItem};
use crate::error::CommerceError;
use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A human-readable order number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Generate a new order number.
    ///
    /// Format: `TV-<unix-seconds>-<counter>`, e.g. `TV-1724371200-0042`.
    /// The per-process counter keeps numbers distinct within a second.
    pub fn generate() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        use std::time::{SystemTime, UNIX_EPOCH};

        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

        Self(format!("TV-{}-{:04}", timestamp, counter % 10_000))
    }

    /// Get the order number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of an order draft, copied from a cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraftLine {
    /// Product being ordered.
    pub product_id: ProductId,
    /// Selected variant, if any.
    pub variant_id: Option<VariantId>,
    /// Display name at order time.
    pub name: String,
    /// Unit price captured in the cart.
    pub unit_price: Money,
    /// Quantity ordered.
    pub quantity: i64,
}

impl From<&LineItem> for OrderDraftLine {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            variant_id: item.variant_id.clone(),
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity: item.quantity,
        }
    }
}

/// The order-creation request payload sent to the order-management API.
///
/// Building a draft does not clear the cart; the caller clears it only
/// after the order API confirms success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    /// Human-readable order number.
    pub order_number: OrderNumber,
    /// Lines copied from the cart.
    pub lines: Vec<OrderDraftLine>,
    /// Totals computed from the cart at draft time.
    pub totals: CartTotals,
}

impl OrderDraft {
    /// Build a draft from the cart's current items and totals.
    ///
    /// Fails with [`CommerceError::EmptyCart`] when there is nothing
    /// to order.
    pub fn from_cart(cart: &Cart) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        let totals = cart.totals()?;
        Ok(Self {
            order_number: OrderNumber::generate(),
            lines: cart.items().iter().map(OrderDraftLine::from).collect(),
            totals,
        })
    }
}
