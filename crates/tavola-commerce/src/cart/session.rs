//! Storage-backed cart session.

use crate::cart::{Cart, CartTotals, LineItem};
use crate::catalog::{Product, ProductVariant};
use crate::error::CommerceError;
use crate::ids::LineItemId;
use crate::money::Currency;
use crate::tax::TaxRate;
use tavola_store::{store_key, SessionId, Store};

/// A cart bound to a session, persisted as a full snapshot after
/// every mutation.
///
/// Persistence is best-effort: a snapshot that fails to parse on open
/// is logged and replaced with an empty cart, and a failed write is
/// logged while the in-memory cart stays authoritative for the rest
/// of the session. Neither condition surfaces to the caller.
///
/// Single writer per session is assumed. Two sessions opened over the
/// same key (multiple tabs) race last-write-wins; there is no merge.
pub struct CartSession {
    cart: Cart,
    store: Store,
    key: String,
}

impl CartSession {
    /// Open the cart for a session, restoring any persisted items.
    pub fn open(store: Store, session_id: &SessionId) -> Self {
        Self::open_with_config(store, session_id, Currency::default(), TaxRate::default())
    }

    /// Open with an explicit currency and tax rate.
    pub fn open_with_config(
        store: Store,
        session_id: &SessionId,
        currency: Currency,
        tax_rate: TaxRate,
    ) -> Self {
        let key = store_key!("cart", session_id);
        let items = match store.get::<Vec<LineItem>>(&key) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "stored cart unreadable, starting empty");
                Vec::new()
            }
        };
        Self {
            cart: Cart::restore(items, currency, tax_rate),
            store,
            key,
        }
    }

    /// Add a product to the cart and persist the new state.
    pub fn add_item(
        &mut self,
        product: &Product,
        variant: Option<&ProductVariant>,
        quantity: i64,
    ) -> Result<LineItemId, CommerceError> {
        let id = self.cart.add_item(product, variant, quantity)?;
        self.persist();
        Ok(id)
    }

    /// Set a line's quantity and persist the new state.
    pub fn update_quantity(
        &mut self,
        line_item_id: &LineItemId,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        self.cart.update_quantity(line_item_id, quantity)?;
        self.persist();
        Ok(())
    }

    /// Remove a line and persist the new state.
    ///
    /// Removing an absent line does not touch storage.
    pub fn remove_item(&mut self, line_item_id: &LineItemId) -> bool {
        let removed = self.cart.remove_item(line_item_id);
        if removed {
            self.persist();
        }
        removed
    }

    /// Empty the cart and persist the empty state.
    ///
    /// Called by the checkout flow only after the order-management API
    /// confirms order success.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// The underlying cart, read-only.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Get a line by ID.
    pub fn get_item(&self, line_item_id: &LineItemId) -> Option<&LineItem> {
        self.cart.get_item(line_item_id)
    }

    /// Derived totals of the current cart.
    pub fn totals(&self) -> Result<CartTotals, CommerceError> {
        self.cart.totals()
    }

    /// Write the full item snapshot.
    ///
    /// A failed write is logged and swallowed; the in-memory cart
    /// remains the source of truth for this session.
    fn persist(&self) {
        if let Err(e) = self.store.set(&self.key, &self.cart.items()) {
            tracing::error!(key = %self.key, error = %e, "cart persistence failed, keeping in-memory state");
        }
    }
}
