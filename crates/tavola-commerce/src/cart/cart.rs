//! Cart and line item types.

use crate::cart::totals::{self, CartTotals};
use crate::catalog::{Product, ProductVariant};
use crate::error::CommerceError;
use crate::ids::{LineItemId, ProductId, VariantId};
use crate::money::{Currency, Money};
use crate::tax::TaxRate;
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Items keep insertion order for display; uniqueness is enforced on
/// the deterministic line id, so re-adding the same product+variant
/// updates the existing line. Totals are never stored — they are
/// recomputed from `items` on every read, so no stored figure can
/// drift out of sync.
///
/// A `Cart` is a plain value owned by the caller; there is no global
/// instance, and independent carts coexist freely (one per session,
/// many in tests).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart, insertion order preserved.
    items: Vec<LineItem>,
    /// Cart currency.
    currency: Currency,
    /// Fixed tax rate applied to the subtotal.
    tax_rate: TaxRate,
}

impl Cart {
    /// Create an empty cart with the default currency and 5% GST.
    pub fn new() -> Self {
        Self::with_config(Currency::default(), TaxRate::default())
    }

    /// Create an empty cart with an explicit currency and tax rate.
    pub fn with_config(currency: Currency, tax_rate: TaxRate) -> Self {
        Self {
            items: Vec::new(),
            currency,
            tax_rate,
        }
    }

    /// Rebuild a cart from a persisted item snapshot.
    pub(crate) fn restore(items: Vec<LineItem>, currency: Currency, tax_rate: TaxRate) -> Self {
        Self {
            items,
            currency,
            tax_rate,
        }
    }

    /// Add a product (optionally a specific variant) to the cart.
    ///
    /// The unit price is captured from the product/variant now; later
    /// catalog price changes do not retroactively alter the line. If a
    /// line for the same product+variant already exists, its quantity
    /// is incremented by `quantity`.
    ///
    /// Returns an error if:
    /// - `quantity` is not positive
    /// - the product is priced in a different currency than the cart
    pub fn add_item(
        &mut self,
        product: &Product,
        variant: Option<&ProductVariant>,
        quantity: i64,
    ) -> Result<LineItemId, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let unit_price = product.unit_price(variant);
        if unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.currency.code().to_string(),
            });
        }

        let id = LineItemId::for_selection(&product.id, variant.map(|v| &v.id));

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == id) {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            return Ok(id);
        }

        self.items.push(LineItem {
            id: id.clone(),
            product_id: product.id.clone(),
            variant_id: variant.map(|v| v.id.clone()),
            name: product.name.clone(),
            variant_name: variant.map(|v| v.name.clone()),
            image_url: product.image_url.clone(),
            unit_price,
            quantity,
        });
        Ok(id)
    }

    /// Set a line's quantity exactly.
    ///
    /// A quantity of zero or less removes the line. Updating a line
    /// that is not in the cart (with a positive quantity) is a
    /// [`CommerceError::LineNotFound`].
    pub fn update_quantity(
        &mut self,
        line_item_id: &LineItemId,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        if quantity <= 0 {
            self.remove_item(line_item_id);
            return Ok(());
        }

        match self.items.iter_mut().find(|i| &i.id == line_item_id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(())
            }
            None => Err(CommerceError::LineNotFound(
                line_item_id.as_str().to_string(),
            )),
        }
    }

    /// Remove a line from the cart.
    ///
    /// Removing a line that is not present is a no-op; returns whether
    /// anything was removed.
    pub fn remove_item(&mut self, line_item_id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != line_item_id);
        self.items.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a line by ID.
    pub fn get_item(&self, line_item_id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == line_item_id)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The cart's tax rate.
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Compute the derived totals from the current items.
    pub fn totals(&self) -> Result<CartTotals, CommerceError> {
        totals::compute(&self.items, self.currency, self.tax_rate)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Deterministic line identifier, derived from product+variant.
    pub id: LineItemId,
    /// Product being purchased.
    pub product_id: ProductId,
    /// Selected variant, if any.
    pub variant_id: Option<VariantId>,
    /// Product name (denormalized for display).
    pub name: String,
    /// Variant name (e.g., "Large").
    pub variant_name: Option<String>,
    /// Image URL (denormalized for display).
    pub image_url: Option<String>,
    /// Unit price captured at the time the item was added.
    pub unit_price: Money,
    /// Quantity, always positive.
    pub quantity: i64,
}

impl LineItem {
    /// This line's contribution to the subtotal (unit price × quantity).
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza() -> Product {
        Product::new("margherita", "Margherita Pizza", Money::new(1000, Currency::USD))
    }

    fn pizza_large() -> ProductVariant {
        ProductVariant::new(
            "large",
            ProductId::new("margherita"),
            "Large",
            Money::new(1400, Currency::USD),
        )
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        let id = cart.add_item(&pizza(), None, 2).unwrap();
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get_item(&id).unwrap().unit_price.amount_cents, 1000);
    }

    #[test]
    fn test_add_same_selection_merges_lines() {
        let mut cart = Cart::new();
        let a = cart.add_item(&pizza(), None, 2).unwrap();
        let b = cart.add_item(&pizza(), None, 3).unwrap();
        assert_eq!(a, b);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_variant_gets_its_own_line() {
        let mut cart = Cart::new();
        cart.add_item(&pizza(), None, 1).unwrap();
        cart.add_item(&pizza(), Some(&pizza_large()), 1).unwrap();
        assert_eq!(cart.unique_item_count(), 2);
    }

    #[test]
    fn test_display_fields_denormalized_onto_line() {
        let mut cart = Cart::new();
        let product = pizza().with_image("https://img.example/margherita.jpg");
        let id = cart.add_item(&product, Some(&pizza_large()), 1).unwrap();

        let line = cart.get_item(&id).unwrap();
        assert_eq!(line.name, "Margherita Pizza");
        assert_eq!(line.variant_name.as_deref(), Some("Large"));
        assert_eq!(
            line.image_url.as_deref(),
            Some("https://img.example/margherita.jpg")
        );
    }

    #[test]
    fn test_variant_price_is_captured() {
        let mut cart = Cart::new();
        let id = cart.add_item(&pizza(), Some(&pizza_large()), 1).unwrap();
        assert_eq!(cart.get_item(&id).unwrap().unit_price.amount_cents, 1400);
    }

    #[test]
    fn test_price_captured_at_add_time() {
        let mut cart = Cart::new();
        let mut product = pizza();
        let id = cart.add_item(&product, None, 1).unwrap();

        // Catalog price change after the add does not touch the line.
        product.price = Money::new(9900, Currency::USD);
        assert_eq!(cart.get_item(&id).unwrap().unit_price.amount_cents, 1000);
    }

    #[test]
    fn test_add_zero_quantity_fails() {
        let mut cart = Cart::new();
        let err = cart.add_item(&pizza(), None, 0).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidQuantity(0)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_negative_quantity_fails() {
        let mut cart = Cart::new();
        assert!(cart.add_item(&pizza(), None, -3).is_err());
    }

    #[test]
    fn test_update_quantity_sets_exactly() {
        let mut cart = Cart::new();
        let id = cart.add_item(&pizza(), None, 2).unwrap();
        cart.update_quantity(&id, 5).unwrap();
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        let id = cart.add_item(&pizza(), None, 2).unwrap();
        cart.update_quantity(&id, 0).unwrap();
        assert!(cart.get_item(&id).is_none());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_update_missing_line_fails() {
        let mut cart = Cart::new();
        let err = cart
            .update_quantity(&LineItemId::new("ghost"), 3)
            .unwrap_err();
        assert!(matches!(err, CommerceError::LineNotFound(_)));
    }

    #[test]
    fn test_update_missing_line_with_zero_is_noop() {
        let mut cart = Cart::new();
        cart.update_quantity(&LineItemId::new("ghost"), 0).unwrap();
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.remove_item(&LineItemId::new("ghost")));
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        let id = cart.add_item(&pizza(), None, 1).unwrap();
        assert!(cart.remove_item(&id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&pizza(), None, 1).unwrap();
        cart.add_item(&pizza(), Some(&pizza_large()), 2).unwrap();
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        let soup = Product::new("soup", "Pumpkin Soup", Money::new(800, Currency::USD));
        cart.add_item(&pizza(), None, 1).unwrap();
        cart.add_item(&soup, None, 1).unwrap();
        let names: Vec<_> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Margherita Pizza", "Pumpkin Soup"]);
    }

    #[test]
    fn test_add_accepts_any_positive_quantity() {
        let mut cart = Cart::new();
        cart.add_item(&pizza(), None, 1000).unwrap();
        assert_eq!(cart.item_count(), 1000);
    }

    #[test]
    fn test_update_accepts_any_positive_quantity() {
        let mut cart = Cart::new();
        let id = cart.add_item(&pizza(), None, 2).unwrap();
        cart.update_quantity(&id, 1000).unwrap();
        assert_eq!(cart.get_item(&id).unwrap().quantity, 1000);
    }

    #[test]
    fn test_merge_overflow_leaves_line_untouched() {
        let mut cart = Cart::new();
        cart.add_item(&pizza(), None, i64::MAX).unwrap();
        assert!(matches!(
            cart.add_item(&pizza(), None, 1).unwrap_err(),
            CommerceError::Overflow
        ));
        assert_eq!(cart.item_count(), i64::MAX);
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut cart = Cart::with_config(Currency::USD, TaxRate::GST);
        let euro_dish = Product::new("tarte", "Tarte Flambée", Money::new(900, Currency::EUR));
        let err = cart.add_item(&euro_dish, None, 1).unwrap_err();
        assert!(matches!(err, CommerceError::CurrencyMismatch { .. }));
    }
}
