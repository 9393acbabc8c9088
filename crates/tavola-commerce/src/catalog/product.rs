//! Product and variant snapshot types.

use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product status in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductStatus {
    /// Product is in draft mode, not visible to customers.
    Draft,
    /// Product is active and visible.
    #[default]
    Active,
    /// Product is archived, not visible but data preserved.
    Archived,
}

/// A product as the cart sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Base price, used when no variant is selected.
    pub price: Money,
    /// Primary image URL.
    pub image_url: Option<String>,
    /// Product visibility status.
    pub status: ProductStatus,
}

impl Product {
    /// Create an active product.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image_url: None,
            status: ProductStatus::Active,
        }
    }

    /// Set the primary image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Check if the product is available for purchase.
    pub fn is_available(&self) -> bool {
        self.status == ProductStatus::Active
    }

    /// Resolve the effective unit price for a selection.
    ///
    /// Variant price wins when a variant is selected; otherwise the
    /// product's base price applies.
    pub fn unit_price(&self, variant: Option<&ProductVariant>) -> Money {
        variant.map(|v| v.price).unwrap_or(self.price)
    }
}

/// A product variant (e.g., "Large", "Extra cheese").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Parent product ID.
    pub product_id: ProductId,
    /// Variant name (e.g., "Large").
    pub name: String,
    /// Price of this variant.
    pub price: Money,
}

impl ProductVariant {
    /// Create a new variant.
    pub fn new(
        id: impl Into<VariantId>,
        product_id: ProductId,
        name: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            product_id,
            name: name.into(),
            price,
        }
    }
}
