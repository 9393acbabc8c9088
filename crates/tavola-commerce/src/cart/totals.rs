//! Derived cart totals.
//!
//! Pure computation over a line-item slice. Nothing here mutates or
//! stores state, so calling it twice on the same items always yields
//! identical results.

use crate::cart::LineItem;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use crate::tax::TaxRate;
use serde::{Deserialize, Serialize};

/// The derived totals of a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of unit price × quantity over all lines.
    pub subtotal: Money,
    /// Tax on the subtotal at the cart's fixed rate, rounded half-up.
    pub tax: Money,
    /// Subtotal plus tax.
    pub total: Money,
    /// Sum of quantities over all lines.
    pub item_count: i64,
}

impl CartTotals {
    /// All-zero totals in the given currency.
    pub fn empty(currency: Currency) -> Self {
        Self {
            subtotal: Money::zero(currency),
            tax: Money::zero(currency),
            total: Money::zero(currency),
            item_count: 0,
        }
    }
}

/// Compute totals for a line-item slice.
///
/// Empty input yields all-zero totals. The only failure mode is i64
/// overflow in the cents arithmetic.
pub(crate) fn compute(
    items: &[LineItem],
    currency: Currency,
    tax_rate: TaxRate,
) -> Result<CartTotals, CommerceError> {
    let mut subtotal = Money::zero(currency);
    for item in items {
        let line = item.subtotal()?;
        subtotal = subtotal.try_add(&line).ok_or(CommerceError::Overflow)?;
    }

    let tax = tax_rate.apply(&subtotal);
    let total = subtotal.try_add(&tax).ok_or(CommerceError::Overflow)?;

    let item_count = items
        .iter()
        .try_fold(0i64, |acc, i| acc.checked_add(i.quantity))
        .ok_or(CommerceError::Overflow)?;

    Ok(CartTotals {
        subtotal,
        tax,
        total,
        item_count,
    })
}
