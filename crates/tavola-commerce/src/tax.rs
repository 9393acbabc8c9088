//! Fixed-rate tax computation.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A tax rate in basis points (1 bp = 0.01%).
///
/// Basis points keep the rate exact in integer arithmetic; 5% GST is
/// `TaxRate::GST` = 500 bp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// 5% GST, the storefront default.
    pub const GST: TaxRate = TaxRate(500);

    /// Zero tax.
    pub const ZERO: TaxRate = TaxRate(0);

    /// Create a rate from basis points.
    pub fn from_basis_points(bps: u32) -> Self {
        Self(bps)
    }

    /// The rate in basis points.
    pub fn basis_points(&self) -> u32 {
        self.0
    }

    /// The rate as a fraction (e.g., 0.05). Display only.
    pub fn as_fraction(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }

    /// Apply the rate to an amount, rounding half-up on the smallest
    /// currency unit.
    ///
    /// ```
    /// use tavola_commerce::{Money, Currency, TaxRate};
    /// let subtotal = Money::new(2000, Currency::USD); // $20.00
    /// assert_eq!(TaxRate::GST.apply(&subtotal).amount_cents, 100); // $1.00
    /// ```
    pub fn apply(&self, amount: &Money) -> Money {
        let scaled = amount.amount_cents as i128 * self.0 as i128;
        // Half-up: add half the divisor before truncating.
        let rounded = (scaled + 5_000) / 10_000;
        Money::new(rounded as i64, amount.currency)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::GST
    }
}
