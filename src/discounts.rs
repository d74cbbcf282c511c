//! Discounts
//!
//! The discount shapes a promotion can apply to each full pack of units.

use std::fmt;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

/// Discount applied to one pack of `min_quantity` units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PackDiscount<'a> {
    /// The whole pack costs this amount (e.g., "2 for $4500")
    FixedPrice(Money<'a, Currency>),

    /// Take a percentage off the pack's full price (e.g., "10% off")
    Percentage(Percentage),

    /// Subtract an amount from the pack's full price (e.g., "$500 off")
    AmountOff(Money<'a, Currency>),
}

impl PackDiscount<'_> {
    /// Storage spelling of the discount type.
    #[must_use]
    pub const fn type_as_str(&self) -> &'static str {
        match self {
            Self::FixedPrice(_) => "fixed_price",
            Self::Percentage(_) => "percentage",
            Self::AmountOff(_) => "amount_off",
        }
    }

    /// Price of one pack after the discount, in minor units.
    ///
    /// `pack_base` is the undiscounted pack price in minor units. The result
    /// is never negative for `AmountOff`; the other shapes are not clamped
    /// here, the final total is.
    pub(crate) fn discounted_pack(&self, pack_base: Decimal) -> Decimal {
        match self {
            Self::FixedPrice(price) => Decimal::from(price.to_minor_units()),
            Self::Percentage(percent) => {
                let remaining = Decimal::ONE.saturating_sub(fraction(percent));

                pack_base.saturating_mul(remaining)
            }
            Self::AmountOff(amount) => pack_base
                .saturating_sub(Decimal::from(amount.to_minor_units()))
                .max(Decimal::ZERO),
        }
    }
}

impl fmt::Display for PackDiscount<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedPrice(price) => write!(f, "{price} combo"),
            Self::Percentage(percent) => {
                let whole = fraction(percent).saturating_mul(Decimal::ONE_HUNDRED);

                write!(f, "{}% off", whole.normalize())
            }
            Self::AmountOff(amount) => write!(f, "{amount} off"),
        }
    }
}

/// The percentage as a plain fraction (10% == 0.10).
fn fraction(percent: &Percentage) -> Decimal {
    // decimal_percentage doesn't expose the underlying Decimal
    (*percent) * Decimal::ONE
}
