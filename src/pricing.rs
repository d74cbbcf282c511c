//! Pack Pricing
//!
//! Computes a sale line's charge from its unit price and the (optional)
//! promotion chosen for it. Quantities are split into full packs of
//! `min_quantity` units, which take the promotion's discount, and a
//! remainder charged at the full unit price.
//!
//! Arithmetic runs in minor units on [`Decimal`] and is rounded once, on the
//! final total.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};

use crate::{
    presentations::Presentation,
    promotions::{Promotion, eligibility::MatchContext},
};

/// Outcome of pricing a sale line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingResult<'p, 'a> {
    /// Units priced
    pub quantity: u32,

    /// Unit price times quantity, undiscounted
    pub base_total: Money<'a, Currency>,

    /// Final charge, never negative
    pub total: Money<'a, Currency>,

    /// The promotion that was applied, if any
    pub applied: Option<&'p Promotion<'a>>,
}

impl<'p, 'a> PricingResult<'p, 'a> {
    /// A zero charge with no promotion.
    pub fn zero(currency: &'a Currency) -> Self {
        Self {
            quantity: 0,
            base_total: Money::from_minor(0, currency),
            total: Money::from_minor(0, currency),
            applied: None,
        }
    }

    /// Amount saved by the promotion.
    pub fn savings(&self) -> Money<'a, Currency> {
        let saved = self
            .base_total
            .to_minor_units()
            .saturating_sub(self.total.to_minor_units());

        Money::from_minor(saved, self.total.currency())
    }

    /// Whether a promotion lowered the charge.
    pub fn is_discounted(&self) -> bool {
        self.applied.is_some() && self.total.to_minor_units() < self.base_total.to_minor_units()
    }

    /// Effective unit price (`total / quantity`), rounded to minor units.
    ///
    /// Returns `None` for a zero quantity.
    pub fn effective_unit_price(&self) -> Option<Money<'a, Currency>> {
        if self.quantity == 0 {
            return None;
        }

        let per_unit =
            Decimal::from(self.total.to_minor_units()) / Decimal::from(self.quantity);

        Some(Money::from_minor(
            round_to_minor(per_unit),
            self.total.currency(),
        ))
    }
}

/// Price a sale line.
///
/// `promotion` is trusted to be eligible for `ctx`; see
/// [`eligibility`](crate::promotions::eligibility).
pub fn price<'p, 'a>(
    ctx: &MatchContext,
    presentation: &Presentation<'a>,
    promotion: Option<&'p Promotion<'a>>,
) -> PricingResult<'p, 'a> {
    let unit_price = presentation.unit_price(ctx.channel);
    let currency = unit_price.currency();

    let unit = Decimal::from(unit_price.to_minor_units());
    let quantity = Decimal::from(ctx.quantity);
    let base_total = unit.saturating_mul(quantity);

    let total = promotion.map_or(base_total, |promotion| {
        pack_total(promotion, unit, ctx.quantity)
    });

    PricingResult {
        quantity: ctx.quantity,
        base_total: Money::from_minor(round_to_minor(base_total), currency),
        total: Money::from_minor(round_to_minor(total.max(Decimal::ZERO)), currency),
        applied: promotion,
    }
}

/// Total for `quantity` units when `promotion` discounts each full pack.
fn pack_total(promotion: &Promotion<'_>, unit: Decimal, quantity: u32) -> Decimal {
    let pack_size = promotion.pack_size();
    let packs = Decimal::from(quantity / pack_size);
    let remainder = Decimal::from(quantity % pack_size);

    let pack_base = unit.saturating_mul(Decimal::from(pack_size));
    let pack_price = promotion.discount.discounted_pack(pack_base);

    packs
        .saturating_mul(pack_price)
        .saturating_add(remainder.saturating_mul(unit))
}

fn round_to_minor(amount: Decimal) -> i64 {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
