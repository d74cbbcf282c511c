//! Sales
//!
//! Shape of the sale record persisted after a line has been priced.

use jiff::Timestamp;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{channels::Channel, presentations::Presentation, pricing::PricingResult};

/// Caller-side checks before a sale is recorded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SaleError {
    /// Nothing to sell
    #[error("quantity must be greater than 0")]
    ZeroQuantity,

    /// The line priced to nothing
    #[error("total cannot be 0")]
    ZeroTotal,

    /// An amount does not fit in whole currency units
    #[error("amount out of range")]
    AmountOutOfRange,
}

/// How the customer paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash
    #[default]
    #[serde(rename = "efectivo")]
    Cash,

    /// Mercado Pago wallet or card
    MercadoPago,
}

/// Sale row to persist. Amounts are whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSale {
    /// Channel the sale happened on
    #[serde(rename = "type")]
    pub channel: Channel,

    /// Presentation name at the time of sale
    pub presentation_name: String,

    /// Effective unit price (`total / quantity`), rounded
    pub price_base: i64,

    /// Units sold
    pub quantity: u32,

    /// Amount charged
    pub total: i64,

    /// When the sale happened
    pub date: Timestamp,

    /// How the customer paid
    pub payment_method: PaymentMethod,
}

impl NewSale {
    /// Build the sale row for a priced line.
    ///
    /// # Errors
    ///
    /// Returns [`SaleError::ZeroQuantity`] or [`SaleError::ZeroTotal`] when
    /// there is nothing to record.
    pub fn from_pricing(
        presentation: &Presentation<'_>,
        channel: Channel,
        result: &PricingResult<'_, '_>,
        payment_method: PaymentMethod,
        date: Timestamp,
    ) -> Result<Self, SaleError> {
        if result.quantity == 0 {
            return Err(SaleError::ZeroQuantity);
        }

        // Stored amounts are whole units; a total under half a unit is 0.
        let total = whole(major_units(&result.total)?)?;

        if total == 0 {
            return Err(SaleError::ZeroTotal);
        }

        let price_base = whole(Decimal::from(total) / Decimal::from(result.quantity))?;

        Ok(Self {
            channel,
            presentation_name: presentation.name.clone(),
            price_base,
            quantity: result.quantity,
            total,
            date,
            payment_method,
        })
    }
}

/// Amount in major units, e.g. 2500.00 for 250000 centavos.
fn major_units(money: &Money<'_, Currency>) -> Result<Decimal, SaleError> {
    let mut amount = Decimal::from(money.to_minor_units());
    amount
        .set_scale(money.currency().exponent)
        .map_err(|_err| SaleError::AmountOutOfRange)?;

    Ok(amount)
}

fn whole(amount: Decimal) -> Result<i64, SaleError> {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(SaleError::AmountOutOfRange)
}

#[cfg(test)]
mod tests {
    use decimal_percentage::Percentage;
    use jiff::civil::date;
    use rusty_money::iso::ARS;
    use testresult::TestResult;

    use crate::{
        discounts::PackDiscount,
        presentations::{ChannelPrices, PresentationId},
        pricing::price,
        promotions::{Promotion, PromotionId, eligibility::MatchContext},
    };

    use super::*;

    fn medio<'a>() -> Presentation<'a> {
        Presentation::new(
            PresentationId(2),
            "1/2 Kilo",
            ChannelPrices::new(
                Money::from_minor(450_000, ARS),
                Money::from_minor(520_000, ARS),
            ),
        )
    }

    #[test]
    fn records_rounded_unit_price() -> TestResult {
        let presentation = medio();
        let promo = Promotion::new(
            PromotionId(3),
            "Pack Delivery 3x2",
            PresentationId(2),
            3,
            PackDiscount::AmountOff(Money::from_minor(520_000, ARS)),
        );
        let ctx = MatchContext::new(PresentationId(2), 3, Channel::PedidosYa, date(2024, 5, 7));
        let result = price(&ctx, &presentation, Some(&promo));
        let at = Timestamp::from_second(1_715_000_000)?;

        let sale = NewSale::from_pricing(
            &presentation,
            Channel::PedidosYa,
            &result,
            PaymentMethod::MercadoPago,
            at,
        )?;

        assert_eq!(sale.total, 10_400);
        assert_eq!(sale.price_base, 3467);
        assert_eq!(sale.quantity, 3);
        assert_eq!(sale.presentation_name, "1/2 Kilo");
        assert_eq!(sale.date, at);

        Ok(())
    }

    #[test]
    fn rejects_empty_lines() {
        let presentation = medio();
        let zero = PricingResult::zero(ARS);

        assert_eq!(
            NewSale::from_pricing(
                &presentation,
                Channel::Local,
                &zero,
                PaymentMethod::Cash,
                Timestamp::UNIX_EPOCH,
            ),
            Err(SaleError::ZeroQuantity)
        );

        let free = PricingResult {
            quantity: 2,
            ..PricingResult::zero(ARS)
        };

        assert_eq!(
            NewSale::from_pricing(
                &presentation,
                Channel::Local,
                &free,
                PaymentMethod::Cash,
                Timestamp::UNIX_EPOCH,
            ),
            Err(SaleError::ZeroTotal)
        );
    }

    #[test]
    fn total_below_one_peso_is_rejected() {
        let coin = Presentation::new(
            PresentationId(9),
            "Caramelo",
            ChannelPrices::new(Money::from_minor(100, ARS), Money::from_minor(100, ARS)),
        );
        let promo = Promotion::new(
            PromotionId(9),
            "Caramelo 60%",
            PresentationId(9),
            1,
            PackDiscount::Percentage(Percentage::from(Decimal::new(60, 2))),
        );
        let ctx = MatchContext::new(PresentationId(9), 1, Channel::Local, date(2024, 5, 7));
        let result = price(&ctx, &coin, Some(&promo));

        assert_eq!(result.total, Money::from_minor(40, ARS));
        assert_eq!(
            NewSale::from_pricing(
                &coin,
                Channel::Local,
                &result,
                PaymentMethod::Cash,
                Timestamp::UNIX_EPOCH,
            ),
            Err(SaleError::ZeroTotal)
        );
    }

    #[test]
    fn payment_methods_use_storage_spellings() -> TestResult {
        assert_eq!(serde_norway::to_string(&PaymentMethod::Cash)?.trim(), "efectivo");
        assert_eq!(
            serde_norway::to_string(&PaymentMethod::MercadoPago)?.trim(),
            "mercado_pago"
        );

        Ok(())
    }
}
