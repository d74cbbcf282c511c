//! Storage Records
//!
//! Row shapes read from the storage collaborator, and their conversion into
//! domain types. Loose storage encodings (comma-separated weekdays, textual
//! dates and discount types, whole-unit prices) are parsed here, once.

use decimal_percentage::Percentage;
use jiff::civil::{Date, Weekday};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    channels::{ChannelParseError, ChannelScope},
    discounts::PackDiscount,
    presentations::{ChannelPrices, Presentation, PresentationId},
    promotions::{
        Promotion, PromotionId,
        schedule::{DateRange, TimeScope, WeekdaySet},
    },
};

/// Errors converting storage records into domain types.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Discount type is not one of `fixed_price`, `percentage`, `amount_off`
    #[error("unknown discount type: {0}")]
    UnknownDiscountType(String),

    /// Channel is not one of `all`, `local`, `pedidos_ya`
    #[error(transparent)]
    Channel(#[from] ChannelParseError),

    /// Weekday entry is not a digit between 0 (Sunday) and 6 (Saturday)
    #[error("invalid weekday: {0}")]
    InvalidWeekday(String),

    /// Date is not in `YYYY-MM-DD` form
    #[error("invalid {field}: {value}")]
    InvalidDate {
        /// Record field holding the date
        field: &'static str,
        /// Raw value
        value: String,
        /// Parse failure
        #[source]
        source: jiff::Error,
    },

    /// Amount could not be represented in the target currency
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

/// Presentation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationRecord {
    /// Row id
    pub id: u64,

    /// Display name
    pub name: String,

    /// In-store unit price, whole currency units
    pub price_local: i64,

    /// Delivery unit price, whole currency units
    pub price_delivery: i64,
}

impl PresentationRecord {
    /// Convert into a [`Presentation`] priced in `currency`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidAmount`] if a price overflows the
    /// currency's minor units.
    pub fn into_presentation(
        self,
        currency: &Currency,
    ) -> Result<Presentation<'_>, RecordError> {
        let local = whole_units(Decimal::from(self.price_local), currency)?;
        let delivery = whole_units(Decimal::from(self.price_delivery), currency)?;

        Ok(Presentation::new(
            PresentationId(self.id),
            self.name,
            ChannelPrices::new(local, delivery),
        ))
    }
}

/// Discount value as stored: integer, float or numeric text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredNumber {
    /// Integer value
    Int(i64),

    /// Floating point value
    Float(f64),

    /// Numeric text
    Text(String),
}

impl StoredNumber {
    fn to_decimal(&self) -> Result<Decimal, RecordError> {
        match self {
            Self::Int(value) => Ok(Decimal::from(*value)),
            // Going through the shortest decimal representation keeps 0.1 as 0.1.
            Self::Float(value) => parse_decimal(&value.to_string()),
            Self::Text(value) => parse_decimal(value),
        }
    }
}

fn parse_decimal(value: &str) -> Result<Decimal, RecordError> {
    value
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| RecordError::InvalidAmount(value.to_string()))
}

/// Boolean flag as stored: `0`/`1` or `true`/`false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredFlag {
    /// Boolean value
    Bool(bool),

    /// Integer value, only `1` is true
    Int(i64),
}

impl StoredFlag {
    /// Flag value.
    pub const fn is_set(self) -> bool {
        match self {
            Self::Bool(value) => value,
            Self::Int(value) => value == 1,
        }
    }
}

impl Default for StoredFlag {
    fn default() -> Self {
        Self::Int(1)
    }
}

const fn default_min_quantity() -> u32 {
    1
}

/// Promotion row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionRecord {
    /// Row id
    pub id: u64,

    /// Display name
    pub name: String,

    /// Presentation the promotion discounts
    pub presentation_id: u64,

    /// Minimum quantity and pack size
    #[serde(default = "default_min_quantity")]
    pub min_quantity: u32,

    /// `fixed_price`, `percentage` or `amount_off`
    pub discount_type: String,

    /// Pack price, percent (0-100) or amount off, by `discount_type`
    pub discount_value: StoredNumber,

    /// Comma-separated weekday digits, Sunday = 0; empty means every day
    #[serde(default)]
    pub active_days: Option<String>,

    /// First valid date, `YYYY-MM-DD`
    #[serde(default)]
    pub start_date: Option<String>,

    /// Last valid date, `YYYY-MM-DD`
    #[serde(default)]
    pub end_date: Option<String>,

    /// `all`, `local` or `pedidos_ya`; missing means `all`
    #[serde(default)]
    pub channel: Option<String>,

    /// Manual enable/disable switch
    #[serde(default)]
    pub is_active: StoredFlag,
}

impl PromotionRecord {
    /// Convert into a [`Promotion`] with amounts in `currency`.
    ///
    /// Values that parse but make little business sense (a zero
    /// `min_quantity`, negative amounts, percentages above 100) are passed
    /// through unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`RecordError`] if the discount type, channel, weekdays or
    /// dates cannot be parsed, or an amount overflows the currency's minor
    /// units.
    pub fn into_promotion(self, currency: &Currency) -> Result<Promotion<'_>, RecordError> {
        let discount = parse_discount(&self.discount_type, &self.discount_value, currency)?;
        let days = parse_weekdays(self.active_days.as_deref().unwrap_or_default())?;
        let range = DateRange::new(
            parse_date("start_date", self.start_date.as_deref())?,
            parse_date("end_date", self.end_date.as_deref())?,
        );
        let channel = self
            .channel
            .as_deref()
            .unwrap_or_default()
            .parse::<ChannelScope>()?;

        Ok(Promotion::new(
            PromotionId(self.id),
            self.name,
            PresentationId(self.presentation_id),
            self.min_quantity,
            discount,
        )
        .with_schedule(TimeScope::new(days, range))
        .with_channel(channel)
        .with_active(self.is_active.is_set()))
    }
}

fn parse_discount<'a>(
    discount_type: &str,
    value: &StoredNumber,
    currency: &'a Currency,
) -> Result<PackDiscount<'a>, RecordError> {
    let value = value.to_decimal()?;

    match discount_type.trim() {
        "fixed_price" => Ok(PackDiscount::FixedPrice(whole_units(value, currency)?)),
        "percentage" => Ok(PackDiscount::Percentage(Percentage::from(
            value / Decimal::ONE_HUNDRED,
        ))),
        "amount_off" => Ok(PackDiscount::AmountOff(whole_units(value, currency)?)),
        other => Err(RecordError::UnknownDiscountType(other.to_string())),
    }
}

/// Parse a comma-separated list of weekday digits (Sunday = 0).
///
/// # Errors
///
/// Returns [`RecordError::InvalidWeekday`] for any entry outside 0..=6.
pub fn parse_weekdays(csv: &str) -> Result<WeekdaySet, RecordError> {
    csv.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .try_fold(WeekdaySet::empty(), |days, entry| {
            let day = entry
                .parse::<i8>()
                .ok()
                .and_then(|offset| Weekday::from_sunday_zero_offset(offset).ok())
                .ok_or_else(|| RecordError::InvalidWeekday(entry.to_string()))?;

            Ok(days.with(day))
        })
}

fn parse_date(field: &'static str, value: Option<&str>) -> Result<Option<Date>, RecordError> {
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    value
        .parse::<Date>()
        .map(Some)
        .map_err(|source| RecordError::InvalidDate {
            field,
            value: value.to_string(),
            source,
        })
}

/// Money for a whole-unit amount (e.g. `2500` pesos).
fn whole_units(amount: Decimal, currency: &Currency) -> Result<Money<'_, Currency>, RecordError> {
    let invalid = || RecordError::InvalidAmount(amount.to_string());

    let scale = 10_i64
        .checked_pow(currency.exponent)
        .map(Decimal::from)
        .ok_or_else(invalid)?;

    let minor = amount
        .checked_mul(scale)
        .and_then(|minor| minor.round_dp(0).to_i64())
        .ok_or_else(invalid)?;

    Ok(Money::from_minor(minor, currency))
}
