//! Promotions

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    channels::ChannelScope, discounts::PackDiscount, presentations::PresentationId,
    promotions::schedule::TimeScope,
};

pub mod eligibility;
pub mod priority;
pub mod schedule;

/// Promotion identifier, as assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromotionId(pub u64);

impl fmt::Display for PromotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A discount rule scoped to one presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion<'a> {
    /// Promotion identifier
    pub id: PromotionId,

    /// Display name
    pub name: String,

    /// The presentation the rule discounts
    pub presentation: PresentationId,

    /// Minimum quantity to qualify; also the pack size
    pub min_quantity: u32,

    /// Discount applied per full pack
    pub discount: PackDiscount<'a>,

    /// Calendar restriction
    pub schedule: TimeScope,

    /// Channels the rule is offered on
    pub channel: ChannelScope,

    /// Manual enable/disable switch
    pub is_active: bool,
}

impl<'a> Promotion<'a> {
    /// Create an active, channel-agnostic promotion with no calendar restriction.
    pub fn new(
        id: PromotionId,
        name: impl Into<String>,
        presentation: PresentationId,
        min_quantity: u32,
        discount: PackDiscount<'a>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            presentation,
            min_quantity,
            discount,
            schedule: TimeScope::Always,
            channel: ChannelScope::All,
            is_active: true,
        }
    }

    /// Restrict the promotion to a calendar scope.
    #[must_use]
    pub fn with_schedule(mut self, schedule: TimeScope) -> Self {
        self.schedule = schedule;
        self
    }

    /// Restrict the promotion to a channel scope.
    #[must_use]
    pub fn with_channel(mut self, channel: ChannelScope) -> Self {
        self.channel = channel;
        self
    }

    /// Enable or disable the promotion.
    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Units per discounted pack.
    ///
    /// Never zero, even for a malformed `min_quantity` of 0.
    pub fn pack_size(&self) -> u32 {
        self.min_quantity.max(1)
    }
}
