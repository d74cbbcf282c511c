//! Promotion Eligibility
//!
//! Structural checks deciding whether a promotion may apply to a sale line.

use jiff::civil::Date;
use smallvec::SmallVec;

use crate::{channels::Channel, presentations::PresentationId, promotions::Promotion};

/// The sale line being priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchContext {
    /// Presentation being sold
    pub presentation: PresentationId,

    /// Units requested
    pub quantity: u32,

    /// Channel the sale happens on
    pub channel: Channel,

    /// Date eligibility is evaluated against
    pub date: Date,
}

impl MatchContext {
    /// Create a match context.
    pub const fn new(
        presentation: PresentationId,
        quantity: u32,
        channel: Channel,
        date: Date,
    ) -> Self {
        Self {
            presentation,
            quantity,
            channel,
            date,
        }
    }
}

impl Promotion<'_> {
    /// Whether this promotion may apply to the sale line in `ctx`.
    pub fn is_eligible(&self, ctx: &MatchContext) -> bool {
        self.presentation == ctx.presentation
            && self.is_active
            && ctx.quantity >= self.min_quantity
            && self.channel.includes(ctx.channel)
            && self.schedule.contains(ctx.date)
    }
}

/// Promotions in `rules` that may apply to `ctx`, in catalog order.
pub fn eligible<'p, 'a>(
    rules: &'p [Promotion<'a>],
    ctx: &MatchContext,
) -> SmallVec<[&'p Promotion<'a>; 4]> {
    rules.iter().filter(|rule| rule.is_eligible(ctx)).collect()
}
