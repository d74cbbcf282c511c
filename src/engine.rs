//! Pricing Engine
//!
//! Entry point tying eligibility, priority and pack pricing together.

use rusty_money::iso::Currency;
use tracing::debug;

use crate::{
    channels::Channel,
    clock::Clock,
    presentations::Presentation,
    pricing::{PricingResult, price},
    promotions::{
        Promotion,
        eligibility::{MatchContext, eligible},
        priority::resolve,
    },
};

/// Prices sale lines against a promotion catalog.
#[derive(Debug, Clone)]
pub struct PricingEngine<'a, C: Clock> {
    clock: C,
    currency: &'a Currency,
}

impl<'a, C: Clock> PricingEngine<'a, C> {
    /// Create an engine reading dates from `clock`.
    ///
    /// `currency` is only used for the zero result returned when no
    /// presentation is selected.
    pub fn new(clock: C, currency: &'a Currency) -> Self {
        Self { clock, currency }
    }

    /// Price `quantity` units of `presentation` sold on `channel`.
    ///
    /// The clock is read once per call. A missing presentation yields a zero
    /// result with no promotion.
    #[tracing::instrument(
        level = "debug",
        name = "pricing.compute_price",
        skip_all,
        fields(
            presentation = presentation.map(|p| p.id.0),
            quantity = quantity,
            channel = %channel,
        )
    )]
    pub fn compute_price<'p>(
        &self,
        presentation: Option<&Presentation<'a>>,
        promotions: &'p [Promotion<'a>],
        quantity: u32,
        channel: Channel,
    ) -> PricingResult<'p, 'a> {
        let Some(presentation) = presentation else {
            debug!("no presentation selected");

            return PricingResult::zero(self.currency);
        };

        let ctx = MatchContext::new(presentation.id, quantity, channel, self.clock.today());
        let candidates = eligible(promotions, &ctx);
        let applied = resolve(candidates.iter().copied());

        debug!(
            date = %ctx.date,
            eligible = candidates.len(),
            applied = applied.map(|promotion| promotion.id.0),
            "resolved promotion"
        );

        price(&ctx, presentation, applied)
    }
}
