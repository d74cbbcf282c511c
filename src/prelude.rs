//! Sundae prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogError},
    channels::{Channel, ChannelParseError, ChannelScope},
    clock::{Clock, FixedClock, SystemClock},
    discounts::PackDiscount,
    engine::PricingEngine,
    presentations::{ChannelPrices, Presentation, PresentationId},
    pricing::{PricingResult, price},
    promotions::{
        Promotion, PromotionId,
        eligibility::{MatchContext, eligible},
        priority::{Specificity, resolve},
        schedule::{DateRange, TimeScope, WeekdaySet},
    },
    receipt::{ReceiptError, write_promotions, write_quote},
    records::{PresentationRecord, PromotionRecord, RecordError},
    sales::{NewSale, PaymentMethod, SaleError},
};
