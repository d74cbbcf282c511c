//! Promotion Priority
//!
//! At most one promotion applies per sale line. Rules with an explicit
//! calendar window win over standing rules; ties keep catalog order.

use std::cmp::Reverse;

use crate::promotions::Promotion;

/// How targeted a promotion is, least specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Specificity {
    /// No calendar window (standing or weekday-only rule)
    Standing,

    /// Carries a start and/or end date
    DateBounded,
}

impl Promotion<'_> {
    /// Specificity used to rank simultaneously eligible promotions.
    pub fn specificity(&self) -> Specificity {
        if self.schedule.is_date_bounded() {
            Specificity::DateBounded
        } else {
            Specificity::Standing
        }
    }
}

/// Pick the promotion to apply from an eligible set.
pub fn resolve<'p, 'a>(
    eligible: impl IntoIterator<Item = &'p Promotion<'a>>,
) -> Option<&'p Promotion<'a>> {
    // `min_by_key` returns the first of several equal minimums.
    eligible
        .into_iter()
        .min_by_key(|promotion| Reverse(promotion.specificity()))
}
