//! Presentations
//!
//! Sellable product configurations and their per-channel unit prices.

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

use crate::channels::Channel;

/// Presentation identifier, as assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresentationId(pub u64);

impl fmt::Display for PresentationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unit price lookup by sales channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelPrices<'a> {
    local: Money<'a, Currency>,
    delivery: Money<'a, Currency>,
}

impl<'a> ChannelPrices<'a> {
    /// Create a price table from the in-store and delivery unit prices.
    pub fn new(local: Money<'a, Currency>, delivery: Money<'a, Currency>) -> Self {
        Self { local, delivery }
    }

    /// Unit price charged on `channel`.
    pub fn price_for(&self, channel: Channel) -> Money<'a, Currency> {
        match channel {
            Channel::Local => self.local,
            Channel::PedidosYa => self.delivery,
        }
    }

    /// Currency the prices are expressed in.
    pub fn currency(&self) -> &'a Currency {
        self.local.currency()
    }
}

/// Presentation (product)
#[derive(Debug, Clone)]
pub struct Presentation<'a> {
    /// Presentation identifier
    pub id: PresentationId,

    /// Display name
    pub name: String,

    /// Unit prices per channel
    pub prices: ChannelPrices<'a>,
}

impl<'a> Presentation<'a> {
    /// Create a new presentation.
    pub fn new(id: PresentationId, name: impl Into<String>, prices: ChannelPrices<'a>) -> Self {
        Self {
            id,
            name: name.into(),
            prices,
        }
    }

    /// Unit price charged on `channel`.
    pub fn unit_price(&self, channel: Channel) -> Money<'a, Currency> {
        self.prices.price_for(channel)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::ARS;

    use super::*;

    #[test]
    fn unit_price_follows_channel() {
        let presentation = Presentation::new(
            PresentationId(1),
            "1 Kilo",
            ChannelPrices::new(Money::from_minor(800_000, ARS), Money::from_minor(950_000, ARS)),
        );

        assert_eq!(
            presentation.unit_price(Channel::Local),
            Money::from_minor(800_000, ARS)
        );
        assert_eq!(
            presentation.unit_price(Channel::PedidosYa),
            Money::from_minor(950_000, ARS)
        );
        assert_eq!(presentation.prices.currency(), ARS);
    }
}
