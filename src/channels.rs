//! Sales Channels

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a channel name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sales channel: {0}")]
pub struct ChannelParseError(pub String);

/// The context a sale happens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// In-store sale
    Local,

    /// Delivery marketplace sale
    PedidosYa,
}

impl Channel {
    /// Storage spelling of the channel.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::PedidosYa => "pedidos_ya",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = ChannelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "local" => Ok(Self::Local),
            "pedidos_ya" => Ok(Self::PedidosYa),
            other => Err(ChannelParseError(other.to_string())),
        }
    }
}

/// The channels a promotion is offered on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChannelScope {
    /// Channel-agnostic
    #[default]
    All,

    /// A single channel
    Only(Channel),
}

impl ChannelScope {
    /// Whether a sale on `channel` falls within this scope.
    #[must_use]
    pub fn includes(self, channel: Channel) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == channel,
        }
    }
}

impl fmt::Display for ChannelScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(channel) => channel.fmt(f),
        }
    }
}

impl FromStr for ChannelScope {
    type Err = ChannelParseError;

    /// Parse a storage channel; blank means `all`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}
