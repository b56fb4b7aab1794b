//! Auction house pricing.
//!
//! The optimizer only sees the [`PriceOracle`] trait. [`SnapshotOracle`] is
//! the implementation shipped with the crate: an in-memory price table built
//! from an exported auction house snapshot.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ParseError;
use crate::models::{AuctionHouseId, Copper, ItemId, PriceRow};

/// Reagents that have no meaningful auction price.
pub const DEFAULT_BLACKLIST: [ItemId; 2] = [
    12662, // demonic rune
    18240, // ogre tannin
];

/// Source of live reagent prices for one market.
///
/// Implementations are shared across concurrent requests.
pub trait PriceOracle: Send + Sync {
    /// Unit price of `item_id` on `auction_house`, or `None` when pricing is
    /// unavailable.
    fn quote(&self, auction_house: AuctionHouseId, item_id: ItemId) -> Option<Copper>;

    /// Whether the item must never be priced from the auction house.
    fn is_blacklisted(&self, item_id: ItemId) -> bool;
}

/// Which auction figure is used as the price of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceType {
    /// Cheapest current buyout
    #[default]
    MinBuyout,
    /// Two week average
    MarketValue,
    /// Two month average
    Historical,
}

impl fmt::Display for PriceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceType::MinBuyout => f.write_str("min-buyout"),
            PriceType::MarketValue => f.write_str("market-value"),
            PriceType::Historical => f.write_str("historical"),
        }
    }
}

impl FromStr for PriceType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "min-buyout" | "minbuyout" => Ok(PriceType::MinBuyout),
            "market-value" | "marketvalue" => Ok(PriceType::MarketValue),
            "historical" => Ok(PriceType::Historical),
            other => Err(ParseError::unknown("price type", other)),
        }
    }
}

impl PriceRow {
    pub fn price(&self, price_type: PriceType) -> Copper {
        match price_type {
            PriceType::MinBuyout => self.min_buyout,
            PriceType::MarketValue => self.market_value,
            PriceType::Historical => self.historical,
        }
    }
}

/// A [`PriceOracle`] answering from a fixed table of auction prices.
///
/// # Example
///
/// ```
/// use proflevel::models::PriceRow;
/// use proflevel::pricing::{PriceOracle, PriceType, SnapshotOracle};
///
/// let oracle = SnapshotOracle::new(
///     vec![PriceRow {
///         auction_house_id: 513,
///         item_id: 2589,
///         min_buyout: 45,
///         market_value: 60,
///         historical: 70,
///         num_auctions: 12,
///     }],
///     PriceType::MinBuyout,
/// );
///
/// assert_eq!(oracle.quote(513, 2589), Some(45));
/// assert_eq!(oracle.quote(514, 2589), None);
/// assert!(oracle.is_blacklisted(12662));
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotOracle {
    prices: HashMap<(AuctionHouseId, ItemId), PriceRow>,
    price_type: PriceType,
    blacklist: HashSet<ItemId>,
}

impl SnapshotOracle {
    /// Builds an oracle with the default blacklist. Later rows for the same
    /// auction house and item replace earlier ones.
    pub fn new(rows: impl IntoIterator<Item = PriceRow>, price_type: PriceType) -> Self {
        SnapshotOracle {
            prices: rows
                .into_iter()
                .map(|r| ((r.auction_house_id, r.item_id), r))
                .collect(),
            price_type,
            blacklist: DEFAULT_BLACKLIST.into_iter().collect(),
        }
    }

    /// Replaces the blacklist.
    pub fn with_blacklist(mut self, items: impl IntoIterator<Item = ItemId>) -> Self {
        self.blacklist = items.into_iter().collect();
        self
    }

    pub fn price_type(&self) -> PriceType {
        self.price_type
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl PriceOracle for SnapshotOracle {
    fn quote(&self, auction_house: AuctionHouseId, item_id: ItemId) -> Option<Copper> {
        self.prices
            .get(&(auction_house, item_id))
            .map(|row| row.price(self.price_type))
            .filter(|&price| price > 0)
    }

    fn is_blacklisted(&self, item_id: ItemId) -> bool {
        self.blacklist.contains(&item_id)
    }
}
