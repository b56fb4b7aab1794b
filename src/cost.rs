//! Reagent cost resolution.
//!
//! Finds the cheapest way to obtain a reagent: buy it from a vendor, craft
//! it yourself, or buy it on the auction house. Crafting recurses into the
//! reagent's own recipe, so the resolver carries the set of items currently
//! being crafted on the path and refuses to re-enter any of them.
//!
//! Route order:
//!
//! 1. A vendor price is authoritative and returned without comparison.
//! 2. The craft and auction routes are both evaluated; the strictly cheaper
//!    one wins and a tie goes to the auction house.
//! 3. If neither is feasible the reagent is unpriceable.

use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, trace};

use crate::catalog::Catalog;
use crate::error::CostError;
use crate::models::{Copper, ItemId, Player, Purchase, Reagent, Recipe};
use crate::pricing::PriceOracle;

/// A resolved cost together with the purchases it assumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Priced {
    pub cost: Copper,
    pub purchases: Vec<Purchase>,
}

impl Priced {
    fn bought(item_id: ItemId, quantity: u32, unit: Copper) -> Result<Self, CostError> {
        let cost = unit.checked_mul(u64::from(quantity)).ok_or(CostError::Overflow)?;
        Ok(Priced {
            cost,
            purchases: vec![Purchase { item_id, quantity }],
        })
    }

    /// Repeats the whole purchase `factor` times.
    fn scaled(self, factor: u32) -> Result<Self, CostError> {
        let cost = self
            .cost
            .checked_mul(u64::from(factor))
            .ok_or(CostError::Overflow)?;
        let purchases = self
            .purchases
            .into_iter()
            .map(|p| {
                p.quantity
                    .checked_mul(factor)
                    .map(|quantity| Purchase { quantity, ..p })
                    .ok_or(CostError::Overflow)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Priced { cost, purchases })
    }
}

/// Prices recipes and reagents against a catalog and a price oracle.
///
/// A resolver is cheap to build and borrows everything it uses; create one
/// per levelling request.
pub struct CostResolver<'a> {
    catalog: &'a Catalog,
    oracle: &'a dyn PriceOracle,
    deadline: Option<Instant>,
}

impl<'a> CostResolver<'a> {
    pub fn new(catalog: &'a Catalog, oracle: &'a dyn PriceOracle) -> Self {
        CostResolver {
            catalog,
            oracle,
            deadline: None,
        }
    }

    /// Stops pricing once `deadline` has passed. Every lookup made after it
    /// fails with [`CostError::DeadlineExceeded`].
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Cost of a single craft of `recipe`: the sum of its reagents.
    ///
    /// # Errors
    ///
    /// The first reagent that cannot be priced aborts the recipe, wrapped in
    /// [`CostError::Reagent`].
    pub fn recipe_cost(&self, player: &Player, recipe: &Recipe) -> Result<Priced, CostError> {
        let mut crafting = HashSet::from([recipe.creates.item_id]);
        self.price_recipe(player, recipe, &mut crafting)
    }

    /// Cheapest way to obtain `reagent.quantity` units of `reagent.item_id`.
    ///
    /// Every route is charged for the full quantity: vendor and auction
    /// prices are per unit, and crafting pays for `ceil(quantity /
    /// creates.min)` whole crafts.
    ///
    /// # Errors
    ///
    /// [`CostError::DeadlineExceeded`] if the deadline passed while either
    /// route was being priced, even when the other route succeeded.
    pub fn reagent_cost(&self, player: &Player, reagent: Reagent) -> Result<Priced, CostError> {
        let mut crafting = HashSet::new();
        self.price_reagent(player, reagent, &mut crafting)
    }

    fn check_deadline(&self) -> Result<(), CostError> {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(CostError::DeadlineExceeded),
            _ => Ok(()),
        }
    }

    fn price_recipe(
        &self,
        player: &Player,
        recipe: &Recipe,
        crafting: &mut HashSet<ItemId>,
    ) -> Result<Priced, CostError> {
        let mut cost: Copper = 0;
        let mut purchases = Vec::new();

        for reagent in &recipe.reagents {
            let priced = self
                .price_reagent(player, *reagent, crafting)
                .map_err(|e| CostError::Reagent {
                    recipe_id: recipe.id,
                    source: Box::new(e),
                })?;
            cost = cost.checked_add(priced.cost).ok_or(CostError::Overflow)?;
            purchases.extend(priced.purchases);
        }

        Ok(Priced { cost, purchases })
    }

    fn price_reagent(
        &self,
        player: &Player,
        reagent: Reagent,
        crafting: &mut HashSet<ItemId>,
    ) -> Result<Priced, CostError> {
        self.check_deadline()?;
        let Reagent { item_id, quantity } = reagent;

        // Vendor prices are assumed to beat any alternative.
        if let Some(unit) = self.catalog.vendor_price_by_id(item_id) {
            trace!(item_id, quantity, unit, "vendor route");
            return Priced::bought(item_id, quantity, unit);
        }

        let craft = self.craft_route(player, reagent, crafting);
        let auction = self.auction_route(player, reagent);

        // A route cut short by the deadline leaves the comparison incomplete.
        if hit_deadline(&craft) || hit_deadline(&auction) {
            debug!(item_id, "deadline passed while pricing reagent");
            return Err(CostError::DeadlineExceeded);
        }

        match (craft, auction) {
            (Ok(craft), Ok(auction)) => {
                trace!(item_id, craft = craft.cost, auction = auction.cost, "comparing routes");
                if craft.cost < auction.cost {
                    Ok(craft)
                } else {
                    Ok(auction)
                }
            }
            (Ok(craft), Err(reason)) => {
                trace!(item_id, %reason, "auction route unavailable");
                Ok(craft)
            }
            (Err(reason), Ok(auction)) => {
                trace!(item_id, %reason, "craft route unavailable");
                Ok(auction)
            }
            (Err(craft_reason), Err(auction_reason)) => {
                trace!(item_id, %craft_reason, %auction_reason, "no route");
                match auction_reason {
                    e @ (CostError::Blacklisted { .. } | CostError::Overflow) => Err(e),
                    _ => Err(CostError::Unpriceable { item_id }),
                }
            }
        }
    }

    fn craft_route(
        &self,
        player: &Player,
        reagent: Reagent,
        crafting: &mut HashSet<ItemId>,
    ) -> Result<Priced, CostError> {
        let item_id = reagent.item_id;
        let item = self.catalog.item_by_id(item_id)?;
        let link = item.crafted_by.ok_or(CostError::NotCraftable { item_id })?;
        let recipe = self.catalog.recipe_by_id(link.recipe_id)?;

        if recipe.profession != player.profession {
            return Err(CostError::WrongProfession {
                recipe_id: recipe.id,
            });
        }
        if recipe.is_transmute() {
            debug!(item_id, recipe_id = recipe.id, "skipping transmute craft route");
            return Err(CostError::Transmute {
                recipe_id: recipe.id,
            });
        }
        if !crafting.insert(item_id) {
            debug!(item_id, recipe_id = recipe.id, "cyclic craft route");
            return Err(CostError::CyclicDependency { item_id });
        }

        let per_craft = self.price_recipe(player, recipe, crafting);
        crafting.remove(&item_id);

        let crafts = reagent.quantity.div_ceil(recipe.creates.min_quantity.max(1));
        per_craft?.scaled(crafts)
    }

    fn auction_route(&self, player: &Player, reagent: Reagent) -> Result<Priced, CostError> {
        let item_id = reagent.item_id;
        if self.oracle.is_blacklisted(item_id) {
            return Err(CostError::Blacklisted { item_id });
        }
        self.check_deadline()?;

        let unit = self
            .oracle
            .quote(player.auction_house, item_id)
            .ok_or(CostError::Unpriceable { item_id })?;
        Priced::bought(item_id, reagent.quantity, unit)
    }
}

fn hit_deadline(route: &Result<Priced, CostError>) -> bool {
    matches!(route, Err(e) if matches!(e.root(), CostError::DeadlineExceeded))
}
