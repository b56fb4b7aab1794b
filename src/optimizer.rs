//! Levelling optimization algorithms for proflevel.
//!
//! This module contains the skill-up probability model and the greedy
//! levelling simulation: at every skill level it prices each eligible
//! recipe, crafts the cheapest one and advances exactly one point.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::cost::CostResolver;
use crate::display::format_gold;
use crate::error::LevelError;
use crate::filters::{FilterSkillup, FilterSource};
use crate::models::{Copper, DifficultyBands, LevelOutcome, LevelStep, Player, Purchase, PurchaseOrder, Recipe};
use crate::pricing::PriceOracle;
use crate::request::LevelRequest;

/// Conservative number of crafts needed for one skill-up of `recipe` at
/// skill `current`.
///
/// The chance of a skill-up is `(grey - current) / (grey - yellow)`. While
/// that is at least 1 (orange, or exactly yellow) a single craft suffices;
/// otherwise the expected attempts to first success, `1 / chance`, is
/// rounded up. At or beyond grey no craft ever succeeds and the result
/// saturates at `u32::MAX`.
///
/// # Example
///
/// ```
/// # use proflevel::models::*;
/// use proflevel::optimizer::expected_crafts;
/// # let recipe = Recipe {
/// #     id: 1, name: "Heavy Linen Bandage".into(), sources: vec![Source::Trainer], learned_at: 1,
/// #     profession: Profession::Tailoring, bands: DifficultyBands::from([1, 10, 20, 30]),
/// #     creates: Creates { item_id: 2581, min_quantity: 1, max_quantity: 1 },
/// #     reagents: vec![Reagent { item_id: 2589, quantity: 2 }], training_cost: 0,
/// # };
/// // chance = (30 - 15) / (30 - 10) = 0.75
/// assert_eq!(expected_crafts(&recipe, 15), 2);
/// assert_eq!(expected_crafts(&recipe, 5), 1);
/// ```
pub fn expected_crafts(recipe: &Recipe, current: u32) -> u32 {
    let DifficultyBands { yellow, grey, .. } = recipe.bands;
    if current >= grey {
        return u32::MAX;
    }

    // 1 / chance == (grey - yellow) / (grey - current), kept in integers
    let remaining = grey - current;
    let band = grey.saturating_sub(yellow);
    if remaining >= band {
        return 1;
    }
    band.div_ceil(remaining)
}

/// A priced candidate recipe for one skill level.
#[derive(Debug, Clone)]
pub struct Candidate<'c> {
    pub recipe: &'c Recipe,
    pub crafts: u32,
    pub cost_per_craft: Copper,
    /// `crafts * cost_per_craft`
    pub cost: Copper,
    pub purchases: Vec<Purchase>,
}

impl Candidate<'_> {
    fn into_step(self, skill: u32) -> LevelStep {
        LevelStep {
            skill,
            recipe_id: self.recipe.id,
            recipe_name: self.recipe.name.clone(),
            crafts: self.crafts,
            cost_per_craft: self.cost_per_craft,
            cost: self.cost,
            purchases: PurchaseOrder::new(self.cost_per_craft, &self.purchases),
        }
    }
}

/// Runs the greedy levelling simulation for one request.
pub struct Leveller<'a> {
    catalog: &'a Catalog,
    resolver: CostResolver<'a>,
    source_filter: FilterSource,
    skillup_filter: FilterSkillup,
}

impl<'a> Leveller<'a> {
    pub fn new(
        catalog: &'a Catalog,
        oracle: &'a dyn PriceOracle,
        source_filter: FilterSource,
        skillup_filter: FilterSkillup,
    ) -> Self {
        Leveller {
            catalog,
            resolver: CostResolver::new(catalog, oracle),
            source_filter,
            skillup_filter,
        }
    }

    /// Applies a pricing deadline to every reagent lookup of the run.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.resolver = self.resolver.with_deadline(deadline);
        self
    }

    /// Recipes of the player's profession that pass both filters at the
    /// player's current skill, in catalog order.
    pub fn candidates(&self, player: &Player) -> Vec<&'a Recipe> {
        let catalog: &'a Catalog = self.catalog;
        catalog
            .recipes_for(player.profession)
            .filter(|r| self.source_filter.accepts(r))
            .filter(|r| self.skillup_filter.accepts(r, player.skill_current))
            .collect()
    }

    /// Picks the cheapest priceable candidate at the player's current skill.
    ///
    /// Candidates whose reagents cannot be obtained are skipped; any other
    /// pricing failure is logged and the candidate skipped as well. Ties keep
    /// the first candidate in catalog order.
    pub fn select(&self, player: &Player) -> Option<Candidate<'a>> {
        let mut best: Option<Candidate<'a>> = None;

        for recipe in self.candidates(player) {
            let crafts = expected_crafts(recipe, player.skill_current);
            let priced = match self.resolver.recipe_cost(player, recipe) {
                Ok(priced) => priced,
                Err(e) if e.is_unpriceable() => {
                    debug!(recipe_id = recipe.id, reason = %e, "skipping unpriceable candidate");
                    continue;
                }
                Err(e) => {
                    warn!(recipe_id = recipe.id, error = %e, "unhandled error getting crafting cost");
                    continue;
                }
            };

            let Some(cost) = priced.cost.checked_mul(u64::from(crafts)) else {
                warn!(recipe_id = recipe.id, crafts, "candidate cost overflows");
                continue;
            };

            debug!(
                "    {} ({}) costs {} per craft and must (conservatively) be crafted {} times",
                recipe.id,
                recipe.name,
                format_gold(priced.cost),
                crafts
            );

            if best.as_ref().map_or(true, |b| cost < b.cost) {
                best = Some(Candidate {
                    recipe,
                    crafts,
                    cost_per_craft: priced.cost,
                    cost,
                    purchases: priced.purchases,
                });
            }
        }

        best
    }

    /// Advances `player` one skill point at a time until the desired level
    /// or until no candidate remains.
    ///
    /// Every chosen recipe is recorded as known by the player.
    pub fn run(&self, player: &mut Player) -> LevelOutcome {
        let mut total: Copper = 0;
        let mut steps = Vec::new();

        while player.skill_current < player.skill_desired {
            debug!(
                "Assessing potential recipes for {} -> {}",
                player.skill_current,
                player.skill_current + 1
            );

            let Some(chosen) = self.select(player) else {
                info!(level = player.skill_current, "no suitable craft, abandoning");
                return LevelOutcome::Stalled {
                    level: player.skill_current,
                    partial_cost: total,
                    steps,
                };
            };

            let Some(next_total) = total.checked_add(chosen.cost) else {
                warn!(level = player.skill_current, "total cost overflows, abandoning");
                return LevelOutcome::Stalled {
                    level: player.skill_current,
                    partial_cost: total,
                    steps,
                };
            };
            total = next_total;

            info!(
                "{} is the cheapest craft costing {} for level {}",
                chosen.recipe.name,
                format_gold(chosen.cost),
                player.skill_current
            );

            player.learn_recipe(chosen.recipe.id);
            steps.push(chosen.into_step(player.skill_current));
            player.skill_current += 1;
        }

        info!(final_level = player.skill_current, total = %format_gold(total), "levelling complete");
        LevelOutcome::Completed {
            final_level: player.skill_current,
            total_cost: total,
            steps,
        }
    }
}

/// Validates `request` and runs the levelling simulation for it.
///
/// # Arguments
///
/// * `catalog` - The shared static catalog
/// * `oracle` - Auction prices for the request's market
/// * `request` - The caller's levelling request
/// * `deadline` - Optional instant after which reagents are treated as unpriceable
///
/// # Errors
///
/// Validation and catalog lookup errors abort before the simulation starts.
/// A run that cannot reach the target is not an error: it returns
/// [`LevelOutcome::Stalled`].
pub fn plan_levelling(
    catalog: &Catalog,
    oracle: &dyn PriceOracle,
    request: &LevelRequest,
    deadline: Option<Instant>,
) -> Result<LevelOutcome, LevelError> {
    request.validate(catalog)?;
    let auction_house = request.auction_house(catalog)?;

    let skillup_filter = FilterSkillup::new(request.filter_skillup)?;
    let source_filter = FilterSource::new(request.filter_source.iter().copied());

    let mut player = Player::new(
        request.profession,
        request.start_level,
        request.finish_level,
        auction_house,
    );

    let mut leveller = Leveller::new(catalog, oracle, source_filter, skillup_filter);
    if let Some(deadline) = deadline {
        leveller = leveller.with_deadline(deadline);
    }

    info!(
        profession = %request.profession,
        start = request.start_level,
        finish = request.finish_level,
        auction_house,
        "planning levelling"
    );
    Ok(leveller.run(&mut player))
}
