//! Tests for reagent and recipe cost resolution.

mod common;

use std::thread;
use std::time::{Duration, Instant};

use common::{oracle, player, recipe, CatalogBuilder};
use proflevel::cost::CostResolver;
use proflevel::error::CostError;
use proflevel::models::{AuctionHouseId, Copper, ItemId, Profession, Purchase, Reagent};
use proflevel::pricing::PriceOracle;

const LINEN_CLOTH: u32 = 2589;
const BOLT_OF_LINEN: u32 = 2996;
const COARSE_THREAD: u32 = 2320;

fn reagent(item_id: u32, quantity: u32) -> Reagent {
    Reagent { item_id, quantity }
}

/// Linen cloth from the auction house, bolts crafted by tailoring.
fn linen_catalog() -> proflevel::catalog::Catalog {
    CatalogBuilder::new()
        .recipe(recipe(2963, "Bolt of Linen Cloth", [1, 25, 37, 50], BOLT_OF_LINEN, &[(LINEN_CLOTH, 2)]))
        .item(LINEN_CLOTH, "Linen Cloth")
        .crafted_item(BOLT_OF_LINEN, "Bolt of Linen Cloth", Profession::Tailoring, 2963)
        .vendor(COARSE_THREAD, 10)
        .build()
}

#[test]
fn test_vendor_price_wins_without_comparison() {
    let catalog = linen_catalog();
    let prices = oracle(&[(COARSE_THREAD, 1)]);
    let resolver = CostResolver::new(&catalog, &prices);

    let priced = resolver.reagent_cost(&player(1, 75), reagent(COARSE_THREAD, 3)).unwrap();
    assert_eq!(priced.cost, 30);
    assert_eq!(priced.purchases, vec![Purchase { item_id: COARSE_THREAD, quantity: 3 }]);
}

#[test]
fn test_auction_price_scales_with_quantity() {
    let catalog = linen_catalog();
    let prices = oracle(&[(LINEN_CLOTH, 45)]);
    let resolver = CostResolver::new(&catalog, &prices);

    let priced = resolver.reagent_cost(&player(1, 75), reagent(LINEN_CLOTH, 4)).unwrap();
    assert_eq!(priced.cost, 180);
    assert_eq!(priced.purchases, vec![Purchase { item_id: LINEN_CLOTH, quantity: 4 }]);
}

#[test]
fn test_crafting_beats_more_expensive_auction() {
    let catalog = linen_catalog();
    let prices = oracle(&[(LINEN_CLOTH, 10), (BOLT_OF_LINEN, 50)]);
    let resolver = CostResolver::new(&catalog, &prices);

    let priced = resolver.reagent_cost(&player(1, 75), reagent(BOLT_OF_LINEN, 1)).unwrap();
    assert_eq!(priced.cost, 20);
    assert_eq!(priced.purchases, vec![Purchase { item_id: LINEN_CLOTH, quantity: 2 }]);
}

#[test]
fn test_tie_between_craft_and_auction_buys_from_auction() {
    let catalog = linen_catalog();
    let prices = oracle(&[(LINEN_CLOTH, 10), (BOLT_OF_LINEN, 20)]);
    let resolver = CostResolver::new(&catalog, &prices);

    let priced = resolver.reagent_cost(&player(1, 75), reagent(BOLT_OF_LINEN, 1)).unwrap();
    assert_eq!(priced.cost, 20);
    assert_eq!(priced.purchases, vec![Purchase { item_id: BOLT_OF_LINEN, quantity: 1 }]);
}

#[test]
fn test_craft_route_used_when_reagent_not_on_auction() {
    let catalog = linen_catalog();
    let prices = oracle(&[(LINEN_CLOTH, 10)]);
    let resolver = CostResolver::new(&catalog, &prices);

    let priced = resolver.reagent_cost(&player(1, 75), reagent(BOLT_OF_LINEN, 3)).unwrap();
    assert_eq!(priced.cost, 60);
    assert_eq!(priced.purchases, vec![Purchase { item_id: LINEN_CLOTH, quantity: 6 }]);
}

#[test]
fn test_craft_route_rounds_up_to_whole_crafts() {
    let mut thread = recipe(3000, "Spool of Thread", [1, 10, 20, 30], 3001, &[(COARSE_THREAD, 3)]);
    thread.creates.min_quantity = 2;
    thread.creates.max_quantity = 2;
    let catalog = CatalogBuilder::new()
        .recipe(thread)
        .crafted_item(3001, "Spool of Thread", Profession::Tailoring, 3000)
        .vendor(COARSE_THREAD, 10)
        .build();
    let prices = oracle(&[]);
    let resolver = CostResolver::new(&catalog, &prices);

    // Three spools need two crafts of two.
    let priced = resolver.reagent_cost(&player(1, 75), reagent(3001, 3)).unwrap();
    assert_eq!(priced.cost, 60);
    assert_eq!(priced.purchases, vec![Purchase { item_id: COARSE_THREAD, quantity: 6 }]);
}

#[test]
fn test_other_profession_recipe_is_not_crafted() {
    let mut elixir = recipe(2329, "Elixir of Lion's Strength", [1, 55, 75, 95], 2454, &[(COARSE_THREAD, 1)]);
    elixir.profession = Profession::Alchemy;
    let catalog = CatalogBuilder::new()
        .recipe(elixir)
        .crafted_item(2454, "Elixir of Lion's Strength", Profession::Alchemy, 2329)
        .vendor(COARSE_THREAD, 10)
        .build();
    let tailor = player(1, 75);

    let no_auction = oracle(&[]);
    let resolver = CostResolver::new(&catalog, &no_auction);
    let err = resolver.reagent_cost(&tailor, reagent(2454, 1)).unwrap_err();
    assert!(matches!(err, CostError::Unpriceable { item_id: 2454 }));

    let with_auction = oracle(&[(2454, 500)]);
    let resolver = CostResolver::new(&catalog, &with_auction);
    let priced = resolver.reagent_cost(&tailor, reagent(2454, 1)).unwrap();
    assert_eq!(priced.cost, 500);
}

#[test]
fn test_transmute_recipe_is_never_crafted() {
    let catalog = CatalogBuilder::new()
        .recipe(recipe(17187, "Transmute: Arcanite", [1, 10, 20, 30], 12360, &[(COARSE_THREAD, 1)]))
        .recipe(recipe(4000, "Arcanite Belt", [1, 10, 20, 30], 4001, &[(12360, 1)]))
        .crafted_item(12360, "Arcanite Bar", Profession::Tailoring, 17187)
        .vendor(COARSE_THREAD, 10)
        .build();
    let prices = oracle(&[]);
    let resolver = CostResolver::new(&catalog, &prices);
    let tailor = player(1, 75);

    let err = resolver.reagent_cost(&tailor, reagent(12360, 1)).unwrap_err();
    assert!(matches!(err, CostError::Unpriceable { item_id: 12360 }));

    let belt = catalog.recipe_by_id(4000).unwrap();
    let err = resolver.recipe_cost(&tailor, belt).unwrap_err();
    assert!(matches!(err, CostError::Reagent { recipe_id: 4000, .. }));
    assert!(matches!(err.root(), CostError::Unpriceable { item_id: 12360 }));
    assert!(err.is_unpriceable());
}

#[test]
fn test_blacklisted_item_is_reported() {
    let catalog = linen_catalog();
    let prices = oracle(&[(12662, 100)]);
    let resolver = CostResolver::new(&catalog, &prices);

    let err = resolver.reagent_cost(&player(1, 75), reagent(12662, 1)).unwrap_err();
    assert!(matches!(err, CostError::Blacklisted { item_id: 12662 }));
    assert!(err.is_unpriceable());
}

#[test]
fn test_unknown_item_without_quote_is_unpriceable() {
    let catalog = linen_catalog();
    let prices = oracle(&[]);
    let resolver = CostResolver::new(&catalog, &prices);

    let err = resolver.reagent_cost(&player(1, 75), reagent(999_999, 1)).unwrap_err();
    assert!(matches!(err, CostError::Unpriceable { item_id: 999_999 }));
}

#[test]
fn test_zero_quote_means_unavailable() {
    let catalog = linen_catalog();
    let prices = oracle(&[(LINEN_CLOTH, 0)]);
    let resolver = CostResolver::new(&catalog, &prices);

    let err = resolver.reagent_cost(&player(1, 75), reagent(LINEN_CLOTH, 1)).unwrap_err();
    assert!(matches!(err, CostError::Unpriceable { .. }));
}

/// Two items that are each crafted from the other.
fn cyclic_catalog() -> proflevel::catalog::Catalog {
    CatalogBuilder::new()
        .recipe(recipe(5001, "Fold Cloth", [1, 10, 20, 30], 5100, &[(5200, 1)]))
        .recipe(recipe(5002, "Unfold Cloth", [1, 10, 20, 30], 5200, &[(5100, 1)]))
        .crafted_item(5100, "Folded Cloth", Profession::Tailoring, 5001)
        .crafted_item(5200, "Unfolded Cloth", Profession::Tailoring, 5002)
        .build()
}

#[test]
fn test_cyclic_craft_graph_terminates_unpriceable() {
    let catalog = cyclic_catalog();
    let prices = oracle(&[]);
    let resolver = CostResolver::new(&catalog, &prices);

    let err = resolver.reagent_cost(&player(1, 75), reagent(5200, 1)).unwrap_err();
    assert!(matches!(err, CostError::Unpriceable { item_id: 5200 }));
}

#[test]
fn test_cyclic_craft_graph_falls_back_to_auction() {
    let catalog = cyclic_catalog();
    let prices = oracle(&[(5100, 40)]);
    let resolver = CostResolver::new(&catalog, &prices);

    // 5200 is crafted from 5100, which is bought rather than crafted back.
    let priced = resolver.reagent_cost(&player(1, 75), reagent(5200, 1)).unwrap();
    assert_eq!(priced.cost, 40);
    assert_eq!(priced.purchases, vec![Purchase { item_id: 5100, quantity: 1 }]);
}

#[test]
fn test_recipe_cost_sums_reagents() {
    let catalog = CatalogBuilder::new()
        .recipe(recipe(
            2385,
            "Brown Linen Vest",
            [10, 35, 47, 60],
            2568,
            &[(BOLT_OF_LINEN, 1), (COARSE_THREAD, 1)],
        ))
        .recipe(recipe(2963, "Bolt of Linen Cloth", [1, 25, 37, 50], BOLT_OF_LINEN, &[(LINEN_CLOTH, 2)]))
        .item(LINEN_CLOTH, "Linen Cloth")
        .crafted_item(BOLT_OF_LINEN, "Bolt of Linen Cloth", Profession::Tailoring, 2963)
        .vendor(COARSE_THREAD, 10)
        .build();
    let prices = oracle(&[(LINEN_CLOTH, 15)]);
    let resolver = CostResolver::new(&catalog, &prices);

    let vest = catalog.recipe_by_id(2385).unwrap();
    let priced = resolver.recipe_cost(&player(10, 75), vest).unwrap();
    assert_eq!(priced.cost, 40);
    assert_eq!(
        priced.purchases,
        vec![
            Purchase { item_id: LINEN_CLOTH, quantity: 2 },
            Purchase { item_id: COARSE_THREAD, quantity: 1 },
        ]
    );
}

#[test]
fn test_recipe_cannot_consume_its_own_product_via_crafting() {
    let catalog = CatalogBuilder::new()
        .recipe(recipe(6000, "Refold Bolt", [1, 10, 20, 30], 6001, &[(6001, 1)]))
        .crafted_item(6001, "Refolded Bolt", Profession::Tailoring, 6000)
        .build();
    let tailor = player(1, 75);
    let refold = catalog.recipe_by_id(6000).unwrap();

    let no_auction = oracle(&[]);
    let err = CostResolver::new(&catalog, &no_auction)
        .recipe_cost(&tailor, refold)
        .unwrap_err();
    assert!(err.is_unpriceable());

    let with_auction = oracle(&[(6001, 5)]);
    let priced = CostResolver::new(&catalog, &with_auction)
        .recipe_cost(&tailor, refold)
        .unwrap();
    assert_eq!(priced.cost, 5);
}

#[test]
fn test_passed_deadline_stops_pricing() {
    let catalog = linen_catalog();
    let prices = oracle(&[(LINEN_CLOTH, 10)]);
    let resolver = CostResolver::new(&catalog, &prices).with_deadline(Instant::now());

    let err = resolver.reagent_cost(&player(1, 75), reagent(COARSE_THREAD, 1)).unwrap_err();
    assert!(matches!(err, CostError::DeadlineExceeded));
    assert!(err.is_unpriceable());
}

/// Quotes every item at a fixed price after stalling on each blacklist check.
struct SlowOracle {
    delay: Duration,
    price: Copper,
}

impl PriceOracle for SlowOracle {
    fn quote(&self, _auction_house: AuctionHouseId, _item_id: ItemId) -> Option<Copper> {
        Some(self.price)
    }

    fn is_blacklisted(&self, _item_id: ItemId) -> bool {
        thread::sleep(self.delay);
        false
    }
}

#[test]
fn test_deadline_passing_during_auction_lookup_fails_the_reagent() {
    // The craft route finishes in time from vendor thread; the auction lookup
    // then outlives the deadline.
    let catalog = CatalogBuilder::new()
        .recipe(recipe(2963, "Bolt of Linen Cloth", [1, 25, 37, 50], BOLT_OF_LINEN, &[(COARSE_THREAD, 1)]))
        .crafted_item(BOLT_OF_LINEN, "Bolt of Linen Cloth", Profession::Tailoring, 2963)
        .vendor(COARSE_THREAD, 1000)
        .build();
    let prices = SlowOracle { delay: Duration::from_millis(100), price: 1 };
    let resolver = CostResolver::new(&catalog, &prices)
        .with_deadline(Instant::now() + Duration::from_millis(20));

    let err = resolver.reagent_cost(&player(1, 75), reagent(BOLT_OF_LINEN, 1)).unwrap_err();
    assert!(matches!(err, CostError::DeadlineExceeded));
    assert!(err.is_unpriceable());
}

#[test]
fn test_held_inventory_does_not_discount_reagents() {
    let catalog = linen_catalog();
    let prices = oracle(&[(LINEN_CLOTH, 45)]);
    let resolver = CostResolver::new(&catalog, &prices);

    let mut stocked = player(1, 75);
    stocked.add_inventory(LINEN_CLOTH, 20);

    let priced = resolver.reagent_cost(&stocked, reagent(LINEN_CLOTH, 4)).unwrap();
    assert_eq!(priced.cost, 180);
    assert_eq!(priced.purchases, vec![Purchase { item_id: LINEN_CLOTH, quantity: 4 }]);
    assert_eq!(stocked.inventory_count(LINEN_CLOTH), 20);
}

#[test]
fn test_overflowing_cost_is_an_error() {
    let catalog = CatalogBuilder::new().vendor(7000, u64::MAX).build();
    let prices = oracle(&[]);
    let resolver = CostResolver::new(&catalog, &prices);

    let err = resolver.reagent_cost(&player(1, 75), reagent(7000, 2)).unwrap_err();
    assert!(matches!(err, CostError::Overflow));
    assert!(!err.is_unpriceable());
}
