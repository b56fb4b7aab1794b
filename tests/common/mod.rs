//! Shared fixtures: small in-memory catalogs and price snapshots.

#![allow(dead_code)]

use proflevel::catalog::Catalog;
use proflevel::models::{
    Copper, CraftedBy, Creates, DifficultyBands, Item, ItemId, Player, PriceRow, Profession, Reagent, Recipe,
    RecipeId, Region, Source, VendorItem, Server,
};
use proflevel::pricing::{PriceType, SnapshotOracle};

/// Auction house used by the fixture server for the Horde.
pub const HORDE_AH: u32 = 513;
pub const SERVER: &str = "Firemaw";

/// A trainer-taught tailoring recipe.
pub fn recipe(id: RecipeId, name: &str, bands: [u32; 4], creates: ItemId, reagents: &[(ItemId, u32)]) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        sources: vec![Source::Trainer],
        learned_at: bands[0],
        profession: Profession::Tailoring,
        bands: DifficultyBands::from(bands),
        creates: Creates {
            item_id: creates,
            min_quantity: 1,
            max_quantity: 1,
        },
        reagents: reagents
            .iter()
            .map(|&(item_id, quantity)| Reagent { item_id, quantity })
            .collect(),
        training_cost: 0,
    }
}

pub fn player(skill: u32, desired: u32) -> Player {
    Player::new(Profession::Tailoring, skill, desired, HORDE_AH)
}

#[derive(Default)]
pub struct CatalogBuilder {
    recipes: Vec<Recipe>,
    items: Vec<Item>,
    vendor: Vec<VendorItem>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recipe(mut self, recipe: Recipe) -> Self {
        self.recipes.push(recipe);
        self
    }

    /// An item with no crafting link.
    pub fn item(mut self, id: ItemId, name: &str) -> Self {
        self.items.push(Item {
            id,
            name: name.to_string(),
            crafted_by: None,
            teaches_craft: None,
            sources: vec![Source::Drop],
        });
        self
    }

    /// An item produced by `recipe_id` of `profession`.
    pub fn crafted_item(mut self, id: ItemId, name: &str, profession: Profession, recipe_id: RecipeId) -> Self {
        self.items.push(Item {
            id,
            name: name.to_string(),
            crafted_by: Some(CraftedBy { profession, recipe_id }),
            teaches_craft: None,
            sources: vec![Source::Crafted],
        });
        self
    }

    pub fn vendor(mut self, id: ItemId, cost: Copper) -> Self {
        self.vendor.push(VendorItem {
            id,
            name: format!("Vendor Good {}", id),
            sources: vec![Source::Vendor],
            cost,
        });
        self
    }

    pub fn build(self) -> Catalog {
        let servers = vec![Server {
            name: SERVER.to_string(),
            region: Region::Eu,
            auction_house_ids: vec![500, 512, HORDE_AH],
        }];
        Catalog::new(self.recipes, self.items, self.vendor, servers).expect("fixture catalog is valid")
    }
}

/// Snapshot oracle quoting `prices` on the Horde auction house.
pub fn oracle(prices: &[(ItemId, Copper)]) -> SnapshotOracle {
    SnapshotOracle::new(
        prices.iter().map(|&(item_id, price)| PriceRow {
            auction_house_id: HORDE_AH,
            item_id,
            min_buyout: price,
            market_value: price,
            historical: price,
            num_auctions: 1,
        }),
        PriceType::MinBuyout,
    )
}
