//! The static game catalog.
//!
//! A [`Catalog`] is built once at startup (see [`crate::data`]) and is then
//! read-only. It holds no interior mutability, so a single instance can be
//! shared across concurrent levelling requests behind an `Arc`.

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::models::{Copper, Item, ItemId, Profession, Recipe, RecipeId, Server, VendorItem};

/// Recipes, items, vendor goods and servers, indexed for lookup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Recipes in file order; candidate iteration follows this order
    recipes: Vec<Recipe>,
    recipe_index: HashMap<RecipeId, usize>,
    items: HashMap<ItemId, Item>,
    vendor_items: HashMap<ItemId, VendorItem>,
    servers: Vec<Server>,
}

impl Catalog {
    /// Builds a catalog, rejecting any recipe that breaks its invariants.
    ///
    /// # Errors
    ///
    /// [`CatalogError::InvalidRecipe`] for the first malformed recipe, or
    /// [`CatalogError::DuplicateRecipe`] if two recipes share an id.
    pub fn new(
        recipes: Vec<Recipe>,
        items: Vec<Item>,
        vendor_items: Vec<VendorItem>,
        servers: Vec<Server>,
    ) -> Result<Self, CatalogError> {
        let mut recipe_index = HashMap::with_capacity(recipes.len());
        for (i, recipe) in recipes.iter().enumerate() {
            let violations = recipe.validate();
            if !violations.is_empty() {
                return Err(CatalogError::InvalidRecipe {
                    id: recipe.id,
                    violations,
                });
            }
            if recipe_index.insert(recipe.id, i).is_some() {
                return Err(CatalogError::DuplicateRecipe(recipe.id));
            }
        }

        Ok(Catalog {
            recipes,
            recipe_index,
            items: items.into_iter().map(|i| (i.id, i)).collect(),
            vendor_items: vendor_items.into_iter().map(|v| (v.id, v)).collect(),
            servers,
        })
    }

    /// All recipes owned by `profession`, in stable catalog order.
    pub fn recipes_for(&self, profession: Profession) -> impl Iterator<Item = &Recipe> + '_ {
        self.recipes
            .iter()
            .filter(move |r| r.profession == profession)
    }

    pub fn recipe_by_id(&self, id: RecipeId) -> Result<&Recipe, CatalogError> {
        self.recipe_index
            .get(&id)
            .map(|&i| &self.recipes[i])
            .ok_or(CatalogError::RecipeNotFound(id))
    }

    pub fn item_by_id(&self, id: ItemId) -> Result<&Item, CatalogError> {
        self.items.get(&id).ok_or(CatalogError::ItemNotFound(id))
    }

    pub fn vendor_item_by_id(&self, id: ItemId) -> Option<&VendorItem> {
        self.vendor_items.get(&id)
    }

    /// Fixed vendor price of one unit, if any vendor sells the item.
    pub fn vendor_price_by_id(&self, id: ItemId) -> Option<Copper> {
        self.vendor_items.get(&id).map(|v| v.cost)
    }

    /// Looks a server up by name, ignoring case.
    pub fn server_by_name(&self, name: &str) -> Result<&Server, CatalogError> {
        self.servers
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CatalogError::ServerNotFound(name.to_string()))
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
