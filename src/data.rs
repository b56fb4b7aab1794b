//! Data loading functionality for proflevel.
//!
//! The catalog lives in a directory of JSON files (`recipes.json`,
//! `items.json`, `vendor.json`, `servers.json`), each holding one array.
//! Auction prices come from a separate CSV snapshot.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{CatalogError, PricingError};
use crate::models::{
    CraftedBy, Creates, DifficultyBands, Item, ItemRow, PriceRow, Profession, Reagent, Recipe, RecipeRow,
    Server, VendorItem,
};

/// Reads a JSON array from `path`.
fn load_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let bytes = std::fs::read(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a `[profession code, recipe id]` pair. Anything else means the
/// item has no such link.
fn parse_craft_link(link: &[u32]) -> Option<CraftedBy> {
    match link {
        [profession, recipe_id] => Some(CraftedBy {
            profession: Profession::from(u16::try_from(*profession).unwrap_or(0)),
            recipe_id: *recipe_id,
        }),
        _ => None,
    }
}

impl TryFrom<RecipeRow> for Recipe {
    type Error = CatalogError;

    /// Converts a raw row, rejecting rows whose arrays have the wrong shape.
    /// Value-level invariants are checked later by [`Recipe::validate`].
    fn try_from(row: RecipeRow) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();

        if row.skill.len() != 1 {
            violations.push("profession/skill must only be associated with one".to_string());
        }
        let bands: Option<[u32; 4]> = row.colors.as_slice().try_into().ok();
        if bands.is_none() {
            violations.push("colors must have all four skillup colors defined".to_string());
        }
        let creates: Option<[u32; 3]> = row.creates.as_slice().try_into().ok();
        if creates.is_none() {
            violations.push("creates must have an id and a quantity range".to_string());
        }
        let mut reagents = Vec::with_capacity(row.reagents.len());
        for pair in &row.reagents {
            match pair.as_slice() {
                [item_id, quantity] => reagents.push(Reagent {
                    item_id: *item_id,
                    quantity: *quantity,
                }),
                _ => violations.push("reagents must be [id, quantity] pairs".to_string()),
            }
        }

        match (bands, creates) {
            (Some(bands), Some([item_id, min_quantity, max_quantity])) if violations.is_empty() => Ok(Recipe {
                id: row.id,
                name: row.name,
                sources: row.source,
                learned_at: row.learned_at,
                profession: row.skill[0],
                bands: DifficultyBands::from(bands),
                creates: Creates {
                    item_id,
                    min_quantity,
                    max_quantity,
                },
                reagents,
                training_cost: row.training_cost,
            }),
            _ => Err(CatalogError::InvalidRecipe { id: row.id, violations }),
        }
    }
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            name: row.name,
            crafted_by: parse_craft_link(&row.crafted_by),
            teaches_craft: parse_craft_link(&row.teaches_craft),
            sources: row.source,
        }
    }
}

/// Builds a catalog from already-decoded rows.
///
/// Used by [`load_all_data`] and by the WASM entry point, which receives
/// the rows inline instead of from disk.
pub fn catalog_from_rows(
    recipes: Vec<RecipeRow>,
    items: Vec<ItemRow>,
    vendor_items: Vec<VendorItem>,
    servers: Vec<Server>,
) -> Result<Catalog, CatalogError> {
    let recipes = recipes
        .into_iter()
        .map(Recipe::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let items = items.into_iter().map(Item::from).collect();
    Catalog::new(recipes, items, vendor_items, servers)
}

/// Loads recipe rows from `recipes.json`.
pub fn load_recipes(path: &Path) -> Result<Vec<RecipeRow>, CatalogError> {
    load_json_array(path)
}

/// Loads item rows from `items.json`.
pub fn load_items(path: &Path) -> Result<Vec<ItemRow>, CatalogError> {
    load_json_array(path)
}

/// Loads vendor goods from `vendor.json`.
pub fn load_vendor_items(path: &Path) -> Result<Vec<VendorItem>, CatalogError> {
    load_json_array(path)
}

/// Loads servers from `servers.json`.
pub fn load_servers(path: &Path) -> Result<Vec<Server>, CatalogError> {
    load_json_array(path)
}

/// Loads the whole catalog from a data directory.
///
/// # Arguments
///
/// * `data_dir` - Directory containing the four catalog JSON files
///
/// # Returns
///
/// A validated [`Catalog`], or the first I/O, parse or invariant error.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use proflevel::data::load_all_data;
///
/// let catalog = load_all_data(Path::new("data")).unwrap();
/// println!("Loaded {} recipes", catalog.recipe_count());
/// ```
pub fn load_all_data(data_dir: &Path) -> Result<Catalog, CatalogError> {
    let recipes = load_recipes(&data_dir.join("recipes.json"))?;
    let items = load_items(&data_dir.join("items.json"))?;
    let vendor_items = load_vendor_items(&data_dir.join("vendor.json"))?;
    let servers = load_servers(&data_dir.join("servers.json"))?;

    debug!(
        recipes = recipes.len(),
        items = items.len(),
        vendor_items = vendor_items.len(),
        servers = servers.len(),
        "catalog files read"
    );

    catalog_from_rows(recipes, items, vendor_items, servers)
}

/// Reads auction price rows from any CSV source.
///
/// # CSV Format
///
/// Expected columns: `auction_house_id, item_id, min_buyout, market_value, historical, num_auctions`
pub fn read_price_snapshot<R: std::io::Read>(reader: R) -> Result<Vec<PriceRow>, PricingError> {
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: PriceRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Loads an auction price snapshot from a CSV file.
pub fn load_price_snapshot(path: &Path) -> Result<Vec<PriceRow>, PricingError> {
    let file = File::open(path).map_err(|source| PricingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_price_snapshot(file)
}
