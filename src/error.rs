//! Error types for proflevel.
//!
//! Catalog and snapshot loading failures are fatal for the caller that asked
//! for them. [`CostError`] is different: it describes why one acquisition
//! route or one candidate recipe is unavailable, and the optimizer absorbs
//! it instead of aborting the levelling run.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{Faction, ItemId, RecipeId};
use crate::request::ValidationErrors;

/// Failure to parse an enumeration from user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    pub fn unknown(kind: &'static str, value: &str) -> Self {
        ParseError {
            kind,
            value: value.to_string(),
        }
    }
}

/// Errors raised while loading or querying the static catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("couldn't read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("couldn't parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("recipe with id {id} is invalid: {}", .violations.join("; "))]
    InvalidRecipe { id: RecipeId, violations: Vec<String> },

    #[error("duplicate recipe id {0}")]
    DuplicateRecipe(RecipeId),

    #[error("couldn't locate recipe with id {0}")]
    RecipeNotFound(RecipeId),

    #[error("no entry for item {0}")]
    ItemNotFound(ItemId),

    #[error("unable to locate server '{0}'")]
    ServerNotFound(String),

    #[error("server '{server}' has no auction house for {faction}")]
    AuctionHouseNotFound { server: String, faction: Faction },
}

/// Errors raised while loading an auction house price snapshot.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("couldn't read price snapshot {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed price snapshot: {0}")]
    Csv(#[from] csv::Error),
}

/// Why a reagent, or a recipe as a whole, could not be priced.
#[derive(Debug, Error)]
pub enum CostError {
    #[error("couldn't buy or craft item {item_id}")]
    Unpriceable { item_id: ItemId },

    #[error("item {item_id} is blacklisted and can't be crafted")]
    Blacklisted { item_id: ItemId },

    #[error("item {item_id} is not craftable")]
    NotCraftable { item_id: ItemId },

    #[error("recipe {recipe_id} can't be crafted with this profession")]
    WrongProfession { recipe_id: RecipeId },

    #[error("recipe {recipe_id} is a transmute")]
    Transmute { recipe_id: RecipeId },

    #[error("item {item_id} depends on itself")]
    CyclicDependency { item_id: ItemId },

    #[error("pricing deadline exceeded")]
    DeadlineExceeded,

    #[error("cost overflow")]
    Overflow,

    #[error("couldn't price recipe {recipe_id}: {source}")]
    Reagent {
        recipe_id: RecipeId,
        #[source]
        source: Box<CostError>,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl CostError {
    /// Returns the innermost error of a chain of wrapped reagent failures.
    pub fn root(&self) -> &CostError {
        match self {
            CostError::Reagent { source, .. } => source.root(),
            other => other,
        }
    }

    /// True when the failure only means "no way to obtain this reagent":
    /// no vendor, craft or auction route, a blacklisted item, or a pricing
    /// deadline hit. Such candidates are skipped quietly.
    pub fn is_unpriceable(&self) -> bool {
        matches!(
            self.root(),
            CostError::Unpriceable { .. } | CostError::Blacklisted { .. } | CostError::DeadlineExceeded
        )
    }
}

/// Errors returned to the caller of a levelling request.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("invalid request: {0}")]
    Validation(ValidationErrors),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

pub type Result<T> = std::result::Result<T, LevelError>;
