//! WebAssembly bindings for proflevel.
//!
//! This module provides JavaScript-accessible functions for the levelling
//! planner. Everything crosses the boundary as JSON strings: the page sends
//! the catalog, an auction snapshot and the request in one document and gets
//! the plan back.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::data::catalog_from_rows;
use crate::display::format_gold;
use crate::error::LevelError;
use crate::models::{ItemId, ItemRow, LevelOutcome, LevelStep, PriceRow, RecipeRow, Server, VendorItem};
use crate::optimizer::plan_levelling;
use crate::pricing::{PriceType, SnapshotOracle};
use crate::request::LevelRequest;

/// JavaScript-friendly input for a levelling request.
#[derive(Debug, Clone, Deserialize)]
pub struct JsLevelInput {
    pub recipes: Vec<RecipeRow>,
    pub items: Vec<ItemRow>,
    #[serde(default)]
    pub vendor: Vec<VendorItem>,
    pub servers: Vec<Server>,
    #[serde(default)]
    pub prices: Vec<PriceRow>,
    #[serde(default)]
    pub price_type: PriceType,
    /// Replaces the default blacklist when present
    #[serde(default)]
    pub blacklist: Option<Vec<ItemId>>,
    pub request: LevelRequest,
}

/// JavaScript-friendly levelling step output.
#[derive(Debug, Clone, Serialize)]
pub struct JsLevelStep {
    pub skill: u32,
    pub recipe_id: u32,
    pub recipe_name: String,
    pub crafts: u32,
    pub cost: u64,
    pub cost_formatted: String,
    pub purchases: Vec<(ItemId, u32)>,
}

impl From<&LevelStep> for JsLevelStep {
    fn from(step: &LevelStep) -> Self {
        JsLevelStep {
            skill: step.skill,
            recipe_id: step.recipe_id,
            recipe_name: step.recipe_name.clone(),
            crafts: step.crafts,
            cost: step.cost,
            cost_formatted: format_gold(step.cost),
            purchases: step
                .purchases
                .items
                .iter()
                .map(|p| (p.item_id, p.quantity))
                .collect(),
        }
    }
}

/// JavaScript-friendly levelling result.
///
/// `success` is true whenever a plan was produced, including a stalled one.
/// `error` is reserved for requests that could not be planned at all.
#[derive(Debug, Clone, Serialize, Default)]
pub struct JsLevelResult {
    pub success: bool,
    pub error: Option<String>,
    /// "completed" or "stalled" when the request was planned
    pub status: Option<String>,
    /// Skill level at which no recipe could be crafted and priced
    pub stalled_at: Option<u32>,
    pub level: u32,
    pub total_cost: u64,
    pub total_cost_formatted: String,
    pub steps: Vec<JsLevelStep>,
}

impl JsLevelResult {
    fn failure(error: String) -> Self {
        JsLevelResult {
            success: false,
            error: Some(error),
            total_cost_formatted: format_gold(0),
            ..Default::default()
        }
    }
}

impl From<&LevelOutcome> for JsLevelResult {
    fn from(outcome: &LevelOutcome) -> Self {
        let (status, stalled_at) = match outcome {
            LevelOutcome::Completed { .. } => ("completed", None),
            LevelOutcome::Stalled { level, .. } => ("stalled", Some(*level)),
        };
        JsLevelResult {
            success: true,
            error: None,
            status: Some(status.to_string()),
            stalled_at,
            level: outcome.level(),
            total_cost: outcome.cost(),
            total_cost_formatted: format_gold(outcome.cost()),
            steps: outcome.steps().iter().map(JsLevelStep::from).collect(),
        }
    }
}

fn run_level(input: JsLevelInput) -> Result<LevelOutcome, LevelError> {
    let catalog = catalog_from_rows(input.recipes, input.items, input.vendor, input.servers)?;
    let mut oracle = SnapshotOracle::new(input.prices, input.price_type);
    if let Some(blacklist) = input.blacklist {
        oracle = oracle.with_blacklist(blacklist);
    }
    // std::time::Instant is unavailable in the browser, so no deadline here.
    plan_levelling(&catalog, &oracle, &input.request, None)
}

#[cfg(target_arch = "wasm32")]
fn warn_console(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
fn warn_console(message: &str) {
    tracing::warn!("{}", message);
}

/// Run the levelling planner for one request.
///
/// Takes a JSON string input and returns a JSON string result.
#[wasm_bindgen]
pub fn level_profession(input_json: &str) -> String {
    let result = match serde_json::from_str::<JsLevelInput>(input_json) {
        Err(e) => JsLevelResult::failure(format!("Invalid input: {}", e)),
        Ok(input) => match run_level(input) {
            Ok(outcome) => {
                if let LevelOutcome::Stalled { level, .. } = &outcome {
                    warn_console(&format!("levelling stalled at {}", level));
                }
                JsLevelResult::from(&outcome)
            }
            Err(e) => JsLevelResult::failure(e.to_string()),
        },
    };

    serde_json::to_string(&result).unwrap_or_default()
}

/// Get the version of the planner.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
