//! # proflevel
//!
//! A command-line tool and library that plans the cheapest way to level a
//! crafting profession from one skill value to another.
//!
//! For every skill point the planner considers each recipe the character may
//! craft and prices it from:
//!
//! - Fixed vendor prices for reagents sold by NPCs
//! - The cost of crafting a reagent yourself, recursively
//! - Live auction house prices for the character's server and faction
//!
//! Recipes close to their grey threshold do not always award a skill-up, so
//! each candidate's cost is multiplied by a conservative number of crafts
//! before the cheapest one is picked.
//!
//! ## Modules
//!
//! - [`models`] - Core data structures: professions, recipes, items, players, plans
//! - [`catalog`] - Read-only recipe/item/vendor/server catalog
//! - [`data`] - JSON catalog and CSV price snapshot loading
//! - [`pricing`] - The price oracle trait and the snapshot oracle
//! - [`filters`] - Source and skill-up candidate filters
//! - [`cost`] - Recursive reagent cost resolution
//! - [`optimizer`] - Skill-up probability model and levelling simulation
//! - [`request`] - Levelling requests and their validation
//! - [`display`] - Output formatting and display utilities
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use proflevel::{
//!     data::{load_all_data, load_price_snapshot},
//!     display::display_results,
//!     models::{Faction, Profession, SkillupDifficulty, Source},
//!     optimizer::plan_levelling,
//!     pricing::{PriceType, SnapshotOracle},
//!     request::LevelRequest,
//! };
//!
//! let catalog = load_all_data(Path::new("data")).unwrap();
//! let prices = load_price_snapshot(Path::new("prices.csv")).unwrap();
//! let oracle = SnapshotOracle::new(prices, PriceType::MinBuyout);
//!
//! let request = LevelRequest {
//!     region: "EU".to_string(),
//!     server: "Firemaw".to_string(),
//!     faction: Faction::Horde,
//!     profession: Profession::Tailoring,
//!     start_level: 1,
//!     finish_level: 150,
//!     filter_source: vec![Source::Trainer, Source::Vendor],
//!     filter_skillup: SkillupDifficulty::Yellow,
//! };
//!
//! let outcome = plan_levelling(&catalog, &oracle, &request, None).unwrap();
//! display_results(&outcome, &catalog);
//! ```
//!
//! ## Skill-up Tiers
//!
//! The request's `filter_skillup` sets the easiest colour still accepted:
//!
//! 1. **Orange**: only guaranteed skill-ups.
//! 2. **Yellow**: also recipes that usually award a skill-up.
//! 3. **Green**: everything short of grey, with more crafts budgeted.

pub mod catalog;
pub mod cost;
pub mod data;
pub mod display;
pub mod error;
pub mod filters;
pub mod models;
pub mod optimizer;
pub mod pricing;
pub mod request;
pub mod wasm;
