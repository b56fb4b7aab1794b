//! Data models and structures for proflevel.
//!
//! This module contains the domain types shared by every other module:
//! the closed enumerations (professions, sources, factions, skill-up tiers),
//! the static catalog entries (recipes, items, vendor items, servers), the
//! request-scoped [`Player`] and the levelling plan produced by the optimizer.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Identifier of an item (reagent, crafted good, vendor good).
pub type ItemId = u32;
/// Identifier of a recipe (the spell id of the craft).
pub type RecipeId = u32;
/// Identifier of an auction house (one per server and faction).
pub type AuctionHouseId = u32;
/// An amount of money in copper, the smallest currency unit.
pub type Copper = u64;

/// Lowest skill level a profession can be trained from.
pub const MINIMUM_PROFESSION_LEVEL: u32 = 1;
/// Highest skill level any profession can reach.
pub const MAXIMUM_PROFESSION_LEVEL: u32 = 450;

// ============================================================================
// Enumerations
// ============================================================================

/// A crafting discipline. The numeric codes are the ones used by the catalog
/// files and by request payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum Profession {
    Alchemy,
    Blacksmithing,
    Cooking,
    Enchanting,
    Engineering,
    Inscription,
    Jewelcrafting,
    Leatherworking,
    Tailoring,
    Undefined,
}

impl Profession {
    /// Every defined profession, in display order.
    pub const ALL: [Profession; 9] = [
        Profession::Alchemy,
        Profession::Blacksmithing,
        Profession::Cooking,
        Profession::Enchanting,
        Profession::Engineering,
        Profession::Inscription,
        Profession::Jewelcrafting,
        Profession::Leatherworking,
        Profession::Tailoring,
    ];

    /// Returns the lowercase name, or `"undefined"`.
    pub fn name(self) -> &'static str {
        match self {
            Profession::Alchemy => "alchemy",
            Profession::Blacksmithing => "blacksmithing",
            Profession::Cooking => "cooking",
            Profession::Enchanting => "enchanting",
            Profession::Engineering => "engineering",
            Profession::Inscription => "inscription",
            Profession::Jewelcrafting => "jewelcrafting",
            Profession::Leatherworking => "leatherworking",
            Profession::Tailoring => "tailoring",
            Profession::Undefined => "undefined",
        }
    }

    pub fn is_defined(self) -> bool {
        self != Profession::Undefined
    }
}

impl From<u16> for Profession {
    fn from(code: u16) -> Self {
        match code {
            171 => Profession::Alchemy,
            164 => Profession::Blacksmithing,
            185 => Profession::Cooking,
            333 => Profession::Enchanting,
            202 => Profession::Engineering,
            773 => Profession::Inscription,
            755 => Profession::Jewelcrafting,
            165 => Profession::Leatherworking,
            197 => Profession::Tailoring,
            _ => Profession::Undefined,
        }
    }
}

impl From<Profession> for u16 {
    fn from(profession: Profession) -> Self {
        match profession {
            Profession::Alchemy => 171,
            Profession::Blacksmithing => 164,
            Profession::Cooking => 185,
            Profession::Enchanting => 333,
            Profession::Engineering => 202,
            Profession::Inscription => 773,
            Profession::Jewelcrafting => 755,
            Profession::Leatherworking => 165,
            Profession::Tailoring => 197,
            Profession::Undefined => 0,
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profession {
    type Err = ParseError;

    /// Accepts either the lowercase name or the numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u16>() {
            return match Profession::from(code) {
                Profession::Undefined => Err(ParseError::unknown("profession", s)),
                p => Ok(p),
            };
        }
        Profession::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::unknown("profession", s))
    }
}

/// How a recipe or item comes into a character's possession.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Source {
    Undefined,
    Crafted,
    Drop,
    Pvp,
    Quest,
    Vendor,
    Trainer,
    Discovery,
    Achievement,
    Disenchanted,
    Fished,
    Gathered,
    Mined,
    Pickpocketed,
    Skinned,
    TransmuteDiscovery,
}

impl Source {
    const NAMED: [Source; 15] = [
        Source::Crafted,
        Source::Drop,
        Source::Pvp,
        Source::Quest,
        Source::Vendor,
        Source::Trainer,
        Source::Discovery,
        Source::Achievement,
        Source::Disenchanted,
        Source::Fished,
        Source::Gathered,
        Source::Mined,
        Source::Pickpocketed,
        Source::Skinned,
        Source::TransmuteDiscovery,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Source::Undefined => "undefined",
            Source::Crafted => "crafted",
            Source::Drop => "drop",
            Source::Pvp => "pvp",
            Source::Quest => "quest",
            Source::Vendor => "vendor",
            Source::Trainer => "trainer",
            Source::Discovery => "discovery",
            Source::Achievement => "achievement",
            Source::Disenchanted => "disenchanted",
            Source::Fished => "fished",
            Source::Gathered => "gathered",
            Source::Mined => "mined",
            Source::Pickpocketed => "pickpocketed",
            Source::Skinned => "skinned",
            Source::TransmuteDiscovery => "transmute_discovery",
        }
    }
}

impl From<u8> for Source {
    fn from(code: u8) -> Self {
        match code {
            1 => Source::Crafted,
            2 => Source::Drop,
            3 => Source::Pvp,
            4 => Source::Quest,
            5 => Source::Vendor,
            6 => Source::Trainer,
            7 => Source::Discovery,
            12 => Source::Achievement,
            15 => Source::Disenchanted,
            16 => Source::Fished,
            17 => Source::Gathered,
            19 => Source::Mined,
            21 => Source::Pickpocketed,
            23 => Source::Skinned,
            30 => Source::TransmuteDiscovery,
            _ => Source::Undefined,
        }
    }
}

impl From<Source> for u8 {
    fn from(source: Source) -> Self {
        match source {
            Source::Undefined => 0,
            Source::Crafted => 1,
            Source::Drop => 2,
            Source::Pvp => 3,
            Source::Quest => 4,
            Source::Vendor => 5,
            Source::Trainer => 6,
            Source::Discovery => 7,
            Source::Achievement => 12,
            Source::Disenchanted => 15,
            Source::Fished => 16,
            Source::Gathered => 17,
            Source::Mined => 19,
            Source::Pickpocketed => 21,
            Source::Skinned => 23,
            Source::TransmuteDiscovery => 30,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Source {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Source::NAMED
            .into_iter()
            .find(|src| src.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::unknown("source", s))
    }
}

/// The easiest recipe colour a caller is willing to craft.
///
/// Orange recipes always award a skill-up; yellow and green ones only
/// sometimes, and the optimizer budgets extra crafts for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum SkillupDifficulty {
    Undefined,
    Orange,
    Yellow,
    Green,
}

impl SkillupDifficulty {
    pub fn name(self) -> &'static str {
        match self {
            SkillupDifficulty::Undefined => "undefined",
            SkillupDifficulty::Orange => "orange",
            SkillupDifficulty::Yellow => "yellow",
            SkillupDifficulty::Green => "green",
        }
    }
}

impl From<u8> for SkillupDifficulty {
    fn from(code: u8) -> Self {
        match code {
            1 => SkillupDifficulty::Orange,
            2 => SkillupDifficulty::Yellow,
            3 => SkillupDifficulty::Green,
            _ => SkillupDifficulty::Undefined,
        }
    }
}

impl From<SkillupDifficulty> for u8 {
    fn from(difficulty: SkillupDifficulty) -> Self {
        match difficulty {
            SkillupDifficulty::Undefined => 0,
            SkillupDifficulty::Orange => 1,
            SkillupDifficulty::Yellow => 2,
            SkillupDifficulty::Green => 3,
        }
    }
}

impl fmt::Display for SkillupDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SkillupDifficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orange" => Ok(SkillupDifficulty::Orange),
            "yellow" => Ok(SkillupDifficulty::Yellow),
            "green" => Ok(SkillupDifficulty::Green),
            other => Err(ParseError::unknown("skill-up difficulty", other)),
        }
    }
}

/// Playable faction. Selects which auction house of a server is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Faction {
    Undefined,
    Alliance,
    Horde,
}

impl Faction {
    pub fn name(self) -> &'static str {
        match self {
            Faction::Undefined => "undefined",
            Faction::Alliance => "alliance",
            Faction::Horde => "horde",
        }
    }

    /// Index of this faction's auction house in [`Server::auction_house_ids`].
    pub fn code(self) -> u8 {
        u8::from(self)
    }
}

impl From<u8> for Faction {
    fn from(code: u8) -> Self {
        match code {
            1 => Faction::Alliance,
            2 => Faction::Horde,
            _ => Faction::Undefined,
        }
    }
}

impl From<Faction> for u8 {
    fn from(faction: Faction) -> Self {
        match faction {
            Faction::Undefined => 0,
            Faction::Alliance => 1,
            Faction::Horde => 2,
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Faction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alliance" => Ok(Faction::Alliance),
            "horde" => Ok(Faction::Horde),
            other => Err(ParseError::unknown("faction", other)),
        }
    }
}

/// Game region a server belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "EU", alias = "eu")]
    Eu,
    #[serde(rename = "US", alias = "us")]
    Us,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Eu => f.write_str("EU"),
            Region::Us => f.write_str("US"),
        }
    }
}

impl FromStr for Region {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EU" => Ok(Region::Eu),
            "US" => Ok(Region::Us),
            other => Err(ParseError::unknown("region", other)),
        }
    }
}

// ============================================================================
// Catalog Entries
// ============================================================================

/// The four skill values at which a recipe changes colour.
///
/// Below `yellow` the recipe is orange and always awards a skill-up; from
/// `grey` onwards it never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyBands {
    pub orange: u32,
    pub yellow: u32,
    pub green: u32,
    pub grey: u32,
}

impl From<[u32; 4]> for DifficultyBands {
    fn from([orange, yellow, green, grey]: [u32; 4]) -> Self {
        DifficultyBands { orange, yellow, green, grey }
    }
}

/// One reagent requirement of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reagent {
    pub item_id: ItemId,
    pub quantity: u32,
}

/// What a single craft of a recipe produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Creates {
    pub item_id: ItemId,
    /// Guaranteed number of items per craft
    pub min_quantity: u32,
    pub max_quantity: u32,
}

/// A craftable recipe belonging to exactly one profession.
///
/// Recipes are loaded once with the catalog and never mutated.
///
/// # Example
///
/// ```
/// use proflevel::models::{Creates, DifficultyBands, Profession, Reagent, Recipe, Source};
///
/// let recipe = Recipe {
///     id: 2329,
///     name: "Elixir of Lion's Strength".to_string(),
///     sources: vec![Source::Trainer],
///     learned_at: 1,
///     profession: Profession::Alchemy,
///     bands: DifficultyBands::from([1, 55, 75, 95]),
///     creates: Creates { item_id: 2454, min_quantity: 1, max_quantity: 1 },
///     reagents: vec![Reagent { item_id: 2449, quantity: 1 }],
///     training_cost: 0,
/// };
///
/// assert_eq!(recipe.learnable_at(), 1);
/// assert!(recipe.validate().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    /// Every way the recipe can be obtained
    pub sources: Vec<Source>,
    /// Skill at which a trainer teaches the recipe (0 if not trainer-taught)
    pub learned_at: u32,
    pub profession: Profession,
    pub bands: DifficultyBands,
    pub creates: Creates,
    pub reagents: Vec<Reagent>,
    pub training_cost: Copper,
}

impl Recipe {
    /// First skill level at which the recipe can be crafted.
    pub fn learnable_at(&self) -> u32 {
        self.learned_at.max(self.bands.orange)
    }

    /// Transmutes are never used to price reagents: their ingredient graph
    /// loops back onto itself.
    pub fn is_transmute(&self) -> bool {
        self.name.contains("Transmute")
    }

    /// Checks the recipe's invariants and returns every violation found.
    ///
    /// An empty vector means the recipe is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        let mut check = |ok: bool, msg: &str| {
            if !ok {
                violations.push(msg.to_string());
            }
        };

        check(self.id > 0, "id must be greater than zero");
        check(!self.name.is_empty(), "name must not be empty");
        check(!self.sources.is_empty(), "source must have one or more nominated");
        check(
            self.sources.iter().all(|s| *s != Source::Undefined),
            "source must be of a defined type",
        );
        check(self.profession.is_defined(), "profession must be of a defined type");

        let learnable = self.learnable_at();
        check(learnable >= 1, "colors.orange must be greater than zero");
        check(self.bands.yellow > learnable, "colors.yellow must be greater than orange or learnedat");
        check(self.bands.green > self.bands.yellow, "colors.green must be greater than yellow");
        check(self.bands.grey > self.bands.green, "colors.grey must be greater than green");

        check(self.creates.item_id != 0, "creates.id must feature a valid id");
        check(self.creates.min_quantity > 0, "creates.min must create at least one");
        check(
            self.creates.max_quantity >= self.creates.min_quantity,
            "creates.max must be equal to, or greater than, the minimum quantity",
        );

        check(!self.reagents.is_empty(), "reagents must have one or more nominated");
        check(
            self.reagents.iter().all(|r| r.quantity > 0),
            "reagents.quantity must be at least one",
        );

        violations
    }
}

/// Links an item to the recipe that crafts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CraftedBy {
    pub profession: Profession,
    pub recipe_id: RecipeId,
}

/// A physical item that can be owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Set when the item is itself the product of a recipe
    pub crafted_by: Option<CraftedBy>,
    /// Set when the item is a recipe scroll that teaches a craft
    pub teaches_craft: Option<CraftedBy>,
    pub sources: Vec<Source>,
}

/// An item sold by NPC vendors at a fixed price.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VendorItem {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "source", default)]
    pub sources: Vec<Source>,
    /// Price in copper per unit
    pub cost: Copper,
}

/// A game server and its auction houses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Server {
    pub name: String,
    pub region: Region,
    /// Auction house ids indexed by faction code (0 = neutral)
    #[serde(rename = "auctionhouseids")]
    pub auction_house_ids: Vec<AuctionHouseId>,
}

impl Server {
    /// Returns the auction house id used by `faction` on this server.
    pub fn auction_house(&self, faction: Faction) -> Option<AuctionHouseId> {
        match faction {
            Faction::Undefined => None,
            f => self.auction_house_ids.get(f.code() as usize).copied(),
        }
    }
}

// ============================================================================
// Request State
// ============================================================================

/// The character being levelled.
///
/// A player is created for one levelling request, mutated only by the
/// optimizer while that request runs and dropped afterwards.
///
/// The inventory is bookkeeping for callers only. Cost resolution and the
/// levelling simulation never read or change it, so every reagent is priced
/// as if bought, whatever the player holds.
///
/// # Example
///
/// ```
/// use proflevel::models::{Player, Profession};
///
/// let mut player = Player::new(Profession::Tailoring, 1, 75, 513);
/// player.add_inventory(2589, 20);
///
/// assert!(player.consume_inventory(2589, 5));
/// assert_eq!(player.inventory_count(2589), 15);
/// assert!(!player.consume_inventory(2589, 16));
/// ```
#[derive(Debug, Clone)]
pub struct Player {
    pub profession: Profession,
    pub auction_house: AuctionHouseId,
    pub skill_current: u32,
    pub skill_desired: u32,
    known_recipes: HashSet<RecipeId>,
    inventory: HashMap<ItemId, u32>,
}

impl Player {
    pub fn new(
        profession: Profession,
        skill_current: u32,
        skill_desired: u32,
        auction_house: AuctionHouseId,
    ) -> Self {
        Player {
            profession,
            auction_house,
            skill_current,
            skill_desired,
            known_recipes: HashSet::new(),
            inventory: HashMap::new(),
        }
    }

    /// Adds a recipe to the player's known recipes.
    pub fn learn_recipe(&mut self, id: RecipeId) {
        self.known_recipes.insert(id);
    }

    pub fn knows_recipe(&self, id: RecipeId) -> bool {
        self.known_recipes.contains(&id)
    }

    /// Quantity of an item on hand (0 when absent). Not used when pricing.
    pub fn inventory_count(&self, id: ItemId) -> u32 {
        self.inventory.get(&id).copied().unwrap_or(0)
    }

    pub fn add_inventory(&mut self, id: ItemId, quantity: u32) {
        let entry = self.inventory.entry(id).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    /// Removes `quantity` of an item. Returns `false`, leaving the inventory
    /// untouched, when not enough is on hand.
    pub fn consume_inventory(&mut self, id: ItemId, quantity: u32) -> bool {
        match self.inventory.get_mut(&id) {
            Some(held) if *held >= quantity => {
                *held -= quantity;
                true
            }
            _ => false,
        }
    }
}

// ============================================================================
// Levelling Plan
// ============================================================================

/// A single item purchase line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Purchase {
    pub item_id: ItemId,
    pub quantity: u32,
}

/// Everything that has to be bought for one step of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PurchaseOrder {
    /// Total cost of the order in copper
    pub cost: Copper,
    /// Purchase lines, one per item id, in first-seen order
    pub items: Vec<Purchase>,
}

impl PurchaseOrder {
    /// Builds an order, merging repeated item ids into a single line.
    pub fn new(cost: Copper, purchases: &[Purchase]) -> Self {
        let mut items: Vec<Purchase> = Vec::with_capacity(purchases.len());
        for purchase in purchases {
            match items.iter_mut().find(|p| p.item_id == purchase.item_id) {
                Some(line) => line.quantity = line.quantity.saturating_add(purchase.quantity),
                None => items.push(*purchase),
            }
        }
        PurchaseOrder { cost, items }
    }
}

/// One skill point of the levelling plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelStep {
    /// Skill level before the craft
    pub skill: u32,
    pub recipe_id: RecipeId,
    pub recipe_name: String,
    /// Conservative number of crafts budgeted to get the skill-up
    pub crafts: u32,
    pub cost_per_craft: Copper,
    /// `crafts * cost_per_craft`
    pub cost: Copper,
    /// Reagents bought for a single craft
    pub purchases: PurchaseOrder,
}

/// Result of a levelling simulation.
///
/// A stalled run is a normal outcome: no recipe could be crafted and priced
/// at `level`, so the plan stops there with the cost accumulated so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LevelOutcome {
    Completed {
        final_level: u32,
        total_cost: Copper,
        steps: Vec<LevelStep>,
    },
    Stalled {
        level: u32,
        partial_cost: Copper,
        steps: Vec<LevelStep>,
    },
}

impl LevelOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, LevelOutcome::Completed { .. })
    }

    /// Skill reached: the target on success, the stalled level otherwise.
    pub fn level(&self) -> u32 {
        match self {
            LevelOutcome::Completed { final_level, .. } => *final_level,
            LevelOutcome::Stalled { level, .. } => *level,
        }
    }

    /// Accumulated cost, partial when stalled.
    pub fn cost(&self) -> Copper {
        match self {
            LevelOutcome::Completed { total_cost, .. } => *total_cost,
            LevelOutcome::Stalled { partial_cost, .. } => *partial_cost,
        }
    }

    pub fn steps(&self) -> &[LevelStep] {
        match self {
            LevelOutcome::Completed { steps, .. } | LevelOutcome::Stalled { steps, .. } => steps,
        }
    }
}

// ============================================================================
// Catalog Row Structures
// ============================================================================

/// JSON row structure for `recipes.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeRow {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub source: Vec<Source>,
    #[serde(rename = "learnedat", default)]
    pub learned_at: u32,
    /// Owning profession(s); exactly one is expected
    pub skill: Vec<Profession>,
    /// Thresholds in order orange, yellow, green, grey
    pub colors: Vec<u32>,
    /// `[item id, min quantity, max quantity]`
    pub creates: Vec<u32>,
    /// `[[item id, quantity], ...]`
    pub reagents: Vec<Vec<u32>>,
    #[serde(rename = "trainingcost", default)]
    pub training_cost: Copper,
}

/// JSON row structure for `items.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRow {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    /// `[profession code, recipe id]`
    #[serde(rename = "craftedby", default)]
    pub crafted_by: Vec<u32>,
    /// `[profession code, recipe id]`
    #[serde(rename = "teachescraft", default)]
    pub teaches_craft: Vec<u32>,
    #[serde(default)]
    pub source: Vec<Source>,
}

/// CSV row structure for auction house price snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PriceRow {
    pub auction_house_id: AuctionHouseId,
    pub item_id: ItemId,
    /// Cheapest current buyout
    pub min_buyout: Copper,
    /// Average value over the last two weeks
    pub market_value: Copper,
    /// Average value over the last two months
    pub historical: Copper,
    #[serde(default)]
    pub num_auctions: u32,
}
