//! Candidate recipe filters.
//!
//! Both filters are built once per levelling request from the caller's
//! constraints and then applied read-only to every candidate recipe.

use std::collections::HashSet;

use crate::error::LevelError;
use crate::models::{Recipe, SkillupDifficulty, Source};

/// Rejects recipes that are not yet learnable or that have fallen below the
/// caller's acceptable skill-up colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSkillup {
    target: SkillupDifficulty,
}

impl FilterSkillup {
    /// # Errors
    ///
    /// [`LevelError::Config`] when `target` is undefined.
    pub fn new(target: SkillupDifficulty) -> Result<Self, LevelError> {
        match target {
            SkillupDifficulty::Undefined => Err(LevelError::Config(
                "skill-up filter target must be orange, yellow or green".to_string(),
            )),
            target => Ok(FilterSkillup { target }),
        }
    }

    pub fn target(&self) -> SkillupDifficulty {
        self.target
    }

    /// Whether `recipe` is an acceptable craft at skill `current`.
    ///
    /// # Example
    ///
    /// ```
    /// # use proflevel::models::*;
    /// use proflevel::filters::FilterSkillup;
    /// # let recipe = Recipe {
    /// #     id: 1, name: "Linen Bandage".into(), sources: vec![Source::Trainer], learned_at: 1,
    /// #     profession: Profession::Tailoring, bands: DifficultyBands::from([1, 30, 45, 60]),
    /// #     creates: Creates { item_id: 1251, min_quantity: 1, max_quantity: 1 },
    /// #     reagents: vec![Reagent { item_id: 2589, quantity: 1 }], training_cost: 0,
    /// # };
    /// let yellow = FilterSkillup::new(SkillupDifficulty::Yellow).unwrap();
    ///
    /// assert!(yellow.accepts(&recipe, 44));
    /// assert!(!yellow.accepts(&recipe, 45));
    /// ```
    pub fn accepts(&self, recipe: &Recipe, current: u32) -> bool {
        if current < recipe.learnable_at() {
            return false;
        }

        let bands = &recipe.bands;
        match self.target {
            SkillupDifficulty::Green => current < bands.grey,
            SkillupDifficulty::Yellow => current < bands.green,
            SkillupDifficulty::Orange => current < bands.yellow,
            SkillupDifficulty::Undefined => false,
        }
    }
}

/// Rejects recipes obtained only from sources the caller has excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSource {
    allowed: HashSet<Source>,
}

impl FilterSource {
    pub fn new(allowed: impl IntoIterator<Item = Source>) -> Self {
        FilterSource {
            allowed: allowed.into_iter().collect(),
        }
    }

    /// Trainer-taught recipes (non-zero `learned_at`) always pass; others
    /// pass when any of their sources is allowed.
    pub fn accepts(&self, recipe: &Recipe) -> bool {
        if recipe.learned_at != 0 {
            return true;
        }
        recipe.sources.iter().any(|s| self.allowed.contains(s))
    }
}
