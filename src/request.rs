//! Levelling requests and their validation.
//!
//! A request arrives from the CLI or the WASM entry point already decoded;
//! [`LevelRequest::validate`] checks it against the catalog before any
//! simulation is attempted.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::{CatalogError, LevelError};
use crate::models::{
    AuctionHouseId, Faction, Profession, Region, SkillupDifficulty, Source, MAXIMUM_PROFESSION_LEVEL,
    MINIMUM_PROFESSION_LEVEL,
};

/// Field errors collected while validating a request.
///
/// Only the first message recorded for a field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` against `field` unless `ok` holds.
    pub fn check(&mut self, ok: bool, field: &str, message: impl Into<String>) {
        if !ok {
            self.errors
                .entry(field.to_string())
                .or_insert_with(|| message.into());
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

/// A request to level a profession from `start_level` to `finish_level`.
///
/// Field names match the JSON request payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelRequest {
    pub region: String,
    pub server: String,
    pub faction: Faction,
    pub profession: Profession,
    pub start_level: u32,
    pub finish_level: u32,
    /// Recipe sources the caller is willing to use
    #[serde(default)]
    pub filter_source: Vec<Source>,
    /// Easiest recipe colour the caller accepts
    pub filter_skillup: SkillupDifficulty,
}

impl LevelRequest {
    /// Checks every field and returns all problems at once.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), LevelError> {
        let mut v = ValidationErrors::new();

        let server = catalog.server_by_name(&self.server).ok();
        v.check(server.is_some(), "server", "must be a valid server");

        match self.region.parse::<Region>() {
            Ok(region) => v.check(
                server.map_or(true, |s| s.region == region),
                "region",
                "must match the server's region",
            ),
            Err(_) => v.check(false, "region", "must be either 'EU' or 'US'"),
        }

        v.check(
            self.faction != Faction::Undefined,
            "faction",
            "must be 'Horde' or 'Alliance'",
        );
        v.check(self.profession.is_defined(), "profession", "must be a valid profession");
        v.check(
            self.start_level >= MINIMUM_PROFESSION_LEVEL,
            "start_level",
            format!("must be at least {}", MINIMUM_PROFESSION_LEVEL),
        );
        v.check(
            self.finish_level > self.start_level,
            "finish_level",
            "must be greater than start_level",
        );
        v.check(
            self.finish_level <= MAXIMUM_PROFESSION_LEVEL,
            "finish_level",
            format!("must be at most {}", MAXIMUM_PROFESSION_LEVEL),
        );
        v.check(
            self.filter_skillup != SkillupDifficulty::Undefined,
            "filter_skillup",
            "must be 'orange', 'yellow' or 'green'",
        );

        if v.is_valid() {
            Ok(())
        } else {
            Err(LevelError::Validation(v))
        }
    }

    /// Resolves the auction house that prices this request.
    pub fn auction_house(&self, catalog: &Catalog) -> Result<AuctionHouseId, CatalogError> {
        let server = catalog.server_by_name(&self.server)?;
        server
            .auction_house(self.faction)
            .ok_or_else(|| CatalogError::AuctionHouseNotFound {
                server: server.name.clone(),
                faction: self.faction,
            })
    }
}
