//! Static Pokémon catalog - loaded once, never mutated

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::selection::TypeFilter;

const BUILTIN_CATALOG: &str = include_str!("../assets/pokemon.json");

/// National dex number, unique and stable across sessions
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct PokemonId(pub u16);

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AverageWeight {
    pub value: f32,
    pub measurement_unit: String,
}

impl fmt::Display for AverageWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // whole numbers keep one decimal, anything finer prints as given
        if self.value.fract() == 0.0 {
            write!(f, "{:.1} {}", self.value, self.measurement_unit)
        } else {
            write!(f, "{} {}", self.value, self.measurement_unit)
        }
    }
}

/// A place in the games where the Pokémon can be found
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GameLocation {
    pub location: String,
    /// Map image URL
    pub map: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PokemonRecord {
    pub id: PokemonId,
    pub name: String,
    #[serde(rename = "type")]
    pub pokemon_type: String,
    pub average_weight: AverageWeight,
    /// Sprite URL
    pub image: String,
    #[serde(default)]
    pub more_info: Option<String>,
    #[serde(default)]
    pub found_at: Vec<GameLocation>,
    pub summary: String,
}

impl PokemonRecord {
    pub fn weight_label(&self) -> String {
        format!("Average weight: {}", self.average_weight)
    }

    pub fn details_path(&self) -> String {
        format!("/pokemon/{}", self.id)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog lists Pokémon #{0} more than once")]
    DuplicateId(PokemonId),
}

/// Ordered, immutable list of every Pokémon the app knows about
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<PokemonRecord>,
}

impl Catalog {
    pub fn new(records: Vec<PokemonRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<PokemonRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_json(&json)
    }

    pub fn records(&self) -> &[PokemonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PokemonRecord> {
        self.records.get(index)
    }

    pub fn find_by_id(&self, id: PokemonId) -> Option<&PokemonRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: PokemonId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Distinct types in the order they first appear in the catalog.
    pub fn available_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for record in &self.records {
            if !types.contains(&record.pokemon_type.as_str()) {
                types.push(&record.pokemon_type);
            }
        }
        types
    }

    /// Records matching `filter`, catalog order preserved.
    pub fn filtered<'a>(
        &'a self,
        filter: &'a TypeFilter,
    ) -> impl Iterator<Item = &'a PokemonRecord> + 'a {
        self.records
            .iter()
            .filter(move |record| filter.matches(record))
    }
}
