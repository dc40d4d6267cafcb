//! Favorite Pokémon, persisted through a [`Storage`]

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, PokemonId, PokemonRecord};
use crate::storage::Storage;

/// Storage key holding the JSON array of favorite ids
pub const FAVORITES_KEY: &str = "favoritePokemonIds";

/// Ordered set of favorite ids. Serializes as an ascending JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FavoriteSet(BTreeSet<PokemonId>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: PokemonId) -> bool {
        self.0.contains(&id)
    }

    /// Flip membership and return the new membership.
    pub fn toggle(&mut self, id: PokemonId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PokemonId> + '_ {
        self.0.iter().copied()
    }

    /// Favorited records in catalog order.
    pub fn records<'c>(&self, catalog: &'c Catalog) -> Vec<&'c PokemonRecord> {
        catalog
            .records()
            .iter()
            .filter(|record| self.contains(record.id))
            .collect()
    }

    /// Drop ids the catalog does not know. Returns how many were dropped.
    pub fn retain_known(&mut self, catalog: &Catalog) -> usize {
        let before = self.0.len();
        self.0.retain(|id| catalog.contains(*id));
        before - self.0.len()
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn decode(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl FromIterator<PokemonId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = PokemonId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Favorite set with write-through persistence.
///
/// Storage failures never reach the caller: they are logged and the
/// in-memory set stays authoritative for the rest of the session.
pub struct FavoritesStore<S> {
    storage: S,
    ids: FavoriteSet,
}

impl<S: Storage> FavoritesStore<S> {
    pub fn open(storage: S) -> Self {
        let ids = match storage.get_item(FAVORITES_KEY) {
            Ok(Some(json)) => FavoriteSet::decode(&json).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored favorites are unreadable, starting empty");
                FavoriteSet::new()
            }),
            Ok(None) => FavoriteSet::new(),
            Err(e) => {
                tracing::warn!(error = %e, "favorites storage unavailable, keeping them in memory");
                FavoriteSet::new()
            }
        };
        tracing::debug!(count = ids.len(), "favorites loaded");
        Self { storage, ids }
    }

    pub fn is_favorite(&self, id: PokemonId) -> bool {
        self.ids.contains(id)
    }

    pub fn toggle(&mut self, id: PokemonId) -> bool {
        let now = self.ids.toggle(id);
        self.write();
        now
    }

    pub fn replace(&mut self, ids: FavoriteSet) {
        self.ids = ids;
        self.write();
    }

    pub fn list<'c>(&self, catalog: &'c Catalog) -> Vec<&'c PokemonRecord> {
        self.ids.records(catalog)
    }

    pub fn ids(&self) -> &FavoriteSet {
        &self.ids
    }

    pub fn retain_known(&mut self, catalog: &Catalog) {
        let dropped = self.ids.retain_known(catalog);
        if dropped > 0 {
            tracing::info!(dropped, "dropped favorites missing from the catalog");
            self.write();
        }
    }

    fn write(&self) {
        let json = match self.ids.encode() {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode favorites");
                return;
            }
        };
        if let Err(e) = self.storage.set_item(FAVORITES_KEY, &json) {
            tracing::warn!(error = %e, "failed to persist favorites");
        }
    }
}
