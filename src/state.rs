//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch_debug::debug::{DebugSection, DebugState, ron_string};

use crate::catalog::{Catalog, PokemonId, PokemonRecord};
use crate::favorites::FavoriteSet;
use crate::route::{History, Route};
use crate::selection::Selection;

/// The `:` overlay where a path can be typed
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LocationBar {
    pub open: bool,
    pub input: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    pub catalog: Catalog,

    /// Pokédex page filter and cursor; reset whenever Home is entered
    pub selection: Selection,

    /// Mirror of the persisted favorites
    pub favorites: FavoriteSet,

    pub history: History,

    /// Highlighted card on the Favorites page
    pub favorites_selected: usize,

    pub location_bar: LocationBar,

    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new(catalog: Catalog, favorites: FavoriteSet, start: Route) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
            favorites,
            history: History::new(start),
            favorites_selected: 0,
            location_bar: LocationBar::default(),
            terminal_size: (80, 24),
        }
    }

    pub fn route(&self) -> &Route {
        self.history.current()
    }

    /// Record shown on the Pokédex page
    pub fn current_record(&self) -> Option<&PokemonRecord> {
        self.selection.current(&self.catalog)
    }

    pub fn is_favorite(&self, id: PokemonId) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorite_records(&self) -> Vec<&PokemonRecord> {
        self.favorites.records(&self.catalog)
    }

    pub fn selected_favorite(&self) -> Option<&PokemonRecord> {
        self.favorite_records()
            .get(self.favorites_selected)
            .copied()
    }
}

impl Default for AppState {
    fn default() -> Self {
        let catalog = Catalog::builtin().unwrap_or_else(|e| {
            tracing::error!(error = %e, "embedded catalog is invalid");
            Catalog::default()
        });
        Self::new(catalog, FavoriteSet::new(), Route::Home)
    }
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        vec![
            DebugSection::new("Route")
                .entry("current", ron_string(&self.route().path()))
                .entry("depth", ron_string(&self.history.len()))
                .entry("location_bar", ron_string(&self.location_bar)),
            DebugSection::new("Selection")
                .entry("filter", ron_string(self.selection.filter()))
                .entry("cursor", ron_string(&self.selection.cursor()))
                .entry(
                    "current",
                    ron_string(&self.current_record().map(|r| r.name.clone())),
                ),
            DebugSection::new("Favorites")
                .entry("ids", ron_string(&self.favorites))
                .entry("selected", ron_string(&self.favorites_selected)),
        ]
    }
}
