//! Actions - every user intent the app reacts to

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::PokemonId;
use crate::route::Route;
use crate::selection::TypeFilter;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Nav category =====
    /// Push a route onto the history
    NavGo(Route),

    /// Pop back to the previous route
    NavBack,

    // ===== Pokedex category =====
    /// Show the next Pokémon of the filtered list (wraps)
    PokedexNext,

    PokedexFilter(TypeFilter),

    /// Next / previous filter button
    PokedexFilterNext,
    PokedexFilterPrev,

    /// "More details" on the displayed Pokémon
    PokedexOpenDetails,

    // ===== Favorite category =====
    FavoriteToggle(PokemonId),

    // ===== Favorites category =====
    FavoritesSelect(usize),
    FavoritesOpenDetails,

    // ===== Location category =====
    LocationOpen,
    LocationClose,
    LocationChange(String),
    LocationSubmit(String),

    // ===== UI category =====
    UiTerminalResize(u16, u16),

    /// Force a re-render (cursor movement in the location bar)
    Render,

    // ===== Uncategorized (global) =====
    Init,
    Quit,
}
