//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::route::Route;
use crate::selection::Advance;
use crate::state::AppState;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => {
            tracing::info!(route = %state.route(), records = state.catalog.len(), "pokedex started");
            DispatchResult::changed()
        }

        // ===== Navigation =====
        Action::NavGo(route) => navigate(state, route),

        Action::NavBack => {
            if state.history.back() {
                entered(state);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Pokédex page =====
        Action::PokedexNext => {
            if *state.route() != Route::Home {
                return DispatchResult::unchanged();
            }
            match state.selection.advance(&state.catalog) {
                Advance::Disabled => DispatchResult::unchanged(),
                Advance::Moved | Advance::Wrapped => DispatchResult::changed(),
            }
        }

        Action::PokedexFilter(filter) => {
            if *state.route() != Route::Home {
                return DispatchResult::unchanged();
            }
            if state.selection.set_filter(filter) {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::PokedexFilterNext => {
            if *state.route() != Route::Home {
                return DispatchResult::unchanged();
            }
            if state.selection.cycle_filter(&state.catalog, true) {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::PokedexFilterPrev => {
            if *state.route() != Route::Home {
                return DispatchResult::unchanged();
            }
            if state.selection.cycle_filter(&state.catalog, false) {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::PokedexOpenDetails => match state.current_record().map(|r| r.id) {
            Some(id) => navigate(state, Route::Details(id)),
            None => DispatchResult::unchanged(),
        },

        // ===== Favorites =====
        Action::FavoriteToggle(id) => {
            // Only ids that can be displayed may become favorites
            if !state.catalog.contains(id) {
                return DispatchResult::unchanged();
            }
            let now = state.favorites.toggle(id);
            tracing::debug!(%id, favorite = now, "favorite toggled");
            let count = state.favorites.len();
            if state.favorites_selected >= count {
                state.favorites_selected = count.saturating_sub(1);
            }
            DispatchResult::changed_with(Effect::PersistFavorites {
                ids: state.favorites.clone(),
            })
        }

        Action::FavoritesSelect(index) => {
            if index < state.favorites.len() && index != state.favorites_selected {
                state.favorites_selected = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::FavoritesOpenDetails => match state.selected_favorite().map(|r| r.id) {
            Some(id) => navigate(state, Route::Details(id)),
            None => DispatchResult::unchanged(),
        },

        // ===== Location bar =====
        Action::LocationOpen => {
            // TextInput cursor starts at 0; the value must match
            state.location_bar.open = true;
            state.location_bar.input.clear();
            DispatchResult::changed()
        }

        Action::LocationClose => {
            state.location_bar.open = false;
            state.location_bar.input.clear();
            DispatchResult::changed()
        }

        Action::LocationChange(input) => {
            state.location_bar.input = input;
            DispatchResult::changed()
        }

        Action::LocationSubmit(input) => {
            state.location_bar.open = false;
            state.location_bar.input.clear();
            navigate(state, Route::parse(&input));
            DispatchResult::changed()
        }

        // ===== UI =====
        Action::UiTerminalResize(width, height) => {
            if state.terminal_size == (width, height) {
                DispatchResult::unchanged()
            } else {
                state.terminal_size = (width, height);
                DispatchResult::changed()
            }
        }

        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn navigate(state: &mut AppState, route: Route) -> DispatchResult<Effect> {
    if state.history.push(route) {
        entered(state);
        DispatchResult::changed()
    } else {
        DispatchResult::unchanged()
    }
}

/// Pages start fresh each time they are entered.
fn entered(state: &mut AppState) {
    tracing::debug!(route = %state.route(), "navigated");
    match state.route() {
        Route::Home => state.selection = Default::default(),
        Route::Favorites => state.favorites_selected = 0,
        _ => {}
    }
}
