//! Pokédex paging, type filters and routing driven through key presses

mod common;

use common::Session;
use crossterm::event::KeyCode;
use pokedex::{
    action::Action,
    catalog::PokemonId,
    components::{Component, PokedexApp, PokedexAppProps},
    reducer::reducer,
    route::Route,
    selection::TypeFilter,
    state::AppState,
};
use pretty_assertions::assert_eq;
use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, NumericComponentId, assert_emitted, assert_not_emitted};

#[test]
fn test_next_walks_catalog() {
    let mut session = Session::new();
    assert_eq!(session.displayed(), "Pikachu");
    session.press("n n n");
    assert_eq!(session.displayed(), "Ekans");

    let mut session = Session::new();
    session.press("n n n n n n");
    assert_eq!(session.displayed(), "Rapidash");

    let mut session = Session::new();
    session.press("n n n n");
    assert_eq!(session.displayed(), "Alakazam");
}

#[test]
fn test_every_record_reachable_from_home() {
    let mut session = Session::new();
    let mut seen = Vec::new();
    for _ in 0..session.state.catalog.len() {
        seen.push(session.displayed().to_string());
        session.press_code(KeyCode::Right);
    }
    let expected: Vec<String> = session
        .state
        .catalog
        .records()
        .iter()
        .map(|r| r.name.clone())
        .collect();
    assert_eq!(seen, expected);
    // and around again
    assert_eq!(session.displayed(), "Pikachu");
}

#[test]
fn test_type_buttons_select_first_match() {
    let mut session = Session::new();
    session.dispatch(Action::PokedexFilter(TypeFilter::of("Normal")));
    assert_eq!(session.displayed(), "Snorlax");
    assert!(!session.state.selection.can_advance(&session.state.catalog));

    session.dispatch(Action::PokedexFilter(TypeFilter::of("Dragon")));
    assert_eq!(session.displayed(), "Dragonair");

    // third type button, counting from the first after All
    session.press("a ] ] ]");
    assert_eq!(session.state.selection.filter(), &TypeFilter::of("Bug"));
    assert_eq!(session.displayed(), "Caterpie");
}

#[test]
fn test_filtered_paging_stays_in_type() {
    let mut session = Session::new();
    session.dispatch(Action::PokedexFilter(TypeFilter::of("Psychic")));
    assert_eq!(session.displayed(), "Alakazam");
    session.press("n");
    assert_eq!(session.displayed(), "Mew");
    session.press("n");
    assert_eq!(session.displayed(), "Alakazam");
}

#[test]
fn test_all_restores_first_record() {
    let mut session = Session::new();
    session.dispatch(Action::PokedexFilter(TypeFilter::of("Electric")));
    assert!(!session.state.selection.can_advance(&session.state.catalog));
    session.press("n");
    assert_eq!(session.displayed(), "Pikachu");

    session.press("a");
    assert_eq!(session.state.selection.filter(), &TypeFilter::All);
    assert_eq!(session.displayed(), "Pikachu");
    assert!(session.state.selection.can_advance(&session.state.catalog));
}

#[test]
fn test_more_details_opens_displayed_record() {
    let mut session = Session::new();
    session.press("n d");
    assert_eq!(session.state.route(), &Route::Details(PokemonId(4)));
    assert_eq!(session.state.route().path(), "/pokemon/4");
}

#[test]
fn test_nav_keys_change_route() {
    let mut session = Session::new();
    session.press("2");
    assert_eq!(session.state.route().path(), "/about");
    session.press("3");
    assert_eq!(session.state.route().path(), "/favorites");
    session.press("1");
    assert_eq!(session.state.route().path(), "/");
}

#[test]
fn test_back_returns_and_resets_pokedex() {
    let mut session = Session::new();
    session.press("n n d");
    assert_eq!(session.state.route(), &Route::Details(PokemonId(10)));
    session.press("b");
    assert_eq!(session.state.route(), &Route::Home);
    assert_eq!(session.displayed(), "Pikachu");
    session.press("n n");
    assert_eq!(session.displayed(), "Caterpie");
}

#[test]
fn test_location_bar_navigates() {
    let mut session = Session::new();
    session.go_to("/pokemon/143");
    assert!(!session.state.location_bar.open);
    assert_eq!(session.state.route(), &Route::Details(PokemonId(143)));

    session.go_to("not-existence-page");
    assert_eq!(
        session.state.route(),
        &Route::NotFound("/not-existence-page".into())
    );
}

#[test]
fn test_location_bar_typed_path_replaces_current() {
    let mut session = Session::new();
    session.press("3");
    session.press(":");
    assert_eq!(session.state.location_bar.input, "");

    session.type_text("/about");
    assert_eq!(session.state.location_bar.input, "/about");
    session.press_code(KeyCode::Enter);
    assert_eq!(session.state.route(), &Route::About);

    // a typo can be erased before submitting
    session.press(":");
    session.type_text("/pokemon/4x");
    session.press_code(KeyCode::Backspace);
    session.press_code(KeyCode::Enter);
    assert_eq!(session.state.route(), &Route::Details(PokemonId(4)));
}

#[test]
fn test_location_bar_escape_keeps_route() {
    let mut session = Session::new();
    session.press(":");
    assert!(session.state.location_bar.open);
    // keys go to the bar, not the pokedex
    session.press("n");
    assert_eq!(session.displayed(), "Pikachu");
    session.press_code(KeyCode::Esc);
    assert!(!session.state.location_bar.open);
    assert_eq!(session.state.route(), &Route::Home);
}

#[test]
fn test_store_dispatch_navigation() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    let result = store.dispatch(Action::NavGo(Route::About));
    assert!(result.changed);
    assert!(result.effects.is_empty());

    let result = store.dispatch(Action::NavGo(Route::About));
    assert!(!result.changed, "pushing the current route is a no-op");

    store.dispatch(Action::NavBack);
    assert_eq!(store.state().route(), &Route::Home);
}

#[test]
fn test_component_keys_with_harness() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = PokedexApp::default();

    let actions = harness.send_keys::<NumericComponentId, _, _>("n ] d q", |state, event| {
        let props = PokedexAppProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(4);
    assert_emitted!(actions, Action::PokedexNext);
    assert_emitted!(actions, Action::PokedexFilterNext);
    assert_emitted!(actions, Action::PokedexOpenDetails);
    assert_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::FavoriteToggle(_));
}

#[test]
fn test_action_categories() {
    let go = Action::NavGo(Route::Home);
    let resize = Action::UiTerminalResize(80, 24);

    assert_eq!(go.category(), Some("nav"));
    assert_eq!(resize.category(), Some("ui"));
    assert_eq!(Action::Quit.category(), None);

    assert!(go.is_nav());
    assert!(resize.is_ui());
}
