//! Drives the app the way the terminal loop does: keys through the
//! components, actions through the reducer, effects into a store.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pokedex::{
    action::Action,
    components::{Component, LocationBar, LocationBarProps, PokedexApp, PokedexAppProps},
    effect::Effect,
    favorites::FavoritesStore,
    reducer::reducer,
    route::Route,
    state::AppState,
    storage::MemoryStorage,
};
use tui_dispatch::EventKind;
use tui_dispatch::testing::*;

pub struct Session {
    pub state: AppState,
    pub store: FavoritesStore<MemoryStorage>,
    pub storage: MemoryStorage,
    app: PokedexApp,
    location: LocationBar,
}

impl Session {
    pub fn new() -> Self {
        Self::with_storage(MemoryStorage::new())
    }

    /// Start a session over existing storage, as a restart would.
    pub fn with_storage(storage: MemoryStorage) -> Self {
        let store = FavoritesStore::open(storage.clone());
        let state = AppState::new(
            pokedex::catalog::Catalog::builtin().unwrap(),
            store.ids().clone(),
            Route::Home,
        );
        Self {
            state,
            store,
            storage,
            app: PokedexApp::default(),
            location: LocationBar::new(),
        }
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = reducer(&mut self.state, action);
        for effect in result.effects {
            match effect {
                Effect::PersistFavorites { ids } => self.store.replace(ids),
            }
        }
        result.changed
    }

    pub fn send(&mut self, event: KeyEvent) {
        let event = EventKind::Key(event);
        let actions: Vec<Action> = if self.state.location_bar.open {
            self.location.set_open(true);
            let props = LocationBarProps {
                value: &self.state.location_bar.input,
                is_focused: true,
                on_change: Action::LocationChange,
                on_submit: Action::LocationSubmit,
            };
            self.location.handle_event(&event, props).into_iter().collect()
        } else {
            self.location.set_open(false);
            let props = PokedexAppProps {
                state: &self.state,
                is_focused: true,
            };
            self.app.handle_event(&event, props).into_iter().collect()
        };
        for action in actions {
            self.dispatch(action);
        }
    }

    /// Space separated keys, e.g. `"n n 3"`
    pub fn press(&mut self, keys: &str) {
        for k in keys.split_whitespace() {
            self.send(key(k));
        }
    }

    pub fn press_code(&mut self, code: KeyCode) {
        self.send(KeyEvent::new(code, KeyModifiers::NONE));
    }

    /// One key per character, as typed into the location bar
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press_code(KeyCode::Char(c));
        }
    }

    /// Open the location bar and type `path`.
    pub fn go_to(&mut self, path: &str) {
        self.dispatch(Action::LocationOpen);
        self.dispatch(Action::LocationChange(path.to_string()));
        self.press_code(KeyCode::Enter);
    }

    pub fn displayed(&self) -> &str {
        self.state
            .current_record()
            .map(|r| r.name.as_str())
            .unwrap_or("")
    }

    pub fn render(&mut self, width: u16, height: u16) -> String {
        let mut render = RenderHarness::new(width, height);
        let state = &self.state;
        let app = &mut self.app;
        render.render_to_string_plain(|frame| {
            let props = PokedexAppProps {
                state,
                is_focused: true,
            };
            app.render(frame, frame.area(), props);
        })
    }
}
