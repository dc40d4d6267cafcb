//! Pokédex TUI - browse, filter and favorite Pokémon

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::{Arc, Mutex, PoisonError};

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pokedex::action::Action;
use pokedex::catalog::Catalog;
use pokedex::components::{
    Component, LocationBar, LocationBarProps, PokedexApp, PokedexAppProps,
};
use pokedex::effect::Effect;
use pokedex::favorites::FavoritesStore;
use pokedex::logging;
use pokedex::reducer::reducer;
use pokedex::route::Route;
use pokedex::state::AppState;
use pokedex::storage::FileStorage;
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_components::centered_rect;
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

type SharedFavorites = Arc<Mutex<FavoritesStore<FileStorage>>>;

/// Pokédex TUI - browse a catalog of Pokémon and keep favorites
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse, filter and favorite Pokémon in the terminal")]
struct Args {
    /// Start path, e.g. /favorites or /pokemon/25
    #[arg(long, short, default_value = "/")]
    path: String,

    /// Catalog JSON replacing the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Where favorites are stored
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log file (default: <data dir>/pokedex.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level unless POKEDEX_LOG / RUST_LOG say otherwise
    #[arg(long, short)]
    verbose: bool,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum PokedexComponentId {
    App,
    LocationBar,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum PokedexContext {
    Main,
    Location,
}

impl EventRoutingState<PokedexComponentId, PokedexContext> for AppState {
    fn focused(&self) -> Option<PokedexComponentId> {
        if self.location_bar.open {
            Some(PokedexComponentId::LocationBar)
        } else {
            Some(PokedexComponentId::App)
        }
    }

    fn modal(&self) -> Option<PokedexComponentId> {
        if self.location_bar.open {
            Some(PokedexComponentId::LocationBar)
        } else {
            None
        }
    }

    fn binding_context(&self, id: PokedexComponentId) -> PokedexContext {
        match id {
            PokedexComponentId::App => PokedexContext::Main,
            PokedexComponentId::LocationBar => PokedexContext::Location,
        }
    }

    fn default_context(&self) -> PokedexContext {
        PokedexContext::Main
    }
}

fn default_data_dir() -> PathBuf {
    dirs_next::data_local_dir()
        .map(|dir| dir.join("pokedex"))
        .unwrap_or_else(|| PathBuf::from(".pokedex"))
}

async fn load_catalog(path: Option<&Path>) -> io::Result<Catalog> {
    let catalog = match path {
        Some(path) => Catalog::load(path).await,
        None => Catalog::builtin(),
    };
    catalog.map_err(|e| io::Error::other(format!("cannot load catalog: {e}")))
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        path,
        catalog,
        data_dir,
        log_file,
        verbose,
        debug: debug_args,
    } = Args::parse();

    let data_dir = data_dir.unwrap_or_else(default_data_dir);
    let log_file = log_file.unwrap_or_else(|| data_dir.join("pokedex.log"));
    logging::init(&log_file, verbose);

    // Fail before the terminal switches to raw mode
    let catalog = load_catalog(catalog.as_deref()).await?;
    tracing::info!(records = catalog.len(), data_dir = %data_dir.display(), "catalog loaded");

    let mut favorites = FavoritesStore::open(FileStorage::new(&data_dir));
    favorites.retain_known(&catalog);
    let initial_favorites = favorites.ids().clone();
    let favorites: SharedFavorites = Arc::new(Mutex::new(favorites));

    let debug = DebugSession::new(debug_args);

    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let start = Route::parse(&path);
    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(catalog, initial_favorites, start))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions, favorites).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct PokedexUi {
    app: PokedexApp,
    location: LocationBar,
}

impl PokedexUi {
    fn new() -> Self {
        Self {
            app: PokedexApp::default(),
            location: LocationBar::new(),
        }
    }

    fn location_props(state: &AppState, is_focused: bool) -> LocationBarProps<'_> {
        LocationBarProps {
            value: &state.location_bar.input,
            is_focused,
            on_change: Action::LocationChange,
            on_submit: Action::LocationSubmit,
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<PokedexComponentId>,
    ) {
        event_ctx.set_component_area(PokedexComponentId::App, area);

        let props = PokedexAppProps {
            state,
            is_focused: render_ctx.is_focused() && !state.location_bar.open,
        };
        self.app.render(frame, area, props);

        self.location.set_open(state.location_bar.open);
        if state.location_bar.open {
            let modal_area = centered_rect(60, 7, area);
            event_ctx.set_component_area(PokedexComponentId::LocationBar, modal_area);
            let props = Self::location_props(state, render_ctx.is_focused());
            self.location.render(frame, area, props);
        } else {
            event_ctx
                .component_areas
                .remove(&PokedexComponentId::LocationBar);
        }
    }

    fn handle_app_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = PokedexAppProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.app.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    fn handle_location_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        self.location.set_open(state.location_bar.open);
        let props = Self::location_props(state, true);
        let actions: Vec<_> = self
            .location
            .handle_event(event, props)
            .into_iter()
            .collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
    favorites: SharedFavorites,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(PokedexUi::new()));
    let mut bus: EventBus<AppState, Action, PokedexComponentId, PokedexContext> = EventBus::new();
    let keybindings: Keybindings<PokedexContext> = Keybindings::new();

    let ui_app = Rc::clone(&ui);
    bus.register(PokedexComponentId::App, move |event, state| {
        ui_app.borrow_mut().handle_app_event(&event.kind, state)
    });

    let ui_location = Rc::clone(&ui);
    bus.register(PokedexComponentId::LocationBar, move |event, state| {
        ui_location
            .borrow_mut()
            .handle_location_event(&event.kind, state)
    });

    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(width, height) => HandlerResponse {
            actions: vec![Action::UiTerminalResize(width, height)],
            consumed: false,
            needs_render: true,
        },
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &favorites),
        )
        .await
}

fn handle_effect(effect: Effect, _ctx: &mut EffectContext<Action>, favorites: &SharedFavorites) {
    match effect {
        Effect::PersistFavorites { ids } => {
            let mut store = favorites.lock().unwrap_or_else(PoisonError::into_inner);
            tracing::debug!(count = ids.len(), "persisting favorites");
            store.replace(ids);
        }
    }
}
