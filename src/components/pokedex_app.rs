use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarItem, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::pokemon_card::DIM;
use super::{
    AboutPage, Component, DetailsPage, DetailsPageProps, FavoritesPage, FavoritesPageProps,
    NavBar, NavBarProps, NotFoundPage, NotFoundPageProps, PokedexPage, PokedexPageProps,
};
use crate::action::Action;
use crate::state::AppState;
use crate::view::{self, Page};

pub struct PokedexAppProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Navigation bar, current page and key hints
#[derive(Default)]
pub struct PokedexApp {
    nav: NavBar,
    pokedex: PokedexPage,
    details: DetailsPage,
    favorites: FavoritesPage,
    about: AboutPage,
    not_found: NotFoundPage,
}

fn page_hints(page: &Page<'_>) -> Vec<StatusBarHint<'static>> {
    match page {
        Page::Pokedex(_) => vec![
            StatusBarHint::new("n", "next"),
            StatusBarHint::new("[ ]", "type"),
            StatusBarHint::new("a", "all"),
            StatusBarHint::new("d", "details"),
        ],
        Page::Details(_) => vec![StatusBarHint::new("f", "favorite")],
        Page::Favorites(_) => vec![
            StatusBarHint::new("j/k", "select"),
            StatusBarHint::new("d", "details"),
        ],
        Page::About | Page::NotFound { .. } => Vec::new(),
    }
}

impl Component<Action> for PokedexApp {
    type Props<'a> = PokedexAppProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        let state = props.state;

        match key.code {
            KeyCode::Char('q') => return vec![Action::Quit],
            KeyCode::Char(':') => return vec![Action::LocationOpen],
            KeyCode::Backspace | KeyCode::Char('b') => {
                return if state.history.can_go_back() {
                    vec![Action::NavBack]
                } else {
                    Vec::new()
                };
            }
            _ => {}
        }

        let nav_props = NavBarProps {
            current: state.route(),
            is_focused: true,
        };
        let actions: Vec<_> = self.nav.handle_event(event, nav_props).into_iter().collect();
        if !actions.is_empty() {
            return actions;
        }

        match view::derive(state) {
            Page::Pokedex(view) => self
                .pokedex
                .handle_event(
                    event,
                    PokedexPageProps {
                        view: &view,
                        is_focused: true,
                    },
                )
                .into_iter()
                .collect(),
            Page::Details(view) => self
                .details
                .handle_event(
                    event,
                    DetailsPageProps {
                        view: &view,
                        is_focused: true,
                    },
                )
                .into_iter()
                .collect(),
            Page::Favorites(view) => self
                .favorites
                .handle_event(
                    event,
                    FavoritesPageProps {
                        view: &view,
                        is_focused: true,
                    },
                )
                .into_iter()
                .collect(),
            Page::About | Page::NotFound { .. } => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: PokedexAppProps<'_>) {
        let state = props.state;
        let chunks = Layout::vertical([
            Constraint::Length(1), // Nav
            Constraint::Length(1),
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        self.nav.render(
            frame,
            chunks[0].inner(Margin::new(1, 0)),
            NavBarProps {
                current: state.route(),
                is_focused: props.is_focused,
            },
        );

        let page = view::derive(state);
        let body = chunks[2].inner(Margin::new(1, 0));
        match &page {
            Page::Pokedex(view) => self.pokedex.render(
                frame,
                body,
                PokedexPageProps {
                    view,
                    is_focused: props.is_focused,
                },
            ),
            Page::Details(view) => self.details.render(
                frame,
                body,
                DetailsPageProps {
                    view,
                    is_focused: props.is_focused,
                },
            ),
            Page::Favorites(view) => self.favorites.render(
                frame,
                body,
                FavoritesPageProps {
                    view,
                    is_focused: props.is_focused,
                },
            ),
            Page::About => self.about.render(frame, body, ()),
            Page::NotFound { path } => {
                self.not_found
                    .render(frame, body, NotFoundPageProps { path })
            }
        }

        let mut hints = page_hints(&page);
        hints.extend([
            StatusBarHint::new("1-3", "pages"),
            StatusBarHint::new(":", "go to"),
            StatusBarHint::new("b", "back"),
            StatusBarHint::new("q", "quit"),
        ]);
        let path = state.route().path();
        let location = [StatusBarItem::span(Span::styled(
            path.as_str(),
            Style::default().fg(DIM),
        ))];

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[3],
            StatusBarProps {
                left: StatusBarSection::hints(&hints).with_separator("  "),
                center: StatusBarSection::empty(),
                right: StatusBarSection::items(&location),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;
    use tui_dispatch::testing::*;

    fn press(state: &AppState, code: &str) -> Vec<Action> {
        let mut app = PokedexApp::default();
        app.handle_event(
            &EventKind::Key(key(code)),
            PokedexAppProps {
                state,
                is_focused: true,
            },
        )
        .into_iter()
        .collect()
    }

    #[test]
    fn test_global_keys() {
        let state = AppState::default();
        press(&state, "q").assert_first(Action::Quit);
        press(&state, ":").assert_first(Action::LocationOpen);
        press(&state, "3").assert_first(Action::NavGo(Route::Favorites));
        // nothing to go back to yet
        press(&state, "b").assert_empty();
    }

    #[test]
    fn test_page_keys_follow_route() {
        let mut state = AppState::default();
        press(&state, "n").assert_first(Action::PokedexNext);
        press(&state, "f").assert_empty();

        state.history.push(Route::parse("/pokemon/25"));
        press(&state, "f").assert_first(Action::FavoriteToggle(crate::catalog::PokemonId(25)));
        press(&state, "n").assert_empty();
        press(&state, "b").assert_first(Action::NavBack);
    }

    #[test]
    fn test_unfocused_ignores() {
        let state = AppState::default();
        let mut app = PokedexApp::default();
        let actions: Vec<_> = app
            .handle_event(
                &EventKind::Key(key("q")),
                PokedexAppProps {
                    state: &state,
                    is_focused: false,
                },
            )
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_home() {
        let state = AppState::default();
        let mut render = RenderHarness::new(100, 24);
        let mut app = PokedexApp::default();
        let output = render.render_to_string_plain(|frame| {
            app.render(
                frame,
                frame.area(),
                PokedexAppProps {
                    state: &state,
                    is_focused: true,
                },
            );
        });
        assert!(output.contains("Favorite Pokémon"));
        assert!(output.contains("Encountered Pokémon"));
        assert!(output.contains("Pikachu"));
    }
}
