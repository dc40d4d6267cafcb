use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use tui_dispatch::EventKind;

use super::pokemon_card::{ACCENT, DIM};
use super::{Component, PokemonCard, PokemonCardProps};
use crate::action::Action;
use crate::selection::TypeFilter;
use crate::view::{NEXT_POKEMON, POKEDEX_HEADING, PokedexView};

pub struct PokedexPageProps<'a> {
    pub view: &'a PokedexView<'a>,
    pub is_focused: bool,
}

/// Home page: one Pokémon at a time, filterable by type
#[derive(Default)]
pub struct PokedexPage;

fn filter_buttons(buttons: &[TypeFilter], current: &TypeFilter) -> Line<'static> {
    let mut spans = Vec::with_capacity(buttons.len() * 2);
    for button in buttons {
        let style = if button == current {
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("[{}]", button.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

impl Component<Action> for PokedexPage {
    type Props<'a> = PokedexPageProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };
        match key.code {
            KeyCode::Char('n') | KeyCode::Right => {
                props.view.can_advance.then_some(Action::PokedexNext)
            }
            KeyCode::Char(']') => Some(Action::PokedexFilterNext),
            KeyCode::Char('[') => Some(Action::PokedexFilterPrev),
            KeyCode::Char('a') => Some(Action::PokedexFilter(TypeFilter::All)),
            KeyCode::Enter | KeyCode::Char('d') => {
                props.view.record.map(|_| Action::PokedexOpenDetails)
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let view = props.view;
        let card_props = view.record.map(|record| PokemonCardProps {
            record,
            is_favorite: view.is_favorite,
            show_details_link: true,
            is_selected: false,
        });
        let card_height = card_props.as_ref().map_or(3, PokemonCard::height);

        let chunks = Layout::vertical([
            Constraint::Length(2),           // Heading
            Constraint::Length(2),           // Type buttons
            Constraint::Length(card_height), // Card
            Constraint::Length(1),           // Next button
            Constraint::Min(0),
        ])
        .split(area);

        let heading = Line::from(Span::styled(
            POKEDEX_HEADING,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(heading), chunks[0]);

        frame.render_widget(
            Paragraph::new(filter_buttons(&view.buttons, view.filter)).wrap(Wrap { trim: true }),
            chunks[1],
        );

        match card_props {
            Some(card_props) => PokemonCard.render(frame, chunks[2], card_props),
            None => frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("No {} Pokémon encountered", view.filter),
                    Style::default().fg(DIM),
                ))),
                chunks[2],
            ),
        }

        let next_style = if view.can_advance {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(DIM).add_modifier(Modifier::CROSSED_OUT)
        };
        let mut next = vec![Span::styled(format!("[n] {NEXT_POKEMON}"), next_style)];
        if let Some((n, m)) = view.position {
            next.push(Span::styled(format!("   {n} / {m}"), Style::default().fg(DIM)));
        }
        frame.render_widget(Paragraph::new(Line::from(next)), chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use crate::view::{self, Page};
    use tui_dispatch::testing::*;

    fn with_view<R>(state: &AppState, f: impl FnOnce(&PokedexView<'_>) -> R) -> R {
        match view::derive(state) {
            Page::Pokedex(view) => f(&view),
            other => panic!("expected pokedex page, got {other:?}"),
        }
    }

    fn press(state: &AppState, code: &str) -> Vec<Action> {
        with_view(state, |view| {
            PokedexPage
                .handle_event(
                    &EventKind::Key(key(code)),
                    PokedexPageProps {
                        view,
                        is_focused: true,
                    },
                )
                .into_iter()
                .collect()
        })
    }

    #[test]
    fn test_keys_map_to_actions() {
        let state = AppState::default();
        press(&state, "n").assert_first(Action::PokedexNext);
        press(&state, "]").assert_first(Action::PokedexFilterNext);
        press(&state, "[").assert_first(Action::PokedexFilterPrev);
        press(&state, "a").assert_first(Action::PokedexFilter(TypeFilter::All));
        press(&state, "d").assert_first(Action::PokedexOpenDetails);
        press(&state, "x").assert_empty();
    }

    #[test]
    fn test_next_ignored_when_disabled() {
        let mut state = AppState::default();
        state.selection.set_filter(TypeFilter::of("Electric"));
        press(&state, "n").assert_empty();
    }

    #[test]
    fn test_render_heading_buttons_and_card() {
        let state = AppState::default();
        let mut render = RenderHarness::new(100, 20);
        let output = with_view(&state, |view| {
            render.render_to_string_plain(|frame| {
                PokedexPage.render(
                    frame,
                    frame.area(),
                    PokedexPageProps {
                        view,
                        is_focused: true,
                    },
                );
            })
        });
        assert!(output.contains("Encountered Pokémon"));
        assert!(output.contains("[All] [Electric] [Fire] [Bug]"));
        assert!(output.contains("Pikachu"));
        assert!(output.contains("Próximo Pokémon"));
        assert!(output.contains("1 / 9"));
    }
}
