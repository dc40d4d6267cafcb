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
use super::{Component, PokemonCard, PokemonCardProps, image_line};
use crate::action::Action;
use crate::view::{self, DetailsView, FAVORITE_CHECKBOX};

pub struct DetailsPageProps<'a> {
    pub view: &'a DetailsView<'a>,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct DetailsPage;

fn heading(text: String) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

impl DetailsPage {
    fn body_lines(view: &DetailsView<'_>) -> Vec<Line<'static>> {
        let record = view.record;
        let checkbox = if view.is_favorite { "[x]" } else { "[ ]" };
        let mut lines = vec![
            Line::from(vec![
                Span::styled(checkbox, Style::default().fg(ACCENT)),
                Span::raw(format!(" {FAVORITE_CHECKBOX}")),
            ]),
            Line::default(),
            heading("Summary".to_string()),
            Line::from(record.summary.clone()),
            Line::default(),
            heading(view::locations_heading(record)),
        ];
        for found in &record.found_at {
            lines.push(Line::from(found.location.clone()));
            lines.push(image_line(&view::location_alt(record), &found.map));
        }
        if let Some(more_info) = &record.more_info {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::raw("More info: "),
                Span::styled(more_info.clone(), Style::default().fg(DIM)),
            ]));
        }
        lines
    }
}

impl Component<Action> for DetailsPage {
    type Props<'a> = DetailsPageProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char(' ') | KeyCode::Char('f') => {
                    Some(Action::FavoriteToggle(props.view.record.id))
                }
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let view = props.view;
        let card = PokemonCardProps {
            record: view.record,
            is_favorite: view.is_favorite,
            show_details_link: false,
            is_selected: false,
        };
        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(PokemonCard::height(&card)),
            Constraint::Min(1),
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(heading(view::details_heading(view.record))),
            chunks[0],
        );
        PokemonCard.render(frame, chunks[1], card);
        frame.render_widget(
            Paragraph::new(Self::body_lines(view)).wrap(Wrap { trim: true }),
            chunks[2],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, PokemonId};
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    #[test]
    fn test_space_and_f_toggle_favorite() {
        let catalog = Catalog::builtin().unwrap();
        let view = DetailsView {
            record: catalog.find_by_id(PokemonId(4)).unwrap(),
            is_favorite: false,
        };
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        for event in [key("f"), space] {
            let actions: Vec<_> = DetailsPage
                .handle_event(
                    &EventKind::Key(event),
                    DetailsPageProps {
                        view: &view,
                        is_focused: true,
                    },
                )
                .into_iter()
                .collect();
            actions.assert_first(Action::FavoriteToggle(PokemonId(4)));
        }
    }

    #[test]
    fn test_render_summary_and_locations() {
        let catalog = Catalog::builtin().unwrap();
        let charmander = catalog.find_by_id(PokemonId(4)).unwrap();
        let view = DetailsView {
            record: charmander,
            is_favorite: true,
        };
        let mut render = RenderHarness::new(120, 40);
        let output = render.render_to_string_plain(|frame| {
            DetailsPage.render(
                frame,
                frame.area(),
                DetailsPageProps {
                    view: &view,
                    is_focused: true,
                },
            );
        });

        assert!(output.contains("Charmander Details"));
        assert!(output.contains("[x] Pokémon favoritado?"));
        assert!(output.contains("Summary"));
        assert!(output.contains("Game Locations of Charmander"));
        assert!(!output.contains("More details"));
        for found in &charmander.found_at {
            assert!(output.contains(&found.location));
        }
        assert_eq!(output.matches("[Charmander location]").count(), 4);
    }
}
