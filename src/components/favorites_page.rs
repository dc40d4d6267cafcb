use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;

use super::pokemon_card::DIM;
use super::{Component, PokemonCard, PokemonCardProps};
use crate::action::Action;
use crate::view::{FAVORITES_HEADING, FavoritesView, NO_FAVORITES};

pub struct FavoritesPageProps<'a> {
    pub view: &'a FavoritesView<'a>,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct FavoritesPage;

impl FavoritesPage {
    fn card_props<'a>(view: &FavoritesView<'a>, index: usize) -> Option<PokemonCardProps<'a>> {
        view.records.get(index).copied().map(|record| PokemonCardProps {
            record,
            is_favorite: true,
            show_details_link: true,
            is_selected: index == view.selected,
        })
    }

    /// First card to draw so the selected one stays on screen
    fn first_visible(view: &FavoritesView<'_>, height: u16) -> usize {
        let mut first = view.selected.min(view.records.len().saturating_sub(1));
        let mut used = 0u16;
        for index in (0..=first).rev() {
            let Some(props) = Self::card_props(view, index) else {
                break;
            };
            used = used.saturating_add(PokemonCard::height(&props));
            if used > height && index != view.selected {
                break;
            }
            first = index;
        }
        first
    }
}

impl Component<Action> for FavoritesPage {
    type Props<'a> = FavoritesPageProps<'a>;

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
        let view = props.view;
        match key.code {
            KeyCode::Down | KeyCode::Char('j') if view.selected + 1 < view.records.len() => {
                Some(Action::FavoritesSelect(view.selected + 1))
            }
            KeyCode::Up | KeyCode::Char('k') if view.selected > 0 => {
                Some(Action::FavoritesSelect(view.selected - 1))
            }
            KeyCode::Enter | KeyCode::Char('d') if !view.records.is_empty() => {
                Some(Action::FavoritesOpenDetails)
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let view = props.view;
        let heading = Line::from(Span::styled(
            FAVORITES_HEADING,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(
            Paragraph::new(heading),
            Rect {
                height: area.height.min(1),
                ..area
            },
        );

        let mut body = Rect {
            y: area.y.saturating_add(2),
            height: area.height.saturating_sub(2),
            ..area
        };

        if view.records.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(NO_FAVORITES, Style::default().fg(DIM))),
                body,
            );
            return;
        }

        let first = Self::first_visible(view, body.height);
        for index in first..view.records.len() {
            let Some(card) = Self::card_props(view, index) else {
                break;
            };
            if body.height == 0 {
                break;
            }
            let height = PokemonCard::height(&card).min(body.height);
            PokemonCard.render(frame, Rect { height, ..body }, card);
            body.y += height;
            body.height -= height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use tui_dispatch::testing::*;

    fn view_of(catalog: &Catalog, indices: &[usize], selected: usize) -> FavoritesView<'_> {
        FavoritesView {
            records: indices.iter().map(|i| catalog.get(*i).unwrap()).collect(),
            selected,
        }
    }

    fn press(view: &FavoritesView<'_>, code: &str) -> Vec<Action> {
        FavoritesPage
            .handle_event(
                &EventKind::Key(key(code)),
                FavoritesPageProps {
                    view,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect()
    }

    #[test]
    fn test_selection_keys_stay_in_bounds() {
        let catalog = Catalog::builtin().unwrap();
        let view = view_of(&catalog, &[0, 1, 2], 0);
        press(&view, "j").assert_first(Action::FavoritesSelect(1));
        press(&view, "k").assert_empty();
        press(&view, "d").assert_first(Action::FavoritesOpenDetails);

        let view = view_of(&catalog, &[0, 1, 2], 2);
        press(&view, "j").assert_empty();
        press(&view, "k").assert_first(Action::FavoritesSelect(1));
    }

    #[test]
    fn test_empty_page_has_no_actions() {
        let catalog = Catalog::builtin().unwrap();
        let view = view_of(&catalog, &[], 0);
        press(&view, "d").assert_empty();
        press(&view, "j").assert_empty();
    }

    #[test]
    fn test_render_empty_message() {
        let catalog = Catalog::builtin().unwrap();
        let view = view_of(&catalog, &[], 0);
        let mut render = RenderHarness::new(60, 10);
        let output = render.render_to_string_plain(|frame| {
            FavoritesPage.render(
                frame,
                frame.area(),
                FavoritesPageProps {
                    view: &view,
                    is_focused: true,
                },
            );
        });
        assert!(output.contains("Favorite Pokémon"));
        assert!(output.contains("No favorite Pokémon found"));
    }

    #[test]
    fn test_first_visible_keeps_selected_on_screen() {
        let catalog = Catalog::builtin().unwrap();
        // each card is 8 rows tall
        let view = view_of(&catalog, &[0, 1, 2, 3], 3);
        assert_eq!(FavoritesPage::first_visible(&view, 16), 2);
        assert_eq!(FavoritesPage::first_visible(&view, 100), 0);
        let view = view_of(&catalog, &[0, 1, 2, 3], 0);
        assert_eq!(FavoritesPage::first_visible(&view, 16), 0);
    }
}
