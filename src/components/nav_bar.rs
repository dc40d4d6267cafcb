use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;

use super::Component;
use super::pokemon_card::{ACCENT, DIM};
use crate::action::Action;
use crate::route::Route;
use crate::view::NAV_LINKS;

pub struct NavBarProps<'a> {
    pub current: &'a Route,
    pub is_focused: bool,
}

/// Home / About / Favorite Pokémon links, bound to `1` `2` `3`
#[derive(Default)]
pub struct NavBar;

impl Component<Action> for NavBar {
    type Props<'a> = NavBarProps<'a>;

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
        let index = match key.code {
            KeyCode::Char('1') => 0,
            KeyCode::Char('2') => 1,
            KeyCode::Char('3') => 2,
            _ => return None,
        };
        Some(Action::NavGo(NAV_LINKS[index].1.clone()))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut spans = Vec::new();
        for (i, (label, route)) in NAV_LINKS.iter().enumerate() {
            let style = if route == props.current {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!("{}", i + 1), Style::default().fg(DIM)));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*label, style));
            spans.push(Span::raw("   "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
