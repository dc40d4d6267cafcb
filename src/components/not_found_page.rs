use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::pokemon_card::DIM;
use super::{Component, image_line};
use crate::action::Action;
use crate::view::{NOT_FOUND_HEADING, NOT_FOUND_IMAGE, NOT_FOUND_IMAGE_ALT};

pub struct NotFoundPageProps<'a> {
    pub path: &'a str,
}

#[derive(Default)]
pub struct NotFoundPage;

impl Component<Action> for NotFoundPage {
    type Props<'a> = NotFoundPageProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let lines = vec![
            Line::from(Span::styled(
                NOT_FOUND_HEADING,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(props.path.to_string(), Style::default().fg(DIM))),
            Line::default(),
            image_line(NOT_FOUND_IMAGE_ALT, NOT_FOUND_IMAGE),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }
}
