use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{Component, image_line};
use crate::action::Action;
use crate::view::{ABOUT_HEADING, ABOUT_IMAGE, ABOUT_IMAGE_ALT, ABOUT_PARAGRAPHS};

#[derive(Default)]
pub struct AboutPage;

impl Component<Action> for AboutPage {
    type Props<'a> = ();

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let mut lines = vec![
            Line::from(Span::styled(
                ABOUT_HEADING,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        for paragraph in ABOUT_PARAGRAPHS {
            lines.push(Line::from(paragraph));
            lines.push(Line::default());
        }
        lines.push(image_line(ABOUT_IMAGE_ALT, ABOUT_IMAGE));
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }
}
