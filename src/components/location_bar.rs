use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding, TextInput, TextInputProps,
    TextInputStyle, centered_rect,
};

use super::Component;
use crate::action::Action;

const PLACEHOLDER: &str = "/pokemon/25";

/// `:` overlay for typing a path
pub struct LocationBar {
    input: TextInput,
    modal: Modal,
    was_open: bool,
}

pub struct LocationBarProps<'a> {
    pub value: &'a str,
    pub is_focused: bool,
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

impl Default for LocationBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            modal: Modal::new(),
            was_open: false,
        }
    }
}

impl LocationBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_open(&mut self, is_open: bool) {
        if is_open && !self.was_open {
            self.input = TextInput::new();
        }
        self.was_open = is_open;
    }
}

fn input_style(bg: Option<Color>) -> TextInputStyle {
    TextInputStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::all(1),
            bg,
            fg: None,
        },
        placeholder_style: None,
        cursor_style: None,
    }
}

fn ui_render(_: usize) -> Action {
    Action::Render
}

impl Component<Action> for LocationBar {
    type Props<'a> = LocationBarProps<'a>;

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

        match key.code {
            KeyCode::Esc => vec![Action::LocationClose],
            KeyCode::Enter => vec![(props.on_submit)(props.value.to_string())],
            _ => {
                let input_props = TextInputProps {
                    value: props.value,
                    placeholder: PLACEHOLDER,
                    is_focused: true,
                    style: input_style(None),
                    on_change: props.on_change,
                    on_submit: props.on_submit,
                    on_cursor_move: Some(ui_render),
                };
                self.input
                    .handle_event(event, input_props)
                    .into_iter()
                    .collect()
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width < 20 || area.height < 7 {
            return;
        }

        let LocationBar { input, modal, .. } = self;
        let modal_area = centered_rect(60, 7, area);
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let chunks = Layout::vertical([
                Constraint::Length(3), // Input
                Constraint::Min(1),    // Hint
            ])
            .split(content_area);

            let input_props = TextInputProps {
                value: props.value,
                placeholder: PLACEHOLDER,
                is_focused: props.is_focused,
                style: input_style(Some(Color::Rgb(50, 50, 60))),
                on_change: props.on_change,
                on_submit: props.on_submit,
                on_cursor_move: Some(ui_render),
            };
            input.render(frame, chunks[0], input_props);

            let hint = Line::styled(
                " Enter go · Esc cancel",
                Style::default().fg(Color::DarkGray),
            );
            frame.render_widget(Paragraph::new(hint), chunks[1]);
        };

        modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: modal_area,
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(Color::Rgb(35, 35, 45)),
                        padding: Padding::default(),
                        border: None,
                        fg: None,
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior::default(),
                on_close: || Action::LocationClose,
                render_content: &mut render_content,
            },
        );
    }
}
