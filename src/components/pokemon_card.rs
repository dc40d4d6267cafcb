use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::action::Action;
use crate::catalog::PokemonRecord;
use crate::view::{self, MORE_DETAILS, STAR_ICON};

pub const ACCENT: Color = Color::Rgb(255, 203, 5);
pub const DIM: Color = Color::DarkGray;

/// Images can't be drawn, so they show as `[alt] url`.
pub fn image_line(alt: &str, url: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("[{alt}]"), Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::styled(url.to_string(), Style::default().fg(DIM)),
    ])
}

pub struct PokemonCardProps<'a> {
    pub record: &'a PokemonRecord,
    pub is_favorite: bool,
    /// Show the "More details" link (hidden on the details page itself)
    pub show_details_link: bool,
    pub is_selected: bool,
}

/// Name, type, weight and sprite of one Pokémon
#[derive(Default)]
pub struct PokemonCard;

impl PokemonCard {
    pub fn lines(props: &PokemonCardProps<'_>) -> Vec<Line<'static>> {
        let record = props.record;
        let mut lines = vec![
            Line::from(Span::styled(
                record.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                record.pokemon_type.clone(),
                Style::default().fg(ACCENT),
            )),
            Line::from(record.weight_label()),
            image_line(&view::sprite_alt(record), &record.image),
        ];
        if props.show_details_link {
            lines.push(Line::from(vec![
                Span::styled(
                    MORE_DETAILS,
                    Style::default()
                        .fg(Color::LightBlue)
                        .add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled(format!(" → {}", record.details_path()), Style::default().fg(DIM)),
            ]));
        }
        if props.is_favorite {
            lines.push(Line::from(vec![
                Span::styled("★ ", Style::default().fg(ACCENT)),
                Span::styled(
                    format!("[{}]", view::favorite_alt(record)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(format!(" {STAR_ICON}"), Style::default().fg(DIM)),
            ]));
        }
        lines
    }

    /// Rows needed inside the border
    pub fn height(props: &PokemonCardProps<'_>) -> u16 {
        Self::lines(props).len() as u16 + 2
    }
}

impl Component<Action> for PokemonCard {
    type Props<'a> = PokemonCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border_style = if props.is_selected {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(DIM)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let paragraph = Paragraph::new(Self::lines(&props))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
