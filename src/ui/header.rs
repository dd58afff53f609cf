use crate::api::GenderFilter;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PORTAL_GREEN};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar with the gender filter picker.
pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, active: GenderFilter) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled(
                "  Rick and Morty",
                Style::default()
                    .fg(PORTAL_GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("Filter by Gender: ", text_style),
        ];

        for (index, filter) in GenderFilter::ALL.into_iter().enumerate() {
            let label = format!(" {}:{} ", index, filter.label());
            let style = if filter == active {
                text_style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD)
            } else {
                text_style.add_modifier(Modifier::DIM)
            };
            spans.push(Span::styled(label, style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
