use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{PORTAL_GREEN, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Bordered popup sized to its content and centred in an area.
pub struct PopupDialog<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    fixed_width: Option<u16>,
}

impl<'a> PopupDialog<'a> {
    pub fn new(title: &'a str, lines: Vec<Line<'a>>) -> Self {
        Self {
            title,
            lines,
            fixed_width: None,
        }
    }

    pub fn fixed_width(mut self, width: u16) -> Self {
        self.fixed_width = Some(width);
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let content_width = self.lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let width = self
            .fixed_width
            .unwrap_or_else(|| content_width.saturating_add(4));
        let height = (self.lines.len() as u16).saturating_add(2);
        let popup = centered_rect_by_size(area, width, height);

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(PORTAL_GREEN)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        let widget = Paragraph::new(self.lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(widget, popup);
    }
}
