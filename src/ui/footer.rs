use crate::ui::list::{ListState, LoadPhase};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_DEAD};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, list: &ListState, tick: u8) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let dim_style = text_style.add_modifier(Modifier::DIM);

        let page = format!(
            " Page {} of {} ",
            list.page.current_page, list.page.total_pages
        );
        let (status, status_style) = match &list.phase {
            LoadPhase::Loading(_) => (
                format!("{} Loading", SPINNER[usize::from(tick) % SPINNER.len()]),
                dim_style,
            ),
            LoadPhase::Errored { message } => (
                format!("Error: {message} (r: retry)"),
                Style::default().fg(STATUS_DEAD),
            ),
            LoadPhase::Idle | LoadPhase::Loaded => (String::new(), dim_style),
        };
        let hints = " ←/→: Page │ Tab: Filter │ Enter: Details │ q: Quit";
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count
        let used = page.chars().count()
            + status.chars().count()
            + hints.chars().count()
            + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width.saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(page, text_style.add_modifier(Modifier::BOLD)),
            Span::styled(status, status_style),
            Span::styled(hints, dim_style),
            Span::styled(" ".repeat(padding), dim_style),
            Span::styled(version, dim_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
