use crate::ui::list::{ListState, LoadPhase};
use crate::ui::theme::{status_color, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState as RowState, Paragraph};
use ratatui::Frame;

/// Renders the character rows, keeping the highlighted row in view.
pub fn render_character_list(frame: &mut Frame, area: Rect, list: &ListState) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if list.characters.is_empty() {
        let message = match list.phase {
            LoadPhase::Idle | LoadPhase::Loading(_) => "Loading characters...",
            LoadPhase::Loaded => "No characters on this page.",
            LoadPhase::Errored { .. } => "Could not load characters.",
        };
        let widget = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(HEADER_SEPARATOR),
        )))
        .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let name_width = list
        .characters
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0);
    let species_width = list
        .characters
        .iter()
        .map(|c| c.species.chars().count())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = list
        .characters
        .iter()
        .map(|character| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:<width$}", character.name, width = name_width),
                    Style::default()
                        .fg(HEADER_TEXT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)),
                Span::styled(
                    format!("{:<width$}", character.species, width = species_width),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)),
                Span::styled(
                    character.status.clone(),
                    Style::default().fg(status_color(&character.status)),
                ),
            ]))
        })
        .collect();

    let widget = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▶");
    let mut rows = RowState::default().with_selected(Some(list.cursor));
    frame.render_stateful_widget(widget, area, &mut rows);
}
