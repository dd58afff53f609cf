use crate::ui::components::PopupDialog;
use crate::ui::detail::state::SelectionState;
use crate::ui::theme::{status_color, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 60;

pub fn render_detail_dialog(frame: &mut Frame, area: Rect, state: &SelectionState) {
    let Some(character) = state.selected() else {
        return;
    };

    let label_style = Style::default()
        .fg(HEADER_TEXT)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(HEADER_TEXT);
    let field = |label: &'static str, value: &str| {
        Line::from(vec![
            Span::styled(format!(" {label:<10}"), label_style),
            Span::styled(display_or_unknown(value), value_style),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", display_or_unknown(&character.status)),
            Style::default()
                .fg(status_color(&character.status))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Species:", &character.species),
        field("Gender:", &character.gender),
        field("Origin:", &character.origin.name),
        field("Location:", &character.location.name),
        field("Image:", &character.image_url),
        Line::from(""),
        Line::from(Span::styled(
            " Esc/Enter: Close",
            Style::default().fg(HEADER_SEPARATOR),
        )),
    ];

    PopupDialog::new(&character.name, lines)
        .fixed_width(DIALOG_WIDTH)
        .render(frame, area);
}

fn display_or_unknown(value: &str) -> String {
    if value.is_empty() {
        "unknown".to_string()
    } else {
        value.to_string()
    }
}
