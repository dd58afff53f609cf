use crate::ui::app::App;
use crate::ui::character_list::render_character_list;
use crate::ui::detail::render_detail_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.list().shown_filter()), header);
    frame.render_widget(Clear, body);
    render_character_list(frame, body, app.list());
    frame.render_widget(Footer::new().widget(footer, app.list(), app.tick()), footer);

    if app.show_detail() {
        render_detail_dialog(frame, body, app.detail());
    }
}
