use super::Frame;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, widgets::Paragraph};

/// Render the footer hotkey hints for the current view.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let hints = match state.current_view() {
        View::ProjectList => {
            " j/k: select card, h/l or 1-4: filter, Enter: open, a: new project, d: log, q: quit"
        }
        View::ProjectDetail(_) | View::CreateProject => " Esc: back, d: log, q: quit",
    };

    let theme = state.get_theme();
    let paragraph = Paragraph::new(hints).style(styling::muted_text_style(theme));
    frame.render_widget(paragraph, size);
}
