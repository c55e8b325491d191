use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const CONTENT: &str = "

Project creation is not available yet.

The catalog on this screen is read-only; new projects will be
created here in a future release.

Esc: back to the project list
";

/// Render the project creation placeholder screen.
///
pub fn create_project(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();

    let placeholder = Paragraph::new(CONTENT)
        .style(styling::normal_text_style(theme))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("New Project")
                .border_style(styling::active_block_border_style(theme)),
        );
    frame.render_widget(placeholder, size);
}
