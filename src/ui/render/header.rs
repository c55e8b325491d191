use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BLOCK_TITLE: &str = "Team Projects";
const ADD_HINT: &str = "a: new project";

/// Render the header chrome: screen title, summary statistics over the full
/// catalog, and the add affordance hint.
///
pub fn header(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let summary = state.summary();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            BLOCK_TITLE,
            styling::normal_text_style(theme).add_modifier(Modifier::BOLD),
        ))
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(ADD_HINT.len() as u16 + 1),
        ])
        .split(inner);

    let stats = Line::from(vec![
        Span::styled(
            format!("{} projects", summary.total),
            styling::normal_text_style(theme),
        ),
        Span::styled("  ·  ", styling::muted_text_style(theme)),
        Span::styled(
            format!("{} active", summary.active),
            styling::normal_text_style(theme),
        ),
        Span::styled("  ·  ", styling::muted_text_style(theme)),
        Span::styled(
            format!("{}% avg progress", summary.average_progress),
            styling::normal_text_style(theme),
        ),
    ]);
    frame.render_widget(Paragraph::new(stats), columns[0]);

    let hint = Paragraph::new(Span::styled(ADD_HINT, styling::muted_text_style(theme)))
        .alignment(Alignment::Right);
    frame.render_widget(hint, columns[1]);
}
