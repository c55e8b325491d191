use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

/// Render the log pane according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();

    let widget = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title("Log (d to hide)")
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        )
        .output_separator(' ')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(styling::normal_text_style(theme))
        .style_error(Style::default().fg(theme.error.to_color()))
        .style_warn(Style::default().fg(theme.warning.to_color()))
        .style_info(Style::default().fg(theme.info.to_color()))
        .style_debug(Style::default().fg(theme.text_muted.to_color()))
        .style_trace(Style::default().fg(theme.text_muted.to_color()));

    frame.render_widget(widget, size);
}
