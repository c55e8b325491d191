use super::Frame;
use crate::state::{State, StatusFilter};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

/// Render the filter chip bar. Each chip carries a live count over the full
/// catalog; exactly one chip is highlighted at a time.
///
pub fn chips(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let current = state.current_filter();

    let titles: Vec<Line> = StatusFilter::OPTIONS
        .iter()
        .map(|option| {
            Line::from(Span::styled(
                format!("{} ({})", option.label(), option.count(state.catalog())),
                styling::chip_style(theme, *option == current),
            ))
        })
        .collect();

    let selected = StatusFilter::OPTIONS
        .iter()
        .position(|option| *option == current)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Filter")
                .border_style(styling::normal_block_border_style(theme)),
        )
        .select(selected)
        .highlight_style(styling::chip_style(theme, true))
        .divider(Span::styled("·", styling::muted_text_style(theme)));

    frame.render_widget(tabs, size);
}
