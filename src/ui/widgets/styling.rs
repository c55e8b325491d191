use crate::catalog::{Priority, Status};
use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for secondary text such as descriptions.
///
pub fn secondary_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_secondary.to_color())
}

/// Return the style for muted text such as metadata rows.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for the selected card.
///
pub fn selected_card_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
}

/// Return the style for a status badge.
///
pub fn status_badge_style(theme: &Theme, status: Status) -> Style {
    Style::default()
        .fg(theme.status_color(status))
        .add_modifier(Modifier::BOLD)
}

/// Return the style for a priority badge.
///
pub fn priority_badge_style(theme: &Theme, priority: Priority) -> Style {
    Style::default()
        .fg(theme.priority_color(priority))
        .add_modifier(Modifier::BOLD)
}

/// Return the style for a filter chip.
///
pub fn chip_style(theme: &Theme, active: bool) -> Style {
    if active {
        Style::default()
            .fg(theme.primary.to_color())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_secondary.to_color())
    }
}

/// Return the style for the tag overflow indicator.
///
pub fn tag_overflow_style(theme: &Theme) -> Style {
    Style::default().fg(theme.neutral.to_color())
}
