use super::Frame;
use crate::catalog::Project;
use crate::state::State;
use crate::ui::theme::Theme;
use crate::ui::widgets::{bars, styling};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

const BLOCK_TITLE: &str = "Projects";
const PROGRESS_TRACK_WIDTH: u16 = 24;

/// Render the project card list according to state. When the filtered set
/// is empty a placeholder message takes its place.
///
pub fn project_list(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let visible = state.visible_projects();

    let title = match state.current_filter().status() {
        None => BLOCK_TITLE.to_string(),
        Some(status) => format!("{} · {}", BLOCK_TITLE, status.label()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(styling::active_block_border_style(&theme));

    if visible.is_empty() {
        let placeholder = Paragraph::new(state.current_filter().empty_message())
            .style(styling::muted_text_style(&theme))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(placeholder, size);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|project| ListItem::new(Text::from(card_lines(project, &theme))))
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style(&theme))
        .highlight_style(styling::selected_card_style(&theme))
        .block(block);

    frame.render_stateful_widget(list, size, state.get_list_state());
}

/// Build the text lines for a single project card.
///
fn card_lines(project: &Project, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                project.title.clone(),
                styling::normal_text_style(theme).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("● {}", project.status.label()),
                styling::status_badge_style(theme, project.status),
            ),
        ]),
        Line::from(Span::styled(
            project.description.clone(),
            styling::secondary_text_style(theme),
        )),
        Line::from(vec![
            Span::styled(
                bars::progress_bar(project.progress, PROGRESS_TRACK_WIDTH),
                styling::normal_text_style(theme).fg(theme.primary.to_color()),
            ),
            Span::styled(
                format!(" {}%", project.progress_clamped()),
                styling::secondary_text_style(theme),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!(
                    "{} members · due {} · ",
                    project.members,
                    project.deadline.format("%b %d, %Y")
                ),
                styling::muted_text_style(theme),
            ),
            Span::styled(
                format!("{} priority", project.priority.label()),
                styling::priority_badge_style(theme, project.priority),
            ),
        ]),
    ];

    let (shown, overflow) = bars::visible_tags(&project.tags);
    if !shown.is_empty() {
        let mut spans = Vec::new();
        for tag in shown {
            spans.push(Span::styled(
                format!("[{}] ", tag),
                styling::secondary_text_style(theme).fg(theme.info.to_color()),
            ));
        }
        if let Some(indicator) = overflow {
            spans.push(Span::styled(indicator, styling::tag_overflow_style(theme)));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_projects;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.clone()).collect()
    }

    #[test]
    fn card_shows_three_tags_plus_overflow() {
        let projects = sample_projects();
        let theme = Theme::default();
        // The first sample project carries five tags.
        let lines = card_lines(&projects[0], &theme);
        let tag_line = line_text(&lines[4]);
        assert_eq!(tag_line.matches('[').count(), 3);
        assert!(tag_line.ends_with("+2"));
    }

    #[test]
    fn card_progress_label_matches_the_record() {
        let projects = sample_projects();
        let theme = Theme::default();
        let lines = card_lines(&projects[0], &theme);
        assert!(line_text(&lines[2]).ends_with(" 75%"));
    }

    #[test]
    fn cards_without_overflow_skip_the_indicator() {
        let projects = sample_projects();
        let theme = Theme::default();
        // The second sample project has exactly three tags.
        let lines = card_lines(&projects[1], &theme);
        let tag_line = line_text(&lines[4]);
        assert_eq!(tag_line.matches('[').count(), 3);
        assert!(!tag_line.contains('+'));
    }
}
