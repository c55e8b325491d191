use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

/// Render the detail view for the project with the given id.
///
pub fn project_detail(frame: &mut Frame, size: Rect, state: &mut State, id: u32) {
    let theme = state.get_theme().clone();

    let Some(project) = state.project_by_id(id) else {
        // The route is parameterized; an unknown id gets a placeholder.
        let placeholder = Paragraph::new("Project not found.")
            .style(styling::muted_text_style(&theme))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Project"));
        frame.render_widget(placeholder, size);
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            project.title.clone(),
            styling::normal_text_style(&theme).add_modifier(Modifier::BOLD),
        ))
        .border_style(styling::active_block_border_style(&theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // badges
            Constraint::Length(1),
            Constraint::Length(3), // progress gauge
            Constraint::Length(1),
            Constraint::Length(2), // metadata
            Constraint::Length(1), // tags
            Constraint::Min(0),    // description
        ])
        .split(inner);

    let badges = Line::from(vec![
        Span::styled(
            format!("● {}", project.status.label()),
            styling::status_badge_style(&theme, project.status),
        ),
        Span::styled("   ", styling::muted_text_style(&theme)),
        Span::styled(
            format!("{} priority", project.priority.label()),
            styling::priority_badge_style(&theme, project.priority),
        ),
    ]);
    frame.render_widget(Paragraph::new(badges), rows[0]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Progress")
                .border_style(styling::normal_block_border_style(&theme)),
        )
        .gauge_style(Style::default().fg(theme.primary.to_color()))
        .percent(u16::from(project.progress_clamped()))
        .label(format!("{}%", project.progress_clamped()));
    frame.render_widget(gauge, rows[2]);

    let metadata = vec![
        Line::from(Span::styled(
            format!("Members:  {}", project.members),
            styling::normal_text_style(&theme),
        )),
        Line::from(Span::styled(
            format!("Deadline: {}", project.deadline.format("%b %d, %Y")),
            styling::normal_text_style(&theme),
        )),
    ];
    frame.render_widget(Paragraph::new(metadata), rows[4]);

    // The detail view shows every tag, uncapped.
    let tags: Vec<Span> = project
        .tags
        .iter()
        .map(|tag| {
            Span::styled(
                format!("[{}] ", tag),
                styling::secondary_text_style(&theme).fg(theme.info.to_color()),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(tags)), rows[5]);

    let description = Paragraph::new(project.description.clone())
        .style(styling::secondary_text_style(&theme))
        .wrap(Wrap { trim: true });
    frame.render_widget(description, rows[6]);
}
