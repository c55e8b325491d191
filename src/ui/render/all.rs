use super::*;
use crate::state::{State, View};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

const LOG_PANE_HEIGHT: u16 = 8;

/// Render the full interface according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    let constraints = if state.is_log_pane_open() {
        vec![
            Constraint::Min(0),
            Constraint::Length(LOG_PANE_HEIGHT),
            Constraint::Length(1),
        ]
    } else {
        vec![Constraint::Min(0), Constraint::Length(1)]
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    match *state.current_view() {
        View::ProjectList => project_list_screen(frame, rows[0], state),
        View::ProjectDetail(id) => project_detail(frame, rows[0], state, id),
        View::CreateProject => create_project(frame, rows[0], state),
    }

    if state.is_log_pane_open() {
        log(frame, rows[1], state);
        footer(frame, rows[2], state);
    } else {
        footer(frame, rows[1], state);
    }
}

/// Render the project list screen: header chrome, chip bar, and the card
/// list itself.
///
fn project_list_screen(frame: &mut Frame, size: Rect, state: &mut State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(size);

    header(frame, rows[0], state);
    chips(frame, rows[1], state);
    project_list(frame, rows[2], state);
}
