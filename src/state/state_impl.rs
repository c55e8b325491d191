use crate::catalog::{Project, Summary};
use crate::state::{StateError, StatusFilter, View};
use crate::ui::Theme;
use log::*;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;

/// Houses data representative of application state.
///
pub struct State {
    catalog: Vec<Project>,
    current_filter: StatusFilter,
    view_stack: Vec<View>,
    list_state: ListState,
    terminal_size: Rect,
    log_pane_open: bool,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            catalog: vec![],
            current_filter: StatusFilter::All,
            view_stack: vec![View::ProjectList],
            list_state: ListState::default(),
            terminal_size: Rect::default(),
            log_pane_open: false,
            theme: Theme::default(),
        }
    }
}

impl State {
    /// Return new state for the given catalog. The filter always starts at
    /// `All` on a fresh mount.
    ///
    pub fn new(catalog: Vec<Project>, theme: Theme) -> Self {
        let mut state = State {
            catalog,
            theme,
            ..State::default()
        };
        if !state.catalog.is_empty() {
            state.list_state.select(Some(0));
        }
        state
    }

    /// Return the full catalog in insertion order.
    ///
    pub fn catalog(&self) -> &[Project] {
        &self.catalog
    }

    /// Return the currently visible subset of the catalog, preserving the
    /// original relative order. Recomputed on demand, never cached.
    ///
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.catalog
            .iter()
            .filter(|p| self.current_filter.matches(p))
            .collect()
    }

    /// Return summary statistics over the entire catalog, regardless of the
    /// active filter.
    ///
    pub fn summary(&self) -> Summary {
        Summary::compute(&self.catalog)
    }

    pub fn current_filter(&self) -> StatusFilter {
        self.current_filter
    }

    /// Set the active status filter. Selecting the already-active filter is
    /// a no-op, including for the card selection.
    ///
    pub fn set_filter(&mut self, filter: StatusFilter) {
        if filter == self.current_filter {
            return;
        }
        debug!("Switching status filter to '{}'...", filter.label());
        self.current_filter = filter;
        if self.visible_projects().is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    /// Move the chip selection one to the right, wrapping around.
    ///
    pub fn next_filter(&mut self) {
        self.set_filter(self.current_filter.next());
    }

    /// Move the chip selection one to the left, wrapping around.
    ///
    pub fn previous_filter(&mut self) {
        self.set_filter(self.current_filter.previous());
    }

    /// Move the card selection down, clamping at the end of the visible set.
    ///
    pub fn select_next(&mut self) {
        let visible = self.visible_projects().len();
        if visible == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(index) => (index + 1).min(visible - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Move the card selection up, clamping at the start of the visible set.
    ///
    pub fn select_previous(&mut self) {
        if self.visible_projects().is_empty() {
            return;
        }
        let previous = match self.list_state.selected() {
            Some(index) => index.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(previous));
    }

    /// Return the project under the card selection, if any.
    ///
    pub fn selected_project(&self) -> Option<&Project> {
        let index = self.list_state.selected()?;
        self.visible_projects().get(index).copied()
    }

    /// Look up a catalog entry by id.
    ///
    pub fn project_by_id(&self, id: u32) -> Option<&Project> {
        self.catalog.iter().find(|p| p.id == id)
    }

    pub fn current_view(&self) -> &View {
        self.view_stack.last().unwrap_or(&View::ProjectList)
    }

    /// Push the detail view for the given project. Fire-and-forget: nothing
    /// is awaited and no result flows back into the list screen.
    ///
    pub fn navigate_detail(&mut self, id: u32) -> Result<(), StateError> {
        if self.project_by_id(id).is_none() {
            return Err(StateError::ProjectNotFound { id });
        }
        let view = View::ProjectDetail(id);
        info!("Navigating to route '{}'...", view.route());
        self.view_stack.push(view);
        Ok(())
    }

    /// Push the project creation view.
    ///
    pub fn navigate_create(&mut self) {
        let view = View::CreateProject;
        info!("Navigating to route '{}'...", view.route());
        self.view_stack.push(view);
    }

    /// Pop the current view to go back, returning the popped view. The
    /// project list screen itself is never popped.
    ///
    pub fn pop_view(&mut self) -> Option<View> {
        if self.view_stack.len() > 1 {
            let popped = self.view_stack.pop();
            if let Some(view) = &popped {
                debug!("Popped view for route '{}'.", view.route());
            }
            popped
        } else {
            None
        }
    }

    pub fn set_terminal_size(&mut self, size: Rect) {
        self.terminal_size = size;
    }

    pub fn terminal_size(&self) -> Rect {
        self.terminal_size
    }

    pub fn toggle_log_pane(&mut self) {
        self.log_pane_open = !self.log_pane_open;
    }

    pub fn is_log_pane_open(&self) -> bool {
        self.log_pane_open
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get_list_state(&mut self) -> &mut ListState {
        &mut self.list_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_projects, Status};

    fn state() -> State {
        State::new(sample_projects(), Theme::default())
    }

    #[test]
    fn visible_set_preserves_catalog_order() {
        let mut state = state();
        state.set_filter(StatusFilter::Active);
        let visible = state.visible_projects();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.status == Status::Active));
        assert!(visible[0].id < visible[1].id);
    }

    #[test]
    fn all_filter_yields_the_whole_catalog() {
        let state = state();
        let ids: Vec<u32> = state.visible_projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn selecting_the_active_filter_is_a_no_op() {
        let mut state = state();
        state.select_next();
        let selected_before = state.list_state.selected();
        state.set_filter(StatusFilter::All);
        assert_eq!(state.current_filter(), StatusFilter::All);
        assert_eq!(state.list_state.selected(), selected_before);
    }

    #[test]
    fn switching_filters_resets_the_card_selection() {
        let mut state = state();
        state.select_next();
        state.set_filter(StatusFilter::Completed);
        assert_eq!(state.list_state.selected(), Some(0));
        assert_eq!(state.selected_project().map(|p| p.id), Some(3));
    }

    #[test]
    fn chip_counts_are_stable_across_filter_changes() {
        let mut state = state();
        let counts_before: Vec<usize> = StatusFilter::OPTIONS
            .iter()
            .map(|f| f.count(state.catalog()))
            .collect();
        state.set_filter(StatusFilter::OnHold);
        let counts_after: Vec<usize> = StatusFilter::OPTIONS
            .iter()
            .map(|f| f.count(state.catalog()))
            .collect();
        assert_eq!(counts_before, counts_after);
        assert_eq!(counts_before, vec![4, 2, 1, 1]);
    }

    #[test]
    fn summary_is_unaffected_by_the_active_filter() {
        let mut state = state();
        state.set_filter(StatusFilter::Completed);
        let summary = state.summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.average_progress, 63);
    }

    #[test]
    fn card_selection_clamps_at_both_ends() {
        let mut state = state();
        state.select_previous();
        assert_eq!(state.list_state.selected(), Some(0));
        for _ in 0..10 {
            state.select_next();
        }
        assert_eq!(state.list_state.selected(), Some(3));
    }

    #[test]
    fn empty_filtered_set_clears_the_selection() {
        let mut projects = sample_projects();
        projects.retain(|p| p.status != Status::Completed);
        let mut state = State::new(projects, Theme::default());
        state.set_filter(StatusFilter::Completed);
        assert!(state.visible_projects().is_empty());
        assert_eq!(state.list_state.selected(), None);
        assert_eq!(state.selected_project(), None);
    }

    #[test]
    fn navigation_pushes_and_pops_detail_routes() {
        let mut state = state();
        state.navigate_detail(3).unwrap();
        assert_eq!(state.current_view(), &View::ProjectDetail(3));
        assert_eq!(state.current_view().route(), "detail/3");
        assert_eq!(state.pop_view(), Some(View::ProjectDetail(3)));
        assert_eq!(state.current_view(), &View::ProjectList);
    }

    #[test]
    fn navigating_to_an_unknown_project_fails() {
        let mut state = state();
        assert!(matches!(
            state.navigate_detail(99),
            Err(StateError::ProjectNotFound { id: 99 })
        ));
        assert_eq!(state.current_view(), &View::ProjectList);
    }

    #[test]
    fn the_list_view_is_never_popped() {
        let mut state = state();
        assert_eq!(state.pop_view(), None);
        state.navigate_create();
        assert_eq!(state.current_view().route(), "create");
        assert_eq!(state.pop_view(), Some(View::CreateProject));
        assert_eq!(state.pop_view(), None);
    }
}
