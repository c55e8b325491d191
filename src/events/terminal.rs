use crate::state::{State, StatusFilter, View};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if event::poll(tick_rate).unwrap_or(false) {
                if let Ok(CrosstermEvent::Key(key)) = event::read() {
                    if tx_clone.send(Event::Input(key)).is_err() {
                        return;
                    }
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                return;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => match event {
                KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Char('q'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                KeyEvent {
                    code: KeyCode::Char('d'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    debug!("Toggling log pane...");
                    state.toggle_log_pane();
                }
                KeyEvent {
                    code: KeyCode::Esc | KeyCode::Backspace,
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    state.pop_view();
                }
                KeyEvent {
                    code: KeyCode::Char('j') | KeyCode::Down,
                    modifiers: KeyModifiers::NONE,
                    ..
                } if matches!(state.current_view(), View::ProjectList) => {
                    state.select_next();
                }
                KeyEvent {
                    code: KeyCode::Char('k') | KeyCode::Up,
                    modifiers: KeyModifiers::NONE,
                    ..
                } if matches!(state.current_view(), View::ProjectList) => {
                    state.select_previous();
                }
                KeyEvent {
                    code: KeyCode::Char('h') | KeyCode::Left,
                    modifiers: KeyModifiers::NONE,
                    ..
                } if matches!(state.current_view(), View::ProjectList) => {
                    state.previous_filter();
                }
                KeyEvent {
                    code: KeyCode::Char('l') | KeyCode::Right,
                    modifiers: KeyModifiers::NONE,
                    ..
                } if matches!(state.current_view(), View::ProjectList) => {
                    state.next_filter();
                }
                KeyEvent {
                    code: KeyCode::Char(c @ '1'..='4'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } if matches!(state.current_view(), View::ProjectList) => {
                    let index = c as usize - '1' as usize;
                    state.set_filter(StatusFilter::OPTIONS[index]);
                }
                KeyEvent {
                    code: KeyCode::Enter,
                    modifiers: KeyModifiers::NONE,
                    ..
                } if matches!(state.current_view(), View::ProjectList) => {
                    if let Some(id) = state.selected_project().map(|p| p.id) {
                        if let Err(e) = state.navigate_detail(id) {
                            warn!("Failed to open project detail: {}", e);
                        }
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('a'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } if matches!(state.current_view(), View::ProjectList) => {
                    state.navigate_create();
                }
                _ => {
                    trace!("Ignoring terminal event '{:?}'.", event);
                }
            },
            Event::Tick => {}
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_map_onto_chip_options() {
        for (i, c) in ('1'..='4').enumerate() {
            let index = c as usize - '1' as usize;
            assert_eq!(index, i);
            assert!(index < StatusFilter::OPTIONS.len());
        }
    }
}
