use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Map a key to an [`InputAction`]. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::MenuPrev);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::MenuNext);
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                let _ = app.handle_input(InputAction::MenuInc);
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => {
                let _ = app.handle_input(InputAction::MenuDec);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::MenuApply);
            }
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::MenuCancel);
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => {}
        },
        Scene::Table => match code {
            KeyCode::Char('m') | KeyCode::Char('M') => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let _ = app.handle_input(InputAction::DealOne);
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                let _ = app.handle_input(InputAction::DealBatch);
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                let _ = app.handle_input(InputAction::ToggleAuto);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let _ = app.handle_input(InputAction::ResetStats);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => {}
        },
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_drive_the_table() {
        let mut app = AppState::default();
        assert!(!handle_key(&mut app, KeyCode::Enter));
        assert_eq!(app.scene, Scene::Table);
        let _ = handle_key(&mut app, KeyCode::Char(' '));
        assert_eq!(app.stats().hands(), 1);
        let _ = handle_key(&mut app, KeyCode::Char('r'));
        assert_eq!(app.stats().hands(), 0);
        assert!(handle_key(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn help_swallows_other_keys() {
        let mut app = AppState::default();
        app.apply_menu();
        let _ = handle_key(&mut app, KeyCode::Char('?'));
        assert!(app.help_open());
        assert!(!handle_key(&mut app, KeyCode::Char('q')));
        let _ = handle_key(&mut app, KeyCode::Char(' '));
        assert_eq!(app.stats().hands(), 0);
        let _ = handle_key(&mut app, KeyCode::Esc);
        assert!(!app.help_open());
    }
}
