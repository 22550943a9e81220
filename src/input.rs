use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::entities::GameState;
use crate::game::GameAction;

/// Polls crossterm and translates raw key events into game actions.
///
/// Movement is level-triggered: a key press and its matching release each
/// become an action, and the session keeps the ship moving in between. This
/// relies on the keyboard enhancement flags pushed in `main`; terminals
/// without release events still get press-driven movement.
pub struct InputManager {
    actions: Vec<GameAction>,
    quit: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            quit: false,
        }
    }

    /// Drains every pending event and records the actions for this frame.
    /// Should be called once per frame before reading `actions`.
    pub fn poll_events(&mut self, game_state: &GameState) -> color_eyre::Result<()> {
        self.actions.clear();

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key_event) => {
                    self.handle_key_event(key_event, game_state);
                }
                Event::Mouse(_) => {
                    // Mouse events currently ignored
                }
                Event::Resize(_, _) => {
                    // Resize events handled elsewhere
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent, game_state: &GameState) {
        match key_event.kind {
            KeyEventKind::Press => {
                self.handle_key_press(key_event, game_state);
            }
            KeyEventKind::Release => {
                self.handle_key_release(key_event.code);
            }
            _ => {}
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, game_state: &GameState) {
        // Check for quit keys first (works in any state)
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.quit = true;
            return;
        }

        match game_state {
            GameState::Playing => match key_event.code {
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    self.actions.push(GameAction::MoveLeftPressed);
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    self.actions.push(GameAction::MoveRightPressed);
                }
                KeyCode::Char(' ') => {
                    self.actions.push(GameAction::Fire);
                }
                _ => {}
            },
            GameState::GameOver | GameState::Won => {
                if matches!(key_event.code, KeyCode::Char('r') | KeyCode::Char('R')) {
                    self.actions.push(GameAction::Restart);
                }
            }
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.actions.push(GameAction::MoveLeftReleased);
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.actions.push(GameAction::MoveRightReleased);
            }
            _ => {}
        }
    }

    /// Actions gathered by the last `poll_events` call.
    pub fn actions(&self) -> &[GameAction] {
        &self.actions
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}
