use crate::{Flow, Game};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tracing::debug;

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Run the draw/input loop until the game asks to exit or a quit key is pressed.
    /// Hands the game back so the caller can read its final state.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<G> {
        loop {
            terminal.draw(|f| self.game.render(f))?;

            // INPUT (blocking, nothing else drives this game)
            let Event::Key(key) = event::read()? else {
                continue;
            };
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if is_quit_key(&key) {
                debug!(code = ?key.code, "quit key pressed, leaving engine loop");
                break;
            }
            if self.game.handle_input(key) == Flow::Exit {
                debug!("game requested exit");
                break;
            }
        }

        Ok(self.game)
    }
}

/// Esc, or Ctrl+C since raw mode delivers it as a key event instead of a signal
pub fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        assert!(is_quit_key(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit_key(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)));
    }
}
