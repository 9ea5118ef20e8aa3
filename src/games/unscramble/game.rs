use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use tracing::debug;

use super::renderer::UnscrambleRenderer;
use super::state::GameState;
use crate::core::renderer::Renderer;
use crate::{Flow, Game};

/// Buttons of the final score dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Exit,
    PlayAgain,
}

impl DialogChoice {
    fn toggled(self) -> Self {
        match self {
            DialogChoice::Exit => DialogChoice::PlayAgain,
            DialogChoice::PlayAgain => DialogChoice::Exit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Playing,
    FinalScore { selected: DialogChoice },
}

/// Terminal front end for [`GameState`]: text field, inline error,
/// skip, and the end-of-session dialog
pub struct UnscrambleGame {
    state: GameState<StdRng>,
    input: String,
    error: bool,
    screen: Screen,
}

impl UnscrambleGame {
    pub fn new(state: GameState<StdRng>) -> Self {
        Self {
            state,
            input: String::new(),
            error: false,
            screen: Screen::Playing,
        }
    }

    pub fn state(&self) -> &GameState<StdRng> {
        &self.state
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    fn on_submit_word(&mut self) {
        let guess = self.input.trim();
        if guess.is_empty() {
            return;
        }
        if self.state.submit_guess(guess) {
            self.clear_field();
            if !self.state.advance() {
                self.show_final_score();
            }
        } else {
            self.error = true;
        }
    }

    fn on_skip_word(&mut self) {
        if self.state.advance() {
            self.clear_field();
        } else {
            self.show_final_score();
        }
    }

    fn show_final_score(&mut self) {
        debug!(score = self.state.score(), "showing final score");
        self.screen = Screen::FinalScore {
            selected: DialogChoice::PlayAgain,
        };
    }

    fn restart_game(&mut self) {
        self.state.reinitialize_data();
        self.clear_field();
        self.screen = Screen::Playing;
    }

    fn clear_field(&mut self) {
        self.error = false;
        self.input.clear();
    }

    fn handle_playing(&mut self, event: KeyEvent) {
        match event.code {
            // Control chords are shortcuts, not letters
            KeyCode::Char(_) if event.modifiers.contains(KeyModifiers::CONTROL) => {}
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.on_submit_word(),
            KeyCode::Tab => self.on_skip_word(),
            _ => {}
        }
    }

    fn handle_dialog(&mut self, event: KeyEvent, selected: DialogChoice) -> Flow {
        let choice = match event.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.screen = Screen::FinalScore {
                    selected: selected.toggled(),
                };
                return Flow::Continue;
            }
            KeyCode::Enter => selected,
            KeyCode::Char('r') | KeyCode::Char('R') => DialogChoice::PlayAgain,
            KeyCode::Char('q') | KeyCode::Char('Q') => DialogChoice::Exit,
            _ => return Flow::Continue,
        };

        match choice {
            DialogChoice::PlayAgain => {
                self.restart_game();
                Flow::Continue
            }
            DialogChoice::Exit => Flow::Exit,
        }
    }
}

impl Game for UnscrambleGame {
    fn handle_input(&mut self, event: KeyEvent) -> Flow {
        match self.screen {
            Screen::Playing => {
                self.handle_playing(event);
                Flow::Continue
            }
            Screen::FinalScore { selected } => self.handle_dialog(event, selected),
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        UnscrambleRenderer::render(frame, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::unscramble::config::{GameConfig, SCORE_INCREASE};
    use crate::games::unscramble::words::WordBank;
    use rand::SeedableRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(game: &mut UnscrambleGame, text: &str) {
        for c in text.chars() {
            game.handle_input(key(KeyCode::Char(c)));
        }
    }

    fn new_game(max_words: usize) -> UnscrambleGame {
        let config = GameConfig {
            max_words,
            ..GameConfig::default()
        };
        let state = GameState::new(
            WordBank::new(["apple", "mango", "lemon"]),
            config,
            StdRng::seed_from_u64(42),
        )
        .unwrap();
        UnscrambleGame::new(state)
    }

    #[test]
    fn test_wrong_guess_shows_error_and_keeps_text() {
        let mut game = new_game(2);
        type_text(&mut game, "nope");
        game.handle_input(key(KeyCode::Enter));

        assert!(game.has_error());
        assert_eq!(game.input(), "nope");
        assert_eq!(game.state().word_count(), 1);

        game.handle_input(key(KeyCode::Backspace));
        assert_eq!(game.input(), "nop");
    }

    #[test]
    fn test_correct_guess_scores_and_moves_on() {
        let mut game = new_game(2);
        type_text(&mut game, "xx");
        game.handle_input(key(KeyCode::Enter));
        assert!(game.has_error());

        for _ in 0..2 {
            game.handle_input(key(KeyCode::Backspace));
        }
        let answer = game.state().current_word().to_uppercase();
        type_text(&mut game, &format!(" {answer} "));
        game.handle_input(key(KeyCode::Enter));

        assert!(!game.has_error());
        assert_eq!(game.input(), "");
        assert_eq!(game.state().score(), SCORE_INCREASE);
        assert_eq!(game.state().word_count(), 2);
        assert_eq!(game.screen(), Screen::Playing);
    }

    #[test]
    fn test_empty_submission_is_ignored() {
        let mut game = new_game(2);
        type_text(&mut game, "  ");
        game.handle_input(key(KeyCode::Enter));
        assert!(!game.has_error());
    }

    #[test]
    fn test_skip_advances_without_scoring_then_ends() {
        let mut game = new_game(2);
        type_text(&mut game, "abc");
        game.handle_input(key(KeyCode::Enter));

        game.handle_input(key(KeyCode::Tab));
        assert_eq!(game.state().word_count(), 2);
        assert_eq!(game.state().score(), 0);
        assert_eq!(game.input(), "");
        assert!(!game.has_error());

        game.handle_input(key(KeyCode::Tab));
        assert_eq!(
            game.screen(),
            Screen::FinalScore {
                selected: DialogChoice::PlayAgain
            }
        );
        assert_eq!(game.state().word_count(), 2);
    }

    #[test]
    fn test_last_correct_answer_opens_dialog() {
        let mut game = new_game(1);
        let answer = game.state().current_word().to_string();
        type_text(&mut game, &answer);
        game.handle_input(key(KeyCode::Enter));

        assert!(matches!(game.screen(), Screen::FinalScore { .. }));
        assert_eq!(game.state().score(), SCORE_INCREASE);
    }

    #[test]
    fn test_dialog_play_again_restarts() {
        let mut game = new_game(1);
        let answer = game.state().current_word().to_string();
        type_text(&mut game, &answer);
        game.handle_input(key(KeyCode::Enter));

        // Typing in the dialog must not reach the text field
        assert_eq!(game.handle_input(key(KeyCode::Char('x'))), Flow::Continue);
        assert_eq!(game.handle_input(key(KeyCode::Enter)), Flow::Continue);

        assert_eq!(game.screen(), Screen::Playing);
        assert_eq!(game.state().score(), 0);
        assert_eq!(game.state().word_count(), 1);
        assert_eq!(game.input(), "");
    }

    #[test]
    fn test_dialog_exit() {
        let mut game = new_game(1);
        game.handle_input(key(KeyCode::Tab));

        assert_eq!(game.handle_input(key(KeyCode::Right)), Flow::Continue);
        assert_eq!(
            game.screen(),
            Screen::FinalScore {
                selected: DialogChoice::Exit
            }
        );
        assert_eq!(game.handle_input(key(KeyCode::Enter)), Flow::Exit);

        let mut game = new_game(1);
        game.handle_input(key(KeyCode::Tab));
        assert_eq!(game.handle_input(key(KeyCode::Char('q'))), Flow::Exit);
    }

    #[test]
    fn test_control_chords_are_not_typed() {
        let mut game = new_game(2);
        type_text(&mut game, "ab");
        game.handle_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        game.handle_input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        game.handle_input(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT));

        assert_eq!(game.input(), "abC");
    }
}
