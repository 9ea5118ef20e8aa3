//! Core game interface for terminal games driven by the [`Engine`](crate::core::engine::Engine)
use crossterm::event::KeyEvent;

/// What the engine should do after a game handled an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Main game trait that all games must implement
///
/// The engine owns the game exclusively: it redraws after every handled
/// event, so games expose plain state and never need to notify anyone.
pub trait Game {
    /// Update the game from a single key press
    fn handle_input(&mut self, event: KeyEvent) -> Flow;

    /// Render the current state into the Ratatui Frame
    fn render(&self, frame: &mut ratatui::Frame);
}
