/// Renderer trait for drawing game state using Ratatui
pub trait Renderer<S> {
    /// Render the current state into the Ratatui Frame - no game logic
    fn render(frame: &mut ratatui::Frame, state: &S);
}
