use ratatui::crossterm::event::KeyEvent;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Redraw tick when no input arrived within the tick rate
    Tick,
}
