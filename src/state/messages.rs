use crossterm::event::KeyEvent;
use scoreboard_api::DisplayRecord;

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    RefreshBoard,
}

#[derive(Debug)]
pub enum NetworkResponse {
    /// A game was located and normalized for this cycle.
    BoardLoaded { record: DisplayRecord },
    /// Fetch succeeded but the team has no game in the payload.
    NoGame,
    Error { message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
    /// Wall-clock shutdown rule fired; the main loop exits.
    CutoffReached,
}
