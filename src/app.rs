use crate::state::app_settings::AppSettings;
use chrono::{DateTime, Local};
use scoreboard_api::DisplayRecord;

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

/// One cycle's worth of display state. The board is fully overwritten by
/// each network response; nothing is merged across cycles.
#[derive(Default)]
pub struct AppState {
    pub board: Option<DisplayRecord>,
    pub no_game: bool,
    pub last_error: Option<String>,
    pub last_updated: Option<DateTime<Local>>,
    pub show_help: bool,
    pub show_logs: bool,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        Self { settings, state: AppState::default() }
    }

    // -----------------------------------------------------------------------
    // Network response handlers — called from main_ui_loop
    // -----------------------------------------------------------------------

    pub fn on_board_loaded(&mut self, record: DisplayRecord) {
        self.state.board = Some(record);
        self.state.no_game = false;
        self.state.last_error = None;
        self.state.last_updated = Some(Local::now());
    }

    pub fn on_no_game(&mut self) {
        self.state.board = None;
        self.state.no_game = true;
        self.state.last_error = None;
        self.state.last_updated = Some(Local::now());
    }

    /// Failed cycles degrade to the placeholder display; polling continues.
    pub fn on_error(&mut self, message: String) {
        self.state.board = None;
        self.state.no_game = false;
        self.state.last_error = Some(message);
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_help(&mut self) {
        self.state.show_help = !self.state.show_help;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoreboard_api::StatusMode;

    #[test]
    fn error_clears_the_previous_board() {
        let mut app = App::new(AppSettings::default());
        app.on_board_loaded(DisplayRecord {
            mode: StatusMode::Live,
            ..Default::default()
        });
        assert!(app.state.board.is_some());

        app.on_error("boom".into());
        assert!(app.state.board.is_none());
        assert_eq!(app.state.last_error.as_deref(), Some("boom"));
    }

    #[test]
    fn successful_load_clears_a_previous_error() {
        let mut app = App::new(AppSettings::default());
        app.on_error("boom".into());
        app.on_board_loaded(DisplayRecord::default());
        assert!(app.state.last_error.is_none());
        assert!(app.state.last_updated.is_some());
    }

    #[test]
    fn no_game_is_not_an_error() {
        let mut app = App::new(AppSettings::default());
        app.on_no_game();
        assert!(app.state.no_game);
        assert!(app.state.last_error.is_none());
        assert!(app.state.board.is_none());
    }
}
