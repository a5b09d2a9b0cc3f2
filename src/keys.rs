use crate::app::App;
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;

    match (key_event.code, key_event.modifiers) {
        // Quit
        (Char('q'), _) | (Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Force a refresh without waiting for the next poll tick
        (Char('r'), _) => {
            drop(guard);
            let _ = network_requests.send(NetworkRequest::RefreshBoard).await;
        }

        (Char('"'), _) => guard.toggle_show_logs(),
        (Char('?'), _) => guard.toggle_help(),
        (KeyCode::Esc, _) => guard.state.show_help = false,

        _ => {}
    }
}
