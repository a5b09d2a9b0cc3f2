use crate::state::messages::UiEvent;
use chrono::{DateTime, TimeZone, Timelike};
use log::info;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

/// Kiosk shutdown rule: exit once local time passes 1:30 AM so an
/// unattended display stops polling overnight.
pub struct CutoffWatcher {
    ui_events: mpsc::Sender<UiEvent>,
}

impl CutoffWatcher {
    pub fn new(ui_events: mpsc::Sender<UiEvent>) -> Self {
        Self { ui_events }
    }

    pub async fn run(self) {
        let mut check = interval(Duration::from_secs(30));
        loop {
            check.tick().await;
            if past_cutoff(chrono::Local::now()) {
                info!("shutdown cutoff reached, exiting");
                let _ = self.ui_events.send(UiEvent::CutoffReached).await;
                break;
            }
        }
    }
}

/// The cutoff window is exactly the 1:30-1:59 AM half hour; a board started
/// later in the night runs until it next crosses it.
pub fn past_cutoff<Tz: TimeZone>(now: DateTime<Tz>) -> bool {
    now.hour() == 1 && now.minute() >= 30
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn cutoff_fires_only_in_the_half_hour_window() {
        let at = |h, m| Utc.with_ymd_and_hms(2026, 5, 1, h, m, 0).unwrap();
        assert!(!past_cutoff(at(1, 29)));
        assert!(past_cutoff(at(1, 30)));
        assert!(past_cutoff(at(1, 59)));
        assert!(!past_cutoff(at(2, 0)));
        assert!(!past_cutoff(at(23, 45)));
    }
}
