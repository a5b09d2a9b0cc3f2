use crate::state::messages::NetworkRequest;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

/// Periodic board refresh at the configured poll interval.
pub struct PeriodicRefresher {
    poll_interval: Duration,
    network_requests: mpsc::Sender<NetworkRequest>,
}

impl PeriodicRefresher {
    pub fn new(poll_interval: Duration, network_requests: mpsc::Sender<NetworkRequest>) -> Self {
        Self { poll_interval, network_requests }
    }

    pub async fn run(self) {
        let mut poll = interval(self.poll_interval);
        // Skip the immediate first tick so the startup fetch isn't doubled.
        poll.tick().await;

        loop {
            poll.tick().await;
            let _ = self
                .network_requests
                .send(NetworkRequest::RefreshBoard)
                .await;
        }
    }
}
