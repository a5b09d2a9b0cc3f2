use crate::state::app_settings::{AppSettings, Feed};
use crate::state::messages::{NetworkRequest, NetworkResponse};
use chrono::Local;
use log::{debug, error};
use scoreboard_api::client::ScoreboardApi;
use tokio::sync::mpsc;

/// Owns the API client and serves refresh requests one at a time. Every
/// fetch/parse failure becomes a NetworkResponse::Error; the worker itself
/// never dies on a bad cycle.
pub struct NetworkWorker {
    api: ScoreboardApi,
    settings: AppSettings,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
}

impl NetworkWorker {
    pub fn new(
        settings: AppSettings,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        let mut api = ScoreboardApi::new().with_raw_dump(settings.raw_json_path());
        if let Some(key) = settings.rapidapi_key.clone() {
            api = api.with_rapidapi_key(key);
        }
        Self { api, settings, requests, responses }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            let response = match request {
                NetworkRequest::RefreshBoard => self.refresh_board().await,
            };

            debug!("network request complete");
            if let Err(e) = self.responses.send(response).await {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    async fn refresh_board(&self) -> NetworkResponse {
        debug!(
            "refreshing board for {} via {:?}",
            self.settings.team, self.settings.feed
        );
        let result = match self.settings.feed {
            Feed::Espn => {
                self.api
                    .fetch_team_game(self.settings.league, &self.settings.team)
                    .await
            }
            Feed::Tank01 => {
                let game_date = Local::now().format("%Y%m%d").to_string();
                self.api
                    .fetch_tank01_game(&game_date, &self.settings.team)
                    .await
            }
        };

        match result {
            Ok(Some(record)) => NetworkResponse::BoardLoaded { record },
            Ok(None) => NetworkResponse::NoGame,
            Err(err) => NetworkResponse::Error { message: err.to_string() },
        }
    }
}
