use log::warn;
use scoreboard_api::client::League;
use std::path::PathBuf;
use std::time::Duration;

/// Which upstream feed drives the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    Espn,
    Tank01,
}

/// All runtime configuration, read once at startup from HYPEBOARD_* env
/// vars. There is no other configuration surface.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub team: String,
    pub league: League,
    pub feed: Feed,
    pub interval: Duration,
    pub output_dir: PathBuf,
    pub rapidapi_key: Option<String>,
    /// Exit after 1:30 AM local time so an unattended kiosk stops polling.
    pub cutoff_enabled: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            team: "NYY".to_owned(),
            league: League::Mlb,
            feed: Feed::Espn,
            interval: Duration::from_secs(60),
            output_dir: PathBuf::from("output"),
            rapidapi_key: None,
            cutoff_enabled: true,
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        let defaults = Self::default();
        Self {
            team: env_var("HYPEBOARD_TEAM").unwrap_or(defaults.team),
            league: parse_league(env_var("HYPEBOARD_LEAGUE").as_deref()),
            feed: parse_feed(env_var("HYPEBOARD_FEED").as_deref()),
            interval: parse_interval(env_var("HYPEBOARD_INTERVAL_SECS").as_deref()),
            output_dir: env_var("HYPEBOARD_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            rapidapi_key: env_var("RAPIDAPI_KEY"),
            cutoff_enabled: parse_flag(env_var("HYPEBOARD_CUTOFF").as_deref(), true),
        }
    }

    /// Raw response body, overwritten on every successful fetch.
    pub fn raw_json_path(&self) -> PathBuf {
        self.output_dir.join("scoreboard_data.json")
    }

    /// Plain-text board snapshot, overwritten each render pass.
    pub fn snapshot_path(&self) -> PathBuf {
        self.output_dir.join("scoreboard.txt")
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_league(raw: Option<&str>) -> League {
    match raw {
        None => League::Mlb,
        Some(value) => value.parse().unwrap_or_else(|e: String| {
            warn!("{e}; defaulting to mlb");
            League::Mlb
        }),
    }
}

fn parse_feed(raw: Option<&str>) -> Feed {
    match raw.map(str::to_ascii_lowercase).as_deref() {
        None | Some("espn") => Feed::Espn,
        Some("tank01") | Some("rapidapi") => Feed::Tank01,
        Some(other) => {
            warn!("unknown feed '{other}' (expected espn or tank01); defaulting to espn");
            Feed::Espn
        }
    }
}

fn parse_interval(raw: Option<&str>) -> Duration {
    let secs = raw.and_then(|v| v.parse::<u64>().ok()).unwrap_or(60);
    Duration::from_secs(secs.max(1))
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw.map(str::to_ascii_lowercase).as_deref() {
        Some("0") | Some("false") | Some("off") | Some("no") => false,
        Some("1") | Some("true") | Some("on") | Some("yes") => true,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn league_defaults_to_mlb_on_garbage() {
        assert_eq!(parse_league(None), League::Mlb);
        assert_eq!(parse_league(Some("curling")), League::Mlb);
        assert_eq!(parse_league(Some("NBA")), League::Nba);
    }

    #[test]
    fn feed_accepts_rapidapi_alias() {
        assert_eq!(parse_feed(Some("tank01")), Feed::Tank01);
        assert_eq!(parse_feed(Some("rapidapi")), Feed::Tank01);
        assert_eq!(parse_feed(Some("espn")), Feed::Espn);
        assert_eq!(parse_feed(Some("???")), Feed::Espn);
    }

    #[test]
    fn interval_floors_at_one_second() {
        assert_eq!(parse_interval(Some("0")), Duration::from_secs(1));
        assert_eq!(parse_interval(Some("15")), Duration::from_secs(15));
        assert_eq!(parse_interval(Some("soon")), Duration::from_secs(60));
    }

    #[test]
    fn cutoff_flag_parses_common_spellings() {
        assert!(parse_flag(None, true));
        assert!(!parse_flag(Some("0"), true));
        assert!(!parse_flag(Some("off"), true));
        assert!(parse_flag(Some("yes"), false));
    }
}
