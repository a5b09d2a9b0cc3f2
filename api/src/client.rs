use crate::espn::{
    EspnCompetition, EspnCompetitor, EspnLeaderCategory, EspnLinescore, EspnOdds, EspnSituation,
    EspnSummaryAthlete, ScoreboardResponse,
};
use crate::tank01::{Tank01Game, Tank01Response, Tank01TeamLine};
use crate::{
    DisplayRecord, FALLBACK_ALT_COLOR, FALLBACK_COLOR, MAX_PERIODS, Side, Situation, StatusMode,
    TeamLeaders, TeamLine,
};
use log::{debug, warn};
use reqwest::Client;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const ESPN_SITE_V2: &str = "https://site.api.espn.com/apis/site/v2/sports";
const TANK01_BASE: &str = "https://tank01-mlb-live-in-game-real-time-statistics.p.rapidapi.com";
const TANK01_HOST: &str = "tank01-mlb-live-in-game-real-time-statistics.p.rapidapi.com";
// Plain library UAs get bot-blocked by the scoreboard edge; a browser UA does not.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum League {
    Nba,
    Mlb,
}

impl League {
    /// Sport/league path segment of the ESPN scoreboard URL.
    pub fn path(&self) -> &'static str {
        match self {
            League::Nba => "basketball/nba",
            League::Mlb => "baseball/mlb",
        }
    }
}

impl std::str::FromStr for League {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nba" => Ok(League::Nba),
            "mlb" => Ok(League::Mlb),
            other => Err(format!("unknown league '{other}' (expected nba or mlb)")),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(serde_json::Error, String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Scoreboard client over ESPN's public endpoints, with an optional Tank01
/// RapidAPI fallback feed for MLB line scores.
#[derive(Debug, Clone)]
pub struct ScoreboardApi {
    client: Client,
    timeout: Duration,
    espn_base: String,
    tank01_base: String,
    rapidapi_key: Option<String>,
    /// When set, every successful fetch overwrites this file with the raw
    /// response body. Debugging aid only; failures are logged, not fatal.
    raw_dump: Option<PathBuf>,
}

impl Default for ScoreboardApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_default(),
            timeout: Duration::from_secs(10),
            espn_base: ESPN_SITE_V2.to_owned(),
            tank01_base: TANK01_BASE.to_owned(),
            rapidapi_key: None,
            raw_dump: None,
        }
    }
}

impl ScoreboardApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw_dump(mut self, path: PathBuf) -> Self {
        self.raw_dump = Some(path);
        self
    }

    pub fn with_rapidapi_key(mut self, key: String) -> Self {
        self.rapidapi_key = Some(key);
        self
    }

    pub fn with_espn_base(mut self, base: String) -> Self {
        self.espn_base = base;
        self
    }

    pub fn with_tank01_base(mut self, base: String) -> Self {
        self.tank01_base = base;
        self
    }

    /// Fetch the league scoreboard and extract the configured team's game.
    ///
    /// `Ok(None)` means the team has no game in the payload — a normal,
    /// expected outcome, not an error.
    pub async fn fetch_team_game(
        &self,
        league: League,
        team_code: &str,
    ) -> ApiResult<Option<DisplayRecord>> {
        let url = format!("{}/{}/scoreboard", self.espn_base, league.path());
        let Some(body) = self.get_raw(self.client.get(&url), &url).await? else {
            return Ok(None);
        };
        let payload: ScoreboardResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Parsing(e, url.clone()))?;

        let Some(competition) = locate_competition(&payload, team_code) else {
            debug!("no game for {team_code} in {url}");
            return Ok(None);
        };

        let status_type = competition
            .status
            .as_ref()
            .and_then(|s| s.status_type.as_ref());
        let mode = status_type
            .and_then(|t| t.name.as_deref())
            .map(classify)
            .unwrap_or(StatusMode::Unknown);
        let detail = status_type
            .and_then(|t| t.short_detail.as_deref())
            .unwrap_or("TBD");

        Ok(Some(normalize_competition(competition, mode, detail)))
    }

    /// Fetch the Tank01 RapidAPI MLB line scores for `game_date` (YYYYMMDD)
    /// and extract the configured team's game.
    pub async fn fetch_tank01_game(
        &self,
        game_date: &str,
        team_code: &str,
    ) -> ApiResult<Option<DisplayRecord>> {
        let key = self
            .rapidapi_key
            .as_deref()
            .ok_or_else(|| ApiError::Other("RapidAPI key not configured".to_owned()))?;
        let url = format!(
            "{}/getMLBScoresOnly?gameDate={game_date}&topPerformers=false",
            self.tank01_base
        );
        let request = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", key)
            .header("X-RapidAPI-Host", TANK01_HOST);
        let Some(body) = self.get_raw(request, &url).await? else {
            return Ok(None);
        };
        let payload: Tank01Response =
            serde_json::from_str(&body).map_err(|e| ApiError::Parsing(e, url.clone()))?;

        Ok(locate_tank01_game(&payload, team_code).map(normalize_tank01_game))
    }

    /// GET with the standard timeout, dump the raw body on success.
    /// 4xx degrades to `None` (treated upstream as "no game today").
    async fn get_raw(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> ApiResult<Option<String>> {
        let response = request
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => {
                let body = res
                    .text()
                    .await
                    .map_err(|e| ApiError::Network(e, url.to_owned()))?;
                self.dump_raw(&body);
                Ok(Some(body))
            }
            Err(e) => {
                if e.status().map(|s| s.is_client_error()).unwrap_or(false) {
                    warn!("client error from {url}: {e}");
                    Ok(None)
                } else {
                    Err(ApiError::Api(e, url.to_owned()))
                }
            }
        }
    }

    fn dump_raw(&self, body: &str) {
        let Some(path) = &self.raw_dump else { return };
        if let Err(e) = std::fs::write(path, body) {
            warn!("could not save raw scoreboard to {}: {e}", path.display());
        } else {
            debug!("saved raw scoreboard to {}", path.display());
        }
    }
}

// ---------------------------------------------------------------------------
// Game Locator
// ---------------------------------------------------------------------------

/// Scan events in API order and return the first competition whose
/// competitors include `team_code`. Only the first competition of each event
/// is inspected; events with no competitions are skipped.
pub fn locate_competition<'a>(
    payload: &'a ScoreboardResponse,
    team_code: &str,
) -> Option<&'a EspnCompetition> {
    payload
        .events
        .as_deref()
        .unwrap_or_default()
        .iter()
        .find_map(|event| {
            let competition = event.competitions.as_deref().unwrap_or_default().first()?;
            let matches = competition
                .competitors
                .as_deref()
                .unwrap_or_default()
                .iter()
                .any(|c| {
                    c.team.as_ref().and_then(|t| t.abbreviation.as_deref()) == Some(team_code)
                });
            matches.then_some(competition)
        })
}

/// Tank01 counterpart: the payload is a map of games keyed by id, with bare
/// home/away abbreviations at the top level.
pub fn locate_tank01_game<'a>(
    payload: &'a Tank01Response,
    team_code: &str,
) -> Option<&'a Tank01Game> {
    payload.body.values().find(|g| {
        g.home.as_deref() == Some(team_code) || g.away.as_deref() == Some(team_code)
    })
}

// ---------------------------------------------------------------------------
// Status Classifier
// ---------------------------------------------------------------------------

/// Anything outside the three canonical names (including the misspelled
/// variants some feeds emit) maps to Unknown, never an error.
pub fn classify(status_name: &str) -> StatusMode {
    match status_name {
        "STATUS_SCHEDULED" => StatusMode::Scheduled,
        "STATUS_IN_PROGRESS" => StatusMode::Live,
        "STATUS_FINAL" => StatusMode::Final,
        _ => StatusMode::Unknown,
    }
}

// ---------------------------------------------------------------------------
// Field Normalizer
// ---------------------------------------------------------------------------

/// Flatten a located competition into the display record for this cycle.
/// Every optional-field default lives here.
pub fn normalize_competition(
    competition: &EspnCompetition,
    mode: StatusMode,
    detail: &str,
) -> DisplayRecord {
    let competitors = competition.competitors.as_deref().unwrap_or_default();
    let away = competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some("away"));
    let home = competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some("home"));

    let mut away_line = away.map(|c| map_competitor(c, mode)).unwrap_or_default();
    let mut home_line = home.map(|c| map_competitor(c, mode)).unwrap_or_default();

    let mut start_time = None;
    if mode == StatusMode::Scheduled {
        let (away_odds, home_odds) = extract_moneylines(
            competition.odds.as_deref(),
            &away_line.abbrev,
            &home_line.abbrev,
        );
        away_line.moneyline = away_odds;
        home_line.moneyline = home_odds;
        start_time = Some(trim_start_detail(detail));
    }

    let winner = if mode == StatusMode::Final {
        winner_of(&away_line, &home_line)
    } else {
        None
    };

    let situation = if mode == StatusMode::Live {
        competition.situation.as_ref().map(map_situation)
    } else {
        None
    };

    DisplayRecord {
        away: away_line,
        home: home_line,
        mode,
        detail: detail.to_owned(),
        start_time,
        situation,
        winner,
    }
}

fn map_competitor(c: &EspnCompetitor, mode: StatusMode) -> TeamLine {
    let team = c.team.as_ref();
    TeamLine {
        abbrev: team
            .and_then(|t| t.abbreviation.clone())
            .unwrap_or_else(|| crate::MISSING_TEAM.to_owned()),
        id: c.id.clone(),
        color: hex_color(team.and_then(|t| t.color.as_deref()), FALLBACK_COLOR),
        alt_color: hex_color(
            team.and_then(|t| t.alternate_color.as_deref()),
            FALLBACK_ALT_COLOR,
        ),
        score: c.score.clone().unwrap_or_default(),
        hits: c.hits,
        errors: c.errors,
        linescores: if mode.shows_linescore() {
            map_linescores(c.linescores.as_deref().unwrap_or_default())
        } else {
            Vec::new()
        },
        moneyline: None,
        starter: if mode == StatusMode::Scheduled {
            map_starter(c.summary_athletes.as_deref().unwrap_or_default())
        } else {
            None
        },
        leaders: if mode == StatusMode::Live {
            c.leaders.as_deref().map(map_leaders)
        } else {
            None
        },
    }
}

/// Probable starting pitcher: the first summary athlete's short name.
fn map_starter(athletes: &[EspnSummaryAthlete]) -> Option<String> {
    athletes
        .first()
        .and_then(|s| s.athlete.as_ref())
        .and_then(|a| a.short_name.clone().or_else(|| a.display_name.clone()))
}

/// The feed sends colors as bare hex; the record always carries the '#'.
fn hex_color(raw: Option<&str>, fallback: &str) -> String {
    match raw {
        Some(hex) if !hex.is_empty() => format!("#{hex}"),
        _ => fallback.to_owned(),
    }
}

/// Periods beyond the ninth are dropped; a period with no value stays None
/// so the renderer leaves the cell blank.
fn map_linescores(scores: &[EspnLinescore]) -> Vec<Option<u32>> {
    scores
        .iter()
        .take(MAX_PERIODS)
        .map(|ls| ls.value.map(|v| v.max(0.0) as u32))
        .collect()
}

fn map_leaders(categories: &[EspnLeaderCategory]) -> TeamLeaders {
    TeamLeaders {
        points: leader_info(categories, "points"),
        assists: leader_info(categories, "assists"),
        rebounds: leader_info(categories, "rebounds"),
    }
}

fn leader_info(categories: &[EspnLeaderCategory], stat: &str) -> String {
    let entry = categories
        .iter()
        .find(|cat| cat.name.as_deref() == Some(stat))
        .and_then(|cat| cat.leaders.as_deref().unwrap_or_default().first());
    let Some(entry) = entry else {
        return "N/A".to_owned();
    };
    let name = entry
        .athlete
        .as_ref()
        .and_then(|a| a.display_name.as_deref())
        .unwrap_or("N/A");
    let value = entry.value.unwrap_or(0.0);
    if value.fract() == 0.0 {
        format!("{name} ({})", value as i64)
    } else {
        format!("{name} ({value})")
    }
}

fn map_situation(sit: &EspnSituation) -> Situation {
    Situation {
        balls: sit.balls.unwrap_or(0),
        strikes: sit.strikes.unwrap_or(0),
        outs_text: sit.outs_text.clone().unwrap_or_default(),
        base_runners: sit
            .base_runners_text
            .clone()
            .unwrap_or_else(|| "Bases Empty".to_owned()),
    }
}

/// Per-side moneylines from the first odds entry. Prefers the structured
/// moneyLine numbers; falls back to splitting the "ABBR -120" details string
/// and assigning the value to whichever side the abbreviation names.
fn extract_moneylines(
    odds: Option<&[EspnOdds]>,
    away_abbrev: &str,
    home_abbrev: &str,
) -> (Option<String>, Option<String>) {
    let Some(odds) = odds.and_then(|o| o.first()) else {
        return (None, None);
    };

    let mut away = odds
        .away_team_odds
        .as_ref()
        .and_then(|o| o.money_line)
        .map(format_moneyline);
    let mut home = odds
        .home_team_odds
        .as_ref()
        .and_then(|o| o.money_line)
        .map(format_moneyline);

    if (away.is_none() || home.is_none())
        && let Some(details) = odds.details.as_deref()
    {
        let parts: Vec<&str> = details.split(' ').collect();
        if parts.len() == 2
            && let Some(value) = normalize_odds_token(parts[1])
        {
            if parts[0] == away_abbrev && away.is_none() {
                away = Some(value);
            } else if parts[0] == home_abbrev && home.is_none() {
                home = Some(value);
            }
        }
    }

    (away, home)
}

pub fn format_moneyline(line: i64) -> String {
    if line > 0 {
        format!("+{line}")
    } else {
        line.to_string()
    }
}

/// "EVEN" normalizes to +100; signed numbers are reformatted; anything else
/// is not a moneyline.
pub fn normalize_odds_token(token: &str) -> Option<String> {
    if token.eq_ignore_ascii_case("EVEN") {
        return Some("+100".to_owned());
    }
    token.parse::<i64>().ok().map(format_moneyline)
}

/// Strip the leading date phrase from a verbose detail string, e.g.
/// "Tue, 7:05 PM EST" -> "7:05 PM". The exact split/join sequence matters:
/// split on " - " (else ","), take the second segment, drop the trailing
/// timezone token. No separator means the detail passes through untouched.
pub fn trim_start_detail(detail: &str) -> String {
    let time_part = if let Some((_, rest)) = detail.split_once(" - ") {
        rest.trim()
    } else if let Some((_, rest)) = detail.split_once(',') {
        rest.trim()
    } else {
        ""
    };

    if time_part.is_empty() {
        return detail.to_owned();
    }
    let tokens: Vec<&str> = time_part.split(' ').collect();
    tokens[..tokens.len() - 1].join(" ")
}

/// Integer score comparison; a tie has no winner.
pub fn winner_of(away: &TeamLine, home: &TeamLine) -> Option<Side> {
    let away_score = away.score_num()?;
    let home_score = home.score_num()?;
    match away_score.cmp(&home_score) {
        std::cmp::Ordering::Greater => Some(Side::Away),
        std::cmp::Ordering::Less => Some(Side::Home),
        std::cmp::Ordering::Equal => None,
    }
}

// ---------------------------------------------------------------------------
// Mapping: Tank01 wire types → DisplayRecord
// ---------------------------------------------------------------------------

/// Tank01 has no scheduled shape worth rendering — currentInning is "Final"
/// for finished games and an inning phrase otherwise, so everything that is
/// not Final draws as Live.
pub fn normalize_tank01_game(game: &Tank01Game) -> DisplayRecord {
    let inning = game.current_inning.as_deref().unwrap_or_default();
    let mode = if inning == "Final" {
        StatusMode::Final
    } else {
        StatusMode::Live
    };

    let line_score = game.line_score.as_ref();
    let away = map_tank01_side(game.away.as_deref(), line_score.and_then(|l| l.away.as_ref()));
    let home = map_tank01_side(game.home.as_deref(), line_score.and_then(|l| l.home.as_ref()));

    let winner = if mode == StatusMode::Final {
        winner_of(&away, &home)
    } else {
        None
    };

    let situation = (mode == StatusMode::Live).then(|| {
        let (balls, strikes) = game
            .current_count
            .as_deref()
            .and_then(|c| c.split_once('-'))
            .map(|(b, s)| {
                (
                    b.trim().parse().unwrap_or(0),
                    s.trim().parse().unwrap_or(0),
                )
            })
            .unwrap_or((0, 0));
        Situation {
            balls,
            strikes,
            outs_text: match game.current_outs.as_deref() {
                Some(outs) if !outs.is_empty() => format!("{outs} Outs"),
                _ => String::new(),
            },
            base_runners: "Bases Empty".to_owned(), // feed carries no runner data
        }
    });

    DisplayRecord {
        away,
        home,
        mode,
        detail: inning.to_owned(),
        start_time: None,
        situation,
        winner,
    }
}

fn map_tank01_side(abbrev: Option<&str>, line: Option<&Tank01TeamLine>) -> TeamLine {
    let mut team = TeamLine::missing();
    if let Some(abbrev) = abbrev {
        team.abbrev = abbrev.to_owned();
    }
    let Some(line) = line else { return team };

    team.score = line.runs.clone().unwrap_or_default();
    team.hits = line.hits.as_deref().and_then(|h| h.parse().ok());
    team.errors = line.errors.as_deref().and_then(|e| e.parse().ok());
    team.linescores = (1..=MAX_PERIODS)
        .map(|inning| {
            line.scores_by_inning
                .get(&inning.to_string())
                .and_then(|v| v.parse().ok())
        })
        .collect();
    team
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
