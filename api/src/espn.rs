/// ESPN scoreboard wire types — serde shapes for deserializing the site v2
/// scoreboard feed. These map to the clean DisplayRecord domain type via the
/// normalizer in client.rs.
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    pub events: Option<Vec<EspnEvent>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEvent {
    pub id: Option<String>,
    pub name: Option<String>,
    pub date: Option<String>, // ISO 8601
    pub competitions: Option<Vec<EspnCompetition>>,
}

/// The first competition of an event carries everything the board needs:
/// competitors, status, odds, and the live situation.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetition {
    pub id: Option<String>,
    pub competitors: Option<Vec<EspnCompetitor>>,
    pub status: Option<EspnStatus>,
    pub odds: Option<Vec<EspnOdds>>,
    pub situation: Option<EspnSituation>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStatus {
    #[serde(rename = "type")]
    pub status_type: Option<EspnStatusType>,
    pub period: Option<u8>,
    #[serde(rename = "displayClock")]
    pub display_clock: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStatusType {
    pub name: Option<String>, // "STATUS_SCHEDULED", "STATUS_IN_PROGRESS", "STATUS_FINAL"
    #[serde(rename = "shortDetail")]
    pub short_detail: Option<String>, // "Tue, 7:05 PM EST" / "Top 4th" / "Final"
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetitor {
    pub id: Option<String>,
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>, // "home" | "away"
    pub team: Option<EspnTeam>,
    pub score: Option<String>, // ESPN sends scores as strings
    pub winner: Option<bool>,
    /// Baseball only: runs live in `score`, hits and errors ride alongside.
    pub hits: Option<u32>,
    pub errors: Option<u32>,
    pub linescores: Option<Vec<EspnLinescore>>,
    pub leaders: Option<Vec<EspnLeaderCategory>>,
    /// Probable starting pitcher, present on scheduled baseball games.
    #[serde(rename = "summaryAthletes")]
    pub summary_athletes: Option<Vec<EspnSummaryAthlete>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeam {
    pub id: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub abbreviation: Option<String>,
    /// Hex strings without a leading '#'.
    pub color: Option<String>,
    #[serde(rename = "alternateColor")]
    pub alternate_color: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnLinescore {
    pub value: Option<f64>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnLeaderCategory {
    pub name: Option<String>, // "points" | "assists" | "rebounds"
    pub leaders: Option<Vec<EspnLeaderEntry>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnLeaderEntry {
    pub value: Option<f64>,
    pub athlete: Option<EspnAthlete>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnAthlete {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "shortName")]
    pub short_name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnSummaryAthlete {
    pub athlete: Option<EspnAthlete>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnOdds {
    pub details: Option<String>, // "NYY -120"
    #[serde(rename = "overUnder")]
    pub over_under: Option<f64>,
    #[serde(rename = "awayTeamOdds")]
    pub away_team_odds: Option<EspnTeamOdds>,
    #[serde(rename = "homeTeamOdds")]
    pub home_team_odds: Option<EspnTeamOdds>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeamOdds {
    #[serde(rename = "moneyLine")]
    pub money_line: Option<i64>,
}

/// Present only while a baseball game is in progress.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnSituation {
    pub balls: Option<u8>,
    pub strikes: Option<u8>,
    #[serde(rename = "outsText")]
    pub outs_text: Option<String>,
    #[serde(rename = "baseRunnersText")]
    pub base_runners_text: Option<String>,
}
