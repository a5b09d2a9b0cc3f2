/// Wire types for the Tank01 MLB line-score feed on RapidAPI.
/// Endpoint: https://tank01-mlb-live-in-game-real-time-statistics.p.rapidapi.com/getMLBScoresOnly
///
/// Unlike ESPN, games come back as a map keyed by game id, and every numeric
/// field is a string.
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Deserialize, Default, Debug)]
pub struct Tank01Response {
    #[serde(default)]
    pub body: BTreeMap<String, Tank01Game>,
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Tank01Game {
    pub home: Option<String>, // team abbreviation, e.g. "NYY"
    pub away: Option<String>,
    /// "Top 4th", "Bottom 9th", or "Final".
    pub current_inning: Option<String>,
    pub current_outs: Option<String>,
    /// Balls-strikes, e.g. "1-2".
    pub current_count: Option<String>,
    pub line_score: Option<Tank01LineScore>,
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct Tank01LineScore {
    pub home: Option<Tank01TeamLine>,
    pub away: Option<Tank01TeamLine>,
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct Tank01TeamLine {
    #[serde(rename = "R")]
    pub runs: Option<String>,
    #[serde(rename = "H")]
    pub hits: Option<String>,
    #[serde(rename = "E")]
    pub errors: Option<String>,
    /// Keyed by inning number as a string ("1".."9"); innings not yet played
    /// are simply absent.
    #[serde(rename = "scoresByInning", default)]
    pub scores_by_inning: BTreeMap<String, String>,
}
