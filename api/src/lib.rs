pub mod client;
pub mod espn;
pub mod tank01;

// ---------------------------------------------------------------------------
// Domain types — the flat, defaulted record the renderer consumes,
// independent of either feed's wire format
// ---------------------------------------------------------------------------

/// Substituted when a competitor side is missing from the payload.
pub const MISSING_TEAM: &str = "N/A";
/// Primary color fallback when the feed omits `color`.
pub const FALLBACK_COLOR: &str = "#FFFFFF";
/// Alternate color fallback when the feed omits `alternateColor`.
pub const FALLBACK_ALT_COLOR: &str = "#000000";
/// The board never shows more than nine periods/innings.
pub const MAX_PERIODS: usize = 9;

/// Display mode derived from the feed's status-name string. Drives which
/// fields of the record are populated and which table the renderer draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusMode {
    #[default]
    Scheduled,
    Live,
    Final,
    /// Unrecognized status strings. Rendered as a live-minimal display
    /// (abbreviations and scores only) rather than failing.
    Unknown,
}

impl StatusMode {
    pub fn label(&self) -> &'static str {
        match self {
            StatusMode::Scheduled => "Scheduled",
            StatusMode::Live => "Live",
            StatusMode::Final => "Final",
            StatusMode::Unknown => "Unknown",
        }
    }

    /// Per-period line scores are only meaningful once play has started.
    pub fn shows_linescore(&self) -> bool {
        matches!(self, StatusMode::Live | StatusMode::Final)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Away,
    Home,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Away => "away",
            Side::Home => "home",
        }
    }
}

/// Stat leaders shown for live basketball games, each formatted "Name (val)".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamLeaders {
    pub points: String,
    pub assists: String,
    pub rebounds: String,
}

/// Live baseball situation line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Situation {
    pub balls: u8,
    pub strikes: u8,
    pub outs_text: String,
    pub base_runners: String,
}

impl Situation {
    pub fn summary(&self) -> String {
        format!(
            "Bases: {}   |   {}   |   {}-{} Count",
            self.base_runners, self.outs_text, self.balls, self.strikes
        )
    }
}

/// One side of the board, fully defaulted — every optional-field fallback in
/// the pipeline lives in the normalizer, never in render code.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamLine {
    pub abbrev: String,
    pub id: Option<String>,
    /// "#RRGGBB", always prefixed.
    pub color: String,
    pub alt_color: String,
    /// Kept as the feed's string form; empty when absent.
    pub score: String,
    pub hits: Option<u32>,
    pub errors: Option<u32>,
    /// Ordered by period, 1-indexed; `None` marks a period the feed carried
    /// no value for (rendered blank, never a placeholder zero).
    pub linescores: Vec<Option<u32>>,
    /// Signed moneyline string ("+150", "-120"); scheduled games only.
    pub moneyline: Option<String>,
    /// Probable starting pitcher; scheduled baseball games only.
    pub starter: Option<String>,
    /// Live basketball games only.
    pub leaders: Option<TeamLeaders>,
}

impl Default for TeamLine {
    fn default() -> Self {
        Self::missing()
    }
}

impl TeamLine {
    /// The documented stand-in for an absent competitor side.
    pub fn missing() -> Self {
        Self {
            abbrev: MISSING_TEAM.to_owned(),
            id: None,
            color: FALLBACK_COLOR.to_owned(),
            alt_color: FALLBACK_ALT_COLOR.to_owned(),
            score: String::new(),
            hits: None,
            errors: None,
            linescores: Vec::new(),
            moneyline: None,
            starter: None,
            leaders: None,
        }
    }

    pub fn score_num(&self) -> Option<i64> {
        self.score.parse().ok()
    }
}

/// The normalized board state for one poll cycle. Built fresh from each
/// payload and fully overwritten by the next; nothing here persists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayRecord {
    pub away: TeamLine,
    pub home: TeamLine,
    pub mode: StatusMode,
    /// Human-readable status string straight from the feed.
    pub detail: String,
    /// Trimmed start-time string; scheduled games only.
    pub start_time: Option<String>,
    /// Live baseball only.
    pub situation: Option<Situation>,
    /// Final games only; `None` for ties and unstarted games.
    pub winner: Option<Side>,
}

impl DisplayRecord {
    pub fn is_live(&self) -> bool {
        self.mode == StatusMode::Live
    }

    pub fn team(&self, side: Side) -> &TeamLine {
        match side {
            Side::Away => &self.away,
            Side::Home => &self.home,
        }
    }

    pub fn winner_abbrev(&self) -> Option<&str> {
        self.winner.map(|side| self.team(side).abbrev.as_str())
    }
}
