use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::App;
use scoreboard_api::client::League;
use scoreboard_api::{DisplayRecord, StatusMode, TeamLine};

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    terminal
        .draw(|f| {
            render(f, f.area(), app);
        })
        .unwrap();
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn render(f: &mut Frame, area: Rect, app: &App) {
    let block =
        default_border(Color::White).title(format!(" {} SCOREBOARD ", app.settings.team));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [header, mut content, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_header(f, header, app);

    if app.state.show_logs {
        let [top, logs] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(8)]).areas(content);
        content = top;
        f.render_widget(
            TuiLoggerWidget::default().block(default_border(Color::DarkGray).title(" Logs ")),
            logs,
        );
    }

    if app.state.show_help {
        draw_help(f, content);
    } else {
        draw_board(f, content, app);
    }

    draw_footer(f, footer, app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    f.render_widget(
        Paragraph::new(format!("DISTRICT HYPE\n{} SCOREBOARD", app.settings.team))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        area,
    );
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let stamp = app
        .state
        .last_updated
        .map(|t| format!("Last Updated: {}", t.format("%H:%M:%S")))
        .unwrap_or_default();
    f.render_widget(
        Paragraph::new(stamp)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right),
        area,
    );
}

fn draw_help(f: &mut Frame, area: Rect) {
    f.render_widget(
        Paragraph::new("Keys: q=quit  r=refresh now  \"=logs  ?=close help")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        area,
    );
}

fn draw_board(f: &mut Frame, area: Rect, app: &App) {
    let Some(record) = app.state.board.as_ref() else {
        let second_line = match app.state.last_error.as_deref() {
            Some(err) => format!("({err})"),
            None if app.state.no_game => "And The Mets Still Suck".to_owned(),
            None => "Loading scoreboard...".to_owned(),
        };
        f.render_widget(
            Paragraph::new(format!(
                "No Game Today for {}\n{second_line}",
                app.settings.team
            ))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
            area,
        );
        return;
    };

    match record.mode {
        StatusMode::Scheduled => draw_scheduled(f, area, record),
        StatusMode::Live => draw_live(f, area, record, app.settings.league),
        StatusMode::Final => draw_final(f, area, record, app),
        StatusMode::Unknown => draw_unknown(f, area, record),
    }
}

// ---------------------------------------------------------------------------
// Pre-game: teams, odds, trimmed start time
// ---------------------------------------------------------------------------

fn draw_scheduled(f: &mut Frame, area: Rect, record: &DisplayRecord) {
    let start = record.start_time.clone().unwrap_or_default();
    let rows = vec![
        Row::new(vec![
            team_cell(&record.away),
            Cell::from(starter_text(&record.away)),
            Cell::from(start),
            Cell::from(moneyline_text(&record.away)),
        ]),
        Row::new(vec![
            team_cell(&record.home),
            Cell::from(starter_text(&record.home)),
            Cell::from(""),
            Cell::from(moneyline_text(&record.home)),
        ]),
    ];
    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(8),
        ],
    )
    .header(header_row(vec!["Team", "Starter", "Status", "Odds"]));
    f.render_widget(table, area);
}

fn moneyline_text(team: &TeamLine) -> String {
    team.moneyline.clone().unwrap_or_else(|| "N/A".to_owned())
}

/// Probable pitcher column; blank when the feed carries none (NBA, or an
/// unannounced starter).
fn starter_text(team: &TeamLine) -> String {
    team.starter.clone().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Live / final: line-score table plus status extras
// ---------------------------------------------------------------------------

fn draw_live(f: &mut Frame, area: Rect, record: &DisplayRecord, league: League) {
    let [linescore, detail, situation, leaders] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    draw_linescore(f, linescore, record, league);
    draw_detail(f, detail, record);

    if let Some(sit) = record.situation.as_ref() {
        f.render_widget(
            Paragraph::new(sit.summary())
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            situation,
        );
    }

    if record.away.leaders.is_some() || record.home.leaders.is_some() {
        draw_leaders(f, leaders, record);
    }
}

fn draw_final(f: &mut Frame, area: Rect, record: &DisplayRecord, app: &App) {
    let [linescore, detail, banner] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    draw_linescore(f, linescore, record, app.settings.league);
    draw_detail(f, detail, record);

    // The hype banner only fires for the configured team.
    if record.winner_abbrev() == Some(app.settings.team.as_str()) {
        f.render_widget(
            Paragraph::new(format!("{} WIN!", app.settings.team))
                .style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center),
            banner,
        );
    }
}

/// Fallback for unrecognized status strings: abbreviations and scores only.
fn draw_unknown(f: &mut Frame, area: Rect, record: &DisplayRecord) {
    let [table_area, detail] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);
    let rows = vec![
        Row::new(vec![team_cell(&record.away), Cell::from(record.away.score.clone())]),
        Row::new(vec![team_cell(&record.home), Cell::from(record.home.score.clone())]),
    ];
    f.render_widget(
        Table::new(rows, [Constraint::Length(8), Constraint::Length(6)]),
        table_area,
    );
    draw_detail(f, detail, record);
}

fn draw_detail(f: &mut Frame, area: Rect, record: &DisplayRecord) {
    f.render_widget(
        Paragraph::new(record.detail.clone())
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
        area,
    );
}

fn draw_linescore(f: &mut Frame, area: Rect, record: &DisplayRecord, league: League) {
    let periods = period_count(league);

    let mut header = vec![String::new()];
    header.extend((1..=periods).map(|p| p.to_string()));
    header.extend(total_labels(league).iter().map(|s| s.to_string()));

    let rows = vec![
        linescore_row(&record.away, periods, league),
        linescore_row(&record.home, periods, league),
    ];

    let mut widths = vec![Constraint::Length(6)];
    widths.extend(std::iter::repeat_n(Constraint::Length(3), periods));
    widths.extend(std::iter::repeat_n(
        Constraint::Length(4),
        total_labels(league).len(),
    ));

    let table = Table::new(rows, widths).header(header_row(header));
    f.render_widget(table, area);
}

fn linescore_row(team: &TeamLine, periods: usize, league: League) -> Row<'static> {
    let mut cells = vec![team_cell(team)];
    for idx in 0..periods {
        cells.push(Cell::from(period_text(team, idx)));
    }
    match league {
        League::Mlb => {
            cells.push(Cell::from(team.score.clone()));
            cells.push(Cell::from(count_text(team.hits)));
            cells.push(Cell::from(count_text(team.errors)));
        }
        League::Nba => cells.push(Cell::from(team.score.clone())),
    }
    Row::new(cells)
}

fn draw_leaders(f: &mut Frame, area: Rect, record: &DisplayRecord) {
    let leader_row = |team: &TeamLine| {
        let leaders = team.leaders.clone().unwrap_or_default();
        Row::new(vec![
            Cell::from(leaders.points),
            Cell::from(leaders.assists),
            Cell::from(leaders.rebounds),
        ])
        .style(
            Style::default()
                .bg(team_color(&team.color, Color::White))
                .fg(team_color(&team.alt_color, Color::Black)),
        )
    };
    let table = Table::new(
        vec![leader_row(&record.away), leader_row(&record.home)],
        [
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ],
    )
    .header(header_row(vec!["Points", "Assists", "Rebounds"]));
    f.render_widget(table, area);
}

// ---------------------------------------------------------------------------
// Cell helpers
// ---------------------------------------------------------------------------

fn header_row<'a, T: Into<tui::text::Text<'a>>>(labels: Vec<T>) -> Row<'a> {
    Row::new(labels.into_iter().map(Cell::from).collect::<Vec<_>>())
        .style(Style::default().fg(Color::DarkGray))
}

fn team_cell(team: &TeamLine) -> Cell<'static> {
    Cell::from(team.abbrev.clone()).style(
        Style::default()
            .bg(team_color(&team.color, Color::White))
            .fg(team_color(&team.alt_color, Color::Black))
            .add_modifier(Modifier::BOLD),
    )
}

fn period_count(league: League) -> usize {
    match league {
        League::Mlb => 9,
        League::Nba => 4,
    }
}

fn total_labels(league: League) -> &'static [&'static str] {
    match league {
        League::Mlb => &["R", "H", "E"],
        League::Nba => &["TOT"],
    }
}

/// Blank for periods the feed carried no value for.
fn period_text(team: &TeamLine, idx: usize) -> String {
    team.linescores
        .get(idx)
        .copied()
        .flatten()
        .map(|v| v.to_string())
        .unwrap_or_default()
}

fn count_text(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// "#RRGGBB" into an RGB terminal color; anything else gets the fallback.
fn team_color(hex: &str, fallback: Color) -> Color {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return fallback;
    }
    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse_to_rgb() {
        assert_eq!(team_color("#006BB6", Color::White), Color::Rgb(0, 107, 182));
        assert_eq!(team_color("FFFFFF", Color::Black), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn bad_hex_falls_back() {
        assert_eq!(team_color("#12", Color::White), Color::White);
        assert_eq!(team_color("#GGGGGG", Color::Black), Color::Black);
    }

    #[test]
    fn unplayed_periods_render_blank() {
        let team = TeamLine {
            linescores: vec![Some(2), None, Some(0)],
            ..TeamLine::missing()
        };
        assert_eq!(period_text(&team, 0), "2");
        assert_eq!(period_text(&team, 1), "");
        assert_eq!(period_text(&team, 2), "0");
        assert_eq!(period_text(&team, 8), "");
    }
}
