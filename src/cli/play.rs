//! Play command implementation - interactive terminal session.
//!
//! Two players share the keyboard. The view consumes the engine strictly
//! through its read accessors and mutating commands, refreshing whenever the
//! drained events say something changed.

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use kropki::{GameEngine, GameEvent, PlayerId, Stage};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::collections::HashMap;
use std::io::stdout;
use std::time::Duration;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the grid setup is invalid or the TUI fails.
pub(crate) fn execute(rows: i32, columns: i32, turns: i32) -> Result<(), CliError> {
    let mut engine = GameEngine::new();
    if !engine.new_game(rows, columns, turns) {
        return Err(CliError::new(format!(
            "Invalid grid setup: {rows}x{columns} with {turns} rounds"
        )));
    }

    run_tui(engine)
}

/// A drawn or pending segment between two intersections.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Segment {
    /// Finalized line owned by a player.
    Solid(PlayerId),
    /// Segment of a pending chain.
    Pending,
}

/// App state for the TUI.
struct App {
    engine: GameEngine,
    cursor: (i32, i32),
    /// First endpoint selected for a connection.
    pending_from: Option<(i32, i32)>,
    status: String,
}

impl App {
    fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            cursor: (0, 0),
            pending_from: None,
            status: String::from("Place a dot"),
        }
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let x = (self.cursor.0 + dx).clamp(0, self.engine.columns());
        let y = (self.cursor.1 + dy).clamp(0, self.engine.rows());
        self.cursor = (x, y);
    }

    /// Apply the action key at the cursor for the current stage.
    fn act(&mut self) {
        let (x, y) = self.cursor;

        match self.engine.stage() {
            Stage::PlaceDot => {
                if self.engine.place_dot(x, y) {
                    self.status = String::from("Dot placed - connect or end turn");
                } else {
                    self.status = String::from("Cannot place there");
                }
            }
            Stage::ConnectDots => match self.pending_from.take() {
                None => {
                    if self
                        .engine
                        .dot_at(x, y)
                        .is_some_and(|d| d.player == self.engine.current_player() && d.active)
                    {
                        self.pending_from = Some((x, y));
                        self.status = String::from("Select a neighboring dot");
                    } else {
                        self.status = String::from("Select one of your dots");
                    }
                }
                Some((fx, fy)) => {
                    if self.engine.connect_dots(fx, fy, x, y) {
                        self.status = String::from("Connected");
                    } else {
                        self.status = String::from("Cannot connect those dots");
                    }
                }
            },
            Stage::End => {
                self.status = String::from("Game over");
            }
        }

        self.digest_events();
    }

    fn end_turn(&mut self) {
        self.pending_from = None;
        self.engine.end_turn();
        self.digest_events();
    }

    /// Fold drained notifications into the status line.
    fn digest_events(&mut self) {
        for event in self.engine.take_events() {
            match event {
                GameEvent::PlayerScoresChanged => {
                    self.status = String::from("Capture! Score updated");
                }
                GameEvent::TurnEnded => {
                    self.status = String::from("Turn ended");
                }
                GameEvent::StageChanged if self.engine.stage() == Stage::End => {
                    self.status = String::from("Game over - press q to quit");
                }
                _ => {}
            }
        }
    }
}

fn run_tui(engine: GameEngine) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let mut app = App::new(engine);
    app.digest_events();

    loop {
        terminal
            .draw(|f| ui(f, &app))
            .map_err(|e| CliError::new(e.to_string()))?;

        if event::poll(Duration::from_millis(100)).map_err(|e| CliError::new(e.to_string()))? {
            if let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') => break,
                        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(0, -1),
                        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(0, 1),
                        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1, 0),
                        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1, 0),
                        KeyCode::Char(' ') | KeyCode::Enter => app.act(),
                        KeyCode::Esc => app.pending_from = None,
                        KeyCode::Char('e') => app.end_turn(),
                        _ => {}
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board + scores
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);

    render_board(f, main_chunks[0], app);
    render_scores(f, main_chunks[1], app);

    render_footer(f, chunks[2], app);
}

const PLAYER_COLORS: [Color; kropki::MAX_PLAYERS] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Magenta,
    Color::Cyan,
    Color::Yellow,
    Color::LightRed,
    Color::LightBlue,
];

fn player_color(player: PlayerId) -> Color {
    PLAYER_COLORS[player % PLAYER_COLORS.len()]
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let engine = &app.engine;
    let stage = match engine.stage() {
        Stage::PlaceDot => "place a dot",
        Stage::ConnectDots => "connect dots",
        Stage::End => "game over",
    };
    let name = &engine.player_names()[engine.current_player()];

    let title = format!(
        " Kropki | {} - {} | Rounds left: {} ",
        name,
        stage,
        engine.turns_left()
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(player_color(engine.current_player()))
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

/// Collect every drawn and pending segment, keyed by normalized endpoints.
fn collect_segments(engine: &GameEngine) -> HashMap<((i32, i32), (i32, i32)), Segment> {
    let normalize = |a: (i32, i32), b: (i32, i32)| if a <= b { (a, b) } else { (b, a) };
    let mut segments = HashMap::new();

    for player in 0..engine.num_players() {
        for (a, b) in engine.lines(player) {
            segments.insert(normalize((a.x, a.y), (b.x, b.y)), Segment::Solid(player));
        }
    }

    for chain in engine.chains() {
        for pair in chain.windows(2) {
            segments.insert(
                normalize((pair[0].x, pair[0].y), (pair[1].x, pair[1].y)),
                Segment::Pending,
            );
        }
    }

    segments
}

fn segment_style(segment: Segment) -> Style {
    match segment {
        Segment::Solid(player) => Style::default().fg(player_color(player)),
        Segment::Pending => Style::default().fg(Color::Yellow),
    }
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let engine = &app.engine;
    let segments = collect_segments(engine);
    let segment_at = |a: (i32, i32), b: (i32, i32)| {
        let key = if a <= b { (a, b) } else { (b, a) };
        segments.get(&key).copied()
    };

    let mut lines: Vec<Line> = Vec::new();

    for y in 0..=engine.rows() {
        // Intersection row: dots and horizontal segments.
        let mut spans = Vec::new();
        for x in 0..=engine.columns() {
            spans.push(intersection_span(app, x, y));

            if x < engine.columns() {
                let span = match segment_at((x, y), (x + 1, y)) {
                    Some(seg) => Span::styled("───", segment_style(seg)),
                    None => Span::raw("   "),
                };
                spans.push(span);
            }
        }
        lines.push(Line::from(spans));

        // Connector row: vertical and diagonal segments.
        if y < engine.rows() {
            let mut spans = Vec::new();
            for x in 0..=engine.columns() {
                let span = match segment_at((x, y), (x, y + 1)) {
                    Some(seg) => Span::styled("│", segment_style(seg)),
                    None => Span::raw(" "),
                };
                spans.push(span);

                if x < engine.columns() {
                    let down = segment_at((x, y), (x + 1, y + 1));
                    let up = segment_at((x + 1, y), (x, y + 1));
                    let span = match (down, up) {
                        (Some(seg), Some(_)) => Span::styled(" ╳ ", segment_style(seg)),
                        (Some(seg), None) => Span::styled(" ╲ ", segment_style(seg)),
                        (None, Some(seg)) => Span::styled(" ╱ ", segment_style(seg)),
                        (None, None) => Span::raw("   "),
                    };
                    spans.push(span);
                }
            }
            lines.push(Line::from(spans));
        }
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Board (dots on intersections) "),
    );
    f.render_widget(board, area);
}

fn intersection_span(app: &App, x: i32, y: i32) -> Span<'static> {
    let engine = &app.engine;

    let mut style;
    let glyph = match engine.dot_at(x, y) {
        Some(dot) => {
            style = Style::default().fg(player_color(dot.player));
            if dot.active {
                "●"
            } else {
                style = style.add_modifier(Modifier::DIM);
                "○"
            }
        }
        None if !engine.can_place_dot(x, y) => {
            // Consumed by a capture sweep.
            style = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
            "×"
        }
        None => {
            style = Style::default().fg(Color::DarkGray);
            "·"
        }
    };

    if app.pending_from == Some((x, y)) {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    if app.cursor == (x, y) {
        style = style.bg(Color::White).fg(Color::Black);
    }

    Span::styled(glyph, style)
}

fn render_scores(f: &mut Frame, area: Rect, app: &App) {
    let engine = &app.engine;
    let mut lines: Vec<Line> = Vec::new();

    for (player, name) in engine.player_names().iter().enumerate() {
        let marker = if player == engine.current_player() && engine.stage() != Stage::End {
            "> "
        } else {
            "  "
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}: {}", marker, name, engine.player_scores()[player]),
            Style::default().fg(player_color(player)),
        )));
    }

    lines.push(Line::raw(""));
    lines.push(Line::raw(format!("Chains: {}", engine.chains().len())));
    let total_lines: usize = (0..engine.num_players())
        .map(|p| engine.lines(p).len())
        .sum();
    lines.push(Line::raw(format!("Lines: {total_lines}")));

    let scores = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Score "));
    f.render_widget(scores, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let help = format!(
        " {} | arrows/hjkl move · space act · e end turn · esc cancel · q quit ",
        app.status
    );
    let footer = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
