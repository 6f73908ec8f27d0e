//! TUI rendering with ratatui
//!
//! Visualizations for the word-rank game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::game::Rank;
use crate::output::formatters::{Temperature, closeness, closeness_bar};
use crate::vectors::VectorGenerator;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<G: VectorGenerator>(f: &mut Frame, app: &App<G>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 SEMANTIC WORD RANK")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn rank_color(rank: Rank) -> Color {
    match Temperature::from_rank(rank) {
        Temperature::Found => Color::Green,
        Temperature::Burning => Color::LightRed,
        Temperature::Hot => Color::Red,
        Temperature::Warm => Color::Yellow,
        Temperature::Cold => Color::Blue,
        Temperature::Frozen => Color::DarkGray,
    }
}

fn render_main_panel<G: VectorGenerator>(f: &mut Frame, app: &App<G>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    render_last_guess(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_last_guess<G: VectorGenerator>(f: &mut Frame, app: &App<G>, area: Rect) {
    let block = Block::default()
        .title(" Last Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(ref guess) = app.last_guess else {
        f.render_widget(Paragraph::new("No guesses yet").block(block), area);
        return;
    };

    let total = app.ranked_words();
    let content = vec![
        Line::from(vec![
            Span::raw(format!("{} ", Temperature::from_rank(guess.rank).emoji())),
            Span::styled(
                guess.word.text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  rank "),
            Span::styled(
                guess.rank.to_string(),
                Style::default()
                    .fg(rank_color(guess.rank))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("[{}]", closeness_bar(guess.rank, total, 30))),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_history<G: VectorGenerator>(f: &mut Frame, app: &App<G>, area: Rect) {
    let total = app.ranked_words();
    let rows = usize::from(area.height.saturating_sub(2));

    let items: Vec<ListItem> = app
        .history()
        .iter()
        .take(rows)
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>6} ", record.rank),
                    Style::default().fg(rank_color(record.rank)),
                ),
                Span::raw(format!("{:<18}", record.word.text())),
                Span::styled(
                    closeness_bar(record.rank, total, 12),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let title = format!(" Guesses ({}) ", app.history().len());
    let history = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(history, area);
}

fn render_info_panel<G: VectorGenerator>(f: &mut Frame, app: &App<G>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_best_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_best_progress<G: VectorGenerator>(f: &mut Frame, app: &App<G>, area: Rect) {
    let total = app.ranked_words();
    let best = app.best_rank().map_or(Rank::Unranked, Rank::At);
    let ratio = closeness(best, total);

    let label = match best {
        Rank::At(r) => format!("best rank {r} of {total}"),
        Rank::Unranked => format!("{total} ranked words"),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Closest So Far ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(rank_color(best)))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);

    f.render_widget(gauge, area);
}

fn render_messages<G: VectorGenerator>(f: &mut Frame, app: &App<G>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input<G: VectorGenerator>(f: &mut Frame, app: &App<G>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Your Guess | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status<G: VectorGenerator>(f: &mut Frame, app: &App<G>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {} | Hints: {}",
        app.stats.total_games, app.stats.games_won, app.stats.hints_used
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help = Paragraph::new("Esc: Quit | Tab: Hint | Ctrl-T: Tip | Ctrl-N: New Game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
