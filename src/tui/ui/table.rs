use crate::cards::Card;
use crate::scoring::Category;
use crate::stats::{ScoredShow, Stats};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let header_lines_count: u16 = 2;
    let header_height = header_lines_count + 2;
    let status_height: u16 = 2 + 2; // content + borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // header
            Constraint::Length(9),             // last show + score
            Constraint::Min(8),                // histogram + stats
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    let stats = app.stats();
    let max = stats.max().map(|m| m.to_string()).unwrap_or_else(|| "-".to_string());
    let header_lines = vec![
        Line::from(format!("Hands: {}   Avg: {:.6}   Max: {}", stats.hands(), stats.mean(), max)),
        Line::from(format!(
            "Batch: {}   Auto-deal: {}ms   Seed: {}",
            app.batch_size, app.auto_interval_ms, app.seed_mode
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("cribbage-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let show_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    draw_show(f, show_cols[0], app.last_show());
    draw_score(f, show_cols[1], app.last_show());

    let body_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[2]);
    draw_histogram(f, body_cols[0], stats);
    draw_stats(f, body_cols[1], stats);

    // Status bar: split horizontally for info vs keys
    let status_area = chunks[3];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let status_inner = inner(status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(status_inner);

    let mut left_info = if app.auto_deal() {
        vec![Line::from(Span::styled(
            format!("Auto-dealing every {}ms — A to stop.", app.auto_interval_ms),
            Style::default().fg(Color::Green),
        ))]
    } else if stats.hands() == 0 {
        vec![Line::from("No hands yet — press Space to deal.")]
    } else {
        vec![Line::from("Space deal • B batch • A auto")]
    };
    if let Some(err) = app.error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let right_keys = vec![Line::from(""), Line::from("R reset • ? help • M menu • Q quit")];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    }
}

fn draw_show(f: &mut Frame, area: Rect, shown: Option<&ScoredShow>) {
    let block = Block::default().title("Last show").borders(Borders::ALL);
    f.render_widget(block, area);
    let show_inner = inner(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3), Constraint::Min(0)])
        .split(show_inner);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("Hand"),
            Span::styled("  |  starter", Style::default().fg(Color::Yellow)),
        ])),
        rows[0],
    );

    let slots = columns(rows[1], 5);
    match shown {
        Some(s) => {
            for (slot, card) in slots.iter().zip(s.hand.iter()) {
                render_card_widget(f, *slot, Some(card), Some(Color::Cyan));
            }
            render_card_widget(f, slots[4], Some(s.starter), Some(Color::Yellow));
            let text = format!("[{}] {}", s.starter, s.hand);
            f.render_widget(
                Paragraph::new(Span::styled(text, Style::default().add_modifier(Modifier::DIM))),
                rows[2],
            );
        }
        None => {
            for slot in slots.iter() {
                render_card_widget(f, *slot, None, None);
            }
        }
    }
}

fn draw_score(f: &mut Frame, area: Rect, shown: Option<&ScoredShow>) {
    let block = Block::default().title("Score").borders(Borders::ALL);
    let lines: Vec<Line> = match shown {
        Some(s) => {
            let mut lines: Vec<Line> = s
                .score
                .iter()
                .map(|(category, points)| {
                    let style = if points > 0 {
                        Style::default().add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().add_modifier(Modifier::DIM)
                    };
                    Line::from(Span::styled(format!("{:<8}{:>3}", category, points), style))
                })
                .collect();
            lines.push(Line::from(Span::styled(
                format!("{:<8}{:>3}", "total", s.score.total()),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )));
            lines
        }
        None => vec![Line::from(Span::styled("--", Style::default().add_modifier(Modifier::DIM)))],
    };
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_histogram(f: &mut Frame, area: Rect, stats: &Stats) {
    let labels: Vec<String> = (0..stats.histogram().len()).map(|p| p.to_string()).collect();
    let data: Vec<(&str, u64)> =
        labels.iter().map(String::as_str).zip(stats.histogram().iter().copied()).collect();
    let bars = data.len() as u16;
    let bar_width = (inner(area).width / bars.max(1)).saturating_sub(1).max(1);
    let chart = BarChart::default()
        .block(Block::default().title("Score distribution").borders(Borders::ALL))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .data(data.as_slice());
    f.render_widget(chart, area);
}

fn draw_stats(f: &mut Frame, area: Rect, stats: &Stats) {
    let block = Block::default().title("Statistics").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::with_capacity(10);
    lines.push(Line::from(format!("Hands: {}", stats.hands())));
    lines.push(Line::from(format!("Mean:  {:.3}", stats.mean())));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Mean per category:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for category in Category::ALL {
        lines.push(Line::from(format!("  {:<7}{:>7.3}", category, stats.category_mean(category))));
    }
    lines.push(Line::from(""));
    match stats.best() {
        Some(best) => lines.push(Line::from(format!(
            "Best: {} [{}] {}",
            best.score.total(),
            best.starter.symbol(),
            best.hand.iter().map(|c| c.symbol()).collect::<Vec<_>>().join(" ")
        ))),
        None => lines.push(Line::from("Best: --")),
    }
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space / Enter: deal and score one hand"),
        Line::from("- B: deal a batch"),
        Line::from("- A: toggle auto-deal"),
        Line::from("- R: reset statistics"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply (restarts statistics)"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_style(card: Card) -> Style {
    if card.suit().is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(Span::styled(c.symbol(), suit_style(c))),
        None => Line::from("[  ]"),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
