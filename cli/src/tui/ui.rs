use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, BorderType, Borders, Clear, List, ListItem, Paragraph,
    },
    Frame,
};
use rewards_core::format::{format_currency, format_timestamp};
use rewards_core::model::top_item::ItemKind;
use rewards_core::{KpiCard, OverlaySnapshot, RandomSource, RANGE_PRESETS};

use crate::tui::app::DashboardApp;
use crate::tui::canvas_surface::TerminalSurface;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    up: Color,
    down: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    up: Color::Green,
    down: Color::Red,
};

pub fn draw<R: RandomSource>(f: &mut Frame, app: &mut DashboardApp<R>) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header + range pills
            Constraint::Length(5), // KPI cards
            Constraint::Min(5),    // Top earning
            Constraint::Length(1), // Help
        ])
        .split(size);

    draw_header(f, app, chunks[0]);
    if let Some(snapshot) = app.snapshot() {
        draw_kpis(f, snapshot, chunks[1]);
        draw_top_earnings(f, snapshot, chunks[2]);
    }

    let footer = Paragraph::new("←/→ h/l: Range | 1-5: Preset | o: Overlay | r: Refresh | q: Quit")
        .style(Style::default().fg(THEME.muted))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[3]);

    if app.is_overlay_open() {
        draw_overlay(f, app, centered_rect(80, 80, size));
    }
}

fn draw_header<R: RandomSource>(f: &mut Frame, app: &DashboardApp<R>, area: Rect) {
    let current = app.range();
    let mut spans = vec![Span::styled(
        " REVIEWER REWARDS   ",
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    )];
    for (i, preset) in RANGE_PRESETS.iter().enumerate() {
        let pill = format!(" {} {} ", i + 1, preset.label());
        let style = if *preset == current {
            Style::default().fg(Color::Black).bg(THEME.primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(THEME.text)
        };
        spans.push(Span::styled(pill, style));
        spans.push(Span::raw(" "));
    }
    if current.preset_index().is_none() {
        spans.push(Span::styled(
            format!(" {} ", current.label()),
            Style::default().fg(Color::Black).bg(THEME.primary),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, area);
}

fn change_style(card: &KpiCard) -> Style {
    match card.change.percent {
        None => Style::default().fg(THEME.muted),
        Some(_) if card.change.improved => Style::default().fg(THEME.up),
        Some(_) => Style::default().fg(THEME.down),
    }
}

fn draw_kpis(f: &mut Frame, snapshot: &OverlaySnapshot, area: Rect) {
    let count = snapshot.kpis.len().max(1) as u32;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, cell) in snapshot.kpis.iter().zip(cells.iter()) {
        let body = vec![
            Line::from(Span::styled(
                card.display_value.clone(),
                Style::default().fg(THEME.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(card.display_change.clone(), change_style(card))),
        ];
        let widget = Paragraph::new(body).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted))
                .title(Span::styled(card.label.clone(), Style::default().fg(THEME.primary))),
        );
        f.render_widget(widget, *cell);
    }
}

fn draw_top_earnings(f: &mut Frame, snapshot: &OverlaySnapshot, area: Rect) {
    let items: Vec<ListItem> = snapshot
        .top_earnings
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let kind = match item.kind {
                ItemKind::Song => "Song ",
                ItemKind::Album => "Album",
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(THEME.muted)),
                Span::styled(format!("{:<7}", format_currency(item.amount)), Style::default().fg(THEME.up)),
                Span::styled(format!("{} ", kind), Style::default().fg(THEME.muted)),
                Span::styled(item.title.clone(), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", item.artist), Style::default().fg(THEME.muted)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Top earning ")
            .title_bottom(Line::from(format!(" Updated {} ", format_timestamp(snapshot.updated_at))).right_aligned()),
    );
    f.render_widget(list, area);
}

fn draw_overlay<R: RandomSource>(f: &mut Frame, app: &mut DashboardApp<R>, area: Rect) {
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(THEME.primary))
        .title(format!(" Balance ({}) ", app.range().label()))
        .title_bottom(Line::from(" o: close ").right_aligned());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Estimate, yesterday, dates
            Constraint::Min(6),    // Chart
            Constraint::Length(2), // Summary columns
        ])
        .split(inner);

    app.fit_chart(chunks[1].width);
    draw_chart(f, &app.surface, chunks[1]);

    let Some(snapshot) = app.snapshot() else {
        return;
    };

    let head = vec![
        Line::from(Span::styled(
            snapshot.current_estimate.clone(),
            Style::default().fg(THEME.up).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(snapshot.yesterday.clone(), Style::default().fg(THEME.text))),
        Line::from(Span::styled(snapshot.date_range.clone(), Style::default().fg(THEME.muted))),
    ];
    f.render_widget(Paragraph::new(head), chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(1, 3), Constraint::Ratio(1, 3)])
        .split(chunks[2]);
    let summary = [
        ("Estimated", &snapshot.estimated),
        ("Qualified reviews", &snapshot.qualified),
        ("Conversion", &snapshot.conversion),
    ];
    for ((label, value), cell) in summary.iter().zip(columns.iter()) {
        let body = vec![
            Line::from(Span::styled(*label, Style::default().fg(THEME.muted))),
            Line::from(Span::styled(
                (*value).clone(),
                Style::default().fg(THEME.text).add_modifier(Modifier::BOLD),
            )),
        ];
        f.render_widget(Paragraph::new(body).alignment(Alignment::Center), *cell);
    }
}

// Fills first, then strokes on a new layer so the line stays on top.
fn draw_chart(f: &mut Frame, surface: &TerminalSurface, area: Rect) {
    let width = surface.width().max(1.0);
    let height = surface.height().max(1.0);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for s in &surface.fills {
                ctx.draw(&CanvasLine::new(s.x1, height - s.y1, s.x2, height - s.y2, s.color));
            }
            ctx.layer();
            for s in &surface.strokes {
                ctx.draw(&CanvasLine::new(s.x1, height - s.y1, s.x2, height - s.y2, s.color));
            }
            ctx.layer();
            for label in &surface.labels {
                ctx.print(
                    label.x,
                    height - label.y,
                    Span::styled(label.text.clone(), Style::default().fg(label.color)),
                );
            }
        });
    f.render_widget(canvas, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
