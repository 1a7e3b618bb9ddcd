//! Portfolio panel component
//!
//! Renders headline figures and the allocation breakdown

use super::super::utils::{format_change, format_usd};
use crate::portfolio::{PortfolioSnapshot, RiskLevel};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph};

const ALLOCATION_COLORS: [Color; 4] = [Color::Blue, Color::Green, Color::Magenta, Color::Yellow];

/// Render the "Your Portfolio" panel.
pub fn render_portfolio_panel(f: &mut Frame, area: Rect, snapshot: &PortfolioSnapshot) {
    let block = Block::default()
        .title("YOUR PORTFOLIO")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Fill(1)])
        .split(inner);

    render_figures(f, chunks[0], snapshot);
    render_allocations(f, chunks[1], snapshot);
}

fn render_figures(f: &mut Frame, area: Rect, snapshot: &PortfolioSnapshot) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let risk = snapshot.risk_level();
    let risk_color = match risk {
        RiskLevel::Low => Color::LightBlue,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::LightRed,
    };

    let figures = [
        (
            "Total Value",
            format_usd(snapshot.total_value),
            format!("{} (24h)", format_change(snapshot.value_change_24h)),
            Color::LightGreen,
        ),
        (
            "Current APY",
            format!("{}%", snapshot.apy),
            format!("{} from last week", format_change(snapshot.apy_change_week)),
            Color::LightGreen,
        ),
        (
            "Risk Score",
            format!("{}/10", snapshot.risk_score),
            risk.to_string(),
            risk_color,
        ),
    ];

    for ((title, value, detail, detail_color), card) in figures.into_iter().zip(cards.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(detail, Style::default().fg(detail_color))),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(paragraph, *card);
    }
}

fn render_allocations(f: &mut Frame, area: Rect, snapshot: &PortfolioSnapshot) {
    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(snapshot.allocations.iter().map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Fill(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    f.render_widget(
        Paragraph::new("Current Allocation").style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        rows[0],
    );

    for (i, entry) in snapshot.allocations.iter().enumerate() {
        let color = ALLOCATION_COLORS[i % ALLOCATION_COLORS.len()];
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio((entry.percentage_of_portfolio / 100.0).clamp(0.0, 1.0))
            .label(format!(
                "{} {}%",
                entry.label, entry.percentage_of_portfolio
            ));
        f.render_widget(gauge, rows[i + 1]);
    }
}
