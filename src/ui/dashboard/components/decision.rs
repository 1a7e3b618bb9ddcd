//! Decision module panel component
//!
//! Renders either the live bridge or the static disconnected explanation

use crate::decision::AllocationDecisionBridge;
use crate::ui::dashboard::utils::format_usd;
use crate::ui::screen::{DISCONNECTED_DESCRIPTION, DISCONNECTED_PROMPT};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn panel_block() -> Block<'static> {
    Block::default()
        .title("AI DECISION MODULE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1))
}

/// Render the live decision bridge with its inputs and simulated allocation.
pub fn render_bridge_panel(f: &mut Frame, area: Rect, bridge: &AllocationDecisionBridge) {
    let input = bridge.input();
    let label = Style::default().fg(Color::Gray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled("Controller balance: ", label),
            Span::styled(format_usd(input.controller_balance), value),
        ]),
        Line::from(vec![
            Span::styled("Strategy balance:   ", label),
            Span::styled(format_usd(input.strategy_balance), value),
        ]),
        Line::from(vec![
            Span::styled("Strategy APY:       ", label),
            Span::styled(format!("{}%", input.strategy_apy), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Simulated allocation: ", label),
            Span::styled(
                format!("{}%", bridge.simulated_allocation()),
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "[+/-] Adjust allocation",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(panel_block())
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Render the static panel shown while no wallet is connected.
pub fn render_disconnected_panel(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            DISCONNECTED_PROMPT,
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            DISCONNECTED_DESCRIPTION,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(panel_block())
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Placeholder for the controller-interaction collaborator, shown while connected.
pub fn render_controller_panel(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Controller interaction available for the connected wallet")
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .title("CONTROLLER")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(paragraph, area);
}
