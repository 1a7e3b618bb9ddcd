//! Dashboard main renderer

use super::components::{decision, footer, header, logs, portfolio, status};
use super::state::DashboardState;
use crate::ui::screen::{ContentView, DecisionView, ScreenView};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Percentage(25),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    match state.view() {
        ScreenView::Loading => status::render_loading(f, main_chunks[1], state.tick),
        ScreenView::Error { message } => status::render_error(f, main_chunks[1], &message),
        ScreenView::Content(content) => render_content(f, main_chunks[1], state, &content),
    }

    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], state);
}

fn render_content(f: &mut Frame, area: Rect, state: &DashboardState, content: &ContentView) {
    let rows = if content.show_controller {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(3)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1)])
            .split(area)
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[0]);

    portfolio::render_portfolio_panel(f, columns[0], &content.portfolio);

    match (&content.decision, state.bridge()) {
        (DecisionView::Bridge(_), Some(bridge)) => {
            decision::render_bridge_panel(f, columns[1], bridge)
        }
        _ => decision::render_disconnected_panel(f, columns[1]),
    }

    if content.show_controller {
        decision::render_controller_panel(f, rows[1]);
    }
}
