//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::dashboard_consts::ui::poll_interval;
use crate::events::{Event as ActivityEvent, EventSender};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::wallet::WalletHandle;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;

/// Application state
#[derive(Debug)]
pub struct App {
    /// Simulated wallet collaborator, driven by the `c` key.
    wallet: WalletHandle,

    /// The dashboard screen.
    dashboard: DashboardState,

    /// Reports wallet changes to the activity log.
    events: EventSender,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(wallet: WalletHandle, dashboard: DashboardState, events: EventSender) -> Self {
        Self {
            wallet,
            dashboard,
            events,
        }
    }

    /// Handles one key press. Returns `true` when the application should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Char('c') => {
                let connection = self.wallet.toggle();
                self.events
                    .send_event(ActivityEvent::wallet(connection.badge()));
            }
            KeyCode::Char('r') => self.dashboard.retry(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.dashboard.nudge_allocation(true),
            KeyCode::Char('-') => self.dashboard.nudge_allocation(false),
            _ => {}
        }
        false
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    app.dashboard.mount();

    // UI event loop
    loop {
        app.dashboard.update().await;
        terminal.draw(|f| render_dashboard(f, &app.dashboard))?;

        // Yield to the runtime so the resolution step can make progress.
        tokio::time::sleep(poll_interval()).await;

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
    }
}
