//! Session setup and initialization

use crate::consts::dashboard_consts::EVENT_QUEUE_SIZE;
use crate::decision::{AllocationDecisionInput, LoggingSink};
use crate::events::{Event, EventSender};
use crate::loader::{DashboardLoader, SyntheticResolver};
use crate::portfolio::ReferencePortfolio;
use crate::ui::dashboard::{DashboardParts, DashboardState};
use crate::wallet::WalletHandle;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Resolved options for one dashboard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Account the simulated wallet starts connected with.
    pub account: Option<String>,
    /// Latency of each resolution step.
    pub latency: Duration,
    /// Number of initial resolutions that fail.
    pub simulated_failures: u32,
    /// Whether to paint the dashboard background.
    pub with_background_color: bool,
}

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Simulated wallet collaborator
    pub wallet: WalletHandle,
    /// Dashboard screen state, not yet mounted
    pub dashboard: DashboardState,
    /// Sender for activity events outside the dashboard
    pub events: EventSender,
}

/// Wires the wallet, loader, portfolio provider and decision sink together.
///
/// The loader is not mounted yet; each mode mounts it when it starts rendering.
pub fn setup_session(options: SessionOptions) -> SessionData {
    let (wallet, connection) = WalletHandle::new(options.account);
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let events = EventSender::new(event_sender);

    let resolver =
        SyntheticResolver::new(options.latency).with_failures(options.simulated_failures);
    let loader = DashboardLoader::new(Arc::new(resolver)).with_events(events.clone());

    let dashboard = DashboardState::new(DashboardParts {
        connection,
        loader,
        provider: Arc::new(ReferencePortfolio),
        sink: Arc::new(LoggingSink::new(events.clone())),
        decision_input: AllocationDecisionInput::default(),
        event_receiver,
        with_background_color: options.with_background_color,
    });

    SessionData {
        wallet,
        dashboard,
        events,
    }
}
