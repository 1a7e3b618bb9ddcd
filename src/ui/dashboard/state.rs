//! Dashboard state management
//!
//! Owns the loader and everything derived from its state

use crate::consts::dashboard_consts::MAX_ACTIVITY_LOGS;
use crate::decision::{AllocationChangeSink, AllocationDecisionBridge, AllocationDecisionInput};
use crate::events::Event;
use crate::loader::DashboardLoader;
use crate::portfolio::{PortfolioProvider, PortfolioSnapshot};
use crate::wallet::ConnectionState;

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, watch};

/// Everything the dashboard needs from the session.
pub struct DashboardParts {
    pub connection: watch::Receiver<ConnectionState>,
    pub loader: DashboardLoader,
    pub provider: Arc<dyn PortfolioProvider>,
    pub sink: Arc<dyn AllocationChangeSink>,
    pub decision_input: AllocationDecisionInput,
    pub event_receiver: mpsc::Receiver<Event>,
    pub with_background_color: bool,
}

/// Dashboard state: connection, loader and the data derived once loaded.
pub struct DashboardState {
    /// The start time of the dashboard, shown as uptime in the footer.
    pub start_time: Instant,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    pub(super) wallet_updates: watch::Receiver<ConnectionState>,
    pub(super) loader: DashboardLoader,
    pub(super) provider: Arc<dyn PortfolioProvider>,
    pub(super) sink: Arc<dyn AllocationChangeSink>,
    pub(super) decision_input: AllocationDecisionInput,
    pub(super) event_receiver: mpsc::Receiver<Event>,
    /// Snapshot read when the loader reached `Loaded`; cleared on every new cycle.
    pub(super) snapshot: Option<Arc<PortfolioSnapshot>>,
    /// Present only while connected and loaded.
    pub(super) bridge: Option<AllocationDecisionBridge>,
}

impl std::fmt::Debug for DashboardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardState")
            .field("loader", &self.loader)
            .field("snapshot", &self.snapshot)
            .field("bridge", &self.bridge)
            .field("tick", &self.tick)
            .finish()
    }
}

impl DashboardState {
    pub fn new(parts: DashboardParts) -> Self {
        Self {
            start_time: Instant::now(),
            activity_logs: VecDeque::new(),
            with_background_color: parts.with_background_color,
            tick: 0,
            wallet_updates: parts.connection,
            loader: parts.loader,
            provider: parts.provider,
            sink: parts.sink,
            decision_input: parts.decision_input,
            event_receiver: parts.event_receiver,
            snapshot: None,
            bridge: None,
        }
    }

    #[allow(unused)]
    pub fn loader(&self) -> &DashboardLoader {
        &self.loader
    }

    /// Connection the current load cycle was started for.
    pub fn connection(&self) -> &ConnectionState {
        self.loader.connection()
    }

    pub fn bridge(&self) -> Option<&AllocationDecisionBridge> {
        self.bridge.as_ref()
    }

    #[allow(unused)]
    pub fn snapshot(&self) -> Option<&PortfolioSnapshot> {
        self.snapshot.as_deref()
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}
