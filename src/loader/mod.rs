//! Dashboard loader
//!
//! Owns the load/error/retry state machine. Every entry into `Loading` takes a new
//! request token; only the resolution started under the current token may change
//! the state, and a superseded task is aborted.

pub mod error;
pub mod resolver;
pub mod state;

pub use error::{LoadError, ResolveError};
pub use resolver::{DecisionResolver, SyntheticResolver};
pub use state::{DecisionReference, LoadState};

use crate::events::{EventSender, EventType};
use crate::logging::LogLevel;
use crate::wallet::ConnectionState;
use std::sync::Arc;
use tokio::task::JoinHandle;

type Resolution = Result<Option<DecisionReference>, ResolveError>;

/// A resolution step that has been started but not yet applied.
#[derive(Debug)]
struct InFlight {
    token: u64,
    handle: JoinHandle<Resolution>,
}

pub struct DashboardLoader {
    resolver: Arc<dyn DecisionResolver>,
    state: LoadState,
    /// Last connection observed by the loader.
    connection: ConnectionState,
    /// Token of the most recent `Loading` entry.
    current_token: u64,
    in_flight: Option<InFlight>,
    events: Option<EventSender>,
}

impl std::fmt::Debug for DashboardLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardLoader")
            .field("state", &self.state)
            .field("connection", &self.connection)
            .field("current_token", &self.current_token)
            .field("in_flight", &self.in_flight.as_ref().map(|f| f.token))
            .finish()
    }
}

impl DashboardLoader {
    pub fn new(resolver: Arc<dyn DecisionResolver>) -> Self {
        Self {
            resolver,
            state: LoadState::Idle,
            connection: ConnectionState::disconnected(),
            current_token: 0,
            in_flight: None,
            events: None,
        }
    }

    /// Report every transition to the activity log.
    pub fn with_events(mut self, events: EventSender) -> Self {
        self.events = Some(events);
        self
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn connection(&self) -> &ConnectionState {
        &self.connection
    }

    /// Start the first load cycle.
    pub fn mount(&mut self, connection: ConnectionState) {
        self.begin(connection);
    }

    /// React to a connection change pushed by the wallet.
    ///
    /// Only a change of the connected flag starts a new cycle; returns whether one started.
    pub fn on_connection_change(&mut self, connection: ConnectionState) -> bool {
        let flipped = connection.is_connected() != self.connection.is_connected();
        if !flipped && self.state != LoadState::Idle {
            self.connection = connection;
            return false;
        }
        self.begin(connection);
        true
    }

    /// Re-run resolution for the last observed connection, clearing any error.
    pub fn retry(&mut self) {
        let connection = self.connection.clone();
        self.begin(connection);
    }

    /// Wait for the in-flight resolution, if any, and apply it.
    ///
    /// Cancel safe: dropping the future leaves the resolution in flight.
    pub async fn settle(&mut self) -> &LoadState {
        if let Some(in_flight) = self.in_flight.as_mut() {
            let token = in_flight.token;
            let joined = (&mut in_flight.handle).await;
            self.in_flight = None;
            let resolution = joined.unwrap_or_else(|e| Err(ResolveError::from(e)));
            self.apply(token, resolution);
        }
        &self.state
    }

    /// Apply a finished resolution without waiting. Returns whether one was applied.
    pub async fn poll(&mut self) -> bool {
        match &self.in_flight {
            Some(in_flight) if in_flight.handle.is_finished() => {
                self.settle().await;
                true
            }
            _ => false,
        }
    }

    fn begin(&mut self, connection: ConnectionState) {
        if let Some(previous) = self.in_flight.take() {
            previous.handle.abort();
            self.emit(
                format!("Superseded resolution #{}", previous.token),
                EventType::Refresh,
                LogLevel::Debug,
            );
        }

        self.current_token += 1;
        self.connection = connection.clone();
        self.transition(LoadState::Loading);

        let resolver = Arc::clone(&self.resolver);
        let handle = tokio::spawn(async move { resolver.resolve(&connection).await });
        self.in_flight = Some(InFlight {
            token: self.current_token,
            handle,
        });
    }

    /// Returns false when the result belongs to a superseded request.
    fn apply(&mut self, token: u64, resolution: Resolution) -> bool {
        if token != self.current_token || !self.state.is_loading() {
            log::debug!("Ignoring stale resolution #{}", token);
            return false;
        }

        match resolution {
            Ok(reference) => self.transition(LoadState::Loaded(reference)),
            Err(cause) => {
                log::warn!("Error loading dashboard data: {}", cause);
                self.emit(cause.to_string(), EventType::Error, LogLevel::Warn);
                let error = LoadError::from(cause);
                self.transition(LoadState::Failed(error.to_string()));
            }
        }
        true
    }

    fn transition(&mut self, next: LoadState) {
        let event_type = match &next {
            LoadState::Loaded(_) => EventType::Success,
            LoadState::Failed(_) => EventType::Error,
            _ => EventType::StateChange,
        };
        let log_level = if matches!(next, LoadState::Failed(_)) {
            LogLevel::Error
        } else {
            LogLevel::Info
        };
        self.emit(format!("{} -> {}", self.state, next), event_type, log_level);
        self.state = next;
    }

    fn emit(&self, message: String, event_type: EventType, log_level: LogLevel) {
        if let Some(events) = &self.events {
            events.send_loader_event(message, event_type, log_level);
        }
    }
}

impl Drop for DashboardLoader {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.handle.abort();
        }
    }
}
