//! Event System
//!
//! Activity events produced by the loader, the wallet and the decision bridge

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// The dashboard loader state machine.
    Loader,
    /// The wallet connection collaborator.
    Wallet,
    /// The allocation decision bridge.
    Decision,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    StateChange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn loader(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Loader, msg, event_type, log_level)
    }

    pub fn wallet(msg: String) -> Self {
        Self::new(Source::Wallet, msg, EventType::StateChange, LogLevel::Info)
    }

    pub fn decision(msg: String) -> Self {
        Self::new(Source::Decision, msg, EventType::Success, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.source, self.msg
        )
    }
}

/// Non-blocking event emission shared by the loader and the bridge.
///
/// Sends never block the event loop: a full or closed queue drops the event.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub fn send_event(&self, event: Event) {
        let _ = self.sender.try_send(event);
    }

    pub fn send_loader_event(&self, message: String, event_type: EventType, log_level: LogLevel) {
        self.send_event(Event::loader(message, event_type, log_level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_source_and_message() {
        let event = Event::decision("Strategy strategy-1 allocation changed to 55%".to_string());
        let line = event.to_string();
        assert!(line.starts_with("Success ["));
        assert!(line.ends_with("Decision: Strategy strategy-1 allocation changed to 55%"));
    }

    #[test]
    fn debug_events_follow_threshold() {
        let success = Event::loader("ok".to_string(), EventType::Success, LogLevel::Debug);
        assert!(success.should_display());

        let warn = Event::loader("slow".to_string(), EventType::Error, LogLevel::Warn);
        assert!(warn.should_display());
    }

    #[tokio::test]
    async fn full_queue_drops_instead_of_blocking() {
        let (tx, mut rx) = mpsc::channel(1);
        let sender = EventSender::new(tx);
        sender.send_event(Event::wallet("first".to_string()));
        sender.send_event(Event::wallet("second".to_string()));

        assert_eq!(rx.recv().await.map(|e| e.msg), Some("first".to_string()));
        assert!(rx.try_recv().is_err());
    }
}
