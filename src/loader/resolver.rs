//! Resolution step
//!
//! Stand-in for the future API or event-subscription call that locates the
//! latest decision record.

use super::error::ResolveError;
use super::state::DecisionReference;
use crate::wallet::ConnectionState;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::sleep;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// Determines whether the dashboard is ready and which decision it points at.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DecisionResolver: Send + Sync {
    /// Resolve the latest decision for the given connection.
    ///
    /// Returns `Ok(None)` when there is nothing to show, e.g. while disconnected.
    async fn resolve(
        &self,
        connection: &ConnectionState,
    ) -> Result<Option<DecisionReference>, ResolveError>;
}

/// Synthetic data source: waits for a fixed latency, then answers.
///
/// It can be told to fail its first N resolutions so the failure path stays reachable.
#[derive(Debug)]
pub struct SyntheticResolver {
    latency: Duration,
    failures_remaining: AtomicU32,
    nonce: AtomicU64,
}

impl SyntheticResolver {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            failures_remaining: AtomicU32::new(0),
            nonce: AtomicU64::new(0),
        }
    }

    pub fn with_failures(self, count: u32) -> Self {
        self.failures_remaining.store(count, Ordering::SeqCst);
        self
    }

    fn take_failure(&self) -> bool {
        self.failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait::async_trait]
impl DecisionResolver for SyntheticResolver {
    async fn resolve(
        &self,
        connection: &ConnectionState,
    ) -> Result<Option<DecisionReference>, ResolveError> {
        sleep(self.latency).await;

        if self.take_failure() {
            return Err(ResolveError::Unavailable(
                "simulated decision source outage".to_string(),
            ));
        }

        match connection.account() {
            Some(account) if connection.is_connected() => {
                let nonce = self.nonce.fetch_add(1, Ordering::SeqCst);
                Ok(Some(DecisionReference::derive(account, nonce)))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    #[tokio::test]
    async fn disconnected_resolution_has_no_reference() {
        let resolver = SyntheticResolver::new(Duration::ZERO);
        let result = resolver.resolve(&ConnectionState::disconnected()).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn connected_resolution_yields_fresh_references() {
        let resolver = SyntheticResolver::new(Duration::ZERO);
        let connection = ConnectionState::connected(ACCOUNT);
        let first = resolver.resolve(&connection).await.unwrap().unwrap();
        let second = resolver.resolve(&connection).await.unwrap().unwrap();
        assert!(!first.id().is_empty());
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn configured_failures_are_consumed_in_order() {
        let resolver = SyntheticResolver::new(Duration::ZERO).with_failures(2);
        let connection = ConnectionState::connected(ACCOUNT);
        assert!(resolver.resolve(&connection).await.is_err());
        assert!(resolver.resolve(&connection).await.is_err());
        assert!(resolver.resolve(&connection).await.unwrap().is_some());
    }
}
