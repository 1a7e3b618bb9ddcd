//! Wallet connection state
//!
//! The wallet collaborator owns the connection and publishes every change over a
//! `watch` channel; the dashboard only reads it.

use crate::keys::short_account;
use tokio::sync::watch;

/// Snapshot of the wallet connection as seen by the dashboard.
///
/// `account` is only ever present while connected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectionState {
    connected: bool,
    account: Option<String>,
}

impl ConnectionState {
    pub fn connected(account: impl Into<String>) -> Self {
        Self {
            connected: true,
            account: Some(account.into()),
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// Header badge text, e.g. `Connected: 0x5290...9EE7`.
    pub fn badge(&self) -> String {
        match self.account() {
            Some(account) if self.connected => format!("Connected: {}", short_account(account)),
            _ => "Not connected".to_string(),
        }
    }
}

/// Publishing side of the simulated wallet provider.
#[derive(Debug)]
pub struct WalletHandle {
    sender: watch::Sender<ConnectionState>,
    /// Account used when the connection is toggled back on.
    account: Option<String>,
}

impl WalletHandle {
    /// Create a wallet and a receiver for its connection state.
    ///
    /// The wallet starts connected when `account` is given.
    pub fn new(account: Option<String>) -> (Self, watch::Receiver<ConnectionState>) {
        let initial = match &account {
            Some(account) => ConnectionState::connected(account.clone()),
            None => ConnectionState::disconnected(),
        };
        let (sender, receiver) = watch::channel(initial);
        (Self { sender, account }, receiver)
    }

    pub fn current(&self) -> ConnectionState {
        self.sender.borrow().clone()
    }

    #[allow(unused)]
    pub fn connect(&mut self, account: impl Into<String>) {
        let account = account.into();
        self.account = Some(account.clone());
        self.publish(ConnectionState::connected(account));
    }

    pub fn disconnect(&self) {
        self.publish(ConnectionState::disconnected());
    }

    /// Flip the connection, reusing the last known account.
    ///
    /// Without a known account, connecting is a no-op.
    pub fn toggle(&self) -> ConnectionState {
        if self.current().is_connected() {
            self.disconnect();
        } else if let Some(account) = &self.account {
            self.publish(ConnectionState::connected(account.clone()));
        }
        self.current()
    }

    fn publish(&self, state: ConnectionState) {
        self.sender.send_if_modified(|current| {
            if *current == state {
                return false;
            }
            *current = state;
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    #[test]
    fn disconnected_state_has_no_account() {
        let state = ConnectionState::disconnected();
        assert!(!state.is_connected());
        assert_eq!(state.account(), None);
        assert_eq!(state.badge(), "Not connected");
    }

    #[test]
    fn connected_badge_shortens_account() {
        let state = ConnectionState::connected(ACCOUNT);
        assert!(state.is_connected());
        assert_eq!(state.badge(), "Connected: 0x5290...9EE7");
    }

    #[tokio::test]
    async fn toggle_publishes_changes() {
        let (wallet, mut receiver) = WalletHandle::new(Some(ACCOUNT.to_string()));
        assert!(receiver.borrow_and_update().is_connected());

        let state = wallet.toggle();
        assert!(!state.is_connected());
        assert!(receiver.has_changed().unwrap());
        assert!(!receiver.borrow_and_update().is_connected());

        wallet.toggle();
        assert_eq!(receiver.borrow_and_update().account(), Some(ACCOUNT));
    }

    #[test]
    fn toggle_without_account_stays_disconnected() {
        let (wallet, receiver) = WalletHandle::new(None);
        assert!(!wallet.toggle().is_connected());
        assert!(!receiver.has_changed().unwrap());
    }

    #[test]
    fn connect_remembers_account() {
        let (mut wallet, _receiver) = WalletHandle::new(None);
        wallet.connect(ACCOUNT);
        wallet.disconnect();
        assert_eq!(wallet.toggle().account(), Some(ACCOUNT));
    }
}
