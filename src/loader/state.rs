//! Load state and decision references

use sha3::{Digest, Keccak256};
use std::fmt::{Display, Formatter};

/// Pointer to the latest allocation decision record (not its content).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecisionReference {
    id: String,
}

impl DecisionReference {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Derive a reference id as keccak256(account || nonce), hex encoded with a `0x` prefix.
    pub fn derive(account: &str, nonce: u64) -> Self {
        let mut hasher = Keccak256::new();
        hasher.update(account.as_bytes());
        hasher.update(nonce.to_be_bytes());
        let digest = hasher.finalize();
        let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
        Self::new(format!("0x{}", hex))
    }

    #[allow(unused)]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Display for DecisionReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}

/// State of the dashboard data-loading lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// A resolution step is in flight.
    Loading,
    /// Resolution finished. `None` is the normal disconnected outcome.
    Loaded(Option<DecisionReference>),
    /// Resolution failed; carries the user-facing message.
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    #[allow(unused)]
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn reference(&self) -> Option<&DecisionReference> {
        match self {
            LoadState::Loaded(reference) => reference.as_ref(),
            _ => None,
        }
    }
}

impl Display for LoadState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadState::Idle => write!(f, "Idle"),
            LoadState::Loading => write!(f, "Loading"),
            LoadState::Loaded(Some(_)) => write!(f, "Loaded (decision available)"),
            LoadState::Loaded(None) => write!(f, "Loaded (no decision)"),
            LoadState::Failed(message) => write!(f, "Failed: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_reference_is_a_hex_hash() {
        let reference = DecisionReference::derive("0xabc", 1);
        assert!(reference.id().starts_with("0x"));
        assert_eq!(reference.id().len(), 66);
        assert!(reference.id()[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn derived_reference_depends_on_nonce() {
        assert_eq!(
            DecisionReference::derive("0xabc", 1),
            DecisionReference::derive("0xabc", 1)
        );
        assert_ne!(
            DecisionReference::derive("0xabc", 1),
            DecisionReference::derive("0xabc", 2)
        );
    }

    #[test]
    fn accessors_follow_variant() {
        let failed = LoadState::Failed("boom".to_string());
        assert_eq!(failed.error(), Some("boom"));
        assert!(failed.reference().is_none());

        let loaded = LoadState::Loaded(Some(DecisionReference::new("0x1")));
        assert!(loaded.is_loaded());
        assert_eq!(loaded.reference().map(|r| r.id()), Some("0x1"));
        assert!(loaded.error().is_none());

        assert!(LoadState::Loading.is_loading());
        assert_eq!(LoadState::default(), LoadState::Idle);
    }
}
