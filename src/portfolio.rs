//! Portfolio snapshot data model and providers.

use crate::consts::dashboard_consts::allocation::SUM_TOLERANCE;
use crate::wallet::ConnectionState;
use rust_decimal::Decimal;

/// A named strategy's share of the portfolio.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationEntry {
    pub label: String,
    /// Share of the portfolio, 0 to 100.
    pub percentage_of_portfolio: f64,
}

impl AllocationEntry {
    pub fn new(label: impl Into<String>, percentage_of_portfolio: f64) -> Self {
        Self {
            label: label.into(),
            percentage_of_portfolio,
        }
    }
}

/// Qualitative band for a 0-10 risk score.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum RiskLevel {
    #[strum(to_string = "Low Risk")]
    Low,
    #[strum(to_string = "Medium Risk")]
    Medium,
    #[strum(to_string = "High Risk")]
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score < 4.0 {
            RiskLevel::Low
        } else if score < 7.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Display data for the portfolio panel. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSnapshot {
    pub total_value: Decimal,
    /// Value change over the last 24h, in percent.
    pub value_change_24h: f64,
    pub apy: f64,
    /// APY change since last week, in percentage points.
    pub apy_change_week: f64,
    /// Risk score between 0 and 10.
    pub risk_score: f64,
    pub allocations: Vec<AllocationEntry>,
}

impl PortfolioSnapshot {
    pub fn allocation_total(&self) -> f64 {
        self.allocations
            .iter()
            .map(|entry| entry.percentage_of_portfolio)
            .sum()
    }

    /// Whether the allocations cover the whole portfolio.
    pub fn is_fully_allocated(&self) -> bool {
        (self.allocation_total() - 100.0).abs() <= SUM_TOLERANCE
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }
}

/// Source of portfolio snapshots.
///
/// Callers only read snapshots once the loader is `Loaded`, so a provider that
/// can fail slots in behind the loader without changing the screen.
pub trait PortfolioProvider: Send + Sync {
    fn snapshot(&self, session: &ConnectionState) -> PortfolioSnapshot;
}

/// Fixed reference portfolio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferencePortfolio;

impl PortfolioProvider for ReferencePortfolio {
    fn snapshot(&self, _session: &ConnectionState) -> PortfolioSnapshot {
        PortfolioSnapshot {
            total_value: Decimal::new(1_024_567, 2),
            value_change_24h: 2.4,
            apy: 4.2,
            apy_change_week: 0.3,
            risk_score: 3.5,
            allocations: vec![
                AllocationEntry::new("USDC Lending", 45.0),
                AllocationEntry::new("ETH Staking", 30.0),
                AllocationEntry::new("Curve LP", 15.0),
                AllocationEntry::new("Balancer LP", 10.0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_snapshot_is_fully_allocated() {
        for session in [
            ConnectionState::disconnected(),
            ConnectionState::connected("0x52908400098527886E0F7030069857D2E4169EE7"),
        ] {
            let snapshot = ReferencePortfolio.snapshot(&session);
            assert!(snapshot.is_fully_allocated());
            assert!((0.0..=10.0).contains(&snapshot.risk_score));
            assert!(
                snapshot
                    .allocations
                    .iter()
                    .all(|e| (0.0..=100.0).contains(&e.percentage_of_portfolio))
            );
        }
    }

    #[test]
    fn reference_snapshot_values() {
        let snapshot = ReferencePortfolio.snapshot(&ConnectionState::disconnected());
        assert_eq!(snapshot.total_value.to_string(), "10245.67");
        let labels: Vec<&str> = snapshot
            .allocations
            .iter()
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(
            labels,
            ["USDC Lending", "ETH Staking", "Curve LP", "Balancer LP"]
        );
        assert_eq!(snapshot.risk_level(), RiskLevel::Low);
    }

    #[test]
    fn partial_allocation_is_detected() {
        let mut snapshot = ReferencePortfolio.snapshot(&ConnectionState::disconnected());
        snapshot.allocations.pop();
        assert!(!snapshot.is_fully_allocated());
    }

    #[test]
    fn risk_bands() {
        assert_eq!(RiskLevel::from_score(3.9).to_string(), "Low Risk");
        assert_eq!(RiskLevel::from_score(4.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(9.5), RiskLevel::High);
    }
}
