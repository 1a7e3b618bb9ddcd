//! Screen composition
//!
//! Pure projection of connection, load state and portfolio into what the screen shows.

use crate::consts::dashboard_consts::loading::LOADING_TEXT;
use crate::decision::AllocationDecisionInput;
use crate::loader::LoadState;
use crate::portfolio::PortfolioSnapshot;
use crate::wallet::ConnectionState;

pub const DISCONNECTED_PROMPT: &str =
    "Connect your wallet to interact with the NapFi AI Decision Module";
pub const DISCONNECTED_DESCRIPTION: &str = "The AI Decision Module analyzes market conditions and optimizes your yield strategy in real-time";

/// Right-hand decision panel.
#[derive(Debug, Clone, PartialEq)]
pub enum DecisionView {
    /// Live bridge populated with the decision inputs.
    Bridge(AllocationDecisionInput),
    /// Static explanation shown while disconnected.
    Disconnected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentView {
    pub portfolio: PortfolioSnapshot,
    pub decision: DecisionView,
    /// Whether the controller-interaction section is shown.
    pub show_controller: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    Loading,
    Error { message: String },
    Content(ContentView),
}

/// Project the current state into a view.
///
/// The bridge is shown only when connected and the load produced a decision reference.
pub fn project(
    connection: &ConnectionState,
    load_state: &LoadState,
    snapshot: &PortfolioSnapshot,
    input: &AllocationDecisionInput,
) -> ScreenView {
    match load_state {
        LoadState::Idle | LoadState::Loading => ScreenView::Loading,
        LoadState::Failed(message) => ScreenView::Error {
            message: message.clone(),
        },
        LoadState::Loaded(reference) => {
            let live = connection.is_connected() && reference.is_some();
            ScreenView::Content(ContentView {
                portfolio: snapshot.clone(),
                decision: if live {
                    DecisionView::Bridge(input.clone())
                } else {
                    DecisionView::Disconnected
                },
                show_controller: connection.is_connected(),
            })
        }
    }
}

impl ScreenView {
    /// Plain-text rendering used by headless mode.
    pub fn summary_lines(&self) -> Vec<String> {
        match self {
            ScreenView::Loading => vec![LOADING_TEXT.to_string()],
            ScreenView::Error { message } => {
                vec![format!("Error: {}", message), "Retry available".to_string()]
            }
            ScreenView::Content(content) => {
                let portfolio = &content.portfolio;
                let mut lines = vec![
                    format!(
                        "Total Value: ${} ({:+}% 24h)",
                        portfolio.total_value, portfolio.value_change_24h
                    ),
                    format!(
                        "Current APY: {}% ({:+}% from last week)",
                        portfolio.apy, portfolio.apy_change_week
                    ),
                    format!(
                        "Risk Score: {}/10 ({})",
                        portfolio.risk_score,
                        portfolio.risk_level()
                    ),
                ];
                lines.extend(
                    portfolio
                        .allocations
                        .iter()
                        .map(|e| format!("  {}: {}%", e.label, e.percentage_of_portfolio)),
                );
                match &content.decision {
                    DecisionView::Bridge(input) => lines.push(format!(
                        "Decision module: controller {} / strategy {} @ {}% APY",
                        input.controller_balance, input.strategy_balance, input.strategy_apy
                    )),
                    DecisionView::Disconnected => lines.push(DISCONNECTED_PROMPT.to_string()),
                }
                lines
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::DecisionReference;
    use crate::portfolio::{PortfolioProvider, ReferencePortfolio};

    const ACCOUNT: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    fn reference_snapshot() -> PortfolioSnapshot {
        ReferencePortfolio.snapshot(&ConnectionState::disconnected())
    }

    #[test]
    fn loading_shows_only_progress() {
        let view = project(
            &ConnectionState::connected(ACCOUNT),
            &LoadState::Loading,
            &reference_snapshot(),
            &AllocationDecisionInput::default(),
        );
        assert_eq!(view, ScreenView::Loading);
        assert_eq!(view.summary_lines(), vec![LOADING_TEXT.to_string()]);
    }

    #[test]
    fn failed_shows_message() {
        let view = project(
            &ConnectionState::disconnected(),
            &LoadState::Failed("broken".to_string()),
            &reference_snapshot(),
            &AllocationDecisionInput::default(),
        );
        assert_eq!(
            view,
            ScreenView::Error {
                message: "broken".to_string()
            }
        );
    }

    #[test]
    fn disconnected_load_never_shows_bridge() {
        let view = project(
            &ConnectionState::disconnected(),
            &LoadState::Loaded(None),
            &reference_snapshot(),
            &AllocationDecisionInput::default(),
        );
        let ScreenView::Content(content) = view else {
            panic!("expected content view");
        };
        assert_eq!(content.decision, DecisionView::Disconnected);
        assert!(!content.show_controller);
    }

    #[test]
    fn connected_load_shows_bridge_and_controller() {
        let view = project(
            &ConnectionState::connected(ACCOUNT),
            &LoadState::Loaded(Some(DecisionReference::new("0x1"))),
            &reference_snapshot(),
            &AllocationDecisionInput::default(),
        );
        let ScreenView::Content(content) = view else {
            panic!("expected content view");
        };
        assert_eq!(
            content.decision,
            DecisionView::Bridge(AllocationDecisionInput::default())
        );
        assert!(content.show_controller);
    }

    #[test]
    fn content_summary_lists_allocations() {
        let view = project(
            &ConnectionState::disconnected(),
            &LoadState::Loaded(None),
            &reference_snapshot(),
            &AllocationDecisionInput::default(),
        );
        let lines = view.summary_lines();
        assert_eq!(lines[0], "Total Value: $10245.67 (+2.4% 24h)");
        assert!(lines.contains(&"  USDC Lending: 45%".to_string()));
        assert!(lines.contains(&"Risk Score: 3.5/10 (Low Risk)".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some(DISCONNECTED_PROMPT));
    }
}
