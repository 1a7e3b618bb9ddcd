//! Allocation decision bridge
//!
//! Input/output contract between the dashboard and the decision simulation module.
//! The dashboard hands over balances and yield on every render and receives
//! one-way allocation-change events back. Nothing is acknowledged.

use crate::consts::dashboard_consts::allocation::{
    CONTROLLER_BALANCE_CENTS, NUDGE_STEP_PERCENT, SIMULATED_STRATEGY_ID, STRATEGY_APY,
    STRATEGY_BALANCE_CENTS,
};
use crate::events::{Event, EventSender};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::sync::Arc;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// Inputs supplied to the decision module on each render.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationDecisionInput {
    pub controller_balance: Decimal,
    pub strategy_balance: Decimal,
    /// Strategy yield, in percent.
    pub strategy_apy: f64,
}

impl Default for AllocationDecisionInput {
    fn default() -> Self {
        Self {
            controller_balance: Decimal::new(CONTROLLER_BALANCE_CENTS, 2),
            strategy_balance: Decimal::new(STRATEGY_BALANCE_CENTS, 2),
            strategy_apy: STRATEGY_APY,
        }
    }
}

impl AllocationDecisionInput {
    /// Share of the controller balance currently deployed to the strategy, 0 to 100.
    pub fn strategy_share_percent(&self) -> f64 {
        if self.controller_balance.is_zero() {
            return 0.0;
        }
        let share = self.strategy_balance / self.controller_balance * Decimal::ONE_HUNDRED;
        share.to_f64().unwrap_or(0.0).clamp(0.0, 100.0)
    }
}

/// Intent to change a strategy's allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationChangeEvent {
    pub strategy_id: String,
    /// Requested allocation, 0 to 100.
    pub new_allocation_percent: f64,
}

impl AllocationChangeEvent {
    /// Build an event, clamping the percentage into 0..=100.
    pub fn new(strategy_id: impl Into<String>, new_allocation_percent: f64) -> Self {
        Self {
            strategy_id: strategy_id.into(),
            new_allocation_percent: new_allocation_percent.clamp(0.0, 100.0),
        }
    }
}

/// Receiver of allocation-change events.
///
/// Implementations must return immediately and must not fail. A future version
/// that needs an acknowledgement should return it explicitly.
#[cfg_attr(test, automock)]
pub trait AllocationChangeSink: Send + Sync {
    fn on_allocation_change(&self, event: AllocationChangeEvent);
}

/// Sink that only records the intent; on-chain execution lives elsewhere.
#[derive(Debug, Clone, Default)]
pub struct LoggingSink {
    events: Option<EventSender>,
}

impl LoggingSink {
    pub fn new(events: EventSender) -> Self {
        Self {
            events: Some(events),
        }
    }
}

impl AllocationChangeSink for LoggingSink {
    fn on_allocation_change(&self, event: AllocationChangeEvent) {
        let msg = format!(
            "Strategy {} allocation changed to {}%",
            event.strategy_id, event.new_allocation_percent
        );
        log::info!("{}", msg);
        if let Some(events) = &self.events {
            events.send_event(Event::decision(msg));
        }
    }
}

/// Live bridge to the decision module. Only exists while the wallet is connected.
pub struct AllocationDecisionBridge {
    input: AllocationDecisionInput,
    sink: Arc<dyn AllocationChangeSink>,
    /// Allocation the simulated strategy currently holds.
    simulated_allocation: f64,
}

impl std::fmt::Debug for AllocationDecisionBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllocationDecisionBridge")
            .field("input", &self.input)
            .field("simulated_allocation", &self.simulated_allocation)
            .finish()
    }
}

impl AllocationDecisionBridge {
    pub fn new(input: AllocationDecisionInput, sink: Arc<dyn AllocationChangeSink>) -> Self {
        let simulated_allocation = input.strategy_share_percent();
        Self {
            input,
            sink,
            simulated_allocation,
        }
    }

    pub fn input(&self) -> &AllocationDecisionInput {
        &self.input
    }

    pub fn simulated_allocation(&self) -> f64 {
        self.simulated_allocation
    }

    /// Forward an event unchanged to the sink.
    pub fn emit(&self, event: AllocationChangeEvent) {
        self.sink.on_allocation_change(event);
    }

    /// Move the simulated strategy allocation one step up or down and emit the change.
    ///
    /// Nothing is emitted when the allocation is already at the bound.
    pub fn nudge(&mut self, increase: bool) -> Option<AllocationChangeEvent> {
        let step = if increase {
            NUDGE_STEP_PERCENT
        } else {
            -NUDGE_STEP_PERCENT
        };
        let event =
            AllocationChangeEvent::new(SIMULATED_STRATEGY_ID, self.simulated_allocation + step);
        if event.new_allocation_percent == self.simulated_allocation {
            return None;
        }
        self.simulated_allocation = event.new_allocation_percent;
        self.emit(event.clone());
        Some(event)
    }
}
