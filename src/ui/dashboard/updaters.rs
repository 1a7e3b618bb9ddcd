//! Dashboard state update logic
//!
//! Feeds wallet changes and user actions into the loader and keeps the derived
//! snapshot and bridge in step with its state

use super::state::DashboardState;

use crate::decision::AllocationDecisionBridge;
use crate::events::Event;
use crate::ui::screen::{ScreenView, project};

use std::sync::Arc;
use tokio::sync::watch;

impl DashboardState {
    /// Start the first load cycle with the wallet's current connection.
    pub fn mount(&mut self) {
        let connection = self.wallet_updates.borrow_and_update().clone();
        self.loader.mount(connection);
        self.sync_derived();
    }

    /// Update the dashboard state once per UI tick.
    pub async fn update(&mut self) {
        self.tick += 1;

        if self.wallet_updates.has_changed().unwrap_or(false) {
            self.observe_connection();
        }
        self.loader.poll().await;
        self.sync_derived();
        self.drain_events();
    }

    /// Wait until the loader settles or the wallet publishes a change, then apply it.
    ///
    /// Fails once the wallet side has gone away.
    pub async fn wait_for_transition(&mut self) -> Result<(), watch::error::RecvError> {
        let loading = self.loader.state().is_loading();
        tokio::select! {
            _ = self.loader.settle(), if loading => {}
            changed = self.wallet_updates.changed() => {
                changed?;
                self.observe_connection();
            }
        }
        self.sync_derived();
        Ok(())
    }

    /// User-requested retry; valid from any state.
    pub fn retry(&mut self) {
        self.loader.retry();
        self.sync_derived();
    }

    /// Ask the decision module to move the simulated allocation. No-op while disconnected.
    pub fn nudge_allocation(&mut self, increase: bool) {
        if let Some(bridge) = self.bridge.as_mut() {
            bridge.nudge(increase);
        }
    }

    /// Move queued events into the activity log and return them.
    pub fn drain_events(&mut self) -> Vec<Event> {
        let mut drained = Vec::new();
        while let Ok(event) = self.event_receiver.try_recv() {
            drained.push(event.clone());
            self.add_to_activity_log(event);
        }
        drained
    }

    /// What the screen should show right now.
    pub fn view(&self) -> ScreenView {
        let connection = self.loader.connection();
        let snapshot = match &self.snapshot {
            Some(snapshot) => Arc::clone(snapshot),
            None => Arc::new(self.provider.snapshot(connection)),
        };
        let input = self
            .bridge
            .as_ref()
            .map(|bridge| bridge.input())
            .unwrap_or(&self.decision_input);
        project(connection, self.loader.state(), &snapshot, input)
    }

    fn observe_connection(&mut self) {
        let connection = self.wallet_updates.borrow_and_update().clone();
        self.loader.on_connection_change(connection);
    }

    /// Snapshot and bridge exist only while loaded; the bridge additionally needs a
    /// connected wallet and a decision reference.
    fn sync_derived(&mut self) {
        let state = self.loader.state();
        if !state.is_loaded() {
            self.snapshot = None;
            self.bridge = None;
            return;
        }

        let connection = self.loader.connection();
        if self.snapshot.is_none() {
            let snapshot = self.provider.snapshot(connection);
            if !snapshot.is_fully_allocated() {
                log::warn!(
                    "Portfolio allocations sum to {}%, expected 100%",
                    snapshot.allocation_total()
                );
            }
            self.snapshot = Some(Arc::new(snapshot));
        }

        let live = connection.is_connected() && state.reference().is_some();
        if !live {
            self.bridge = None;
        } else if self.bridge.is_none() {
            self.bridge = Some(AllocationDecisionBridge::new(
                self.decision_input.clone(),
                Arc::clone(&self.sink),
            ));
        }
    }
}
