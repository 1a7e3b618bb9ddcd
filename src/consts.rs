pub mod dashboard_consts {
    //! Dashboard Configuration Constants
    //!
    //! Constants for the dashboard loader, the reference portfolio and the
    //! terminal UI, organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events between the loader/bridge and the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // LOADING CONFIGURATION
    // =============================================================================

    /// Resolution step configuration
    pub mod loading {
        /// Simulated latency of the resolution step (milliseconds)
        pub const RESOLUTION_LATENCY_MS: u64 = 1000;

        /// Message shown whenever a resolution step fails.
        pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load dashboard data. Please try again.";

        /// Text next to the progress indicator.
        pub const LOADING_TEXT: &str = "Loading dashboard data...";
    }

    // =============================================================================
    // ALLOCATION CONFIGURATION
    // =============================================================================

    /// Decision module inputs and allocation bounds
    pub mod allocation {
        /// Tolerance used when checking that allocations sum to 100%.
        pub const SUM_TOLERANCE: f64 = 0.01;

        /// Step applied by the +/- keys to the simulated strategy allocation.
        pub const NUDGE_STEP_PERCENT: f64 = 5.0;

        /// Identifier of the strategy driven by the decision panel.
        pub const SIMULATED_STRATEGY_ID: &str = "strategy-1";

        /// Default controller balance handed to the decision module (in cents).
        pub const CONTROLLER_BALANCE_CENTS: i64 = 10_000;

        /// Default strategy balance handed to the decision module (in cents).
        pub const STRATEGY_BALANCE_CENTS: i64 = 5_000;

        /// Default strategy APY handed to the decision module (percent).
        pub const STRATEGY_APY: f64 = 5.2;
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// Terminal loop timing
    pub mod ui {
        use std::time::Duration;

        /// Key polling interval for the TUI loop (milliseconds)
        pub const POLL_INTERVAL_MS: u64 = 100;

        /// Helper function to get the key polling interval
        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }
}
