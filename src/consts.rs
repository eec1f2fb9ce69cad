pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered worker messages
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum number of pending refresh requests
    pub const REFRESH_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    /// Periodic refresh configuration
    pub mod refresh {
        use std::time::Duration;

        /// Interval between timer-driven refreshes (seconds)
        pub const INTERVAL_SECS: u64 = 5 * 60; // 5 minutes

        /// Helper function to get the refresh interval
        pub const fn interval() -> Duration {
            Duration::from_secs(INTERVAL_SECS)
        }
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP client configuration
    pub mod http {
        use std::time::Duration;

        /// Connection timeout for backend requests (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Overall request timeout for backend requests (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // MOCK DATA
    // =============================================================================

    /// Fixed values and catalogs used by the mock data generator
    pub mod mock {
        pub const TOTAL_SESSIONS: u64 = 1247;
        pub const AVG_SESSION_TIME: &str = "8m 32s";
        pub const ENGAGEMENT_RATE: &str = "87.3%";
        pub const ACTIVE_PROPERTIES: u64 = 24;

        /// Inclusive range of daily session counts in generated trends
        pub const TREND_MIN_SESSIONS: u64 = 20;
        pub const TREND_MAX_SESSIONS: u64 = 69;

        /// Number of generated recent sessions
        pub const RECENT_SESSION_COUNT: usize = 10;

        /// Generated session start times fall within this many trailing days
        pub const RECENT_SESSION_WINDOW_DAYS: i64 = 7;

        /// Canonical zone catalog: (zone, visits, average seconds spent)
        pub const ZONES: [(&str, u64, u64); 5] = [
            ("Living Room", 450, 180),
            ("Kitchen", 380, 210),
            ("Master Bedroom", 290, 150),
            ("Bathroom", 180, 90),
            ("Balcony", 120, 240),
        ];

        /// Property names drawn for generated sessions
        pub const PROPERTIES: [&str; 4] = [
            "Luxury Villa",
            "Downtown Condo",
            "Beach House",
            "Mountain Retreat",
        ];
    }
}
