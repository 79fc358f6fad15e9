//! Debugging feature flags.
//!
//! These are developer switches compiled into the binary. The per-board debug
//! toggle in the header is separate and controls tick logging at runtime.

pub struct LogFlags {
    /// Warn when a frame (refresh + render) takes longer than `slow_frame_micros`.
    pub log_performance: bool,
    pub slow_frame_micros: u128,

    /// Mount / unmount / timer arm messages.
    pub log_lifecycle: bool,

    /// Log when a persisted preference set is restored on start-up.
    pub log_preferences: bool,

    /// Start every board with its runtime debug toggle switched on.
    pub debug_on_startup: bool,
}

pub const DF: LogFlags = LogFlags {
    log_lifecycle: true,
    log_preferences: true,

    log_performance: false,
    slow_frame_micros: 50_000,

    debug_on_startup: false,
};
