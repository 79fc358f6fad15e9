//! File persistence configuration.
//!
//! Only UI preferences are persisted. Market state is rebuilt on every launch.

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state
    pub state_path: &'static str,
}

pub struct PersistenceConfig {
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app: AppPersistenceConfig {
        state_path: ".dashboard_states.json",
    },
};
