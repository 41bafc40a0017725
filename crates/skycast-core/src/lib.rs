pub mod error;
pub mod preferences;

pub use error::{AppError, PreferencesError};
pub use preferences::{
    FilePreferencesStore, MemoryPreferencesStore, Preferences, PreferencesManager,
    PreferencesStore, Theme,
};

use anyhow::Result;

/// Initialize the core application
pub fn init() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Skycast core initialized");
    Ok(())
}
