//! Centralized error types for the Skycast application.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly messages suitable for UI display
//! - Preserves full error context for debugging/logging

use thiserror::Error;

use skycast_weather::WeatherError;

/// Top-level application error type.
///
/// All errors in the Skycast application should be convertible to this
/// type. Use `user_message()` to get a UI-appropriate message. Every
/// error here is non-fatal: the surrounding shell surfaces the message
/// and keeps running.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Weather source error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Preferences error: {0}")]
    Preferences(#[from] PreferencesError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    ///
    /// These messages are designed to be actionable and non-technical.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Weather(e) => e.user_message(),
            AppError::Preferences(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Preferences persistence errors.
///
/// Only saving can fail; loading falls back to defaults instead of
/// erroring.
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("Failed to write preferences: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode preferences: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Platform config directory unavailable")]
    NoConfigDir,
}

impl PreferencesError {
    pub fn user_message(&self) -> &'static str {
        match self {
            PreferencesError::Io(_) | PreferencesError::Serialize(_) => {
                "Could not save your settings. They will apply for this session only."
            }
            PreferencesError::NoConfigDir => {
                "No settings folder was found. Settings will not persist."
            }
        }
    }
}
