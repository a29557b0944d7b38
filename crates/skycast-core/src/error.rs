//! Centralized error types for the SkyCast dashboard.
//!
//! Every failure in the request pipeline maps to one of five categories.
//! All of them are terminal for the current request: nothing is retried,
//! and the orchestrator converts whichever one it catches into a
//! user-facing message via `user_message()`.

use thiserror::Error;

/// Request pipeline errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller supplied neither a place name nor coordinates, or an
    /// otherwise malformed request (e.g. an inverted date range).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The geocoder returned zero candidates for a text query.
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// The forecast provider answered with an explicit error payload.
    #[error("Weather provider error: {0}")]
    Upstream(String),

    /// Network-level failure talking to any provider.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The language model call failed or returned an invalid response.
    #[error("Summary generation failed: {0}")]
    Generation(String),
}

impl Error {
    /// A message suitable for display in the UI.
    ///
    /// Surfaces the underlying text when the variant carries one, since
    /// provider reasons ("Latitude must be in range...") are already
    /// user-legible; transport errors get a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Error::InvalidInput(msg) => msg.clone(),
            Error::LocationNotFound(_) => {
                "Location not found. Please try another.".to_string()
            }
            Error::Upstream(reason) => reason.clone(),
            Error::Transport(_) => {
                "Unable to connect. Check your internet connection.".to_string()
            }
            Error::Generation(_) => {
                "Could not generate a weather summary. Please try again.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_reason_surfaces_verbatim() {
        let err = Error::Upstream("Latitude must be in range of -90 to 90".into());
        assert_eq!(err.user_message(), "Latitude must be in range of -90 to 90");
    }

    #[test]
    fn test_invalid_input_surfaces_verbatim() {
        let err = Error::InvalidInput("Please enter a location.".into());
        assert_eq!(err.user_message(), "Please enter a location.");
    }

    #[test]
    fn test_user_messages_are_non_empty() {
        let errors = [
            Error::InvalidInput("x".into()),
            Error::LocationNotFound("x".into()),
            Error::Upstream("x".into()),
            Error::Generation("x".into()),
        ];
        for err in &errors {
            assert!(!err.user_message().is_empty());
        }
    }
}
