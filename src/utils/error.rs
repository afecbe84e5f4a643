use crate::domain::model::RangeViolation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("input outside the classifier's trained domain: {}",
        .violations.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    OutOfRange { violations: Vec<RangeViolation> },

    #[error("could not fetch weather for '{location}': {reason}")]
    WeatherUnavailable { location: String, reason: String },

    #[error("classifier unavailable: {message}")]
    ClassifierUnavailable { message: String },

    #[error("translation failed: {0}")]
    TranslationFailed(String),

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AdvisorError {
    /// Recoverable aborts end one request; everything else means the process
    /// is misconfigured and cannot serve any request.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AdvisorError::OutOfRange { .. } | AdvisorError::WeatherUnavailable { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AdvisorError::OutOfRange { .. } => {
                "Adjust the listed attributes back into their valid ranges and retry"
            }
            AdvisorError::WeatherUnavailable { .. } => {
                "Check the city name (e.g. 'Pune,IN') and your internet connection, then retry"
            }
            AdvisorError::ClassifierUnavailable { .. } => {
                "Verify the model artifact path in the configuration and that the file is intact"
            }
            AdvisorError::TranslationFailed(_) => {
                "The English recommendation is still valid; retry later for a translation"
            }
            AdvisorError::ConfigError { .. } => {
                "Fix the configuration file or the referenced environment variables"
            }
            AdvisorError::IoError(_) => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
