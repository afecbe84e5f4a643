use crate::utils::error::{AdvisorError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AdvisorError::ConfigError {
            message: format!("{}: URL cannot be empty", field_name),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AdvisorError::ConfigError {
                message: format!("{}: unsupported URL scheme '{}'", field_name, scheme),
            }),
        },
        Err(e) => Err(AdvisorError::ConfigError {
            message: format!("{}: invalid URL '{}': {}", field_name, url_str, e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AdvisorError::ConfigError {
            message: format!("{}: value cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(AdvisorError::ConfigError {
            message: format!("{}: value must be at least {}", field_name, min_value),
        });
    }
    Ok(())
}

/// Rejects credential values that still carry an unresolved `${VAR}`
/// placeholder after environment substitution.
pub fn validate_resolved_secret(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    if value.starts_with("${") && value.ends_with('}') {
        return Err(AdvisorError::ConfigError {
            message: format!(
                "{}: unresolved placeholder '{}'. Set the environment variable it names",
                field_name, value
            ),
        });
    }
    Ok(())
}
