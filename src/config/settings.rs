use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_resolved_secret, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Default settings shipped with the binary. API credentials stay out of it;
/// they come in through `${VAR}` placeholders resolved at load time.
const DEFAULT_SETTINGS: &str = include_str!("../../advisor.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub weather: WeatherSettings,
    pub translation: TranslationSettings,
    pub classifier: ClassifierSettings,
    pub ranges: AttributeRanges,
    pub profit: ProfitTable,
    pub images: ImageTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSettings {
    pub endpoint: String,
    pub api_key: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationSettings {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierSettings {
    pub model_path: String,
}

/// Inclusive [min, max] bounds for one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The classifier's training domain per soil/rainfall attribute. Fixed
/// configuration, never derived at runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttributeRanges {
    pub nitrogen: Bounds,
    pub phosphorus: Bounds,
    pub potassium: Bounds,
    pub acidity: Bounds,
    pub rainfall: Bounds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitTable {
    pub default_per_acre: f64,
    pub per_acre: HashMap<String, f64>,
}

impl ProfitTable {
    /// Exact table value, or the configured default for crops the table does
    /// not name. Never fails.
    pub fn for_crop(&self, crop: &str) -> f64 {
        self.per_acre
            .get(&crop.to_lowercase())
            .copied()
            .unwrap_or(self.default_per_acre)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageTable {
    pub default_url: String,
    pub by_crop: HashMap<String, String>,
}

impl ImageTable {
    pub fn for_crop(&self, crop: &str) -> String {
        self.by_crop
            .get(&crop.to_lowercase())
            .cloned()
            .unwrap_or_else(|| self.default_url.clone())
    }
}

impl Settings {
    /// Built-in settings, with `${VAR}` placeholders resolved from the
    /// environment.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(DEFAULT_SETTINGS)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AdvisorError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| AdvisorError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replaces `${VAR_NAME}` with the named environment variable. Unresolved
/// placeholders are left in place so validation can report them by name.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("weather.endpoint", &self.weather.endpoint)?;
        validate_resolved_secret("weather.api_key", &self.weather.api_key)?;
        validate_positive_number("weather.timeout_seconds", self.weather.timeout_seconds, 1)?;

        validate_url("translation.endpoint", &self.translation.endpoint)?;
        validate_positive_number(
            "translation.timeout_seconds",
            self.translation.timeout_seconds,
            1,
        )?;

        validate_non_empty_string("classifier.model_path", &self.classifier.model_path)?;

        for (name, bounds) in [
            ("ranges.nitrogen", self.ranges.nitrogen),
            ("ranges.phosphorus", self.ranges.phosphorus),
            ("ranges.potassium", self.ranges.potassium),
            ("ranges.acidity", self.ranges.acidity),
            ("ranges.rainfall", self.ranges.rainfall),
        ] {
            if !(bounds.min <= bounds.max) {
                return Err(AdvisorError::ConfigError {
                    message: format!(
                        "{}: min {} exceeds max {}",
                        name, bounds.min, bounds.max
                    ),
                });
            }
        }

        validate_url("images.default_url", &self.images.default_url)?;

        Ok(())
    }
}
