pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{CentroidClassifier, MyMemoryTranslator, OpenWeatherClient};
pub use crate::config::Settings;
pub use crate::core::{AdviceRequest, Advisor, RangeValidator};
pub use crate::domain::model::{
    FeatureVector, Language, Recommendation, SoilSample, WeatherReading,
};
pub use crate::utils::error::{AdvisorError, Result};
