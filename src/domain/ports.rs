use crate::domain::model::{FeatureVector, Language, WeatherReading};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Live weather lookup for a location string such as "Hyderabad,IN".
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(&self, location: &str) -> Result<WeatherReading>;
}

/// Remote translation of an English label into a target language.
/// Implementations are pure transport; the default-language short-circuit is
/// orchestrator policy.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: Language) -> Result<String>;
}

/// Pre-trained crop classifier. Loaded once at startup; `predict` must return
/// a label from the artifact's closed set or fail, never guess.
pub trait CropClassifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<String>;

    /// The closed label set the artifact can produce.
    fn labels(&self) -> Vec<String>;
}
