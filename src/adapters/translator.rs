use crate::config::settings::TranslationSettings;
use crate::domain::model::Language;
use crate::domain::ports::Translator;
use crate::utils::error::{AdvisorError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// MyMemory-style translation client: one GET with a `langpair` query,
/// translated text in the JSON body. Pure transport; language policy lives
/// with the orchestrator.
pub struct MyMemoryTranslator {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct TranslationResponse {
    #[serde(rename = "responseData")]
    response_data: TranslationData,
}

#[derive(Debug, Deserialize)]
struct TranslationData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl MyMemoryTranslator {
    pub fn new(settings: &TranslationSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| AdvisorError::ConfigError {
                message: format!("failed to build translation HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(&self, text: &str, target: Language) -> Result<String> {
        let url = format!("{}/get", self.endpoint);
        let langpair = format!("{}|{}", Language::DEFAULT.code(), target.code());
        tracing::debug!("Requesting translation to {} from: {}", target, url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await
            .map_err(|e| AdvisorError::TranslationFailed(format!("network failure: {}", e)))?;

        if !response.status().is_success() {
            return Err(AdvisorError::TranslationFailed(format!(
                "translation service returned HTTP {}",
                response.status()
            )));
        }

        let body: TranslationResponse = response.json().await.map_err(|e| {
            AdvisorError::TranslationFailed(format!("malformed translation response: {}", e))
        })?;

        let translated = body.response_data.translated_text.trim().to_string();
        if translated.is_empty() {
            return Err(AdvisorError::TranslationFailed(
                "translation service returned an empty result".to_string(),
            ));
        }
        Ok(translated)
    }
}
