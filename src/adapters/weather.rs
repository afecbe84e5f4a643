use crate::config::settings::WeatherSettings;
use crate::domain::model::WeatherReading;
use crate::domain::ports::WeatherProvider;
use crate::utils::error::{AdvisorError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// OpenWeatherMap current-weather client. One GET per lookup, no retries,
/// bounded by the configured timeout.
pub struct OpenWeatherClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: CurrentWeatherMain,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherMain {
    temp: f64,
    humidity: f64,
}

impl OpenWeatherClient {
    pub fn new(settings: &WeatherSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| AdvisorError::ConfigError {
                message: format!("failed to build weather HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }

    fn unavailable(&self, location: &str, reason: impl Into<String>) -> AdvisorError {
        AdvisorError::WeatherUnavailable {
            location: location.to_string(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, location: &str) -> Result<WeatherReading> {
        if location.trim().is_empty() {
            return Err(self.unavailable(location, "no location provided"));
        }

        let url = format!("{}/data/2.5/weather", self.endpoint);
        tracing::debug!("Requesting weather from: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    self.unavailable(location, "weather service did not respond in time")
                } else {
                    self.unavailable(location, format!("network failure: {}", e))
                }
            })?;

        tracing::debug!("Weather response status: {}", response.status());

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(self.unavailable(location, "location not recognized by the weather service"))
            }
            status if !status.is_success() => {
                return Err(self.unavailable(location, format!("weather service returned HTTP {}", status)))
            }
            _ => {}
        }

        let body: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| self.unavailable(location, format!("malformed weather response: {}", e)))?;

        Ok(WeatherReading {
            temperature_celsius: body.main.temp,
            humidity_percent: body.main.humidity,
        })
    }
}
