use crate::config::settings::{ImageTable, ProfitTable, Settings};
use crate::core::validator::RangeValidator;
use crate::domain::model::{FeatureVector, Language, Recommendation, SoilSample};
use crate::domain::ports::{CropClassifier, Translator, WeatherProvider};
use crate::utils::error::Result;
use std::fmt;

/// One user submission: soil figures, a city for the weather lookup, and the
/// language to report in.
#[derive(Debug, Clone)]
pub struct AdviceRequest {
    pub sample: SoilSample,
    pub location: String,
    pub language: Language,
}

/// Request stages, logged as the pipeline advances. Aborts are only possible
/// while validating (range violation) and while fetching weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Validating,
    FetchingWeather,
    Predicting,
    Localizing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Validating => "validating",
            Stage::FetchingWeather => "fetching-weather",
            Stage::Predicting => "predicting",
            Stage::Localizing => "localizing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Runs one request end to end: validate, fetch weather, predict, localize,
/// assemble. Generic over its ports so tests can drop in fakes.
pub struct Advisor<W: WeatherProvider, T: Translator, C: CropClassifier> {
    validator: RangeValidator,
    weather: W,
    translator: T,
    classifier: C,
    profit: ProfitTable,
    images: ImageTable,
}

impl<W: WeatherProvider, T: Translator, C: CropClassifier> Advisor<W, T, C> {
    pub fn new(settings: &Settings, weather: W, translator: T, classifier: C) -> Self {
        Self {
            validator: RangeValidator::new(settings.ranges),
            weather,
            translator,
            classifier,
            profit: settings.profit.clone(),
            images: settings.images.clone(),
        }
    }

    pub async fn recommend(&self, request: &AdviceRequest) -> Result<Recommendation> {
        tracing::info!("Stage: {}", Stage::Validating);
        self.validator.validate(&request.sample)?;

        tracing::info!("Stage: {} ({})", Stage::FetchingWeather, request.location);
        let weather = self.weather.current_weather(&request.location).await?;
        tracing::debug!(
            "Weather at {}: {:.1}°C, {:.0}% humidity",
            request.location,
            weather.temperature_celsius,
            weather.humidity_percent
        );

        tracing::info!("Stage: {}", Stage::Predicting);
        let features = FeatureVector::from_parts(&request.sample, &weather);
        let crop = self.classifier.predict(&features)?;
        tracing::info!("Predicted crop: {}", crop);

        tracing::info!("Stage: {} ({})", Stage::Localizing, request.language);
        let (localized_crop, localization_degraded) =
            self.localize(&crop, request.language).await;

        tracing::info!("Stage: {}", Stage::Done);
        Ok(Recommendation {
            profit_per_acre: self.profit.for_crop(&crop),
            image_url: Some(self.images.for_crop(&crop)),
            localized_crop,
            weather,
            localization_degraded,
            crop,
        })
    }

    /// Default-language requests return the label as-is with no outbound
    /// call. A failed translation degrades the result instead of aborting:
    /// a valid prediction is never discarded over a cosmetic step.
    async fn localize(&self, label: &str, target: Language) -> (Option<String>, bool) {
        if target == Language::DEFAULT {
            return (Some(label.to_string()), false);
        }
        match self.translator.translate(label, target).await {
            Ok(translated) => (Some(translated), false),
            Err(e) => {
                tracing::warn!("Localization degraded, keeping English label: {}", e);
                (None, true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::WeatherReading;
    use crate::utils::error::AdvisorError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FakeWeather {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl WeatherProvider for FakeWeather {
        async fn current_weather(&self, location: &str) -> Result<WeatherReading> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AdvisorError::WeatherUnavailable {
                    location: location.to_string(),
                    reason: "simulated timeout".to_string(),
                });
            }
            Ok(WeatherReading {
                temperature_celsius: 25.0,
                humidity_percent: 80.0,
            })
        }
    }

    struct FakeTranslator {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl Translator for FakeTranslator {
        async fn translate(&self, text: &str, target: Language) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AdvisorError::TranslationFailed(
                    "simulated outage".to_string(),
                ));
            }
            Ok(format!("{}-{}", text, target.code()))
        }
    }

    struct FakeClassifier {
        calls: Arc<AtomicUsize>,
    }

    impl CropClassifier for FakeClassifier {
        fn predict(&self, _features: &FeatureVector) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("rice".to_string())
        }

        fn labels(&self) -> Vec<String> {
            vec!["rice".to_string()]
        }
    }

    struct Harness {
        weather_calls: Arc<AtomicUsize>,
        translation_calls: Arc<AtomicUsize>,
        classifier_calls: Arc<AtomicUsize>,
        advisor: Advisor<FakeWeather, FakeTranslator, FakeClassifier>,
    }

    fn harness(weather_fails: bool, translation_fails: bool) -> Harness {
        let settings = Settings::embedded().unwrap();
        let weather_calls = Arc::new(AtomicUsize::new(0));
        let translation_calls = Arc::new(AtomicUsize::new(0));
        let classifier_calls = Arc::new(AtomicUsize::new(0));
        let advisor = Advisor::new(
            &settings,
            FakeWeather {
                calls: weather_calls.clone(),
                fail: weather_fails,
            },
            FakeTranslator {
                calls: translation_calls.clone(),
                fail: translation_fails,
            },
            FakeClassifier {
                calls: classifier_calls.clone(),
            },
        );
        Harness {
            weather_calls,
            translation_calls,
            classifier_calls,
            advisor,
        }
    }

    fn request(language: Language) -> AdviceRequest {
        AdviceRequest {
            sample: SoilSample {
                nitrogen: 90.0,
                phosphorus: 40.0,
                potassium: 45.0,
                acidity: 6.5,
                rainfall: 200.0,
            },
            location: "Hyderabad,IN".to_string(),
            language,
        }
    }

    #[tokio::test]
    async fn default_language_short_circuits_translation() {
        let h = harness(false, false);
        let result = h.advisor.recommend(&request(Language::English)).await.unwrap();
        assert_eq!(result.crop, "rice");
        assert_eq!(result.localized_crop.as_deref(), Some("rice"));
        assert!(!result.localization_degraded);
        assert_eq!(h.translation_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn non_default_language_translates_once() {
        let h = harness(false, false);
        let result = h.advisor.recommend(&request(Language::Telugu)).await.unwrap();
        assert_eq!(result.localized_crop.as_deref(), Some("rice-te"));
        assert!(!result.localization_degraded);
        assert_eq!(h.translation_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn range_violation_aborts_before_any_outbound_call() {
        let h = harness(false, false);
        let mut req = request(Language::English);
        req.sample.nitrogen = 250.0;
        let err = h.advisor.recommend(&req).await.unwrap_err();
        assert!(matches!(err, AdvisorError::OutOfRange { .. }));
        assert_eq!(h.weather_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.translation_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.classifier_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn weather_failure_aborts_before_classification() {
        let h = harness(true, false);
        let err = h.advisor.recommend(&request(Language::English)).await.unwrap_err();
        assert!(matches!(err, AdvisorError::WeatherUnavailable { .. }));
        assert_eq!(h.classifier_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.translation_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn translation_failure_degrades_instead_of_aborting() {
        let h = harness(false, true);
        let result = h.advisor.recommend(&request(Language::Hindi)).await.unwrap();
        assert_eq!(result.crop, "rice");
        assert_eq!(result.localized_crop, None);
        assert!(result.localization_degraded);
    }

    #[tokio::test]
    async fn result_joins_profit_and_image_tables() {
        let h = harness(false, false);
        let settings = Settings::embedded().unwrap();
        let result = h.advisor.recommend(&request(Language::English)).await.unwrap();
        assert_eq!(result.profit_per_acre, settings.profit.for_crop("rice"));
        assert_eq!(result.image_url, Some(settings.images.for_crop("rice")));
        assert_eq!(result.weather.temperature_celsius, 25.0);
        assert_eq!(result.weather.humidity_percent, 80.0);
    }
}
