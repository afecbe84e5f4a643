use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Soil and rainfall figures supplied by the user for one request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilSample {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    /// Soil pH.
    pub acidity: f64,
    /// Expected rainfall in millimetres.
    pub rainfall: f64,
}

/// Live weather at the requested location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
}

/// The exact seven-feature input the classifier was trained on, in its
/// training order. Every field must be finite or prediction refuses to guess.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub acidity: f64,
    pub rainfall: f64,
}

impl FeatureVector {
    pub fn from_parts(sample: &SoilSample, weather: &WeatherReading) -> Self {
        Self {
            nitrogen: sample.nitrogen,
            phosphorus: sample.phosphorus,
            potassium: sample.potassium,
            temperature_celsius: weather.temperature_celsius,
            humidity_percent: weather.humidity_percent,
            acidity: sample.acidity,
            rainfall: sample.rainfall,
        }
    }

    pub fn as_array(&self) -> [f64; 7] {
        [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.temperature_celsius,
            self.humidity_percent,
            self.acidity,
            self.rainfall,
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|v| v.is_finite())
    }
}

/// Final answer assembled for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub crop: String,
    /// Crop name in the requested language; `None` when localization degraded.
    pub localized_crop: Option<String>,
    pub profit_per_acre: f64,
    pub image_url: Option<String>,
    pub weather: WeatherReading,
    /// Set when the translation call failed and the English label stands in.
    pub localization_degraded: bool,
}

/// One attribute outside the classifier's training domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeViolation {
    pub attribute: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={} outside [{}, {}]",
            self.attribute, self.value, self.min, self.max
        )
    }
}

/// Output languages the original interface offered. `English` is the source
/// language of every classifier label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    Telugu,
    Hindi,
    Tamil,
    Kannada,
    Marathi,
    French,
    German,
    Chinese,
    Japanese,
    Spanish,
    Arabic,
    Russian,
}

impl Language {
    pub const DEFAULT: Language = Language::English;

    /// ISO code understood by the translation service.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Telugu => "te",
            Language::Hindi => "hi",
            Language::Tamil => "ta",
            Language::Kannada => "kn",
            Language::Marathi => "mr",
            Language::French => "fr",
            Language::German => "de",
            Language::Chinese => "zh-CN",
            Language::Japanese => "ja",
            Language::Spanish => "es",
            Language::Arabic => "ar",
            Language::Russian => "ru",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Telugu => "Telugu",
            Language::Hindi => "Hindi",
            Language::Tamil => "Tamil",
            Language::Kannada => "Kannada",
            Language::Marathi => "Marathi",
            Language::French => "French",
            Language::German => "German",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
            Language::Spanish => "Spanish",
            Language::Arabic => "Arabic",
            Language::Russian => "Russian",
        }
    }

    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::Telugu,
            Language::Hindi,
            Language::Tamil,
            Language::Kannada,
            Language::Marathi,
            Language::French,
            Language::German,
            Language::Chinese,
            Language::Japanese,
            Language::Spanish,
            Language::Arabic,
            Language::Russian,
        ]
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    /// Accepts the display name ("Telugu") or the ISO code ("te"),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Language::all()
            .iter()
            .find(|lang| {
                lang.name().eq_ignore_ascii_case(needle)
                    || lang.code().eq_ignore_ascii_case(needle)
            })
            .copied()
            .ok_or_else(|| {
                let known: Vec<&str> = Language::all().iter().map(|l| l.name()).collect();
                format!("unknown language '{}'. Known: {}", s, known.join(", "))
            })
    }
}
