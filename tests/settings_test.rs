use crop_advisor::domain::ports::CropClassifier;
use crop_advisor::utils::validation::Validate;
use crop_advisor::{CentroidClassifier, FeatureVector, Settings};
use std::io::Write;
use tempfile::TempDir;

const SETTINGS_TOML: &str = r#"
[weather]
endpoint = "https://api.openweathermap.org"
api_key = "${CROP_ADVISOR_TEST_OWM_KEY}"
timeout_seconds = 3

[translation]
endpoint = "https://api.mymemory.translated.net"
timeout_seconds = 3

[classifier]
model_path = "model.csv"

[ranges]
nitrogen = { min = 0.0, max = 140.0 }
phosphorus = { min = 5.0, max = 145.0 }
potassium = { min = 5.0, max = 205.0 }
acidity = { min = 3.5, max = 10.0 }
rainfall = { min = 20.0, max = 300.0 }

[profit]
default_per_acre = 18000.0

[profit.per_acre]
rice = 31000.0

[images]
default_url = "https://example.com/placeholder.png"

[images.by_crop]
rice = "https://example.com/rice.jpeg"
"#;

#[test]
fn settings_file_loads_with_resolved_credentials() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("advisor.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(SETTINGS_TOML.as_bytes()).unwrap();

    std::env::set_var("CROP_ADVISOR_TEST_OWM_KEY", "key-from-env");
    let settings = Settings::from_file(&path).unwrap();

    assert_eq!(settings.weather.api_key, "key-from-env");
    assert!(settings.validate().is_ok());
    assert_eq!(settings.profit.for_crop("rice"), 31000.0);
    assert_eq!(settings.profit.for_crop("papaya"), 18000.0);
    assert_eq!(
        settings.images.for_crop("papaya"),
        "https://example.com/placeholder.png"
    );
}

#[test]
fn classifier_artifact_loads_from_a_file_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("model.csv");
    std::fs::write(
        &path,
        "label,nitrogen,phosphorus,potassium,temperature,humidity,ph,rainfall\n\
         rice,80,48,40,24,82,6.4,236\n\
         maize,78,48,20,22,65,6.2,85\n",
    )
    .unwrap();

    let classifier = CentroidClassifier::from_file(&path).unwrap();
    assert_eq!(classifier.labels(), vec!["rice", "maize"]);

    let features = FeatureVector {
        nitrogen: 79.0,
        phosphorus: 48.0,
        potassium: 38.0,
        temperature_celsius: 24.0,
        humidity_percent: 81.0,
        acidity: 6.4,
        rainfall: 230.0,
    };
    assert_eq!(classifier.predict(&features).unwrap(), "rice");
}
