// Adapters layer: concrete implementations for the external systems the
// pipeline depends on (weather service, translation service, model artifact).

pub mod classifier;
pub mod translator;
pub mod weather;

pub use classifier::CentroidClassifier;
pub use translator::MyMemoryTranslator;
pub use weather::OpenWeatherClient;
