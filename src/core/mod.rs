pub mod orchestrator;
pub mod validator;

pub use crate::domain::model::{Recommendation, SoilSample};
pub use crate::domain::ports::{CropClassifier, Translator, WeatherProvider};
pub use crate::utils::error::Result;
pub use self::orchestrator::{AdviceRequest, Advisor};
pub use self::validator::RangeValidator;
