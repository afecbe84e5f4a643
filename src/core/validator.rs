use crate::config::settings::AttributeRanges;
use crate::domain::model::{RangeViolation, SoilSample};
use crate::utils::error::{AdvisorError, Result};

/// Checks a sample against the classifier's training domain. Pure and
/// deterministic; reports every out-of-range attribute so the user gets one
/// complete diagnosis instead of fixing attributes one at a time.
pub struct RangeValidator {
    ranges: AttributeRanges,
}

impl RangeValidator {
    pub fn new(ranges: AttributeRanges) -> Self {
        Self { ranges }
    }

    /// All violations, in attribute order. Empty means the sample is valid.
    /// Bounds are inclusive on both ends.
    pub fn check(&self, sample: &SoilSample) -> Vec<RangeViolation> {
        let checks = [
            ("nitrogen", sample.nitrogen, self.ranges.nitrogen),
            ("phosphorus", sample.phosphorus, self.ranges.phosphorus),
            ("potassium", sample.potassium, self.ranges.potassium),
            ("acidity", sample.acidity, self.ranges.acidity),
            ("rainfall", sample.rainfall, self.ranges.rainfall),
        ];

        checks
            .into_iter()
            .filter(|(_, value, bounds)| !bounds.contains(*value))
            .map(|(attribute, value, bounds)| RangeViolation {
                attribute,
                value,
                min: bounds.min,
                max: bounds.max,
            })
            .collect()
    }

    pub fn validate(&self, sample: &SoilSample) -> Result<()> {
        let violations = self.check(sample);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(AdvisorError::OutOfRange { violations })
        }
    }
}
