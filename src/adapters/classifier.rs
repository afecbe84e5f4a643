use crate::domain::model::FeatureVector;
use crate::domain::ports::CropClassifier;
use crate::utils::error::{AdvisorError, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One row of the model artifact: a class label and its feature centroid,
/// in the classifier's training feature order.
#[derive(Debug, Deserialize)]
struct CentroidRow {
    label: String,
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
    temperature: f64,
    humidity: f64,
    ph: f64,
    rainfall: f64,
}

#[derive(Debug, Clone)]
struct Centroid {
    label: String,
    features: [f64; 7],
}

/// Pre-trained nearest-centroid classifier over the seven agronomic features.
/// The artifact is loaded once at startup and treated as opaque data: the
/// label set is whatever it names, and prediction never invents a label.
pub struct CentroidClassifier {
    centroids: Vec<Centroid>,
    /// Per-feature value span across centroids, used to normalize distances.
    spans: [f64; 7],
}

impl CentroidClassifier {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| AdvisorError::ClassifierUnavailable {
            message: format!("cannot open model artifact '{}': {}", path.display(), e),
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut centroids = Vec::new();

        for row in csv_reader.deserialize::<CentroidRow>() {
            let row = row.map_err(|e| AdvisorError::ClassifierUnavailable {
                message: format!("malformed model artifact row: {}", e),
            })?;
            let features = [
                row.nitrogen,
                row.phosphorus,
                row.potassium,
                row.temperature,
                row.humidity,
                row.ph,
                row.rainfall,
            ];
            if row.label.trim().is_empty() {
                return Err(AdvisorError::ClassifierUnavailable {
                    message: "model artifact contains a row with an empty label".to_string(),
                });
            }
            if features.iter().any(|v| !v.is_finite()) {
                return Err(AdvisorError::ClassifierUnavailable {
                    message: format!(
                        "model artifact centroid for '{}' has a non-finite value",
                        row.label
                    ),
                });
            }
            centroids.push(Centroid {
                label: row.label,
                features,
            });
        }

        if centroids.is_empty() {
            return Err(AdvisorError::ClassifierUnavailable {
                message: "model artifact contains no classes".to_string(),
            });
        }

        let spans = feature_spans(&centroids);
        tracing::debug!("Loaded classifier artifact with {} classes", centroids.len());

        Ok(Self { centroids, spans })
    }
}

fn feature_spans(centroids: &[Centroid]) -> [f64; 7] {
    let mut spans = [1.0_f64; 7];
    for i in 0..7 {
        let min = centroids
            .iter()
            .map(|c| c.features[i])
            .fold(f64::INFINITY, f64::min);
        let max = centroids
            .iter()
            .map(|c| c.features[i])
            .fold(f64::NEG_INFINITY, f64::max);
        let span = max - min;
        // A degenerate feature carries no signal; leave its span at 1 so it
        // contributes nothing rather than dividing by zero.
        if span > f64::EPSILON {
            spans[i] = span;
        }
    }
    spans
}

impl CropClassifier for CentroidClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<String> {
        // Unreachable behind the range validator, but a direct caller must
        // get an error rather than a nonsense nearest-neighbour result.
        if !features.is_finite() {
            return Err(AdvisorError::ClassifierUnavailable {
                message: "feature vector contains non-finite values".to_string(),
            });
        }

        let input = features.as_array();
        let mut best: Option<(&Centroid, f64)> = None;

        for centroid in &self.centroids {
            let distance: f64 = input
                .iter()
                .zip(centroid.features.iter())
                .zip(self.spans.iter())
                .map(|((x, c), span)| {
                    let d = (x - c) / span;
                    d * d
                })
                .sum();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((centroid, distance)),
            }
        }

        // Non-empty by construction.
        let (centroid, distance) = best.ok_or_else(|| AdvisorError::ClassifierUnavailable {
            message: "classifier has no classes loaded".to_string(),
        })?;
        tracing::debug!(
            "Nearest class '{}' at normalized distance {:.4}",
            centroid.label,
            distance
        );
        Ok(centroid.label.clone())
    }

    fn labels(&self) -> Vec<String> {
        self.centroids.iter().map(|c| c.label.clone()).collect()
    }
}
