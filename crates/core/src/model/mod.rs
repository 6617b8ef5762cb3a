//! Fitted model artifacts consumed by the estimator.
//!
//! The training pipeline runs offline and exports two label encoders
//! (project type, weather) and two tree-ensemble regressors (duration, crew
//! size) as JSON. This module loads them and exposes the narrow interfaces
//! the pricing pipeline needs.

pub mod encoder;
pub mod forest;
pub mod registry;

pub use encoder::LabelEncoder;
pub use forest::ForestRegressor;
pub use registry::{EstimationModels, ModelRegistry};

/// Number of features every regressor is trained on.
pub const FEATURE_COUNT: usize = 5;

/// Model input, in training column order:
/// `[project_type_code, area_m2, detail_level, weather_code, distance_km]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(
        project_type_code: u32,
        area_m2: f64,
        detail_level: u8,
        weather_code: u32,
        distance_km: f64,
    ) -> Self {
        Self([
            f64::from(project_type_code),
            area_m2,
            f64::from(detail_level),
            f64::from(weather_code),
            distance_km,
        ])
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

/// A fitted regression model.
pub trait Regressor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> f64;
}
