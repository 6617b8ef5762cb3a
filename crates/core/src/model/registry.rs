//! Process-wide model lifecycle.
//!
//! Artifacts are loaded once at startup. The outcome is either a ready set of
//! models shared read-only by every request, or a permanent failure that
//! makes estimation requests answer "not ready".

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use super::{ForestRegressor, LabelEncoder, Regressor};
use crate::error::CoreError;
use crate::tariff::Weather;

pub const PROJECT_TYPE_ENCODER_FILE: &str = "encoder_jenis_proyek.json";
pub const WEATHER_ENCODER_FILE: &str = "encoder_cuaca.json";
pub const DURATION_MODEL_FILE: &str = "model_durasi.json";
pub const CREW_MODEL_FILE: &str = "model_pekerja.json";

/// Everything the estimator needs from the training pipeline.
pub struct EstimationModels {
    pub project_types: LabelEncoder,
    pub weather: LabelEncoder,
    pub duration: Box<dyn Regressor>,
    pub crew: Box<dyn Regressor>,
}

impl fmt::Debug for EstimationModels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EstimationModels")
            .field("project_types", &self.project_types)
            .field("weather", &self.weather)
            .finish_non_exhaustive()
    }
}

impl EstimationModels {
    /// Assemble a model set, checking that every weather label the encoder
    /// accepts has a multiplier in the tariff.
    pub fn new(
        project_types: LabelEncoder,
        weather: LabelEncoder,
        duration: Box<dyn Regressor>,
        crew: Box<dyn Regressor>,
    ) -> Result<Self, CoreError> {
        if let Some(unpriced) = weather
            .known_categories()
            .iter()
            .find(|label| Weather::from_label(label).is_none())
        {
            return Err(CoreError::ModelLoad(format!(
                "weather encoder knows '{unpriced}' but no multiplier exists for it"
            )));
        }

        Ok(Self {
            project_types,
            weather,
            duration,
            crew,
        })
    }

    /// Load the four exported artifacts from `dir`.
    pub fn load(dir: &Path) -> Result<Self, CoreError> {
        let project_types = LabelEncoder::load(&dir.join(PROJECT_TYPE_ENCODER_FILE))?;
        let weather = LabelEncoder::load(&dir.join(WEATHER_ENCODER_FILE))?;
        let duration = ForestRegressor::load(&dir.join(DURATION_MODEL_FILE))?;
        let crew = ForestRegressor::load(&dir.join(CREW_MODEL_FILE))?;

        Self::new(project_types, weather, Box::new(duration), Box::new(crew))
    }
}

#[derive(Debug, Clone)]
pub enum ModelRegistry {
    Ready(Arc<EstimationModels>),
    Failed { reason: String },
}

impl ModelRegistry {
    pub fn ready(models: EstimationModels) -> Self {
        Self::Ready(Arc::new(models))
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    /// Load from `dir`, capturing any failure as the permanent state.
    pub fn load_from_dir(dir: &Path) -> Self {
        match EstimationModels::load(dir) {
            Ok(models) => Self::ready(models),
            Err(e) => Self::failed(e.to_string()),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The loaded models, or [`CoreError::NotReady`] if loading failed.
    pub fn models(&self) -> Result<&EstimationModels, CoreError> {
        match self {
            Self::Ready(models) => Ok(models.as_ref()),
            Self::Failed { reason } => Err(CoreError::NotReady(format!(
                "estimation models are not loaded ({reason})"
            ))),
        }
    }
}
