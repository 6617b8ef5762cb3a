//! Label encoder: a fitted mapping from a closed label set to integer codes.

use std::path::Path;

use serde::Deserialize;

use crate::error::CoreError;

/// On-disk shape of an exported encoder: `{"classes": ["a", "b", ...]}`.
///
/// The code of a label is its index in `classes`, exactly as it was at fit time.
#[derive(Debug, Deserialize)]
struct EncoderArtifact {
    classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Build an encoder from its class list. Order defines the codes.
    pub fn new<I, S>(classes: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes: Vec<String> = classes.into_iter().map(Into::into).collect();

        if classes.is_empty() {
            return Err(CoreError::ModelLoad("encoder has no classes".into()));
        }
        for (i, class) in classes.iter().enumerate() {
            if classes[..i].contains(class) {
                return Err(CoreError::ModelLoad(format!(
                    "encoder lists class '{class}' more than once"
                )));
            }
        }

        Ok(Self { classes })
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let artifact: EncoderArtifact = serde_json::from_str(json)
            .map_err(|e| CoreError::ModelLoad(format!("invalid encoder JSON: {e}")))?;
        Self::new(artifact.classes)
    }

    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CoreError::ModelLoad(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json(&json)
            .map_err(|e| CoreError::ModelLoad(format!("{}: {e}", path.display())))
    }

    /// Labels this encoder was fitted on.
    pub fn known_categories(&self) -> &[String] {
        &self.classes
    }

    /// Integer code for `label`, or `None` if the label was never seen at fit time.
    pub fn encode(&self, label: &str) -> Option<u32> {
        self.classes
            .iter()
            .position(|c| c == label)
            .and_then(|i| u32::try_from(i).ok())
    }
}
