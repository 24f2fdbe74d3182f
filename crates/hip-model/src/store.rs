//! On-disk artifact store and run-mode detection.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use hip_core::enums::{Mode, Timepoint};
use hip_core::responses::{ArtifactStatus, StatusResponse};
use serde::de::DeserializeOwned;

use crate::artifact::ArtifactPair;
use crate::error::{ModelError, PredictError};
use crate::preprocessor::ColumnPreprocessor;
use crate::regressor::RegressorModel;

/// Where artifact pairs come from.
pub trait ArtifactSource {
    /// Load the pair for `timepoint`.
    ///
    /// # Errors
    ///
    /// [`PredictError::ArtifactsMissing`] when either half is absent,
    /// [`PredictError::PredictionUnavailable`] when a file cannot be read or
    /// decoded.
    fn load(&self, timepoint: Timepoint) -> Result<ArtifactPair, PredictError>;

    /// `Demo` unless every timepoint has a complete pair.
    fn mode(&self) -> Mode;
}

/// Artifacts stored as `{dir}/{code}_model.{ext}` and
/// `{dir}/{code}_preprocessor.{ext}`. Files are re-read on every load.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
    extension: String,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn model_path(&self, timepoint: Timepoint) -> PathBuf {
        self.dir
            .join(format!("{}_model.{}", timepoint.code(), self.extension))
    }

    #[must_use]
    pub fn preprocessor_path(&self, timepoint: Timepoint) -> PathBuf {
        self.dir
            .join(format!("{}_preprocessor.{}", timepoint.code(), self.extension))
    }

    #[must_use]
    pub fn artifact_status(&self, timepoint: Timepoint) -> ArtifactStatus {
        let model_path = self.model_path(timepoint);
        let preprocessor_path = self.preprocessor_path(timepoint);
        ArtifactStatus {
            timepoint,
            model_present: model_path.is_file(),
            model_path: model_path.display().to_string(),
            preprocessor_present: preprocessor_path.is_file(),
            preprocessor_path: preprocessor_path.display().to_string(),
        }
    }

    /// Full report for `hipcalc status`.
    #[must_use]
    pub fn status(&self) -> StatusResponse {
        StatusResponse {
            models_dir: self.dir.display().to_string(),
            models_dir_present: self.dir.is_dir(),
            mode: self.mode(),
            artifacts: Timepoint::ALL
                .iter()
                .map(|timepoint| self.artifact_status(*timepoint))
                .collect(),
        }
    }
}

impl ArtifactSource for ArtifactStore {
    fn load(&self, timepoint: Timepoint) -> Result<ArtifactPair, PredictError> {
        let model_path = self.model_path(timepoint);
        let preprocessor_path = self.preprocessor_path(timepoint);

        let missing = [&model_path, &preprocessor_path]
            .into_iter()
            .filter(|path| !path.is_file())
            .cloned()
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(PredictError::ArtifactsMissing { timepoint, missing });
        }

        tracing::debug!(
            %timepoint,
            model = %model_path.display(),
            preprocessor = %preprocessor_path.display(),
            "loading artifact pair"
        );

        let regressor: RegressorModel = read_json(&model_path)?;
        let preprocessor: ColumnPreprocessor = read_json(&preprocessor_path)?;
        Ok(ArtifactPair::new(preprocessor, regressor))
    }

    fn mode(&self) -> Mode {
        if !self.dir.is_dir() {
            return Mode::Demo;
        }
        let complete = Timepoint::ALL
            .iter()
            .all(|timepoint| self.artifact_status(*timepoint).is_complete());
        if complete { Mode::Trained } else { Mode::Demo }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let file = File::open(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ModelError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
