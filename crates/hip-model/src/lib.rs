//! # hip-model
//!
//! Post-operative hip pain prediction: a trained regressor when its
//! artifacts are usable, a closed-form heuristic ("demo mode") otherwise.
//!
//! ## Pieces
//!
//! - [`artifact`]: the `Preprocessor` / `Regressor` capability traits
//! - [`preprocessor`], [`regressor`]: the JSON artifact formats
//! - [`store`]: the on-disk artifact store and run-mode detection
//! - [`predictor`]: the model-backed predictor
//! - [`heuristic`]: the demo-mode formula
//! - [`policy`]: the predict-or-fallback decision
//!
//! ```no_run
//! use hip_core::enums::Timepoint;
//! use hip_core::record::PatientRecord;
//! use hip_model::{ArtifactStore, PredictionPolicy};
//!
//! let policy = PredictionPolicy::new(ArtifactStore::new("models", "json"));
//! let mode = policy.detect_mode();
//! let record = PatientRecord::new().with("AgePreOp", 68).with("Pre-Op Pain", 7);
//! let prediction = policy.predict(&record, Timepoint::T3, mode);
//! println!("{} ({})", prediction.score, prediction.level);
//! ```

pub mod artifact;
pub mod error;
pub mod heuristic;
pub mod policy;
pub mod predictor;
pub mod preprocessor;
pub mod regressor;
pub mod store;

pub use artifact::{ArtifactPair, Preprocessor, Regressor};
pub use error::{ModelError, PredictError};
pub use policy::PredictionPolicy;
pub use predictor::ModelPredictor;
pub use store::{ArtifactSource, ArtifactStore};
