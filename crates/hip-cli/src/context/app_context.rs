use hip_config::HipConfig;
use hip_core::enums::Timepoint;
use hip_model::{ArtifactStore, PredictionPolicy};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: HipConfig,
    pub store: ArtifactStore,
    pub policy: PredictionPolicy<ArtifactStore>,
}

impl AppContext {
    /// Build the artifact store and prediction policy from config.
    ///
    /// Nothing is read from disk here; artifacts are loaded per prediction.
    #[must_use]
    pub fn init(config: HipConfig) -> Self {
        let store = ArtifactStore::new(&config.models.dir, config.models.extension.clone());
        if !store.dir().is_dir() {
            tracing::debug!(
                dir = %store.dir().display(),
                "models directory not found; predictions will use demo mode"
            );
        }

        Self {
            policy: PredictionPolicy::new(store.clone()),
            store,
            config,
        }
    }

    /// `--timepoint` when given, else `general.default_timepoint`.
    #[must_use]
    pub fn timepoint(&self, flag: Option<Timepoint>) -> Timepoint {
        flag.unwrap_or(self.config.general.default_timepoint)
    }
}

#[cfg(test)]
mod tests {
    use hip_config::HipConfig;
    use hip_core::enums::{Mode, Timepoint};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::AppContext;

    #[test]
    fn missing_models_dir_is_demo_mode() {
        let temp = TempDir::new().expect("tempdir should create");
        let config = HipConfig::default().with_models_dir(temp.path().join("absent"));
        let ctx = AppContext::init(config);

        assert_eq!(ctx.policy.detect_mode(), Mode::Demo);
        assert_eq!(ctx.store.dir(), temp.path().join("absent"));
    }

    #[test]
    fn timepoint_flag_overrides_default() {
        let mut config = HipConfig::default();
        config.general.default_timepoint = Timepoint::T5;
        let ctx = AppContext::init(config);

        assert_eq!(ctx.timepoint(None), Timepoint::T5);
        assert_eq!(ctx.timepoint(Some(Timepoint::T3)), Timepoint::T3);
    }
}
