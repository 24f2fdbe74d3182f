use anyhow::Context;
use hip_config::HipConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env`), then apply `--models-dir`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<HipConfig> {
    let config = HipConfig::load_with_dotenv().context("failed to load hipcalc configuration")?;
    Ok(apply_flags(config, flags))
}

fn apply_flags(config: HipConfig, flags: &GlobalFlags) -> HipConfig {
    match &flags.models_dir {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "models dir overridden by flag");
            config.with_models_dir(dir)
        }
        None => config,
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use hip_config::HipConfig;

    use super::apply_flags;
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

    fn flags(models_dir: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            color: ColorMode::Never,
            quiet: false,
            models_dir: models_dir.map(PathBuf::from),
        }
    }

    #[test]
    fn models_dir_flag_wins() {
        let config = apply_flags(HipConfig::default(), &flags(Some("/srv/hip/models")));
        assert_eq!(config.models.dir, Path::new("/srv/hip/models"));
    }

    #[test]
    fn config_kept_without_flag() {
        let config = apply_flags(HipConfig::default(), &flags(None));
        assert_eq!(config.models.dir, Path::new("models"));
    }
}
