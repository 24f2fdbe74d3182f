use hip_config::HipConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &HipConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &HipConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let defaults = HipConfig::default();
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.models.dir == defaults.models.dir
        && config.models.extension == defaults.models.extension
        && has_single_underscore_key(&env_keys, "HIPCALC_MODELS")
    {
        warnings.push(
            "Models config appears default while HIPCALC_MODELS* env vars exist. Use double underscores (example: HIPCALC_MODELS__DIR)."
                .to_string(),
        );
    }

    if config.general.default_timepoint == defaults.general.default_timepoint
        && has_single_underscore_key(&env_keys, "HIPCALC_GENERAL")
    {
        warnings.push(
            "General config appears default while HIPCALC_GENERAL* env vars exist. Use double underscores (example: HIPCALC_GENERAL__DEFAULT_TIMEPOINT)."
                .to_string(),
        );
    }

    warnings
}

/// `HIPCALC_MODELS_DIR` style keys: the section prefix without the `__` nesting.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    let nested = format!("{prefix}__");
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key.starts_with(&nested))
}
