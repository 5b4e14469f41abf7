//! Layered settings: defaults, a TOML file, then `BRANDRETURNS_` environment variables.

use std::{path::Path, time::Duration};

use brandreturns_model::{ModelError, StudyConfig};
use brandreturns_traits::ExchangeAllowlist;
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "brandreturns.toml";

/// Prefix of environment overrides, e.g. `BRANDRETURNS_STUDY__END_YEAR`.
pub const ENV_PREFIX: &str = "BRANDRETURNS";

/// Errors that can occur while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A source could not be read or deserialized.
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    /// The loaded study configuration is unusable.
    #[error("invalid settings: {0}")]
    Invalid(#[from] ModelError),
}

/// Ticker lookup parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupSettings {
    /// One-column `Brand` CSV listing the brands to resolve.
    pub brand_list: std::path::PathBuf,
    /// Milliseconds to wait between search requests.
    pub pause_ms: u64,
    /// Exchanges accepted first, in order.
    pub preferred_exchanges: Vec<String>,
    /// Exchanges accepted when no preferred listing exists.
    pub fallback_exchanges: Vec<String>,
}

impl Default for LookupSettings {
    fn default() -> Self {
        let allowlist = ExchangeAllowlist::default();
        Self {
            brand_list: "BrandData/unique_companies.csv".into(),
            pause_ms: 500,
            preferred_exchanges: allowlist.preferred,
            fallback_exchanges: allowlist.fallback,
        }
    }
}

impl LookupSettings {
    /// Pause between search requests.
    #[must_use]
    pub const fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// Exchange allowlist built from the configured codes.
    #[must_use]
    pub fn allowlist(&self) -> ExchangeAllowlist {
        ExchangeAllowlist {
            preferred: self.preferred_exchanges.clone(),
            fallback: self.fallback_exchanges.clone(),
        }
    }
}

/// All settings of the command-line tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Comparison study parameters.
    pub study: StudyConfig,
    /// Ticker lookup parameters.
    pub lookup: LookupSettings,
}

impl Settings {
    /// Load settings from `path`, or from [`DEFAULT_SETTINGS_FILE`] if it
    /// exists, then apply environment overrides.
    ///
    /// # Errors
    /// Returns `SettingsError::Load` if an explicitly given file is missing
    /// or any source is malformed, and `SettingsError::Invalid` if the
    /// resulting study configuration fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_from(path, None)
    }

    /// Like [`Settings::load`], reading overrides from `vars` instead of the
    /// process environment when given.
    ///
    /// # Errors
    /// See [`Settings::load`].
    pub fn load_from(
        path: Option<&Path>,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, SettingsError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Path::new(DEFAULT_SETTINGS_FILE)).required(false),
        };
        let env = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(vars);

        let settings: Self =
            config::Config::builder().add_source(file).add_source(env).build()?.try_deserialize()?;
        settings.study.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use brandreturns_primitives::{ReturnFormula, WindowConvention};

    use super::*;

    fn write_settings(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("brandreturns-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_without_sources() {
        let settings = Settings::load_from(None, Some(config::Map::new())).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.lookup.pause(), Duration::from_millis(500));
        assert_eq!(settings.lookup.allowlist(), ExchangeAllowlist::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let path = write_settings(
            "file.toml",
            r#"
[study]
start_year = 2019
end_year = 2021
cohort_size = 5
window = "calendar-year"
formula = "open-to-close"

[study.benchmark]
symbol = "^NDX"
label = "Nasdaq 100"

[study.series]
most_improved_exact = false

[lookup]
pause_ms = 0
"#,
        );
        let settings = Settings::load_from(Some(&path), Some(config::Map::new())).unwrap();

        assert_eq!(settings.study.years(), 2019..=2021);
        assert_eq!(settings.study.cohort_size, 5);
        assert_eq!(settings.study.window, WindowConvention::CalendarYear);
        assert_eq!(settings.study.formula, ReturnFormula::OpenToClose);
        assert_eq!(settings.study.benchmark.label, "Nasdaq 100");
        assert!(!settings.study.series.most_improved_exact);
        assert!(settings.study.series.top_brands);
        assert_eq!(settings.study.rankings_dir, PathBuf::from("BrandData"));
        assert!(settings.lookup.pause().is_zero());
    }

    #[test]
    fn environment_overrides_file() {
        let path = write_settings("env.toml", "[study]\nend_year = 2021\nstart_year = 2020\n");
        let vars = config::Map::from([
            ("BRANDRETURNS_STUDY__END_YEAR".to_string(), "2023".to_string()),
            ("BRANDRETURNS_STUDY__OUTPUT_DIR".to_string(), "charts".to_string()),
        ]);
        let settings = Settings::load_from(Some(&path), Some(vars)).unwrap();

        assert_eq!(settings.study.years(), 2020..=2023);
        assert_eq!(settings.study.output_dir, PathBuf::from("charts"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = Settings::load_from(Some(Path::new("/nonexistent/brandreturns.toml")), None)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Load(_)));
    }

    #[test]
    fn invalid_study_rejected() {
        let path = write_settings("invalid.toml", "[study]\ncohort_size = 0\n");
        let err = Settings::load_from(Some(&path), Some(config::Map::new())).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(ModelError::InvalidConfig(_))));
    }
}
