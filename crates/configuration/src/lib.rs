use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
#[cfg(feature = "clap")]
pub mod cli;
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, DataSettings, ReportSettings};

/// Prefix for environment overrides, e.g. `PROFITS__DATA__DIRECTORY=/srv/profits`.
pub const ENV_PREFIX: &str = "PROFITS";

/// Loads the application configuration.
///
/// The TOML file at `path` is optional; every missing key falls back to its
/// default. Environment variables prefixed with `PROFITS__` take precedence
/// over the file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(directory = %config.data.directory.display(), "Configuration loaded.");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Commodity, Month};
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.data.extension, "txt");
        assert_eq!(config.report.month, Month::January);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[data]
directory = "fixtures/profits"

[report]
month = "March"
threshold = 250
compare = ["Oil", "Wheat"]
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.data.directory, Path::new("fixtures/profits"));
        assert_eq!(config.data.extension, "txt");
        assert_eq!(config.report.month, Month::March);
        assert_eq!(config.report.threshold, 250);
        assert_eq!(config.report.compare, (Commodity::Oil, Commodity::Wheat));
        assert_eq!(config.report.streak_commodity, Commodity::Silver);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[data]\nextension = \"\"").unwrap();
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::InvalidDataSource { .. })
        ));
    }
}
