use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read settings from the config file or PROFITS__ environment: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Month files cannot be located: `{key}` {reason}")]
    InvalidDataSource {
        key: &'static str,
        reason: &'static str,
    },
}
