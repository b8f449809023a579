use crate::error::ConfigError;
use crate::settings::Config;
use std::path::PathBuf;

/// Command-line arguments shared by every subcommand that needs configuration.
#[derive(Debug, Clone, clap::Args)]
pub struct ConfigArgs {
    /// Path to the configuration file. A missing file means "use defaults".
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Overrides `data.directory` from the configuration.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

impl ConfigArgs {
    /// Loads the configuration file and applies the command-line overrides on top.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let mut config = crate::load_config(&self.config)?;
        if let Some(dir) = &self.data_dir {
            config.data.directory = dir.clone();
            config.validate()?;
        }
        Ok(config)
    }
}
