use super::toml_config::TomlConfig;
use super::CliConfig;
use crate::app::runner::DemoKind;
use crate::core::pricing::MAX_MARKUP_PERCENT;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_range, Validate};

impl CliConfig {
    /// Loads the file named by `--config` (or the built-in demo) and applies CLI overrides.
    pub fn load(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(markup) = self.markup_percent {
            tracing::info!("🔧 Markup overridden to: {}%", markup);
            config.pricing.markup_percent = markup;
        }

        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(markup) = self.markup_percent {
            validate_range("--markup-percent", markup, 0, MAX_MARKUP_PERCENT)?;
        }

        // the facade has no report to serialize
        if self.json && self.demo == DemoKind::Facade {
            return Err(DemoError::ConfigError {
                message: "--json only applies to the composite demo, not --demo facade"
                    .to_string(),
            });
        }

        Ok(())
    }
}
