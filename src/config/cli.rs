use crate::config::toml_config::TomlConfig;
use crate::core::engine::DEFAULT_PROMPT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "isprime", version)]
#[command(about = "Reads one integer from standard input and reports whether it is prime")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Prompt shown before reading the number
    #[arg(long)]
    pub prompt: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Fills unset flags from the config file, if one was given.
    pub fn merge_file(&mut self) -> Result<()> {
        let Some(path) = self.config.as_deref() else {
            return Ok(());
        };
        validate_path("config", path)?;

        let file = TomlConfig::from_file(path)?;
        file.validate()?;
        self.merge(&file);
        Ok(())
    }

    pub fn merge(&mut self, file: &TomlConfig) {
        if self.prompt.is_none() {
            self.prompt = file.prompt_text().map(str::to_string);
        }
        if !self.verbose {
            self.verbose = file.verbose().unwrap_or(false);
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(prompt) = &self.prompt {
            validate_non_empty_string("prompt", prompt)?;
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["isprime"]);
        assert_eq!(config.prompt(), DEFAULT_PROMPT);
        assert!(!config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from(["isprime", "--prompt", "n> ", "-v"]);
        assert_eq!(config.prompt(), "n> ");
        assert!(config.verbose());
    }

    #[test]
    fn test_blank_prompt_rejected() {
        let config = CliConfig::parse_from(["isprime", "--prompt", " "]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_flag_overrides_file() {
        let file = TomlConfig::from_toml_str(
            "[prompt]\ntext = \"from file: \"\n[logging]\nverbose = true\n",
        )
        .unwrap();

        let mut config = CliConfig::parse_from(["isprime", "--prompt", "from flag: "]);
        config.merge(&file);
        assert_eq!(config.prompt(), "from flag: ");
        assert!(config.verbose());

        let mut config = CliConfig::parse_from(["isprime"]);
        config.merge(&file);
        assert_eq!(config.prompt(), "from file: ");
    }

    #[test]
    fn test_merge_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[prompt]\ntext = \"Value: \"\n").unwrap();

        let path = temp_file.path().to_str().unwrap().to_string();
        let mut config = CliConfig::parse_from(["isprime", "--config", path.as_str()]);
        config.merge_file().unwrap();
        assert_eq!(config.prompt(), "Value: ");
        assert!(!config.verbose());
    }

    #[test]
    fn test_merge_file_rejects_blank_prompt() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[prompt]\ntext = \"\"\n").unwrap();

        let path = temp_file.path().to_str().unwrap().to_string();
        let mut config = CliConfig::parse_from(["isprime", "-c", path.as_str()]);
        assert!(config.merge_file().is_err());
    }
}
