use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "applicant-ledger")]
#[command(about = "Interactive command interpreter for tracking job applicants")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Run a single command line and exit
    #[arg(short = 'e', long = "command")]
    pub command: Option<String>,

    #[arg(long, help = "Print parsed commands as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the configuration file (if any), applies flag overrides and validates the result.
    pub fn load_app_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        // 命令列參數優先於設定檔
        if self.json {
            config.output.format = "json".to_string();
        }
        if self.verbose {
            config.logging.verbose = true;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nformat = \"text\"\n")
            .unwrap();

        let cli = CliConfig::parse_from([
            "applicant-ledger",
            "--config",
            temp_file.path().to_str().unwrap(),
            "--json",
            "-v",
        ]);
        let config = cli.load_app_config().unwrap();
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.logging.verbose);
    }

    #[test]
    fn test_defaults_without_file() {
        let cli = CliConfig::parse_from(["applicant-ledger", "-e", "list"]);
        assert_eq!(cli.command.as_deref(), Some("list"));
        let config = cli.load_app_config().unwrap();
        assert_eq!(config.output_format(), OutputFormat::Text);
    }
}
