use crate::utils::error::Result;
use crate::utils::validation::{
    validate_max_length, validate_non_empty_string, validate_one_of, validate_single_line,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern"));

const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];
const MAX_PROMPT_LENGTH: usize = 32;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub prompt: String,
    pub banner: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            banner: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub json: bool,
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${LEDGER_PROMPT})，未設定者保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.output.format == "json" {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    pub fn prompt(&self) -> &str {
        &self.session.prompt
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("session.prompt", &self.session.prompt)?;
        validate_max_length("session.prompt", &self.session.prompt, MAX_PROMPT_LENGTH)?;
        validate_single_line("session.prompt", &self.session.prompt)?;
        if let Some(banner) = &self.session.banner {
            validate_non_empty_string("session.banner", banner)?;
        }
        validate_one_of("output.format", &self.output.format, &OUTPUT_FORMATS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AppError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.prompt(), "> ");
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[session]
prompt = "ledger> "
banner = "Applicant ledger ready"

[output]
format = "json"

[logging]
json = true
verbose = true
"#;
        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.prompt(), "ledger> ");
        assert_eq!(config.session.banner.as_deref(), Some("Applicant ledger ready"));
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.logging.json && config.logging.verbose);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("APPLICANT_LEDGER_TEST_PROMPT", "hr> ");
        let config =
            AppConfig::from_toml_str("[session]\nprompt = \"${APPLICANT_LEDGER_TEST_PROMPT}\"\n")
                .unwrap();
        assert_eq!(config.prompt(), "hr> ");
        std::env::remove_var("APPLICANT_LEDGER_TEST_PROMPT");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let config =
            AppConfig::from_toml_str("[session]\nprompt = \"${APPLICANT_LEDGER_UNSET_VAR}\"\n")
                .unwrap();
        assert_eq!(config.prompt(), "${APPLICANT_LEDGER_UNSET_VAR}");
    }

    #[test]
    fn test_invalid_output_format_fails_validation() {
        let config = AppConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AppError::InvalidConfigValue { ref field, .. } if field == "output.format"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = AppConfig::from_toml_str("[session\nprompt = 1").unwrap_err();
        assert!(matches!(err, AppError::ConfigParseError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[session]\nprompt = \"file> \"\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.prompt(), "file> ");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AppConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }
}
