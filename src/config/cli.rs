use crate::config::toml_config::DemoConfig;
use crate::core::runner::OutputFormat;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "syntax-tour")]
#[command(about = "A guided tour of basic Rust syntax")]
#[command(version)]
pub struct CliConfig {
    /// Path to a TOML file overriding the demonstration values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of sequence terms to print
    #[arg(long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Also run the collection, object and struct examples
    #[arg(long)]
    pub extended: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 合併設定：預設值 < TOML 檔案 < 命令列參數
    pub fn resolve(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::from_file(path)?,
            None => DemoConfig::default(),
        };

        if let Some(length) = self.length {
            tracing::debug!("🔧 Sequence length overridden to: {}", length);
            config.sequence_length = length;
        }
        if self.extended {
            config.extended = true;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_arguments_gives_fixed_demo() {
        let cli = CliConfig::parse_from(["syntax-tour"]);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.resolve().unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "sequence_length = 4\ngreeting_name = \"Ferris\"").unwrap();

        let cli = CliConfig::parse_from([
            "syntax-tour",
            "--config",
            file.path().to_str().unwrap(),
            "--length",
            "-2",
            "--extended",
            "--format",
            "json",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.sequence_length, -2);
        assert_eq!(config.greeting_name, "Ferris");
        assert!(config.extended);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliConfig::parse_from(["syntax-tour", "--config", "/nonexistent/tour.toml"]);
        assert!(cli.resolve().is_err());
    }
}
