use crate::core::collections::MAX_SQUARE_OPERAND;
use crate::core::sequence::MAX_SEQUENCE_LENGTH;
use crate::core::ConfigProvider;
use crate::domain::model::Profile;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_NUMBERS: usize = 1_000;
pub const MAX_NUMBER_MAGNITUDE: i64 = 1_000_000_000;
pub const MAX_SQUARE_SPAN: i64 = 10_000;

/// 示範內容的設定，檔案中所有欄位皆可省略
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub sequence_length: i64,
    pub square_start: i64,
    pub square_end: i64,
    pub numbers: Vec<i64>,
    pub greeting_name: String,
    pub calculator_name: String,
    pub extended: bool,
    pub profile: Profile,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sequence_length: 10,
            square_start: 1,
            square_end: 5,
            numbers: vec![1, 2, 3, 4, 5],
            greeting_name: "World".to_string(),
            calculator_name: "My Calculator".to_string(),
            extended: false,
            profile: Profile::default(),
        }
    }
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading config from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${DEMO_NAME})，未設定的保持原樣
    ///
    /// 在解析前直接替換原始文字：值不會被跳脫，含 `"` 或 `\` 時可能造成
    /// TOML 解析失敗；註解中的 `${VAR}` 也會被替換。
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                tracing::warn!("Environment variable {} is not set", var_name);
                format!("${{{}}}", var_name)
            })
        });

        Ok(result.into_owned())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_at_most("sequence_length", self.sequence_length, MAX_SEQUENCE_LENGTH)?;

        validation::validate_range(
            "square_start",
            self.square_start,
            -MAX_SQUARE_OPERAND,
            MAX_SQUARE_OPERAND,
        )?;
        validation::validate_range(
            "square_end",
            self.square_end,
            -MAX_SQUARE_OPERAND,
            MAX_SQUARE_OPERAND,
        )?;
        validation::validate_ordered(
            "square_start",
            self.square_start,
            "square_end",
            self.square_end,
        )?;
        validation::validate_at_most(
            "square_end",
            self.square_end - self.square_start,
            MAX_SQUARE_SPAN,
        )?;

        validation::validate_max_len("numbers", &self.numbers, MAX_NUMBERS)?;
        for (i, n) in self.numbers.iter().enumerate() {
            validation::validate_range(
                &format!("numbers[{}]", i),
                *n,
                -MAX_NUMBER_MAGNITUDE,
                MAX_NUMBER_MAGNITUDE,
            )?;
        }

        validation::validate_non_empty_string("greeting_name", &self.greeting_name)?;
        validation::validate_non_empty_string("calculator_name", &self.calculator_name)?;
        validation::validate_non_empty_string("profile.name", &self.profile.name)?;
        validation::validate_non_empty_string("profile.city", &self.profile.city)?;

        Ok(())
    }
}

impl ConfigProvider for DemoConfig {
    fn sequence_length(&self) -> i64 {
        self.sequence_length
    }

    fn square_range(&self) -> (i64, i64) {
        (self.square_start, self.square_end)
    }

    fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    fn greeting_name(&self) -> &str {
        &self.greeting_name
    }

    fn calculator_name(&self) -> &str {
        &self.calculator_name
    }

    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn extended(&self) -> bool {
        self.extended
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
