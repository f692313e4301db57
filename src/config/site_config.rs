use crate::core::ConfigProvider;
use crate::utils::error::{FolioError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub source: SourceSection,
    pub render: RenderSection,
    pub publish: PublishSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub name: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub records_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSection {
    pub output_formats: Vec<String>,
    pub template_override: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishSection {
    pub output_path: String,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FolioError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_BASE_URL})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        result.to_string()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("site.name", &self.site.name)?;
        validation::validate_base_url("site.base_url", &self.site.base_url)?;
        validation::validate_path("source.records_file", &self.source.records_file)?;
        validation::validate_path("publish.output_path", &self.publish.output_path)?;
        validation::validate_output_formats("render.output_formats", &self.render.output_formats)?;
        Ok(())
    }
}

impl ConfigProvider for SiteConfig {
    fn base_url(&self) -> &str {
        &self.site.base_url
    }

    fn records_file(&self) -> &str {
        &self.source.records_file
    }

    fn output_path(&self) -> &str {
        &self.publish.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.render.output_formats
    }

    fn template_override(&self) -> Option<&str> {
        self.render.template_override.as_deref()
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
