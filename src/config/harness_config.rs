use crate::core::ConfigProvider;
use crate::utils::error::{HarnessError, Result};
use crate::utils::resources::resource_file_path;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_HEALTH_CHECK_FILE: &str = "config/healthCheckEndpoint.properties";
pub const DEFAULT_EXPIRY_WEEKS: i64 = 2;
pub const MAX_EXPIRY_WEEKS: i64 = 520;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    pub target: TargetConfig,
    pub resources: ResourcesConfig,
    pub deployment: Option<DeploymentConfig>,
    pub fixtures: Option<FixturesConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    pub root: String,
    pub health_check_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeploymentConfig {
    #[serde(default)]
    pub services_not_deployed: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixturesConfig {
    pub expiry_weeks: Option<i64>,
}

impl HarnessConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| HarnessError::ConfigError {
            message: format!("Cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HarnessError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BASE_URL})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HarnessError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_url("target.base_url", &self.target.base_url)?;
        crate::utils::validation::validate_path("resources.root", &self.resources.root)?;

        if let Some(file) = &self.resources.health_check_file {
            crate::utils::validation::validate_path("resources.health_check_file", file)?;
        }

        if let Some(weeks) = self.fixtures.as_ref().and_then(|f| f.expiry_weeks) {
            crate::utils::validation::validate_range(
                "fixtures.expiry_weeks",
                weeks,
                1,
                MAX_EXPIRY_WEEKS,
            )?;
        }

        Ok(())
    }

    /// 資源目錄下的檔案路徑
    pub fn resource_file_path(&self, folder: &str, file_name: &str) -> PathBuf {
        resource_file_path(&self.resources.root, folder, file_name)
    }

    pub fn expiry_weeks(&self) -> i64 {
        self.fixtures
            .as_ref()
            .and_then(|f| f.expiry_weeks)
            .unwrap_or(DEFAULT_EXPIRY_WEEKS)
    }
}

impl ConfigProvider for HarnessConfig {
    fn base_url(&self) -> &str {
        &self.target.base_url
    }

    fn health_check_file(&self) -> PathBuf {
        let file = self
            .resources
            .health_check_file
            .as_deref()
            .unwrap_or(DEFAULT_HEALTH_CHECK_FILE);
        Path::new(&self.resources.root).join(file)
    }

    fn services_not_deployed(&self) -> &[String] {
        self.deployment
            .as_ref()
            .map(|d| d.services_not_deployed.as_slice())
            .unwrap_or(&[])
    }
}

impl Validate for HarnessConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
