//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::path::Path;

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    /// 日志输出格式：json（结构化）或 pretty（人类可读）
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    /// 是否输出 JSON 格式日志
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// 导出配置
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// 默认导出格式：json 或 yaml
    pub format: String,
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            pretty: true,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub logging: LoggingConfig,
    pub export: ExportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            logging: LoggingConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. 内置默认值
    /// 2. config/default.toml（默认配置）
    /// 3. config/{environment}.toml（环境特定配置）
    /// 4. 环境变量（BLOG_ 前缀，双下划线分隔层级，如 BLOG_EXPORT__FORMAT -> export.format）
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
        Self::load_from(Path::new(&config_dir))
    }

    /// 从指定目录加载配置，环境变量取自当前进程
    pub fn load_from(config_dir: &Path) -> Result<Self, ConfigError> {
        Self::load_with_vars(config_dir, std::env::vars().collect())
    }

    /// 使用给定的环境变量快照加载配置
    ///
    /// `vars` 同时决定环境名（BLOG_ENV）和 BLOG_ 前缀的覆盖项
    pub fn load_with_vars(
        config_dir: &Path,
        vars: Map<String, String>,
    ) -> Result<Self, ConfigError> {
        let env = vars
            .get("BLOG_ENV")
            .cloned()
            .unwrap_or_else(|| "development".to_string());
        let defaults = Self::default();

        let builder = Config::builder()
            .set_default("environment", env.clone())?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?
            .set_default("export.format", defaults.export.format)?
            .set_default("export.pretty", defaults.export.pretty)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join(format!("{}.toml", env))).required(false))
            .add_source(
                Environment::with_prefix("BLOG")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars)),
            );

        builder.build()?.try_deserialize()
    }
}
