use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// 服务配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 产品目录配置
    pub catalog: CatalogConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

/// 产品来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    /// 内存或 JSON 文件
    #[default]
    Static,
    /// PostgreSQL `products` 表
    Database,
}

/// 产品目录配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub source: CatalogSource,
    /// 静态目录的 JSON 文件，缺省时目录为空
    pub products_file: Option<PathBuf>,
    /// 可被环境变量 `DATABASE_URL` 覆盖
    pub database_url: Option<String>,
    /// 分项连接参数，可由 `BJB_DB_*` 环境变量提供，优先于 `database_url`
    pub database: Option<DatabaseParams>,
}

pub const DEFAULT_DB_PORT: u16 = 5432;

/// PostgreSQL 分项连接参数
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseParams {
    pub host: Option<String>,
    #[serde(default = "default_db_port")]
    pub port: u16,
    pub name: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

fn default_db_port() -> u16 {
    DEFAULT_DB_PORT
}

impl DatabaseParams {
    /// 读取 `BJB_DB_NAME` / `BJB_DB_USER` / `BJB_DB_PASSWORD` / `BJB_DB_HOST` / `BJB_DB_PORT`
    ///
    /// 主机和库名都未设置时返回 `None`。
    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let host = var("BJB_DB_HOST");
        let name = var("BJB_DB_NAME");
        if host.is_none() && name.is_none() {
            return Ok(None);
        }

        let port = match var("BJB_DB_PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| ConfigError::Validation(format!("无效的 BJB_DB_PORT: {}", port)))?,
            None => DEFAULT_DB_PORT,
        };

        Ok(Some(Self {
            host,
            port,
            name,
            user: var("BJB_DB_USER"),
            password: var("BJB_DB_PASSWORD"),
        }))
    }
}

impl std::fmt::Debug for DatabaseParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 环境变量覆盖
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            self.catalog.database_url = Some(url);
        }
        if let Some(params) = DatabaseParams::from_lookup(&lookup)? {
            self.catalog.database = Some(params);
        }
        Ok(self)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时时间必须大于0".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        if self.catalog.source == CatalogSource::Database
            && self.catalog.database_url.is_none()
            && self.catalog.database.is_none()
        {
            return Err(ConfigError::Validation(
                "数据库目录需要 database_url、DATABASE_URL 或 BJB_DB_* 连接参数".to_string(),
            ));
        }

        Ok(())
    }

    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.http.bind_address, self.http.port)
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 从文件或默认值加载配置，并应用环境变量与校验
pub fn load_config() -> Result<Config, ConfigError> {
    let config_paths = ["config.toml", "./config/config.toml"];

    let config = match config_paths.iter().find(|path| Path::new(path).exists()) {
        Some(path) => {
            info!("从配置文件加载: {}", path);
            Config::load_from_file(path)?
        }
        None => {
            info!("未找到配置文件，使用默认配置");
            Config::default()
        }
    };

    let config = config.apply_env()?;
    config.validate()?;
    Ok(config)
}
