//! 数据库基础设施

use sqlx::{
    postgres::{PgConnectOptions, PgPool, PgPoolOptions},
    Error,
};
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseParams;

pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// 使用连接串连接
    pub async fn new(database_url: &str) -> Result<Self, Error> {
        info!("连接数据库: {}", redact(database_url));

        let pool = pool_options().connect(database_url).await?;
        Ok(Self { pool })
    }

    /// 使用 `BJB_DB_*` 分项参数连接
    pub async fn from_params(params: &DatabaseParams) -> Result<Self, Error> {
        info!(
            "连接数据库: {}:{}/{}",
            params.host.as_deref().unwrap_or("localhost"),
            params.port,
            params.name.as_deref().unwrap_or("")
        );

        let pool = pool_options().connect_with(connect_options(params)).await?;
        Ok(Self { pool })
    }

    pub fn into_pool(self) -> PgPool {
        self.pool
    }
}

fn pool_options() -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(60))
}

/// 未设置的参数沿用 libpq 默认值（`PG*` 环境变量）
fn connect_options(params: &DatabaseParams) -> PgConnectOptions {
    let mut options = PgConnectOptions::new().port(params.port);
    if let Some(host) = &params.host {
        options = options.host(host);
    }
    if let Some(name) = &params.name {
        options = options.database(name);
    }
    if let Some(user) = &params.user {
        options = options.username(user);
    }
    if let Some(password) = &params.password {
        options = options.password(password);
    }
    options
}

/// 隐藏连接串中的密码
fn redact(database_url: &str) -> String {
    match (database_url.find("://"), database_url.rfind('@')) {
        (Some(scheme), Some(at)) if at > scheme => {
            let credentials = &database_url[scheme + 3..at];
            match credentials.find(':') {
                Some(colon) => format!(
                    "{}{}:***{}",
                    &database_url[..scheme + 3],
                    &credentials[..colon],
                    &database_url[at..]
                ),
                None => database_url.to_string(),
            }
        }
        _ => database_url.to_string(),
    }
}
