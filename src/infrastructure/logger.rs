//! 日志基础设施

use tracing::debug;
use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// 初始化全局日志，`RUST_LOG` 优先于配置中的级别
    ///
    /// 重复初始化不会 panic，保留已有的订阅者。
    pub fn init(level: &str) -> bool {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        match tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
        {
            Ok(()) => true,
            Err(e) => {
                debug!("日志已初始化，跳过: {}", e);
                false
            }
        }
    }
}
