//! 日志初始化模块
//!
//! 统一初始化 tracing 日志输出。
//! 优先使用环境变量 RUST_LOG，否则使用配置或命令行指定的级别。

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// 构建日志过滤器
///
/// RUST_LOG 存在时优先生效，配置级别无效时回退到 info。
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化全局日志订阅者
///
/// 进程内只能初始化一次，重复调用返回错误。
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = build_filter(&config.log_level);

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if config.json_logs {
        registry
            .with(fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_ansi(true))
            .try_init()
    };

    result.map_err(|e| anyhow!("初始化日志失败: {}", e))?;

    tracing::debug!(
        level = %config.log_level,
        json = config.json_logs,
        "日志已初始化"
    );
    Ok(())
}
