//! 日志初始化模块
//!
//! 所有二进制通过单一入口点配置 tracing 日志，保证格式一致。
//! 日志统一输出到 stderr，stdout 留给命令的实际输出（如导出的 JSON）。

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// 构建环境过滤器
///
/// 优先使用 RUST_LOG 环境变量，否则使用配置的日志级别，配置非法时回退到 info
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    env_filter_from(rust_log.as_deref(), config)
}

/// 按 RUST_LOG 值、配置级别、info 的顺序构建过滤器
pub fn env_filter_from(rust_log: Option<&str>, config: &LoggingConfig) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(&config.level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// 初始化 tracing 日志
///
/// 重复初始化（例如测试中多次调用）返回错误而不是 panic
pub fn init(config: &LoggingConfig) -> Result<()> {
    let fmt_layer = if config.is_json() {
        fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_ansi(true)
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer)
        .try_init()?;

    debug!(level = %config.level, format = %config.format, "Logging initialized");
    Ok(())
}
