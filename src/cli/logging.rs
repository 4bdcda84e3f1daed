//! 日志过滤规则

use tracing_subscriber::EnvFilter;

/// -v 次数对应的过滤指令。未指定 -v 时使用 RUST_LOG，两者都没有时为 warn。
pub fn log_directive(verbose: u8, env: Option<&str>) -> String {
    match verbose {
        0 => env
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("warn")
            .to_string(),
        1 => "tracegraph=debug".to_string(),
        _ => "tracegraph=trace".to_string(),
    }
}

/// 构造日志过滤器，-v 优先于 RUST_LOG
pub fn log_filter(verbose: u8) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = log_directive(verbose, env.as_deref());
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"))
}
