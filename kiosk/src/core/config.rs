use std::str::FromStr;
use std::time::Duration;

/// Kiosk configuration
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (unset) | 日志目录 (按天滚动) |
/// | PAYMENT_DELAY_MS | 2000 | 模拟支付耗时(毫秒) |
/// | SEED_CATALOG | true | 启动时载入默认菜单 |
/// | ESTIMATED_WAIT | 15-20 min | 小票上的预计等待时间 |
///
/// # 示例
///
/// ```ignore
/// PAYMENT_DELAY_MS=500 cargo run -p kiosk -- --query '?mesa=5'
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 运行环境: development | staging | production
    pub environment: String,
    /// tracing max level
    pub log_level: String,
    /// Rolling log file directory; stdout when unset or missing
    pub log_dir: Option<String>,
    /// 模拟支付耗时 (毫秒)
    pub payment_delay_ms: u64,
    /// Start with the built-in catalog instead of an empty one
    pub seed_catalog: bool,
    /// Shown on the order ticket
    pub estimated_wait: String,
}

/// Parsed environment variable, or `default` when unset or unparsable
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置或无法解析的变量使用默认值
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: env_or("ENVIRONMENT", defaults.environment),
            log_level: env_or("LOG_LEVEL", defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            payment_delay_ms: env_or("PAYMENT_DELAY_MS", defaults.payment_delay_ms),
            seed_catalog: env_or("SEED_CATALOG", defaults.seed_catalog),
            estimated_wait: env_or("ESTIMATED_WAIT", defaults.estimated_wait),
        }
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            payment_delay_ms: 2000,
            seed_catalog: true,
            estimated_wait: "15-20 min".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.payment_delay(), Duration::from_secs(2));
        assert!(config.seed_catalog);
        assert!(!config.is_production());
        assert_eq!(config.estimated_wait, "15-20 min");
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        // Unique keys so parallel tests don't interfere
        unsafe {
            std::env::set_var("KIOSK_TEST_DELAY_OK", " 750 ");
            std::env::set_var("KIOSK_TEST_DELAY_BAD", "soon");
        }
        assert_eq!(env_or("KIOSK_TEST_DELAY_OK", 2000u64), 750);
        assert_eq!(env_or("KIOSK_TEST_DELAY_BAD", 2000u64), 2000);
        assert_eq!(env_or("KIOSK_TEST_DELAY_UNSET", 2000u64), 2000);
    }
}
