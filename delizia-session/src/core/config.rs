use std::path::PathBuf;
use std::time::Duration;

/// Default auto-reset delay for a confirmed reservation
pub const DEFAULT_CONFIRMATION_DELAY_MS: u64 = 4000;

/// 会话配置 - 交互会话核心的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | CATALOG_PATH | (内置菜单) | 菜品 JSON 文件 |
/// | CONFIRMATION_DELAY_MS | 4000 | 预订确认自动复位延迟(毫秒) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | (仅控制台) | 滚动日志目录 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// CATALOG_PATH=./menu.json CONFIRMATION_DELAY_MS=2000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 菜品目录文件，None 时使用内置菜单
    pub catalog_path: Option<PathBuf>,
    /// 预订确认状态持续时间 (毫秒)
    pub confirmation_delay_ms: u64,
    /// 日志级别
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 日志目录，None 时只输出到控制台
    pub log_dir: Option<String>,
    /// 运行环境: development | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, map in tests, ...)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            catalog_path: non_empty("CATALOG_PATH").map(PathBuf::from),
            confirmation_delay_ms: non_empty("CONFIRMATION_DELAY_MS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_CONFIRMATION_DELAY_MS),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: non_empty("LOG_JSON")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(false),
            log_dir: non_empty("LOG_DIR"),
            environment: non_empty("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(catalog_path: Option<PathBuf>, confirmation_delay_ms: u64) -> Self {
        let mut config = Self::from_env();
        config.catalog_path = catalog_path;
        config.confirmation_delay_ms = confirmation_delay_ms;
        config
    }

    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_millis(self.confirmation_delay_ms)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.confirmation_delay_ms, 4000);
        assert_eq!(config.confirmation_delay(), Duration::from_millis(4000));
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert_eq!(config.log_dir, None);
        assert!(config.is_development());
    }

    #[test]
    fn test_values_from_lookup() {
        let config = config_from(&[
            ("CATALOG_PATH", "/srv/delizia/menu.json"),
            ("CONFIRMATION_DELAY_MS", "2500"),
            ("LOG_LEVEL", "debug"),
            ("LOG_JSON", "true"),
            ("LOG_DIR", "/var/log/delizia"),
            ("ENVIRONMENT", "production"),
        ]);
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/srv/delizia/menu.json"))
        );
        assert_eq!(config.confirmation_delay_ms, 2500);
        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/delizia"));
        assert!(config.is_production());
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = config_from(&[
            ("CONFIRMATION_DELAY_MS", "soon"),
            ("LOG_JSON", "yes please"),
            ("CATALOG_PATH", "   "),
        ]);
        assert_eq!(config.confirmation_delay_ms, DEFAULT_CONFIRMATION_DELAY_MS);
        assert!(!config.log_json);
        assert_eq!(config.catalog_path, None);
    }
}
