use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::sync::Semaphore;

/// 默认查询接口（北京教育考试院录取结果查询）
pub const DEFAULT_ENDPOINT: &str = "http://query.bjeea.cn/queryService/rest/admission/110";

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 查询接口地址
    pub endpoint: String,
    /// 考试 ID (表单中的 examId, 默认为 2018 年北京市高招录取结果)
    pub exam_id: u32,
    /// 同时进行的查询数量上限
    pub max_concurrent_lookups: usize,
    /// 单次查询超时（秒），不设置则不限时
    pub lookup_timeout_secs: Option<u64>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            exam_id: 4865,
            max_concurrent_lookups: 32,
            lookup_timeout_secs: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载，未写出的字段使用默认值
    pub async fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// 用环境变量覆盖当前配置
    pub fn with_env_overrides(self) -> Self {
        Self {
            endpoint: std::env::var("BULK_QUERY_ENDPOINT").unwrap_or(self.endpoint),
            exam_id: std::env::var("BULK_QUERY_EXAM_ID").ok().and_then(|v| v.parse().ok()).unwrap_or(self.exam_id),
            max_concurrent_lookups: std::env::var("BULK_QUERY_MAX_CONCURRENT").ok().and_then(|v| v.parse().ok()).unwrap_or(self.max_concurrent_lookups),
            lookup_timeout_secs: std::env::var("BULK_QUERY_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).or(self.lookup_timeout_secs),
            verbose_logging: std::env::var("BULK_QUERY_VERBOSE").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }

    pub fn lookup_timeout(&self) -> Option<Duration> {
        self.lookup_timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "endpoint",
                reason: "不能为空".to_string(),
            });
        }
        if self.max_concurrent_lookups == 0 {
            return Err(ConfigError::Invalid {
                field: "max_concurrent_lookups",
                reason: "至少为 1".to_string(),
            });
        }
        if self.max_concurrent_lookups > Semaphore::MAX_PERMITS {
            return Err(ConfigError::Invalid {
                field: "max_concurrent_lookups",
                reason: format!("不能超过 {}", Semaphore::MAX_PERMITS),
            });
        }
        Ok(())
    }
}
