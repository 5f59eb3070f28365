use std::time::Duration;

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 查询服务错误（致命，整批终止）
    #[error("查询错误: {0}")]
    Lookup(#[from] LookupError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 输入错误
    #[error("输入错误: {0}")]
    Input(#[from] InputError),
}

/// 查询服务错误
///
/// 只有无法挽回的情况才会走到这里；查无记录属于正常结果，用 `failed` 标记表示。
#[derive(Debug, Error)]
pub enum LookupError {
    /// 网络请求失败（连接、发送或读取响应体）
    #[error("请求 {endpoint} 失败: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 响应体不是 JSON 对象
    #[error("响应不是合法的 JSON 对象: {source}")]
    Envelope {
        #[source]
        source: serde_json::Error,
    },
    /// 单次查询超时
    #[error("查询 {exam_no:09}/{examinee_no:014} 超时 ({timeout:?})")]
    Timeout {
        exam_no: u32,
        examinee_no: u64,
        timeout: Duration,
    },
    /// 查询任务异常退出，未能交回结果
    #[error("查询任务异常退出: 已收到 {received}/{expected} 个结果")]
    WorkerLost { received: usize, expected: usize },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("无法读取配置文件 {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("无法解析配置文件 {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("配置项 {field} 无效: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// 输入错误
#[derive(Debug, Error)]
pub enum InputError {
    #[error("无法读取文件 {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 既没有考生信息也没有合法的 CSV 文件
    #[error("请提供文件名或考生信息, 文件必须是 .csv 后缀")]
    MissingInput,
    /// 单个考生信息格式不对
    #[error("考生信息格式错误: {0:?}, 应为 [准考证号,考生号]")]
    MalformedPair(String),
}

/// 应用程序结果类型
pub type Result<T> = std::result::Result<T, AppError>;
