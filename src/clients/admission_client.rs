/// 录取结果查询客户端
///
/// 封装与录取查询接口的全部交互：表单编码、发送请求、解析响应
use crate::config::Config;
use crate::error::LookupError;
use crate::models::{decode_admission, QueryRecord, ResolutionResult};
use async_trait::async_trait;
use tracing::debug;

/// 单个考生的查询能力
///
/// 批量调度只依赖这个 trait，便于替换成其他实现
#[async_trait]
pub trait AdmissionLookup: Send + Sync {
    /// 查询一个考生，恰好产出一个结果
    ///
    /// 查无记录不是错误，返回 `failed` 的结果；只有无法挽回的情况才返回 `Err`
    async fn lookup(&self, query: QueryRecord) -> Result<ResolutionResult, LookupError>;
}

/// 录取查询 HTTP 客户端
#[derive(Clone)]
pub struct LookupClient {
    http: reqwest::Client,
    endpoint: String,
    exam_id: u32,
}

impl LookupClient {
    /// 创建新的查询客户端，考试 ID 在此固定，之后不再修改
    pub fn new(config: &Config) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            endpoint: config.endpoint.clone(),
            exam_id: config.exam_id,
        }
    }

    /// 构建表单字段
    ///
    /// `examinneNo` 是接口本身的拼写
    pub fn form_fields(&self, query: &QueryRecord) -> [(&'static str, String); 3] {
        [
            ("examNo", query.padded_exam_no()),
            ("examinneNo", query.padded_examinee_no()),
            ("examId", self.exam_id.to_string()),
        ]
    }

    fn transport_error(&self, source: reqwest::Error) -> LookupError {
        LookupError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

#[async_trait]
impl AdmissionLookup for LookupClient {
    async fn lookup(&self, query: QueryRecord) -> Result<ResolutionResult, LookupError> {
        debug!("{} 发送查询请求", query);

        let fields = self.form_fields(&query);
        let body = self
            .http
            .post(&self.endpoint)
            .form(&fields[..])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        debug!("{} 响应长度: {} 字节", query, body.len());

        let result = match decode_admission(&body)? {
            Some(record) => ResolutionResult::resolved(query, record),
            None => ResolutionResult::failed(query),
        };

        if result.is_failed() {
            debug!("{} 查无录取记录", query);
        }

        Ok(result)
    }
}
