//! 录取查询接口的响应解析
//!
//! 响应形如 `{"enrollList": [{"NAME": ..., "GRADE11": ..., ...}]}`。
//! 只有顶层不是 JSON 对象时才算致命错误；字段类型不对一律按缺失处理。

use crate::error::LookupError;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// 录取记录列表的字段名
const ENROLL_LIST_KEY: &str = "enrollList";

/// 一条录取记录（取自 `enrollList` 的第一项）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AdmissionRecord {
    #[serde(rename = "NAME", default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "GRADE11", default, deserialize_with = "lenient_string")]
    pub university: String,
    #[serde(rename = "GRADE10", default, deserialize_with = "lenient_code")]
    pub university_no: u32,
    #[serde(rename = "GRADE8", default, deserialize_with = "lenient_string")]
    pub university_type: String,
    #[serde(rename = "GRADE13", default, deserialize_with = "lenient_string")]
    pub major: String,
    #[serde(rename = "GRADE12", default, deserialize_with = "lenient_code")]
    pub major_no: u32,
}

/// 解析响应体
///
/// # 返回
/// - `Ok(Some(record))`：找到录取记录
/// - `Ok(None)`：`enrollList` 为 null、缺失、为空或不是列表
/// - `Err(LookupError::Envelope)`：响应体不是 JSON 对象
pub fn decode_admission(body: &[u8]) -> Result<Option<AdmissionRecord>, LookupError> {
    let envelope: Map<String, Value> =
        serde_json::from_slice(body).map_err(|source| LookupError::Envelope { source })?;

    let first = match envelope.get(ENROLL_LIST_KEY).and_then(Value::as_array) {
        Some(list) => list.first(),
        None => None,
    };

    Ok(first
        .filter(|entry| entry.is_object())
        .and_then(|entry| AdmissionRecord::deserialize(entry).ok()))
}

/// 非字符串按空串处理
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// 代码字段：接受数字字符串（允许前导零）或非负整数，其他情况按 0 处理
fn lenient_code<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s.trim().parse().unwrap_or(0),
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()).unwrap_or(0),
        _ => 0,
    })
}
