//! 批量查询调度器 - 编排层
//!
//! ## 职责
//!
//! 把 N 个考生分发成 N 个独立的并发查询任务，并通过同一个完成通道收齐 N 个结果。
//!
//! ## 设计特点
//!
//! - **完成顺序**：结果按完成先后排列，不保证与输入顺序一致，
//!   调用方应按结果中携带的准考证号/考生号对应，而不是按下标
//! - **并发控制**：所有任务一次性创建，通过 Semaphore 限制同时进行的请求数
//! - **超时**：可选的单次查询超时，超时视为致命错误
//! - **失败隔离**：查无记录只影响该考生；致命错误会中止其余任务并整体返回错误

use crate::clients::AdmissionLookup;
use crate::config::Config;
use crate::error::LookupError;
use crate::models::{QueryRecord, ResolutionResult};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// 批量查询调度器
pub struct BatchDispatcher<L> {
    lookup: Arc<L>,
    semaphore: Arc<Semaphore>,
    timeout: Option<Duration>,
}

impl<L> BatchDispatcher<L>
where
    L: AdmissionLookup + 'static,
{
    /// 创建调度器
    ///
    /// # 参数
    /// - `lookup`: 单个考生的查询实现
    /// - `max_concurrent`: 同时进行的查询数量上限，为 0 时按 1 处理；
    ///   超过 `Semaphore::MAX_PERMITS` 会 panic，经由 `Config::validate` 的配置不会出现这种情况
    /// - `timeout`: 单次查询超时，`None` 表示不限时
    pub fn new(lookup: Arc<L>, max_concurrent: usize, timeout: Option<Duration>) -> Self {
        Self {
            lookup,
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
            timeout,
        }
    }

    pub fn from_config(lookup: Arc<L>, config: &Config) -> Self {
        Self::new(lookup, config.max_concurrent_lookups, config.lookup_timeout())
    }

    /// 并发查询所有考生
    ///
    /// 收齐与输入数量相同的结果后才返回，结果按完成顺序排列。
    /// 任一任务出现致命错误时，其余任务被中止，返回该错误，不返回部分结果。
    pub async fn dispatch(
        &self,
        records: Vec<QueryRecord>,
    ) -> Result<Vec<ResolutionResult>, LookupError> {
        let expected = records.len();
        if expected == 0 {
            return Ok(Vec::new());
        }

        let (tx, mut rx) = mpsc::channel(expected);
        let mut workers = AbortOnDrop(Vec::with_capacity(expected));

        for query in records {
            let tx = tx.clone();
            let lookup = Arc::clone(&self.lookup);
            let semaphore = Arc::clone(&self.semaphore);
            let timeout = self.timeout;

            workers.0.push(tokio::spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return,
                };
                let outcome = lookup_with_timeout(lookup.as_ref(), query, timeout).await;
                // 接收端已放弃（出现致命错误）时忽略
                let _ = tx.send(outcome).await;
            }));
        }
        drop(tx);

        let mut results = Vec::with_capacity(expected);
        while results.len() < expected {
            match rx.recv().await {
                Some(Ok(result)) => {
                    debug!("{} 完成 ({}/{})", result.query(), results.len() + 1, expected);
                    results.push(result);
                }
                Some(Err(e)) => {
                    error!("❌ 查询出现致命错误，中止整批: {}", e);
                    return Err(e);
                }
                None => {
                    return Err(LookupError::WorkerLost {
                        received: results.len(),
                        expected,
                    });
                }
            }
        }

        Ok(results)
    }
}

async fn lookup_with_timeout<L>(
    lookup: &L,
    query: QueryRecord,
    timeout: Option<Duration>,
) -> Result<ResolutionResult, LookupError>
where
    L: AdmissionLookup + ?Sized,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, lookup.lookup(query))
            .await
            .map_err(|_| LookupError::Timeout {
                exam_no: query.exam_no,
                examinee_no: query.examinee_no,
                timeout: limit,
            })?,
        None => lookup.lookup(query).await,
    }
}

/// 离开作用域时中止所有未完成的任务
struct AbortOnDrop(Vec<JoinHandle<()>>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        for handle in &self.0 {
            handle.abort();
        }
    }
}
