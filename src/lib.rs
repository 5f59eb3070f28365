//! # Admission Bulk Query
//!
//! 批量查询高招录取结果：读取一批 `准考证号,考生号`，并发请求录取查询接口，
//! 把每个考生的录取院校、专业和代码汇总输出。
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/examinee` - `QueryRecord` / `ResolutionResult`
//! - `models/admission` - 查询接口响应的容错解析
//! - `models/loaders` - 从文本解析考生列表，坏行直接跳过
//!
//! ### ② 客户端层（Clients）
//! - `clients/admission_client` - `AdmissionLookup` trait 与基于 reqwest 的 `LookupClient`
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - `BatchDispatcher`，一个考生一个任务，按完成顺序收集结果
//!
//! ### ④ 输出层（Services）
//! - `services/result_writer` - 文本块 / CSV 表格输出
//!
//! ## 错误处理
//!
//! - 坏行：跳过
//! - 查无录取记录：`failed = true`，不影响其他考生
//! - 字段类型不对：按空/零处理
//! - 网络错误、响应不是 JSON 对象、超时：整批中止，不输出部分结果

pub mod app;
pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use clients::{AdmissionLookup, LookupClient};
pub use config::Config;
pub use error::{AppError, ConfigError, InputError, LookupError, Result};
pub use models::{QueryRecord, ResolutionResult};
pub use orchestrator::BatchDispatcher;
pub use services::{OutputFormat, ResultWriter};
