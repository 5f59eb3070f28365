//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! app::App (读取输入、调度、输出)
//!     ↓
//! batch_processor::BatchDispatcher (处理 Vec<QueryRecord>)
//!     ↓
//! clients::AdmissionLookup (处理单个 QueryRecord)
//! ```

pub mod batch_processor;

pub use batch_processor::BatchDispatcher;
