use crate::cli::Input;
use crate::clients::LookupClient;
use crate::config::Config;
use crate::models::{load_query_records, QueryRecord, ResolutionResult};
use crate::orchestrator::BatchDispatcher;
use crate::services::{OutputFormat, ResultWriter};
use crate::utils::logging::{log_records_loaded, log_startup, print_final_stats};
use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use tracing::warn;

/// 应用主结构
pub struct App {
    dispatcher: BatchDispatcher<LookupClient>,
    writer: ResultWriter,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config, format: OutputFormat) -> Result<Self> {
        config.validate()?;

        log_startup(
            &config.endpoint,
            config.exam_id,
            config.max_concurrent_lookups,
        );

        let client = Arc::new(LookupClient::new(&config));

        Ok(Self {
            dispatcher: BatchDispatcher::from_config(client, &config),
            writer: ResultWriter::new(format),
        })
    }

    /// 运行应用主逻辑
    ///
    /// 查询全部完成后才写出结果；出现致命错误时不写出任何结果
    pub async fn run<W: Write>(&self, input: Input, out: W) -> Result<Vec<ResolutionResult>> {
        let records = self.load_records(input).await?;

        if records.is_empty() {
            warn!("⚠️ 没有找到有效的考生信息，程序结束");
            // 表格模式仍输出表头
            self.writer
                .write(out, &[])
                .context("写出查询结果失败")?;
            return Ok(Vec::new());
        }

        log_records_loaded(records.len());

        let results = self
            .dispatcher
            .dispatch(records)
            .await
            .context("批量查询中止")?;

        let failed = results.iter().filter(|r| r.is_failed()).count();
        print_final_stats(results.len() - failed, failed);

        self.writer
            .write(out, &results)
            .context("写出查询结果失败")?;

        Ok(results)
    }

    /// 加载考生
    async fn load_records(&self, input: Input) -> Result<Vec<QueryRecord>> {
        match input {
            Input::Single(record) => Ok(vec![record]),
            Input::File(path) => Ok(load_query_records(&path).await?),
        }
    }
}
