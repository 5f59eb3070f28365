//! 命令行参数

use crate::config::Config;
use crate::error::{ConfigError, InputError};
use crate::models::{parse_query_pair, QueryRecord};
use crate::services::OutputFormat;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "admission-bulk-query",
    version,
    about = "批量查询高招录取结果"
)]
pub struct Cli {
    /// 准考证号与考生号的 CSV 文件
    #[arg(value_name = "file.csv")]
    pub file: Option<PathBuf>,

    /// 考生信息, 格式 [准考证号,考生号]
    #[arg(short = 'i', long)]
    pub examinee: Option<String>,

    /// 考试 ID (表单中的 examId, 默认为 2018 年北京市高招录取结果)
    #[arg(short = 't', long = "examid")]
    pub exam_id: Option<u32>,

    /// 以 CSV 格式输出
    #[arg(long)]
    pub csv: bool,

    /// TOML 配置文件
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// 同时进行的查询数量上限
    #[arg(long)]
    pub max_concurrent: Option<usize>,

    /// 单次查询超时（秒）
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// 显示详细日志
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// 查询输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// 命令行直接给出的单个考生
    Single(QueryRecord),
    /// CSV 文件
    File(PathBuf),
}

impl Cli {
    /// 合并配置：配置文件（或默认值） → 环境变量 → 命令行参数
    pub async fn resolve_config(&self) -> Result<Config, ConfigError> {
        let base = match &self.config {
            Some(path) => Config::from_toml_file(path).await?,
            None => Config::default(),
        };
        let mut config = base.with_env_overrides();

        if let Some(exam_id) = self.exam_id {
            config.exam_id = exam_id;
        }
        if let Some(max) = self.max_concurrent {
            config.max_concurrent_lookups = max;
        }
        if let Some(secs) = self.timeout_secs {
            config.lookup_timeout_secs = Some(secs);
        }
        config.verbose_logging |= self.verbose;

        config.validate()?;
        Ok(config)
    }

    /// 确定查询输入，考生信息优先于文件
    pub fn input(&self) -> Result<Input, InputError> {
        if let Some(pair) = &self.examinee {
            return parse_query_pair(pair).map(Input::Single);
        }
        match &self.file {
            Some(path) if path.extension().is_some_and(|ext| ext == "csv") => {
                Ok(Input::File(path.clone()))
            }
            _ => Err(InputError::MissingInput),
        }
    }

    /// 把输入错误包装成带用法说明的命令行错误
    pub fn usage_error(err: &InputError) -> clap::Error {
        let kind = match err {
            InputError::MissingInput => ErrorKind::MissingRequiredArgument,
            InputError::MalformedPair(_) => ErrorKind::InvalidValue,
            InputError::Read { .. } => ErrorKind::Io,
        };
        Self::command().error(kind, err)
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.csv {
            OutputFormat::Table
        } else {
            OutputFormat::Blocks
        }
    }
}
