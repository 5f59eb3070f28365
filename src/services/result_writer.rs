//! 结果输出服务
//!
//! 只负责把查询结果写成文本块或表格行，不关心结果从哪里来

use crate::models::ResolutionResult;
use std::io::{self, Write};

/// 表格输出的表头
pub const TABLE_HEADER: [&str; 9] = [
    "姓名",
    "准考证号",
    "考生号",
    "大学类型",
    "大学名称",
    "大学代码",
    "专业名称",
    "专业代码",
    "查询状态",
];

/// 文本块之间的分隔线
const BLOCK_DIVIDER: &str = "------\n\n";

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 每个考生一段可读文本
    #[default]
    Blocks,
    /// 表头加每个考生一行
    Table,
}

/// 结果输出服务
pub struct ResultWriter {
    format: OutputFormat,
}

impl ResultWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// 按设定格式写出全部结果
    pub fn write<W: Write>(&self, out: W, results: &[ResolutionResult]) -> io::Result<()> {
        match self.format {
            OutputFormat::Blocks => write_blocks(out, results),
            OutputFormat::Table => write_table(out, results),
        }
    }
}

/// 渲染单个考生的文本块，只输出非空/非零的字段
pub fn render_block(result: &ResolutionResult) -> String {
    let mut formatted = String::new();
    let query = result.query();

    if result.is_failed() {
        formatted.push_str("查询失败, 请检查准考证号和考生号\n");
    }
    if !result.name().is_empty() {
        formatted.push_str(&format!("姓名: {}\n", result.name()));
    }
    if query.exam_no > 0 {
        formatted.push_str(&format!("准考证号: {}\n", query.padded_exam_no()));
    }
    if query.examinee_no > 0 {
        formatted.push_str(&format!("考生号: {}\n", query.padded_examinee_no()));
    }
    if result.university_no() > 0
        && !result.university_type().is_empty()
        && !result.university().is_empty()
    {
        formatted.push_str(&format!(
            "{}: {} ({})\n",
            result.university_type(),
            result.university(),
            result.university_no()
        ));
    }
    if result.major_no() > 0 && !result.major().is_empty() {
        formatted.push_str(&format!(
            "专业: {} ({})\n",
            result.major(),
            result.major_no()
        ));
    }

    formatted
}

/// 表格行，列顺序与 [`TABLE_HEADER`] 一致
pub fn table_row(result: &ResolutionResult) -> [String; 9] {
    let query = result.query();
    [
        result.name().to_string(),
        query.padded_exam_no(),
        query.padded_examinee_no(),
        result.university_type().to_string(),
        result.university().to_string(),
        result.university_no().to_string(),
        result.major().to_string(),
        result.major_no().to_string(),
        if result.is_failed() { "失败" } else { "成功" }.to_string(),
    ]
}

fn write_blocks<W: Write>(mut out: W, results: &[ResolutionResult]) -> io::Result<()> {
    for (i, result) in results.iter().enumerate() {
        writeln!(out, "{}", render_block(result))?;
        if i != results.len() - 1 {
            out.write_all(BLOCK_DIVIDER.as_bytes())?;
        }
    }
    out.flush()
}

fn write_table<W: Write>(out: W, results: &[ResolutionResult]) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(TABLE_HEADER)?;
    for result in results {
        writer.write_record(table_row(result))?;
    }
    writer.flush()
}
