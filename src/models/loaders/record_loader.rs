use crate::error::InputError;
use crate::models::examinee::QueryRecord;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// 从文本解析待查询的考生列表
///
/// 每行格式为 `准考证号,考生号[,...]`，多余的列忽略。
/// 空行、列数不足或无法解析为非负整数的行直接跳过，保持其余行的原有顺序。
pub fn parse_query_records(data: &str) -> Vec<QueryRecord> {
    data.lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let record = parse_line(line);
            if record.is_none() && !line.trim().is_empty() {
                debug!("跳过第 {} 行: {:?}", line_no + 1, line);
            }
            record
        })
        .collect()
}

/// 解析单个 `准考证号,考生号` 对，用于命令行直接给出的考生信息
///
/// 与文件解析不同，这里必须恰好两列。
pub fn parse_query_pair(input: &str) -> Result<QueryRecord, InputError> {
    let fields: Vec<&str> = input.split(',').collect();
    if fields.len() != 2 {
        return Err(InputError::MalformedPair(input.to_string()));
    }
    parse_fields(fields[0], fields[1]).ok_or_else(|| InputError::MalformedPair(input.to_string()))
}

/// 读取文件并解析
pub async fn load_query_records(path: &Path) -> Result<Vec<QueryRecord>, InputError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| InputError::Read {
            path: path.display().to_string(),
            source,
        })?;

    Ok(parse_query_records(&content))
}

fn parse_line(line: &str) -> Option<QueryRecord> {
    let mut fields = line.split(',');
    let exam_no = fields.next()?;
    let examinee_no = fields.next()?;
    parse_fields(exam_no, examinee_no)
}

fn parse_fields(exam_no: &str, examinee_no: &str) -> Option<QueryRecord> {
    let exam_no = exam_no.trim().parse::<u32>().ok()?;
    let examinee_no = examinee_no.trim().parse::<u64>().ok()?;
    Some(QueryRecord::new(exam_no, examinee_no))
}
