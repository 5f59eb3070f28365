//! 考生查询记录与查询结果

use super::admission::AdmissionRecord;
use std::fmt;

/// 待查询的考生（准考证号 + 考生号）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryRecord {
    /// 准考证号，9 位
    pub exam_no: u32,
    /// 考生号，14 位
    pub examinee_no: u64,
}

impl QueryRecord {
    pub fn new(exam_no: u32, examinee_no: u64) -> Self {
        Self {
            exam_no,
            examinee_no,
        }
    }

    /// 补零到 9 位的准考证号
    pub fn padded_exam_no(&self) -> String {
        format!("{:09}", self.exam_no)
    }

    /// 补零到 14 位的考生号
    pub fn padded_examinee_no(&self) -> String {
        format!("{:014}", self.examinee_no)
    }
}

impl fmt::Display for QueryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[准考证号 {} 考生号 {}]",
            self.padded_exam_no(),
            self.padded_examinee_no()
        )
    }
}

/// 单个考生的查询结果
///
/// 字段只能通过 [`ResolutionResult::failed`] 或 [`ResolutionResult::resolved`] 构造，
/// 构造后不再修改。`failed` 为真时所有录取字段均为空/零；
/// 查询完成但姓名为空的记录一律视为失败。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    query: QueryRecord,
    name: String,
    university: String,
    university_no: u32,
    university_type: String,
    major: String,
    major_no: u32,
    failed: bool,
}

impl ResolutionResult {
    /// 查无录取记录
    pub fn failed(query: QueryRecord) -> Self {
        Self {
            query,
            name: String::new(),
            university: String::new(),
            university_no: 0,
            university_type: String::new(),
            major: String::new(),
            major_no: 0,
            failed: true,
        }
    }

    /// 由服务返回的录取记录构造；姓名为空时退化为失败结果
    pub fn resolved(query: QueryRecord, record: AdmissionRecord) -> Self {
        if record.name.is_empty() {
            return Self::failed(query);
        }
        Self {
            query,
            name: record.name,
            university: record.university,
            university_no: record.university_no,
            university_type: record.university_type,
            major: record.major,
            major_no: record.major_no,
            failed: false,
        }
    }

    pub fn query(&self) -> &QueryRecord {
        &self.query
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn university(&self) -> &str {
        &self.university
    }

    pub fn university_no(&self) -> u32 {
        self.university_no
    }

    pub fn university_type(&self) -> &str {
        &self.university_type
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn major_no(&self) -> u32 {
        self.major_no
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// 所有录取字段是否均为空/零
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.university.is_empty()
            && self.university_no == 0
            && self.university_type.is_empty()
            && self.major.is_empty()
            && self.major_no == 0
    }
}
