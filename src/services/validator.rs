//! 片段校验 - 业务能力层
//!
//! 只负责"必填元数据是否齐全"的校验，不关心合并流程

use crate::error::FragmentError;
use crate::models::fragment::FragmentMeta;

/// 校验通过后提取出的试卷定位信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamRef {
    pub course: String,
    pub year: String,
    pub session: String,
}

impl ExamRef {
    /// 试卷键："{year}-{session}"
    pub fn exam_key(&self) -> String {
        format!("{}-{}", self.year, self.session)
    }
}

/// 片段校验器
pub struct FragmentValidator;

impl FragmentValidator {
    /// 校验必填元数据（course / year / session）
    ///
    /// 任意一项缺失或为空串时返回 MissingMetadata；
    /// 调用方应记录错误并跳过整个片段
    pub fn validate(file_name: &str, meta: &FragmentMeta) -> Result<ExamRef, FragmentError> {
        match (&meta.course, &meta.year, &meta.session) {
            (Some(course), Some(year), Some(session))
                if !course.is_empty() && !year.is_empty() && !session.is_empty() =>
            {
                Ok(ExamRef {
                    course: course.clone(),
                    year: year.clone(),
                    session: session.clone(),
                })
            }
            _ => Err(FragmentError::missing_metadata(file_name)),
        }
    }
}
