//! 模板注入 - 业务能力层
//!
//! 将合并后的题库序列化为 JSON 字面量，替换模板中的占位语句。
//! JSON 同时是合法的 JS 对象字面量，注入结果在目标文档中可直接求值。

use crate::error::{AppResult, TemplateError};
use crate::models::database::ExamDatabase;

/// 模板中必须存在的占位语句（绑定名与占位符整体匹配）
pub const DATABASE_PLACEHOLDER: &str = "const examDatabase = __EXAM_DATABASE__;";

/// 模板注入器
pub struct TemplateInjector;

impl TemplateInjector {
    /// 注入题库
    ///
    /// 模板缺少占位语句时返回 PlaceholderNotFound（构建致命错误）。
    /// 注入的字面量解码后与 db 深度相等
    pub fn inject(template: &str, db: &ExamDatabase) -> AppResult<String> {
        if !template.contains(DATABASE_PLACEHOLDER) {
            return Err(TemplateError::PlaceholderNotFound {
                placeholder: "__EXAM_DATABASE__".to_string(),
            }
            .into());
        }

        let literal = serde_json::to_string_pretty(db)?;
        let data_code = format!("const examDatabase = {};", literal);

        Ok(template.replacen(DATABASE_PLACEHOLDER, &data_code, 1))
    }
}
