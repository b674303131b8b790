//! 输入片段数据结构
//!
//! 一个片段文件对应一套试卷：元数据 + 题目列表。
//! 字段名与上游工作流输出的 JSON 保持一致（camelCase 与
//! 既有的 snake_case 混用，这里不做统一）。

use serde::{Deserialize, Serialize};

/// 尚未解析的片段源：文件名 + 原始内容
///
/// 文件名同时用作错误报告中的片段标识
#[derive(Debug, Clone)]
pub struct FragmentSource {
    pub file_name: String,
    pub content: String,
}

/// 片段文件：一套试卷的元数据与题目列表
///
/// 只在单次构建期间存在，合并完成后即丢弃
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fragment {
    #[serde(default)]
    pub metadata: Option<FragmentMeta>,
    #[serde(default)]
    pub questions: Vec<RawQuestion>,
}

/// 片段元数据
///
/// 所有字段均为可选：必填项（course / year / session）的缺失
/// 由 FragmentValidator 统一报告，而不是在反序列化阶段直接失败
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct FragmentMeta {
    pub course: Option<String>,
    #[serde(deserialize_with = "de_opt_string_or_int")]
    pub year: Option<String>,
    #[serde(deserialize_with = "de_opt_string_or_int")]
    pub session: Option<String>,
    #[serde(rename = "examTitle")]
    pub exam_title: Option<String>,
    #[serde(rename = "examDate")]
    pub exam_date: Option<String>,
    #[serde(rename = "courseNameJa")]
    pub course_name_ja: Option<String>,
    #[serde(rename = "courseNameEn")]
    pub course_name_en: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// 原始题目（上游形态）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawQuestion {
    pub id: String,
    #[serde(deserialize_with = "de_string_or_int")]
    pub number: String,
    pub topic: String,
    #[serde(rename = "topicTag")]
    pub topic_tag: String,
    #[serde(rename = "humanVerified", default)]
    pub human_verified: bool,
    /// 题干原文；兼容已规范化数据里的 question 字段名
    #[serde(alias = "question")]
    pub japanese: String,
    #[serde(default)]
    pub answer_match: bool,
    #[serde(default)]
    pub needs_review: bool,
    #[serde(
        rename = "questionDiagram",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub question_diagram: Option<RawDiagram>,
    #[serde(
        rename = "questionDiagramSvg",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub question_diagram_svg: Option<String>,
    #[serde(default)]
    pub solution: RawSolution,
}

/// 原始解答
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct RawSolution {
    pub translation: String,
    pub analysis: String,
    pub steps: Vec<RawStep>,
    #[serde(rename = "finalAnswer")]
    pub final_answer: String,
}

/// 原始解题步骤
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawStep {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram: Option<RawDiagram>,
    #[serde(rename = "diagramSvg", default, skip_serializing_if = "Option::is_none")]
    pub diagram_svg: Option<String>,
}

/// 图表包装：上游以 { "svg": "<svg …>" } 形式嵌套存储
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawDiagram {
    pub svg: String,
}

// Helper function to deserialize a field as either string or integer
fn de_string_or_int<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct StringOrIntVisitor;

    impl<'de> Visitor<'de> for StringOrIntVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(StringOrIntVisitor)
}

// 同上，但字段可能缺失或为 null
fn de_opt_string_or_int<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct OptVisitor;

    impl<'de> Visitor<'de> for OptVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, integer, or null")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: serde::Deserializer<'de>,
        {
            de_string_or_int(deserializer).map(Some)
        }
    }

    deserializer.deserialize_option(OptVisitor)
}
