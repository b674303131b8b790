//! 合并后的题库数据结构
//!
//! ExamDatabase 是构建产物的根：course → exam → question 三级嵌套。
//! 注入模板后成为只读数据，运行时只读不写。
//!
//! 课程表和试卷表都按插入顺序保存（文件名升序决定首次出现的顺序），
//! 序列化为以 id 为键的 JSON 对象，往返解码后深度相等。

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::models::fragment::FragmentMeta;

/// 规范化后的题目（入库形态）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CanonicalQuestion {
    pub id: String,
    pub number: String,
    pub topic: String,
    #[serde(rename = "topicTag")]
    pub topic_tag: String,
    #[serde(rename = "humanVerified")]
    pub human_verified: bool,
    pub question: String,
    #[serde(
        rename = "questionDiagramSvg",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub question_diagram_svg: Option<String>,
    pub solution: CanonicalSolution,
}

/// 规范化后的解答
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CanonicalSolution {
    pub translation: String,
    pub analysis: String,
    pub steps: Vec<CanonicalStep>,
    #[serde(rename = "finalAnswer")]
    pub final_answer: String,
}

/// 规范化后的解题步骤
///
/// 嵌套的 diagram.svg 已提升为平级的 diagramSvg
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CanonicalStep {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
    #[serde(rename = "diagramSvg", default, skip_serializing_if = "Option::is_none")]
    pub diagram_svg: Option<String>,
}

/// 一套试卷，键为 "{year}-{session}"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exam {
    pub id: String,
    pub title: String,
    pub date: String,
    pub questions: Vec<CanonicalQuestion>,
}

/// 一个科目（course1 / course2 或元数据里出现的任意课程 id）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(rename = "nameEn")]
    pub name_en: String,
    pub description: String,
    pub color: String,
    pub exams: ExamMap,
}

impl Course {
    /// 按约定生成课程的创建时默认值
    ///
    /// 之后的片段不再覆盖这些课程级字段
    pub fn create(id: &str, meta: &FragmentMeta) -> Self {
        Self {
            id: id.to_string(),
            name: meta
                .course_name_ja
                .clone()
                .unwrap_or_else(|| default_course_name(id).to_string()),
            name_en: meta.course_name_en.clone().unwrap_or_default(),
            description: meta.description.clone().unwrap_or_default(),
            color: meta
                .color
                .clone()
                .unwrap_or_else(|| default_course_color(id).to_string()),
            exams: ExamMap::new(),
        }
    }

    /// 课程下的总题数
    pub fn question_count(&self) -> usize {
        self.exams.values().map(|e| e.questions.len()).sum()
    }
}

fn default_course_name(id: &str) -> &'static str {
    if id == "course1" {
        "数学1"
    } else {
        "数学2"
    }
}

fn default_course_color(id: &str) -> &'static str {
    if id == "course1" {
        "#2563eb"
    } else {
        "#dc2626"
    }
}

/// 能用字符串键标识自身的值
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Course {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Exam {
    fn key(&self) -> &str {
        &self.id
    }
}

/// 按插入顺序保存、以值自身的键序列化为 JSON 对象的映射
///
/// 键在父级内唯一；重复插入时原位替换（后写覆盖），
/// 键保持首次插入时的位置
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<T>(Vec<T>);

pub type CourseMap = OrderedMap<Course>;
pub type ExamMap = OrderedMap<Exam>;

impl<T: Keyed> OrderedMap<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.0.iter().find(|v| v.key() == key)
    }

    /// 插入：键已存在时原位替换并返回旧值，否则追加到末尾
    pub fn insert(&mut self, value: T) -> Option<T> {
        match self.0.iter().position(|v| v.key() == value.key()) {
            Some(pos) => Some(std::mem::replace(&mut self.0[pos], value)),
            None => {
                self.0.push(value);
                None
            }
        }
    }

    /// 取出已有条目，不存在时用 create 新建后取出
    pub fn get_or_insert_with(&mut self, key: &str, create: impl FnOnce() -> T) -> &mut T {
        let pos = match self.0.iter().position(|v| v.key() == key) {
            Some(pos) => pos,
            None => {
                self.0.push(create());
                self.0.len() - 1
            }
        };
        &mut self.0[pos]
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|v| v.key())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T: Keyed> Default for OrderedMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize + Keyed> Serialize for OrderedMap<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for value in &self.0 {
            map.serialize_entry(value.key(), value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de> + Keyed> Deserialize<'de> for OrderedMap<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor<T>(std::marker::PhantomData<T>);

        impl<'de, T: Deserialize<'de> + Keyed> Visitor<'de> for OrderedMapVisitor<T> {
            type Value = OrderedMap<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map keyed by entry id")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                // 键信息冗余存于值的 id 字段，这里按文档顺序收集值即可
                while let Some((_key, value)) = access.next_entry::<String, T>()? {
                    entries.push(value);
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(std::marker::PhantomData))
    }
}

/// 题库根结构：courseId → Course
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExamDatabase(pub CourseMap);

impl ExamDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.0.get(id)
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.0.values()
    }

    /// 取出课程，不存在时按元数据创建（默认值只在创建时应用一次）
    pub fn course_or_create(&mut self, id: &str, meta: &FragmentMeta) -> &mut Course {
        self.0.get_or_insert_with(id, || Course::create(id, meta))
    }

    pub fn course_count(&self) -> usize {
        self.0.len()
    }

    pub fn exam_count(&self) -> usize {
        self.0.values().map(|c| c.exams.len()).sum()
    }

    pub fn question_count(&self) -> usize {
        self.0.values().map(|c| c.question_count()).sum()
    }
}
