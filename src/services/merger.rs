//! 题库合并 - 业务能力层
//!
//! 将一组片段按给定顺序折叠进嵌套题库（course → exam → question）。
//! 顺序是正确性依赖：同一 (course, examKey) 出现两次时，后处理的
//! 片段整体替换先处理的（后写覆盖），不做题目级合并。

use crate::error::FragmentError;
use crate::models::database::{Exam, ExamDatabase};
use crate::models::fragment::{Fragment, FragmentSource};
use crate::models::report::BuildReport;
use crate::services::normalizer::QuestionNormalizer;
use crate::services::validator::FragmentValidator;
use tracing::{info, warn};

/// 题库合并器
pub struct DatabaseMerger;

impl DatabaseMerger {
    /// 合并全部片段，返回题库与构建报告
    ///
    /// 单个片段的解码/校验失败记录进报告并跳过，不中断合并。
    /// 除返回值外不产生任何跨调用的共享状态
    pub fn merge(sources: &[FragmentSource]) -> (ExamDatabase, BuildReport) {
        let mut db = ExamDatabase::new();
        let mut report = BuildReport::new();

        for source in sources {
            if let Err(e) = Self::merge_one(source, &mut db, &mut report) {
                warn!("⚠️ 跳过片段 {}: {}", source.file_name, e);
                report.errors.push(format!("❌ {}", e));
            }
        }

        (db, report)
    }

    /// 合并单个片段
    fn merge_one(
        source: &FragmentSource,
        db: &mut ExamDatabase,
        report: &mut BuildReport,
    ) -> Result<(), FragmentError> {
        let fragment: Fragment = serde_json::from_str(&source.content)
            .map_err(|e| FragmentError::decode_failed(&source.file_name, e))?;

        let meta = match fragment.metadata.as_ref() {
            Some(meta) => meta,
            None => return Err(FragmentError::missing_metadata(&source.file_name)),
        };
        let exam_ref = FragmentValidator::validate(&source.file_name, meta)?;

        // 统计在入库之前完成：即使之后被同键片段覆盖，计数仍保留
        report.total += fragment.questions.len();
        report.passed += fragment.questions.iter().filter(|q| q.answer_match).count();
        report.needs_review += fragment.questions.iter().filter(|q| q.needs_review).count();

        let questions: Vec<_> = fragment
            .questions
            .iter()
            .map(QuestionNormalizer::normalize)
            .collect();
        let question_count = questions.len();

        let exam_key = exam_ref.exam_key();
        let course = db.course_or_create(&exam_ref.course, meta);

        if course.exams.get(&exam_key).is_some() {
            warn!(
                "⚠️ {} / {} 已有内容，后写覆盖: {}",
                exam_ref.course, exam_key, source.file_name
            );
        }

        course.exams.insert(Exam {
            id: exam_key.clone(),
            title: meta.exam_title.clone().unwrap_or_default(),
            date: meta.exam_date.clone().unwrap_or_default(),
            questions,
        });

        info!(
            "✅ {} → {} / {} ({} 题)",
            source.file_name, exam_ref.course, exam_key, question_count
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(file_name: &str, content: &str) -> FragmentSource {
        FragmentSource {
            file_name: file_name.to_string(),
            content: content.to_string(),
        }
    }

    fn fragment_json(course: &str, year: &str, session: &str, question_ids: &[&str]) -> String {
        let questions: Vec<String> = question_ids
            .iter()
            .map(|id| {
                format!(
                    r#"{{
                        "id": "{}",
                        "number": "1",
                        "topic": "二次関数",
                        "topicTag": "函数",
                        "japanese": "問題",
                        "answer_match": true,
                        "solution": {{
                            "translation": "翻译",
                            "analysis": "思路",
                            "steps": [],
                            "finalAnswer": "答案"
                        }}
                    }}"#,
                    id
                )
            })
            .collect();
        format!(
            r#"{{
                "metadata": {{
                    "course": "{}",
                    "year": "{}",
                    "session": "{}",
                    "examTitle": "{} 年度第 {} 回",
                    "examDate": "{}-06"
                }},
                "questions": [{}]
            }}"#,
            course,
            year,
            session,
            year,
            session,
            year,
            questions.join(",")
        )
    }

    #[test]
    fn test_merge_two_courses() {
        let sources = vec![
            source("2011_1_course1.json", &fragment_json("course1", "2011", "1", &["a"])),
            source("2011_1_course2.json", &fragment_json("course2", "2011", "1", &["b"])),
        ];

        let (db, report) = DatabaseMerger::merge(&sources);

        assert_eq!(db.course_count(), 2);
        assert_eq!(db.exam_count(), 2);
        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 2);
        assert!(report.errors.is_empty());

        let exam = db.course("course1").unwrap().exams.get("2011-1").unwrap();
        assert_eq!(exam.questions.len(), 1);
        assert_eq!(exam.questions[0].id, "a");
    }

    #[test]
    fn test_merge_is_order_sensitive_on_conflicts() {
        let f1 = fragment_json("course1", "2011", "1", &["from_f1"]);
        let f2 = fragment_json("course1", "2011", "1", &["from_f2"]);
        let sources = vec![source("a.json", &f1), source("b.json", &f2)];

        let (db, report) = DatabaseMerger::merge(&sources);

        // 后写覆盖：不是并集，整套试卷被 f2 替换
        let exam = db.course("course1").unwrap().exams.get("2011-1").unwrap();
        assert_eq!(exam.questions.len(), 1);
        assert_eq!(exam.questions[0].id, "from_f2");

        // 计数覆盖所有未跳过的片段，包括被替换的那个
        assert_eq!(report.total, 2);
    }

    #[test]
    fn test_merge_skips_fragment_missing_year() {
        let broken = r#"{
            "metadata": {"course": "course1", "session": "1"},
            "questions": []
        }"#;
        let sources = vec![source("broken.json", broken)];

        let (db, report) = DatabaseMerger::merge(&sources);

        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("缺少 metadata"));
        assert!(report.errors[0].contains("broken.json"));
        assert!(db.course("course1").is_none());
        assert_eq!(report.total, 0);
    }

    #[test]
    fn test_merge_records_decode_errors() {
        let sources = vec![
            source("bad.json", "{ not valid json"),
            source("good.json", &fragment_json("course1", "2011", "1", &["a"])),
        ];

        let (db, report) = DatabaseMerger::merge(&sources);

        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("JSON 解析失败"));
        assert!(report.errors[0].contains("bad.json"));
        // 解码失败不影响后续片段
        assert_eq!(db.course_count(), 1);
        assert_eq!(report.total, 1);
    }

    #[test]
    fn test_merge_preserves_first_seen_order() {
        let sources = vec![
            source("1.json", &fragment_json("course2", "2011", "1", &["a"])),
            source("2.json", &fragment_json("course1", "2011", "1", &["b"])),
            source("3.json", &fragment_json("course2", "2013", "2", &["c"])),
        ];

        let (db, _) = DatabaseMerger::merge(&sources);

        // 课程按首次出现排序，而不是键的字典序
        let ids: Vec<&str> = db.courses().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["course2", "course1"]);

        let keys: Vec<&str> = db.course("course2").unwrap().exams.keys().collect();
        assert_eq!(keys, vec!["2011-1", "2013-2"]);
    }

    #[test]
    fn test_merge_counts_needs_review() {
        let content = r#"{
            "metadata": {"course": "course1", "year": 2011, "session": 1},
            "questions": [{
                "id": "q1",
                "number": 1,
                "topic": "t",
                "topicTag": "tag",
                "japanese": "問",
                "needs_review": true,
                "solution": {}
            }]
        }"#;
        let (_, report) = DatabaseMerger::merge(&[source("a.json", content)]);

        assert_eq!(report.total, 1);
        assert_eq!(report.passed, 0);
        assert_eq!(report.needs_review, 1);
    }
}
