//! 题目规范化 - 业务能力层
//!
//! 原始题目 → 入库形态的纯转换，对合法输入没有失败路径。
//! 对已规范化的数据重复应用是无操作（幂等）。

use crate::models::database::{CanonicalQuestion, CanonicalSolution, CanonicalStep};
use crate::models::fragment::{RawQuestion, RawStep};

/// 题目规范化器
pub struct QuestionNormalizer;

impl QuestionNormalizer {
    /// 规范化单个题目
    ///
    /// - 固定字段逐一拷贝，humanVerified 缺省为 false
    /// - questionDiagram.svg 提升为平级的 questionDiagramSvg
    /// - 每个步骤的 diagram.svg 提升为 diagramSvg，嵌套的 diagram 不再保留
    /// - 步骤顺序保持不变
    pub fn normalize(raw: &RawQuestion) -> CanonicalQuestion {
        CanonicalQuestion {
            id: raw.id.clone(),
            number: raw.number.clone(),
            topic: raw.topic.clone(),
            topic_tag: raw.topic_tag.clone(),
            human_verified: raw.human_verified,
            question: raw.japanese.clone(),
            question_diagram_svg: raw
                .question_diagram
                .as_ref()
                .map(|d| d.svg.clone())
                .or_else(|| raw.question_diagram_svg.clone()),
            solution: CanonicalSolution {
                translation: raw.solution.translation.clone(),
                analysis: raw.solution.analysis.clone(),
                steps: raw.solution.steps.iter().map(Self::normalize_step).collect(),
                final_answer: raw.solution.final_answer.clone(),
            },
        }
    }

    fn normalize_step(step: &RawStep) -> CanonicalStep {
        CanonicalStep {
            title: step.title.clone(),
            content: step.content.clone(),
            why: step.why.clone(),
            diagram_svg: step
                .diagram
                .as_ref()
                .map(|d| d.svg.clone())
                .or_else(|| step.diagram_svg.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fragment::{RawDiagram, RawSolution};

    fn raw_question() -> RawQuestion {
        RawQuestion {
            id: "2011-1-q3".to_string(),
            number: "3".to_string(),
            topic: "図形と方程式".to_string(),
            topic_tag: "幾何".to_string(),
            human_verified: true,
            japanese: "円 $x^2+y^2=1$ について…".to_string(),
            answer_match: true,
            needs_review: false,
            question_diagram: Some(RawDiagram {
                svg: "<svg id=\"q\"/>".to_string(),
            }),
            question_diagram_svg: None,
            solution: RawSolution {
                translation: "关于圆 $x^2+y^2=1$ …".to_string(),
                analysis: "先求圆心".to_string(),
                steps: vec![
                    RawStep {
                        title: "第一步".to_string(),
                        content: "设圆心为 $O$".to_string(),
                        why: Some("圆的标准形式".to_string()),
                        diagram: Some(RawDiagram {
                            svg: "<svg id=\"s1\"/>".to_string(),
                        }),
                        diagram_svg: None,
                    },
                    RawStep {
                        title: "第二步".to_string(),
                        content: "代入求解".to_string(),
                        why: None,
                        diagram: None,
                        diagram_svg: None,
                    },
                ],
                final_answer: "$r=1$".to_string(),
            },
        }
    }

    #[test]
    fn test_normalize_hoists_diagrams() {
        let canonical = QuestionNormalizer::normalize(&raw_question());

        assert_eq!(canonical.question_diagram_svg.as_deref(), Some("<svg id=\"q\"/>"));
        assert_eq!(
            canonical.solution.steps[0].diagram_svg.as_deref(),
            Some("<svg id=\"s1\"/>")
        );
        assert_eq!(canonical.solution.steps[1].diagram_svg, None);
    }

    #[test]
    fn test_normalize_preserves_step_order() {
        let canonical = QuestionNormalizer::normalize(&raw_question());
        let titles: Vec<&str> = canonical
            .solution
            .steps
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["第一步", "第二步"]);
    }

    #[test]
    fn test_normalize_is_idempotent_over_canonical_form() {
        let once = QuestionNormalizer::normalize(&raw_question());

        // 规范化结果重新按上游形态读入后再规范化，应与第一次完全一致
        let wire = serde_json::to_string(&once).unwrap();
        let reparsed: RawQuestion = serde_json::from_str(&wire).unwrap();
        let twice = QuestionNormalizer::normalize(&reparsed);

        assert_eq!(twice, once);
    }

    #[test]
    fn test_normalize_defaults_human_verified() {
        let mut raw = raw_question();
        raw.human_verified = false;
        let canonical = QuestionNormalizer::normalize(&raw);
        assert!(!canonical.human_verified);
    }
}
