//! 三级导航状态机
//!
//! 科目列表 → 试卷列表 → 题目列表。状态显式带选中数据，
//! 而不是用可选字段的组合推断当前层级。
//!
//! 选中的 id 是否存在于题库由调用方保证，这里不做校验。

/// 导航状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    /// 科目列表（初始状态）
    CourseList,
    /// 某科目的试卷列表
    ExamList { course_id: String },
    /// 某试卷的题目列表
    QuestionList { course_id: String, exam_id: String },
}

/// 导航控制器
///
/// 会话期间循环使用，没有终态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationController {
    state: NavState,
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            state: NavState::CourseList,
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// 选择科目：科目列表 → 试卷列表；其余状态无操作
    pub fn select_course(&mut self, course_id: impl Into<String>) {
        if self.state == NavState::CourseList {
            self.state = NavState::ExamList {
                course_id: course_id.into(),
            };
        }
    }

    /// 选择试卷：试卷列表 → 题目列表；其余状态无操作
    pub fn select_exam(&mut self, exam_id: impl Into<String>) {
        if let NavState::ExamList { course_id } = &self.state {
            self.state = NavState::QuestionList {
                course_id: course_id.clone(),
                exam_id: exam_id.into(),
            };
        }
    }

    /// 返回上一级，并清除该级的选中项；科目列表处无操作
    pub fn back(&mut self) {
        self.state = match std::mem::replace(&mut self.state, NavState::CourseList) {
            NavState::QuestionList { course_id, .. } => NavState::ExamList { course_id },
            NavState::ExamList { .. } | NavState::CourseList => NavState::CourseList,
        };
    }

    /// 当前选中的科目
    pub fn course_id(&self) -> Option<&str> {
        match &self.state {
            NavState::CourseList => None,
            NavState::ExamList { course_id } | NavState::QuestionList { course_id, .. } => {
                Some(course_id)
            }
        }
    }

    /// 当前选中的试卷
    pub fn exam_id(&self) -> Option<&str> {
        match &self.state {
            NavState::QuestionList { exam_id, .. } => Some(exam_id),
            _ => None,
        }
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_is_noop_at_course_list() {
        let mut nav = NavigationController::new();
        nav.back();
        assert_eq!(*nav.state(), NavState::CourseList);
        assert_eq!(nav.course_id(), None);
    }

    #[test]
    fn test_select_course_then_back() {
        let mut nav = NavigationController::new();
        nav.select_course("course1");
        assert_eq!(nav.course_id(), Some("course1"));

        nav.back();
        assert_eq!(*nav.state(), NavState::CourseList);
        assert_eq!(nav.course_id(), None);
    }

    #[test]
    fn test_back_from_question_list_keeps_course() {
        let mut nav = NavigationController::new();
        nav.select_course("course1");
        nav.select_exam("2011-1");
        assert_eq!(nav.course_id(), Some("course1"));
        assert_eq!(nav.exam_id(), Some("2011-1"));

        nav.back();
        assert_eq!(
            *nav.state(),
            NavState::ExamList {
                course_id: "course1".to_string()
            }
        );
        assert_eq!(nav.exam_id(), None);
    }

    #[test]
    fn test_select_exam_requires_exam_list_state() {
        let mut nav = NavigationController::new();
        nav.select_exam("2011-1");
        assert_eq!(*nav.state(), NavState::CourseList);
    }

    #[test]
    fn test_controller_cycles() {
        let mut nav = NavigationController::new();
        nav.select_course("course1");
        nav.select_exam("2011-1");
        nav.back();
        nav.back();
        nav.select_course("course2");
        assert_eq!(nav.course_id(), Some("course2"));
    }
}
