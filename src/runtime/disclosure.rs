//! 解析展开状态
//!
//! 每道题一个"解析面板"开关，每个步骤一个"为什么"面板开关。
//! 开关之间互不影响，默认全部收起。

use std::collections::HashSet;

/// 展开状态控制器
#[derive(Debug, Clone, Default)]
pub struct DisclosureController {
    open_solutions: HashSet<String>,
    open_whys: HashSet<(String, usize)>,
}

impl DisclosureController {
    pub fn new() -> Self {
        Self::default()
    }

    /// 切换某道题的解析面板，返回切换后是否展开
    pub fn toggle_solution(&mut self, question_id: &str) -> bool {
        if self.open_solutions.remove(question_id) {
            false
        } else {
            self.open_solutions.insert(question_id.to_string());
            true
        }
    }

    pub fn is_solution_open(&self, question_id: &str) -> bool {
        self.open_solutions.contains(question_id)
    }

    /// 切换某步骤的"为什么"面板，返回切换后是否展开
    pub fn toggle_why(&mut self, question_id: &str, step_index: usize) -> bool {
        let key = (question_id.to_string(), step_index);
        if self.open_whys.remove(&key) {
            false
        } else {
            self.open_whys.insert(key);
            true
        }
    }

    pub fn is_why_open(&self, question_id: &str, step_index: usize) -> bool {
        self.open_whys
            .contains(&(question_id.to_string(), step_index))
    }
}
