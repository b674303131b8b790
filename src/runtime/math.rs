//! 数学文本渲染
//!
//! 把多行文本按行拆开（换行保留为显式断行），在排版引擎就绪后
//! 请求引擎扫描容器，把 $…$ / $$…$$ 分隔的公式替换为排版结果。
//! 分隔符的识别与替换属于引擎，这里不做任何解析。

use std::cell::RefCell;
use std::rc::Rc;

use super::resource_loader::{AcquisitionPlan, ResourceLoader};

/// 排版引擎（外部服务）
///
/// `$…$` 按行内、`$$…$$` 按块级排版
pub trait TypesetEngine {
    /// 扫描容器并排版其中的数学内容
    fn typeset(&mut self, container_id: &str);
}

/// 按行拆分文本；空行保留
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// 数学文本渲染器：一个容器对应一段文本
pub struct MathRenderer {
    container_id: String,
    text: String,
}

impl MathRenderer {
    pub fn new(container_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            text: text.into(),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// 显示用的行列表，换行保留为显式断行
    pub fn lines(&self) -> Vec<&str> {
        split_lines(&self.text)
    }

    /// 更新文本；之后需要重新调用 render
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// 请求排版
    ///
    /// 引擎就绪时立即排版；否则挂起回调，就绪后自动排版。
    /// 返回 Some 时宿主需要按计划启动资源获取（见 ResourceLoader）
    pub fn render(
        &self,
        loader: &mut ResourceLoader,
        engine: &Rc<RefCell<dyn TypesetEngine>>,
    ) -> Option<AcquisitionPlan> {
        let engine = Rc::clone(engine);
        let container_id = self.container_id.clone();
        loader.ensure(Box::new(move || engine.borrow_mut().typeset(&container_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::resource_loader::LoadState;

    struct MockEngine {
        typeset_calls: Vec<String>,
    }

    impl TypesetEngine for MockEngine {
        fn typeset(&mut self, container_id: &str) {
            self.typeset_calls.push(container_id.to_string());
        }
    }

    fn mock_engine() -> Rc<RefCell<MockEngine>> {
        Rc::new(RefCell::new(MockEngine {
            typeset_calls: Vec::new(),
        }))
    }

    #[test]
    fn test_split_lines_preserves_breaks() {
        assert_eq!(
            split_lines("第一行 $x^2$\n\n$$y = x$$"),
            vec!["第一行 $x^2$", "", "$$y = x$$"]
        );
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_render_waits_for_readiness() {
        let mut loader = ResourceLoader::default();
        let engine = mock_engine();
        let engine_dyn: Rc<RefCell<dyn TypesetEngine>> = engine.clone();

        let renderer = MathRenderer::new("question-1", "三角形 $ABC$");
        let plan = renderer.render(&mut loader, &engine_dyn);

        // 第一次渲染触发获取；就绪前不排版
        assert!(plan.is_some());
        assert!(engine.borrow().typeset_calls.is_empty());

        loader.engine_script_loaded();
        loader.auto_render_script_loaded();
        assert_eq!(engine.borrow().typeset_calls, vec!["question-1"]);
    }

    #[test]
    fn test_render_after_ready_typesets_immediately() {
        let mut loader = ResourceLoader::default();
        let engine = mock_engine();
        let engine_dyn: Rc<RefCell<dyn TypesetEngine>> = engine.clone();

        let mut renderer = MathRenderer::new("step-3", "$a+b$");
        renderer.render(&mut loader, &engine_dyn);
        loader.engine_script_loaded();
        loader.auto_render_script_loaded();

        // 文本变更后的重渲染：就绪态立即排版，不再获取
        renderer.set_text("$a+b+c$");
        let plan = renderer.render(&mut loader, &engine_dyn);
        assert!(plan.is_none());
        assert_eq!(loader.state(), LoadState::Ready);
        assert_eq!(engine.borrow().typeset_calls, vec!["step-3", "step-3"]);
    }

    #[test]
    fn test_many_renderers_share_one_acquisition() {
        let mut loader = ResourceLoader::default();
        let engine = mock_engine();
        let engine_dyn: Rc<RefCell<dyn TypesetEngine>> = engine.clone();

        let renderers: Vec<MathRenderer> = (0..4)
            .map(|i| MathRenderer::new(format!("q-{}", i), "$x$"))
            .collect();

        let plans: Vec<_> = renderers
            .iter()
            .map(|r| r.render(&mut loader, &engine_dyn))
            .collect();
        assert_eq!(plans.iter().filter(|p| p.is_some()).count(), 1);

        loader.engine_script_loaded();
        loader.auto_render_script_loaded();
        assert_eq!(
            engine.borrow().typeset_calls,
            vec!["q-0", "q-1", "q-2", "q-3"]
        );
    }
}
