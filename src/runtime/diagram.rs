//! 内联矢量图渲染
//!
//! 把原始 SVG 字符串原样写入宿主容器，内容缺失时不渲染。
//!
//! 信任边界：标记不做清洗。图表内容由构建期受信任的内容管线产出，
//! 不是运行时的用户输入。

/// 承载原始标记的宿主容器
pub trait SvgHost {
    /// 将原始标记写入容器
    fn insert_raw(&mut self, markup: &str);
}

/// 矢量图渲染器
pub struct DiagramRenderer;

impl DiagramRenderer {
    /// 渲染图表；内容缺失或为空串时什么都不做
    ///
    /// 返回是否实际写入了宿主
    pub fn render(svg: Option<&str>, host: &mut dyn SvgHost) -> bool {
        match svg {
            Some(markup) if !markup.is_empty() => {
                host.insert_raw(markup);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockHost {
        inserted: Vec<String>,
    }

    impl SvgHost for MockHost {
        fn insert_raw(&mut self, markup: &str) {
            self.inserted.push(markup.to_string());
        }
    }

    #[test]
    fn test_render_inserts_markup_verbatim() {
        let mut host = MockHost::default();
        let markup = "<svg viewBox=\"0 0 100 100\"><circle r=\"40\"/></svg>";

        assert!(DiagramRenderer::render(Some(markup), &mut host));
        assert_eq!(host.inserted, vec![markup]);
    }

    #[test]
    fn test_render_skips_missing_or_empty() {
        let mut host = MockHost::default();
        assert!(!DiagramRenderer::render(None, &mut host));
        assert!(!DiagramRenderer::render(Some(""), &mut host));
        assert!(host.inserted.is_empty());
    }
}
