//! 排版引擎加载器
//!
//! 进程内只允许一次外部资源获取：一张样式表加两个有先后依赖的
//! 脚本（自动渲染脚本必须等引擎脚本加载完成后才开始）。
//! 所有等待方的回调在就绪时按入队顺序各触发一次。
//!
//! 加载失败没有建模：获取一旦开始，要么完成要么永远挂起，
//! 等待方不会收到失败通知（已知缺口）。

/// 就绪回调
pub type OnReady = Box<dyn FnOnce()>;

/// 加载状态：idle → loading → ready（终态）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
}

/// 外部资源地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceUrls {
    pub stylesheet: String,
    pub engine_script: String,
    pub auto_render_script: String,
}

impl Default for ResourceUrls {
    fn default() -> Self {
        Self {
            stylesheet:
                "https://cdnjs.cloudflare.com/ajax/libs/KaTeX/0.16.9/katex.min.css".to_string(),
            engine_script:
                "https://cdnjs.cloudflare.com/ajax/libs/KaTeX/0.16.9/katex.min.js".to_string(),
            auto_render_script:
                "https://cdnjs.cloudflare.com/ajax/libs/KaTeX/0.16.9/contrib/auto-render.min.js"
                    .to_string(),
        }
    }
}

/// 获取计划：宿主应立即请求样式表与引擎脚本
///
/// 第二个脚本的地址在 engine_script_loaded 时才给出，
/// 保证两个脚本的先后依赖
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquisitionPlan {
    pub stylesheet: String,
    pub engine_script: String,
}

/// 单次加载器
///
/// 显式可构造的状态对象，由宿主环境的组合根持有；
/// ensure 是唯一的变更入口
pub struct ResourceLoader {
    state: LoadState,
    pending: Vec<OnReady>,
    urls: ResourceUrls,
}

impl ResourceLoader {
    pub fn new(urls: ResourceUrls) -> Self {
        Self {
            state: LoadState::Idle,
            pending: Vec::new(),
            urls,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// 请求就绪通知
    ///
    /// - ready：立即（同轮）调用回调
    /// - idle：入队并开始获取，返回 Some(获取计划)——整个生命周期只返回一次
    /// - loading：仅入队，绝不发起第二次获取
    pub fn ensure(&mut self, on_ready: OnReady) -> Option<AcquisitionPlan> {
        match self.state {
            LoadState::Ready => {
                on_ready();
                None
            }
            LoadState::Loading => {
                self.pending.push(on_ready);
                None
            }
            LoadState::Idle => {
                self.state = LoadState::Loading;
                self.pending.push(on_ready);
                Some(AcquisitionPlan {
                    stylesheet: self.urls.stylesheet.clone(),
                    engine_script: self.urls.engine_script.clone(),
                })
            }
        }
    }

    /// 引擎脚本加载完成，返回接下来要加载的脚本地址
    ///
    /// 仅在 loading 状态有意义，其余状态返回 None
    pub fn engine_script_loaded(&mut self) -> Option<String> {
        match self.state {
            LoadState::Loading => Some(self.urls.auto_render_script.clone()),
            _ => None,
        }
    }

    /// 自动渲染脚本加载完成
    ///
    /// 进入 ready（终态），按入队顺序触发全部回调并清空队列
    pub fn auto_render_script_loaded(&mut self) {
        if self.state != LoadState::Loading {
            return;
        }
        self.state = LoadState::Ready;
        let pending = std::mem::take(&mut self.pending);
        for callback in pending {
            callback();
        }
    }
}

impl Default for ResourceLoader {
    fn default() -> Self {
        Self::new(ResourceUrls::default())
    }
}
