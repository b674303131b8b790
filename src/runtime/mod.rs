//! 运行时层
//!
//! 注入产物在浏览器中加载后使用的状态机。构建期不依赖这里的
//! 任何代码；宿主环境持有这些对象，把用户交互和资源加载完成
//! 事件转成方法调用。
//!
//! 全部状态变更都是单线程协作式的离散反应：没有取消，没有超时，
//! 唯一的共享可变状态是 ResourceLoader（见其单次获取保证）。
//! 题库本身注入后只读。

pub mod diagram;
pub mod disclosure;
pub mod math;
pub mod navigation;
pub mod resource_loader;

pub use diagram::{DiagramRenderer, SvgHost};
pub use disclosure::DisclosureController;
pub use math::{split_lines, MathRenderer, TypesetEngine};
pub use navigation::{NavState, NavigationController};
pub use resource_loader::{AcquisitionPlan, LoadState, OnReady, ResourceLoader, ResourceUrls};
