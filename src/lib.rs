//! # EJU Math Builder
//!
//! 把 EJU 数学真题的 JSON 片段（每个文件一套试卷）合并为统一的
//! 嵌套题库，注入展示模板，生成单文件、可离线部署的解析页面。
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 输入片段、合并后题库、构建报告的数据结构
//! - `models/loaders` - 数据目录扫描与片段读取（文件名升序）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"构建能做什么"，只处理单个片段/题目
//! - `FragmentValidator` - 元数据校验能力
//! - `QuestionNormalizer` - 题目规范化能力
//! - `DatabaseMerger` - 片段合并能力（后写覆盖）
//! - `TemplateInjector` - 模板注入能力
//!
//! ### ③ 运行时层（Runtime）
//! - `runtime/` - 注入产物加载后使用的状态机，构建期不依赖
//! - `ResourceLoader` - 排版引擎的单次加载器
//! - `MathRenderer` / `DiagramRenderer` - 数学与图表渲染
//! - `NavigationController` / `DisclosureController` - 导航与展开状态
//!
//! ### ④ 编排层（Orchestration）
//! - `app` - 完整构建流程：扫描 → 合并 → 注入 → 写出

pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod runtime;
pub mod services;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult, FragmentError, TemplateError};
pub use models::database::{Course, Exam, ExamDatabase};
pub use models::fragment::{Fragment, FragmentSource};
pub use models::report::BuildReport;
pub use services::injector::TemplateInjector;
pub use services::merger::DatabaseMerger;
