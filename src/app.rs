//! 构建编排层
//!
//! 完整构建流程：扫描数据目录 → 合并 → 打印报告 → 注入模板 → 写出。
//! 致命错误（数据目录缺失、模板缺失、占位符缺失）直接返回错误，
//! 不写出任何产物；片段级错误只出现在报告里。

use crate::config::Config;
use crate::error::AppError;
use crate::models::database::ExamDatabase;
use crate::models::loaders;
use crate::models::report::BuildReport;
use crate::services::injector::TemplateInjector;
use crate::services::merger::DatabaseMerger;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// 构建应用
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 执行一次完整构建
    pub async fn run(&self) -> Result<()> {
        log_startup(&self.config);

        // 扫描并读取片段（目录缺失是致命错误）
        let files = loaders::scan_fragment_files(&self.config.data_dir).await?;
        log_files_found(&files);

        let sources = loaders::load_fragment_sources(&files).await;

        // 合并
        let (db, report) = DatabaseMerger::merge(&sources);
        log_report(&report, &db);

        // 读取模板并注入（模板缺失、占位符缺失是致命错误）
        if !Path::new(&self.config.template_file).exists() {
            return Err(AppError::file_not_found(&self.config.template_file).into());
        }
        let template = fs::read_to_string(&self.config.template_file)
            .await
            .with_context(|| format!("无法读取模板文件: {}", self.config.template_file))?;
        let output = TemplateInjector::inject(&template, &db)?;

        // 写出，按需创建父目录
        if let Some(parent) = Path::new(&self.config.out_file).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("无法创建输出目录: {}", parent.display()))?;
            }
        }
        fs::write(&self.config.out_file, &output)
            .await
            .with_context(|| format!("无法写入输出文件: {}", self.config.out_file))?;

        log_final_stats(&self.config.out_file, output.len(), &db, &report);

        Ok(())
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("📂 数据目录: {}", config.data_dir);
    info!("📄 模板文件: {}", config.template_file);
    info!("📦 输出文件: {}", config.out_file);
}

fn log_files_found(files: &[PathBuf]) {
    info!("📑 发现 {} 个 JSON 文件:", files.len());
    for path in files {
        info!(
            "   - {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );
    }
}

fn log_report(report: &BuildReport, db: &ExamDatabase) {
    info!("{}", "=".repeat(50));
    info!("📊 构建报告 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("{}", "=".repeat(50));
    info!("总题数: {}", report.total);
    info!("答案匹配: {} ✅", report.passed);
    info!("需人工审查: {} ⚠️", report.needs_review);
    if !report.errors.is_empty() {
        info!("错误:");
        for error in &report.errors {
            info!("  {}", error);
        }
    }

    // 汇总各课程的试卷数与题目数
    for course in db.courses() {
        info!(
            "{} ({}): {} 套试卷, {} 题",
            course.name,
            course.id,
            course.exams.len(),
            course.question_count()
        );
    }
}

fn log_final_stats(out_file: &str, output_bytes: usize, db: &ExamDatabase, report: &BuildReport) {
    let size_kb = output_bytes as f64 / 1024.0;
    info!("✨ 构建完成: {} ({:.1} KB)", out_file, size_kb);
    info!("   课程数: {}", db.course_count());
    info!("   试卷数: {}", db.exam_count());
    info!("   总题数: {}", report.total);
}
