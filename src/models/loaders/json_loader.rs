//! 片段加载器
//!
//! 扫描数据目录中的 JSON 文件并按文件名升序读取。
//! 读取顺序是正确性依赖：同一 (course, examKey) 的片段后写覆盖，
//! 顺序决定胜者，所以这里必须排序后再交给合并器。

use crate::error::AppError;
use crate::models::fragment::FragmentSource;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

/// 扫描数据目录，返回按文件名升序排列的 JSON 文件路径
///
/// 数据目录不存在是构建致命错误
pub async fn scan_fragment_files(data_dir: &str) -> Result<Vec<PathBuf>> {
    let folder = PathBuf::from(data_dir);

    if !folder.exists() {
        return Err(AppError::directory_not_found(data_dir).into());
    }

    let mut json_files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取数据目录: {}", data_dir))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            json_files.push(path);
        }
    }

    json_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(json_files)
}

/// 按给定顺序读取片段内容
///
/// 单个文件读取失败只告警并跳过；内容是否能解析由合并器判断
/// 并记录进构建报告
pub async fn load_fragment_sources(files: &[PathBuf]) -> Vec<FragmentSource> {
    let mut sources = Vec::with_capacity(files.len());

    for path in files {
        match fs::read_to_string(path).await {
            Ok(content) => sources.push(FragmentSource {
                file_name: display_name(path),
                content,
            }),
            Err(e) => {
                warn!("⚠️ 读取文件失败 {}: {}", path.display(), e);
            }
        }
    }

    sources
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
