use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 文件操作错误（构建致命）
    File(FileError),
    /// 片段处理错误（可恢复，记录进构建报告后跳过片段）
    Fragment(FragmentError),
    /// 模板注入错误（构建致命）
    Template(TemplateError),
    /// 其他错误
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Fragment(e) => write!(f, "片段错误: {}", e),
            AppError::Template(e) => write!(f, "模板错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::File(e) => Some(e),
            AppError::Fragment(e) => Some(e),
            AppError::Template(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 目录不存在
    DirectoryNotFound { path: String },
    /// 文件不存在
    NotFound { path: String },
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::DirectoryNotFound { path } => write!(f, "目录不存在: {}", path),
            FileError::NotFound { path } => write!(f, "文件不存在: {}", path),
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
            FileError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. } | FileError::WriteFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 片段处理错误
///
/// 两种都不中断构建：记录进 BuildReport.errors 并跳过整个片段
#[derive(Debug)]
pub enum FragmentError {
    /// JSON 解码失败
    DecodeFailed {
        file: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 缺少必填元数据（course / year / session 任意一项）
    MissingMetadata { file: String },
}

impl fmt::Display for FragmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentError::DecodeFailed { file, source } => {
                write!(f, "JSON 解析失败: {} - {}", file, source)
            }
            FragmentError::MissingMetadata { file } => {
                write!(f, "缺少 metadata: {}", file)
            }
        }
    }
}

impl std::error::Error for FragmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FragmentError::DecodeFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            FragmentError::MissingMetadata { .. } => None,
        }
    }
}

/// 模板注入错误
#[derive(Debug)]
pub enum TemplateError {
    /// 模板中缺少占位语句
    PlaceholderNotFound { placeholder: String },
    /// 题库序列化失败
    SerializeFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::PlaceholderNotFound { placeholder } => {
                write!(f, "模板中未找到 {} 占位符", placeholder)
            }
            TemplateError::SerializeFailed { source } => {
                write!(f, "题库序列化失败: {}", source)
            }
        }
    }
}

impl std::error::Error for TemplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TemplateError::SerializeFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            TemplateError::PlaceholderNotFound { .. } => None,
        }
    }
}

// ========== 从常见错误类型转换 ==========

impl From<FileError> for AppError {
    fn from(err: FileError) -> Self {
        AppError::File(err)
    }
}

impl From<FragmentError> for AppError {
    fn from(err: FragmentError) -> Self {
        AppError::Fragment(err)
    }
}

impl From<TemplateError> for AppError {
    fn from(err: TemplateError) -> Self {
        AppError::Template(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Template(TemplateError::SerializeFailed {
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建目录不存在错误
    pub fn directory_not_found(path: impl Into<String>) -> Self {
        AppError::File(FileError::DirectoryNotFound { path: path.into() })
    }

    /// 创建文件不存在错误
    pub fn file_not_found(path: impl Into<String>) -> Self {
        AppError::File(FileError::NotFound { path: path.into() })
    }

    /// 创建写入失败错误
    pub fn write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建占位符缺失错误
    pub fn placeholder_not_found(placeholder: impl Into<String>) -> Self {
        AppError::Template(TemplateError::PlaceholderNotFound {
            placeholder: placeholder.into(),
        })
    }
}

impl FragmentError {
    /// 创建 JSON 解码失败错误
    pub fn decode_failed(
        file: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        FragmentError::DecodeFailed {
            file: file.into(),
            source: Box::new(source),
        }
    }

    /// 创建元数据缺失错误
    pub fn missing_metadata(file: impl Into<String>) -> Self {
        FragmentError::MissingMetadata { file: file.into() }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
