use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 文本提取错误
    #[error("文本提取错误: {0}")]
    Extraction(#[from] ExtractionError),
    /// 报表生成错误
    #[error("报表错误: {0}")]
    Report(#[from] ReportError),
    /// 文档中没有识别出任何学生
    #[error("❌ 未在该 PDF 中找到学生数据")]
    NoStudentData,
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 文本提取错误
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// PDF 解析失败
    #[error("PDF 解析失败: {0}")]
    PdfParsing(String),
    /// PDF 库在畸形文档上 panic
    #[error("PDF 解析过程中发生 panic (文档格式异常)")]
    Panicked,
    /// 阻塞任务执行失败
    #[error("提取任务执行失败: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// 报表生成错误
#[derive(Debug, Error)]
pub enum ReportError {
    /// 生成 Excel 工作簿失败
    #[error("生成 Excel 失败: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
    /// 序列化汇总数据失败
    #[error("汇总数据序列化失败: {0}")]
    Summary(#[from] serde_json::Error),
}

// ========== 从常见错误类型转换 ==========

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Report(ReportError::Workbook(err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Report(ReportError::Summary(err))
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return AppError::File(FileError::NotFound { path });
        }
        AppError::File(FileError::ReadFailed { path, source })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
