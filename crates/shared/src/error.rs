//! 统一错误处理模块
//!
//! 定义数据生成流程中所有共享的错误类型，使用 thiserror 提供良好的错误信息。
//! 所有错误对离线批处理而言都是致命的，不做重试。

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 数据生成错误类型
#[derive(Debug, Error)]
pub enum SeedError {
    // ==================== 文件错误 ====================
    #[error("文件读写失败: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("输入数据格式错误: {path}: {source}")]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // ==================== 生成错误 ====================
    #[error("序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("密码哈希失败: {0}")]
    PasswordHash(String),

    // ==================== 配置错误 ====================
    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),

    #[error("无效的参数: {field} - {message}")]
    InvalidArgument { field: String, message: String },
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, SeedError>;

impl SeedError {
    /// 构造 I/O 错误，附带出错的文件路径
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// 构造参数错误
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "IO_ERROR",
            Self::MalformedInput { .. } => "MALFORMED_INPUT",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::PasswordHash(_) => "PASSWORD_HASH_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
        }
    }
}
