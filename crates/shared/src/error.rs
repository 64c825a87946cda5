//! 统一错误处理模块
//!
//! 定义夹具库共享的错误类型，使用 thiserror 提供良好的错误信息。
//! 夹具数据本身是编译期常量，不会失败；错误只来自查询和导出。

use thiserror::Error;

/// 夹具系统错误类型
#[derive(Debug, Error)]
pub enum FixtureError {
    // ==================== 查询错误 ====================
    #[error("记录未找到: {entity} id={id}")]
    NotFound { entity: String, id: String },

    #[error("位置越界: position={position}, 有效范围 1..={len}")]
    PositionOutOfRange { position: usize, len: usize },

    // ==================== 验证错误 ====================
    #[error("无效的参数: {field} - {message}")]
    InvalidArgument { field: String, message: String },

    // ==================== 导出错误 ====================
    #[error("序列化失败: {0}")]
    Serialization(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, FixtureError>;

impl FixtureError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::PositionOutOfRange { .. } => "POSITION_OUT_OF_RANGE",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for FixtureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
