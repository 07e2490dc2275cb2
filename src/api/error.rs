// ==========================================
// 发电机组项目状态看板 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，给上层用户友好的错误消息
// ==========================================

use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 输入校验 =====
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ===== 数据状态 =====
    #[error("数据未加载: {0}")]
    DataNotLoaded(String),

    #[error("数据加载失败: {0}")]
    LoadError(String),

    // ===== 通用 =====
    #[error("序列化失败: {0}")]
    SerializationError(String),

    #[error("内部错误: {0}")]
    InternalError(String),
}

// 加载失败统一转为 API 层错误
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::LoadError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
