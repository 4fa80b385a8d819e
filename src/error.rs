//! 错误分类
//!
//! 文档级失败分为三类，驱动层据此决定跳过还是报错：
//! - NotFound：警告后跳过，批处理继续
//! - MalformedInput：放弃该文档，原文件保持不变
//! - WriteFailure：写回失败，原文件保持不变（原子替换保证）

use std::path::PathBuf;

use thiserror::Error;

/// 文档处理错误
#[derive(Debug, Error)]
pub enum CleanError {
    /// 文档不存在
    #[error("文档不存在: {path}")]
    NotFound { path: PathBuf },

    /// 文档无法解码为词库结构
    #[error("文档格式错误: {path}: {cause}")]
    MalformedInput {
        path: PathBuf,
        // anyhow::Error 不实现 std::error::Error，不能作为 source 链
        cause: anyhow::Error,
    },

    /// 写回失败
    #[error("写回失败: {path}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
