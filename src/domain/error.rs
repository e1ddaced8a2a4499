use std::path::PathBuf;

use thiserror::Error;

/// 参数校验错误
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("参数 '-s' 不能为空或只包含空白字符")]
    Blank,

    #[error("参数 -s 的值 '{0}' 不是一个目录")]
    NotADirectory(String),

    #[error("至少需要一个 '-d' 参数")]
    NoPatterns,

    #[error("'-d' 参数最多只能提供 {max} 次, 实际提供了 {given} 次")]
    TooManyPatterns { given: usize, max: usize },
}

/// 搜索阶段错误, 出现即中止整个运行
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("无效的目录名模式 '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("由于权限问题无法访问所有目录: {0}")]
    Walk(#[from] ignore::Error),
}

/// 确认环节错误
#[derive(Debug, Error)]
pub enum GateError {
    #[error("输入已结束, 未收到确认, 不会删除任何目录")]
    NotAcknowledged,

    #[error("读取确认输入失败: {0}")]
    Io(#[from] std::io::Error),
}

/// 整个运行过程中的致命错误
#[derive(Debug, Error)]
pub enum WipeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Gate(#[from] GateError),

    #[error("输出失败: {0}")]
    Output(#[source] std::io::Error),
}

/// 单个目录删除失败的原因
#[derive(Debug, Error)]
#[error("无法删除目录 '{}': {source}", .path.display())]
pub struct DeletionError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
