use std::path::{Path, PathBuf};

use crate::domain::error::ValidationError;

/// 单次运行最多允许的目录名模式数量
pub const MAX_PATTERNS: usize = 10;

/// 强制删除模式
///
/// `--force` 目前只是保留参数, 两种模式的删除行为完全相同。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceMode {
    #[default]
    Standard,
    /// 用户请求了强制删除, 但尚未实现
    Requested,
}

impl From<bool> for ForceMode {
    fn from(force: bool) -> Self {
        if force {
            ForceMode::Requested
        } else {
            ForceMode::Standard
        }
    }
}

/// 一次清理请求
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub root: PathBuf,
    pub patterns: Vec<String>,
    pub recursive: bool,
    pub force: ForceMode,
}

impl SearchRequest {
    /// 校验命令行输入并构建请求
    pub fn new(
        start: &str,
        patterns: Vec<String>,
        recursive: bool,
        force: ForceMode,
    ) -> Result<Self, ValidationError> {
        let root = validate_start_dir(start)?;

        if patterns.is_empty() {
            return Err(ValidationError::NoPatterns);
        }
        if patterns.len() > MAX_PATTERNS {
            return Err(ValidationError::TooManyPatterns {
                given: patterns.len(),
                max: MAX_PATTERNS,
            });
        }

        Ok(Self {
            root,
            patterns,
            recursive,
            force,
        })
    }
}

/// 校验起始目录, 返回其绝对路径
pub fn validate_start_dir(value: &str) -> Result<PathBuf, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank);
    }

    let path = Path::new(value);
    if !path.is_dir() {
        return Err(ValidationError::NotADirectory(value.to_string()));
    }

    std::path::absolute(path).map_err(|_| ValidationError::NotADirectory(value.to_string()))
}
