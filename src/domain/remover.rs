use std::fs;
use std::path::PathBuf;

use crate::domain::error::DeletionError;
use crate::domain::request::ForceMode;
use crate::infrastructure::LoggerTrait;

/// 单个目录的删除结果
#[derive(Debug)]
pub enum DeletionOutcome {
    Succeeded(PathBuf),
    Failed(DeletionError),
}

impl DeletionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeletionOutcome::Succeeded(_))
    }
}

/// 依次删除每个目录及其全部内容
///
/// 每个目录只尝试一次。某个目录失败不会影响其余目录, 返回结果与输入一一对应。
/// 符号链接只删除链接本身, 不会删除链接指向的内容。
/// `force` 当前不改变任何行为。
pub fn remove_dirs<F>(
    paths: &[PathBuf],
    _force: ForceMode,
    logger: &dyn LoggerTrait,
    mut on_outcome: F,
) -> Vec<DeletionOutcome>
where
    F: FnMut(&DeletionOutcome),
{
    let mut outcomes = Vec::with_capacity(paths.len());

    for path in paths {
        let outcome = match fs::remove_dir_all(path) {
            Ok(()) => DeletionOutcome::Succeeded(path.clone()),
            Err(source) => DeletionOutcome::Failed(DeletionError {
                path: path.clone(),
                source,
            }),
        };

        if logger.is_enabled() {
            let status = match &outcome {
                DeletionOutcome::Succeeded(_) => "已删除".to_string(),
                DeletionOutcome::Failed(err) => format!("删除失败: {}", err.source),
            };
            let _ = logger.log_path_status(path, &status);
        }

        on_outcome(&outcome);
        outcomes.push(outcome);
    }

    outcomes
}
