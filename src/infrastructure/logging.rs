use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;

/// 日志记录器trait
pub trait LoggerTrait {
    fn is_enabled(&self) -> bool;
    fn log_message(&self, message: &str) -> Result<()>;
    fn log_path_status(&self, path: &Path, status: &str) -> Result<()>;
    fn finalize(&self, matched: usize, removed: usize, failed: usize, duration: Duration) -> Result<()>;
}

/// 调试日志记录器, 只有 `--log` 时才会创建日志文件
pub struct Logger {
    log_file: Mutex<Option<File>>,
    log_path: PathBuf,
    enabled: bool,
}

impl Logger {
    /// 创建新的日志记录器, 日志文件位于当前工作目录
    pub fn new(enabled: bool) -> Result<Self> {
        if !enabled {
            return Ok(Self {
                log_file: Mutex::new(None),
                log_path: PathBuf::new(),
                enabled: false,
            });
        }

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        Self::with_path(PathBuf::from(format!("wipedir_{}.log", timestamp)))
    }

    /// 在指定路径创建日志文件
    pub fn with_path(log_path: PathBuf) -> Result<Self> {
        let now = Local::now();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("无法创建日志文件: {}", log_path.display()))?;

        // 写入UTF-8 BOM以确保文件被正确识别为UTF-8
        file.write_all(&[0xEF, 0xBB, 0xBF])?;
        writeln!(file, "# Wipedir 调试日志")?;
        writeln!(file, "# 开始时间: {}", now.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(file, "# --------------------------------------------")?;
        file.flush()?;

        Ok(Self {
            log_file: Mutex::new(Some(file)),
            log_path,
            enabled: true,
        })
    }

    /// 获取日志文件路径
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    fn write_line(&self, line: &str) -> Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        if let Ok(mut file_guard) = self.log_file.lock() {
            if let Some(ref mut file) = *file_guard {
                writeln!(file, "[{}] {}", timestamp, line)?;
                file.flush()?;
            }
        }

        Ok(())
    }
}

impl LoggerTrait for Logger {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn log_message(&self, message: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.write_line(message)
    }

    fn log_path_status(&self, path: &Path, status: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.write_line(&format!("目录: {} | 状态: {}", path.display(), status))
    }

    fn finalize(&self, matched: usize, removed: usize, failed: usize, duration: Duration) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let now = Local::now();

        if let Ok(mut file_guard) = self.log_file.lock() {
            if let Some(ref mut file) = *file_guard {
                writeln!(file, "# --------------------------------------------")?;
                writeln!(file, "# 完成时间: {}", now.format("%Y-%m-%d %H:%M:%S"))?;
                writeln!(file, "# 总用时: {:.3}秒", duration.as_secs_f64())?;
                writeln!(file, "# 匹配目录数: {}", matched)?;
                writeln!(file, "# 已删除: {}", removed)?;
                writeln!(file, "# 删除失败: {}", failed)?;
                writeln!(file, "# ============================================")?;
                file.flush()?;
            }
        }

        Ok(())
    }
}
