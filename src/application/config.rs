use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::host_case_sensitive;

/// 应用程序配置
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 搜索相关配置
    pub search: SearchConfig,
    /// 确认环节配置
    pub gate: GateConfig,
    /// 显示相关配置
    pub display: DisplayConfig,
}

/// 搜索配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 目录名匹配是否区分大小写
    pub case_sensitive: bool,
}

/// 确认环节配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// 没有匹配目录时跳过确认
    pub skip_when_empty: bool,
}

/// 显示配置
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: ColorChoice,
}

/// 彩色输出选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// 仅在终端中输出颜色
    #[default]
    Auto,
    Always,
    Never,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: host_case_sensitive(),
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            skip_when_empty: true,
        }
    }
}

impl Config {
    /// 加载配置: 显式指定的文件必须存在, 否则尝试程序目录下的默认文件, 都没有时使用默认配置
    ///
    /// 不会自动创建配置文件。
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => match Self::default_config_path() {
                Ok(path) if path.is_file() => Self::load_from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// 从文件加载配置
    pub fn load_from_file(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("无法读取配置文件: {}", config_path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", config_path.display()))?;

        Ok(config)
    }

    /// 获取配置文件的默认路径
    pub fn default_config_path() -> Result<PathBuf> {
        let exe_path = std::env::current_exe()
            .context("无法获取程序路径")?;

        let exe_dir = exe_path.parent()
            .context("无法获取程序目录")?;

        Ok(exe_dir.join("wipedir.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.search.case_sensitive, !cfg!(windows));
        assert!(config.gate.skip_when_empty);
        assert_eq!(config.display.color, ColorChoice::Auto);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[display]\ncolor = \"never\"\n").unwrap();
        assert_eq!(config.display.color, ColorChoice::Never);
        assert!(config.gate.skip_when_empty);
    }

    #[test]
    fn test_invalid_color_rejected() {
        let result: Result<Config, _> = toml::from_str("[display]\ncolor = \"rainbow\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("wipedir.toml");
        fs::write(
            &config_path,
            "[search]\ncase_sensitive = false\n\n[gate]\nskip_when_empty = false\n",
        )
        .unwrap();

        let config = Config::load(Some(&config_path)).unwrap();
        assert!(!config.search.case_sensitive);
        assert!(!config.gate.skip_when_empty);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }
}
