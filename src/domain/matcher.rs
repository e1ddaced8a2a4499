use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use ignore::WalkBuilder;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::error::SearchError;
use crate::infrastructure::LoggerTrait;

/// 目录名匹配模式 (通配符, 不是正则表达式)
#[derive(Debug, Clone)]
pub struct NamePattern {
    raw: String,
    pattern: Pattern,
    options: MatchOptions,
}

impl NamePattern {
    /// 编译单个模式
    ///
    /// 只有 `*` 和 `?` 是通配符, 连续的 `*` 等同于一个。`[` 和 `]` 按普通字符匹配。
    pub fn new(raw: &str, case_sensitive: bool) -> Result<Self, SearchError> {
        if raw.chars().any(std::path::is_separator) {
            return Err(SearchError::InvalidPattern {
                pattern: raw.to_string(),
                reason: "目录名模式不能包含路径分隔符".to_string(),
            });
        }

        let pattern = Pattern::new(&to_glob(raw)).map_err(|err| SearchError::InvalidPattern {
            pattern: raw.to_string(),
            reason: err.to_string(),
        })?;

        Ok(Self {
            raw: raw.to_string(),
            pattern,
            options: MatchOptions {
                case_sensitive,
                require_literal_separator: false,
                require_literal_leading_dot: false,
            },
        })
    }

    /// 按给定顺序编译全部模式
    pub fn compile_all(raws: &[String], case_sensitive: bool) -> Result<Vec<Self>, SearchError> {
        raws.iter()
            .map(|raw| Self::new(raw, case_sensitive))
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// 检查目录名是否匹配
    pub fn matches(&self, name: &str) -> bool {
        self.pattern.matches_with(name, self.options)
    }
}

/// 把目录名通配符转换为 glob 语法
fn to_glob(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_star = false;

    for c in raw.chars() {
        match c {
            '*' if prev_star => continue,
            '[' => out.push_str("[[]"),
            ']' => out.push_str("[]]"),
            _ => out.push(c),
        }
        prev_star = c == '*';
    }

    out
}

/// 当前平台默认是否区分大小写
pub fn host_case_sensitive() -> bool {
    !cfg!(windows)
}

/// 在 root 下查找名称匹配的目录
///
/// 结果先按模式的给出顺序分组, 组内保持文件系统枚举顺序。
/// 多个模式命中同一目录时不去重。指向目录的符号链接也是候选, 但不会进入其中。
/// 遍历中任何错误都会使整个搜索失败。
pub fn find_matching_dirs(
    root: &Path,
    patterns: &[NamePattern],
    recursive: bool,
    logger: &dyn LoggerTrait,
) -> Result<Vec<PathBuf>, SearchError> {
    let mut buckets: Vec<Vec<PathBuf>> = vec![Vec::new(); patterns.len()];

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .expect("无效的进度条模板"),
    );
    progress.set_message("已扫描 0 个目录");

    if logger.is_enabled() {
        let _ = logger.log_message(&format!(
            "开始扫描目录: {} (递归: {})",
            root.display(),
            recursive
        ));
    }

    let mut walker = WalkBuilder::new(root);
    walker
        .hidden(false) // 包含隐藏目录
        .follow_links(false) // 不跟随符号链接
        .parents(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .max_depth(if recursive { None } else { Some(1) });

    let mut scanned: u64 = 0;
    for result in walker.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                progress.finish_and_clear();
                if logger.is_enabled() {
                    let _ = logger.log_message(&format!("遍历错误: {}", err));
                }
                return Err(SearchError::Walk(err));
            }
        };

        // 起始目录本身不参与匹配
        if entry.depth() == 0 {
            continue;
        }

        // 只处理目录和指向目录的符号链接, 链接本身不会被跟随
        let is_dir = match entry.file_type() {
            Some(ft) if ft.is_dir() => true,
            Some(ft) if ft.is_symlink() => fs::metadata(entry.path()).map_or(false, |m| m.is_dir()),
            _ => false,
        };
        if !is_dir {
            continue;
        }

        scanned += 1;
        if scanned % 64 == 0 {
            progress.set_message(format!("已扫描 {} 个目录", scanned));
            progress.tick();
        }

        let name = entry.file_name().to_string_lossy();
        for (bucket, pattern) in buckets.iter_mut().zip(patterns) {
            if pattern.matches(&name) {
                if logger.is_enabled() {
                    let _ = logger.log_path_status(
                        entry.path(),
                        &format!("匹配模式 '{}'", pattern.as_str()),
                    );
                }
                bucket.push(entry.path().to_path_buf());
            }
        }
    }

    progress.finish_and_clear();

    let matches: Vec<PathBuf> = buckets.into_iter().flatten().collect();
    if logger.is_enabled() {
        let _ = logger.log_message(&format!(
            "扫描完成: {} 个目录, {} 个匹配",
            scanned,
            matches.len()
        ));
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Logger;
    use std::fs;
    use tempfile::tempdir;

    fn compile(raws: &[&str]) -> Vec<NamePattern> {
        let raws: Vec<String> = raws.iter().map(|s| s.to_string()).collect();
        NamePattern::compile_all(&raws, true).unwrap()
    }

    fn names(root: &Path, paths: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_pattern_matching() {
        let pattern = NamePattern::new("a*", true).unwrap();
        assert!(pattern.matches("a"));
        assert!(pattern.matches("ab"));
        assert!(!pattern.matches("b"));

        let pattern = NamePattern::new("b?n", true).unwrap();
        assert!(pattern.matches("bin"));
        assert!(!pattern.matches("bn"));

        let pattern = NamePattern::new("obj", false).unwrap();
        assert!(pattern.matches("OBJ"));
    }

    #[test]
    fn test_repeated_stars_collapse() {
        let pattern = NamePattern::new("node**", true).unwrap();
        assert!(pattern.matches("node"));
        assert!(pattern.matches("node_modules"));
        assert!(!pattern.matches("nod"));

        let pattern = NamePattern::new("a***b", true).unwrap();
        assert!(pattern.matches("ab"));
        assert!(pattern.matches("axxb"));
    }

    #[test]
    fn test_brackets_are_literal() {
        let pattern = NamePattern::new("[Build]", true).unwrap();
        assert!(pattern.matches("[Build]"));
        assert!(!pattern.matches("B"));

        let pattern = NamePattern::new("[a", true).unwrap();
        assert!(pattern.matches("[a"));

        let pattern = NamePattern::new("x]*", true).unwrap();
        assert!(pattern.matches("x]y"));
    }

    #[test]
    fn test_separator_rejected() {
        let result = NamePattern::new("app/bin", true);
        assert!(matches!(result, Err(SearchError::InvalidPattern { .. })));
    }

    #[test]
    fn test_literal_bracket_dir_found() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("[Build]")).unwrap();
        fs::create_dir(root.join("B")).unwrap();
        let logger = Logger::new(false).unwrap();

        let found = find_matching_dirs(root, &compile(&["[Build]"]), false, &logger).unwrap();
        assert_eq!(found, vec![root.join("[Build]")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dir_symlink_is_candidate_but_not_entered() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("store").join("cache")).unwrap();
        std::os::unix::fs::symlink(root.join("store"), root.join("linked")).unwrap();
        std::os::unix::fs::symlink(root.join("missing"), root.join("dangling")).unwrap();
        let logger = Logger::new(false).unwrap();

        let found = find_matching_dirs(root, &compile(&["linked", "dangling"]), true, &logger).unwrap();
        assert_eq!(found, vec![root.join("linked")]);

        // 不会通过链接找到 store/cache 的第二个副本
        let found = find_matching_dirs(root, &compile(&["cache"]), true, &logger).unwrap();
        assert_eq!(found, vec![root.join("store").join("cache")]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("a")).unwrap();
        let logger = Logger::new(false).unwrap();

        let found = find_matching_dirs(temp_dir.path(), &compile(&["zzz"]), false, &logger).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_top_level_matching() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        for name in ["a", "ab", "b"] {
            fs::create_dir(root.join(name)).unwrap();
        }
        // 文件不参与匹配
        fs::write(root.join("abc"), "file").unwrap();
        let logger = Logger::new(false).unwrap();

        let found = find_matching_dirs(root, &compile(&["a*"]), false, &logger).unwrap();
        assert_eq!(names(root, &found), vec!["a", "ab"]);

        let found = find_matching_dirs(root, &compile(&["b"]), false, &logger).unwrap();
        assert_eq!(names(root, &found), vec!["b"]);
    }

    #[test]
    fn test_recursive_matching() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("x").join("a")).unwrap();
        let logger = Logger::new(false).unwrap();

        let found = find_matching_dirs(root, &compile(&["a"]), true, &logger).unwrap();
        assert_eq!(names(root, &found), vec!["x/a"]);

        let found = find_matching_dirs(root, &compile(&["a"]), false, &logger).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_pattern_order_and_duplicates() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        for name in ["ab", "c"] {
            fs::create_dir(root.join(name)).unwrap();
        }
        let logger = Logger::new(false).unwrap();

        let found = find_matching_dirs(root, &compile(&["c", "a*", "ab"]), false, &logger).unwrap();
        assert_eq!(found, vec![root.join("c"), root.join("ab"), root.join("ab")]);
    }

    #[test]
    fn test_hidden_dirs_are_candidates() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join(".cache")).unwrap();
        fs::write(root.join(".gitignore"), ".cache\n").unwrap();
        let logger = Logger::new(false).unwrap();

        let found = find_matching_dirs(root, &compile(&[".cache"]), false, &logger).unwrap();
        assert_eq!(found, vec![root.join(".cache")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdir_fails_search() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        let locked = root.join("locked");
        fs::create_dir_all(locked.join("inner")).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // root 用户不受权限位限制, 此时无法构造出错场景
        let readable = fs::read_dir(&locked).is_ok();
        let logger = Logger::new(false).unwrap();
        let result = find_matching_dirs(root, &compile(&["inner"]), true, &logger);

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if !readable {
            assert!(matches!(result, Err(SearchError::Walk(_))));
        }
    }
}
