use crate::application::Config;
use crate::domain::{
    find_matching_dirs, remove_dirs, DeletionOutcome, ForceMode, NamePattern, SearchRequest,
    WipeError,
};
use crate::infrastructure::LoggerTrait;
use crate::presentation::{confirm, ConfirmationGate, OutputSink, Style, WipeSummary};

/// 执行一次完整的清理: 搜索, 列出并确认, 然后逐个删除
///
/// 搜索和确认阶段的错误会中止运行, 此时不会删除任何目录。
/// 单个目录删除失败只会被报告, 不会中止。
pub fn run(
    request: &SearchRequest,
    config: &Config,
    sink: &mut dyn OutputSink,
    gate: &mut dyn ConfirmationGate,
    logger: &dyn LoggerTrait,
) -> Result<WipeSummary, WipeError> {
    let mut summary = WipeSummary::new();

    if logger.is_enabled() {
        let _ = logger.log_message(&format!("起始目录: {}", request.root.display()));
        let _ = logger.log_message(&format!("目录模式: {}", request.patterns.join(",")));
        let _ = logger.log_message(&format!("强制删除: {:?}", request.force));
        let _ = logger.log_message(&format!("递归搜索: {}", request.recursive));
    }

    let patterns = NamePattern::compile_all(&request.patterns, config.search.case_sensitive)?;
    let matches = find_matching_dirs(&request.root, &patterns, request.recursive, logger)?;
    summary.matched = matches.len();

    if matches.is_empty() && config.gate.skip_when_empty {
        sink.emit(Style::Plain, "没有找到匹配的目录, 无需删除")
            .map_err(WipeError::Output)?;
        return Ok(summary);
    }

    confirm(&matches, sink, gate)?;
    if logger.is_enabled() {
        let _ = logger.log_message("用户已确认, 开始删除");
    }

    if request.force == ForceMode::Requested {
        sink.emit(Style::Warning, "强制删除尚未实现, 将按普通方式删除")
            .map_err(WipeError::Output)?;
    }

    let outcomes = remove_dirs(&matches, request.force, logger, |outcome| {
        if let DeletionOutcome::Failed(err) = outcome {
            let _ = sink.emit(Style::Error, &err.to_string());
        }
    });

    summary.removed = outcomes.iter().filter(|o| o.is_success()).count();
    summary.failed = outcomes.len() - summary.removed;

    if logger.is_enabled() {
        let _ = logger.finalize(summary.matched, summary.removed, summary.failed, summary.elapsed());
    }

    summary.print(sink).map_err(WipeError::Output)?;

    Ok(summary)
}
