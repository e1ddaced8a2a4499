use std::io;
use std::time::{Duration, Instant};

use crate::presentation::output::{OutputSink, Style};

/// 格式化持续时间
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}.{:03}s", secs, duration.subsec_millis())
    }
}

/// 清理摘要
#[derive(Debug)]
pub struct WipeSummary {
    pub start_time: Instant,
    pub matched: usize,
    pub removed: usize,
    pub failed: usize,
}

impl WipeSummary {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            matched: 0,
            removed: 0,
            failed: 0,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn print(&self, sink: &mut dyn OutputSink) -> io::Result<()> {
        let style = if self.failed > 0 { Style::Warning } else { Style::Plain };

        sink.emit(
            style,
            &format!(
                "已删除 {}/{} 个目录, 失败 {} 个, 用时 {}",
                self.removed,
                self.matched,
                self.failed,
                format_duration(self.elapsed())
            ),
        )
    }
}

impl Default for WipeSummary {
    fn default() -> Self {
        Self::new()
    }
}
