use std::io::{self, IsTerminal, Write};

use crate::application::ColorChoice;

/// 输出样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    /// 确认提示 (绿色)
    Prompt,
    /// 警告 (红色)
    Warning,
    /// 错误 (红色)
    Error,
}

impl Style {
    fn ansi_code(&self) -> Option<&'static str> {
        match self {
            Style::Plain => None,
            Style::Prompt => Some("\x1b[1;32m"),
            Style::Warning | Style::Error => Some("\x1b[1;31m"),
        }
    }
}

/// 输出目标, 每条消息都带有自己的样式
pub trait OutputSink {
    fn emit(&mut self, style: Style, message: &str) -> io::Result<()>;
}

/// 标准输出
pub struct ConsoleSink {
    colored: bool,
}

impl ConsoleSink {
    pub fn new(choice: ColorChoice) -> Self {
        let colored = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };
        Self { colored }
    }
}

impl OutputSink for ConsoleSink {
    fn emit(&mut self, style: Style, message: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();

        match style.ansi_code().filter(|_| self.colored) {
            Some(code) => writeln!(stdout, "{}{}\x1b[0m", code, message)?,
            None => writeln!(stdout, "{}", message)?,
        }

        // 确认提示之后会阻塞等待输入, 必须立即刷新
        stdout.flush()
    }
}

/// 记录所有输出, 供测试检查
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSink {
    pub lines: Vec<(Style, String)>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn count(&self, style: Style) -> usize {
        self.lines.iter().filter(|(s, _)| *s == style).count()
    }
}

#[cfg(test)]
impl OutputSink for RecordingSink {
    fn emit(&mut self, style: Style, message: &str) -> io::Result<()> {
        self.lines.push((style, message.to_string()));
        Ok(())
    }
}
