use std::io::{self, BufRead, StdinLock};
use std::path::PathBuf;

use crate::domain::GateError;
use crate::presentation::output::{OutputSink, Style};

/// 删除前的人工确认
pub trait ConfirmationGate {
    /// 阻塞直到用户确认
    fn wait(&mut self) -> Result<(), GateError>;
}

/// 读取一行输入 (回车) 作为确认
///
/// 需要按回车, 而不是任意单个按键: 读取单个按键需要终端原始模式, 这里只使用标准输入。
/// 提示文字也明确要求按回车。
pub struct LineGate<R: BufRead> {
    input: R,
}

impl<R: BufRead> LineGate<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl LineGate<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> ConfirmationGate for LineGate<R> {
    fn wait(&mut self) -> Result<(), GateError> {
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Err(GateError::NotAcknowledged),
            _ => Ok(()),
        }
    }
}

/// 列出所有待删除目录, 然后等待确认
pub fn confirm(
    paths: &[PathBuf],
    sink: &mut dyn OutputSink,
    gate: &mut dyn ConfirmationGate,
) -> Result<(), GateError> {
    for path in paths {
        sink.emit(Style::Plain, &path.display().to_string())?;
    }
    sink.emit(Style::Prompt, "按回车键继续...")?;

    gate.wait()
}
