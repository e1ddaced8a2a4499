// 三层架构模块
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

// 重新导出主要类型
pub use domain::{DeletionOutcome, ForceMode, NamePattern, SearchRequest, WipeError};
pub use application::Config;
pub use infrastructure::{Logger, LoggerTrait};
pub use presentation::{ConsoleSink, LineGate, OutputSink, Style, WipeSummary};
