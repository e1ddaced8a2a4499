pub mod display;
pub mod gate;
pub mod output;

pub use display::{format_duration, WipeSummary};
pub use gate::{confirm, ConfirmationGate, LineGate};
pub use output::{ConsoleSink, OutputSink, Style};
