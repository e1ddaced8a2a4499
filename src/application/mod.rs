pub mod config;
pub mod wipe;

pub use config::{ColorChoice, Config};
pub use wipe::run;
