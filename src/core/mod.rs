pub mod config;
pub mod sink;

pub use config::{CaptureConfig, Config, ExportConfig, PromptConfig, ScriptConfig};
pub use sink::StepSink;
