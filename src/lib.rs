pub mod core;
pub mod dom;
pub mod errors;
pub mod export;
pub mod locator;
pub mod recording;
pub mod testing;
pub mod types;

pub use crate::core::{Config, StepSink};
pub use dom::{ElementDescriptor, PageSnapshot, PageState};
pub use errors::{RecorderError, Result};
pub use export::ExportFormat;
pub use locator::{generate_locators, infer_role};
pub use recording::{DomEvent, RecordingSession};
pub use types::*;
