pub mod session;
pub mod sink;

pub use session::{DomEvent, RecordingSession};
pub use sink::{ChannelSink, MemorySink, NullSink};
