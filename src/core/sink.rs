use crate::errors::Result;
use crate::types::StepRecord;
use async_trait::async_trait;

/// Destination for step records as they are recorded.
///
/// Implementations forward steps to whatever consumes them: a message
/// channel, an in-memory buffer, or nothing at all.
#[async_trait]
pub trait StepSink: Send + Sync {
    async fn deliver(&self, step: &StepRecord) -> Result<()>;

    /// Called once when the owning session stops.
    async fn finish(&self) -> Result<()> {
        Ok(())
    }
}
