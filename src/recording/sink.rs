use crate::core::StepSink;
use crate::errors::{RecorderError, Result};
use crate::types::StepRecord;
use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex};
use tracing::trace;

/// Forwards steps over an unbounded tokio channel.
pub struct ChannelSink {
    sender: mpsc::UnboundedSender<StepRecord>,
}

impl ChannelSink {
    pub fn new(sender: mpsc::UnboundedSender<StepRecord>) -> Self {
        Self { sender }
    }

    /// Creates a sink together with the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<StepRecord>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

#[async_trait]
impl StepSink for ChannelSink {
    async fn deliver(&self, step: &StepRecord) -> Result<()> {
        trace!(index = step.index, event = %step.event, "sending step");
        self.sender
            .send(step.clone())
            .map_err(|e| RecorderError::SinkClosed(format!("step {} not delivered", e.0.index)))
    }
}

/// Keeps every delivered step in memory.
#[derive(Default)]
pub struct MemorySink {
    steps: Mutex<Vec<StepRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn steps(&self) -> Vec<StepRecord> {
        self.steps.lock().await.clone()
    }
}

#[async_trait]
impl StepSink for MemorySink {
    async fn deliver(&self, step: &StepRecord) -> Result<()> {
        self.steps.lock().await.push(step.clone());
        Ok(())
    }
}

/// Discards steps.
pub struct NullSink;

#[async_trait]
impl StepSink for NullSink {
    async fn deliver(&self, _step: &StepRecord) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestHelper;

    #[tokio::test]
    async fn test_channel_sink_delivers() {
        let (sink, mut receiver) = ChannelSink::channel();
        let step = TestHelper::sample_step(1);

        sink.deliver(&step).await.unwrap();
        assert_eq!(receiver.recv().await, Some(step));
    }

    #[tokio::test]
    async fn test_channel_sink_closed_receiver() {
        let (sink, receiver) = ChannelSink::channel();
        drop(receiver);

        let result = sink.deliver(&TestHelper::sample_step(3)).await;
        assert!(matches!(result, Err(RecorderError::SinkClosed(_))));
    }

    #[test]
    fn test_memory_sink_collects() {
        let sink = MemorySink::new();
        tokio_test::block_on(async {
            sink.deliver(&TestHelper::sample_step(1)).await.unwrap();
            sink.deliver(&TestHelper::sample_step(2)).await.unwrap();
            let steps = sink.steps().await;
            assert_eq!(steps.len(), 2);
            assert_eq!(steps[1].index, 2);
        });
    }
}
