use crate::core::config::CaptureConfig;
use crate::core::StepSink;
use crate::dom::ElementDescriptor;
use crate::errors::{RecorderError, Result};
use crate::locator::generate_locators;
use crate::types::{EventKind, StepRecord};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// A DOM event offered to the recorder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomEvent {
    pub kind: EventKind,
    pub element: ElementDescriptor,
    pub value: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl DomEvent {
    pub fn new(kind: EventKind, element: ElementDescriptor) -> Self {
        Self {
            kind,
            element,
            value: None,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn at(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Recording lifecycle: `start`, any number of `record` calls, then `stop`.
///
/// Steps are only accepted between `start` and `stop`. Each accepted step is
/// handed to the sink before `record` returns.
pub struct RecordingSession {
    id: Uuid,
    config: CaptureConfig,
    sink: Arc<dyn StepSink>,
    active: bool,
    steps: Vec<StepRecord>,
}

impl RecordingSession {
    pub fn new(config: CaptureConfig, sink: Arc<dyn StepSink>) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            sink,
            active: false,
            steps: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_recording(&self) -> bool {
        self.active
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn start(&mut self) -> Result<()> {
        if self.active {
            return Err(RecorderError::AlreadyRecording);
        }
        self.steps.clear();
        self.active = true;
        info!(session = %self.id, "recording started");
        Ok(())
    }

    /// Records one event. Returns `Ok(None)` for event kinds that are not
    /// tracked.
    pub async fn record(&mut self, event: DomEvent) -> Result<Option<StepRecord>> {
        if !self.active {
            return Err(RecorderError::NotRecording);
        }

        if !self.config.tracked_events.contains(&event.kind) {
            debug!(session = %self.id, event = %event.kind, "ignoring untracked event");
            return Ok(None);
        }

        let element = event.element.normalized();
        let locators = generate_locators(&element);
        let value = event.value.or_else(|| element.value.clone());

        if self.config.coalesce_input && event.kind == EventKind::Input {
            if let Some(last) = self.steps.last_mut() {
                if last.event == EventKind::Input && last.locators == locators {
                    let updated = StepRecord {
                        value,
                        timestamp: event.timestamp,
                        ..last.clone()
                    };
                    debug!(session = %self.id, index = updated.index, "coalesced input");
                    self.sink.deliver(&updated).await?;
                    *last = updated.clone();
                    return Ok(Some(updated));
                }
            }
        }

        let step = StepRecord {
            index: self.steps.len() + 1,
            event: event.kind,
            locators,
            value,
            timestamp: event.timestamp,
            tag_name: element.tag_name,
            input_type: element.input_type,
            text: element.text,
        };

        debug!(
            session = %self.id,
            index = step.index,
            event = %step.event,
            css = %step.locators.css,
            "recorded step"
        );
        self.sink.deliver(&step).await?;
        self.steps.push(step.clone());
        Ok(Some(step))
    }

    /// Ends the recording and hands back every step in order.
    pub async fn stop(&mut self) -> Result<Vec<StepRecord>> {
        if !self.active {
            return Err(RecorderError::NotRecording);
        }
        self.active = false;
        self.sink.finish().await?;

        let steps = std::mem::take(&mut self.steps);
        info!(session = %self.id, steps = steps.len(), "recording stopped");
        Ok(steps)
    }
}
