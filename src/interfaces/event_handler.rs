// ============================================================================
// Event Handler Interface
// Defines the contract for handling vector generation and comparison events
// ============================================================================

use crate::domain::Operation;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the vector generator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HarnessEvent {
    /// Rows sampled and expected outputs recorded
    VectorSetGenerated {
        operation: Operation,
        rows: usize,
        boundary_rows: usize,
    },

    /// Input or output artifact written to disk
    ArtifactWritten {
        operation: Operation,
        path: PathBuf,
        bytes: usize,
    },

    /// Vector set read back from disk
    ArtifactLoaded {
        operation: Operation,
        path: PathBuf,
        rows: usize,
    },

    /// A lane has been compared against the expected outputs
    ComparisonFinished {
        operation: Operation,
        lane: String,
        rows: usize,
        mismatches: usize,
        /// Rows holding words the lane cannot represent; not mismatches
        out_of_lane: usize,
        max_error: f64,
    },
}

/// Event handler trait for processing harness events
/// Implementations can handle logging, progress reporting, test capture, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a harness event
    fn on_event(&self, event: HarnessEvent);

    /// Batch event handler
    fn on_events(&self, events: Vec<HarnessEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: HarnessEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: HarnessEvent) {
        match &event {
            HarnessEvent::ComparisonFinished {
                operation,
                lane,
                rows,
                mismatches,
                out_of_lane,
                max_error,
            } if *mismatches > 0 => {
                tracing::warn!(
                    %operation,
                    lane = lane.as_str(),
                    rows,
                    mismatches,
                    out_of_lane,
                    max_error,
                    "lane disagrees with expected outputs"
                );
            },
            HarnessEvent::ComparisonFinished {
                operation,
                lane,
                rows,
                out_of_lane,
                max_error,
                ..
            } => {
                tracing::info!(
                    %operation,
                    lane = lane.as_str(),
                    rows,
                    out_of_lane,
                    max_error,
                    "lane within tolerance"
                );
            },
            _ => tracing::debug!("Harness event: {:?}", event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder(Mutex<Vec<HarnessEvent>>);

    impl EventHandler for Recorder {
        fn on_event(&self, event: HarnessEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(HarnessEvent::VectorSetGenerated {
            operation: Operation::Erfc,
            rows: 129,
            boundary_rows: 3,
        });
        // Should not panic
    }

    #[test]
    fn test_logging_handler_accepts_every_event() {
        let handler = LoggingEventHandler;
        handler.on_events(vec![
            HarnessEvent::ArtifactWritten {
                operation: Operation::Cdf,
                path: PathBuf::from("data/cdf/input"),
                bytes: 8258,
            },
            HarnessEvent::ComparisonFinished {
                operation: Operation::Cdf,
                lane: "fixed-point".to_string(),
                rows: 129,
                mismatches: 1,
                out_of_lane: 40,
                max_error: 2e-7,
            },
        ]);
    }

    #[test]
    fn test_batch_preserves_order() {
        let recorder = Recorder(Mutex::new(Vec::new()));
        let events: Vec<_> = [Operation::Erfc, Operation::Ppf]
            .into_iter()
            .map(|operation| HarnessEvent::ArtifactLoaded {
                operation,
                path: PathBuf::from("data"),
                rows: 1,
            })
            .collect();
        recorder.on_events(events.clone());
        assert_eq!(*recorder.0.lock().unwrap(), events);
    }
}
