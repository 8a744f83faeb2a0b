// ============================================================================
// Interfaces Module
// Lane and event contracts shared by the models and the harness
// ============================================================================
//
// Both contracts speak only in `domain` types, so the harness depends on
// this module and never the other way round.

mod event_handler;
mod normal_model;

pub use event_handler::{EventHandler, HarnessEvent, LoggingEventHandler, NoOpEventHandler};
pub use normal_model::NormalModel;
