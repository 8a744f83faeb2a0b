// ============================================================================
// Model Module
// The two numeric lanes as NormalModel implementations
// ============================================================================

mod fixed_point_model;
mod reference_model;

pub mod factory;

pub use factory::{create_all_models, create_model, ModelKind};
pub use fixed_point_model::FixedPointModel;
pub use reference_model::ReferenceModel;
