// ============================================================================
// Model Factory
// Creates numeric lanes by kind
// ============================================================================

use crate::interfaces::NormalModel;
use crate::model::{FixedPointModel, ReferenceModel};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The numeric lanes available behind [`NormalModel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ModelKind {
    /// Binary64, source of expected outputs
    Reference,
    /// 18-decimal fixed point, the on-chain representation
    FixedPoint,
}

impl ModelKind {
    pub const ALL: [ModelKind; 2] = [ModelKind::Reference, ModelKind::FixedPoint];

    pub const fn name(self) -> &'static str {
        match self {
            ModelKind::Reference => "reference",
            ModelKind::FixedPoint => "fixed-point",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reference" | "ref" | "f64" => Ok(ModelKind::Reference),
            "fixed-point" | "fixed" | "wad" => Ok(ModelKind::FixedPoint),
            other => Err(format!("Unknown model: {}", other)),
        }
    }
}

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates the numeric lane of the given kind
///
/// # Example
/// ```
/// use gaussian_invariant::prelude::*;
///
/// let model = create_model(ModelKind::FixedPoint);
/// assert_eq!(model.name(), "fixed-point");
/// assert_eq!(model.ierfc(0.0), 100.0);
/// ```
pub fn create_model(kind: ModelKind) -> Box<dyn NormalModel> {
    match kind {
        ModelKind::Reference => Box::new(ReferenceModel),
        ModelKind::FixedPoint => Box::new(FixedPointModel),
    }
}

/// Creates every lane, reference first
pub fn create_all_models() -> Vec<Box<dyn NormalModel>> {
    ModelKind::ALL.into_iter().map(create_model).collect()
}
