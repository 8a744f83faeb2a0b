// ============================================================================
// Gaussian Invariant Library
// Standard normal kernels and a Black-Scholes trading curve in two lanes
// ============================================================================

//! # Gaussian Invariant
//!
//! Standard-normal statistics and the trading invariant of a
//! Black-Scholes-style constant-function market maker, computed twice: once in
//! binary64 (the reference lane) and once in 18-decimal fixed point (the
//! on-chain lane), with a harness proving the two agree.
//!
//! ## Features
//!
//! - **erfc / ierfc / cdf / ppf / pdf** with a bounded, documented error
//! - **Wad arithmetic** with its own `exp`, `ln` and `sqrt`, no floats inside
//! - **Trading curve** `getY`, `getX` and the invariant residual
//! - **Golden vectors** as ABI-encoded word arrays, seeded and reproducible
//!
//! ## Example
//!
//! ```rust
//! use gaussian_invariant::prelude::*;
//!
//! // Reference lane: tau in years
//! let args = InvariantArgs::new(0.5, 1.0, 1.0, 1.0);
//! let y = invariant::reference::get_y(&args).unwrap();
//! assert!((y - 0.158_655_25).abs() < 1e-7);
//!
//! // Fixed-point lane: tau in seconds
//! let args = WadArgs::new("0.5".parse().unwrap(), Wad::ONE, Wad::ONE, YEAR);
//! let y_wad = invariant::fixed::get_y(&args).unwrap();
//! assert!((y_wad.to_f64() - y).abs() < 1e-9);
//!
//! // Either lane behind the same interface
//! for kind in ModelKind::ALL {
//!     let model = create_model(kind);
//!     assert!((model.cdf(0.0) - 0.5).abs() < 1e-7);
//! }
//! ```

pub mod domain;
pub mod gaussian;
pub mod harness;
pub mod interfaces;
pub mod invariant;
pub mod model;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Operation, Row, RowError, RowResult, Word, WordKind};
    pub use crate::gaussian;
    pub use crate::harness::{
        compare, DiffReport, HarnessConfig, HarnessError, HarnessResult, VectorGenerator,
        VectorGeneratorBuilder, VectorSet,
    };
    pub use crate::interfaces::{
        EventHandler, HarnessEvent, LoggingEventHandler, NoOpEventHandler, NormalModel,
    };
    pub use crate::invariant::{
        self, Curve, InvariantArgs, InvariantError, InvariantResult, WadArgs, WadCurve, YEAR,
    };
    pub use crate::model::{create_model, FixedPointModel, ModelKind, ReferenceModel};
    pub use crate::numeric::{FixedDecimal, NumericError, Wad};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_generation_and_verification() {
        let generator = VectorGeneratorBuilder::new(std::env::temp_dir().join("unused"))
            .with_vector_count(24)
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        for set in generator.generate_all().unwrap() {
            assert_eq!(set.len(), 24);

            // Reference lane reproduces its own outputs
            let reference = compare(&set, &ReferenceModel);
            assert!(reference.passed(), "{:?}", reference);

            // Fixed-point lane within tolerance on every row it can hold
            let report = generator.verify(&set);
            assert!(report.passed(), "{:?}", report);
            assert!(report.checked() > 0, "{:?}", report);
            if set.operation().is_kernel() {
                assert!(report.out_of_lane.is_empty());
            }
        }
    }

    #[test]
    fn test_lanes_agree_through_interface() {
        let reference = create_model(ModelKind::Reference);
        let fixed = create_model(ModelKind::FixedPoint);

        for &x in &[-3.5, -1.0, -0.25, 0.0, 0.6, 2.2] {
            assert!((reference.erfc(x) - fixed.erfc(x)).abs() < 1e-12);
            assert!((reference.cdf(x) - fixed.cdf(x)).abs() < 1e-12);
            assert!((reference.pdf(x) - fixed.pdf(x)).abs() < 1e-12);
        }
        for &p in &[0.01, 0.3, 0.5, 0.9] {
            assert!((reference.ppf(p) - fixed.ppf(p)).abs() < 1e-9);
        }

        let args = InvariantArgs::new(0.4, 2.0, 0.7, 0.75);
        let y_ref = reference.get_y(&args).unwrap();
        let y_fixed = fixed.get_y(&args).unwrap();
        assert!((y_ref - y_fixed).abs() < 1e-9);
        assert!(fixed.invariant(y_fixed, &args).unwrap().abs() < 1e-7);
    }
}
