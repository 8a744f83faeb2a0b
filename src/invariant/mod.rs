// ============================================================================
// Invariant Module
// The Black-Scholes-style trading curve of a constant-function market maker
// ============================================================================
//
// For a pool holding x units of the risky asset and y of the stable asset per
// unit of liquidity, with strike K, volatility o and time to maturity t:
//
//     y = K·Φ(Φ⁻¹(1 − x) − o√t)
//     x = 1 − Φ(Φ⁻¹(y/K) + o√t)
//
// The invariant is the residual y − getY(x). Every function is stateless;
// reserves are supplied by the caller on each call.

mod args;
mod errors;
pub mod fixed;
pub mod reference;

pub use args::{Curve, InvariantArgs, WadArgs, WadCurve, YEAR};
pub use errors::{InvariantError, InvariantResult};
