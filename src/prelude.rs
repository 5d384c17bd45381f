//! Single import surface for downstream code.
//!
//! Most callers build an algebra, assemble multivector literals and run
//! operators on them; glob-importing this module pulls in everything that
//! workflow touches:
//!
//! ```rust
//! use clifford_engine::prelude::*;
//! ```

pub use crate::algebra::{EigenData, Ga, Specials};
pub use crate::blade::Blade;
pub use crate::coeff::{approx, frac, int, to_f64, Coeff};
pub use crate::dispatch::{Op, Operand};
pub use crate::eigen::{eigendecompose, EigenDecomposition};
pub use crate::error::{GaError, Result};
pub use crate::multivector::Multivector;
pub use crate::qr::{imv, qr, QrDecomposition};
pub use crate::signature::{GaOptions, MetricBlock};
