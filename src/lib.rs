#![doc = include_str!("../README.md")]

pub mod algebra;
pub mod basis;
pub mod blade;
pub mod coeff;
pub mod derived;
pub mod dispatch;
pub mod eigen;
pub mod error;
pub mod multivector;
pub mod prelude;
pub mod product;
pub mod qr;
pub mod rebase;
pub mod signature;

pub use algebra::{EigenData, Ga, Specials};
pub use blade::Blade;
pub use coeff::{approx, frac, int, to_f64, Coeff};
pub use dispatch::{Op, Operand};
pub use eigen::{eigendecompose, EigenDecomposition};
pub use error::{GaError, Result};
pub use multivector::Multivector;
pub use qr::{imv, qr, QrDecomposition};
pub use signature::{GaOptions, MetricBlock};
