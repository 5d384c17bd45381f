//! Change of basis: expanding blades through metric-vector expansions.
//!
//! When an algebra is built from non-orthogonal metric multivectors, each
//! synthetic basis vector has an expansion over the orthonormal basis.
//! A blade is rebuilt by wedging those expansions together, LSB-first,
//! which yields its coordinates in the orthonormal basis.

use crate::algebra::Ga;
use crate::blade::Blade;
use crate::error::{GaError, Result};
use crate::multivector::Multivector;

/// Expand `blade` through per-dimension `expansions`, carried out in the
/// orthonormal algebra `mmga`. The blade's own scale rides along.
pub fn expand_blade(
    mmga: &Ga,
    expansions: &[Multivector],
    blade: &Blade,
) -> Result<Multivector> {
    assert!(
        (expansions.len() as u32) >= blade.bitmap.count_ones(),
        "expansion list shorter than the blade's vector count"
    );
    let mut acc = mmga.scalar_multivector(blade.scale.clone());
    let mut bits = blade.bitmap;
    while bits != 0 {
        let i = bits.trailing_zeros() as usize;
        assert!(
            i < expansions.len(),
            "blade references basis vector {i} outside the expansion list"
        );
        acc = mmga.wedge(&acc, &expansions[i])?;
        bits &= bits - 1;
    }
    Ok(acc.simplify())
}

impl Ga {
    /// Expand a blade of this algebra through its stored metric
    /// multivectors; only available when the algebra was built from `mm`.
    pub fn expand_blade(&self, blade: &Blade) -> Result<Multivector> {
        let eigen = self.eigen().ok_or(GaError::MissingMetric)?;
        expand_blade(&eigen.mmga, &eigen.metric_mvs, blade)
    }
}
