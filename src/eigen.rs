//! Eigendecomposition of metric multivectors.

use crate::algebra::Ga;
use crate::coeff::Coeff;
use crate::error::Result;
use crate::multivector::Multivector;
use crate::qr::qr;

/// Eigenvalues and eigenvectors extracted from one QR pass.
#[derive(Clone, Debug)]
pub struct EigenDecomposition {
    pub eigenvalues: Vec<Coeff>,
    pub eigenvectors: Vec<Multivector>,
}

/// Decompose a set of grade-1 metric multivectors.
///
/// Runs QR once and reads eigenvalue `i` off the diagonal component of
/// column `i` of R; the eigenvectors are the columns of Q. This is exact
/// for metric vectors that triangularise in a single Householder pass
/// (diagonal and upper-triangular inputs, the shapes a change of metric
/// produces here); it is not an iterative general eigen-solver.
pub fn eigendecompose(ga: &Ga, metric_mvs: &[Multivector]) -> Result<EigenDecomposition> {
    let decomposition = qr(ga, metric_mvs)?;
    let eigenvalues: Vec<Coeff> = decomposition
        .r
        .iter()
        .enumerate()
        .map(|(i, column)| column.component(1 << i))
        .collect();
    tracing::debug!(count = eigenvalues.len(), "extracted eigenvalue spectrum");
    Ok(EigenDecomposition {
        eigenvalues,
        eigenvectors: decomposition.q,
    })
}
