//! Construction options for an algebra.

use crate::algebra::Ga;
use crate::coeff::{int, Coeff};
use crate::multivector::Multivector;
use num_traits::Zero;

/// One block of the metric diagonal. The `pqr` permutation decides in
/// which order the blocks appear along the diagonal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MetricBlock {
    P,
    Q,
    R,
}

/// Options accepted by [`Ga::new`].
///
/// `p`/`q`/`r` count the basis vectors squaring to `pm`/`qm`/`rm`
/// (defaults +1, −1, 0). An explicit diagonal `md` overrides the
/// derivation; metric multivectors `mm` override both, by feeding an
/// eigendecomposition carried out in `mmga`.
#[derive(Clone, Debug)]
pub struct GaOptions {
    /// Label prefix for basis blades.
    pub prefix: String,
    /// Starting index used in labels.
    pub base: u32,
    pub p: usize,
    pub q: usize,
    pub r: usize,
    /// Value squared by the `p` block.
    pub pm: Coeff,
    /// Value squared by the `q` block.
    pub qm: Coeff,
    /// Value squared by the `r` block.
    pub rm: Coeff,
    /// Explicit metric diagonal.
    pub md: Option<Vec<Coeff>>,
    /// Block order along the diagonal.
    pub pqr: [MetricBlock; 3],
    /// Non-orthogonal metric multivectors; triggers eigendecomposition.
    pub mm: Option<Vec<Multivector>>,
    /// Algebra in which that eigendecomposition runs.
    pub mmga: Option<Ga>,
}

impl Default for GaOptions {
    fn default() -> Self {
        Self {
            prefix: "e".to_string(),
            base: 0,
            p: 0,
            q: 0,
            r: 0,
            pm: int(1),
            qm: int(-1),
            rm: int(0),
            md: None,
            pqr: [MetricBlock::P, MetricBlock::Q, MetricBlock::R],
            mm: None,
            mmga: None,
        }
    }
}

impl GaOptions {
    /// Materialise the metric diagonal from the options (`md` wins over
    /// the p/q/r derivation; `mm` is resolved by the algebra builder).
    pub fn metric_diagonal(&self) -> Vec<Coeff> {
        if let Some(md) = &self.md {
            return md.clone();
        }
        let mut diag = Vec::with_capacity(self.p + self.q + self.r);
        for block in self.pqr {
            let (count, value) = match block {
                MetricBlock::P => (self.p, &self.pm),
                MetricBlock::Q => (self.q, &self.qm),
                MetricBlock::R => (self.r, &self.rm),
            };
            diag.extend(std::iter::repeat_with(|| value.clone()).take(count));
        }
        diag
    }

    /// Signature counts derived from a diagonal by entry sign.
    pub fn counts_of(diagonal: &[Coeff]) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for entry in diagonal {
            if entry.is_zero() {
                counts.2 += 1;
            } else if entry > &Coeff::zero() {
                counts.0 += 1;
            } else {
                counts.1 += 1;
            }
        }
        counts
    }
}
