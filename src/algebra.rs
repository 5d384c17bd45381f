//! The algebra value: signature, basis tables, duals, specials and the
//! operator dispatch table, built once per signature and read-only after.

use crate::basis;
use crate::blade::{sign, signed, Blade};
use crate::coeff::Coeff;
use crate::dispatch::OpTable;
use crate::eigen;
use crate::error::{GaError, Result};
use crate::multivector::Multivector;
use crate::signature::GaOptions;
use crate::{derived, product};
use num_traits::{One, Zero};
use std::collections::HashMap;

/// Distinguished elements of an algebra.
#[derive(Clone, Debug)]
pub struct Specials {
    /// The top-grade basis blade `I` (all-ones bitmap).
    pub pseudoscalar: Blade,
    /// Reverse of `I`.
    pub pseudoscalar_rev: Blade,
    /// The unit scalar blade.
    pub scalar: Blade,
    /// `z_j` aliases for the zero-metric basis vectors.
    pub nulls: Vec<(String, Blade)>,
}

/// Eigendata attached when a non-orthogonal metric is supplied.
#[derive(Clone, Debug)]
pub struct EigenData {
    pub eigenvalues: Vec<Coeff>,
    pub eigenvectors: Vec<Multivector>,
    /// The supplied expansions of each synthetic basis vector.
    pub metric_mvs: Vec<Multivector>,
    /// The orthonormal algebra the decomposition ran in.
    pub mmga: Box<Ga>,
}

/// An immutable geometric algebra over 2^d basis blades.
#[derive(Clone, Debug)]
pub struct Ga {
    prefix: String,
    base: u32,
    dim: u32,
    p: usize,
    q: usize,
    r: usize,
    metric: Vec<Coeff>,
    basis: HashMap<String, Blade>,
    basis_by_bitmap: Vec<String>,
    basis_by_grade: Vec<Blade>,
    basis_in_order: Vec<Blade>,
    duals: Vec<u32>,
    dual_signs: Vec<Coeff>,
    specials: Specials,
    ops: OpTable,
    eigen: Option<EigenData>,
}

impl Ga {
    /// Build an algebra from options. With `mm` present, the metric
    /// diagonal is the eigenvalue spectrum of the supplied metric
    /// multivectors, extracted in `mmga` (a fresh orthonormal algebra of
    /// the same shape when none is given).
    pub fn new(options: GaOptions) -> Result<Ga> {
        let GaOptions {
            prefix,
            base,
            p,
            q,
            r,
            md,
            mm,
            mmga,
            ..
        } = options.clone();

        let (metric, eigen) = match mm {
            Some(metric_mvs) => {
                let mmga = match mmga {
                    Some(ga) => ga,
                    None => Ga::new(GaOptions {
                        prefix: prefix.clone(),
                        base,
                        p: metric_mvs.len(),
                        ..Default::default()
                    })?,
                };
                let decomposition = eigen::eigendecompose(&mmga, &metric_mvs)?;
                let metric = decomposition.eigenvalues.clone();
                let eigen = EigenData {
                    eigenvalues: decomposition.eigenvalues,
                    eigenvectors: decomposition.eigenvectors,
                    metric_mvs,
                    mmga: Box::new(mmga),
                };
                (metric, Some(eigen))
            }
            None => (options.metric_diagonal(), None),
        };

        let dim = metric.len() as u32;
        assert!(dim >= 1, "algebra requires at least one basis vector");
        assert!(dim <= 16, "2^d basis tables are only tractable for d ≤ 16, got {dim}");
        if let Some(md) = &md {
            assert!(
                p + q + r == 0 || p + q + r == md.len(),
                "explicit diagonal length {} disagrees with p+q+r = {}",
                md.len(),
                p + q + r
            );
        }

        let (p, q, r) = if md.is_none() && eigen.is_none() {
            (p, q, r)
        } else {
            GaOptions::counts_of(&metric)
        };

        let basis_in_order = basis::generate(&prefix, base, dim);
        let basis_by_grade = basis::by_grade(&basis_in_order);
        let basis_by_bitmap: Vec<String> =
            basis_in_order.iter().map(|b| b.basis.clone()).collect();

        let mut basis: HashMap<String, Blade> = basis_in_order
            .iter()
            .map(|b| (b.basis.clone(), b.clone()))
            .collect();

        let mask = (1u32 << dim) - 1;
        let mut duals = Vec::with_capacity(1 << dim);
        let mut dual_signs = Vec::with_capacity(1 << dim);
        for bitmap in 0..=mask {
            let dual = bitmap ^ mask;
            duals.push(dual);
            dual_signs.push(signed(Coeff::one(), sign(bitmap, dual)));
        }

        let mut nulls = Vec::new();
        for (i, entry) in metric.iter().enumerate() {
            if entry.is_zero() {
                let label = format!("z{}", nulls.len());
                let blade = basis_in_order[1 << i].clone();
                basis.insert(label.clone(), blade.clone());
                nulls.push((label, blade));
            }
        }

        let specials = Specials {
            pseudoscalar: basis_in_order[mask as usize].clone(),
            pseudoscalar_rev: basis_in_order[mask as usize].reversed(),
            scalar: basis_in_order[0].clone(),
            nulls,
        };

        let mut ops = OpTable::default();
        product::register(&mut ops);
        derived::register(&mut ops);

        tracing::debug!(
            dim,
            blades = 1usize << dim,
            handlers = ops.len(),
            signature = ?(p, q, r),
            "constructed algebra"
        );

        Ok(Ga {
            prefix,
            base,
            dim,
            p,
            q,
            r,
            metric,
            basis,
            basis_by_bitmap,
            basis_by_grade,
            basis_in_order,
            duals,
            dual_signs,
            specials,
            ops,
            eigen,
        })
    }

    /// Orthonormal Euclidean algebra G(d,0,0).
    pub fn euclidean(dim: usize) -> Result<Ga> {
        Ga::new(GaOptions {
            p: dim,
            ..Default::default()
        })
    }

    /// Algebra with the given signature counts.
    pub fn signature(p: usize, q: usize, r: usize) -> Result<Ga> {
        Ga::new(GaOptions {
            p,
            q,
            r,
            ..Default::default()
        })
    }

    pub fn dim(&self) -> u32 {
        self.dim
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    /// Signature counts (p, q, r).
    pub fn signature_counts(&self) -> (usize, usize, usize) {
        (self.p, self.q, self.r)
    }

    pub fn metric(&self) -> &[Coeff] {
        &self.metric
    }

    /// Label of the blade with the given bitmap.
    pub fn label(&self, bitmap: u32) -> &str {
        &self.basis_by_bitmap[bitmap as usize]
    }

    /// Unit blade for a label (including the `z_j` aliases).
    pub fn blade(&self, label: &str) -> Result<Blade> {
        self.basis
            .get(label)
            .cloned()
            .ok_or_else(|| GaError::UnknownBasis(label.to_string()))
    }

    /// Unit blade for a bitmap.
    pub fn unit_blade(&self, bitmap: u32) -> Blade {
        self.basis_in_order[bitmap as usize].clone()
    }

    /// Unit grade-1 blade for basis vector `i`.
    pub fn basis_vector(&self, i: usize) -> Blade {
        self.basis_in_order[1usize << i].clone()
    }

    /// All 2^d unit blades in bitmap order.
    pub fn basis_in_order(&self) -> &[Blade] {
        &self.basis_in_order
    }

    /// All 2^d unit blades sorted by (grade, bitmap).
    pub fn basis_by_grade(&self) -> &[Blade] {
        &self.basis_by_grade
    }

    pub fn dual_bitmap(&self, bitmap: u32) -> u32 {
        self.duals[bitmap as usize]
    }

    /// Sign such that `b ∧ ∼b = I` for the basis blade with this bitmap.
    pub fn dual_sign(&self, bitmap: u32) -> &Coeff {
        &self.dual_signs[bitmap as usize]
    }

    pub fn specials(&self) -> &Specials {
        &self.specials
    }

    pub fn pseudoscalar(&self) -> &Blade {
        &self.specials.pseudoscalar
    }

    pub fn eigen(&self) -> Option<&EigenData> {
        self.eigen.as_ref()
    }

    pub(crate) fn ops(&self) -> &OpTable {
        &self.ops
    }

    /// Multivector with a single scalar blade (empty when `c` is zero).
    pub fn scalar_multivector(&self, c: Coeff) -> Multivector {
        if c.is_zero() {
            return Multivector::empty();
        }
        Multivector::from_blade(self.specials.scalar.with_scale(c))
    }

    /// Multivector literal from paired scale/label terms, canonicalised.
    pub fn multivector(&self, pairs: &[(Coeff, &str)]) -> Result<Multivector> {
        let mut blades = Vec::with_capacity(pairs.len());
        for (scale, label) in pairs {
            let unit = self.blade(label)?;
            blades.push(unit.with_scale(scale.clone()));
        }
        Ok(Multivector::new(blades).simplify())
    }
}
