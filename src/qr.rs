//! QR decomposition by Householder reflections expressed as sandwich
//! products. There is no matrix backend; the algebra is self-sufficient.
//!
//! Each column step builds a bisector between the column (taken from the
//! diagonal index down) and the target axis, reflects the remaining
//! columns through the dual of that bisector, and composes the reflection
//! into an accumulated versor pair. A column already collinear with its
//! axis produces an empty bisector and needs no reflection at all, which
//! keeps orthonormal input fixed and preserves diagonal signs.

use crate::algebra::Ga;
use crate::coeff::{int, Coeff};
use crate::error::Result;
use crate::multivector::Multivector;
use num_traits::{One, Signed};

/// Q and R columns as grade-1 multivectors, with `Q · R = input`.
#[derive(Clone, Debug)]
pub struct QrDecomposition {
    pub q: Vec<Multivector>,
    pub r: Vec<Multivector>,
}

/// The identity multivector set: one unit grade-1 multivector per basis
/// vector, in index order.
pub fn imv(ga: &Ga) -> Vec<Multivector> {
    (0..ga.dim() as usize)
        .map(|i| Multivector::from_blade(ga.basis_vector(i)))
        .collect()
}

/// Grade-1 part of a column with every component of index < `d` removed.
fn tail_from(column: &Multivector, d: usize) -> Multivector {
    Multivector::new(
        column
            .blades
            .iter()
            .filter(|b| b.grade == 1 && b.bitmap.trailing_zeros() as usize >= d)
            .cloned()
            .collect(),
    )
    .simplify()
}

fn trim_grade1(mv: &Multivector) -> Multivector {
    mv.simplify0().grade_select(1)
}

/// Householder QR over grade-1 columns.
pub fn qr(ga: &Ga, columns: &[Multivector]) -> Result<QrDecomposition> {
    let n = columns.len();
    assert!(n >= 1, "QR needs at least one column");
    assert!(
        n <= ga.dim() as usize,
        "QR over {n} columns does not fit dimension {}",
        ga.dim()
    );

    let mut r: Vec<Multivector> = columns.iter().map(trim_grade1).collect();
    let one = ga.scalar_multivector(Coeff::one());
    let mut left = one.clone();
    let mut right = one;

    for d in 0..n.saturating_sub(1) {
        let v = tail_from(&r[d], d);
        // a column already on its axis would only produce a vanishing
        // bisector below (exactly in lucky cases, up to rsqrt truncation
        // otherwise); no reflection is needed either way
        if v.blades.len() == 1 && v.blades[0].bitmap == 1 << d {
            tracing::trace!(column = d, "column on its axis, reflection skipped");
            continue;
        }
        let diag = v.component(1 << d);
        // target axis, scaled by -sign(v[d]) with sign(0) = +1
        let target = if diag.is_negative() { int(1) } else { int(-1) };
        let axis = Multivector::from_blade(ga.basis_vector(d).with_scale(target));

        let bisector = ga.normalize(&v)?.added(&axis);
        if bisector.is_empty() {
            tracing::trace!(column = d, "bisector vanished, reflection skipped");
            continue;
        }

        let hyperplane = ga.dual(&bisector)?;
        let hyperplane_inv = ga.inverse(&hyperplane)?;
        let neg_hyperplane = hyperplane.negated();
        tracing::trace!(column = d, "reflecting columns {d}..{n}");

        for col in r.iter_mut().skip(d) {
            let reflected = ga.product(&ga.product(&neg_hyperplane, col)?, &hyperplane_inv)?;
            *col = trim_grade1(&reflected);
        }
        left = ga.product(&left, &neg_hyperplane)?;
        right = ga.product(&hyperplane_inv, &right)?;
    }

    let mut q = Vec::with_capacity(n);
    for axis in imv(ga).into_iter().take(n) {
        let image = ga.product(&ga.product(&left, &axis)?, &right)?;
        q.push(trim_grade1(&image));
    }

    Ok(QrDecomposition { q, r })
}
