//! Exact coefficient arithmetic for the algebra.
//!
//! Every blade scale is a `BigRational`, so additive and multiplicative
//! reductions are exact; floating point only appears at the rim, when a
//! caller asks for an `f64` view of a result. Square roots stay inside
//! the rational domain via a truncated continued-fraction iteration.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// The scalar type carried by every blade.
pub type Coeff = BigRational;

/// Iteration count for [`rsqrt`]; enough for ~1e-12 accuracy on
/// arguments rescaled into [1/2, 2).
pub const RSQRT_STEPS: usize = 16;

/// Exact integer coefficient.
pub fn int(n: i64) -> Coeff {
    Coeff::from_integer(BigInt::from(n))
}

/// Exact ratio `num/den`.
pub fn frac(num: i64, den: i64) -> Coeff {
    assert!(den != 0, "zero denominator");
    Coeff::new(BigInt::from(num), BigInt::from(den))
}

/// The exact rational equal to a finite `f64`.
pub fn approx(x: f64) -> Coeff {
    assert!(x.is_finite(), "cannot represent non-finite value: {x}");
    match Coeff::from_float(x) {
        Some(c) => c,
        None => Coeff::zero(),
    }
}

/// `f64` view of an exact coefficient (NaN if out of range).
pub fn to_f64(c: &Coeff) -> f64 {
    c.to_f64().unwrap_or(f64::NAN)
}

/// `2^k` as an exact coefficient (negative `k` gives the reciprocal).
pub fn pow2(k: i32) -> Coeff {
    if k >= 0 {
        Coeff::from_integer(BigInt::one() << k as usize)
    } else {
        Coeff::new(BigInt::one(), BigInt::one() << (-k) as usize)
    }
}

/// Square root of a non-negative rational by the continued-fraction
/// iteration `y ← 1 + (x − 1)/(1 + y)`, truncated at `steps`.
///
/// The argument is first rescaled by powers of four into [1/2, 2), where
/// the iteration contracts fastest, and the result is scaled back by the
/// matching power of two. Exact for `x` with an exact root reachable by
/// the iteration only in the trivial cases (`0`, `1`); everything else is
/// a rational approximation.
pub fn rsqrt(x: &Coeff, steps: usize) -> Coeff {
    assert!(!x.is_negative(), "rsqrt of negative value: {x}");
    if x.is_zero() {
        return Coeff::zero();
    }

    let two = int(2);
    let four = int(4);
    let half = frac(1, 2);

    let mut scaled = x.clone();
    let mut shift: i32 = 0;
    while scaled >= two {
        scaled = &scaled / &four;
        shift += 1;
    }
    while scaled < half {
        scaled = &scaled * &four;
        shift -= 1;
    }

    let mut y = Coeff::one();
    for _ in 0..steps {
        // y stays positive for arguments in [1/2, 2), so 1 + y never vanishes
        y = Coeff::one() + (&scaled - Coeff::one()) / (Coeff::one() + &y);
    }

    y * pow2(shift)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsqrt_exact_fixed_points() {
        assert_eq!(rsqrt(&int(0), RSQRT_STEPS), int(0));
        assert_eq!(rsqrt(&int(1), RSQRT_STEPS), int(1));
    }

    #[test]
    fn rsqrt_converges() {
        for (x, root) in [(4.0, 2.0), (25.0, 5.0), (2.0, std::f64::consts::SQRT_2), (0.25, 0.5)] {
            let got = to_f64(&rsqrt(&approx(x), RSQRT_STEPS));
            assert!((got - root).abs() < 1e-10, "sqrt({x}): {got} vs {root}");
        }
    }

    #[test]
    fn pow2_both_directions() {
        assert_eq!(pow2(3), int(8));
        assert_eq!(pow2(-2), frac(1, 4));
        assert_eq!(pow2(0), int(1));
    }

    #[test]
    fn approx_round_trips() {
        assert_eq!(to_f64(&approx(0.5)), 0.5);
        assert_eq!(approx(3.0), int(3));
    }
}
