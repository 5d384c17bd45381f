//! Multivectors: ordered bags of blades, and their canonical form.
//!
//! Operators are free to produce non-canonical intermediates (duplicate
//! bitmaps, zero scales, arbitrary order); the simplifier restores the
//! canonical form with one sort, one merging pass over equal-bitmap runs,
//! and one zero-dropping pass.

use crate::blade::Blade;
use crate::coeff::Coeff;
use num_traits::Zero;
use std::fmt;

/// A sum of blades of possibly different grades.
///
/// Canonical form (after [`Multivector::simplify`]): bitmaps strictly
/// ascending, at most one blade per bitmap, no zero scales. The empty
/// multivector is the additive identity.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Multivector {
    pub blades: Vec<Blade>,
}

impl Multivector {
    pub fn new(blades: Vec<Blade>) -> Self {
        Self { blades }
    }

    pub fn empty() -> Self {
        Self { blades: Vec::new() }
    }

    pub fn from_blade(blade: Blade) -> Self {
        Self { blades: vec![blade] }
    }

    pub fn is_empty(&self) -> bool {
        self.blades.is_empty()
    }

    /// Canonical form: sorted by bitmap, like terms summed, zeros dropped.
    pub fn simplify(&self) -> Multivector {
        self.merged(false)
    }

    /// Merging pass that keeps zero-scale blades, for callers that rely on
    /// positional grade slots (QR columns, eigenvalue extraction).
    pub fn simplify0(&self) -> Multivector {
        self.merged(true)
    }

    fn merged(&self, keep_zeros: bool) -> Multivector {
        let mut blades = self.blades.clone();
        blades.sort_by_key(|b| b.bitmap);
        let mut out: Vec<Blade> = Vec::with_capacity(blades.len());
        for blade in blades {
            match out.last_mut() {
                Some(last) if last.bitmap == blade.bitmap => {
                    last.scale = &last.scale + &blade.scale;
                }
                _ => out.push(blade),
            }
        }
        if !keep_zeros {
            out.retain(|b| !b.scale.is_zero());
        }
        Multivector { blades: out }
    }

    /// Coefficient on the given basis bitmap (zero if absent).
    pub fn component(&self, bitmap: u32) -> Coeff {
        self.blades
            .iter()
            .filter(|b| b.bitmap == bitmap)
            .fold(Coeff::zero(), |acc, b| acc + &b.scale)
    }

    /// Grade-0 coefficient.
    pub fn scalar_part(&self) -> Coeff {
        self.component(0)
    }

    /// Only the blades of grade `k` (zero-scale blades included, so a
    /// `simplify0` pipeline keeps its slots).
    pub fn grade_select(&self, k: u32) -> Multivector {
        Multivector {
            blades: self.blades.iter().filter(|b| b.grade == k).cloned().collect(),
        }
    }

    /// Highest grade present, if any blade survives simplification.
    pub fn max_grade(&self) -> Option<u32> {
        self.simplify().blades.iter().map(|b| b.grade).max()
    }

    /// Every blade scaled by `c`.
    pub fn scaled(&self, c: &Coeff) -> Multivector {
        Multivector {
            blades: self.blades.iter().map(|b| b.with_scale(&b.scale * c)).collect(),
        }
    }

    /// Blade-wise sum, canonicalised.
    pub fn added(&self, other: &Multivector) -> Multivector {
        let mut blades = self.blades.clone();
        blades.extend(other.blades.iter().cloned());
        Multivector { blades }.simplify()
    }

    /// Reverse of every blade's wedge order.
    pub fn reversed(&self) -> Multivector {
        Multivector {
            blades: self.blades.iter().map(Blade::reversed).collect(),
        }
    }

    /// Grade involution of every blade.
    pub fn involuted(&self) -> Multivector {
        Multivector {
            blades: self.blades.iter().map(Blade::involuted).collect(),
        }
    }

    pub fn negated(&self) -> Multivector {
        Multivector {
            blades: self.blades.iter().map(Blade::negated).collect(),
        }
    }
}

impl fmt::Display for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.blades.is_empty() {
            return write!(f, "0");
        }
        for (i, blade) in self.blades.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{blade}")?;
        }
        Ok(())
    }
}
