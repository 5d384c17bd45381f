//! Basis enumeration for a dimension-`d` algebra.
//!
//! Produces the 2^d basis blades in dense bitmap order, with labels built
//! from a prefix and ascending vector indices (`e_`, `e0`, `e01`, …).

use crate::blade::Blade;
use crate::coeff::Coeff;
use num_traits::One;

/// Label for the blade with the given bitmap: the scalar is `<prefix>_`,
/// a k-blade concatenates its ascending indices offset by `base`.
pub fn blade_label(prefix: &str, base: u32, bitmap: u32) -> String {
    if bitmap == 0 {
        return format!("{prefix}_");
    }
    let mut label = String::from(prefix);
    let mut bits = bitmap;
    while bits != 0 {
        let i = bits.trailing_zeros();
        label.push_str(&(base + i).to_string());
        bits &= bits - 1;
    }
    label
}

/// All 2^d unit basis blades, indexed by bitmap.
pub fn generate(prefix: &str, base: u32, dim: u32) -> Vec<Blade> {
    let count = 1usize << dim;
    let mut blades = Vec::with_capacity(count);
    for bitmap in 0..count as u32 {
        blades.push(Blade::new(
            bitmap,
            Coeff::one(),
            blade_label(prefix, base, bitmap),
        ));
    }
    blades
}

/// The same blades reordered by (grade, bitmap).
pub fn by_grade(blades: &[Blade]) -> Vec<Blade> {
    let mut sorted = blades.to_vec();
    sorted.sort_by_key(|b| (b.grade, b.bitmap));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(blade_label("e", 0, 0), "e_");
        assert_eq!(blade_label("e", 0, 0b1), "e0");
        assert_eq!(blade_label("e", 1, 0b1), "e1");
        assert_eq!(blade_label("e", 0, 0b101), "e02");
        assert_eq!(blade_label("f", 1, 0b111), "f123");
    }

    #[test]
    fn dense_enumeration() {
        let blades = generate("e", 0, 3);
        assert_eq!(blades.len(), 8);
        for (i, b) in blades.iter().enumerate() {
            assert_eq!(b.bitmap, i as u32);
            assert_eq!(b.grade, (i as u32).count_ones());
        }
    }

    #[test]
    fn grade_order_is_stable() {
        let blades = by_grade(&generate("e", 0, 3));
        let grades: Vec<u32> = blades.iter().map(|b| b.grade).collect();
        assert_eq!(grades, vec![0, 1, 1, 1, 2, 2, 2, 3]);
        // within a grade, bitmaps ascend
        assert_eq!(blades[4].bitmap, 0b011);
        assert_eq!(blades[5].bitmap, 0b101);
        assert_eq!(blades[6].bitmap, 0b110);
    }
}
