//! Primitive products on blades and multivectors.
//!
//! The geometric product of two basis blades has bitmap `a ⊕ b`; its sign
//! is the canonical-order swap parity, and every basis vector the operands
//! share contributes one metric factor. A zero metric entry annihilates
//! the term through a zero scale, which the simplifier drops downstream.
//! All grade-filtered products (wedge, contractions, symmetric inner) are
//! partitions of the unsimplified geometric product by result grade.

use crate::algebra::Ga;
use crate::blade::{sign, signed, Blade};
use crate::dispatch::{Dependency, DispatchKey, GradeClass, Kind, Op, OpTable, Operand};
use crate::error::Result;
use crate::multivector::Multivector;

/// Raw geometric product of two blades, metric factors included.
pub fn blade_product(ga: &Ga, a: &Blade, b: &Blade) -> Blade {
    let bitmap = a.bitmap ^ b.bitmap;
    let mut scale = signed(&a.scale * &b.scale, sign(a.bitmap, b.bitmap));
    let mut shared = a.bitmap & b.bitmap;
    while shared != 0 {
        let i = shared.trailing_zeros();
        scale = scale * &ga.metric()[i as usize];
        shared &= shared - 1;
    }
    Blade::new(bitmap, scale, ga.label(bitmap))
}

/// Interior/exterior split: one pass over the raw blade pairs, binned by
/// the grade of each product. The exterior bin keeps `g(ab) = g(a)+g(b)`,
/// the interior bin keeps `g(ab) = g(b)−g(a)` (left contraction).
pub fn inner_outer(ga: &Ga, a: &Multivector, b: &Multivector) -> (Multivector, Multivector) {
    let mut interior = Vec::new();
    let mut exterior = Vec::new();
    for x in &a.blades {
        for y in &b.blades {
            let prod = blade_product(ga, x, y);
            if prod.grade == x.grade + y.grade {
                exterior.push(prod.clone());
            }
            if y.grade >= x.grade && prod.grade == y.grade - x.grade {
                interior.push(prod);
            }
        }
    }
    (
        Multivector::new(interior).simplify(),
        Multivector::new(exterior).simplify(),
    )
}

fn partition(
    ga: &Ga,
    args: &[Operand],
    keep: fn(u32, u32, u32) -> bool,
) -> Result<Operand> {
    let a = args[0].to_multivector(ga);
    let b = args[1].to_multivector(ga);
    let mut out = Vec::new();
    for x in &a.blades {
        for y in &b.blades {
            let prod = blade_product(ga, x, y);
            if keep(x.grade, y.grade, prod.grade) {
                out.push(prod);
            }
        }
    }
    Ok(Operand::Multivector(Multivector::new(out).simplify()))
}

// --- geometric product handlers ---

fn geo_numbers(_ga: &Ga, args: &[Operand]) -> Result<Operand> {
    match (&args[0], &args[1]) {
        (Operand::Number(a), Operand::Number(b)) => Ok(Operand::Number(a * b)),
        _ => unreachable!("dispatch key guarantees number operands"),
    }
}

fn geo_number_left(_ga: &Ga, args: &[Operand]) -> Result<Operand> {
    match (&args[0], &args[1]) {
        (Operand::Number(c), Operand::Blade(b)) => Ok(Operand::Blade(b.with_scale(c * &b.scale))),
        (Operand::Number(c), Operand::Multivector(mv)) => {
            Ok(Operand::Multivector(mv.scaled(c).simplify()))
        }
        _ => unreachable!("dispatch key guarantees a leading number"),
    }
}

fn geo_number_right(ga: &Ga, args: &[Operand]) -> Result<Operand> {
    let swapped = [args[1].clone(), args[0].clone()];
    geo_number_left(ga, &swapped)
}

/// Scalar blade times blade: pure scale multiplication, no sign.
fn geo_blade_scalar(_ga: &Ga, args: &[Operand]) -> Result<Operand> {
    match (&args[0], &args[1]) {
        (Operand::Blade(a), Operand::Blade(b)) => {
            let (scalar, other) = if a.is_scalar() { (a, b) } else { (b, a) };
            Ok(Operand::Blade(other.with_scale(&scalar.scale * &other.scale)))
        }
        _ => unreachable!("dispatch key guarantees blade operands"),
    }
}

/// Blades sharing no basis vectors: bitmap xor, canonical-order sign only.
fn geo_blade_independent(ga: &Ga, args: &[Operand]) -> Result<Operand> {
    match (&args[0], &args[1]) {
        (Operand::Blade(a), Operand::Blade(b)) => {
            let bitmap = a.bitmap ^ b.bitmap;
            let scale = signed(&a.scale * &b.scale, sign(a.bitmap, b.bitmap));
            Ok(Operand::Blade(Blade::new(bitmap, scale, ga.label(bitmap))))
        }
        _ => unreachable!("dispatch key guarantees blade operands"),
    }
}

/// Blades with shared basis vectors: one metric factor per shared bit.
fn geo_blade_dependent(ga: &Ga, args: &[Operand]) -> Result<Operand> {
    match (&args[0], &args[1]) {
        (Operand::Blade(a), Operand::Blade(b)) => Ok(Operand::Blade(blade_product(ga, a, b))),
        _ => unreachable!("dispatch key guarantees blade operands"),
    }
}

/// Multivector geometric product: cartesian blade pairs routed back
/// through the dispatcher, then simplified.
fn geo_multivectors(ga: &Ga, args: &[Operand]) -> Result<Operand> {
    let a = args[0].to_multivector(ga);
    let b = args[1].to_multivector(ga);
    let mut out = Vec::with_capacity(a.blades.len() * b.blades.len());
    for x in &a.blades {
        for y in &b.blades {
            let pair = [Operand::Blade(x.clone()), Operand::Blade(y.clone())];
            match ga.apply(Op::Geo, &pair)? {
                Operand::Blade(prod) => out.push(prod),
                Operand::Number(c) => out.push(Blade::new(0, c, ga.label(0))),
                Operand::Multivector(mv) => out.extend(mv.blades),
            }
        }
    }
    Ok(Operand::Multivector(Multivector::new(out).simplify()))
}

// --- grade-partition handlers ---

fn wedge_mv(ga: &Ga, args: &[Operand]) -> Result<Operand> {
    partition(ga, args, |ga_, gb, gab| gab == ga_ + gb)
}

fn left_contract_mv(ga: &Ga, args: &[Operand]) -> Result<Operand> {
    partition(ga, args, |ga_, gb, gab| gb >= ga_ && gab == gb - ga_)
}

fn right_contract_mv(ga: &Ga, args: &[Operand]) -> Result<Operand> {
    partition(ga, args, |ga_, gb, gab| ga_ >= gb && gab == ga_ - gb)
}

fn inner_mv(ga: &Ga, args: &[Operand]) -> Result<Operand> {
    partition(ga, args, |ga_, gb, gab| {
        ga_ > 0 && gb > 0 && gab == ga_.abs_diff(gb)
    })
}

// --- additive handlers ---

fn add_mv(ga: &Ga, args: &[Operand]) -> Result<Operand> {
    let a = args[0].to_multivector(ga);
    let b = args[1].to_multivector(ga);
    Ok(Operand::Multivector(a.added(&b)))
}

fn sub_mv(ga: &Ga, args: &[Operand]) -> Result<Operand> {
    let a = args[0].to_multivector(ga);
    let b = args[1].to_multivector(ga);
    Ok(Operand::Multivector(a.added(&b.negated())))
}

const OPERAND_SHAPES: [(Kind, GradeClass); 4] = [
    (Kind::Number, GradeClass::Scalar),
    (Kind::Blade, GradeClass::Scalar),
    (Kind::Blade, GradeClass::NonScalar),
    (Kind::Multivector, GradeClass::Grades),
];

/// Register one handler for every operand-shape combination of a binary
/// operator, independent and dependent alike.
pub(crate) fn register_binary(table: &mut OpTable, op: Op, handler: crate::dispatch::Handler) {
    for dep in [Dependency::Independent, Dependency::Dependent] {
        for (ka, ga_) in OPERAND_SHAPES {
            for (kb, gb) in OPERAND_SHAPES {
                table.register(DispatchKey::Binary(op, dep, ka, ga_, kb, gb), handler);
            }
        }
    }
}

pub(crate) fn register(table: &mut OpTable) {
    const NUMBER: (Kind, GradeClass) = (Kind::Number, GradeClass::Scalar);
    const SCALAR_BLADE: (Kind, GradeClass) = (Kind::Blade, GradeClass::Scalar);
    const BLADE: (Kind, GradeClass) = (Kind::Blade, GradeClass::NonScalar);
    const MV: (Kind, GradeClass) = (Kind::Multivector, GradeClass::Grades);
    let indep = Dependency::Independent;
    let dep = Dependency::Dependent;
    let key = |d: Dependency, a: (Kind, GradeClass), b: (Kind, GradeClass)| {
        DispatchKey::Binary(Op::Geo, d, a.0, a.1, b.0, b.1)
    };

    // every shape gets the generic cartesian product first...
    register_binary(table, Op::Geo, geo_multivectors);

    // ...then the precise entries override where a cheaper or
    // structurally different handler exists
    table.register(key(indep, NUMBER, NUMBER), geo_numbers);
    for shape in [SCALAR_BLADE, BLADE, MV] {
        table.register(key(indep, NUMBER, shape), geo_number_left);
        table.register(key(indep, shape, NUMBER), geo_number_right);
    }
    table.register(key(indep, SCALAR_BLADE, SCALAR_BLADE), geo_blade_scalar);
    table.register(key(indep, SCALAR_BLADE, BLADE), geo_blade_scalar);
    table.register(key(indep, BLADE, SCALAR_BLADE), geo_blade_scalar);
    table.register(key(indep, BLADE, BLADE), geo_blade_independent);
    table.register(key(dep, BLADE, BLADE), geo_blade_dependent);

    register_binary(table, Op::Wedge, wedge_mv);
    register_binary(table, Op::LeftContract, left_contract_mv);
    register_binary(table, Op::RightContract, right_contract_mv);
    register_binary(table, Op::Inner, inner_mv);
    register_binary(table, Op::Add, add_mv);
    register_binary(table, Op::Sub, sub_mv);
}
