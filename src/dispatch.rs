//! Polymorphic operator dispatch.
//!
//! Every operator call resolves to a key built from the operator symbol,
//! the operand kinds (number / blade / multivector), their grade classes
//! (scalar / non-scalar / whole multivector) and, for binary products,
//! whether the operand bitmaps are disjoint. The algebra carries a table
//! from keys to handlers, populated once at construction; a miss is a
//! `NoSuchOp` error, never a silent fallback.

use crate::algebra::Ga;
use crate::blade::Blade;
use crate::coeff::Coeff;
use crate::error::{GaError, Result};
use crate::multivector::Multivector;
use num_traits::Zero;
use std::collections::HashMap;
use std::fmt;

/// Operator symbols routed through the dispatch table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Op {
    Add,
    Sub,
    /// Geometric product.
    Geo,
    /// Exterior product (meet).
    Wedge,
    /// Left contraction (the interior part of the product split).
    LeftContract,
    /// Right contraction.
    RightContract,
    /// Symmetric inner product on non-scalar factors.
    Inner,
    /// Join: dual of the wedge of duals, n-ary.
    Join,
    Dual,
    Hodge,
    Sandwich,
    Exp,
    Inverse,
    Normalize,
    Reverse,
    Involute,
    Negate,
}

/// A dispatchable value.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Number(Coeff),
    Blade(Blade),
    Multivector(Multivector),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Kind {
    Number,
    Blade,
    Multivector,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GradeClass {
    /// Grade 0.
    Scalar,
    /// A single blade of grade ≥ 1.
    NonScalar,
    /// A whole multivector, mixed grades.
    Grades,
}

/// Whether two operands share basis vectors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Dependency {
    Independent,
    Dependent,
}

impl Operand {
    pub fn kind(&self) -> Kind {
        match self {
            Operand::Number(_) => Kind::Number,
            Operand::Blade(_) => Kind::Blade,
            Operand::Multivector(_) => Kind::Multivector,
        }
    }

    pub fn grade_class(&self) -> GradeClass {
        match self {
            Operand::Number(_) => GradeClass::Scalar,
            Operand::Blade(b) if b.is_scalar() => GradeClass::Scalar,
            Operand::Blade(_) => GradeClass::NonScalar,
            Operand::Multivector(_) => GradeClass::Grades,
        }
    }

    /// Union of the basis vectors this operand touches.
    pub fn bitmap_union(&self) -> u32 {
        match self {
            Operand::Number(_) => 0,
            Operand::Blade(b) => b.bitmap,
            Operand::Multivector(mv) => mv.blades.iter().fold(0, |acc, b| acc | b.bitmap),
        }
    }

    /// Promote to a multivector (numbers become scalar blades).
    pub fn to_multivector(&self, ga: &Ga) -> Multivector {
        match self {
            Operand::Number(c) => ga.scalar_multivector(c.clone()),
            Operand::Blade(b) => {
                if b.scale.is_zero() {
                    Multivector::empty()
                } else {
                    Multivector::from_blade(b.clone())
                }
            }
            Operand::Multivector(mv) => mv.clone(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Operand::Number(_) => "number".to_string(),
            Operand::Blade(b) => format!("blade/{}", b.basis),
            Operand::Multivector(mv) => format!("multivector[{}]", mv.blades.len()),
        }
    }
}

/// Key of the handler table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DispatchKey {
    Unary(Op, Kind),
    Binary(Op, Dependency, Kind, GradeClass, Kind, GradeClass),
    Nary(Op),
}

/// Handlers receive the algebra explicitly; the table holds plain
/// function pointers, so the algebra/handler cycle never materialises.
pub type Handler = fn(&Ga, &[Operand]) -> Result<Operand>;

#[derive(Clone, Default)]
pub struct OpTable {
    handlers: HashMap<DispatchKey, Handler>,
}

impl OpTable {
    pub fn register(&mut self, key: DispatchKey, handler: Handler) {
        self.handlers.insert(key, handler);
    }

    pub fn get(&self, key: &DispatchKey) -> Option<Handler> {
        self.handlers.get(key).copied()
    }

    pub fn has_nary(&self, op: Op) -> bool {
        self.handlers.contains_key(&DispatchKey::Nary(op))
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for OpTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpTable({} handlers)", self.handlers.len())
    }
}

/// Dependency classification of a binary pair.
pub fn dependency(a: &Operand, b: &Operand) -> Dependency {
    if a.bitmap_union() & b.bitmap_union() == 0 {
        Dependency::Independent
    } else {
        Dependency::Dependent
    }
}

/// Dispatch key for a binary application.
pub fn binary_key(op: Op, a: &Operand, b: &Operand) -> DispatchKey {
    DispatchKey::Binary(
        op,
        dependency(a, b),
        a.kind(),
        a.grade_class(),
        b.kind(),
        b.grade_class(),
    )
}

fn no_such_op(op: Op, operands: &[Operand]) -> GaError {
    let rendered: Vec<String> = operands.iter().map(Operand::describe).collect();
    GaError::NoSuchOp {
        op,
        operands: rendered.join(", "),
    }
}

impl Ga {
    /// Resolve and run the handler for `op` on `operands`.
    ///
    /// Unary calls use the `(op, kind)` key; binary calls the full
    /// dependency/kind/grade-class key. Calls with more than two operands
    /// reduce left-to-right with the binary handler unless the operator
    /// registered a dedicated n-ary fold (which also claims binary calls,
    /// so fold semantics stay uniform; `Join` relies on this).
    pub fn apply(&self, op: Op, operands: &[Operand]) -> Result<Operand> {
        match operands.len() {
            0 => Err(no_such_op(op, operands)),
            1 => {
                let key = DispatchKey::Unary(op, operands[0].kind());
                match self.ops().get(&key) {
                    Some(handler) => handler(self, operands),
                    None if self.ops().has_nary(op) => {
                        let handler = self
                            .ops()
                            .get(&DispatchKey::Nary(op))
                            .ok_or_else(|| no_such_op(op, operands))?;
                        handler(self, operands)
                    }
                    None => Err(no_such_op(op, operands)),
                }
            }
            _ => {
                if self.ops().has_nary(op) {
                    let handler = self
                        .ops()
                        .get(&DispatchKey::Nary(op))
                        .ok_or_else(|| no_such_op(op, operands))?;
                    return handler(self, operands);
                }
                let mut acc = operands[0].clone();
                for rhs in &operands[1..] {
                    let key = binary_key(op, &acc, rhs);
                    let pair = [acc.clone(), rhs.clone()];
                    let handler = self
                        .ops()
                        .get(&key)
                        .ok_or_else(|| no_such_op(op, &pair))?;
                    acc = handler(self, &pair)?;
                }
                Ok(acc)
            }
        }
    }
}
