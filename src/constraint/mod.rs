//! Module for constraint objects and the relation constructors.
//!
//! A [Constraint] applies a [Relation] to an expression. Relations are built
//! with the free functions [less_than], [greater_than], [equal_to] and
//! [in_range]:
//!
//! ```
//! use optexpr::*;
//!
//! let x = Variable::named(0,"x");
//! let c = constraint(None, x, in_range(0.0,10.0));
//! assert_eq!(c.to_string(), "0 ≤ x ≤ 10");
//! ```

use crate::expr::QuadExpr;
use crate::render;

/// The relation a constraint applies to its expression. The set of senses is
/// closed; constraints with any other shape cannot be constructed.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum Relation {
    /// `expr ≤ bound`
    LessThan(f64),
    /// `expr ≥ bound`
    GreaterThan(f64),
    /// `expr = bound`
    EqualTo(f64),
    /// `lower ≤ expr ≤ upper`
    Range(f64,f64)
}

/// Upper bound relation: `expr ≤ v`.
pub fn less_than(v : f64) -> Relation { Relation::LessThan(v) }
/// Lower bound relation: `expr ≥ v`.
pub fn greater_than(v : f64) -> Relation { Relation::GreaterThan(v) }
/// Equality relation: `expr = v`.
pub fn equal_to(v : f64) -> Relation { Relation::EqualTo(v) }
/// Two-sided bound relation: `lower ≤ expr ≤ upper`.
pub fn in_range(lower : f64, upper : f64) -> Relation {
    if lower > upper {
        panic!("Invalid range bounds");
    }
    Relation::Range(lower,upper)
}

/// A relation applied to an expression, optionally named.
///
/// The expression is stored as a [QuadExpr]; an affine constraint is simply
/// one whose quadratic term list is empty. The stored expression is kept as
/// written, constants included; rendering never rewrites it.
#[derive(Clone,Debug)]
pub struct Constraint {
    pub(crate) name : Option<String>,
    pub(crate) expr : QuadExpr,
    pub(crate) rel  : Relation
}

/// Create a constraint from an expression and a relation.
pub fn constraint<E>(name : Option<&str>, expr : E, rel : Relation) -> Constraint
    where E : Into<QuadExpr>
{
    Constraint{
        name : name.map(|n| n.to_string()),
        expr : expr.into(),
        rel
    }
}

impl Constraint {
    pub fn name(&self) -> Option<&str> { self.name.as_deref() }
    pub fn expr(&self) -> &QuadExpr { &self.expr }
    pub fn relation(&self) -> Relation { self.rel }

    /// Render in the given mode. Equivalent to [render::render_constraint].
    pub fn to_str(&self, mode : render::RenderMode) -> String {
        render::render_constraint(mode,self)
    }

    /// Render as LaTeX markup, wrapped in `$$ ... $$` unless
    /// `already_math_mode` is set.
    pub fn to_latex(&self, already_math_mode : bool) -> String {
        render::math_string(render::RenderMode::Latex,
                            render::render_constraint(render::RenderMode::Latex,self).as_str(),
                            already_math_mode)
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f : & mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str(render::RenderMode::plain()).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::Variable;

    #[test]
    fn relation_constructors() {
        assert_eq!(less_than(1.0),    Relation::LessThan(1.0));
        assert_eq!(greater_than(1.0), Relation::GreaterThan(1.0));
        assert_eq!(equal_to(1.0),     Relation::EqualTo(1.0));
        assert_eq!(in_range(0.0,1.0), Relation::Range(0.0,1.0));
    }

    #[test]
    #[should_panic]
    fn inverted_range_panics() {
        let _ = in_range(1.0,0.0);
    }

    #[test]
    fn construction() {
        let x = Variable::named(1,"x");
        let c = constraint(Some("budget"), 2.0*x, less_than(10.0));
        assert_eq!(c.name(),Some("budget"));
        assert_eq!(c.relation(),Relation::LessThan(10.0));
        assert!(c.expr().qterms().is_empty());
    }
}
