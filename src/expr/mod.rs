//! Module for symbolic expression objects.
//!
//! An [AffineExpr] is an ordered list of `(variable, coefficient)` terms plus
//! a constant. A [QuadExpr] adds an ordered list of
//! `(variable, variable, coefficient)` terms on top of an embedded affine
//! part. Term lists are kept exactly as written: duplicates are legal and
//! insertion order is significant, since rendering preserves the order the
//! user built the expression in. Merging of duplicates happens in [canon]
//! when an expression is displayed.
//!
//! Expressions are built with the usual operators:
//!
//! ```
//! use optexpr::*;
//!
//! let x = Variable::named(0,"x");
//! let y = Variable::named(1,"y");
//!
//! let e = 2.0*x.clone() + y.clone() - 0.5;
//! assert_eq!(e.to_string(), "2 x + y - 0.5");
//!
//! let q = x.clone()*y.clone() + e;
//! assert_eq!(q.to_string(), "x×y + 2 x + y - 0.5");
//! ```

pub mod canon;

use itertools::{iproduct,Itertools};

use crate::render;
use crate::variable::Variable;

/// An affine expression: a constant plus an ordered sequence of linear terms.
#[derive(Clone,Debug,Default)]
pub struct AffineExpr {
    pub(crate) terms    : Vec<(Variable,f64)>,
    pub(crate) constant : f64
}

/// A quadratic expression: an ordered sequence of quadratic terms plus an
/// embedded affine part.
#[derive(Clone,Debug,Default)]
pub struct QuadExpr {
    pub(crate) qterms : Vec<(Variable,Variable,f64)>,
    pub(crate) affine : AffineExpr
}

impl AffineExpr {
    /// Create an expression from a term list and a constant. The list may
    /// contain duplicate variables; they are merged only for display.
    pub fn new(terms : Vec<(Variable,f64)>, constant : f64) -> AffineExpr {
        AffineExpr{ terms, constant }
    }

    /// A constant expression with no variable terms.
    pub fn from_constant(constant : f64) -> AffineExpr {
        AffineExpr{ terms : Vec::new(), constant }
    }

    /// A single term `coef * var`.
    pub fn term(var : Variable, coef : f64) -> AffineExpr {
        AffineExpr{ terms : vec![(var,coef)], constant : 0.0 }
    }

    pub fn terms(&self) -> &[(Variable,f64)] { self.terms.as_slice() }
    pub fn constant(&self) -> f64 { self.constant }

    /// Append a term in place.
    pub fn add_term(& mut self, var : Variable, coef : f64) {
        self.terms.push((var,coef));
    }

    /// The term list with duplicate variables merged, in first-occurrence
    /// order.
    pub fn canonical_terms(&self) -> Vec<(Variable,f64)> {
        canon::canonical_linear(self.terms.as_slice())
    }

    /// Distinct variables in order of first appearance.
    pub fn variables(&self) -> Vec<Variable> {
        self.terms.iter().map(|(v,_)| v.clone()).unique().collect()
    }

    /// Evaluate the expression given a value for each variable.
    pub fn eval<F>(&self, value : F) -> f64 where F : Fn(&Variable) -> f64 {
        self.terms.iter().fold(self.constant,|s,(v,c)| s + c*value(v))
    }

    /// Render in the given mode. Equivalent to
    /// [render::render_affine] with the constant shown.
    pub fn to_str(&self, mode : render::RenderMode) -> String {
        render::render_affine(mode,self,true)
    }

    /// Render as LaTeX markup. Unless `already_math_mode` indicates that the
    /// surrounding context is already math mode, the result is wrapped in
    /// `$$ ... $$`.
    pub fn to_latex(&self, already_math_mode : bool) -> String {
        render::math_string(render::RenderMode::Latex,
                            render::render_affine(render::RenderMode::Latex,self,true).as_str(),
                            already_math_mode)
    }
}

impl QuadExpr {
    pub fn new(qterms : Vec<(Variable,Variable,f64)>, affine : AffineExpr) -> QuadExpr {
        QuadExpr{ qterms, affine }
    }

    /// A single quadratic term `coef * v * w`.
    pub fn qterm(v : Variable, w : Variable, coef : f64) -> QuadExpr {
        QuadExpr{ qterms : vec![(v,w,coef)], affine : AffineExpr::default() }
    }

    pub fn qterms(&self) -> &[(Variable,Variable,f64)] { self.qterms.as_slice() }

    /// The embedded affine part.
    pub fn affine(&self) -> &AffineExpr { &self.affine }

    /// Append a quadratic term in place.
    pub fn add_qterm(& mut self, v : Variable, w : Variable, coef : f64) {
        self.qterms.push((v,w,coef));
    }

    /// The quadratic term list with duplicate pairs merged, in
    /// first-occurrence order. The pair key is unordered, the retained
    /// display tuple is the first one encountered.
    pub fn canonical_qterms(&self) -> Vec<(Variable,Variable,f64)> {
        canon::canonical_quadratic(self.qterms.as_slice())
    }

    /// Distinct variables in order of first appearance, quadratic terms
    /// first.
    pub fn variables(&self) -> Vec<Variable> {
        self.qterms.iter()
            .flat_map(|(v,w,_)| [v.clone(),w.clone()])
            .chain(self.affine.terms.iter().map(|(v,_)| v.clone()))
            .unique()
            .collect()
    }

    /// Evaluate the expression given a value for each variable.
    pub fn eval<F>(&self, value : F) -> f64 where F : Fn(&Variable) -> f64 {
        self.qterms.iter().fold(self.affine.eval(&value),|s,(v,w,c)| s + c*value(v)*value(w))
    }

    /// Render in the given mode. Equivalent to [render::render_quadratic].
    pub fn to_str(&self, mode : render::RenderMode) -> String {
        render::render_quadratic(mode,self)
    }

    /// Render as LaTeX markup, wrapped in `$$ ... $$` unless
    /// `already_math_mode` is set.
    pub fn to_latex(&self, already_math_mode : bool) -> String {
        render::math_string(render::RenderMode::Latex,
                            render::render_quadratic(render::RenderMode::Latex,self).as_str(),
                            already_math_mode)
    }
}

//======================================================
// Conversions
//======================================================

impl From<Variable> for AffineExpr {
    fn from(v : Variable) -> AffineExpr { AffineExpr::term(v,1.0) }
}
impl From<&Variable> for AffineExpr {
    fn from(v : &Variable) -> AffineExpr { AffineExpr::term(v.clone(),1.0) }
}
impl From<f64> for AffineExpr {
    fn from(c : f64) -> AffineExpr { AffineExpr::from_constant(c) }
}
impl From<AffineExpr> for QuadExpr {
    fn from(affine : AffineExpr) -> QuadExpr { QuadExpr{ qterms : Vec::new(), affine } }
}
impl From<Variable> for QuadExpr {
    fn from(v : Variable) -> QuadExpr { AffineExpr::from(v).into() }
}
impl From<f64> for QuadExpr {
    fn from(c : f64) -> QuadExpr { AffineExpr::from_constant(c).into() }
}

//======================================================
// Operators: Variable
//======================================================

impl std::ops::Add<Variable> for Variable {
    type Output = AffineExpr;
    fn add(self, rhs : Variable) -> AffineExpr {
        AffineExpr{ terms : vec![(self,1.0),(rhs,1.0)], constant : 0.0 }
    }
}
impl std::ops::Sub<Variable> for Variable {
    type Output = AffineExpr;
    fn sub(self, rhs : Variable) -> AffineExpr {
        AffineExpr{ terms : vec![(self,1.0),(rhs,-1.0)], constant : 0.0 }
    }
}
impl std::ops::Add<f64> for Variable {
    type Output = AffineExpr;
    fn add(self, rhs : f64) -> AffineExpr { AffineExpr{ terms : vec![(self,1.0)], constant : rhs } }
}
impl std::ops::Sub<f64> for Variable {
    type Output = AffineExpr;
    fn sub(self, rhs : f64) -> AffineExpr { AffineExpr{ terms : vec![(self,1.0)], constant : -rhs } }
}
impl std::ops::Mul<f64> for Variable {
    type Output = AffineExpr;
    fn mul(self, rhs : f64) -> AffineExpr { AffineExpr::term(self,rhs) }
}
impl std::ops::Mul<Variable> for f64 {
    type Output = AffineExpr;
    fn mul(self, rhs : Variable) -> AffineExpr { AffineExpr::term(rhs,self) }
}
impl std::ops::Mul<Variable> for Variable {
    type Output = QuadExpr;
    fn mul(self, rhs : Variable) -> QuadExpr { QuadExpr::qterm(self,rhs,1.0) }
}
impl std::ops::Neg for Variable {
    type Output = AffineExpr;
    fn neg(self) -> AffineExpr { AffineExpr::term(self,-1.0) }
}
impl std::ops::Add<AffineExpr> for Variable {
    type Output = AffineExpr;
    fn add(self, rhs : AffineExpr) -> AffineExpr { AffineExpr::from(self) + rhs }
}
impl std::ops::Sub<AffineExpr> for Variable {
    type Output = AffineExpr;
    fn sub(self, rhs : AffineExpr) -> AffineExpr { AffineExpr::from(self) - rhs }
}

//======================================================
// Operators: AffineExpr
//======================================================

impl std::ops::Add<AffineExpr> for AffineExpr {
    type Output = AffineExpr;
    fn add(mut self, rhs : AffineExpr) -> AffineExpr {
        self.terms.extend(rhs.terms);
        self.constant += rhs.constant;
        self
    }
}
impl std::ops::Sub<AffineExpr> for AffineExpr {
    type Output = AffineExpr;
    fn sub(mut self, rhs : AffineExpr) -> AffineExpr {
        self.terms.extend(rhs.terms.into_iter().map(|(v,c)| (v,-c)));
        self.constant -= rhs.constant;
        self
    }
}
impl std::ops::Add<Variable> for AffineExpr {
    type Output = AffineExpr;
    fn add(mut self, rhs : Variable) -> AffineExpr { self.terms.push((rhs,1.0)); self }
}
impl std::ops::Sub<Variable> for AffineExpr {
    type Output = AffineExpr;
    fn sub(mut self, rhs : Variable) -> AffineExpr { self.terms.push((rhs,-1.0)); self }
}
impl std::ops::Add<f64> for AffineExpr {
    type Output = AffineExpr;
    fn add(mut self, rhs : f64) -> AffineExpr { self.constant += rhs; self }
}
impl std::ops::Sub<f64> for AffineExpr {
    type Output = AffineExpr;
    fn sub(mut self, rhs : f64) -> AffineExpr { self.constant -= rhs; self }
}
impl std::ops::Mul<f64> for AffineExpr {
    type Output = AffineExpr;
    fn mul(mut self, rhs : f64) -> AffineExpr {
        self.terms.iter_mut().for_each(|(_,c)| *c *= rhs);
        self.constant *= rhs;
        self
    }
}
impl std::ops::Mul<AffineExpr> for f64 {
    type Output = AffineExpr;
    fn mul(self, rhs : AffineExpr) -> AffineExpr { rhs * self }
}
impl std::ops::Neg for AffineExpr {
    type Output = AffineExpr;
    fn neg(self) -> AffineExpr { self * -1.0 }
}

/// The product of two affine expressions is quadratic. Cross terms appear in
/// row-major order of the operand term lists.
impl std::ops::Mul<AffineExpr> for AffineExpr {
    type Output = QuadExpr;
    fn mul(self, rhs : AffineExpr) -> QuadExpr {
        let qterms : Vec<(Variable,Variable,f64)> =
            iproduct!(self.terms.iter(),rhs.terms.iter())
                .map(|((v,c),(w,d))| (v.clone(),w.clone(),c*d))
                .collect();
        let mut affine = AffineExpr::from_constant(self.constant*rhs.constant);
        affine.terms.extend(self.terms.into_iter().map(|(v,c)| (v,c*rhs.constant)));
        affine.terms.extend(rhs.terms.into_iter().map(|(w,d)| (w,d*self.constant)));
        QuadExpr{ qterms, affine }
    }
}

//======================================================
// Operators: QuadExpr
//======================================================

impl std::ops::Add<QuadExpr> for QuadExpr {
    type Output = QuadExpr;
    fn add(mut self, rhs : QuadExpr) -> QuadExpr {
        self.qterms.extend(rhs.qterms);
        self.affine = self.affine + rhs.affine;
        self
    }
}
impl std::ops::Sub<QuadExpr> for QuadExpr {
    type Output = QuadExpr;
    fn sub(mut self, rhs : QuadExpr) -> QuadExpr {
        self.qterms.extend(rhs.qterms.into_iter().map(|(v,w,c)| (v,w,-c)));
        self.affine = self.affine - rhs.affine;
        self
    }
}
impl std::ops::Add<AffineExpr> for QuadExpr {
    type Output = QuadExpr;
    fn add(mut self, rhs : AffineExpr) -> QuadExpr { self.affine = self.affine + rhs; self }
}
impl std::ops::Sub<AffineExpr> for QuadExpr {
    type Output = QuadExpr;
    fn sub(mut self, rhs : AffineExpr) -> QuadExpr { self.affine = self.affine - rhs; self }
}
impl std::ops::Add<QuadExpr> for AffineExpr {
    type Output = QuadExpr;
    fn add(self, rhs : QuadExpr) -> QuadExpr { QuadExpr::from(self) + rhs }
}
impl std::ops::Add<Variable> for QuadExpr {
    type Output = QuadExpr;
    fn add(mut self, rhs : Variable) -> QuadExpr { self.affine.terms.push((rhs,1.0)); self }
}
impl std::ops::Sub<Variable> for QuadExpr {
    type Output = QuadExpr;
    fn sub(mut self, rhs : Variable) -> QuadExpr { self.affine.terms.push((rhs,-1.0)); self }
}
impl std::ops::Add<f64> for QuadExpr {
    type Output = QuadExpr;
    fn add(mut self, rhs : f64) -> QuadExpr { self.affine.constant += rhs; self }
}
impl std::ops::Sub<f64> for QuadExpr {
    type Output = QuadExpr;
    fn sub(mut self, rhs : f64) -> QuadExpr { self.affine.constant -= rhs; self }
}
impl std::ops::Mul<f64> for QuadExpr {
    type Output = QuadExpr;
    fn mul(mut self, rhs : f64) -> QuadExpr {
        self.qterms.iter_mut().for_each(|(_,_,c)| *c *= rhs);
        self.affine = self.affine * rhs;
        self
    }
}
impl std::ops::Mul<QuadExpr> for f64 {
    type Output = QuadExpr;
    fn mul(self, rhs : QuadExpr) -> QuadExpr { rhs * self }
}
impl std::ops::Neg for QuadExpr {
    type Output = QuadExpr;
    fn neg(self) -> QuadExpr { self * -1.0 }
}

//======================================================
// Display
//======================================================

impl std::fmt::Display for AffineExpr {
    fn fmt(&self, f : & mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str(render::RenderMode::plain()).as_str())
    }
}
impl std::fmt::Display for QuadExpr {
    fn fmt(&self, f : & mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str(render::RenderMode::plain()).as_str())
    }
}
