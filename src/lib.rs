//! Symbolic modeling of optimization problems with human-readable rendering.
//!
//! The crate represents optimization model fragments symbolically — decision
//! [Variable]s, affine and quadratic expressions, and relational
//! [Constraint]s — and renders them as deterministic, human-readable strings
//! for interactive and notebook use. Expressions are kept exactly as the
//! user built them; duplicate terms are merged at display time while the
//! first-appearance order of distinct terms is preserved, so `y + x` never
//! silently becomes `x + y`.
//!
//! Two render modes are supported, selected by [RenderMode]: plain text
//! (with an ASCII fallback for consoles that cannot show the math glyphs)
//! and LaTeX-style math markup suitable for embedding in notebook output.
//!
//! ```
//! use optexpr::*;
//!
//! let x = Variable::named(0,"x");
//! let y = Variable::named(1,"y");
//!
//! let e = 3.0*x.clone() - y.clone() + 1.5;
//! assert_eq!(e.to_string(), "3 x - y + 1.5");
//!
//! let c = constraint(Some("cap"), e, in_range(0.0,10.0));
//! assert_eq!(c.to_string(), "cap : 0 ≤ 3 x - y + 1.5 ≤ 10");
//! assert_eq!(c.to_latex(false), "$$ cap : 0 \\leq 3 x - y + 1.5 \\leq 10 $$");
//! ```
//!
//! The crate has no solver interface and performs no numerical solving;
//! whatever system owns the model supplies variable identifiers and display
//! names, and consumes the rendered strings.

extern crate itertools;

pub mod variable;
pub mod expr;
pub mod constraint;
pub mod render;

pub use variable::Variable;
pub use expr::{AffineExpr,QuadExpr};
pub use constraint::{Constraint,Relation,constraint,less_than,greater_than,equal_to,in_range};
pub use render::{RenderMode,Sym,ZERO_TOL,format_number,
                 render_affine,render_quadratic,render_constraint,math_string,var_str};
