//! Module for human-readable rendering of expressions and constraints.
//!
//! Rendering is a pure function of its inputs: the same expression and mode
//! always produce byte-identical output, and nothing here mutates shared
//! state beyond the fixed symbol tables in [symbols]. Term lists are
//! canonicalized first (duplicates merged, first-occurrence order kept), then
//! written out with the sign and spacing conventions below:
//!
//! - the leading term carries no sign when positive and a bare `-` when
//!   negative; subsequent terms join with ` + ` or ` - `,
//! - a coefficient within [ZERO_TOL] of ±1 is elided,
//! - a term whose merged coefficient is negligible (absolute value below
//!   [ZERO_TOL]) is omitted entirely,
//! - an expression with nothing left to show renders as its constant, or
//!   `"0"`.

pub mod symbols;
pub mod numfmt;

pub use symbols::Sym;
pub use numfmt::format_number;

use crate::constraint::{Constraint,Relation};
use crate::expr::{AffineExpr,QuadExpr};
use crate::variable::Variable;

/// Negligibility tolerance. A merged coefficient whose absolute value falls
/// below this is treated as zero for display purposes only, and a coefficient
/// within this tolerance of ±1 is elided.
pub const ZERO_TOL : f64 = 1e-10;

/// Output mode selecting the symbol table and wrapping conventions.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum RenderMode {
    /// Plain text for interactive display. When `ascii` is set, non-ASCII
    /// glyphs degrade to ASCII fallbacks (`<=` for `≤` and so on).
    Plain { ascii : bool },
    /// LaTeX-embeddable math markup. The ASCII fallback flag does not apply;
    /// markup escapes are always used.
    Latex
}

impl RenderMode {
    /// Plain text mode. The ASCII fallback is selected on platforms whose
    /// consoles cannot be relied on to show the unicode glyphs.
    pub fn plain() -> RenderMode { RenderMode::Plain{ ascii : cfg!(windows) } }

    pub fn latex() -> RenderMode { RenderMode::Latex }
}

impl Default for RenderMode {
    fn default() -> RenderMode { RenderMode::plain() }
}

pub(crate) fn is_zero_for_display(c : f64) -> bool { c.abs() < ZERO_TOL }
pub(crate) fn is_one_for_display(c : f64) -> bool { is_zero_for_display(c.abs() - 1.0) }

/// The display token for a variable in the given mode.
///
/// An unnamed variable renders as a placeholder: `noname` in plain mode,
/// `\text{noname}` in markup. In markup mode a bracketed index group in the
/// name becomes a subscript: `x[1]` turns into `x_{1}` by replacing the first
/// `[` and the last `]`. This transformation is best effort and gives the
/// wrong result for names containing nested or multiple bracket pairs; that
/// limitation is inherited, not accidental, so it is kept as is.
pub fn var_str(mode : RenderMode, v : &Variable) -> String {
    match mode {
        RenderMode::Plain{..} =>
            if v.is_named() { v.name().to_string() } else { "noname".to_string() },
        RenderMode::Latex => {
            if ! v.is_named() {
                return "\\text{noname}".to_string();
            }
            let name = v.name();
            match (name.find('['),name.rfind(']')) {
                (Some(i),Some(j)) if i < j => {
                    let mut s = String::with_capacity(name.len()+2);
                    s.push_str(&name[..i]);
                    s.push_str(mode.symbol(Sym::IndOpen));
                    s.push_str(&name[i+1..j]);
                    s.push_str(mode.symbol(Sym::IndClose));
                    s.push_str(&name[j+1..]);
                    s
                },
                _ => name.to_string()
            }
        }
    }
}

// Sign and magnitude prefix shared by the affine and quadratic renderers.
// `first` refers to the first surviving term of the whole rendered string.
fn push_term_prefix(out : & mut String, first : bool, coef : f64) {
    if first {
        if coef < 0.0 {
            out.push('-');
        }
    }
    else if coef < 0.0 {
        out.push_str(" - ");
    }
    else {
        out.push_str(" + ");
    }
    if ! is_one_for_display(coef) {
        out.push_str(format_number(coef.abs()).as_str());
        out.push(' ');
    }
}

/// Render an affine expression.
///
/// Duplicate terms are merged at their first occurrence position and
/// negligible terms are dropped. If nothing survives, the result is the
/// formatted constant when `show_constant` is set and `"0"` otherwise. A
/// non-negligible constant is appended after the terms when `show_constant`
/// is set.
pub fn render_affine(mode : RenderMode, expr : &AffineExpr, show_constant : bool) -> String {
    let mut out = String::new();
    let mut first = true;
    for (v,c) in expr.canonical_terms() {
        if is_zero_for_display(c) {
            continue;
        }
        push_term_prefix(& mut out,first,c);
        out.push_str(var_str(mode,&v).as_str());
        first = false;
    }

    if first {
        return if show_constant { format_number(expr.constant()) } else { "0".to_string() };
    }

    let constant = expr.constant();
    if show_constant && ! is_zero_for_display(constant) {
        out.push_str(if constant < 0.0 { " - " } else { " + " });
        out.push_str(format_number(constant.abs()).as_str());
    }
    out
}

/// Render a quadratic expression.
///
/// Quadratic terms follow the same sign and magnitude conventions as affine
/// ones. A pair with both endpoints equal renders with the squared token
/// (`x²`), any other pair with the times token (`x×y`) in first-encountered
/// tuple order. The embedded affine part is appended with the same
/// sign-joining convention, so a leading `-` on the affine part becomes a
/// ` - ` joint.
pub fn render_quadratic(mode : RenderMode, expr : &QuadExpr) -> String {
    let mut out = String::new();
    let mut first = true;
    for (v,w,c) in expr.canonical_qterms() {
        if is_zero_for_display(c) {
            continue;
        }
        push_term_prefix(& mut out,first,c);
        out.push_str(var_str(mode,&v).as_str());
        if v == w {
            out.push_str(mode.symbol(Sym::Sq));
        }
        else {
            out.push_str(mode.symbol(Sym::Times));
            out.push_str(var_str(mode,&w).as_str());
        }
        first = false;
    }

    let aff = render_affine(mode,expr.affine(),true);
    if first {
        return aff;
    }
    if aff != "0" {
        match aff.strip_prefix('-') {
            Some(rest) => {
                out.push_str(" - ");
                out.push_str(rest);
            },
            None => {
                out.push_str(" + ");
                out.push_str(aff.as_str());
            }
        }
    }
    out
}

/// Render a full constraint: the expression, the relational symbol and the
/// formatted bound(s). A range renders as `lb ≤ expr ≤ ub`. A named
/// constraint gets a `name : ` prefix.
pub fn render_constraint(mode : RenderMode, con : &Constraint) -> String {
    let body = if con.expr().qterms().is_empty() {
        render_affine(mode,con.expr().affine(),true)
    }
    else {
        render_quadratic(mode,con.expr())
    };

    let rendered = match con.relation() {
        Relation::LessThan(b)    => format!("{} {} {}",body,mode.symbol(Sym::Leq),format_number(b)),
        Relation::GreaterThan(b) => format!("{} {} {}",body,mode.symbol(Sym::Geq),format_number(b)),
        Relation::EqualTo(b)     => format!("{} {} {}",body,mode.symbol(Sym::Eq),format_number(b)),
        Relation::Range(l,u)     =>
            format!("{} {} {} {} {}",
                    format_number(l),mode.symbol(Sym::Leq),
                    body,
                    mode.symbol(Sym::Leq),format_number(u))
    };

    match con.name() {
        Some(name) if ! name.is_empty() => format!("{} : {}",name,rendered),
        _ => rendered
    }
}

/// Wrap a rendered string for embedding into a larger document. Markup output
/// is wrapped in `$$ ... $$` unless the caller indicates the context already
/// provides math mode; plain output is returned unchanged.
pub fn math_string(mode : RenderMode, body : &str, already_math_mode : bool) -> String {
    match mode {
        RenderMode::Latex if ! already_math_mode => format!("$$ {} $$",body),
        _ => body.to_string()
    }
}
