//! Fixed symbol tables mapping abstract rendering tokens to mode-specific
//! literals.
//!
//! The token set is closed and every mode populates all of it, so lookup has
//! no error path. Plain mode comes in two flavors selected by the ASCII
//! fallback flag on [RenderMode::Plain]: the unicode table for terminals that
//! can show the glyphs, and an ASCII table for those that cannot. LaTeX mode
//! always uses markup escapes and ignores the flag.

use super::RenderMode;

/// Abstract rendering token.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum Sym {
    /// Less-than-or-equal relation
    Leq,
    /// Greater-than-or-equal relation
    Geq,
    /// Equality relation
    Eq,
    /// Multiplication between two distinct variables
    Times,
    /// Squaring of a single variable
    Sq,
    /// Opening of an index group in a variable name
    IndOpen,
    /// Closing of an index group in a variable name
    IndClose,
    /// Universal quantifier
    ForAll,
    /// Set membership
    In,
    /// Opening set brace
    OpenSet,
    /// Closing set brace
    CloseSet,
    /// Ellipsis in enumerated sets
    Dots,
    /// Set union
    Union,
    /// Infinity
    Infty,
    /// Opening bracket of an interval
    OpenRng,
    /// Closing bracket of an interval
    CloseRng,
    /// Integrality marker
    Integer,
    /// Positive semidefiniteness marker
    Succeq0,
    /// Norm delimiter
    Norm,
    /// Subscript two, as in the 2-norm
    Sub2
}

fn plain(sym : Sym) -> &'static str {
    match sym {
        Sym::Leq      => "≤",
        Sym::Geq      => "≥",
        Sym::Eq       => "=",
        Sym::Times    => "×",
        Sym::Sq       => "²",
        Sym::IndOpen  => "[",
        Sym::IndClose => "]",
        Sym::ForAll   => "∀",
        Sym::In       => "∈",
        Sym::OpenSet  => "{",
        Sym::CloseSet => "}",
        Sym::Dots     => "…",
        Sym::Union    => "∪",
        Sym::Infty    => "∞",
        Sym::OpenRng  => "[",
        Sym::CloseRng => "]",
        Sym::Integer  => "integer",
        Sym::Succeq0  => "≽ 0",
        Sym::Norm     => "‖",
        Sym::Sub2     => "₂"
    }
}

fn ascii(sym : Sym) -> &'static str {
    match sym {
        Sym::Leq      => "<=",
        Sym::Geq      => ">=",
        Sym::Eq       => "==",
        Sym::Times    => "*",
        Sym::Sq       => "^2",
        Sym::IndOpen  => "[",
        Sym::IndClose => "]",
        Sym::ForAll   => "for all",
        Sym::In       => "in",
        Sym::OpenSet  => "{",
        Sym::CloseSet => "}",
        Sym::Dots     => "..",
        Sym::Union    => "or",
        Sym::Infty    => "Inf",
        Sym::OpenRng  => "[",
        Sym::CloseRng => "]",
        Sym::Integer  => "integer",
        Sym::Succeq0  => "is semidefinite",
        Sym::Norm     => "||",
        Sym::Sub2     => "_2"
    }
}

fn latex(sym : Sym) -> &'static str {
    match sym {
        Sym::Leq      => "\\leq",
        Sym::Geq      => "\\geq",
        Sym::Eq       => "=",
        // spacing is part of the token so that `x \times y` typesets
        Sym::Times    => " \\times ",
        Sym::Sq       => "^2",
        Sym::IndOpen  => "_{",
        Sym::IndClose => "}",
        Sym::ForAll   => "\\forall",
        Sym::In       => "\\in",
        Sym::OpenSet  => "\\{",
        Sym::CloseSet => "\\}",
        Sym::Dots     => "\\dots",
        Sym::Union    => "\\cup",
        Sym::Infty    => "\\infty",
        Sym::OpenRng  => "\\lbrack",
        Sym::CloseRng => "\\rbrack",
        Sym::Integer  => "\\in \\mathbb{Z}",
        Sym::Succeq0  => "\\succeq 0",
        Sym::Norm     => "\\Vert",
        Sym::Sub2     => "_2"
    }
}

impl RenderMode {
    /// Look up the literal string for a token in this mode's symbol table.
    pub fn symbol(self, sym : Sym) -> &'static str {
        match self {
            RenderMode::Plain{ ascii : false } => plain(sym),
            RenderMode::Plain{ ascii : true }  => ascii(sym),
            RenderMode::Latex                  => latex(sym)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_disagree_where_expected() {
        let uni = RenderMode::Plain{ ascii : false };
        let asc = RenderMode::Plain{ ascii : true };
        assert_eq!(uni.symbol(Sym::Leq),"≤");
        assert_eq!(asc.symbol(Sym::Leq),"<=");
        assert_eq!(RenderMode::Latex.symbol(Sym::Leq),"\\leq");
        assert_eq!(uni.symbol(Sym::Times),"×");
        assert_eq!(asc.symbol(Sym::Times),"*");
        assert_eq!(RenderMode::Latex.symbol(Sym::Times)," \\times ");
        // brackets coincide in both plain flavors
        assert_eq!(uni.symbol(Sym::IndOpen),asc.symbol(Sym::IndOpen));
    }
}
