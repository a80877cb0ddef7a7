//! Module for the [Variable] object and related implementations.

use std::fmt::Debug;
use std::hash::{Hash,Hasher};

/// A scalar decision variable.
///
/// A [Variable] is an opaque identifier paired with a display name that was
/// resolved by whatever system created the variable. It contains no reference
/// to that system, so in a context of multiple models it is not possible to
/// verify which model it originated from.
///
/// Variables compare equal by identifier only, never by name; two unnamed
/// variables with different identifiers are distinct terms in an expression.
/// An empty name means the variable is unnamed, and the renderer will show a
/// placeholder for it.
#[derive(Clone)]
pub struct Variable {
    pub(crate) id   : u64,
    pub(crate) name : String
}

impl Variable {
    /// Create an unnamed variable with the given identifier.
    pub fn new(id : u64) -> Variable {
        Variable{ id, name : String::new() }
    }

    /// Create a variable with the given identifier and display name.
    pub fn named(id : u64, name : &str) -> Variable {
        Variable{ id, name : name.to_string() }
    }

    pub fn id(&self) -> u64 { self.id }

    /// The resolved display name. Empty if the variable is unnamed.
    pub fn name(&self) -> &str { self.name.as_str() }

    pub fn is_named(&self) -> bool { ! self.name.is_empty() }
}

impl PartialEq for Variable {
    fn eq(&self, other : &Variable) -> bool { self.id == other.id }
}
impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H : Hasher>(&self, state : & mut H) { self.id.hash(state) }
}

impl Debug for Variable {
    fn fmt(&self, f : & mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Variable{id:")?;
        self.id.fmt(f)?;
        if ! self.name.is_empty() {
            f.write_str(", name:")?;
            self.name.fmt(f)?;
        }
        f.write_str("}")
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f : & mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(crate::render::var_str(crate::render::RenderMode::plain(),self).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_not_name() {
        let x  = Variable::named(1,"x");
        let x2 = Variable::named(1,"also_x");
        let y  = Variable::named(2,"x");
        assert_eq!(x,x2);
        assert_ne!(x,y);

        let u = Variable::new(3);
        let w = Variable::new(4);
        assert_ne!(u,w);
    }
}
