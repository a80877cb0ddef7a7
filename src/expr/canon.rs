//! Term canonicalization.
//!
//! Expressions are built incrementally, so their term lists may mention the
//! same variable (or variable pair) several times. Canonicalization merges
//! those duplicates by summation while keeping every distinct key at the
//! position of its first occurrence. Distinct keys are never reordered; a
//! user who wrote `y + x` gets `y + x` back, not `x + y`.
//!
//! Coefficients are summed in input order. Floating point summation is not
//! associative, so reordering the input may change the merged coefficient in
//! the last bits; callers must not rely on bit-exact equality across
//! reorderings.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::variable::Variable;

/// Merge duplicate variables in a linear term list.
///
/// Returns one entry per distinct variable, at its first occurrence position,
/// with the coefficients of all its occurrences summed. The output is never
/// longer than the input. Zero and near-zero merged coefficients are kept;
/// dropping negligible terms is the renderer's job.
pub fn canonical_linear(terms : &[(Variable,f64)]) -> Vec<(Variable,f64)> {
    let mut out : Vec<(Variable,f64)> = Vec::with_capacity(terms.len());
    let mut pos : HashMap<u64,usize> = HashMap::with_capacity(terms.len());
    for (v,c) in terms.iter() {
        match pos.entry(v.id) {
            Entry::Occupied(e) => out[*e.get()].1 += c,
            Entry::Vacant(e) => {
                e.insert(out.len());
                out.push((v.clone(),*c));
            }
        }
    }
    out
}

/// Merge duplicate variable pairs in a quadratic term list.
///
/// The merge key is the unordered pair, so `(x,y)` and `(y,x)` land in the
/// same bucket. The ordered tuple that was encountered first is the one kept
/// for display; `x·y` and `y·x` denote the same coefficient but render with
/// their factors in different order.
pub fn canonical_quadratic(terms : &[(Variable,Variable,f64)]) -> Vec<(Variable,Variable,f64)> {
    let mut out : Vec<(Variable,Variable,f64)> = Vec::with_capacity(terms.len());
    let mut pos : HashMap<(u64,u64),usize> = HashMap::with_capacity(terms.len());
    for (v,w,c) in terms.iter() {
        let key = if v.id <= w.id { (v.id,w.id) } else { (w.id,v.id) };
        match pos.entry(key) {
            Entry::Occupied(e) => out[*e.get()].2 += c,
            Entry::Vacant(e) => {
                e.insert(out.len());
                out.push((v.clone(),w.clone(),*c));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(id : u64, name : &str) -> Variable { Variable::named(id,name) }

    #[test]
    fn linear_merge_keeps_first_occurrence_order() {
        let x = var(1,"x");
        let y = var(2,"y");
        let z = var(3,"z");
        let terms = vec![(y.clone(),1.0),(x.clone(),2.0),(y.clone(),3.0),(z.clone(),1.0),(x.clone(),-2.0)];
        let canon = canonical_linear(&terms);
        assert_eq!(canon.len(),3);
        assert_eq!(canon[0].0,y); assert_eq!(canon[0].1,4.0);
        assert_eq!(canon[1].0,x); assert_eq!(canon[1].1,0.0);
        assert_eq!(canon[2].0,z); assert_eq!(canon[2].1,1.0);
    }

    #[test]
    fn quadratic_unordered_key_first_tuple_display() {
        let x = var(1,"x");
        let y = var(2,"y");
        let terms = vec![(x.clone(),y.clone(),1.0),(y.clone(),x.clone(),2.0)];
        let canon = canonical_quadratic(&terms);
        assert_eq!(canon.len(),1);
        // first-encountered tuple order is (x,y)
        assert_eq!(canon[0].0,x);
        assert_eq!(canon[0].1,y);
        assert_eq!(canon[0].2,3.0);
    }

    #[test]
    fn square_terms_merge() {
        let x = var(1,"x");
        let terms = vec![(x.clone(),x.clone(),1.0),(x.clone(),x.clone(),0.5)];
        let canon = canonical_quadratic(&terms);
        assert_eq!(canon.len(),1);
        assert_eq!(canon[0].2,1.5);
    }
}
