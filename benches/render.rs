extern crate criterion;

use criterion::{criterion_group,criterion_main,Criterion};

use optexpr::*;

// Rendering benchmarks: canonicalization dominates for expressions with many
// duplicate terms, string assembly for expressions without.

fn make_affine(nvars : usize, nterms : usize) -> AffineExpr {
    let terms : Vec<(Variable,f64)> =
        (0..nterms)
            .map(|i| (Variable::named((i % nvars) as u64,format!("x[{}]",i % nvars).as_str()),
                      ((i % 7) as f64) - 3.0))
            .collect();
    AffineExpr::new(terms,1.25)
}

fn make_quad(nvars : usize, nterms : usize) -> QuadExpr {
    let qterms : Vec<(Variable,Variable,f64)> =
        (0..nterms)
            .map(|i| (Variable::named((i % nvars) as u64,format!("x[{}]",i % nvars).as_str()),
                      Variable::named(((i*3+1) % nvars) as u64,format!("x[{}]",(i*3+1) % nvars).as_str()),
                      ((i % 5) as f64) - 2.0))
            .collect();
    QuadExpr::new(qterms,make_affine(nvars,nterms))
}

fn bench_affine(c : & mut Criterion, nvars : usize, nterms : usize) {
    let e = make_affine(nvars,nterms);
    c.bench_function(format!("render-affine-{}-{}",nvars,nterms).as_str(),
                     |b| b.iter(|| render_affine(RenderMode::Plain{ascii:false},&e,true)));
}

fn bench_quad(c : & mut Criterion, nvars : usize, nterms : usize) {
    let e = make_quad(nvars,nterms);
    c.bench_function(format!("render-quad-{}-{}",nvars,nterms).as_str(),
                     |b| b.iter(|| render_quadratic(RenderMode::Latex,&e)));
}

fn bench_constraint(c : & mut Criterion, nvars : usize, nterms : usize) {
    let con = constraint(Some("c"),make_affine(nvars,nterms),in_range(0.0,100.0));
    c.bench_function(format!("render-constraint-{}-{}",nvars,nterms).as_str(),
                     |b| b.iter(|| render_constraint(RenderMode::Plain{ascii:false},&con)));
}

pub fn bench_group(c : & mut Criterion) {
    bench_affine(c,10,1000);
    bench_affine(c,1000,1000);
    bench_quad(c,10,1000);
    bench_quad(c,100,1000);
    bench_constraint(c,100,1000);
}

criterion_group!(benches,bench_group);
criterion_main!(benches);
