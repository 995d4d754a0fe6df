use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod eval_test;

fn formula(s: &str, vars: &[&str]) -> Formula {
    match Compiler::new(vars).compile(s) {
        Ok(formula) => formula,
        Err(e) => panic!("{}\n{}", s, e.report()),
    }
}

fn eval(s: &str, vars: &[&str], values: &[f64]) -> Evaluation {
    let mut rng = StdRng::seed_from_u64(0);
    match formula(s, vars).run(values, &mut rng) {
        Ok(eval) => eval,
        Err(e) => panic!("{} : {}", s, e),
    }
}

fn value(s: &str) -> f64 {
    eval(s, &[], &[]).value
}
