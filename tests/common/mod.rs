#![allow(dead_code)]
use formula::mach::Runtime;

/// Define `source` and evaluate it, rendering the value or the error.
pub fn exec(runtime: &mut Runtime, source: &str, values: &[f64]) -> String {
    if let Err(error) = runtime.define(source) {
        return error.to_string();
    }
    eval(runtime, values)
}

pub fn eval(runtime: &mut Runtime, values: &[f64]) -> String {
    match runtime.evaluate(values) {
        Ok(val) if runtime.was_nan() => format!("{} NAN", val),
        Ok(val) => format!("{}", val),
        Err(error) => error.to_string(),
    }
}

pub fn value(source: &str) -> f64 {
    let mut r = Runtime::default();
    r.seed(0);
    if let Err(error) = r.define(source) {
        panic!("{}", error.report());
    }
    match r.evaluate(&[]) {
        Ok(val) => val,
        Err(error) => panic!("{} : {}", source, error),
    }
}

pub fn assert_close(source: &str, want: f64) {
    let got = value(source);
    assert!(
        (got - want).abs() < 1e-9,
        "{} = {}, want {}",
        source,
        got,
        want
    );
}
