mod common;
use common::*;
use formula::mach::Runtime;

#[test]
fn test_precedence() {
    assert_eq!(value("2+3*4"), 14.0);
    assert_eq!(value("(2+3)*4"), 20.0);
    assert_eq!(value("2^3^2"), 512.0);
    assert_eq!(value("-2^2"), -4.0);
    assert_eq!(value("(-2)^2"), 4.0);
    assert_eq!(value("2^-1"), 0.5);
    assert_eq!(value("12/3/2"), 2.0);
    assert_eq!(value("1+2<4"), 1.0);
}

#[test]
fn test_numbers() {
    assert_eq!(value(".5+0.25"), 0.75);
    assert_eq!(value("007"), 7.0);
    assert_eq!(value("1e3+2.5E-1"), 1000.25);
    assert_eq!(value("pi"), std::f64::consts::PI);
    assert_eq!(value("e"), std::f64::consts::E);
}

#[test]
fn test_variables() {
    let mut r = Runtime::with_variables(&["x", "y"]);
    assert_eq!(exec(&mut r, "x+y", &[1.5, 2.0]), "3.5");
    assert_eq!(eval(&mut r, &[-4.0, 1.0]), "-3");
    assert_eq!(eval(&mut r, &[1.5, 2.0]), "3.5");
    assert_eq!(eval(&mut r, &[1.0]), "WRONG NUMBER OF VARIABLE VALUES");
    assert_eq!(r.eval2(10.0, 20.0).unwrap(), 30.0);
}

#[test]
fn test_case_sensitive_names() {
    let mut r = Runtime::with_variables(&["x"]);
    assert_eq!(exec(&mut r, "X", &[1.0]), "UNKNOWN IDENTIFIER AT 1");
    assert_eq!(exec(&mut r, "SIN(x)", &[1.0]), "UNKNOWN IDENTIFIER AT 1");
}

#[test]
fn test_division_safety() {
    let mut r = Runtime::with_variables(&["x"]);
    r.define("1/x").unwrap();
    let val = r.eval1(0.0).unwrap();
    assert!(val.is_finite());
    assert!(val > 1e15);
    assert!(!r.was_nan());
}

#[test]
fn test_nan_flag() {
    let mut r = Runtime::with_variables(&["x"]);
    assert_eq!(exec(&mut r, "ln(x)*0+1", &[-1.0]), "0 NAN");
    assert_eq!(eval(&mut r, &[1.0]), "1");
    assert!(!r.was_nan());
}

#[test]
fn test_three_variables() {
    let mut r = Runtime::with_variables(&["x", "y", "z"]);
    r.define("x*100+y*10+z").unwrap();
    assert_eq!(r.eval3(1.0, 2.0, 3.0).unwrap(), 123.0);
}
