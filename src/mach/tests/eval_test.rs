use super::*;
use crate::lang::ErrorCode;

#[test]
fn test_precedence() {
    assert_eq!(value("2+3*4"), 14.0);
    assert_eq!(value("2^3^2"), 512.0);
    assert_eq!(value("-2^2"), -4.0);
    assert_eq!(value("(2+3)*4"), 20.0);
    assert_eq!(value("10-4-3"), 3.0);
    assert_eq!(value("2*-3"), -6.0);
    assert_eq!(value("--3"), 3.0);
}

#[test]
fn test_variables() {
    let f = formula("x-y", &["x", "y"]);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(f.run(&[5.0, 2.0], &mut rng).unwrap().value, 3.0);
    assert_eq!(f.run(&[1.0, 4.0], &mut rng).unwrap().value, -3.0);
    let e = f.run(&[1.0], &mut rng).unwrap_err();
    assert_eq!(e.code(), ErrorCode::WrongValueCount);
}

#[test]
fn test_division_by_zero() {
    let e = eval("1/x", &["x"], &[0.0]);
    assert!(e.value.is_finite());
    assert!(e.value > 1e15);
    assert!(!e.was_nan);
}

#[test]
fn test_booleans() {
    assert_eq!(value("1<2"), 1.0);
    assert_eq!(value("1<2 & 2<1"), 0.0);
    assert_eq!(value("1<2 | 2<1"), 1.0);
    assert_eq!(value("3<>3"), 0.0);
    assert_eq!(value("3>=3"), 1.0);
}

#[test]
fn test_if_constant_alignment() {
    assert_eq!(value("if(1<2, 10, 99)"), 10.0);
    assert_eq!(value("if(1>2, 3.5, if(4<5, 6.25, 7))"), 6.25);
    assert_eq!(value("if(1>2, 1+2+3, 4)+5"), 9.0);
    assert_eq!(value("if(1<2, 1, 2+3)+5"), 6.0);
    assert_eq!(value("if(0, 1, 2)"), 2.0);
}

#[test]
fn test_if_program_shape() {
    let f = formula("if(x<1, 2, x)", &["x"]);
    use Opcode::*;
    assert_eq!(
        f.program().code(),
        &[Var(0), Numeric, Lt, If(2), Numeric, Jump(1), Var(0), EndIf]
    );
}

#[test]
fn test_functions() {
    use std::f64::consts::{E, PI};
    let close = |s: &str, want: f64| {
        let got = value(s);
        assert!((got - want).abs() < 1e-9, "{} = {}, want {}", s, got, want);
    };
    close("atan2(1,1)", PI / 4.0);
    close("min(3,5)", 3.0);
    close("max(3,5)", 5.0);
    close("mod(7,3)", 1.0);
    close("sin(pi/2)", 1.0);
    close("cos(0)", 1.0);
    close("tan(pi/4)", 1.0);
    close("asin(1)", PI / 2.0);
    close("acos(1)", 0.0);
    close("atan(1)", PI / 4.0);
    close("sinh(0)", 0.0);
    close("cosh(0)", 1.0);
    close("tanh(0)", 0.0);
    close("asinh(0)", 0.0);
    close("acosh(1)", 0.0);
    close("atanh(0)", 0.0);
    close("ln(e)", 1.0);
    close("log(1000)", 3.0);
    close("abs(-2)", 2.0);
    close("int(-2.7)", -3.0);
    close("int(2.7)", 3.0);
    close("frac(2.25)", 0.25);
    close("ceil(1.2)", 2.0);
    close("floor(1.8)", 1.0);
    close("round(1.5)", 2.0);
    close("exp(1)", E);
    close("sqr(3)", 9.0);
    close("sqrt(16)", 4.0);
    close("sign(-3)", -1.0);
    close("step(-3)", 0.0);
    close("step(3)", 1.0);
}

#[test]
fn test_random_is_seeded() {
    let f = formula("random(10)", &[]);
    let a = f.run(&[], &mut StdRng::seed_from_u64(42)).unwrap();
    let b = f.run(&[], &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a.value.to_bits(), b.value.to_bits());
    assert!(a.value >= 0.0 && a.value < 10.0);
}

#[test]
fn test_nan() {
    let e = eval("sqrt(x)+1", &["x"], &[-1.0]);
    assert_eq!(e.value, 0.0);
    assert!(e.was_nan);
    let e = eval("sqrt(x)+1", &["x"], &[4.0]);
    assert_eq!(e.value, 3.0);
    assert!(!e.was_nan);
}

#[test]
fn test_stack_overflow() {
    let mut s = String::new();
    for _ in 0..STACK_SIZE {
        s.push_str("x+(");
    }
    s.push('x');
    for _ in 0..STACK_SIZE {
        s.push(')');
    }
    let f = formula(&s, &["x"]);
    let e = f.evaluate(&[1.0]).unwrap_err();
    assert_eq!(e.code(), ErrorCode::StackOverflow);
    assert!(!e.is_compile_error());
}

#[test]
fn test_damaged_program() {
    assert_eq!(
        Program::new(vec![Opcode::Numeric], vec![]).unwrap_err().code(),
        ErrorCode::CodeDamaged
    );
    assert_eq!(
        Program::new(vec![Opcode::Jump(2), Opcode::Pi], vec![])
            .unwrap_err()
            .code(),
        ErrorCode::CodeDamaged
    );
    let program = Program::new(vec![Opcode::Pi, Opcode::E], vec![]).unwrap();
    let e = program
        .execute(&[], &[], &mut StdRng::seed_from_u64(0))
        .unwrap_err();
    assert_eq!(e.code(), ErrorCode::CodeDamaged);
}

#[test]
fn test_listing() {
    let f = formula("2*x", &["x"]);
    assert_eq!(f.to_string(), "0000 NUMERIC 2\n0001 VAR(0)\n0002 MUL\n");
}

#[test]
fn test_send_sync() {
    fn is_send_sync<T: Send + Sync>() {}
    is_send_sync::<Formula>();
    is_send_sync::<Program>();
}
