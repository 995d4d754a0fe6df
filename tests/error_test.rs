mod common;
use common::*;
use formula::lang::ErrorCode;
use formula::mach::{Compiler, Runtime};

#[test]
fn test_paren_not_match() {
    let e = Compiler::default().compile("(1+2").unwrap_err();
    assert_eq!(e.code(), ErrorCode::ParenNotMatch);
    assert_eq!(
        e.report(),
        "Error in function string: (1+2\nError: parentheses do not match\nPosition: 5"
    );
    let e = Compiler::default().compile("1+2)").unwrap_err();
    assert_eq!(e.code(), ErrorCode::ParenNotMatch);
    assert_eq!(e.position(), 4);
}

#[test]
fn test_operator_expected() {
    let e = Compiler::default().compile("1+*2").unwrap_err();
    assert_eq!(e.code(), ErrorCode::OperatorExpected);
    assert_eq!(e.position(), 3);
    assert_eq!(e.source_text(), "1+*2");
}

#[test]
fn test_messages() {
    let mut r = Runtime::with_variables(&["x"]);
    assert_eq!(exec(&mut r, "", &[1.0]), "EXPRESSION EXPECTED AT 1");
    assert_eq!(exec(&mut r, "x y", &[1.0]), "OPERATOR EXPECTED AT 3");
    assert_eq!(exec(&mut r, "1 # 2", &[1.0]), "SYNTAX ERROR AT 3");
    assert_eq!(exec(&mut r, "1<x<3", &[1.0]), "INVALID OPERATOR AT 4; ONE COMPARISON PER TERM");
    assert_eq!(exec(&mut r, "1 & x", &[1.0]), "INVALID OPERAND AT 1");
    assert_eq!(exec(&mut r, "-(x<1)", &[1.0]), "INVALID OPERAND AT 3");
    assert_eq!(exec(&mut r, "a+1;x", &[1.0]), "MISSING REFERENCE DEFINITION SEPARATOR AT 1");
    assert_eq!(exec(&mut r, " :1;x", &[1.0]), "REFERENCE NAME EXPECTED AT 2");
}

#[test]
fn test_deep_nesting() {
    let mut r = Runtime::with_variables(&["x"]);
    let deep = format!("{}x{}", "(".repeat(20000), ")".repeat(20000));
    assert_eq!(
        exec(&mut r, &deep, &[1.0]),
        "STACK OVERFLOW AT 201; EXPRESSION TOO COMPLEX"
    );
    assert!(!r.is_compiled());
    let nested = format!("{}x{}", "if(x,".repeat(150), ",x)".repeat(150));
    assert_eq!(exec(&mut r, &nested, &[4.0]), "4");
}

#[test]
fn test_uncompiled() {
    let mut r = Runtime::with_variables(&["x"]);
    assert!(!r.is_compiled());
    assert_eq!(eval(&mut r, &[1.0]), "UNCOMPILED FUNCTION");
    r.define("x+1").unwrap();
    assert_eq!(eval(&mut r, &[1.0]), "2");
    assert!(r.define("x+").is_err());
    assert!(!r.is_compiled());
    assert_eq!(r.error().map(|e| e.code()), Some(ErrorCode::ExpressionExpected));
    assert_eq!(eval(&mut r, &[1.0]), "UNCOMPILED FUNCTION");
    r.define("x*3").unwrap();
    assert!(r.error().is_none());
    assert_eq!(eval(&mut r, &[2.0]), "6");
}

#[test]
fn test_too_many_constants() {
    let source = vec!["1"; 101].join("+");
    let e = Compiler::default().compile(&source).unwrap_err();
    assert_eq!(e.code(), ErrorCode::TooManyConstants);
    assert_eq!(e.position(), 201);
    assert!(Compiler::default().max_constants(200).compile(&source).is_ok());
}

#[test]
fn test_stack_overflow() {
    let source = format!("{}1{}", "1+(".repeat(60), ")".repeat(60));
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, &source, &[]), "STACK OVERFLOW; OPERAND STACK FULL");
    let shallow = format!("{}1{}", "1+(".repeat(40), ")".repeat(40));
    assert_eq!(exec(&mut r, &shallow, &[]), "41");
}
