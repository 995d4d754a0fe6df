//! # Formula
//!
//! A compiler and stack machine for formulas typed by users of
//! simulation tools: `2*sin(x)+1`, `if(t<10, t, 10)`, `r:sqrt(x*x+y*y); r^2`.
//!
//! Source text is split into segments, parsed into an [`lang::ast`],
//! and generated into a flat [`mach::Program`] of opcodes with a constant
//! pool. A compiled [`mach::Formula`] is immutable and can be evaluated
//! from many threads at once.
//!
//! ```
//! use formula::mach::Formula;
//! let f = Formula::compile("x^2 + y", &["x", "y"]).unwrap();
//! assert_eq!(f.eval2(3.0, 1.0).unwrap().value, 10.0);
//! ```
//!
//! Compile errors carry a one-based position into the source.
//!
//! ```
//! use formula::mach::Formula;
//! let error = Formula::compile("1+*2", &[] as &[&str]).unwrap_err();
//! assert_eq!(error.position(), 3);
//! assert_eq!(
//!     error.report(),
//!     "Error in function string: 1+*2\nError: operator expected\nPosition: 3"
//! );
//! ```
//!
//! The `formula` executable is an interactive calculator built on this
//! library.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/grammar.rs"]
#[allow(non_snake_case)]
pub mod __Grammar;

#[path = "doc/functions.rs"]
#[allow(non_snake_case)]
pub mod ___Functions;

pub mod lang;
pub mod mach;
