//! # Formula
//!
//! Interactive calculator for simulation formulas.
//!

mod term;

fn main() {
    term::main()
}
