/*!
## Rust Machine Module

This Rust module is a code generator and stack machine for formulas.

*/

pub type Address = usize;

/// Bound of the operand stack during evaluation.
pub const STACK_SIZE: usize = 50;

/// Default ceiling of the constant pool of one program.
pub const MAX_CONSTANTS: usize = 100;

mod codegen;
mod compile;
mod formula;
mod function;
mod link;
mod opcode;
mod operation;
mod program;
mod runtime;
mod stack;

pub use codegen::codegen;
pub use compile::Compiler;
pub use formula::Formula;
pub use function::{Extended, Function};
pub use link::Link;
pub use opcode::Opcode;
pub use operation::Operation;
pub use program::{Evaluation, Program};
pub use runtime::Runtime;
pub use stack::Stack;

#[cfg(test)]
mod tests;
