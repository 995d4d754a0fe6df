use super::{Opcode, Program};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Code fragment
///
/// Opcodes together with the constants their `Numeric` opcodes consume.
/// Fragments are built bottom-up and appended in order, so the constant
/// pool of the finished program lines up with its `Numeric` opcodes.

#[derive(Debug, Default, Clone)]
pub struct Link {
    ops: Vec<Opcode>,
    constants: Vec<f64>,
}

impl Link {
    pub fn push(&mut self, op: Opcode) {
        self.ops.push(op)
    }

    pub fn push_number(&mut self, val: f64) {
        self.ops.push(Opcode::Numeric);
        self.constants.push(val);
    }

    pub fn append(&mut self, mut other: Link) {
        self.ops.append(&mut other.ops);
        self.constants.append(&mut other.constants);
    }

    /// Expects the predicate to have been appended already.
    pub fn push_if(&mut self, then_link: Link, else_link: Link) {
        self.push(Opcode::If(then_link.len() + 1));
        self.append(then_link);
        self.push(Opcode::Jump(else_link.len()));
        self.append(else_link);
        self.push(Opcode::EndIf);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn into_program(self) -> Result<Program> {
        Program::new(self.ops, self.constants)
    }
}
