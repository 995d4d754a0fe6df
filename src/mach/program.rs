use super::operation::is_true;
use super::{Opcode, Operation, Stack, STACK_SIZE};
use crate::error;
use crate::lang::Error;
use rand::RngCore;

type Result<T> = std::result::Result<T, Error>;

/// ## Compiled program
///
/// An opcode stream and its constant pool. A `Program` is validated
/// when it is built and never changes afterwards. All scratch state of
/// an evaluation lives in `execute`, so one program may be evaluated
/// from any number of threads at once.

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    code: Vec<Opcode>,
    constants: Vec<f64>,
}

/// Result of one evaluation. A NaN anywhere on the operand stack
/// makes `value` zero and sets `was_nan`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub was_nan: bool,
}

impl Program {
    pub fn new(code: Vec<Opcode>, constants: Vec<f64>) -> Result<Program> {
        let numerics = code.iter().filter(|op| **op == Opcode::Numeric).count();
        if numerics != constants.len() {
            return Err(error!(CodeDamaged; "CONSTANT POOL MISMATCH"));
        }
        for (addr, op) in code.iter().enumerate() {
            match op {
                Opcode::If(len) | Opcode::Jump(len) if addr + 1 + len > code.len() => {
                    return Err(error!(CodeDamaged; "JUMP OUT OF RANGE"));
                }
                _ => {}
            }
        }
        Ok(Program { code, constants })
    }

    pub fn code(&self) -> &[Opcode] {
        &self.code
    }

    pub fn constants(&self) -> &[f64] {
        &self.constants
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Run the program. `refs` holds the values of the references
    /// computed earlier in the same evaluation.
    pub fn execute(&self, vars: &[f64], refs: &[f64], rng: &mut dyn RngCore) -> Result<Evaluation> {
        let mut stack: Stack<f64> = Stack::new(STACK_SIZE, "OPERAND STACK FULL");
        let mut pc: usize = 0;
        let mut cursor: usize = 0;
        let mut was_nan = false;
        while let Some(op) = self.code.get(pc) {
            pc += 1;
            let val = match *op {
                Opcode::Numeric => {
                    let val = self.constant(cursor)?;
                    cursor += 1;
                    val
                }
                Opcode::Pi => std::f64::consts::PI,
                Opcode::E => std::f64::consts::E,
                Opcode::Var(addr) => match vars.get(addr) {
                    Some(val) => *val,
                    None => return Err(error!(CodeDamaged; "VARIABLE OUT OF RANGE")),
                },
                Opcode::Ref(addr) => match refs.get(addr) {
                    Some(val) => *val,
                    None => return Err(error!(CodeDamaged; "REFERENCE OUT OF RANGE")),
                },
                Opcode::If(len) => {
                    if !is_true(stack.pop()?) {
                        self.skip(&mut pc, &mut cursor, len)?;
                    }
                    continue;
                }
                Opcode::Jump(len) => {
                    self.skip(&mut pc, &mut cursor, len)?;
                    continue;
                }
                Opcode::EndIf => continue,
                Opcode::Neg => Operation::negate(stack.pop()?),
                Opcode::Pow => binary(&mut stack, Operation::power)?,
                Opcode::Mul => binary(&mut stack, Operation::multiply)?,
                Opcode::Div => binary(&mut stack, Operation::divide)?,
                Opcode::Add => binary(&mut stack, Operation::sum)?,
                Opcode::Sub => binary(&mut stack, Operation::subtract)?,
                Opcode::Eq => binary(&mut stack, Operation::equal)?,
                Opcode::NotEq => binary(&mut stack, Operation::not_equal)?,
                Opcode::Lt => binary(&mut stack, Operation::less)?,
                Opcode::LtEq => binary(&mut stack, Operation::less_equal)?,
                Opcode::Gt => binary(&mut stack, Operation::greater)?,
                Opcode::GtEq => binary(&mut stack, Operation::greater_equal)?,
                Opcode::And => binary(&mut stack, Operation::and)?,
                Opcode::Or => binary(&mut stack, Operation::or)?,
                Opcode::Fn(func) => func.call(stack.pop()?, rng),
                Opcode::Fn2(func) => {
                    let (a, b) = stack.pop_2()?;
                    func.call(a, b)
                }
            };
            if val.is_nan() {
                was_nan = true;
            }
            stack.push(val)?;
        }
        let value = stack.pop()?;
        if !stack.is_empty() {
            return Err(error!(CodeDamaged; "VALUES LEFT ON STACK"));
        }
        if was_nan {
            return Ok(Evaluation {
                value: 0.0,
                was_nan,
            });
        }
        Ok(Evaluation { value, was_nan })
    }

    fn constant(&self, cursor: usize) -> Result<f64> {
        match self.constants.get(cursor) {
            Some(val) => Ok(*val),
            None => Err(error!(CodeDamaged; "CONSTANT OUT OF RANGE")),
        }
    }

    // Skipped Numeric opcodes still consume their constants.
    fn skip(&self, pc: &mut usize, cursor: &mut usize, len: usize) -> Result<()> {
        match self.code.get(*pc..*pc + len) {
            Some(skipped) => {
                *cursor += skipped.iter().filter(|op| **op == Opcode::Numeric).count();
                *pc += len;
                Ok(())
            }
            None => Err(error!(CodeDamaged; "JUMP OUT OF RANGE")),
        }
    }
}

fn binary(stack: &mut Stack<f64>, op: fn(f64, f64) -> f64) -> Result<f64> {
    let (lhs, rhs) = stack.pop_2()?;
    Ok(op(lhs, rhs))
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut constants = self.constants.iter();
        for (addr, op) in self.code.iter().enumerate() {
            match op {
                Opcode::Numeric => match constants.next() {
                    Some(val) => writeln!(f, "{:04} {} {}", addr, op, val)?,
                    None => writeln!(f, "{:04} {} ?", addr, op)?,
                },
                _ => writeln!(f, "{:04} {}", addr, op)?,
            }
        }
        Ok(())
    }
}
