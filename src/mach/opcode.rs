use super::{Address, Extended, Function};

/// ## Virtual machine instruction set
///
/// The formula virtual machine has no registers.
/// Every operation is performed on the stack.
///
/// For example: `3*x+1` compiles to `[Numeric, Var(0), Mul, Numeric, Add]`
/// with the constant pool `[3, 1]`.
///
/// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>

#[derive(Clone, Copy, PartialEq)]
pub enum Opcode {
    // *** Stack manipulation
    /// Push the next value of the constant pool. The pool is consumed in
    /// order, including the values of branches that are skipped.
    Numeric,
    Pi,
    E,
    /// Push the value of a variable by its index in the variable table.
    Var(Address),
    /// Push the value a reference computed earlier in this evaluation.
    Ref(Address),

    // *** Branch control
    /// Pop stack. When zero, skip the next Address opcodes.
    If(Address),
    /// Skip the next Address opcodes.
    Jump(Address),
    /// Landing point at the end of every `if`.
    EndIf,

    // *** Expression operations
    Neg,
    Pow,
    Mul,
    Div,
    Add,
    Sub,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,

    // *** Built-in functions
    Fn(Function),
    Fn2(Extended),
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Numeric => write!(f, "NUMERIC"),
            Pi => write!(f, "PI"),
            E => write!(f, "E"),
            Var(a) => write!(f, "VAR({})", a),
            Ref(a) => write!(f, "REF({})", a),

            If(a) => write!(f, "IF({})", a),
            Jump(a) => write!(f, "JUMP({})", a),
            EndIf => write!(f, "ENDIF"),

            Neg => write!(f, "NEG"),
            Pow => write!(f, "POW"),
            Mul => write!(f, "MUL"),
            Div => write!(f, "DIV"),
            Add => write!(f, "ADD"),
            Sub => write!(f, "SUB"),
            Eq => write!(f, "EQ"),
            NotEq => write!(f, "NOTEQ"),
            Lt => write!(f, "LT"),
            LtEq => write!(f, "LTEQ"),
            Gt => write!(f, "GT"),
            GtEq => write!(f, "GTEQ"),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),

            Fn(func) => write!(f, "{}", func.name().to_ascii_uppercase()),
            Fn2(func) => write!(f, "{}", func.name().to_ascii_uppercase()),
        }
    }
}

/*
VM design notes.

// if(x<1, 2, y)
Var(0)
Numeric       // 1
Lt
If(2)         // false: skip the then-branch and its Jump
Numeric       // 2
Jump(1)       // skip the else-branch
Var(1)
EndIf

When If or Jump skip forward, every Numeric passed over still moves the
constant cursor so that later Numeric opcodes read the right constant.

// a:x*2; a+1
reference a:  Var(0) Numeric Mul          constants [2]
main:         Ref(0) Numeric Add          constants [1]
References run first, in order, and their results are what Ref pushes.
*/
