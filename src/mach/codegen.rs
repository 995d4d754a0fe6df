use super::{Function, Link, Opcode, Program, Stack};
use crate::error;
use crate::lang::ast::{self, AcceptVisitor};
use crate::lang::{Column, Error};

type Result<T> = std::result::Result<T, Error>;

/// Generate a program from one parsed segment. Stops at the first error.
pub fn codegen(expr: &ast::Expression, max_constants: usize) -> Result<Program> {
    Visitor::accept(expr, max_constants)
}

struct Visitor {
    gen: Generator,
    error: Option<Error>,
}

impl Visitor {
    fn accept(expr: &ast::Expression, max_constants: usize) -> Result<Program> {
        let mut this = Visitor {
            gen: Generator::new(max_constants),
            error: None,
        };
        expr.accept(&mut this);
        if let Some(error) = this.error {
            return Err(error);
        }
        let (_col, _kind, link) = this.gen.expr.pop()?;
        debug_assert_eq!(0, this.gen.expr.len());
        link.into_program()
    }
}

impl ast::Visitor for Visitor {
    fn visit_expression(&mut self, expression: &ast::Expression) {
        if self.error.is_some() {
            return;
        }
        let mut link = Link::default();
        match self.gen.expression(&mut link, expression) {
            Ok((col, kind)) => {
                if let Some(error) = self.gen.expr.push((col.clone(), kind, link)).err() {
                    self.error = Some(error.in_column(&col));
                }
            }
            Err(e) => self.error = Some(e),
        }
    }
}

/// Result type of a fragment. Relations and `&`/`|` produce booleans.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    Number,
    Boolean,
}

struct Generator {
    expr: Stack<(Column, Kind, Link)>,
    constants: usize,
    max_constants: usize,
}

impl Generator {
    fn new(max_constants: usize) -> Generator {
        Generator {
            expr: Stack::new(1024, "EXPRESSION TOO COMPLEX"),
            constants: 0,
            max_constants,
        }
    }

    fn pop(&mut self, want: Kind) -> Result<(Column, Link)> {
        let (col, kind, link) = self.expr.pop()?;
        check(&col, kind, want)?;
        Ok((col, link))
    }

    // Operands are checked left to right.
    fn pop_2(&mut self, want: Kind) -> Result<((Column, Link), (Column, Link))> {
        let ((col_lhs, kind_lhs, lhs), (col_rhs, kind_rhs, rhs)) = self.expr.pop_2()?;
        check(&col_lhs, kind_lhs, want)?;
        check(&col_rhs, kind_rhs, want)?;
        Ok(((col_lhs, lhs), (col_rhs, rhs)))
    }

    fn expression(&mut self, link: &mut Link, expr: &ast::Expression) -> Result<(Column, Kind)> {
        fn unary_expression(
            this: &mut Generator,
            link: &mut Link,
            op: Opcode,
            col: &Column,
        ) -> Result<(Column, Kind)> {
            let (expr_col, ops) = this.pop(Kind::Number)?;
            link.append(ops);
            link.push(op);
            Ok((col.start..expr_col.end, Kind::Number))
        }
        fn binary_expression(
            this: &mut Generator,
            link: &mut Link,
            op: Opcode,
            operands: Kind,
            result: Kind,
        ) -> Result<(Column, Kind)> {
            let ((col_lhs, lhs), (col_rhs, rhs)) = this.pop_2(operands)?;
            link.append(lhs);
            link.append(rhs);
            link.push(op);
            Ok((col_lhs.start..col_rhs.end, result))
        }
        fn arithmetic(this: &mut Generator, link: &mut Link, op: Opcode) -> Result<(Column, Kind)> {
            binary_expression(this, link, op, Kind::Number, Kind::Number)
        }
        fn relation(this: &mut Generator, link: &mut Link, op: Opcode) -> Result<(Column, Kind)> {
            binary_expression(this, link, op, Kind::Number, Kind::Boolean)
        }
        fn boolean(this: &mut Generator, link: &mut Link, op: Opcode) -> Result<(Column, Kind)> {
            binary_expression(this, link, op, Kind::Boolean, Kind::Boolean)
        }
        fn leaf(link: &mut Link, col: &Column, op: Opcode) -> Result<(Column, Kind)> {
            link.push(op);
            Ok((col.clone(), Kind::Number))
        }
        use ast::Expression;
        match expr {
            Expression::Number(col, val) => self.number(link, col, *val),
            Expression::Pi(col) => leaf(link, col, Opcode::Pi),
            Expression::Euler(col) => leaf(link, col, Opcode::E),
            Expression::Variable(col, index) => leaf(link, col, Opcode::Var(*index)),
            Expression::Reference(col, index) => leaf(link, col, Opcode::Ref(*index)),
            Expression::Function(col, name, args) => self.function(link, col, name, args.len()),
            Expression::If(col, ..) => self.r#if(link, col),
            Expression::Negation(col, ..) => unary_expression(self, link, Opcode::Neg, col),
            Expression::Power(..) => arithmetic(self, link, Opcode::Pow),
            Expression::Multiply(..) => arithmetic(self, link, Opcode::Mul),
            Expression::Divide(..) => arithmetic(self, link, Opcode::Div),
            Expression::Add(..) => arithmetic(self, link, Opcode::Add),
            Expression::Subtract(..) => arithmetic(self, link, Opcode::Sub),
            Expression::Equal(..) => relation(self, link, Opcode::Eq),
            Expression::NotEqual(..) => relation(self, link, Opcode::NotEq),
            Expression::Less(..) => relation(self, link, Opcode::Lt),
            Expression::LessEqual(..) => relation(self, link, Opcode::LtEq),
            Expression::Greater(..) => relation(self, link, Opcode::Gt),
            Expression::GreaterEqual(..) => relation(self, link, Opcode::GtEq),
            Expression::And(..) => boolean(self, link, Opcode::And),
            Expression::Or(..) => boolean(self, link, Opcode::Or),
        }
    }

    fn number(&mut self, link: &mut Link, col: &Column, val: f64) -> Result<(Column, Kind)> {
        self.constants += 1;
        if self.constants > self.max_constants {
            return Err(error!(TooManyConstants, ..col));
        }
        link.push_number(val);
        Ok((col.clone(), Kind::Number))
    }

    fn function(
        &mut self,
        link: &mut Link,
        col: &Column,
        name: &str,
        len: usize,
    ) -> Result<(Column, Kind)> {
        let (opcode, arity) = match Function::opcode_and_arity(name) {
            Some(found) => found,
            None => return Err(error!(UnknownIdentifier, ..col)),
        };
        if arity != len {
            return Err(error!(CommaExpected, ..col; "WRONG NUMBER OF ARGUMENTS"));
        }
        let mut end = col.end;
        for (arg_col, kind, ops) in self.expr.pop_n(len)? {
            check(&arg_col, kind, Kind::Number)?;
            end = arg_col.end;
            link.append(ops);
        }
        link.push(opcode);
        Ok((col.start..end, Kind::Number))
    }

    fn r#if(&mut self, link: &mut Link, col: &Column) -> Result<(Column, Kind)> {
        let (else_col, else_kind, else_link) = self.expr.pop()?;
        let (_then_col, then_kind, then_link) = self.expr.pop()?;
        let (_pred_col, _pred_kind, pred_link) = self.expr.pop()?;
        if then_kind != else_kind {
            return Err(error!(InvalidOperand, ..&else_col; "BRANCHES DIFFER IN TYPE"));
        }
        link.append(pred_link);
        link.push_if(then_link, else_link);
        Ok((col.start..else_col.end, then_kind))
    }
}

fn check(col: &Column, kind: Kind, want: Kind) -> Result<()> {
    if kind != want {
        return Err(error!(InvalidOperand, ..col));
    }
    Ok(())
}
