use super::{ast::*, lex::*, names::*, token::*, Column, Error};
use crate::mach::Function;

type Result<T> = std::result::Result<T, Error>;

/// Deepest nesting of parentheses, calls and exponents in one segment.
pub const MAX_NESTING: usize = 200;

/// Parse one segment. `offset` is the character position of `s` within
/// the full source so that every column refers to the whole formula.
pub fn parse(s: &str, offset: usize, names: &mut Names) -> Result<Expression> {
    Parser::parse(s, offset, names)
}

struct Parser<'a, 'n> {
    token_stream: Lexer<'a>,
    peeked: Option<Token>,
    names: &'n mut Names,
    col: Column,
    depth: usize,
}

impl<'a, 'n> Parser<'a, 'n> {
    fn parse(s: &'a str, offset: usize, names: &'n mut Names) -> Result<Expression> {
        let mut parse = Parser {
            token_stream: lex(s),
            peeked: None,
            names,
            col: offset..offset,
            depth: 0,
        };
        let expr = parse.expression()?;
        match parse.next() {
            None => Ok(expr),
            Some(Token::RParen) => Err(error!(ParenNotMatch, ..&parse.column())),
            Some(Token::Comma) => Err(error!(SyntaxError, ..&parse.column(); "UNEXPECTED COMMA")),
            Some(Token::Unknown(_)) => Err(error!(SyntaxError, ..&parse.column())),
            Some(_) => Err(error!(OperatorExpected, ..&parse.column())),
        }
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn nest<T>(&mut self, column: &Column, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_NESTING {
            return Err(error!(StackOverflow, ..column; "EXPRESSION TOO COMPLEX"));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn next(&mut self) -> Option<Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.to_string().chars().count();
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn peek_operator(&mut self) -> Option<Operator> {
        match self.peek() {
            Some(Token::Operator(op)) => Some(*op),
            _ => None,
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        let mut lhs = self.relation()?;
        loop {
            let op = match self.peek_operator() {
                Some(op @ Operator::And) | Some(op @ Operator::Or) => op,
                _ => return Ok(lhs),
            };
            self.next();
            let column = self.column();
            let rhs = self.relation()?;
            lhs = Expression::for_binary_op(column, op, lhs, rhs);
        }
    }

    fn relation(&mut self) -> Result<Expression> {
        let lhs = self.additive()?;
        let op = match self.peek_operator() {
            Some(op) if op.is_relational() => op,
            _ => return Ok(lhs),
        };
        self.next();
        let column = self.column();
        let rhs = self.additive()?;
        if let Some(chained) = self.peek_operator() {
            if chained.is_relational() {
                return Err(error!(InvalidOperator, ..&self.column(); "ONE COMPARISON PER TERM"));
            }
        }
        Ok(Expression::for_binary_op(column, op, lhs, rhs))
    }

    fn additive(&mut self) -> Result<Expression> {
        let mut lhs = self.multiplicative()?;
        loop {
            let op = match self.peek_operator() {
                Some(op @ Operator::Plus) | Some(op @ Operator::Minus) => op,
                _ => return Ok(lhs),
            };
            self.next();
            let column = self.column();
            let rhs = self.multiplicative()?;
            lhs = Expression::for_binary_op(column, op, lhs, rhs);
        }
    }

    fn multiplicative(&mut self) -> Result<Expression> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek_operator() {
                Some(op @ Operator::Multiply) | Some(op @ Operator::Divide) => op,
                _ => return Ok(lhs),
            };
            self.next();
            let column = self.column();
            let rhs = self.unary()?;
            lhs = Expression::for_binary_op(column, op, lhs, rhs);
        }
    }

    // A run of signs is folded into one pending negation which is applied
    // after any `^`, so `-x^y` is `-(x^y)`.
    fn unary(&mut self) -> Result<Expression> {
        let mut negate: Option<Column> = None;
        let mut first_minus: Option<Column> = None;
        loop {
            match self.peek_operator() {
                Some(Operator::Minus) => {
                    self.next();
                    if first_minus.is_none() {
                        first_minus = Some(self.column());
                    }
                    negate = match negate {
                        Some(_) => None,
                        None => first_minus.clone(),
                    };
                }
                Some(Operator::Plus) => {
                    self.next();
                }
                _ => break,
            }
        }
        let expr = self.power()?;
        Ok(match negate {
            Some(column) => Expression::Negation(column, Box::new(expr)),
            None => expr,
        })
    }

    fn power(&mut self) -> Result<Expression> {
        let base = self.atom()?;
        if let Some(Operator::Caret) = self.peek_operator() {
            self.next();
            let column = self.column();
            let exponent = self.nest(&column, |p| p.unary())?;
            return Ok(Expression::Power(column, Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expression> {
        let token = self.next();
        let column = self.column();
        match token {
            Some(Token::Literal(s)) => match s.parse::<f64>() {
                Ok(val) => Ok(Expression::Number(column, val)),
                Err(_) => Err(error!(SyntaxError, ..&column; "INVALID NUMBER")),
            },
            Some(Token::LParen) => self.nest(&column, |p| {
                let expr = p.expression()?;
                p.close()?;
                Ok(expr)
            }),
            Some(Token::Ident(name)) => self.identifier(column, name),
            Some(Token::Operator(_)) => Err(error!(OperatorExpected, ..&column)),
            Some(Token::Unknown(_)) => Err(error!(SyntaxError, ..&column)),
            Some(Token::RParen) | Some(Token::Comma) | Some(Token::Whitespace(_)) | None => {
                Err(error!(ExpressionExpected, ..&column))
            }
        }
    }

    fn identifier(&mut self, column: Column, name: String) -> Result<Expression> {
        match name.as_str() {
            "pi" => return Ok(Expression::Pi(column)),
            "e" => return Ok(Expression::Euler(column)),
            "if" => {
                let at = column.clone();
                return self.nest(&at, |p| p.conditional(column));
            }
            _ => {}
        }
        if let Some((_, arity)) = Function::opcode_and_arity(&name) {
            let args = self.nest(&column, |p| p.arguments(arity))?;
            return Ok(Expression::Function(column, name.into(), args));
        }
        match self.names.resolve(&name) {
            Some(Binding::Variable(index)) => Ok(Expression::Variable(column, index)),
            Some(Binding::Reference(index)) => Ok(Expression::Reference(column, index)),
            None => Err(error!(UnknownIdentifier, ..&column)),
        }
    }

    fn conditional(&mut self, column: Column) -> Result<Expression> {
        self.open()?;
        let predicate = self.expression()?;
        self.comma()?;
        let then_expr = self.expression()?;
        self.comma()?;
        let else_expr = self.expression()?;
        self.close()?;
        Ok(Expression::If(
            column,
            Box::new(predicate),
            Box::new(then_expr),
            Box::new(else_expr),
        ))
    }

    fn arguments(&mut self, arity: usize) -> Result<Vec<Expression>> {
        self.open()?;
        let mut v: Vec<Expression> = vec![self.expression()?];
        while v.len() < arity {
            self.comma()?;
            v.push(self.expression()?);
        }
        self.close()?;
        Ok(v)
    }

    fn open(&mut self) -> Result<()> {
        match self.next() {
            Some(Token::LParen) => Ok(()),
            _ => Err(error!(ParenExpected, ..&self.column())),
        }
    }

    fn comma(&mut self) -> Result<()> {
        match self.next() {
            Some(Token::Comma) => Ok(()),
            _ => Err(error!(CommaExpected, ..&self.column())),
        }
    }

    fn close(&mut self) -> Result<()> {
        match self.next() {
            Some(Token::RParen) => Ok(()),
            None => Err(error!(ParenNotMatch, ..&self.column())),
            Some(Token::Comma) => {
                Err(error!(SyntaxError, ..&self.column(); "TOO MANY ARGUMENTS"))
            }
            Some(Token::Unknown(_)) => Err(error!(SyntaxError, ..&self.column())),
            Some(_) => Err(error!(OperatorExpected, ..&self.column())),
        }
    }
}

impl Expression {
    fn for_binary_op(col: Column, op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        let (lhs, rhs) = (Box::new(lhs), Box::new(rhs));
        match op {
            Caret => Expression::Power(col, lhs, rhs),
            Multiply => Expression::Multiply(col, lhs, rhs),
            Divide => Expression::Divide(col, lhs, rhs),
            Plus => Expression::Add(col, lhs, rhs),
            Minus => Expression::Subtract(col, lhs, rhs),
            Equal => Expression::Equal(col, lhs, rhs),
            NotEqual => Expression::NotEqual(col, lhs, rhs),
            Less => Expression::Less(col, lhs, rhs),
            LessEqual => Expression::LessEqual(col, lhs, rhs),
            Greater => Expression::Greater(col, lhs, rhs),
            GreaterEqual => Expression::GreaterEqual(col, lhs, rhs),
            And => Expression::And(col, lhs, rhs),
            Or => Expression::Or(col, lhs, rhs),
        }
    }
}
