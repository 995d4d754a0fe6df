use super::token::*;

/// Tokens are produced on demand while the parser asks for them.
pub fn lex(s: &str) -> Lexer<'_> {
    Lexer {
        chars: s.chars().peekable(),
    }
}

fn is_formula_whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn is_formula_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_formula_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_formula_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        loop {
            self.chars().next();
            len += 1;
            if let Some(pk) = self.chars().peek() {
                if is_formula_whitespace(*pk) {
                    continue;
                }
            }
            return Some(Token::Whitespace(len));
        }
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        let mut decimal = false;
        loop {
            let ch = match self.chars().next() {
                Some(c) => c,
                None => {
                    debug_assert!(false, "Failed to tokenize number.");
                    return None;
                }
            };
            s.push(ch);
            if ch == '.' {
                decimal = true;
            }
            match self.chars().peek() {
                Some(pk) if is_formula_digit(*pk) => continue,
                Some('.') if !decimal => continue,
                Some('e') | Some('E') => {
                    self.exponent(&mut s);
                    break;
                }
                _ => break,
            }
        }
        Some(Token::Literal(s))
    }

    // An `e` only belongs to the number when digits follow it,
    // otherwise `2e` is the literal 2 and the constant e.
    fn exponent(&mut self, s: &mut String) {
        let mut look = self.chars().clone();
        look.next();
        let mut sign = None;
        let mut pk = look.next();
        if let Some(c) = pk {
            if c == '+' || c == '-' {
                sign = Some(c);
                pk = look.next();
            }
        }
        match pk {
            Some(c) if is_formula_digit(c) => {}
            _ => return,
        }
        if let Some(e) = self.chars().next() {
            s.push(e);
        }
        if sign.is_some() {
            if let Some(c) = self.chars().next() {
                s.push(c);
            }
        }
        while let Some(pk) = self.chars().peek() {
            if !is_formula_digit(*pk) {
                break;
            }
            if let Some(c) = self.chars().next() {
                s.push(c);
            }
        }
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        loop {
            match self.chars().next() {
                Some(ch) => s.push(ch),
                None => {
                    debug_assert!(false, "Failed to tokenize alphabetic.");
                    return None;
                }
            };
            if let Some(pk) = self.chars().peek() {
                if is_formula_alphanumeric(*pk) {
                    continue;
                }
            }
            break;
        }
        Some(Token::Ident(s))
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        match Token::from_char(ch) {
            Some(Token::Operator(op)) => {
                if let Some(pk) = self.chars().peek() {
                    if let Some(wide) = op.combine(*pk) {
                        self.chars().next();
                        return Some(Token::Operator(wide));
                    }
                }
                Some(Token::Operator(op))
            }
            Some(token) => Some(token),
            None => Some(Token::Unknown(ch.to_string())),
        }
    }
}

pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Tokenizers<'a> for Lexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Lexer<'a> {
    fn starts_fraction(&self) -> bool {
        let mut look = self.chars.clone();
        look.next();
        matches!(look.peek(), Some(c) if is_formula_digit(*c))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = *self.chars.peek()?;
        if is_formula_whitespace(pk) {
            return self.whitespace();
        }
        if is_formula_digit(pk) || (pk == '.' && self.starts_fraction()) {
            return self.number();
        }
        if is_formula_alphabetic(pk) {
            return self.alphabetic();
        }
        self.minutia()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<Token> {
        lex(s).collect()
    }

    #[test]
    fn test_numbers() {
        assert_eq!(tokens("007"), vec![Token::Literal("007".into())]);
        assert_eq!(tokens(".5"), vec![Token::Literal(".5".into())]);
        assert_eq!(tokens("1.25E-3"), vec![Token::Literal("1.25E-3".into())]);
        assert_eq!(tokens("6e2"), vec![Token::Literal("6e2".into())]);
    }

    #[test]
    fn test_number_then_e() {
        assert_eq!(
            tokens("2e+x"),
            vec![
                Token::Literal("2".into()),
                Token::Ident("e".into()),
                Token::Operator(Operator::Plus),
                Token::Ident("x".into()),
            ]
        );
    }

    #[test]
    fn test_lone_dot() {
        assert_eq!(
            tokens(". 1"),
            vec![
                Token::Unknown(".".into()),
                Token::Whitespace(1),
                Token::Literal("1".into())
            ]
        );
    }

    #[test]
    fn test_operators() {
        use Operator::*;
        let ops: Vec<Token> = tokens("<= <> < >= & | ^")
            .into_iter()
            .filter(|t| !matches!(t, Token::Whitespace(_)))
            .collect();
        assert_eq!(
            ops,
            vec![
                Token::Operator(LessEqual),
                Token::Operator(NotEqual),
                Token::Operator(Less),
                Token::Operator(GreaterEqual),
                Token::Operator(And),
                Token::Operator(Or),
                Token::Operator(Caret),
            ]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            tokens("x_1(sin"),
            vec![
                Token::Ident("x_1".into()),
                Token::LParen,
                Token::Ident("sin".into())
            ]
        );
    }

    #[test]
    fn test_display_round_trip() {
        let s = "if( x1 <= .5e3 ,2,y)";
        let back: String = tokens(s).iter().map(|t| t.to_string()).collect();
        assert_eq!(back, s);
    }
}
