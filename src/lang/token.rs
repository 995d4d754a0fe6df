#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Literal(String),
    Ident(String),
    Operator(Operator),
    LParen,
    RParen,
    Comma,
}

impl Token {
    pub fn from_char(ch: char) -> Option<Token> {
        match ch {
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            ',' => Some(Token::Comma),
            _ => Operator::from_char(ch).map(Token::Operator),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Literal(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,
    Or,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;
        match ch {
            '^' => Some(Caret),
            '*' => Some(Multiply),
            '/' => Some(Divide),
            '+' => Some(Plus),
            '-' => Some(Minus),
            '=' => Some(Equal),
            '<' => Some(Less),
            '>' => Some(Greater),
            '&' => Some(And),
            '|' => Some(Or),
            _ => None,
        }
    }

    /// Widen `<` or `>` when followed by the second character of a
    /// two character operator.
    pub fn combine(&self, next: char) -> Option<Operator> {
        use Operator::*;
        match (self, next) {
            (Less, '=') => Some(LessEqual),
            (Less, '>') => Some(NotEqual),
            (Greater, '=') => Some(GreaterEqual),
            _ => None,
        }
    }

    pub fn is_relational(&self) -> bool {
        use Operator::*;
        match self {
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => true,
            Caret | Multiply | Divide | Plus | Minus | And | Or => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            And => write!(f, "&"),
            Or => write!(f, "|"),
        }
    }
}
