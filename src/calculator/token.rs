//! Lexing of calculator input into tokens.
//!
//! Input is split on the operator characters, parentheses and spaces. Every
//! run of other characters in between must be a number literal or one of the
//! known function names.

use super::error::EvalError;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// Parse an operator from its single-character symbol.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
            Self::Pow => a.powf(b),
        }
    }
}

/// A unary function. Trigonometry works in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Sqrt,
}

impl Function {
    /// Functions bind tighter than any operator.
    pub const PRECEDENCE: u8 = 4;

    /// Look up a function by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Sqrt => "sqrt",
        }
    }

    pub fn apply(self, a: f64) -> f64 {
        match self {
            Self::Sin => a.to_radians().sin(),
            Self::Cos => a.to_radians().cos(),
            Self::Sqrt => a.sqrt(),
        }
    }
}

/// A lexical unit of an expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    Function(Function),
    OpenParen,
    CloseParen,
}

/// A token together with the byte offset where it starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub offset: usize,
}

/// Lazily tokenize `input`.
pub fn tokenize(input: &str) -> Tokens<'_> {
    Tokens { input, pos: 0 }
}

/// Iterator returned by [`tokenize`].
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    input: &'a str,
    pos: usize,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Spanned, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.input[self.pos..];
        let trimmed = rest.trim_start_matches(' ');
        self.pos += rest.len() - trimmed.len();

        let offset = self.pos;
        let first = trimmed.chars().next()?;

        if let Some(token) = single_char_token(first) {
            // Every delimiter is ASCII.
            self.pos += 1;
            return Some(Ok(Spanned { token, offset }));
        }

        let len = trimmed.find(is_delimiter).unwrap_or(trimmed.len());
        let run = &trimmed[..len];
        self.pos += len;

        Some(classify_run(run).map(|token| Spanned { token, offset }).ok_or_else(|| {
            EvalError::Lex {
                token: run.to_string(),
                offset,
            }
        }))
    }
}

fn is_delimiter(c: char) -> bool {
    c == ' ' || single_char_token(c).is_some()
}

fn single_char_token(c: char) -> Option<Token> {
    match c {
        '(' => Some(Token::OpenParen),
        ')' => Some(Token::CloseParen),
        _ => Operator::from_symbol(c).map(Token::Operator),
    }
}

fn classify_run(run: &str) -> Option<Token> {
    if is_number_literal(run) {
        // Long digit runs overflow to infinity; those are not numbers
        return run
            .parse()
            .ok()
            .filter(|n: &f64| n.is_finite())
            .map(Token::Number);
    }
    Function::from_name(run).map(Token::Function)
}

/// Digits with at most one decimal point and at least one digit.
fn is_number_literal(run: &str) -> bool {
    let mut digits = 0;
    let mut dots = 0;
    for c in run.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}
