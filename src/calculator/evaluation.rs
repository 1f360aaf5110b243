//! Shunting-yard evaluation of infix expressions.
//!
//! Tokens are consumed left to right against two stacks: numbers waiting to
//! be combined, and operators, functions and open parentheses whose
//! application is still pending.
//!
//! Operators of equal precedence are applied left to right, which includes
//! `^`: `2^3^2` is `(2^3)^2 = 64`, not the conventional `2^(3^2) = 512`.

use super::error::EvalError;
use super::token::{Function, Operator, Token, tokenize};
use tracing::{debug, trace};

/// An entry on the operator stack.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Pending {
    Operator(Operator),
    Function(Function),
    OpenParen,
}

impl Pending {
    /// Precedence used when an incoming operator decides what to apply.
    /// `None` for an open parenthesis, which operators never pop past.
    fn precedence(self) -> Option<u8> {
        match self {
            Self::Operator(op) => Some(op.precedence()),
            Self::Function(_) => Some(Function::PRECEDENCE),
            Self::OpenParen => None,
        }
    }
}

/// The two transient stacks of one evaluation.
#[derive(Debug, Default)]
struct Machine {
    values: Vec<f64>,
    pending: Vec<Pending>,
}

impl Machine {
    fn push_token(&mut self, token: Token) -> Result<(), EvalError> {
        match token {
            Token::Number(n) => self.values.push(n),
            Token::OpenParen => self.pending.push(Pending::OpenParen),
            Token::Function(f) => self.pending.push(Pending::Function(f)),
            Token::CloseParen => self.close_group()?,
            Token::Operator(op) => {
                while let Some(&top) = self.pending.last()
                    && top.precedence().is_some_and(|p| p >= op.precedence())
                {
                    self.pending.pop();
                    self.apply(top)?;
                }
                self.pending.push(Pending::Operator(op));
            }
        }
        Ok(())
    }

    /// Apply everything back to the matching `(`, then the function that
    /// owns the group, if any.
    fn close_group(&mut self) -> Result<(), EvalError> {
        loop {
            match self.pending.pop() {
                Some(Pending::OpenParen) => break,
                Some(entry) => self.apply(entry)?,
                None => return Err(EvalError::UnbalancedParens),
            }
        }

        if let Some(&Pending::Function(f)) = self.pending.last() {
            self.pending.pop();
            self.apply(Pending::Function(f))?;
        }
        Ok(())
    }

    fn apply(&mut self, entry: Pending) -> Result<(), EvalError> {
        let result = match entry {
            Pending::Function(f) => {
                let a = self
                    .values
                    .pop()
                    .ok_or(EvalError::StackUnderflow { symbol: f.name() })?;
                f.apply(a)
            }
            Pending::Operator(op) => {
                if self.values.len() < 2 {
                    return Err(EvalError::StackUnderflow {
                        symbol: op.symbol(),
                    });
                }
                let b = self.values.pop().unwrap_or_default();
                let a = self.values.pop().unwrap_or_default();
                op.apply(a, b)
            }
            Pending::OpenParen => return Err(EvalError::UnbalancedParens),
        };
        trace!(?entry, result, "applied");
        self.values.push(result);
        Ok(())
    }

    fn finish(mut self) -> Result<f64, EvalError> {
        while let Some(entry) = self.pending.pop() {
            self.apply(entry)?;
        }
        match self.values.as_slice() {
            [value] => Ok(*value),
            values => Err(EvalError::MalformedResult {
                remaining: values.len(),
            }),
        }
    }
}

/// Evaluate an infix expression.
///
/// Supports `+ - * / ^`, parentheses, and `sin`, `cos` (degrees) and `sqrt`.
/// Each call is independent; evaluating the same string twice gives
/// bit-identical results.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let mut machine = Machine::default();

    let result = tokenize(expression)
        .try_for_each(|spanned| {
            let spanned = spanned?;
            trace!(token = ?spanned.token, offset = spanned.offset, "token");
            machine.push_token(spanned.token)
        })
        .and_then(|()| machine.finish());

    match &result {
        Ok(value) => debug!(expression, value, "evaluated"),
        Err(e) => debug!(expression, error = %e, "evaluation failed"),
    }
    result
}
