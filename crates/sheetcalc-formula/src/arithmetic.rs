//! Arithmetic expression parser
//!
//! A recursive descent parser for `+ - * / ( )` over decimal numbers, with
//! standard precedence and unary signs.
//!
//! Runs of same-precedence operators become one flat [`ArithExpr::Chain`],
//! so tree depth grows only with nesting. Parentheses and unary signs may
//! nest at most [`MAX_DEPTH`] levels.

use crate::ast::{ArithExpr, BinaryOperator, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};

/// Deepest nesting of parentheses and unary signs accepted
pub const MAX_DEPTH: usize = 256;

/// Parse and evaluate an arithmetic expression
///
/// # Example
/// ```rust
/// use sheetcalc_formula::arithmetic::evaluate_arithmetic;
///
/// assert_eq!(evaluate_arithmetic("5+3*2").unwrap(), 11.0);
/// assert_eq!(evaluate_arithmetic("(1 + 2) / 4").unwrap(), 0.75);
/// ```
pub fn evaluate_arithmetic(input: &str) -> FormulaResult<f64> {
    let expr = parse_arithmetic(input)?;
    eval(&expr)
}

/// Parse an arithmetic expression into an AST
pub fn parse_arithmetic(input: &str) -> FormulaResult<ArithExpr> {
    let mut parser = ArithParser::new(input)?;
    let expr = parser.parse_expression()?;

    // Make sure we consumed all input
    if parser.current_token != Token::Eof {
        return Err(FormulaError::Parse(format!(
            "Unexpected {:?} after expression",
            parser.current_token
        )));
    }

    Ok(expr)
}

fn eval(expr: &ArithExpr) -> FormulaResult<f64> {
    match expr {
        ArithExpr::Number(n) => Ok(*n),
        ArithExpr::UnaryOp { op, operand } => {
            let value = eval(operand)?;
            Ok(match op {
                UnaryOperator::Plus => value,
                UnaryOperator::Negate => -value,
            })
        }
        ArithExpr::Chain { first, rest } => {
            rest.iter().try_fold(eval(first)?, |acc, (op, operand)| {
                apply(*op, acc, eval(operand)?)
            })
        }
    }
}

fn apply(op: BinaryOperator, l: f64, r: f64) -> FormulaResult<f64> {
    match op {
        BinaryOperator::Add => Ok(l + r),
        BinaryOperator::Subtract => Ok(l - r),
        BinaryOperator::Multiply => Ok(l * r),
        BinaryOperator::Divide => {
            if r == 0.0 {
                Err(FormulaError::DivisionByZero)
            } else {
                Ok(l / r)
            }
        }
    }
}

/// Token types
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
    Eof,
}

struct ArithParser<'a> {
    input: &'a str,
    pos: usize,
    current_token: Token,
    depth: usize,
}

impl<'a> ArithParser<'a> {
    fn new(input: &'a str) -> FormulaResult<Self> {
        let mut parser = Self {
            input,
            pos: 0,
            current_token: Token::Eof,
            depth: 0,
        };
        parser.advance_token()?;
        Ok(parser)
    }

    // === Token scanning ===

    fn advance_token(&mut self) -> FormulaResult<()> {
        self.current_token = self.scan_token()?;
        Ok(())
    }

    fn scan_token(&mut self) -> FormulaResult<Token> {
        self.skip_whitespace();

        let c = match self.peek_char() {
            Some(c) => c,
            None => return Ok(Token::Eof),
        };

        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            c if c.is_ascii_digit() || c == '.' => return self.scan_number(),
            other => {
                return Err(FormulaError::Parse(format!(
                    "Unexpected character '{}' at {}",
                    other, self.pos
                )))
            }
        };

        self.advance();
        Ok(token)
    }

    fn scan_number(&mut self) -> FormulaResult<Token> {
        let start = self.pos;

        // Integer part
        while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }

        // Decimal part
        if self.peek_char() == Some('.') {
            self.advance();
            while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let num_str = &self.input[start..self.pos];
        num_str
            .parse()
            .map(Token::Number)
            .map_err(|_| FormulaError::Parse(format!("Invalid number '{}'", num_str)))
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_whitespace()) {
            self.advance();
        }
    }

    fn consume(&mut self) -> FormulaResult<Token> {
        let token = std::mem::replace(&mut self.current_token, Token::Eof);
        self.advance_token()?;
        Ok(token)
    }

    fn expect(&mut self, expected: &Token) -> FormulaResult<()> {
        if &self.current_token == expected {
            self.consume()?;
            Ok(())
        } else {
            Err(FormulaError::Parse(format!(
                "Expected {:?}, got {:?}",
                expected, self.current_token
            )))
        }
    }

    fn descend(&mut self) -> FormulaResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(FormulaError::Parse(format!(
                "Nesting deeper than {} levels",
                MAX_DEPTH
            )));
        }
        Ok(())
    }

    // === Expression parsing with precedence ===
    // Precedence (lowest to highest):
    // 1. Addition/Subtraction: +, -
    // 2. Multiplication/Division: *, /
    // 3. Unary: +, -
    // 4. Primary: numbers, parentheses

    fn parse_expression(&mut self) -> FormulaResult<ArithExpr> {
        self.parse_additive()
    }

    fn parse_additive(&mut self) -> FormulaResult<ArithExpr> {
        let first = self.parse_multiplicative()?;
        let mut rest = Vec::new();

        loop {
            let op = match self.current_token {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.consume()?;
            rest.push((op, self.parse_multiplicative()?));
        }

        Ok(chain(first, rest))
    }

    fn parse_multiplicative(&mut self) -> FormulaResult<ArithExpr> {
        let first = self.parse_unary()?;
        let mut rest = Vec::new();

        loop {
            let op = match self.current_token {
                Token::Star => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                _ => break,
            };

            self.consume()?;
            rest.push((op, self.parse_unary()?));
        }

        Ok(chain(first, rest))
    }

    fn parse_unary(&mut self) -> FormulaResult<ArithExpr> {
        let op = match self.current_token {
            Token::Minus => UnaryOperator::Negate,
            Token::Plus => UnaryOperator::Plus,
            _ => return self.parse_primary(),
        };

        self.consume()?;
        self.descend()?;
        let operand = self.parse_unary()?;
        self.depth -= 1;
        Ok(ArithExpr::UnaryOp {
            op,
            operand: Box::new(operand),
        })
    }

    fn parse_primary(&mut self) -> FormulaResult<ArithExpr> {
        match self.current_token {
            Token::Number(n) => {
                self.consume()?;
                Ok(ArithExpr::Number(n))
            }

            Token::LeftParen => {
                self.consume()?;
                self.descend()?;
                let expr = self.parse_expression()?;
                self.expect(&Token::RightParen)?;
                self.depth -= 1;
                Ok(expr)
            }

            _ => Err(FormulaError::Parse(format!(
                "Unexpected token: {:?}",
                self.current_token
            ))),
        }
    }
}

fn chain(first: ArithExpr, rest: Vec<(BinaryOperator, ArithExpr)>) -> ArithExpr {
    if rest.is_empty() {
        first
    } else {
        ArithExpr::Chain {
            first: Box::new(first),
            rest,
        }
    }
}
