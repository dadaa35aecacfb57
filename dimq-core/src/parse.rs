//! Unit-expression parsing.
//!
//! Turns textual unit expressions like `"kg*m^2/s^3"` or `"(m/s)^2"` into a
//! [`UnitExpr`]: an SI-base scale factor plus a [`Dimensions`] vector.
//!
//! # Grammar
//!
//! ```text
//! expr     := term (('*' | '/') term)*        left-associative
//! term     := factor ('^' exponent)?
//! factor   := IDENT | '(' expr ')' | '1'
//! exponent := INT | '(' INT '/' POS_INT ')'   INT optionally signed
//! ```
//!
//! Whitespace is insignificant. The empty string and `"1"` both denote the
//! dimensionless unit with scale 1. Symbols resolve through
//! [`crate::registry`], including metric-prefix stripping, so `"us"` is a
//! microsecond and `"mi/hr"` is a speed.
//!
//! Rational exponents are evaluated to `f64`; an integer-valued rational
//! (`^(4/2)`) canonicalizes to the exact integer. Parsing is a pure function
//! of its input and is safe to call from any number of threads at once.

use crate::dimension::Dimensions;
use crate::error::ParseError;
use crate::registry;

/// A parsed unit expression: the multiplicative factor to SI base plus the
/// dimensional signature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct UnitExpr {
    /// Factor converting a magnitude in this unit to the SI-base magnitude.
    pub scale: f64,
    /// Additive offset to SI base; always `0.0` (offset scales unsupported).
    pub offset: f64,
    /// Dimensional signature.
    pub dims: Dimensions,
}

impl UnitExpr {
    const DIMENSIONLESS: UnitExpr = UnitExpr {
        scale: 1.0,
        offset: 0.0,
        dims: Dimensions::NONE,
    };

    fn multiply(self, other: UnitExpr) -> UnitExpr {
        UnitExpr {
            scale: self.scale * other.scale,
            offset: 0.0,
            dims: self.dims.multiply(&other.dims),
        }
    }

    fn divide(self, other: UnitExpr) -> UnitExpr {
        UnitExpr {
            scale: self.scale / other.scale,
            offset: 0.0,
            dims: self.dims.divide(&other.dims),
        }
    }

    fn pow(self, exp: f64) -> UnitExpr {
        UnitExpr {
            scale: self.scale.powf(exp),
            offset: 0.0,
            dims: self.dims.pow(exp),
        }
    }
}

/// Parses a unit expression into its SI-base representation.
pub(crate) fn parse(input: &str) -> Result<UnitExpr, ParseError> {
    let tokens = lex(input)?;
    if tokens.is_empty() {
        return Ok(UnitExpr::DIMENSIONLESS);
    }
    let mut parser = Parser {
        tokens,
        cursor: 0,
        input_len: input.len(),
    };
    let expr = parser.expr()?;
    match parser.peek() {
        None => Ok(expr),
        Some((token, pos)) => Err(ParseError::Syntax {
            pos: *pos,
            message: format!("unexpected {}", token.describe()),
        }),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lexer
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Int(i64),
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Plus,
    Minus,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Ident(s) => format!("symbol '{s}'"),
            Token::Int(n) => format!("number {n}"),
            Token::Star => "'*'".to_string(),
            Token::Slash => "'/'".to_string(),
            Token::Caret => "'^'".to_string(),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::Plus => "'+'".to_string(),
            Token::Minus => "'-'".to_string(),
        }
    }
}

fn lex(input: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }
        let token = match ch {
            '*' => {
                chars.next();
                Token::Star
            }
            '/' => {
                chars.next();
                Token::Slash
            }
            '^' => {
                chars.next();
                Token::Caret
            }
            '(' => {
                chars.next();
                Token::LParen
            }
            ')' => {
                chars.next();
                Token::RParen
            }
            '+' => {
                chars.next();
                Token::Plus
            }
            '-' => {
                chars.next();
                Token::Minus
            }
            _ if ch.is_ascii_digit() => {
                let mut end = pos;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_digit() {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let digits = &input[pos..end];
                let value = digits.parse::<i64>().map_err(|_| ParseError::BadExponent {
                    reason: format!("number '{digits}' is out of range"),
                })?;
                Token::Int(value)
            }
            _ if ch.is_alphabetic() || ch == '_' => {
                let mut end = pos;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                Token::Ident(input[pos..end].to_string())
            }
            _ => {
                return Err(ParseError::Syntax {
                    pos,
                    message: format!("unexpected character '{ch}'"),
                });
            }
        };
        tokens.push((token, pos));
    }

    Ok(tokens)
}

// ─────────────────────────────────────────────────────────────────────────────
// Parser
// ─────────────────────────────────────────────────────────────────────────────

struct Parser {
    tokens: Vec<(Token, usize)>,
    cursor: usize,
    input_len: usize,
}

impl Parser {
    fn peek(&self) -> Option<&(Token, usize)> {
        self.tokens.get(self.cursor)
    }

    fn next(&mut self) -> Option<(Token, usize)> {
        let item = self.tokens.get(self.cursor).cloned();
        if item.is_some() {
            self.cursor += 1;
        }
        item
    }

    fn end_of_input<T>(&self, expected: &str) -> Result<T, ParseError> {
        Err(ParseError::Syntax {
            pos: self.input_len,
            message: format!("expected {expected}, found end of input"),
        })
    }

    /// `expr := term (('*' | '/') term)*`
    fn expr(&mut self) -> Result<UnitExpr, ParseError> {
        let mut acc = self.term()?;
        loop {
            match self.peek() {
                Some((Token::Star, _)) => {
                    self.next();
                    acc = acc.multiply(self.term()?);
                }
                Some((Token::Slash, _)) => {
                    self.next();
                    acc = acc.divide(self.term()?);
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    /// `term := factor ('^' exponent)?`
    fn term(&mut self) -> Result<UnitExpr, ParseError> {
        let factor = self.factor()?;
        if let Some((Token::Caret, _)) = self.peek() {
            self.next();
            let exp = self.exponent()?;
            return Ok(factor.pow(exp));
        }
        Ok(factor)
    }

    /// `factor := IDENT | '(' expr ')' | '1'`
    fn factor(&mut self) -> Result<UnitExpr, ParseError> {
        match self.next() {
            Some((Token::Ident(symbol), _)) => match registry::resolve(&symbol) {
                Some(unit) => Ok(UnitExpr {
                    scale: unit.scale,
                    offset: unit.offset,
                    dims: unit.dims,
                }),
                None => Err(ParseError::UnknownSymbol { symbol }),
            },
            Some((Token::Int(1), _)) => Ok(UnitExpr::DIMENSIONLESS),
            Some((Token::LParen, _)) => {
                let inner = self.expr()?;
                match self.next() {
                    Some((Token::RParen, _)) => Ok(inner),
                    Some((token, pos)) => Err(ParseError::Syntax {
                        pos,
                        message: format!("expected ')', found {}", token.describe()),
                    }),
                    None => self.end_of_input("')'"),
                }
            }
            Some((token, pos)) => Err(ParseError::Syntax {
                pos,
                message: format!("expected unit symbol, found {}", token.describe()),
            }),
            None => self.end_of_input("unit symbol"),
        }
    }

    /// `exponent := INT | '(' INT '/' POS_INT ')'`, with `INT` optionally
    /// signed. An integer-valued rational canonicalizes to the exact integer.
    fn exponent(&mut self) -> Result<f64, ParseError> {
        match self.peek() {
            Some((Token::LParen, _)) => {
                self.next();
                let numerator = self.signed_int()?;
                match self.next() {
                    Some((Token::Slash, _)) => {}
                    Some((token, pos)) => {
                        return Err(ParseError::Syntax {
                            pos,
                            message: format!("expected '/', found {}", token.describe()),
                        });
                    }
                    None => return self.end_of_input("'/'"),
                }
                let denominator = self.signed_int()?;
                match self.next() {
                    Some((Token::RParen, _)) => {}
                    Some((token, pos)) => {
                        return Err(ParseError::Syntax {
                            pos,
                            message: format!("expected ')', found {}", token.describe()),
                        });
                    }
                    None => return self.end_of_input("')'"),
                }
                if denominator == 0 {
                    return Err(ParseError::BadExponent {
                        reason: "rational exponent divides by zero".to_string(),
                    });
                }
                if denominator < 0 {
                    return Err(ParseError::BadExponent {
                        reason: "rational exponent denominator must be positive".to_string(),
                    });
                }
                if numerator % denominator == 0 {
                    Ok((numerator / denominator) as f64)
                } else {
                    Ok(numerator as f64 / denominator as f64)
                }
            }
            _ => self.signed_int().map(|n| n as f64),
        }
    }

    fn signed_int(&mut self) -> Result<i64, ParseError> {
        let negative = match self.peek() {
            Some((Token::Minus, _)) => {
                self.next();
                true
            }
            Some((Token::Plus, _)) => {
                self.next();
                false
            }
            _ => false,
        };
        match self.next() {
            Some((Token::Int(n), _)) => Ok(if negative { -n } else { n }),
            Some((token, pos)) => Err(ParseError::Syntax {
                pos,
                message: format!("expected exponent, found {}", token.describe()),
            }),
            None => self.end_of_input("exponent"),
        }
    }
}
