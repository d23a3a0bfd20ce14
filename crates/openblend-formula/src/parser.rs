//! Recursive-descent parser for the formula grammar.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! comparison := additive (('<'|'<='|'>'|'>='|'=='|'!=') additive)*
//! additive   := term (('+'|'-') term)*
//! term       := unary (('*'|'/'|'//'|'%') unary)*
//! unary      := ('+'|'-') unary | power
//! power      := primary ('**' unary)?
//! primary    := NUMBER | IDENT | IDENT '(' args ')' | '(' comparison ')'
//! args       := comparison (',' comparison)*
//! ```
//!
//! `**` is right-associative and binds tighter than unary minus on its
//! left but looser on its right, so `-x ** 2` is `-(x ** 2)` and
//! `2 ** -x` parses. Identifiers resolve against the allow-list here;
//! an expression that parses can only name sandbox symbols.

use crate::ast::{BinaryOp, Expr};
use crate::error::FormulaErrorKind;
use crate::symbols;
use crate::token::{Spanned, Token, tokenize};

/// Nesting cap; deeper formulas are rejected rather than risking the
/// parser or evaluator stack.
const MAX_DEPTH: usize = 128;

/// Parse `text` into an expression tree.
pub(crate) fn parse(text: &str) -> Result<Expr, FormulaErrorKind> {
    let tokens = tokenize(text)?;
    let mut parser = Parser {
        tokens: &tokens,
        cursor: 0,
        depth: 0,
    };
    let expr = parser.comparison()?;
    match parser.peek() {
        Some(spanned) => Err(FormulaErrorKind::UnexpectedToken {
            found: spanned.token.describe(),
            expected: "end of formula",
            offset: spanned.offset,
        }),
        None => Ok(expr),
    }
}

struct Parser<'a> {
    tokens: &'a [Spanned],
    cursor: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<Spanned> {
        let spanned = self.tokens.get(self.cursor).cloned();
        if spanned.is_some() {
            self.cursor += 1;
        }
        spanned
    }

    fn expect(&mut self, want: &Token, expected: &'static str) -> Result<(), FormulaErrorKind> {
        match self.advance() {
            Some(spanned) if spanned.token == *want => Ok(()),
            Some(spanned) => Err(FormulaErrorKind::UnexpectedToken {
                found: spanned.token.describe(),
                expected,
                offset: spanned.offset,
            }),
            None => Err(FormulaErrorKind::UnexpectedEnd { expected }),
        }
    }

    fn enter(&mut self) -> Result<(), FormulaErrorKind> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(FormulaErrorKind::NestingTooDeep { limit: MAX_DEPTH });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn comparison(&mut self) -> Result<Expr, FormulaErrorKind> {
        self.enter()?;
        let result = self.comparison_inner();
        self.leave();
        result
    }

    fn comparison_inner(&mut self) -> Result<Expr, FormulaErrorKind> {
        let mut lhs = self.additive()?;
        while let Some(op) = self.peek_binary(&[
            (Token::Less, BinaryOp::Lt),
            (Token::LessEq, BinaryOp::Le),
            (Token::Greater, BinaryOp::Gt),
            (Token::GreaterEq, BinaryOp::Ge),
            (Token::EqEq, BinaryOp::Eq),
            (Token::NotEq, BinaryOp::Ne),
        ]) {
            let rhs = self.additive()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn additive(&mut self) -> Result<Expr, FormulaErrorKind> {
        let mut lhs = self.term()?;
        while let Some(op) = self.peek_binary(&[
            (Token::Plus, BinaryOp::Add),
            (Token::Minus, BinaryOp::Sub),
        ]) {
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, FormulaErrorKind> {
        let mut lhs = self.unary()?;
        while let Some(op) = self.peek_binary(&[
            (Token::Star, BinaryOp::Mul),
            (Token::Slash, BinaryOp::Div),
            (Token::SlashSlash, BinaryOp::FloorDiv),
            (Token::Percent, BinaryOp::Rem),
        ]) {
            let rhs = self.unary()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    /// Consume one of `table`'s tokens if it is next, returning its operator.
    fn peek_binary(&mut self, table: &[(Token, BinaryOp)]) -> Option<BinaryOp> {
        let next = self.peek()?.token.clone();
        for (token, op) in table {
            if next == *token {
                self.cursor += 1;
                return Some(*op);
            }
        }
        None
    }

    fn unary(&mut self) -> Result<Expr, FormulaErrorKind> {
        self.enter()?;
        let result = self.unary_inner();
        self.leave();
        result
    }

    fn unary_inner(&mut self) -> Result<Expr, FormulaErrorKind> {
        match self.peek() {
            Some(spanned) if spanned.token == Token::Minus => {
                self.cursor += 1;
                let operand = self.unary()?;
                Ok(Expr::Neg(Box::new(operand)))
            }
            Some(spanned) if spanned.token == Token::Plus => {
                self.cursor += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr, FormulaErrorKind> {
        let base = self.primary()?;
        match self.peek() {
            Some(spanned) if spanned.token == Token::StarStar => {
                self.cursor += 1;
                let exponent = self.unary()?;
                Ok(Expr::Binary {
                    op: BinaryOp::Pow,
                    lhs: Box::new(base),
                    rhs: Box::new(exponent),
                })
            }
            _ => Ok(base),
        }
    }

    fn primary(&mut self) -> Result<Expr, FormulaErrorKind> {
        let Some(spanned) = self.advance() else {
            return Err(FormulaErrorKind::UnexpectedEnd {
                expected: "an expression",
            });
        };
        match spanned.token {
            Token::Number(value) => Ok(Expr::Number(value)),
            Token::Ident(name) => {
                if matches!(self.peek(), Some(next) if next.token == Token::LParen) {
                    self.cursor += 1;
                    self.call(name)
                } else {
                    resolve_identifier(&name)
                }
            }
            Token::LParen => {
                let inner = self.comparison()?;
                self.expect(&Token::RParen, "`)`")?;
                Ok(inner)
            }
            other => Err(FormulaErrorKind::UnexpectedToken {
                found: other.describe(),
                expected: "an expression",
                offset: spanned.offset,
            }),
        }
    }

    /// Parse the argument list of `name(`, resolve against the allow-list,
    /// and check arity.
    fn call(&mut self, name: String) -> Result<Expr, FormulaErrorKind> {
        let Some(function) = symbols::function(&name) else {
            return Err(FormulaErrorKind::UnknownFunction { name });
        };

        let mut args = Vec::new();
        if matches!(self.peek(), Some(next) if next.token == Token::RParen) {
            self.cursor += 1;
        } else {
            loop {
                args.push(self.comparison()?);
                match self.advance() {
                    Some(spanned) if spanned.token == Token::Comma => {}
                    Some(spanned) if spanned.token == Token::RParen => break,
                    Some(spanned) => {
                        return Err(FormulaErrorKind::UnexpectedToken {
                            found: spanned.token.describe(),
                            expected: "`,` or `)`",
                            offset: spanned.offset,
                        });
                    }
                    None => {
                        return Err(FormulaErrorKind::UnexpectedEnd {
                            expected: "`,` or `)`",
                        });
                    }
                }
            }
        }

        if !function.arity.accepts(args.len()) {
            return Err(FormulaErrorKind::Arity {
                function: function.name,
                expected: function.arity.describe(),
                got: args.len(),
            });
        }

        Ok(Expr::Call { function, args })
    }
}

/// Resolve a bare identifier: an evaluation binding, then a constant.
fn resolve_identifier(name: &str) -> Result<Expr, FormulaErrorKind> {
    match name {
        "x" => Ok(Expr::Coord),
        "frames" => Ok(Expr::FrameCount),
        _ => match symbols::constant(name) {
            Some(value) => Ok(Expr::Number(value)),
            None => Err(FormulaErrorKind::UnknownIdentifier {
                name: name.to_string(),
            }),
        },
    }
}
