//! Expression parsing.
//!
//! Precedence, lowest first: `or`, `and`, relational (non-chaining),
//! additive, multiplicative, power, unary, term. Every binary level folds
//! left, power included, so `2 ** 3 ** 2` is `(2 ** 3) ** 2`.

use crate::{ParseError, Parser};
use fig_ir::{BinaryOp, Expr, ExprKind, Literal, TokenKind, TokenTag, UnaryOp};
use fig_stack::ensure_sufficient_stack;

/// A binary precedence level: which tokens it accepts, and what to report
/// when the right operand is missing.
struct Level {
    operators: fn(TokenTag) -> Option<BinaryOp>,
    missing_right: &'static str,
}

fn or_operator(tag: TokenTag) -> Option<BinaryOp> {
    (tag == TokenTag::Or).then_some(BinaryOp::Or)
}

fn and_operator(tag: TokenTag) -> Option<BinaryOp> {
    (tag == TokenTag::And).then_some(BinaryOp::And)
}

fn relational_operator(tag: TokenTag) -> Option<BinaryOp> {
    match tag {
        TokenTag::Lt => Some(BinaryOp::Lt),
        TokenTag::Gt => Some(BinaryOp::Gt),
        TokenTag::LtEq => Some(BinaryOp::LtEq),
        TokenTag::GtEq => Some(BinaryOp::GtEq),
        TokenTag::EqEq => Some(BinaryOp::Eq),
        TokenTag::NotEq => Some(BinaryOp::NotEq),
        _ => None,
    }
}

fn additive_operator(tag: TokenTag) -> Option<BinaryOp> {
    match tag {
        TokenTag::Plus => Some(BinaryOp::Add),
        TokenTag::Minus => Some(BinaryOp::Sub),
        _ => None,
    }
}

fn multiplicative_operator(tag: TokenTag) -> Option<BinaryOp> {
    match tag {
        TokenTag::Star => Some(BinaryOp::Mul),
        TokenTag::Slash => Some(BinaryOp::Div),
        TokenTag::SlashSlash => Some(BinaryOp::FloorDiv),
        TokenTag::Percent => Some(BinaryOp::Mod),
        _ => None,
    }
}

fn power_operator(tag: TokenTag) -> Option<BinaryOp> {
    (tag == TokenTag::StarStar).then_some(BinaryOp::Pow)
}

const OR: Level = Level {
    operators: or_operator,
    missing_right: "No right factor for OR expression",
};
const AND: Level = Level {
    operators: and_operator,
    missing_right: "No right factor for AND expression",
};
const ADDITIVE: Level = Level {
    operators: additive_operator,
    missing_right: "No right factor for addition/subtraction expression",
};
const MULTIPLICATIVE: Level = Level {
    operators: multiplicative_operator,
    missing_right: "No right factor for multiplication/division expression",
};
const POWER: Level = Level {
    operators: power_operator,
    missing_right: "No right factor for power expression",
};

impl Parser<'_> {
    /// Parse an expression, `None` if the current token cannot start one.
    pub(crate) fn parse_expression(&mut self) -> Result<Option<Expr>, ParseError> {
        ensure_sufficient_stack(|| self.parse_fold(&OR, Self::parse_and))
    }

    /// Parse an expression or fail with `InvalidSyntax(missing)`.
    pub(crate) fn require_expression(&mut self, missing: &'static str) -> Result<Expr, ParseError> {
        let position = self.cursor.position();
        self.parse_expression()?
            .ok_or_else(|| ParseError::invalid_syntax(missing, position))
    }

    fn parse_and(&mut self) -> Result<Option<Expr>, ParseError> {
        self.parse_fold(&AND, Self::parse_relation)
    }

    /// At most one relational operator: `a < b < c` is not an expression.
    fn parse_relation(&mut self) -> Result<Option<Expr>, ParseError> {
        let Some(left) = self.parse_additive()? else {
            return Ok(None);
        };
        let Some(op) = relational_operator(self.cursor.current_tag()) else {
            return Ok(Some(left));
        };
        let position = self.cursor.advance()?.position;
        let right = self.parse_additive()?.ok_or_else(|| {
            ParseError::invalid_syntax(
                "No right factor for relation expression",
                self.cursor.position(),
            )
        })?;
        Ok(Some(Expr::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            position,
        )))
    }

    fn parse_additive(&mut self) -> Result<Option<Expr>, ParseError> {
        self.parse_fold(&ADDITIVE, Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> Result<Option<Expr>, ParseError> {
        self.parse_fold(&MULTIPLICATIVE, Self::parse_power)
    }

    fn parse_power(&mut self) -> Result<Option<Expr>, ParseError> {
        self.parse_fold(&POWER, Self::parse_unary)
    }

    /// `operand {op operand}` folded to the left. Binary nodes take the
    /// position of their operator.
    fn parse_fold(
        &mut self,
        level: &Level,
        mut operand: impl FnMut(&mut Self) -> Result<Option<Expr>, ParseError>,
    ) -> Result<Option<Expr>, ParseError> {
        let Some(mut left) = operand(self)? else {
            return Ok(None);
        };
        while let Some(op) = (level.operators)(self.cursor.current_tag()) {
            let position = self.cursor.advance()?.position;
            let Some(right) = operand(self)? else {
                return Err(ParseError::invalid_syntax(
                    level.missing_right,
                    self.cursor.position(),
                ));
            };
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                position,
            );
        }
        Ok(Some(left))
    }

    /// `('!' | '-')? term`
    fn parse_unary(&mut self) -> Result<Option<Expr>, ParseError> {
        let (op, missing) = match self.cursor.current_tag() {
            TokenTag::Not => (UnaryOp::Not, "No factor for NOT expression"),
            TokenTag::Minus => (UnaryOp::Negate, "No factor for NEGATION expression"),
            _ => return self.parse_term(),
        };
        let position = self.cursor.advance()?.position;
        let operand = self
            .parse_term()?
            .ok_or_else(|| ParseError::invalid_syntax(missing, self.cursor.position()))?;
        Ok(Some(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            position,
        )))
    }

    /// Literal, object, list literal, or parenthesized expression.
    fn parse_term(&mut self) -> Result<Option<Expr>, ParseError> {
        match self.cursor.current_tag() {
            TokenTag::Ident => return self.parse_object(),
            TokenTag::LBracket => return self.parse_list().map(Some),
            TokenTag::LParen => {
                self.cursor.advance()?;
                let inner = self.require_expression("No expression inside parentheses")?;
                self.cursor.expect(TokenTag::RParen)?;
                return Ok(Some(inner));
            }
            _ => {}
        }

        let position = self.cursor.position();
        let literal = match &self.cursor.current().kind {
            TokenKind::Int(value) => Literal::Int(*value),
            TokenKind::Float(bits) => Literal::Float(f64::from_bits(*bits)),
            TokenKind::Bool(value) => Literal::Bool(*value),
            TokenKind::Str(text) => Literal::Str(text.clone()),
            _ => return Ok(None),
        };
        self.cursor.advance()?;
        Ok(Some(Expr::new(ExprKind::Literal(literal), position)))
    }

    /// `'[' (expression {',' expression})? ']'`
    fn parse_list(&mut self) -> Result<Expr, ParseError> {
        let position = self.cursor.expect(TokenTag::LBracket)?.position;
        let mut items = Vec::new();
        if let Some(first) = self.parse_expression()? {
            items.push(first);
            while self.cursor.eat(TokenTag::Comma)? {
                items.push(self.require_expression("No value after COMMA operator in list creation")?);
            }
        }
        self.cursor.expect(TokenTag::RBracket)?;
        Ok(Expr::new(ExprKind::List(items), position))
    }
}
