//! Objects: identifiers, calls, indexing and dot chains.

use crate::{ParseError, Parser};
use fig_ir::{Access, AccessKind, Expr, ExprKind, SourcePosition, TokenTag};

/// What follows the name of a single object.
enum Suffix {
    None,
    Call(Vec<Expr>),
    Index(Vec<Expr>),
}

impl Parser<'_> {
    /// `single_object {'.' single_object}`
    pub(crate) fn parse_object(&mut self) -> Result<Option<Expr>, ParseError> {
        if !self.cursor.check(TokenTag::Ident) {
            return Ok(None);
        }
        let (name, position, suffix) = self.parse_single_object()?;
        let base = Expr::new(
            match suffix {
                Suffix::None => ExprKind::Identifier(name),
                Suffix::Call(args) => ExprKind::Call { name, args },
                Suffix::Index(indexes) => ExprKind::Index { name, indexes },
            },
            position,
        );
        if !self.cursor.check(TokenTag::Dot) {
            return Ok(Some(base));
        }

        let mut steps = Vec::new();
        while self.cursor.eat(TokenTag::Dot)? {
            if !self.cursor.check(TokenTag::Ident) {
                return Err(ParseError::invalid_syntax(
                    "No call after POINT operator",
                    self.cursor.position(),
                ));
            }
            let (name, step_position, suffix) = self.parse_single_object()?;
            let kind = match suffix {
                Suffix::None => AccessKind::Attribute(name),
                Suffix::Call(args) => AccessKind::Method { name, args },
                Suffix::Index(indexes) => AccessKind::Index { name, indexes },
            };
            steps.push(Access {
                kind,
                position: step_position,
            });
        }
        Ok(Some(Expr::new(
            ExprKind::DotAccess {
                base: Box::new(base),
                steps,
            },
            position,
        )))
    }

    /// `ID ( '(' args? ')' | {'[' expression ']'} )`
    fn parse_single_object(&mut self) -> Result<(String, SourcePosition, Suffix), ParseError> {
        let (name, position) = self.cursor.expect_ident()?;
        let suffix = match self.cursor.current_tag() {
            TokenTag::LParen => Suffix::Call(self.parse_arguments()?),
            TokenTag::LBracket => {
                let mut indexes = Vec::new();
                while self.cursor.eat(TokenTag::LBracket)? {
                    indexes.push(self.require_expression("No index inside square brackets")?);
                    self.cursor.expect(TokenTag::RBracket)?;
                }
                Suffix::Index(indexes)
            }
            _ => Suffix::None,
        };
        Ok((name, position, suffix))
    }

    /// `'(' (expression {',' expression} ','?)? ')'`
    fn parse_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.cursor.expect(TokenTag::LParen)?;
        let mut args = Vec::new();
        while let Some(arg) = self.parse_expression()? {
            args.push(arg);
            if !self.cursor.eat(TokenTag::Comma)? {
                break;
            }
        }
        self.cursor.expect(TokenTag::RParen)?;
        Ok(args)
    }
}
