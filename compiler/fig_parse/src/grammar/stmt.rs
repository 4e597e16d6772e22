//! Statements, blocks and function definitions.

use crate::{ParseError, Parser};
use fig_ir::{Block, Expr, FunctionDef, IfBranch, Stmt, StmtKind, TokenTag};
use fig_stack::ensure_sufficient_stack;

impl Parser<'_> {
    /// `function_definition | block_statement`
    pub(crate) fn parse_statement(&mut self) -> Result<Option<Stmt>, ParseError> {
        if self.cursor.check(TokenTag::Def) {
            return self.parse_function_def().map(Some);
        }
        self.parse_block_statement()
    }

    /// `'def' ID '(' params? ')' block`
    fn parse_function_def(&mut self) -> Result<Stmt, ParseError> {
        let position = self.cursor.expect(TokenTag::Def)?.position;
        let (name, _) = self.cursor.expect_ident()?;
        self.cursor.expect(TokenTag::LParen)?;
        let mut params = Vec::new();
        if self.cursor.check(TokenTag::Ident) {
            loop {
                params.push(self.cursor.expect_ident()?.0);
                if !self.cursor.eat(TokenTag::Comma)? {
                    break;
                }
            }
        }
        self.cursor.expect(TokenTag::RParen)?;
        let body = self.parse_block()?;
        tracing::trace!(%name, params = params.len(), "function definition");
        Ok(Stmt::new(
            StmtKind::FunctionDef(FunctionDef { name, params, body }),
            position,
        ))
    }

    /// Any statement allowed inside a block.
    pub(crate) fn parse_block_statement(&mut self) -> Result<Option<Stmt>, ParseError> {
        let position = self.cursor.position();
        let kind = match self.cursor.current_tag() {
            TokenTag::Break => {
                self.cursor.advance()?;
                self.cursor.expect(TokenTag::Semicolon)?;
                StmtKind::Break
            }
            TokenTag::Return => {
                self.cursor.advance()?;
                let value = self.parse_expression()?;
                self.cursor.expect(TokenTag::Semicolon)?;
                StmtKind::Return(value)
            }
            TokenTag::Var => self.parse_var_decl()?,
            TokenTag::Ident => self.parse_assignment_or_call()?,
            TokenTag::If => self.parse_if()?,
            TokenTag::While => self.parse_while()?,
            TokenTag::For => self.parse_for()?,
            _ => match self.parse_expression()? {
                Some(expr) => {
                    self.cursor.expect(TokenTag::Semicolon)?;
                    StmtKind::Expr(expr)
                }
                None => return Ok(None),
            },
        };
        Ok(Some(Stmt::new(kind, position)))
    }

    /// `'{' {block_statement} '}'`
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        ensure_sufficient_stack(|| {
            let position = self.cursor.expect(TokenTag::LBrace)?.position;
            let mut statements = Vec::new();
            while let Some(statement) = self.parse_block_statement()? {
                statements.push(statement);
            }
            self.cursor.expect(TokenTag::RBrace)?;
            Ok(Block {
                statements,
                position,
            })
        })
    }

    /// `'var' ID '=' expression ';'`
    fn parse_var_decl(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(TokenTag::Var)?;
        let (name, _) = self.cursor.expect_ident()?;
        self.cursor.expect(TokenTag::Assign)?;
        let value = self.require_expression("No value after ASSIGN operator in variable declaration")?;
        self.cursor.expect(TokenTag::Semicolon)?;
        Ok(StmtKind::VarDecl { name, value })
    }

    /// `object ('=' expression)? ';'`
    ///
    /// A bare object followed by `;` is evaluated for its effect, usually a
    /// call. Anything else after the object must be an assignment.
    fn parse_assignment_or_call(&mut self) -> Result<StmtKind, ParseError> {
        let Some(target) = self.parse_object()? else {
            return Err(ParseError::unexpected_token(
                TokenTag::Ident,
                self.cursor.current_tag(),
                self.cursor.position(),
            ));
        };
        if self.cursor.eat(TokenTag::Semicolon)? {
            return Ok(StmtKind::Expr(target));
        }
        self.cursor.expect(TokenTag::Assign)?;
        let value = self.require_expression("No value after ASSIGN operator in assignment")?;
        self.cursor.expect(TokenTag::Semicolon)?;
        Ok(StmtKind::Assign { target, value })
    }

    /// `'if' '(' expr ')' block {'elif' '(' expr ')' block} ('else' block)?`
    fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(TokenTag::If)?;
        let mut branches = vec![self.parse_if_branch()?];
        while self.cursor.eat(TokenTag::Elif)? {
            branches.push(self.parse_if_branch()?);
        }
        let else_block = if self.cursor.eat(TokenTag::Else)? {
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(StmtKind::If {
            branches,
            else_block,
        })
    }

    fn parse_if_branch(&mut self) -> Result<IfBranch, ParseError> {
        let condition = self.parse_condition("No condition in IF statement")?;
        let block = self.parse_block()?;
        Ok(IfBranch { condition, block })
    }

    /// `'while' '(' expr ')' block`
    fn parse_while(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(TokenTag::While)?;
        let condition = self.parse_condition("No condition in WHILE statement")?;
        let body = self.parse_block()?;
        Ok(StmtKind::While { condition, body })
    }

    /// `'for' '(' ID 'in' expression ')' block`
    fn parse_for(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(TokenTag::For)?;
        self.cursor.expect(TokenTag::LParen)?;
        let (binding, _) = self.cursor.expect_ident()?;
        self.cursor.expect(TokenTag::In)?;
        let iterable = self.require_expression("No iterable in FOR statement")?;
        self.cursor.expect(TokenTag::RParen)?;
        let body = self.parse_block()?;
        Ok(StmtKind::For {
            binding,
            iterable,
            body,
        })
    }

    /// `'(' expression ')'` with a required expression.
    fn parse_condition(&mut self, missing: &'static str) -> Result<Expr, ParseError> {
        self.cursor.expect(TokenTag::LParen)?;
        let condition = self.require_expression(missing)?;
        self.cursor.expect(TokenTag::RParen)?;
        Ok(condition)
    }
}
