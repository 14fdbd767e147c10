//! Statement parsing.

use crate::parser::{Parser, MAX_IF_DEPTH};
use minwat_lexer::token::TokenKind;
use minwat_types::ast::*;
use minwat_types::{ErrorCode, Result, Span};

impl<'src> Parser<'src> {
    /// Parse a block of statements: `{ stmts... }`
    pub(crate) fn parse_block(&mut self) -> Result<(Vec<Stmt>, Span)> {
        let start = self.expect(&TokenKind::LBrace)?.span;
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.at_end() {
            stmts.push(self.parse_statement()?);
        }
        let end = self.expect(&TokenKind::RBrace)?.span;
        Ok((stmts, start.merge(end)))
    }

    /// Parse a single statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt> {
        match self.peek_kind() {
            TokenKind::Let | TokenKind::Const => self.parse_var_decl().map(Stmt::Let),
            TokenKind::Return => self.parse_return_stmt(),
            TokenKind::If => self.parse_if_stmt().map(Stmt::If),
            _ => {
                let expression = self.parse_expression()?;
                let end = self.expect(&TokenKind::Semicolon)?.span;
                let span = expression.span.merge(end);
                Ok(Stmt::Expr(ExprStmt { expression, span }))
            }
        }
    }

    /// `("let" | "const") name [: Type] = expr ;`
    fn parse_var_decl(&mut self) -> Result<VarDecl> {
        let keyword = self.advance();
        let kind = if keyword.kind == TokenKind::Const {
            VarKind::Const
        } else {
            VarKind::Let
        };

        let name = self.expect_identifier()?;
        if self.scope.lookup(&name.name).is_some() {
            return Err(self.error_at(
                ErrorCode::VARIABLE_ALREADY_DECLARED,
                format!("variable '{}' is already declared", name.name),
                name.span,
            ));
        }

        let annotation = if self.eat(&TokenKind::Colon) {
            Some(self.parse_type_annotation()?)
        } else {
            None
        };

        self.expect(&TokenKind::Eq)?;
        let initializer = self.parse_expression()?;

        let data_type = match annotation {
            Some(declared) if declared != initializer.data_type => {
                return Err(self.error_at(
                    ErrorCode::TYPE_MISMATCH,
                    format!(
                        "variable '{}' is declared as {declared} but initialized with {}",
                        name.name, initializer.data_type
                    ),
                    initializer.span,
                ));
            }
            Some(declared) => declared,
            None => initializer.data_type,
        };

        let end = self.expect(&TokenKind::Semicolon)?.span;
        self.scope.declare(&name.name, data_type);

        Ok(VarDecl {
            kind,
            name,
            data_type,
            initializer,
            is_const: kind == VarKind::Const,
            span: keyword.span.merge(end),
        })
    }

    /// `return expr ;`
    fn parse_return_stmt(&mut self) -> Result<Stmt> {
        let start = self.advance().span; // eat `return`
        let argument = self.parse_expression()?;
        let end = self.expect(&TokenKind::Semicolon)?.span;
        Ok(Stmt::Return(ReturnStmt {
            argument,
            span: start.merge(end),
        }))
    }

    /// `if ( expr ) Block [ else ( Block | IfStmt ) ]`
    fn parse_if_stmt(&mut self) -> Result<IfStmt> {
        if self.if_depth >= MAX_IF_DEPTH {
            return Err(self.error_at_current(
                ErrorCode::NESTING_TOO_DEEP,
                format!("maximum if nesting depth is {MAX_IF_DEPTH}"),
            ));
        }
        self.if_depth += 1;
        let result = self.parse_if_body();
        self.if_depth -= 1;
        result
    }

    fn parse_if_body(&mut self) -> Result<IfStmt> {
        let start = self.advance().span; // eat `if`
        self.expect(&TokenKind::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;

        if condition.data_type != DataType::Int {
            return Err(self.error_at(
                ErrorCode::NON_INT_CONDITION,
                format!("if condition must be Int, found {}", condition.data_type),
                condition.span,
            ));
        }

        let (consequent, mut span) = self.parse_block()?;
        span = start.merge(span);

        let alternate = if self.eat(&TokenKind::Else) {
            if self.check(&TokenKind::If) {
                let nested = self.parse_if_stmt()?;
                span = span.merge(nested.span);
                Some(vec![Stmt::If(nested)])
            } else {
                let (stmts, else_span) = self.parse_block()?;
                span = span.merge(else_span);
                Some(stmts)
            }
        } else {
            None
        };

        Ok(IfStmt {
            condition,
            consequent,
            alternate,
            span,
        })
    }
}
