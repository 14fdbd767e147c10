//! Top-level declaration parsing: the program and its functions.

use minwat_lexer::token::TokenKind;
use minwat_types::ast::*;
use minwat_types::{ErrorCode, Result};

use crate::env::{FunctionSignature, Scope};
use crate::parser::Parser;

impl<'src> Parser<'src> {
    /// `Program = { FunctionDecl } Eof`
    pub(crate) fn parse_program(&mut self) -> Result<Program> {
        let start = self.current_span();
        let mut functions = Vec::new();
        while !self.at_end() {
            if !self.check(&TokenKind::Function) {
                return Err(self.error_at_current(
                    ErrorCode::UNEXPECTED_TOKEN,
                    format!(
                        "expected 'function' at top level, got '{}'",
                        self.peek_kind()
                    ),
                ));
            }
            functions.push(self.parse_function()?);
        }
        let span = start.merge(self.current_span());
        Ok(Program { functions, span })
    }

    /// `FunctionDecl = "function" Ident "(" [ Param { "," Param } ] ")" ":" Type Block`
    fn parse_function(&mut self) -> Result<FunctionDecl> {
        let start = self.advance().span; // eat `function`
        let name = self.expect_identifier()?;

        self.expect(&TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                params.push(self.parse_param()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen)?;

        if !self.check(&TokenKind::Colon) {
            return Err(self.error_at_current(
                ErrorCode::UNEXPECTED_TOKEN,
                format!(
                    "function '{}' needs a return type annotation, got '{}'",
                    name.name,
                    self.peek_kind()
                ),
            ));
        }
        self.advance();
        let return_type = self.parse_type_annotation()?;

        let mut scope = Scope::new();
        for param in &params {
            if !scope.declare(&param.name.name, param.data_type) {
                return Err(self.error_at(
                    ErrorCode::VARIABLE_ALREADY_DECLARED,
                    format!("parameter '{}' is already declared", param.name.name),
                    param.name.span,
                ));
            }
        }

        // The enclosing scope comes back whether or not the body parsed.
        let outer = std::mem::replace(&mut self.scope, scope);
        let body = self.parse_block();
        self.scope = outer;
        let (body, body_span) = body?;

        let locals = body
            .iter()
            .filter_map(|stmt| match stmt {
                Stmt::Let(decl) => Some(Binding {
                    name: decl.name.clone(),
                    data_type: decl.data_type,
                }),
                _ => None,
            })
            .collect();

        self.functions.register(
            &name.name,
            FunctionSignature {
                params: params.iter().map(|p| p.data_type).collect(),
                return_type,
            },
        );
        log::debug!(
            "registered function `{}` ({} params, returns {return_type})",
            name.name,
            params.len()
        );

        Ok(FunctionDecl {
            name,
            params,
            locals,
            return_type,
            body,
            span: start.merge(body_span),
        })
    }

    /// `Param = Ident ":" Type`
    fn parse_param(&mut self) -> Result<Binding> {
        let name = self.expect_identifier()?;
        if !self.check(&TokenKind::Colon) {
            return Err(self.error_at_current(
                ErrorCode::UNEXPECTED_TOKEN,
                format!(
                    "parameter '{}' needs a type annotation, got '{}'",
                    name.name,
                    self.peek_kind()
                ),
            ));
        }
        self.advance();
        let data_type = self.parse_type_annotation()?;
        Ok(Binding { name, data_type })
    }
}
