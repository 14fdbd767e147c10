//! Expression parsing with operator precedence and inline type checking.
//!
//! Precedence (lowest → highest):
//! 5. `=` (right-associative, identifiers only)
//! 4. `==`, `!=`, `<`, `<=`, `>`, `>=`
//! 3. `+`, `-`
//! 2. `*`, `/`
//! 1. unary `-`
//!
//! Every node is built with its data type already resolved.

use minwat_lexer::token::TokenKind;
use minwat_types::ast::*;
use minwat_types::{ErrorCode, Result, Span};

use crate::parser::{Parser, MAX_EXPR_DEPTH};

impl<'src> Parser<'src> {
    // ══════════════════════════════════════════════════════════════════════════
    // Entry Point
    // ══════════════════════════════════════════════════════════════════════════

    /// Parse an expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr> {
        if self.expr_depth >= MAX_EXPR_DEPTH {
            return Err(self.error_at_current(
                ErrorCode::NESTING_TOO_DEEP,
                format!("maximum expression nesting depth is {MAX_EXPR_DEPTH}"),
            ));
        }
        self.expr_depth += 1;
        let result = self.parse_assignment();
        self.expr_depth -= 1;
        result
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Precedence Chain
    // ══════════════════════════════════════════════════════════════════════════

    /// `Assignment = Comparison [ "=" Assignment ]`
    fn parse_assignment(&mut self) -> Result<Expr> {
        let grouped = self.check(&TokenKind::LParen);
        let left = self.parse_comparison()?;
        if !self.check(&TokenKind::Eq) {
            return Ok(left);
        }

        // `(x) = ...` is rejected: the target must be a bare identifier.
        let (ExprKind::Identifier { name }, false) = (&left.kind, grouped) else {
            return Err(self.error_at(
                ErrorCode::INVALID_ASSIGNMENT_TARGET,
                "invalid assignment target; only variables can be assigned",
                left.span,
            ));
        };
        let target = Ident::new(name.clone(), left.span);
        self.advance(); // eat `=`

        let value = self.parse_expression()?;
        if value.data_type != left.data_type {
            return Err(self.error_at(
                ErrorCode::TYPE_MISMATCH,
                format!(
                    "cannot assign {} to '{}' of type {}",
                    value.data_type, target.name, left.data_type
                ),
                value.span,
            ));
        }

        let span = left.span.merge(value.span);
        Ok(Expr::new(
            ExprKind::Assign {
                target,
                value: Box::new(value),
            },
            left.data_type,
            span,
        ))
    }

    /// `Comparison = Additive { CompOp Additive }`
    ///
    /// Both operands must have the same type; the result is always `Int`.
    fn parse_comparison(&mut self) -> Result<Expr> {
        let mut left = self.parse_additive()?;
        while let Some(op) = self.match_comparison_op() {
            let op_span = self.advance().span;
            let right = self.parse_additive()?;
            if left.data_type != right.data_type {
                return Err(self.error_at(
                    ErrorCode::TYPE_MISMATCH,
                    format!(
                        "cannot compare {} with {} using '{op}'",
                        left.data_type, right.data_type
                    ),
                    op_span,
                ));
            }
            left = binary(op, left, right, DataType::Int);
        }
        Ok(left)
    }

    /// Check if the current token is a comparison operator.
    fn match_comparison_op(&self) -> Option<BinOp> {
        match self.peek_kind() {
            TokenKind::EqEq => Some(BinOp::Eq),
            TokenKind::BangEq => Some(BinOp::NotEq),
            TokenKind::Less => Some(BinOp::Less),
            TokenKind::LessEq => Some(BinOp::LessEq),
            TokenKind::Greater => Some(BinOp::Greater),
            TokenKind::GreaterEq => Some(BinOp::GreaterEq),
            _ => None,
        }
    }

    /// `Additive = Multiplicative { ("+" | "-") Multiplicative }`
    fn parse_additive(&mut self) -> Result<Expr> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            left = arithmetic(op, left, right);
        }
        Ok(left)
    }

    /// `Multiplicative = Unary { ("*" | "/") Unary }`
    fn parse_multiplicative(&mut self) -> Result<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = arithmetic(op, left, right);
        }
        Ok(left)
    }

    /// `Unary = [ "-" ] Primary`
    fn parse_unary(&mut self) -> Result<Expr> {
        if !self.check(&TokenKind::Minus) {
            return self.parse_primary();
        }
        let start = self.advance().span;
        let operand = self.parse_primary()?;
        let data_type = operand.data_type;
        let span = start.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op: UnaryOp::Neg,
                operand: Box::new(operand),
            },
            data_type,
            span,
        ))
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Primary Expressions
    // ══════════════════════════════════════════════════════════════════════════

    /// `Primary = Number | Ident | Ident "(" Args ")" | "(" Expression ")"`
    fn parse_primary(&mut self) -> Result<Expr> {
        match self.peek_kind() {
            TokenKind::Number(lexeme) => self.parse_number(&lexeme),
            TokenKind::Identifier(_) if self.look_ahead(1) == TokenKind::LParen => {
                self.parse_call()
            }
            TokenKind::Identifier(name) => {
                let span = self.advance().span;
                match self.scope.lookup(&name) {
                    Some(data_type) => Ok(Expr::new(ExprKind::Identifier { name }, data_type, span)),
                    None => Err(self.error_at(
                        ErrorCode::UNDEFINED_VARIABLE,
                        format!("undefined variable '{name}'"),
                        span,
                    )),
                }
            }
            TokenKind::LParen => {
                let start = self.advance().span;
                let mut inner = self.parse_expression()?;
                let end = self.expect(&TokenKind::RParen)?.span;
                inner.span = start.merge(end);
                Ok(inner)
            }
            other => Err(self.error_at_current(
                ErrorCode::EXPECTED_EXPRESSION,
                format!("expected expression, got '{other}'"),
            )),
        }
    }

    /// Numeric literal: `Double` when the lexeme has a decimal point.
    ///
    /// Integer lexemes may use the full 32-bit pattern range, up to
    /// `4294967295`; values above `i32::MAX` wrap like `i32.const` does.
    fn parse_number(&mut self, lexeme: &str) -> Result<Expr> {
        let span = self.advance().span;
        if lexeme.contains('.') {
            let value: f64 = lexeme.parse().map_err(|_| {
                self.error_at(
                    ErrorCode::UNEXPECTED_TOKEN,
                    format!("malformed number '{lexeme}'"),
                    span,
                )
            })?;
            return Ok(Expr::new(ExprKind::Number { value }, DataType::Double, span));
        }
        let value: u32 = lexeme.parse().map_err(|_| {
            self.error_at(
                ErrorCode::INTEGER_OUT_OF_RANGE,
                format!("integer literal '{lexeme}' does not fit in 32 bits"),
                span,
            )
        })?;
        Ok(Expr::new(
            ExprKind::Number {
                value: f64::from(value),
            },
            DataType::Int,
            span,
        ))
    }

    /// `Call = Ident "(" [ Expression { "," Expression } ] ")"`
    ///
    /// Calls to a declared function are checked against its signature.
    /// Calls to any other name are accepted and typed `Double`.
    fn parse_call(&mut self) -> Result<Expr> {
        let callee = self.expect_identifier()?;
        self.expect(&TokenKind::LParen)?;
        let mut args = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expression()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        let end = self.expect(&TokenKind::RParen)?.span;

        let data_type = match self.functions.get(&callee.name) {
            Some(signature) => {
                if signature.params.len() != args.len() {
                    return Err(self.error_at(
                        ErrorCode::WRONG_ARG_COUNT,
                        format!(
                            "function '{}' expects {} argument(s), found {}",
                            callee.name,
                            signature.params.len(),
                            args.len()
                        ),
                        callee.span,
                    ));
                }
                for (index, (expected, arg)) in signature.params.iter().zip(&args).enumerate() {
                    if *expected != arg.data_type {
                        return Err(self.error_at(
                            ErrorCode::ARGUMENT_TYPE_MISMATCH,
                            format!(
                                "argument {index} of '{}' must be {expected}, found {}",
                                callee.name, arg.data_type
                            ),
                            arg.span,
                        ));
                    }
                }
                signature.return_type
            }
            None => {
                log::debug!(
                    "call to undeclared function `{}` assumed to return Double",
                    callee.name
                );
                DataType::Double
            }
        };

        let span = callee.span.merge(end);
        Ok(Expr::new(ExprKind::Call { callee, args }, data_type, span))
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Node Builders
// ══════════════════════════════════════════════════════════════════════════════

fn binary(op: BinOp, left: Expr, right: Expr, data_type: DataType) -> Expr {
    let span: Span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        data_type,
        span,
    )
}

/// `Double` if either side is `Double`, otherwise `Int`.
fn arithmetic(op: BinOp, left: Expr, right: Expr) -> Expr {
    let data_type = if left.data_type == DataType::Double || right.data_type == DataType::Double {
        DataType::Double
    } else {
        DataType::Int
    };
    binary(op, left, right, data_type)
}
