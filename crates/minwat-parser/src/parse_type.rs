//! Type annotation parsing.

use minwat_lexer::token::TokenKind;
use minwat_types::ast::DataType;
use minwat_types::{ErrorCode, Result};

use crate::parser::Parser;

impl<'src> Parser<'src> {
    /// `Type = "Int" | "Double"`
    pub(crate) fn parse_type_annotation(&mut self) -> Result<DataType> {
        match self.peek_kind() {
            TokenKind::KwInt => {
                self.advance();
                Ok(DataType::Int)
            }
            TokenKind::KwDouble => {
                self.advance();
                Ok(DataType::Double)
            }
            TokenKind::Identifier(name) => Err(self.error_at_current(
                ErrorCode::UNEXPECTED_TOKEN,
                format!("unknown type '{name}'; expected 'Int' or 'Double'"),
            )),
            other => Err(self.error_at_current(
                ErrorCode::UNEXPECTED_TOKEN,
                format!("expected type 'Int' or 'Double', got '{other}'"),
            )),
        }
    }
}
