//! AST node types for the minwat language.
//!
//! Every node carries a [`Span`] and every expression carries its resolved
//! [`DataType`]: the parser type-checks as it builds the tree, so an untyped
//! node can never be constructed.
//!
//! The tree serializes to JSON with a `"type"` tag per node and camelCase
//! field names.

use serde::Serialize;
use std::fmt;

use crate::Span;

// ══════════════════════════════════════════════════════════════════════════════
// Data Types
// ══════════════════════════════════════════════════════════════════════════════

/// The two value types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DataType {
    Int,
    Double,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Int => f.write_str("Int"),
            DataType::Double => f.write_str("Double"),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Top Level
// ══════════════════════════════════════════════════════════════════════════════

/// A complete compilation unit: function declarations in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    #[serde(rename = "body")]
    pub functions: Vec<FunctionDecl>,
    pub span: Span,
}

/// A spanned identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// A typed name: a parameter or a local variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub name: Ident,
    pub data_type: DataType,
}

/// `function name(params): ReturnType { body }`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FunctionDeclaration", rename_all = "camelCase")]
pub struct FunctionDecl {
    pub name: Ident,
    pub params: Vec<Binding>,
    /// Variables declared directly in the top-level statement list of
    /// `body`. Declarations nested in `if` branches are not listed.
    pub locals: Vec<Binding>,
    pub return_type: DataType,
    pub body: Vec<Stmt>,
    pub span: Span,
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

/// A statement inside a function body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Stmt {
    #[serde(rename = "VariableDeclaration")]
    Let(VarDecl),
    #[serde(rename = "ReturnStatement")]
    Return(ReturnStmt),
    #[serde(rename = "IfStatement")]
    If(IfStmt),
    #[serde(rename = "ExpressionStatement")]
    Expr(ExprStmt),
}

/// The declaring keyword of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VarKind {
    Let,
    Const,
}

/// `let name[: Type] = initializer;` or `const ...`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VarDecl {
    pub kind: VarKind,
    pub name: Ident,
    pub data_type: DataType,
    pub initializer: Expr,
    pub is_const: bool,
    pub span: Span,
}

/// `return argument;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnStmt {
    pub argument: Expr,
    pub span: Span,
}

/// `if (condition) { consequent } [else { alternate }]`
///
/// An `else if` chain is stored as an alternate holding a single `If`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStmt {
    pub condition: Expr,
    pub consequent: Vec<Stmt>,
    pub alternate: Option<Vec<Stmt>>,
    pub span: Span,
}

/// `expression;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExprStmt {
    pub expression: Expr,
    pub span: Span,
}

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// An expression with its resolved type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expr {
    #[serde(flatten)]
    pub kind: ExprKind,
    pub data_type: DataType,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, data_type: DataType, span: Span) -> Self {
        Self {
            kind,
            data_type,
            span,
        }
    }
}

/// Expression variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ExprKind {
    /// `42` or `3.14`
    #[serde(rename = "NumericLiteral")]
    Number { value: f64 },

    /// A variable reference.
    #[serde(rename = "Identifier")]
    Identifier { name: String },

    /// `-operand`
    #[serde(rename = "UnaryExpression")]
    Unary {
        #[serde(rename = "operator")]
        op: UnaryOp,
        operand: Box<Expr>,
    },

    /// `left op right`
    #[serde(rename = "BinaryExpression")]
    Binary {
        #[serde(rename = "operator")]
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// `name = value`. Only identifiers are assignable.
    #[serde(rename = "AssignmentExpression")]
    Assign {
        #[serde(rename = "left")]
        target: Ident,
        #[serde(rename = "right")]
        value: Box<Expr>,
    },

    /// `callee(args)`
    #[serde(rename = "CallExpression")]
    Call { callee: Ident, args: Vec<Expr> },
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessEq,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = ">=")]
    GreaterEq,
}

impl BinOp {
    /// Returns `true` for `== != < <= > >=`.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinOp::Eq
                | BinOp::NotEq
                | BinOp::Less
                | BinOp::LessEq
                | BinOp::Greater
                | BinOp::GreaterEq
        )
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Eq => "==",
            BinOp::NotEq => "!=",
            BinOp::Less => "<",
            BinOp::LessEq => "<=",
            BinOp::Greater => ">",
            BinOp::GreaterEq => ">=",
        };
        f.write_str(symbol)
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOp {
    #[serde(rename = "-")]
    Neg,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: f64) -> Expr {
        Expr::new(ExprKind::Number { value }, DataType::Int, Span::point(1, 1))
    }

    #[test]
    fn test_comparison_ops() {
        assert!(BinOp::Less.is_comparison());
        assert!(BinOp::NotEq.is_comparison());
        assert!(!BinOp::Div.is_comparison());
    }

    #[test]
    fn test_expr_json_shape() {
        let expr = Expr::new(
            ExprKind::Binary {
                op: BinOp::Sub,
                left: Box::new(int(2.0)),
                right: Box::new(int(3.0)),
            },
            DataType::Int,
            Span::new(1, 1, 1, 5),
        );
        let json = serde_json::to_value(&expr).unwrap();
        assert_eq!(json["type"], "BinaryExpression");
        assert_eq!(json["operator"], "-");
        assert_eq!(json["dataType"], "Int");
        assert_eq!(json["left"]["type"], "NumericLiteral");
        assert_eq!(json["right"]["value"], 3.0);
    }

    #[test]
    fn test_stmt_json_shape() {
        let stmt = Stmt::Let(VarDecl {
            kind: VarKind::Const,
            name: Ident::new("x", Span::point(1, 7)),
            data_type: DataType::Int,
            initializer: int(1.0),
            is_const: true,
            span: Span::new(1, 1, 1, 12),
        });
        let json = serde_json::to_value(&stmt).unwrap();
        assert_eq!(json["type"], "VariableDeclaration");
        assert_eq!(json["kind"], "const");
        assert_eq!(json["isConst"], true);
        assert_eq!(json["name"]["name"], "x");
        assert_eq!(json["span"]["end_column"], 12);
    }
}
