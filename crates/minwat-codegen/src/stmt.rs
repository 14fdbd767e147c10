//! Statement code generation.

use minwat_types::ast::*;

use crate::compiler::FuncContext;
use crate::expr::emit_expr;

/// Emit a function body.
///
/// With `drop_expression_values` on, the final statement keeps its value so
/// it can serve as the function result.
pub fn emit_body(stmts: &[Stmt], ctx: &FuncContext, out: &mut Vec<String>) {
    let last = stmts.len().saturating_sub(1);
    for (i, stmt) in stmts.iter().enumerate() {
        emit_stmt(stmt, ctx, i == last, out);
    }
}

/// Emit a statement list nested inside a branch.
pub fn emit_stmts(stmts: &[Stmt], ctx: &FuncContext, out: &mut Vec<String>) {
    for stmt in stmts {
        emit_stmt(stmt, ctx, false, out);
    }
}

/// Emit a single statement. `keep_value` suppresses the trailing `drop`.
pub fn emit_stmt(stmt: &Stmt, ctx: &FuncContext, keep_value: bool, out: &mut Vec<String>) {
    match stmt {
        Stmt::Let(decl) => {
            emit_expr(&decl.initializer, ctx, out);
            out.push(format!("local.set ${}", decl.name.name));
        }
        Stmt::Return(ret) => emit_expr(&ret.argument, ctx, out),
        Stmt::If(if_stmt) => emit_if(if_stmt, ctx, out),
        Stmt::Expr(expr_stmt) => {
            emit_expr(&expr_stmt.expression, ctx, out);
            if ctx.options.drop_expression_values
                && !keep_value
                && !matches!(expr_stmt.expression.kind, ExprKind::Assign { .. })
            {
                out.push("drop".to_string());
            }
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// If statement
// ══════════════════════════════════════════════════════════════════════════════

/// `<cond>` then `(if (then ...) (else ...))`; the `else` arm only when present.
fn emit_if(if_stmt: &IfStmt, ctx: &FuncContext, out: &mut Vec<String>) {
    emit_expr(&if_stmt.condition, ctx, out);

    let mut folded = format!("(if {}", branch("then", &if_stmt.consequent, ctx));
    if let Some(alternate) = &if_stmt.alternate {
        folded.push(' ');
        folded.push_str(&branch("else", alternate, ctx));
    }
    folded.push(')');
    out.push(folded);
}

fn branch(keyword: &str, stmts: &[Stmt], ctx: &FuncContext) -> String {
    let mut instrs = Vec::new();
    emit_stmts(stmts, ctx, &mut instrs);
    if instrs.is_empty() {
        format!("({keyword})")
    } else {
        format!("({keyword} {})", instrs.join("\n"))
    }
}
