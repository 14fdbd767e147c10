//! Expression code generation.
//!
//! Every expression pushes its instructions onto the caller's buffer, one
//! instruction per entry. Assignments consume their value; everything else
//! leaves exactly one value on the stack.

use minwat_types::ast::*;

use crate::compiler::FuncContext;
use crate::types::{binary_opcode, const_instr, wat_type, INT_TO_DOUBLE};

/// Emit a single expression.
pub fn emit_expr(expr: &Expr, ctx: &FuncContext, out: &mut Vec<String>) {
    match &expr.kind {
        ExprKind::Number { value } => out.push(const_instr(*value, expr.data_type)),
        ExprKind::Identifier { name } => out.push(format!("local.get ${name}")),
        ExprKind::Unary { op, operand } => emit_unary(*op, operand, expr.data_type, ctx, out),
        ExprKind::Binary { op, left, right } => {
            emit_binary(*op, left, right, expr.data_type, ctx, out)
        }
        ExprKind::Assign { target, value } => {
            emit_expr(value, ctx, out);
            out.push(format!("local.set ${}", target.name));
        }
        ExprKind::Call { callee, args } => {
            for arg in args {
                emit_expr(arg, ctx, out);
            }
            out.push(format!("call ${}", callee.name));
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Operators
// ══════════════════════════════════════════════════════════════════════════════

/// `-x` lowers to `0 - x` in the operand's type.
fn emit_unary(
    op: UnaryOp,
    operand: &Expr,
    data_type: DataType,
    ctx: &FuncContext,
    out: &mut Vec<String>,
) {
    match op {
        UnaryOp::Neg => {
            out.push(format!("{}.const 0", wat_type(data_type)));
            emit_expr(operand, ctx, out);
            out.push(format!("{}.sub", wat_type(data_type)));
        }
    }
}

fn emit_binary(
    op: BinOp,
    left: &Expr,
    right: &Expr,
    result_type: DataType,
    ctx: &FuncContext,
    out: &mut Vec<String>,
) {
    // Comparisons always yield Int; the opcode follows what is being compared.
    let operand_type = if op.is_comparison() {
        left.data_type
    } else {
        result_type
    };

    emit_operand(left, operand_type, ctx, out);
    emit_operand(right, operand_type, ctx, out);
    out.push(binary_opcode(op, operand_type).to_string());
}

fn emit_operand(operand: &Expr, operand_type: DataType, ctx: &FuncContext, out: &mut Vec<String>) {
    emit_expr(operand, ctx, out);
    if ctx.options.convert_mixed_operands
        && operand_type == DataType::Double
        && operand.data_type == DataType::Int
    {
        out.push(INT_TO_DOUBLE.to_string());
    }
}
