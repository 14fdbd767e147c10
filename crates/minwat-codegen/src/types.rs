//! Type mapping and instruction selection.
//!
//! | Language type | WASM value type |
//! |---------------|-----------------|
//! | `Int`         | `i32`           |
//! | `Double`      | `f64`           |

use minwat_types::ast::{BinOp, DataType};

/// WASM value type for a language type.
pub fn wat_type(data_type: DataType) -> &'static str {
    match data_type {
        DataType::Int => "i32",
        DataType::Double => "f64",
    }
}

/// Instruction for a binary operator on operands of `operand_type`.
///
/// Integer division and ordering comparisons use the signed variants.
pub fn binary_opcode(op: BinOp, operand_type: DataType) -> &'static str {
    match (op, operand_type) {
        (BinOp::Add, DataType::Int) => "i32.add",
        (BinOp::Sub, DataType::Int) => "i32.sub",
        (BinOp::Mul, DataType::Int) => "i32.mul",
        (BinOp::Div, DataType::Int) => "i32.div_s",
        (BinOp::Eq, DataType::Int) => "i32.eq",
        (BinOp::NotEq, DataType::Int) => "i32.ne",
        (BinOp::Less, DataType::Int) => "i32.lt_s",
        (BinOp::LessEq, DataType::Int) => "i32.le_s",
        (BinOp::Greater, DataType::Int) => "i32.gt_s",
        (BinOp::GreaterEq, DataType::Int) => "i32.ge_s",

        (BinOp::Add, DataType::Double) => "f64.add",
        (BinOp::Sub, DataType::Double) => "f64.sub",
        (BinOp::Mul, DataType::Double) => "f64.mul",
        (BinOp::Div, DataType::Double) => "f64.div",
        (BinOp::Eq, DataType::Double) => "f64.eq",
        (BinOp::NotEq, DataType::Double) => "f64.ne",
        (BinOp::Less, DataType::Double) => "f64.lt",
        (BinOp::LessEq, DataType::Double) => "f64.le",
        (BinOp::Greater, DataType::Double) => "f64.gt",
        (BinOp::GreaterEq, DataType::Double) => "f64.ge",
    }
}

/// `t.const <value>` for a literal of the given type.
pub fn const_instr(value: f64, data_type: DataType) -> String {
    match data_type {
        // The parser only admits integers up to u32::MAX; `i32.const` wraps
        // anything above i32::MAX.
        DataType::Int => format!("i32.const {}", value as i64),
        DataType::Double => format!("f64.const {value:?}"),
    }
}

/// Converts an `i32` on top of the stack to `f64`.
pub const INT_TO_DOUBLE: &str = "f64.convert_i32_s";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wat_types() {
        assert_eq!(wat_type(DataType::Int), "i32");
        assert_eq!(wat_type(DataType::Double), "f64");
    }

    #[test]
    fn test_signed_variants_only_for_int() {
        assert_eq!(binary_opcode(BinOp::Div, DataType::Int), "i32.div_s");
        assert_eq!(binary_opcode(BinOp::Div, DataType::Double), "f64.div");
        assert_eq!(binary_opcode(BinOp::Greater, DataType::Int), "i32.gt_s");
        assert_eq!(binary_opcode(BinOp::Greater, DataType::Double), "f64.gt");
        assert_eq!(binary_opcode(BinOp::LessEq, DataType::Int), "i32.le_s");
        assert_eq!(binary_opcode(BinOp::GreaterEq, DataType::Double), "f64.ge");
    }

    #[test]
    fn test_shared_opcode_names() {
        for (op, name) in [
            (BinOp::Add, "add"),
            (BinOp::Sub, "sub"),
            (BinOp::Mul, "mul"),
            (BinOp::Eq, "eq"),
            (BinOp::NotEq, "ne"),
        ] {
            assert_eq!(binary_opcode(op, DataType::Int), format!("i32.{name}"));
            assert_eq!(binary_opcode(op, DataType::Double), format!("f64.{name}"));
        }
    }

    #[test]
    fn test_const_formatting() {
        assert_eq!(const_instr(7.0, DataType::Int), "i32.const 7");
        assert_eq!(const_instr(-3.0, DataType::Int), "i32.const -3");
        assert_eq!(const_instr(2147483648.0, DataType::Int), "i32.const 2147483648");
        assert_eq!(const_instr(4294967295.0, DataType::Int), "i32.const 4294967295");
        assert_eq!(const_instr(5.0, DataType::Double), "f64.const 5.0");
        assert_eq!(const_instr(0.25, DataType::Double), "f64.const 0.25");
    }
}
