//! Module assembly: turns a typed [`Program`] into a WAT module.

use minwat_types::ast::*;

use crate::options::CodegenOptions;
use crate::stmt::emit_body;
use crate::types::wat_type;

// ══════════════════════════════════════════════════════════════════════════════
// Public API
// ══════════════════════════════════════════════════════════════════════════════

/// Generate WAT text for a program with default options.
pub fn generate(program: &Program) -> String {
    generate_with_options(program, &CodegenOptions::default())
}

/// Generate WAT text for a program.
pub fn generate_with_options(program: &Program, options: &CodegenOptions) -> String {
    Compiler::new(program, options).compile()
}

// ══════════════════════════════════════════════════════════════════════════════
// Compiler
// ══════════════════════════════════════════════════════════════════════════════

struct Compiler<'a> {
    program: &'a Program,
    options: &'a CodegenOptions,
}

impl<'a> Compiler<'a> {
    fn new(program: &'a Program, options: &'a CodegenOptions) -> Self {
        Self { program, options }
    }

    fn compile(&self) -> String {
        if self.program.functions.is_empty() {
            return "(module)".to_string();
        }

        let funcs = self.emit_functions();
        let exports = self.emit_exports();
        log::debug!(
            "generated {} function(s) with options {:?}",
            self.program.functions.len(),
            self.options
        );
        format!("(module\n{funcs}\n{exports}\n)")
    }

    // ── Function section ─────────────────────────────────────────────────

    fn emit_functions(&self) -> String {
        self.program
            .functions
            .iter()
            .map(|func| self.emit_function(func))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn emit_function(&self, func: &FunctionDecl) -> String {
        log::trace!("emitting function `{}`", func.name.name);

        let mut parts = vec![format!("${}", func.name.name)];
        for param in &func.params {
            parts.push(format!(
                "(param ${} {})",
                param.name.name,
                wat_type(param.data_type)
            ));
        }
        parts.push(format!("(result {})", wat_type(func.return_type)));
        for local in self.locals(func) {
            parts.push(format!(
                "(local ${} {})",
                local.name.name,
                wat_type(local.data_type)
            ));
        }

        let ctx = FuncContext {
            options: self.options,
        };
        let mut body = Vec::new();
        emit_body(&func.body, &ctx, &mut body);
        if !body.is_empty() {
            parts.push(body.join("\n"));
        }

        format!("(func {})", parts.join(" "))
    }

    // ── Export section ───────────────────────────────────────────────────

    fn emit_exports(&self) -> String {
        self.program
            .functions
            .iter()
            .map(|func| format!("(export \"{0}\" (func ${0}))", func.name.name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ── Helpers ──────────────────────────────────────────────────────────

    /// Locals to declare for a function: the parser's top-level list, or
    /// every declaration in the body when hoisting is on.
    fn locals(&self, func: &FunctionDecl) -> Vec<Binding> {
        if !self.options.hoist_nested_locals {
            return func.locals.clone();
        }
        let mut locals = Vec::new();
        collect_declarations(&func.body, &mut locals);
        locals
    }
}

/// All variable declarations in source order, descending into `if` branches.
fn collect_declarations(stmts: &[Stmt], locals: &mut Vec<Binding>) {
    for stmt in stmts {
        match stmt {
            Stmt::Let(decl) => locals.push(Binding {
                name: decl.name.clone(),
                data_type: decl.data_type,
            }),
            Stmt::If(if_stmt) => {
                collect_declarations(&if_stmt.consequent, locals);
                if let Some(alternate) = &if_stmt.alternate {
                    collect_declarations(alternate, locals);
                }
            }
            Stmt::Return(_) | Stmt::Expr(_) => {}
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Function Context
// ══════════════════════════════════════════════════════════════════════════════

/// Per-function state threaded through expression and statement emission.
pub struct FuncContext<'a> {
    pub options: &'a CodegenOptions,
}
