//! Deterministic rendering of the model to Java source text.

use crate::body::{BinOp, Expr, Stmt};
use crate::class::{Annotation, JavaClass, Method};

const INDENT: &str = "    ";

impl JavaClass {
    /// Renders the complete compilable source unit. Same tree, same text.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if !self.package.is_empty() {
            out.push_str(&format!("package {};\n\n", self.package));
        }

        if !self.imports.is_empty() {
            for import in &self.imports {
                out.push_str(&format!("import {};\n", import));
            }
            out.push('\n');
        }

        for annotation in &self.annotations {
            out.push_str(&render_annotation(annotation));
            out.push('\n');
        }

        if let Some(keyword) = self.visibility.keyword() {
            out.push_str(keyword);
            out.push(' ');
        }
        out.push_str(&format!("class {}", self.name));
        if let Some(super_type) = &self.super_type {
            out.push_str(&format!(" extends {}", super_type));
        }
        out.push_str(" {\n");

        for field in &self.fields {
            out.push('\n');
            for annotation in &field.annotations {
                out.push_str(INDENT);
                out.push_str(&render_annotation(annotation));
                out.push('\n');
            }
            out.push_str(INDENT);
            if let Some(keyword) = field.visibility.keyword() {
                out.push_str(keyword);
                out.push(' ');
            }
            out.push_str(&format!("{} {};\n", field.type_name, field.name));
        }

        for method in &self.methods {
            out.push('\n');
            render_method(&mut out, method);
        }

        out.push_str("}\n");
        out
    }
}

fn render_method(out: &mut String, method: &Method) {
    for annotation in &method.annotations {
        out.push_str(INDENT);
        out.push_str(&render_annotation(annotation));
        out.push('\n');
    }

    out.push_str(INDENT);
    if let Some(keyword) = method.visibility.keyword() {
        out.push_str(keyword);
        out.push(' ');
    }
    if method.is_static {
        out.push_str("static ");
    }
    out.push_str(method.return_type.as_deref().unwrap_or("void"));
    out.push_str(&format!(
        " {}({}) {{\n",
        method.name,
        method.parameters.join(", ")
    ));

    for stmt in &method.body {
        render_stmt(out, stmt, 2);
    }

    out.push_str(INDENT);
    out.push_str("}\n");
}

fn render_annotation(annotation: &Annotation) -> String {
    match &annotation.literal_value {
        Some(literal) => format!("@{}({})", annotation.name, literal),
        None => format!("@{}", annotation.name),
    }
}

fn pad(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}

fn render_stmt(out: &mut String, stmt: &Stmt, level: usize) {
    match stmt {
        Stmt::Local {
            type_name,
            name,
            init,
        } => {
            pad(out, level);
            match init {
                Some(expr) => out.push_str(&format!(
                    "{} {} = {};\n",
                    type_name,
                    name,
                    render_expr(expr, level)
                )),
                None => out.push_str(&format!("{} {};\n", type_name, name)),
            }
        },
        Stmt::Assign { target, value } => {
            pad(out, level);
            out.push_str(&format!("{} = {};\n", target, render_expr(value, level)));
        },
        Stmt::Expr(expr) => {
            pad(out, level);
            out.push_str(&format!("{};\n", render_expr(expr, level)));
        },
        Stmt::Return(expr) => {
            pad(out, level);
            out.push_str(&format!("return {};\n", render_expr(expr, level)));
        },
        Stmt::Throw(expr) => {
            pad(out, level);
            out.push_str(&format!("throw {};\n", render_expr(expr, level)));
        },
        Stmt::Break => {
            pad(out, level);
            out.push_str("break;\n");
        },
        Stmt::If { cond, then } => {
            pad(out, level);
            out.push_str(&format!("if ({}) {{\n", render_inline(cond)));
            for inner in then {
                render_stmt(out, inner, level + 1);
            }
            pad(out, level);
            out.push_str("}\n");
        },
        Stmt::ForEach {
            type_name,
            var,
            iterable,
            body,
        } => {
            pad(out, level);
            out.push_str(&format!(
                "for ({} {} : {}) {{\n",
                type_name,
                var,
                render_inline(iterable)
            ));
            for inner in body {
                render_stmt(out, inner, level + 1);
            }
            pad(out, level);
            out.push_str("}\n");
        },
        Stmt::TryCatch {
            body,
            exception_type,
            var,
            handler,
        } => {
            pad(out, level);
            out.push_str("try {\n");
            for inner in body {
                render_stmt(out, inner, level + 1);
            }
            pad(out, level);
            out.push_str(&format!("}} catch ({} {}) {{\n", exception_type, var));
            for inner in handler {
                render_stmt(out, inner, level + 1);
            }
            pad(out, level);
            out.push_str("}\n");
        },
    }
}

/// Renders an expression at statement level. Chains with more than one link
/// break onto continuation lines, two indent units past the statement.
fn render_expr(expr: &Expr, level: usize) -> String {
    match expr {
        Expr::Chain { head, links } if links.len() > 1 => {
            let mut rendered = render_inline(head);
            let mut continuation = String::from("\n");
            for _ in 0..(level + 2) {
                continuation.push_str(INDENT);
            }
            for link in links {
                rendered.push_str(&continuation);
                rendered.push_str(&format!(".{}({})", link.name, render_args(&link.args)));
            }
            rendered
        },
        other => render_inline(other),
    }
}

fn render_args(args: &[Expr]) -> String {
    args.iter()
        .map(render_inline)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_inline(expr: &Expr) -> String {
    match expr {
        Expr::Ident(name) => name.clone(),
        Expr::Str(value) => format!("\"{}\"", escape(value)),
        Expr::Bool(value) => value.to_string(),
        Expr::Int(value) => value.to_string(),
        Expr::Null => "null".to_string(),
        Expr::ClassLiteral(type_name) => format!("{}.class", type_name),
        Expr::Index { target, index } => format!("{}[{}]", render_inline(target), index),
        Expr::New { type_name, args } => {
            format!("new {}({})", type_name, render_args(args))
        },
        Expr::Cast { type_name, expr } => {
            format!("({}) {}", type_name, render_inline(expr))
        },
        Expr::Binary { op, left, right } => {
            let op = match op {
                BinOp::Eq => "==",
                BinOp::NotEq => "!=",
                BinOp::Plus => "+",
            };
            format!("{} {} {}", render_inline(left), op, render_inline(right))
        },
        Expr::Call {
            receiver,
            method,
            args,
        } => match receiver {
            Some(receiver) => format!(
                "{}.{}({})",
                render_inline(receiver),
                method,
                render_args(args)
            ),
            None => format!("{}({})", method, render_args(args)),
        },
        Expr::Chain { head, links } => {
            let mut rendered = render_inline(head);
            for link in links {
                rendered.push_str(&format!(".{}({})", link.name, render_args(&link.args)));
            }
            rendered
        },
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
