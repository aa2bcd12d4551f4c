//! Writer for generated Starlark BUILD files.
//!
//! This only covers what generated BUILD files need: `load` statements,
//! rule calls with keyword arguments, strings, identifiers, lists and
//! string dictionaries. Output follows buildifier's BUILD-file layout, so
//! regenerating a file and running buildifier over it is a no-op.
//!
//! # Layout Rules
//! - Lists with more than one element (or marked multiline) put each element
//!   on its own line with a trailing comma.
//! - Calls with more than one argument, or with a multiline argument, put
//!   each argument on its own line.
//! - Consecutive `load` statements and consecutive comments are kept
//!   together; everything else is separated by a blank line.

use std::fmt::Write;

const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Str(String),
    Ident(String),
    List { items: Vec<Expr>, multiline: bool },
    /// String-keyed dictionary of strings.
    Dict(Vec<(String, String)>),
}

impl Expr {
    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    /// A list of string literals.
    pub fn str_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Expr::List {
            items: items.into_iter().map(Expr::str).collect(),
            multiline: false,
        }
    }

    /// Force a list onto multiple lines even if it has a single element.
    pub fn multiline(self, force: bool) -> Self {
        match self {
            Expr::List { items, multiline } => Expr::List {
                items,
                multiline: multiline || force,
            },
            other => other,
        }
    }

    fn is_multiline(&self) -> bool {
        match self {
            Expr::List { items, multiline } => *multiline || items.len() > 1,
            Expr::Dict(entries) => !entries.is_empty(),
            Expr::Str(_) | Expr::Ident(_) => false,
        }
    }

    fn write(&self, out: &mut String, indent: usize) {
        match self {
            Expr::Str(value) => out.push_str(&quote(value)),
            Expr::Ident(name) => out.push_str(name),
            Expr::List { items, .. } if !self.is_multiline() => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.write(out, indent);
                }
                out.push(']');
            }
            Expr::List { items, .. } => {
                out.push_str("[\n");
                for item in items {
                    push_indent(out, indent + 1);
                    item.write(out, indent + 1);
                    out.push_str(",\n");
                }
                push_indent(out, indent);
                out.push(']');
            }
            Expr::Dict(entries) if entries.is_empty() => out.push_str("{}"),
            Expr::Dict(entries) => {
                out.push_str("{\n");
                for (key, value) in entries {
                    push_indent(out, indent + 1);
                    let _ = writeln!(out, "{}: {},", quote(key), quote(value));
                }
                push_indent(out, indent);
                out.push('}');
            }
        }
    }
}

/// A rule or macro invocation with keyword arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub function: String,
    pub kwargs: Vec<(String, Expr)>,
}

impl Call {
    pub fn new(function: impl Into<String>) -> Self {
        Call {
            function: function.into(),
            kwargs: Vec::new(),
        }
    }

    pub fn arg(mut self, key: impl Into<String>, value: Expr) -> Self {
        self.kwargs.push((key.into(), value));
        self
    }

    pub fn str_arg(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.arg(key, Expr::str(value))
    }

    /// Add `key = value` only when there is a value.
    pub fn opt_str_arg(self, key: impl Into<String>, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.str_arg(key, value),
            None => self,
        }
    }

    fn write(&self, out: &mut String) {
        out.push_str(&self.function);
        out.push('(');
        let multiline = self.kwargs.len() > 1 || self.kwargs.iter().any(|(_, v)| v.is_multiline());
        if !multiline {
            if let Some((key, value)) = self.kwargs.first() {
                let _ = write!(out, "{key} = ");
                value.write(out, 0);
            }
            out.push(')');
            return;
        }
        out.push('\n');
        for (key, value) in &self.kwargs {
            let _ = write!(out, "{INDENT}{key} = ");
            value.write(out, 1);
            out.push_str(",\n");
        }
        out.push(')');
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A comment line, without the leading `#`.
    Comment(String),
    Load { module: String, symbols: Vec<String> },
    Call(Call),
}

impl Statement {
    /// A load statement with its symbols in sorted order.
    pub fn load<I, S>(module: impl Into<String>, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        symbols.sort();
        Statement::Load {
            module: module.into(),
            symbols,
        }
    }

    fn write(&self, out: &mut String) {
        match self {
            Statement::Comment(text) => {
                let _ = write!(out, "# {}", text.trim());
            }
            Statement::Load { module, symbols } => {
                out.push_str("load(");
                out.push_str(&quote(module));
                for symbol in symbols {
                    out.push_str(", ");
                    out.push_str(&quote(symbol));
                }
                out.push(')');
            }
            Statement::Call(call) => call.write(out),
        }
    }

    fn compacts_with(&self, next: &Statement) -> bool {
        matches!(
            (self, next),
            (Statement::Load { .. }, Statement::Load { .. })
                | (Statement::Comment(_), Statement::Comment(_))
        )
    }
}

impl From<Call> for Statement {
    fn from(call: Call) -> Self {
        Statement::Call(call)
    }
}

/// Render statements as the contents of a BUILD file.
pub fn serialize(statements: &[Statement]) -> String {
    let mut out = String::new();
    for (i, statement) in statements.iter().enumerate() {
        if i > 0 {
            out.push('\n');
            if !statements[i - 1].compacts_with(statement) {
                out.push('\n');
            }
        }
        statement.write(&mut out);
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Quote a string as a double-quoted Starlark literal.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}
