//! Structured code-expression model for generated table sections
//!
//! Generated output is built as `Target::make(...)` expressions with chained
//! modifier calls, then rendered by one formatting routine. This keeps the
//! classification heuristics free of string templating concerns.

use std::fmt::Write as _;

/// A literal argument in generated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// String literal, escaped on render
    Str(String),
    /// Boolean literal
    Bool(bool),
}

impl Literal {
    fn render(&self) -> String {
        match self {
            Self::Str(value) => format!("\"{}\"", escape(value)),
            Self::Bool(value) => value.to_string(),
        }
    }
}

fn escape(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}

/// One chained method call on a rendered expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    /// Method name
    pub name: String,
    /// Literal arguments
    pub args: Vec<Literal>,
}

/// A `Target::make(...)` expression with chained modifier calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeExpr {
    /// Constructor target, e.g. `TextColumn`
    pub target: String,
    /// Arguments to `make`
    pub args: Vec<Literal>,
    /// Chained modifier calls, in application order
    pub calls: Vec<MethodCall>,
}

impl MakeExpr {
    /// Create an expression with no arguments or chained calls.
    #[must_use]
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            args: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Append an argument to `make`.
    #[must_use]
    pub fn arg(mut self, value: Literal) -> Self {
        self.args.push(value);
        self
    }

    /// Append a chained modifier call.
    #[must_use]
    pub fn call(mut self, name: &str, args: Vec<Literal>) -> Self {
        self.calls.push(MethodCall {
            name: name.to_string(),
            args,
        });
        self
    }

    /// Render the expression.
    ///
    /// Chained calls go on their own lines, indented one level past
    /// `indent` (the column the expression itself starts at).
    #[must_use]
    pub fn render(&self, indent: usize) -> String {
        let pad = " ".repeat(indent);
        let mut out = format!("{}::make({})", self.target, render_args(&self.args));
        for call in &self.calls {
            let _ = write!(out, "\n{pad}    .{}({})", call.name, render_args(&call.args));
        }
        out
    }
}

fn render_args(args: &[Literal]) -> String {
    args.iter()
        .map(Literal::render)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a comma-separated section body at the given indent.
///
/// An empty section renders as a lone `//` placeholder so the generated
/// list stays syntactically idiomatic and visibly signals that nothing was
/// chosen.
#[must_use]
pub fn render_section(exprs: &[MakeExpr], indent: usize) -> String {
    if exprs.is_empty() {
        return "//".to_string();
    }

    let separator = format!("\n{}", " ".repeat(indent));
    exprs
        .iter()
        .map(|expr| format!("{},", expr.render(indent)))
        .collect::<Vec<_>>()
        .join(&separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bare_make() {
        let expr = MakeExpr::new("EditAction");
        assert_eq!(expr.render(0), "EditAction::make()");
    }

    #[test]
    fn test_render_with_args_and_calls() {
        let expr = MakeExpr::new("TextColumn")
            .arg(Literal::Str("name".to_string()))
            .call("searchable", Vec::new())
            .call("toggleable", vec![Literal::Bool(true)]);

        assert_eq!(
            expr.render(8),
            "TextColumn::make(\"name\")\n            .searchable()\n            .toggleable(true)"
        );
    }

    #[test]
    fn test_render_escapes_string_literals() {
        let expr = MakeExpr::new("TextColumn").arg(Literal::Str("a\"b\\c".to_string()));
        assert_eq!(expr.render(0), "TextColumn::make(\"a\\\"b\\\\c\")");
    }

    #[test]
    fn test_render_section_separates_entries() {
        let exprs = vec![MakeExpr::new("EditAction"), MakeExpr::new("DeleteAction")];
        assert_eq!(
            render_section(&exprs, 8),
            "EditAction::make(),\n        DeleteAction::make(),"
        );
    }

    #[test]
    fn test_render_empty_section_placeholder() {
        assert_eq!(render_section(&[], 8), "//");
    }
}
