//! Core AST visitor for config key validation.
//!
//! Walks every call expression in a parsed module, recognizes config
//! accessor calls by shape, extracts the statically-known key from the
//! first argument, and validates it against the schema store.

use swc_common::{SourceMap, Span, Spanned};
use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread, Lit, MemberProp, Module};
use swc_ecma_visit::{Visit, VisitWith};

use crate::{issue::Issue, schema::SchemaStore};

/// Namespace aliases recognized as the configuration wrapper.
///
/// Matching is purely name-based: an unrelated local binding named `config`
/// would also match. This trades precision for speed and simplicity (no
/// import or type resolution) and is intentional.
pub const CONFIG_ALIASES: &[&str] = &["config", "viper"];

/// Accessor methods whose first argument is a config key.
pub const ACCESSOR_METHODS: &[&str] = &["GetString", "GetBool", "GetStringSlice"];

/// What the first argument of an accessor call turned out to be.
enum KeyArg {
    /// A statically-known string with the span of the literal token.
    Literal { key: String, span: Span },
    /// A literal token whose value could not be decoded. Skipped silently:
    /// reporting it as non-literal would be a false positive caused by a
    /// lexer edge case, not a real dynamic key.
    Unreadable,
    /// Any other expression kind; the key cannot be determined statically.
    Dynamic(Span),
}

/// Validates config accessor calls in a single file.
///
/// Stateless across call sites; the only shared data is the read-only
/// schema store, so instances may run concurrently over different files.
pub struct ConfigKeyVisitor<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    store: &'a SchemaStore,
    pub issues: Vec<Issue>,
}

impl<'a> ConfigKeyVisitor<'a> {
    pub fn new(file_path: &'a str, source_map: &'a SourceMap, store: &'a SchemaStore) -> Self {
        Self {
            file_path,
            source_map,
            store,
            issues: Vec::new(),
        }
    }

    /// Walk `module` and return all issues in traversal (source) order.
    pub fn check(mut self, module: &Module) -> Vec<Issue> {
        module.visit_with(&mut self);
        self.issues
    }

    fn inspect_call(&mut self, call: &CallExpr) {
        if !is_accessor_call(call) {
            return;
        }

        // A call with no arguments is malformed, but that is the
        // compiler's problem, not ours.
        let Some(arg) = call.args.first() else {
            return;
        };

        match classify_key_arg(arg) {
            KeyArg::Literal { key, span } => {
                if !self.store.is_defined(&key) {
                    let (line, col, source_line) = self.locate(span);
                    self.issues.push(Issue::undefined_key(
                        self.file_path,
                        line,
                        col,
                        &key,
                        source_line,
                    ));
                }
            }
            KeyArg::Unreadable => {}
            KeyArg::Dynamic(span) => {
                let (line, col, source_line) = self.locate(span);
                self.issues
                    .push(Issue::non_literal_key(self.file_path, line, col, source_line));
            }
        }
    }

    fn locate(&self, span: Span) -> (usize, usize, Option<String>) {
        let loc = self.source_map.lookup_char_pos(span.lo);
        let source_line = loc.file.get_line(loc.line - 1).map(|cow| cow.to_string());
        (loc.line, loc.col_display + 1, source_line)
    }
}

impl Visit for ConfigKeyVisitor<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        self.inspect_call(node);
        // Keep walking: an accessor call nested inside another call's
        // argument is still validated on its own.
        node.visit_children_with(self);
    }
}

/// Whether the call has the shape `<alias>.<method>(...)` with a recognized
/// alias and accessor method.
fn is_accessor_call(call: &CallExpr) -> bool {
    if let Callee::Expr(expr) = &call.callee
        && let Expr::Member(member) = &**expr
        && let Expr::Ident(obj_ident) = &*member.obj
        && let MemberProp::Ident(method_ident) = &member.prop
    {
        return CONFIG_ALIASES.contains(&obj_ident.sym.as_str())
            && ACCESSOR_METHODS.contains(&method_ident.sym.as_str());
    }
    false
}

fn classify_key_arg(arg: &ExprOrSpread) -> KeyArg {
    if arg.spread.is_some() {
        return KeyArg::Dynamic(arg.expr.span());
    }
    match &*arg.expr {
        Expr::Lit(Lit::Str(s)) => match s.value.as_str() {
            Some(key) => KeyArg::Literal {
                key: key.to_string(),
                span: s.span,
            },
            None => KeyArg::Unreadable,
        },
        // A template literal without expressions is still a single static
        // string. A missing cooked value means the escape sequences could
        // not be decoded.
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => {
            match tpl
                .quasis
                .first()
                .and_then(|q| q.cooked.as_ref())
                .and_then(|cooked| cooked.as_str())
            {
                Some(key) => KeyArg::Literal {
                    key: key.to_string(),
                    span: tpl.span,
                },
                None => KeyArg::Unreadable,
            }
        }
        expr => KeyArg::Dynamic(expr.span()),
    }
}
