//! # Source parser
//!
//! Parses raw JSX/TSX text into [`ElementNode`] trees. The source is run
//! through a TypeScript-aware parser, then the syntax tree is scanned for
//! `return <jsx>` statements and bare JSX expression statements; each match
//! is lowered into a simplified, language-agnostic element tree. Attribute
//! values are resolved to literals where possible and to opaque marker
//! strings (`"[expression]"` and friends) where not.

use serde_json::{Map, Value};
use swc_core::common::{sync::Lrc, FileName, SourceMap};
use swc_core::ecma::ast::{
    ArrayLit, EsVersion, Expr, ExprStmt, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElement,
    JSXElementChild, JSXElementName, JSXExpr, JSXFragment, JSXObject, Lit, Module, ObjectLit,
    Prop, PropName, PropOrSpread, ReturnStmt,
};
use swc_core::ecma::parser::{lexer::Lexer, Parser, StringInput, Syntax, TsSyntax};
use swc_core::ecma::visit::{Visit, VisitWith};

use crate::element::{ElementChild, ElementNode, ARRAY_MARKER, EXPRESSION_MARKER, FUNCTION_MARKER, OBJECT_MARKER};
use crate::error::{ConvertError, ConvertResult};

/// Parses JSX/TSX source text into the top-level element trees it contains.
///
/// Roots are collected from `return <jsx>` statements and bare JSX
/// expression statements, in source order. Fails with
/// [`ConvertError::Parse`] if the text is not syntactically valid; a
/// partial tree is never returned.
pub fn parse(source: &str) -> ConvertResult<Vec<ElementNode>> {
    let module = parse_module(source)?;

    let mut collector = JsxCollector { roots: Vec::new() };
    module.visit_with(&mut collector);
    Ok(collector.roots)
}

fn parse_module(source: &str) -> ConvertResult<Module> {
    let cm: Lrc<SourceMap> = Default::default();
    let fm = cm.new_source_file(
        FileName::Custom("input.tsx".into()).into(),
        source.to_string(),
    );

    let lexer = Lexer::new(
        Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        EsVersion::latest(),
        StringInput::from(&*fm),
        None,
    );
    let mut parser = Parser::new_from(lexer);

    let module = parser
        .parse_module()
        .map_err(|e| ConvertError::Parse {
            message: e.into_kind().msg().to_string(),
        })?;

    // recovered errors still mean the input was not valid
    if let Some(err) = parser.take_errors().into_iter().next() {
        return Err(ConvertError::Parse {
            message: err.into_kind().msg().to_string(),
        });
    }

    Ok(module)
}

// ─────────────────────────── Root collection ───────────────────────────

struct JsxCollector {
    roots: Vec<ElementNode>,
}

impl Visit for JsxCollector {
    fn visit_return_stmt(&mut self, node: &ReturnStmt) {
        if let Some(arg) = &node.arg {
            if let Some(root) = lower_root(arg) {
                self.roots.push(root);
                return;
            }
        }
        node.visit_children_with(self);
    }

    fn visit_expr_stmt(&mut self, node: &ExprStmt) {
        if let Some(root) = lower_root(&node.expr) {
            self.roots.push(root);
            return;
        }
        node.visit_children_with(self);
    }
}

/// Lowers an expression to an element tree if it is a (possibly
/// parenthesized) JSX element or fragment.
fn lower_root(expr: &Expr) -> Option<ElementNode> {
    match expr {
        Expr::Paren(paren) => lower_root(&paren.expr),
        Expr::JSXElement(el) => Some(lower_element(el)),
        Expr::JSXFragment(frag) => Some(lower_fragment(frag)),
        _ => None,
    }
}

// ─────────────────────────── Lowering ───────────────────────────

fn lower_element(el: &JSXElement) -> ElementNode {
    let mut node = ElementNode::new(element_name(&el.opening.name));

    for attr in &el.opening.attrs {
        match attr {
            JSXAttrOrSpread::JSXAttr(attr) => {
                let name = attr_name(&attr.name);
                let value = attr_value(attr.value.as_ref());
                node.attributes.insert(name, value);
            }
            JSXAttrOrSpread::SpreadElement(_) => {
                node.attributes.insert(
                    "...spread".to_string(),
                    Value::String(EXPRESSION_MARKER.to_string()),
                );
            }
        }
    }

    node.children = lower_children(&el.children);
    node
}

/// Fragments carry no tag of their own; they lower to a bare `div`.
fn lower_fragment(frag: &JSXFragment) -> ElementNode {
    let mut node = ElementNode::new("div");
    node.children = lower_children(&frag.children);
    node
}

fn element_name(name: &JSXElementName) -> String {
    match name {
        JSXElementName::Ident(ident) => ident.sym.to_string(),
        JSXElementName::JSXMemberExpr(member) => {
            format!("{}.{}", object_name(&member.obj), member.prop.sym)
        }
        JSXElementName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
    }
}

fn object_name(obj: &JSXObject) -> String {
    match obj {
        JSXObject::Ident(ident) => ident.sym.to_string(),
        JSXObject::JSXMemberExpr(member) => {
            format!("{}.{}", object_name(&member.obj), member.prop.sym)
        }
    }
}

fn attr_name(name: &JSXAttrName) -> String {
    match name {
        JSXAttrName::Ident(ident) => ident.sym.to_string(),
        JSXAttrName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
    }
}

/// A valueless attribute is the boolean `true`; everything else resolves
/// through the literal extractor.
fn attr_value(value: Option<&JSXAttrValue>) -> Value {
    match value {
        None => Value::Bool(true),
        Some(JSXAttrValue::Lit(lit)) => lit_value(lit),
        Some(JSXAttrValue::JSXExprContainer(container)) => match &container.expr {
            JSXExpr::Expr(expr) => extract_literal(expr),
            JSXExpr::JSXEmptyExpr(_) => Value::String(EXPRESSION_MARKER.to_string()),
        },
        Some(JSXAttrValue::JSXElement(_)) | Some(JSXAttrValue::JSXFragment(_)) => {
            Value::String(EXPRESSION_MARKER.to_string())
        }
    }
}

fn lower_children(children: &[JSXElementChild]) -> Vec<ElementChild> {
    let mut out = Vec::new();
    for child in children {
        match child {
            JSXElementChild::JSXText(text) => {
                let trimmed = text.value.trim();
                if !trimmed.is_empty() {
                    out.push(ElementChild::Text(trimmed.to_string()));
                }
            }
            JSXElementChild::JSXExprContainer(container) => match &container.expr {
                JSXExpr::Expr(expr) => match expr.as_ref() {
                    Expr::Lit(Lit::Str(s)) => out.push(ElementChild::Text(s.value.to_string())),
                    Expr::Lit(Lit::Num(n)) => {
                        out.push(ElementChild::Text(format_number(n.value)))
                    }
                    _ => out.push(ElementChild::Text(EXPRESSION_MARKER.to_string())),
                },
                // {/* comment */}
                JSXExpr::JSXEmptyExpr(_) => {}
            },
            JSXElementChild::JSXElement(el) => {
                out.push(ElementChild::Element(lower_element(el)))
            }
            JSXElementChild::JSXFragment(frag) => {
                out.push(ElementChild::Element(lower_fragment(frag)))
            }
            JSXElementChild::JSXSpreadChild(_) => {
                out.push(ElementChild::Text(EXPRESSION_MARKER.to_string()))
            }
        }
    }
    out
}

// ─────────────────────────── Literal extraction ───────────────────────────

/// Best-effort static resolution of an attribute expression.
///
/// Literals and object/array literals resolve structurally; anything
/// dynamic resolves to an opaque marker instead of failing. Never errors.
fn extract_literal(expr: &Expr) -> Value {
    match expr {
        Expr::Paren(paren) => extract_literal(&paren.expr),
        Expr::Lit(lit) => lit_value(lit),
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => {
            let text = tpl
                .quasis
                .first()
                .and_then(|q| q.cooked.as_ref())
                .map(|c| c.to_string())
                .unwrap_or_default();
            Value::String(text)
        }
        Expr::Unary(unary) if unary.op == swc_core::ecma::ast::UnaryOp::Minus => {
            match unary.arg.as_ref() {
                Expr::Lit(Lit::Num(n)) => number_value(-n.value),
                _ => Value::String(EXPRESSION_MARKER.to_string()),
            }
        }
        Expr::Object(obj) => extract_object(obj),
        Expr::Array(arr) => extract_array(arr),
        _ => Value::String(EXPRESSION_MARKER.to_string()),
    }
}

fn extract_object(obj: &ObjectLit) -> Value {
    let mut map = Map::new();
    for prop in &obj.props {
        let kv = match prop {
            PropOrSpread::Prop(prop) => match prop.as_ref() {
                Prop::KeyValue(kv) => kv,
                // methods, getters, shorthand refs: the shape is no longer
                // a plain data literal
                _ => return Value::String(OBJECT_MARKER.to_string()),
            },
            PropOrSpread::Spread(_) => return Value::String(OBJECT_MARKER.to_string()),
        };
        let key = match &kv.key {
            PropName::Ident(ident) => ident.sym.to_string(),
            PropName::Str(s) => s.value.to_string(),
            PropName::Num(n) => format_number(n.value),
            _ => return Value::String(OBJECT_MARKER.to_string()),
        };
        let value = match kv.value.as_ref() {
            Expr::Arrow(_) | Expr::Fn(_) => Value::String(FUNCTION_MARKER.to_string()),
            other => extract_literal(other),
        };
        map.insert(key, value);
    }
    Value::Object(map)
}

fn extract_array(arr: &ArrayLit) -> Value {
    let mut out = Vec::with_capacity(arr.elems.len());
    for elem in &arr.elems {
        match elem {
            Some(elem) if elem.spread.is_none() => out.push(extract_literal(&elem.expr)),
            // holes and spreads break structural extraction
            _ => return Value::String(ARRAY_MARKER.to_string()),
        }
    }
    Value::Array(out)
}

fn lit_value(lit: &Lit) -> Value {
    match lit {
        Lit::Str(s) => Value::String(s.value.to_string()),
        Lit::Num(n) => number_value(n.value),
        Lit::Bool(b) => Value::Bool(b.value),
        Lit::Null(_) => Value::Null,
        _ => Value::String(EXPRESSION_MARKER.to_string()),
    }
}

/// Integral floats become JSON integers so `count={3}` resolves to `3`,
/// not `3.0`.
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(EXPRESSION_MARKER.to_string()))
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
