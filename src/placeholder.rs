//! # Placeholder strategy
//!
//! Custom components the mapper cannot understand are never dropped.
//! Instead they become passthrough placeholder blocks that keep the
//! original tag name, a best-effort serialization of the props, and a
//! JSX-like reconstruction of the whole node so a human can rebuild it
//! later.

use serde_json::{Map, Value};

use crate::block::{self, Block};
use crate::element::{ElementChild, ElementNode, ARRAY_MARKER, OBJECT_MARKER};

/// Tags the block mapper understands directly. Lowercase; membership is
/// exact, not prefix-based.
const STANDARD_TAGS: &[&str] = &[
    "div", "span", "p", "h1", "h2", "h3", "h4", "h5", "h6", "button", "a", "img", "ul", "ol",
    "li", "section", "article", "header", "footer", "nav", "main", "aside", "blockquote",
    "code", "pre", "strong", "em", "small",
];

const PLACEHOLDER_REASON: &str =
    "Custom component cannot be converted automatically; the original markup is preserved in notes for manual replacement";

/// True when the tag is outside the standard allow-list and must become a
/// placeholder block. Case-insensitive on input.
pub fn should_placeholder(tag: &str) -> bool {
    let lower = tag.to_ascii_lowercase();
    !STANDARD_TAGS.contains(&lower.as_str())
}

/// Builds the passthrough block for a custom component node.
pub fn make_placeholder(node: &ElementNode) -> Block {
    let mut attrs = Map::new();
    attrs.insert("componentName".to_string(), Value::String(node.tag.clone()));
    attrs.insert(
        "reason".to_string(),
        Value::String(PLACEHOLDER_REASON.to_string()),
    );
    attrs.insert("notes".to_string(), Value::String(serialize_node(node)));
    attrs.insert(
        "props".to_string(),
        Value::Object(serialize_props(&node.attributes)),
    );
    Block::new(block::PLACEHOLDER, attrs)
}

// ─────────────────────────── Serialization ───────────────────────────

/// Reconstructs an approximate JSX representation of a node. Lossy but
/// readable; not guaranteed to re-parse to an identical tree.
pub fn serialize_node(node: &ElementNode) -> String {
    let mut out = String::new();
    out.push('<');
    out.push_str(&node.tag);

    for (name, value) in &node.attributes {
        match value {
            Value::Bool(true) => {
                out.push(' ');
                out.push_str(name);
            }
            Value::Bool(false) => {}
            Value::String(s) => {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&s.replace('"', "\\\""));
                out.push('"');
            }
            other => {
                out.push(' ');
                out.push_str(name);
                out.push_str("={");
                out.push_str(&render_expr(other));
                out.push('}');
            }
        }
    }

    if node.children.is_empty() {
        out.push_str(" />");
        return out;
    }

    out.push('>');
    for child in &node.children {
        match child {
            ElementChild::Text(text) => out.push_str(text),
            ElementChild::Element(el) => out.push_str(&serialize_node(el)),
        }
    }
    out.push_str("</");
    out.push_str(&node.tag);
    out.push('>');
    out
}

fn render_expr(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        other => serde_json::to_string(other).unwrap_or_else(|_| OBJECT_MARKER.to_string()),
    }
}

/// Best-effort props map for the placeholder attributes: scalars pass
/// through unchanged, objects and arrays are JSON-stringified.
fn serialize_props(attributes: &Map<String, Value>) -> Map<String, Value> {
    let mut props = Map::new();
    for (name, value) in attributes {
        let rendered = match value {
            Value::Object(_) => Value::String(
                serde_json::to_string(value).unwrap_or_else(|_| OBJECT_MARKER.to_string()),
            ),
            Value::Array(_) => Value::String(
                serde_json::to_string(value).unwrap_or_else(|_| ARRAY_MARKER.to_string()),
            ),
            other => other.clone(),
        };
        props.insert(name.clone(), rendered);
    }
    props
}
