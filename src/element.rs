use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque marker substituted for an attribute value that is a runtime
/// expression the converter cannot statically evaluate.
pub const EXPRESSION_MARKER: &str = "[expression]";
/// Opaque marker for a function-valued object property.
pub const FUNCTION_MARKER: &str = "[function]";
/// Opaque marker for an object that could not be serialized.
pub const OBJECT_MARKER: &str = "[object]";
/// Opaque marker for an array that could not be serialized.
pub const ARRAY_MARKER: &str = "[array]";

/// One parsed JSX element: tag name, resolved attributes, ordered children.
///
/// Produced once per parse call and never mutated afterwards. Attribute
/// values are resolved literals, best-effort-flattened object/array
/// literals, or one of the opaque marker strings above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    pub tag: String,
    pub attributes: Map<String, Value>,
    pub children: Vec<ElementChild>,
}

/// A child of an element: a trimmed text fragment or a nested element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementChild {
    Text(String),
    Element(ElementNode),
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Map::new(),
            children: Vec::new(),
        }
    }

    /// Returns the value of the `className` (or `class`) attribute, if it
    /// resolved to a string.
    pub fn class_string(&self) -> &str {
        self.attributes
            .get("className")
            .or_else(|| self.attributes.get("class"))
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Returns a string attribute value by name.
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(Value::as_str)
    }

    /// The concatenation, in document order, of all text in the descendant
    /// tree, ignoring element boundaries.
    pub fn flattened_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Iterator over element children only (skips text fragments).
    pub fn child_elements(&self) -> impl Iterator<Item = &ElementNode> {
        self.children.iter().filter_map(|c| match c {
            ElementChild::Element(el) => Some(el),
            ElementChild::Text(_) => None,
        })
    }
}

fn collect_text(node: &ElementNode, out: &mut String) {
    for child in &node.children {
        match child {
            ElementChild::Text(t) => out.push_str(t),
            ElementChild::Element(el) => collect_text(el, out),
        }
    }
}
