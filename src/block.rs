use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

// Block type tags, namespaced the way the O4O editor registers them.
pub const HEADING: &str = "o4o/heading";
pub const PARAGRAPH: &str = "o4o/paragraph";
pub const IMAGE: &str = "o4o/image";
pub const BUTTON: &str = "o4o/button";
pub const LIST: &str = "o4o/list";
pub const QUOTE: &str = "o4o/quote";
pub const COLUMNS: &str = "o4o/columns";
pub const COLUMN: &str = "o4o/column";
pub const FLEX_GROUP: &str = "o4o/flex-group";
pub const GROUP: &str = "o4o/group";
pub const PLACEHOLDER: &str = "o4o/placeholder";

/// One node of the output block document.
///
/// Serializes to `{id, type, attributes, innerBlocks?}`; the tree is acyclic
/// by construction and each block is owned by exactly one parent (or the
/// top-level result list).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    pub attributes: Map<String, Value>,
    #[serde(rename = "innerBlocks", skip_serializing_if = "Option::is_none")]
    pub inner_blocks: Option<Vec<Block>>,
}

impl Block {
    /// Constructs a leaf block with a fresh random id and cleaned attributes.
    pub fn new(block_type: &str, attributes: Map<String, Value>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            block_type: block_type.to_string(),
            attributes: clean_attributes(attributes),
            inner_blocks: None,
        }
    }

    /// Constructs a container block. `innerBlocks` is present even when the
    /// child list is empty, marking the block as a container.
    pub fn container(block_type: &str, attributes: Map<String, Value>, children: Vec<Block>) -> Self {
        Self {
            inner_blocks: Some(children),
            ..Self::new(block_type, attributes)
        }
    }

    /// Total number of blocks in this subtree, including self.
    pub fn count(&self) -> usize {
        1 + self
            .inner_blocks
            .iter()
            .flatten()
            .map(Block::count)
            .sum::<usize>()
    }
}

/// Removes attribute keys whose value is null and keys whose value is a
/// non-array object with no entries. Empty arrays and meaningful falsy
/// values (`0`, `false`, `""`) are kept.
pub fn clean_attributes(attributes: Map<String, Value>) -> Map<String, Value> {
    attributes
        .into_iter()
        .filter(|(_, v)| match v {
            Value::Null => false,
            Value::Object(map) => !map.is_empty(),
            _ => true,
        })
        .collect()
}

/// Aggregate count of placeholder blocks for one original component tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderSummary {
    #[serde(rename = "componentName")]
    pub component_name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionStats {
    pub total_blocks: usize,
    pub placeholder_count: usize,
    pub successful_conversions: usize,
}

/// The value returned by a conversion: the block forest plus aggregates.
/// Recomputed fresh on every call; never mutated once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub blocks: Vec<Block>,
    pub placeholders: Vec<PlaceholderSummary>,
    pub stats: ConversionStats,
}

/// Tallies placeholder blocks by original component name, grouped in order
/// of first appearance.
pub fn summarize_placeholders(blocks: &[Block]) -> Vec<PlaceholderSummary> {
    let mut summaries: Vec<PlaceholderSummary> = Vec::new();
    for block in blocks {
        tally(block, &mut summaries);
    }
    summaries
}

fn tally(block: &Block, summaries: &mut Vec<PlaceholderSummary>) {
    if block.block_type == PLACEHOLDER {
        let name = block
            .attributes
            .get("componentName")
            .and_then(Value::as_str)
            .unwrap_or("Unknown");
        match summaries.iter_mut().find(|s| s.component_name == name) {
            Some(entry) => entry.count += 1,
            None => summaries.push(PlaceholderSummary {
                component_name: name.to_string(),
                count: 1,
            }),
        }
    }
    for child in block.inner_blocks.iter().flatten() {
        tally(child, summaries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn clean_drops_null_and_empty_objects() {
        let cleaned = clean_attributes(attrs(&[
            ("opacity", Value::Null),
            ("padding", json!({})),
            ("content", json!("hello")),
        ]));
        assert!(!cleaned.contains_key("opacity"));
        assert!(!cleaned.contains_key("padding"));
        assert_eq!(cleaned.get("content"), Some(&json!("hello")));
    }

    #[test]
    fn clean_keeps_falsy_values_and_empty_arrays() {
        let cleaned = clean_attributes(attrs(&[
            ("level", json!(0)),
            ("visible", json!(false)),
            ("content", json!("")),
            ("items", json!([])),
        ]));
        assert_eq!(cleaned.len(), 4);
    }

    #[test]
    fn fresh_ids_differ_between_blocks() {
        let a = Block::new(PARAGRAPH, Map::new());
        let b = Block::new(PARAGRAPH, Map::new());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn count_is_recursive() {
        let leaf = Block::new(PARAGRAPH, Map::new());
        let inner = Block::container(GROUP, Map::new(), vec![leaf]);
        let outer = Block::container(GROUP, Map::new(), vec![inner]);
        assert_eq!(outer.count(), 3);
    }

    #[test]
    fn placeholder_summary_groups_by_name() {
        let make = |name: &str| {
            Block::new(
                PLACEHOLDER,
                attrs(&[("componentName", json!(name))]),
            )
        };
        let root = Block::container(
            GROUP,
            Map::new(),
            vec![make("Carousel"), make("Widget"), make("Carousel")],
        );
        let summary = summarize_placeholders(std::slice::from_ref(&root));
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].component_name, "Carousel");
        assert_eq!(summary[0].count, 2);
        assert_eq!(summary[1].component_name, "Widget");
        assert_eq!(summary[1].count, 1);
    }

    #[test]
    fn block_serializes_without_inner_blocks_key_for_leaves() {
        let block = Block::new(PARAGRAPH, attrs(&[("content", json!("x"))]));
        let value = serde_json::to_value(&block).unwrap();
        assert!(value.get("innerBlocks").is_none());
        assert_eq!(value.get("type"), Some(&json!(PARAGRAPH)));
    }
}
