//! # Block mapper
//!
//! The recursive translator from element trees to block documents. Each
//! element dispatches on its tag through [`StandardTag`]; custom components
//! fall through to the placeholder strategy so conversion never aborts on
//! an element it does not understand.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::block::{self, Block};
use crate::element::{ElementChild, ElementNode};
use crate::placeholder;
use crate::tailwind as tw;

/// Maps every top-level element of a parse result.
pub fn map_forest(nodes: &[ElementNode]) -> Vec<Block> {
    nodes.iter().map(map_node).collect()
}

/// Maps one element tree to one block. Total: every input produces a
/// block, via the placeholder fallback when nothing else applies.
pub fn map_node(node: &ElementNode) -> Block {
    match StandardTag::classify(&node.tag) {
        StandardTag::Custom => placeholder::make_placeholder(node),
        StandardTag::Heading(level) => map_heading(node, level),
        StandardTag::Paragraph => map_paragraph(node),
        StandardTag::Image => map_image(node),
        StandardTag::Button => map_button(node, button_url(node)),
        StandardTag::Anchor => map_anchor(node),
        StandardTag::List { ordered } => map_list(node, ordered),
        StandardTag::Quote => map_quote(node),
        StandardTag::Container => map_container(node),
    }
}

// ─────────────────────────── Dispatch ───────────────────────────

/// The fixed set of tags mapped directly. Everything else is `Custom` and
/// becomes a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StandardTag {
    Heading(u8),
    /// `p` plus the inline text tags (span, li, strong, em, small, code,
    /// pre), which map to paragraph blocks when they appear standalone.
    Paragraph,
    Image,
    Button,
    Anchor,
    List {
        ordered: bool,
    },
    Quote,
    Container,
    Custom,
}

impl StandardTag {
    fn classify(tag: &str) -> Self {
        if placeholder::should_placeholder(tag) {
            return StandardTag::Custom;
        }
        match tag.to_ascii_lowercase().as_str() {
            "h1" => StandardTag::Heading(1),
            "h2" => StandardTag::Heading(2),
            "h3" => StandardTag::Heading(3),
            "h4" => StandardTag::Heading(4),
            "h5" => StandardTag::Heading(5),
            "h6" => StandardTag::Heading(6),
            "img" => StandardTag::Image,
            "button" => StandardTag::Button,
            "a" => StandardTag::Anchor,
            "ul" => StandardTag::List { ordered: false },
            "ol" => StandardTag::List { ordered: true },
            "blockquote" => StandardTag::Quote,
            "div" | "section" | "article" | "header" | "footer" | "nav" | "main" | "aside" => {
                StandardTag::Container
            }
            _ => StandardTag::Paragraph,
        }
    }
}

/// Inserts `key` only when a value resolved; absent concerns never reach
/// the output.
fn set<T: Serialize>(attrs: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(value) = value {
        if let Ok(value) = serde_json::to_value(value) {
            attrs.insert(key.to_string(), value);
        }
    }
}

// ─────────────────────────── Shared style sets ───────────────────────────

fn text_style(classes: &str, attrs: &mut Map<String, Value>) {
    set(attrs, "align", tw::parse_text_align(classes));
    set(attrs, "fontSize", tw::parse_font_size(classes));
    set(
        attrs,
        "textColor",
        tw::parse_text_color(classes).or_else(|| tw::parse_alpha_color(classes, "text")),
    );
}

fn motion_style(classes: &str, attrs: &mut Map<String, Value>) {
    set(attrs, "opacity", tw::parse_opacity(classes));
    set(attrs, "shadow", tw::parse_shadow(classes));
    set(attrs, "transform", tw::parse_transform(classes));
    set(attrs, "transformOrigin", tw::parse_transform_origin(classes));
    set(attrs, "transition", tw::parse_transition(classes));
    set(attrs, "animation", tw::parse_animation(classes));
}

fn background_color(classes: &str) -> Option<String> {
    tw::parse_background_color(classes).or_else(|| tw::parse_alpha_color(classes, "bg"))
}

// ─────────────────────────── Leaf blocks ───────────────────────────

fn map_heading(node: &ElementNode, level: u8) -> Block {
    let classes = node.class_string();
    let mut attrs = Map::new();
    attrs.insert("content".to_string(), Value::String(node.flattened_text()));
    attrs.insert("level".to_string(), Value::from(level));
    text_style(classes, &mut attrs);
    motion_style(classes, &mut attrs);
    Block::new(block::HEADING, attrs)
}

fn map_paragraph(node: &ElementNode) -> Block {
    let classes = node.class_string();
    let mut attrs = Map::new();
    attrs.insert("content".to_string(), Value::String(node.flattened_text()));
    text_style(classes, &mut attrs);
    motion_style(classes, &mut attrs);
    Block::new(block::PARAGRAPH, attrs)
}

fn map_image(node: &ElementNode) -> Block {
    let classes = node.class_string();
    let mut attrs = Map::new();
    attrs.insert(
        "url".to_string(),
        Value::String(node.attr_str("src").unwrap_or("").to_string()),
    );
    attrs.insert(
        "alt".to_string(),
        Value::String(node.attr_str("alt").unwrap_or("").to_string()),
    );

    // explicit width/height attributes win over class-derived sizing
    match explicit_dimension(node, "width") {
        Some(value) => {
            attrs.insert("width".to_string(), value);
        }
        None => set(&mut attrs, "width", tw::parse_width(classes)),
    }
    match explicit_dimension(node, "height") {
        Some(value) => {
            attrs.insert("height".to_string(), value);
        }
        None => set(&mut attrs, "height", tw::parse_height(classes)),
    }

    set(&mut attrs, "objectFit", tw::parse_object_fit(classes));
    set(&mut attrs, "borderRadius", tw::parse_border_radius(classes));
    set(&mut attrs, "shadow", tw::parse_shadow(classes));
    set(&mut attrs, "opacity", tw::parse_opacity(classes));
    set(&mut attrs, "transform", tw::parse_transform(classes));
    set(
        &mut attrs,
        "transformOrigin",
        tw::parse_transform_origin(classes),
    );
    Block::new(block::IMAGE, attrs)
}

fn explicit_dimension(node: &ElementNode, name: &str) -> Option<Value> {
    match node.attributes.get(name) {
        Some(value @ Value::Number(_)) => Some(value.clone()),
        _ => None,
    }
}

/// A button element resolves its url to `"#"` when it carries a link or a
/// click handler; the real handler target is never recovered.
fn button_url(node: &ElementNode) -> String {
    if node.attributes.contains_key("href") || node.attributes.contains_key("onClick") {
        "#".to_string()
    } else {
        String::new()
    }
}

fn map_button(node: &ElementNode, url: String) -> Block {
    let classes = node.class_string();
    let mut attrs = Map::new();
    attrs.insert("text".to_string(), Value::String(node.flattened_text()));
    attrs.insert("url".to_string(), Value::String(url));
    set(&mut attrs, "backgroundColor", background_color(classes));
    set(
        &mut attrs,
        "textColor",
        tw::parse_text_color(classes).or_else(|| tw::parse_alpha_color(classes, "text")),
    );
    set(&mut attrs, "borderRadius", tw::parse_border_radius(classes));
    set(&mut attrs, "fontSize", tw::parse_font_size(classes));
    set(&mut attrs, "padding", Some(tw::parse_padding(classes)));
    motion_style(classes, &mut attrs);
    Block::new(block::BUTTON, attrs)
}

// ─────────────────────────── Anchors ───────────────────────────

fn map_anchor(node: &ElementNode) -> Block {
    if styled_as_button(node.class_string()) {
        // same lossy rule as <button>: the target is never resolved,
        // even when an href is statically known
        return map_button(node, button_url(node));
    }

    // plain link: keep inline markup so emphasis and the link itself
    // survive in the paragraph content
    let classes = node.class_string();
    let mut attrs = Map::new();
    attrs.insert("content".to_string(), Value::String(inline_html(node)));
    text_style(classes, &mut attrs);
    motion_style(classes, &mut attrs);
    Block::new(block::PARAGRAPH, attrs)
}

/// Heuristic for anchors visually styled as buttons: a `btn`/`button`
/// class fragment, or horizontal plus vertical padding plus a background
/// color on the same element.
fn styled_as_button(classes: &str) -> bool {
    if classes.contains("btn") || classes.contains("button") {
        return true;
    }
    let mut px = false;
    let mut py = false;
    let mut bg = false;
    for token in classes.split_whitespace() {
        if token.strip_prefix("px-").is_some_and(|n| n.parse::<u32>().is_ok()) {
            px = true;
        } else if token.strip_prefix("py-").is_some_and(|n| n.parse::<u32>().is_ok()) {
            py = true;
        } else if token.starts_with("bg-") {
            bg = true;
        }
    }
    px && py && bg
}

/// Minimal inline-HTML rendering of a node: `strong`/`b`, `em`/`i` and
/// `a` keep their markup, everything else flattens to text.
fn inline_html(node: &ElementNode) -> String {
    match node.tag.to_ascii_lowercase().as_str() {
        "strong" | "b" => format!("<strong>{}</strong>", inline_html_children(node)),
        "em" | "i" => format!("<em>{}</em>", inline_html_children(node)),
        "a" => format!(
            "<a href=\"{}\">{}</a>",
            node.attr_str("href").unwrap_or(""),
            inline_html_children(node)
        ),
        _ => node.flattened_text(),
    }
}

fn inline_html_children(node: &ElementNode) -> String {
    let mut out = String::new();
    for child in &node.children {
        match child {
            ElementChild::Text(text) => out.push_str(text),
            ElementChild::Element(el) => out.push_str(&inline_html(el)),
        }
    }
    out
}

// ─────────────────────────── Lists and quotes ───────────────────────────

fn map_list(node: &ElementNode, ordered: bool) -> Block {
    let classes = node.class_string();

    // items come from direct li children only
    let items: Vec<String> = node
        .child_elements()
        .filter(|el| el.tag.eq_ignore_ascii_case("li"))
        .map(ElementNode::flattened_text)
        .collect();

    let mut attrs = Map::new();
    attrs.insert(
        "type".to_string(),
        Value::String(if ordered { "ordered" } else { "unordered" }.to_string()),
    );
    attrs.insert("content".to_string(), Value::String(items.join("\n")));
    set(
        &mut attrs,
        "textColor",
        tw::parse_text_color(classes).or_else(|| tw::parse_alpha_color(classes, "text")),
    );
    set(&mut attrs, "fontSize", tw::parse_font_size(classes));
    set(&mut attrs, "backgroundColor", background_color(classes));
    set(&mut attrs, "padding", Some(tw::parse_padding(classes)));
    set(&mut attrs, "borderRadius", tw::parse_border_radius(classes));
    set(&mut attrs, "shadow", tw::parse_shadow(classes));
    set(&mut attrs, "opacity", tw::parse_opacity(classes));
    Block::new(block::LIST, attrs)
}

fn map_quote(node: &ElementNode) -> Block {
    let classes = node.class_string();
    let mut attrs = Map::new();
    attrs.insert("quote".to_string(), Value::String(node.flattened_text()));
    set(&mut attrs, "align", tw::parse_text_align(classes));
    set(
        &mut attrs,
        "textColor",
        tw::parse_text_color(classes).or_else(|| tw::parse_alpha_color(classes, "text")),
    );
    set(&mut attrs, "fontSize", tw::parse_font_size(classes));
    set(&mut attrs, "backgroundColor", background_color(classes));
    set(&mut attrs, "padding", Some(tw::parse_padding(classes)));
    set(&mut attrs, "borderLeft", tw::parse_border_left(classes));
    set(&mut attrs, "borderRadius", tw::parse_border_radius(classes));
    set(&mut attrs, "shadow", tw::parse_shadow(classes));
    set(&mut attrs, "opacity", tw::parse_opacity(classes));
    Block::new(block::QUOTE, attrs)
}

// ─────────────────────────── Containers ───────────────────────────

fn map_container(node: &ElementNode) -> Block {
    let classes = node.class_string();
    if tw::has_grid(classes) {
        map_columns(node)
    } else if tw::has_flex(classes) {
        map_group(node, true)
    } else {
        map_group(node, false)
    }
}

fn map_columns(node: &ElementNode) -> Block {
    let classes = node.class_string();
    let column_count = tw::parse_grid_cols(classes).unwrap_or(2);

    let mut attrs = Map::new();
    attrs.insert("columnCount".to_string(), Value::from(column_count));
    set(&mut attrs, "gap", tw::parse_gap(classes));
    set(&mut attrs, "padding", Some(tw::parse_padding(classes)));
    set(&mut attrs, "backgroundColor", background_color(classes));

    let columns: Vec<Block> = node
        .child_elements()
        .map(|child| map_column(child, column_count))
        .collect();
    Block::container(block::COLUMNS, attrs, columns)
}

/// One grid cell. Width defaults to an equal share, overridden by the
/// child's own `col-span-{n}` class; `row-span` is recorded but never
/// changes the width.
fn map_column(child: &ElementNode, column_count: u32) -> Block {
    let child_classes = child.class_string();
    let col_span = tw::parse_col_span(child_classes);
    let width = match col_span {
        Some(span) => tw::column_width_for_span(span, column_count),
        None => tw::column_width(column_count as usize),
    };

    let mut attrs = Map::new();
    attrs.insert("width".to_string(), Value::from(width));
    set(&mut attrs, "colSpan", col_span);
    set(&mut attrs, "rowSpan", tw::parse_row_span(child_classes));
    Block::container(block::COLUMN, attrs, vec![map_node(child)])
}

fn map_group(node: &ElementNode, flex: bool) -> Block {
    let classes = node.class_string();
    let mut attrs = Map::new();

    if flex {
        set(&mut attrs, "flexDirection", tw::parse_flex_direction(classes));
        set(&mut attrs, "flexWrap", tw::parse_flex_wrap(classes));
        set(&mut attrs, "gap", tw::parse_gap(classes));
        set(
            &mut attrs,
            "justifyContent",
            tw::parse_justify_content(classes),
        );
        set(&mut attrs, "alignItems", tw::parse_align_items(classes));
    }

    set(&mut attrs, "padding", Some(tw::parse_padding(classes)));
    set(&mut attrs, "backgroundColor", background_color(classes));
    set(&mut attrs, "borderRadius", tw::parse_border_radius(classes));
    set(&mut attrs, "opacity", tw::parse_opacity(classes));
    set(&mut attrs, "shadow", tw::parse_shadow(classes));
    set(&mut attrs, "backdropBlur", tw::parse_backdrop_blur(classes));
    set(&mut attrs, "position", tw::parse_position(classes));
    set(&mut attrs, "inset", merged_positioning(classes));
    set(&mut attrs, "zIndex", tw::parse_z_index(classes));
    set(&mut attrs, "transform", tw::parse_transform(classes));
    set(
        &mut attrs,
        "transformOrigin",
        tw::parse_transform_origin(classes),
    );
    set(&mut attrs, "transition", tw::parse_transition(classes));
    set(&mut attrs, "animation", tw::parse_animation(classes));

    let children = map_group_children(node);
    let block_type = if flex { block::FLEX_GROUP } else { block::GROUP };
    Block::container(block_type, attrs, children)
}

/// Discrete `top/right/bottom/left` offsets override the inset shorthand
/// per side.
fn merged_positioning(classes: &str) -> Option<tw::Sides> {
    let inset = tw::parse_inset(classes);
    let offsets = tw::parse_offsets(classes);
    match (inset, offsets) {
        (Some(inset), Some(offsets)) => Some(inset.overlaid(&offsets)),
        (Some(inset), None) => Some(inset),
        (None, offsets) => offsets,
    }
}

/// Bare text inside a container becomes its own paragraph block so the
/// text is not lost.
fn map_group_children(node: &ElementNode) -> Vec<Block> {
    node.children
        .iter()
        .map(|child| match child {
            ElementChild::Element(el) => map_node(el),
            ElementChild::Text(text) => {
                let mut attrs = Map::new();
                attrs.insert("content".to_string(), Value::String(text.clone()));
                Block::new(block::PARAGRAPH, attrs)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn el(tag: &str, classes: &str) -> ElementNode {
        let mut node = ElementNode::new(tag);
        if !classes.is_empty() {
            node.attributes
                .insert("className".to_string(), json!(classes));
        }
        node
    }

    fn with_text(mut node: ElementNode, text: &str) -> ElementNode {
        node.children.push(ElementChild::Text(text.to_string()));
        node
    }

    #[test]
    fn heading_level_and_styles() {
        let node = with_text(el("h1", "text-3xl text-blue-600"), "Hi");
        let block = map_node(&node);
        assert_eq!(block.block_type, block::HEADING);
        assert_eq!(block.attributes["level"], json!(1));
        assert_eq!(block.attributes["content"], json!("Hi"));
        assert_eq!(block.attributes["fontSize"], json!(30));
        assert_eq!(block.attributes["textColor"], json!("#2563eb"));
    }

    #[test]
    fn custom_component_becomes_placeholder() {
        let block = map_node(&el("Carousel", ""));
        assert_eq!(block.block_type, block::PLACEHOLDER);
        assert_eq!(block.attributes["componentName"], json!("Carousel"));
    }

    #[test]
    fn button_url_placeholder() {
        let mut node = with_text(el("button", "px-4 py-2 bg-blue-600"), "Save");
        node.attributes.insert(
            "onClick".to_string(),
            json!(crate::element::EXPRESSION_MARKER),
        );
        let block = map_node(&node);
        assert_eq!(block.block_type, block::BUTTON);
        assert_eq!(block.attributes["url"], json!("#"));
        assert_eq!(block.attributes["backgroundColor"], json!("#2563eb"));

        let plain = map_node(&with_text(el("button", ""), "Save"));
        assert_eq!(plain.attributes["url"], json!(""));
    }

    #[test]
    fn anchor_styled_as_button_gets_placeholder_url() {
        let mut node = with_text(el("a", "px-4 py-2 bg-green-600 rounded"), "Go");
        node.attributes.insert("href".to_string(), json!("/docs"));
        let block = map_node(&node);
        assert_eq!(block.block_type, block::BUTTON);
        // the href target is discarded, same as a button's click handler
        assert_eq!(block.attributes["url"], json!("#"));
        assert_eq!(block.attributes["text"], json!("Go"));

        let bare = map_node(&with_text(el("a", "btn"), "Go"));
        assert_eq!(bare.block_type, block::BUTTON);
        assert_eq!(bare.attributes["url"], json!(""));
    }

    #[test]
    fn plain_anchor_preserves_inline_markup() {
        let mut strong = el("strong", "");
        strong = with_text(strong, "bold");
        let mut node = el("a", "");
        node.attributes.insert("href".to_string(), json!("/x"));
        node.children.push(ElementChild::Text("see ".to_string()));
        node.children.push(ElementChild::Element(strong));
        let block = map_node(&node);
        assert_eq!(block.block_type, block::PARAGRAPH);
        assert_eq!(
            block.attributes["content"],
            json!("<a href=\"/x\">see <strong>bold</strong></a>")
        );
    }

    #[test]
    fn list_items_from_direct_li_only() {
        let mut node = el("ul", "text-gray-700");
        node.children
            .push(ElementChild::Element(with_text(el("li", ""), "one")));
        node.children
            .push(ElementChild::Element(with_text(el("span", ""), "skip")));
        node.children
            .push(ElementChild::Element(with_text(el("li", ""), "two")));
        let block = map_node(&node);
        assert_eq!(block.attributes["type"], json!("unordered"));
        assert_eq!(block.attributes["content"], json!("one\ntwo"));
        assert_eq!(block.attributes["textColor"], json!("#374151"));
    }

    #[test]
    fn quote_with_left_border() {
        let node = with_text(el("blockquote", "border-l-4 border-gray-300 pl-4"), "Said");
        let block = map_node(&node);
        assert_eq!(block.block_type, block::QUOTE);
        assert_eq!(block.attributes["quote"], json!("Said"));
        assert_eq!(
            block.attributes["borderLeft"],
            json!({"width": 4, "color": "#d1d5db"})
        );
        assert_eq!(block.attributes["padding"], json!({"left": 16}));
    }

    #[test]
    fn grid_container_distributes_column_widths() {
        let mut node = el("div", "grid grid-cols-3 gap-4");
        for _ in 0..3 {
            node.children
                .push(ElementChild::Element(with_text(el("p", ""), "x")));
        }
        let block = map_node(&node);
        assert_eq!(block.block_type, block::COLUMNS);
        assert_eq!(block.attributes["columnCount"], json!(3));
        assert_eq!(block.attributes["gap"], json!(16));
        let columns = block.inner_blocks.as_ref().unwrap();
        assert_eq!(columns.len(), 3);
        for column in columns {
            assert_eq!(column.block_type, block::COLUMN);
            assert_eq!(column.attributes["width"], json!(33.33));
        }
    }

    #[test]
    fn col_span_overrides_default_width() {
        let mut node = el("div", "grid grid-cols-4");
        node.children
            .push(ElementChild::Element(el("div", "col-span-2 row-span-2")));
        let block = map_node(&node);
        let column = &block.inner_blocks.as_ref().unwrap()[0];
        assert_eq!(column.attributes["width"], json!(50.0));
        assert_eq!(column.attributes["colSpan"], json!(2));
        assert_eq!(column.attributes["rowSpan"], json!(2));
    }

    #[test]
    fn flex_container_attributes() {
        let node = el("div", "flex flex-col gap-4 p-4 justify-between items-center");
        let block = map_node(&node);
        assert_eq!(block.block_type, block::FLEX_GROUP);
        assert_eq!(block.attributes["flexDirection"], json!("column"));
        assert_eq!(block.attributes["gap"], json!(16));
        assert_eq!(block.attributes["justifyContent"], json!("space-between"));
        assert_eq!(block.attributes["alignItems"], json!("center"));
        assert_eq!(
            block.attributes["padding"],
            json!({"top": 16, "right": 16, "bottom": 16, "left": 16})
        );
    }

    #[test]
    fn plain_container_is_flow_group_without_flex_keys() {
        let node = el("section", "p-4 bg-gray-100");
        let block = map_node(&node);
        assert_eq!(block.block_type, block::GROUP);
        assert!(!block.attributes.contains_key("flexDirection"));
        assert_eq!(block.attributes["backgroundColor"], json!("#f3f4f6"));
    }

    #[test]
    fn offsets_override_inset_in_positioning() {
        let node = el("div", "absolute inset-0 top-4 z-10");
        let block = map_node(&node);
        assert_eq!(block.attributes["position"], json!("absolute"));
        assert_eq!(
            block.attributes["inset"],
            json!({"top": 16, "right": 0, "bottom": 0, "left": 0})
        );
        assert_eq!(block.attributes["zIndex"], json!(10));
    }

    #[test]
    fn bare_text_in_container_becomes_paragraph() {
        let node = with_text(el("div", ""), "loose text");
        let block = map_node(&node);
        let inner = block.inner_blocks.as_ref().unwrap();
        assert_eq!(inner.len(), 1);
        assert_eq!(inner[0].block_type, block::PARAGRAPH);
        assert_eq!(inner[0].attributes["content"], json!("loose text"));
    }

    #[test]
    fn empty_style_objects_are_cleaned() {
        let block = map_node(&with_text(el("button", ""), "Go"));
        assert!(!block.attributes.contains_key("padding"));
        assert!(!block.attributes.contains_key("opacity"));
    }

    #[test]
    fn standalone_inline_tags_map_to_paragraphs() {
        let block = map_node(&with_text(el("span", ""), "inline"));
        assert_eq!(block.block_type, block::PARAGRAPH);
        assert_eq!(block.attributes["content"], json!("inline"));
    }
}
