//! # Converter facade
//!
//! The entry points external callers use: [`validate`] for interactive
//! syntax checking, [`convert`] for the full pipeline, and
//! [`convert_to_page`] to package the result as a page document ready to
//! submit to the content API.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::block::{summarize_placeholders, Block, ConversionResult, ConversionStats};
use crate::error::ConvertResult;
use crate::mapper;
use crate::parser;

/// Outcome of a syntax check, shaped for interactive display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Validation {
    fn ok() -> Self {
        Validation {
            valid: true,
            error: None,
        }
    }

    fn fail(error: impl Into<String>) -> Self {
        Validation {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Checks that the source text parses. Empty or whitespace-only input is
/// rejected without invoking the parser; the parse result is discarded on
/// success.
pub fn validate(source: &str) -> Validation {
    if source.trim().is_empty() {
        return Validation::fail("Source text is empty");
    }
    match parser::parse(source) {
        Ok(_) => Validation::ok(),
        Err(err) => Validation::fail(err.to_string()),
    }
}

/// Runs the full pipeline: parse, map, aggregate. Propagates the parse
/// failure; callers wanting a structured error should call [`validate`]
/// first.
pub fn convert(source: &str) -> ConvertResult<ConversionResult> {
    let forest = parser::parse(source)?;
    let blocks = mapper::map_forest(&forest);

    let placeholders = summarize_placeholders(&blocks);
    let total_blocks: usize = blocks.iter().map(Block::count).sum();
    let placeholder_count: usize = placeholders.iter().map(|p| p.count).sum();

    Ok(ConversionResult {
        placeholders,
        stats: ConversionStats {
            total_blocks,
            placeholder_count,
            successful_conversions: total_blocks - placeholder_count,
        },
        blocks,
    })
}

// ─────────────────────────── Page packaging ───────────────────────────

/// Optional overrides for [`convert_to_page`]. Every field falls back to
/// the content API's creation defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub status: Option<String>,
    pub page_type: Option<String>,
    pub show_in_menu: Option<bool>,
}

/// The request-body shape for `POST /api/admin/pages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    pub title: String,
    pub slug: String,
    pub content: Vec<Block>,
    pub excerpt: String,
    pub status: String,
    #[serde(rename = "type")]
    pub page_type: String,
    #[serde(rename = "showInMenu")]
    pub show_in_menu: bool,
}

/// A packaged page plus the conversion aggregates it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOutput {
    pub page_data: PageData,
    pub conversion_result: ConversionResult,
}

/// Converts the source and wraps the block forest in a page document.
/// The slug defaults to [`slugify`] of the title.
pub fn convert_to_page(
    source: &str,
    title: &str,
    options: PageOptions,
) -> ConvertResult<PageOutput> {
    let result = convert(source)?;
    let page_data = PageData {
        title: title.to_string(),
        slug: options.slug.unwrap_or_else(|| slugify(title)),
        content: result.blocks.clone(),
        excerpt: options.excerpt.unwrap_or_default(),
        status: options.status.unwrap_or_else(|| "draft".to_string()),
        page_type: options.page_type.unwrap_or_else(|| "page".to_string()),
        show_in_menu: options.show_in_menu.unwrap_or(true),
    };
    Ok(PageOutput {
        page_data,
        conversion_result: result,
    })
}

/// Deterministic slug from a title: lowercase, strip everything but
/// alphanumerics, spaces and hyphens, then collapse whitespace and hyphen
/// runs into single hyphens.
pub fn slugify(title: &str) -> String {
    static STRIP: OnceLock<Regex> = OnceLock::new();
    static SPACES: OnceLock<Regex> = OnceLock::new();
    static HYPHENS: OnceLock<Regex> = OnceLock::new();

    let strip = STRIP.get_or_init(|| Regex::new(r"[^a-z0-9\s-]").unwrap());
    let spaces = SPACES.get_or_init(|| Regex::new(r"\s+").unwrap());
    let hyphens = HYPHENS.get_or_init(|| Regex::new(r"-+").unwrap());

    let lower = title.to_lowercase();
    let stripped = strip.replace_all(&lower, "");
    let hyphenated = spaces.replace_all(stripped.trim(), "-");
    hyphens.replace_all(&hyphenated, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block;

    #[test]
    fn validate_rejects_empty_input_without_parsing() {
        let result = validate("");
        assert!(!result.valid);
        let result = validate("   ");
        assert!(!result.valid);
        // no parser involvement: the message is ours, not a syntax error
        assert_eq!(result.error.as_deref(), Some("Source text is empty"));
    }

    #[test]
    fn validate_reports_syntax_errors() {
        let result = validate("<div>");
        assert!(!result.valid);
        assert!(result.error.is_some());
        assert!(validate("<div>ok</div>").valid);
    }

    #[test]
    fn convert_aggregates_stats() {
        let result = convert("<div><p>a</p><Carousel /></div>").unwrap();
        assert_eq!(result.stats.total_blocks, 3);
        assert_eq!(result.stats.placeholder_count, 1);
        assert_eq!(result.stats.successful_conversions, 2);
        assert_eq!(result.placeholders.len(), 1);
        assert_eq!(result.placeholders[0].component_name, "Carousel");
    }

    #[test]
    fn convert_propagates_parse_failure() {
        assert!(convert("<div>").is_err());
    }

    #[test]
    fn page_defaults() {
        let output =
            convert_to_page("<p>Hello</p>", "About Us!", PageOptions::default()).unwrap();
        let page = &output.page_data;
        assert_eq!(page.title, "About Us!");
        assert_eq!(page.slug, "about-us");
        assert_eq!(page.status, "draft");
        assert_eq!(page.page_type, "page");
        assert!(page.show_in_menu);
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].block_type, block::PARAGRAPH);
    }

    #[test]
    fn page_options_override_defaults() {
        let options = PageOptions {
            slug: Some("custom".to_string()),
            status: Some("published".to_string()),
            show_in_menu: Some(false),
            ..PageOptions::default()
        };
        let page = convert_to_page("<p>x</p>", "Title", options)
            .unwrap()
            .page_data;
        assert_eq!(page.slug, "custom");
        assert_eq!(page.status, "published");
        assert!(!page.show_in_menu);
    }

    #[test]
    fn slugify_normalizes_titles() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  What's New -- 2024  "), "whats-new-2024");
        assert_eq!(slugify("Ünïcode Röcks"), "ncode-rcks");
    }

    #[test]
    fn page_data_serializes_with_api_field_names() {
        let page = convert_to_page("<p>x</p>", "T", PageOptions::default())
            .unwrap()
            .page_data;
        let value = serde_json::to_value(&page).unwrap();
        assert!(value.get("showInMenu").is_some());
        assert_eq!(value.get("type"), Some(&serde_json::json!("page")));
    }
}
