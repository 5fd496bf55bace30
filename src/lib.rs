//! # O4O Page Generator
//!
//! A JSX/TSX to block-document converter for the O4O page builder.
//!
//! ## Features
//! - Static JSX/TSX parsing with TypeScript syntax support
//! - Tailwind utility-class translation to semantic block attributes
//! - Nested container mapping (grid columns, flex groups, flow groups)
//! - Placeholder passthrough for custom components, preserving the
//!   original markup for manual follow-up
//! - Page packaging for the content API's `POST /api/admin/pages` shape
//!
//! ## Example — convert a component body
//! ```ignore
//! use o4o_pagegen::convert;
//!
//! let source = r#"
//! export default function Hero() {
//!   return (
//!     <div className="flex flex-col gap-4 p-4">
//!       <h1 className="text-3xl text-blue-600">Hi</h1>
//!       <p>World</p>
//!     </div>
//!   );
//! }
//! "#;
//!
//! let result = convert(source).expect("conversion failed");
//! assert_eq!(result.stats.total_blocks, 3);
//! ```
//!
//! ## Example — package a full page
//! ```ignore
//! use o4o_pagegen::{convert_to_page, PageOptions};
//!
//! let output = convert_to_page("<p>Hello</p>", "About Us", PageOptions::default())
//!     .expect("conversion failed");
//! assert_eq!(output.page_data.slug, "about-us");
//! ```

pub mod block;
pub mod convert;
pub mod element;
pub mod error;
pub mod mapper;
pub mod parser;
pub mod placeholder;
pub mod tailwind;

// --- Core types ---
pub use block::{Block, ConversionResult, ConversionStats, PlaceholderSummary};
pub use convert::{PageData, PageOptions, PageOutput, Validation};
pub use element::{ElementChild, ElementNode};
pub use error::{ConvertError, ConvertResult};

/// Check that the source text parses as valid JSX/TSX.
pub fn validate(source: &str) -> Validation {
    convert::validate(source)
}

/// Convert JSX/TSX source into a block document with aggregates.
pub fn convert(source: &str) -> ConvertResult<ConversionResult> {
    convert::convert(source)
}

/// Convert JSX/TSX source and wrap the blocks in a page document.
pub fn convert_to_page(
    source: &str,
    title: &str,
    options: PageOptions,
) -> ConvertResult<PageOutput> {
    convert::convert_to_page(source, title, options)
}

/// Parse JSX/TSX source into element trees without mapping to blocks.
pub fn parse(source: &str) -> ConvertResult<Vec<ElementNode>> {
    parser::parse(source)
}
