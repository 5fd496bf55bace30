//! Spacing and sizing utilities: padding, gap, width, height, inset and
//! discrete position offsets. The numeric scale is 4px per unit.

use serde::Serialize;

use super::round2;

/// Per-side pixel values. Absent sides are omitted from serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<u32>,
}

impl Sides {
    pub fn uniform(value: u32) -> Self {
        Sides {
            top: Some(value),
            right: Some(value),
            bottom: Some(value),
            left: Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }

    /// Returns `self` with any sides set in `over` replacing the base value.
    pub fn overlaid(&self, over: &Sides) -> Sides {
        Sides {
            top: over.top.or(self.top),
            right: over.right.or(self.right),
            bottom: over.bottom.or(self.bottom),
            left: over.left.or(self.left),
        }
    }
}

/// A sizing value: either a pixel count or a keyword/percentage string.
#[derive(Debug, Clone, PartialEq)]
pub enum SizeValue {
    Px(u32),
    Str(&'static str),
}

impl Serialize for SizeValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SizeValue::Px(px) => serializer.serialize_u32(*px),
            SizeValue::Str(s) => serializer.serialize_str(s),
        }
    }
}

fn scaled_suffix(token: &str, prefix: &str) -> Option<u32> {
    let digits = token.strip_prefix(prefix)?;
    digits.parse::<u32>().ok().map(|n| n * 4)
}

// ─────────────────────────── Padding ───────────────────────────

/// Resolves padding classes to per-side pixel values.
///
/// Precedence per side: `pt`/`pr`/`pb`/`pl` beats `px`/`py` beats `p`,
/// regardless of the order tokens appear in. `"p-4 pl-8"` resolves left
/// to 32 and the other sides to 16.
pub fn parse_padding(classes: &str) -> Sides {
    let mut shorthand = None;
    let mut axes = Sides::default();
    let mut sides = Sides::default();

    for token in classes.split_whitespace() {
        if let Some(v) = scaled_suffix(token, "p-") {
            shorthand = Some(v);
        } else if let Some(v) = scaled_suffix(token, "px-") {
            axes.left = Some(v);
            axes.right = Some(v);
        } else if let Some(v) = scaled_suffix(token, "py-") {
            axes.top = Some(v);
            axes.bottom = Some(v);
        } else if let Some(v) = scaled_suffix(token, "pt-") {
            sides.top = Some(v);
        } else if let Some(v) = scaled_suffix(token, "pr-") {
            sides.right = Some(v);
        } else if let Some(v) = scaled_suffix(token, "pb-") {
            sides.bottom = Some(v);
        } else if let Some(v) = scaled_suffix(token, "pl-") {
            sides.left = Some(v);
        }
    }

    let base = match shorthand {
        Some(v) => Sides::uniform(v),
        None => Sides::default(),
    };
    base.overlaid(&axes).overlaid(&sides)
}

/// Resolves `gap-{n}` to pixels. `gap-4` → 16.
pub fn parse_gap(classes: &str) -> Option<u32> {
    classes
        .split_whitespace()
        .find_map(|token| scaled_suffix(token, "gap-"))
}

// ─────────────────────────── Width and height ───────────────────────────

/// Resolves width classes. Fractions and `w-full` resolve to percentage
/// strings; `w-{n}` resolves to pixels. `w-1/2` → `"50%"`, `w-64` → 256.
pub fn parse_width(classes: &str) -> Option<SizeValue> {
    for token in classes.split_whitespace() {
        let rest = match token.strip_prefix("w-") {
            Some(rest) => rest,
            None => continue,
        };
        match rest {
            "full" => return Some(SizeValue::Str("100%")),
            "1/2" => return Some(SizeValue::Str("50%")),
            "1/3" => return Some(SizeValue::Str("33.33%")),
            "2/3" => return Some(SizeValue::Str("66.67%")),
            "1/4" => return Some(SizeValue::Str("25%")),
            "3/4" => return Some(SizeValue::Str("75%")),
            _ => {
                if let Ok(n) = rest.parse::<u32>() {
                    return Some(SizeValue::Px(n * 4));
                }
            }
        }
    }
    None
}

/// Resolves height classes. `h-64` → 256, `h-full` → `"100%"`,
/// `h-screen` → `"100vh"`.
pub fn parse_height(classes: &str) -> Option<SizeValue> {
    for token in classes.split_whitespace() {
        let rest = match token.strip_prefix("h-") {
            Some(rest) => rest,
            None => continue,
        };
        match rest {
            "full" => return Some(SizeValue::Str("100%")),
            "screen" => return Some(SizeValue::Str("100vh")),
            _ => {
                if let Ok(n) = rest.parse::<u32>() {
                    return Some(SizeValue::Px(n * 4));
                }
            }
        }
    }
    None
}

// ─────────────────────────── Inset and offsets ───────────────────────────

/// Resolves `inset-{n}`, `inset-x-{n}` and `inset-y-{n}`.
///
/// An all-sides `inset-{n}` takes the whole result; otherwise the x and y
/// axis variants combine. Returns `None` when no inset class is present.
pub fn parse_inset(classes: &str) -> Option<Sides> {
    let mut axes = Sides::default();

    for token in classes.split_whitespace() {
        if let Some(v) = scaled_suffix(token, "inset-") {
            return Some(Sides::uniform(v));
        } else if let Some(v) = scaled_suffix(token, "inset-x-") {
            axes.left = Some(v);
            axes.right = Some(v);
        } else if let Some(v) = scaled_suffix(token, "inset-y-") {
            axes.top = Some(v);
            axes.bottom = Some(v);
        }
    }

    if axes.is_empty() {
        None
    } else {
        Some(axes)
    }
}

/// Resolves discrete offsets: `top-{n}`, `right-{n}`, `bottom-{n}`,
/// `left-{n}`. Returns `None` when none are present.
pub fn parse_offsets(classes: &str) -> Option<Sides> {
    let mut sides = Sides::default();

    for token in classes.split_whitespace() {
        if let Some(v) = scaled_suffix(token, "top-") {
            sides.top = Some(v);
        } else if let Some(v) = scaled_suffix(token, "right-") {
            sides.right = Some(v);
        } else if let Some(v) = scaled_suffix(token, "bottom-") {
            sides.bottom = Some(v);
        } else if let Some(v) = scaled_suffix(token, "left-") {
            sides.left = Some(v);
        }
    }

    if sides.is_empty() {
        None
    } else {
        Some(sides)
    }
}

/// Width of one column among `count` equal columns, as a percentage
/// rounded to 2 decimals. Three columns → 33.33.
pub fn column_width(count: usize) -> f64 {
    round2(100.0 / count as f64)
}

/// Width of a cell spanning `span` of `count` columns, as a percentage
/// rounded to 2 decimals.
pub fn column_width_for_span(span: u32, count: u32) -> f64 {
    round2(span as f64 / count as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_shorthand() {
        assert_eq!(parse_padding("p-4"), Sides::uniform(16));
    }

    #[test]
    fn padding_axes() {
        assert_eq!(
            parse_padding("px-6 py-3"),
            Sides {
                top: Some(12),
                right: Some(24),
                bottom: Some(12),
                left: Some(24),
            }
        );
    }

    #[test]
    fn padding_side_overrides_shorthand() {
        assert_eq!(
            parse_padding("p-4 pl-8"),
            Sides {
                top: Some(16),
                right: Some(16),
                bottom: Some(16),
                left: Some(32),
            }
        );
        // order does not matter
        assert_eq!(parse_padding("pl-8 p-4"), parse_padding("p-4 pl-8"));
    }

    #[test]
    fn gap_scale() {
        assert_eq!(parse_gap("flex gap-4"), Some(16));
        assert_eq!(parse_gap("flex"), None);
    }

    #[test]
    fn width_fractions_and_pixels() {
        assert_eq!(parse_width("w-1/2"), Some(SizeValue::Str("50%")));
        assert_eq!(parse_width("w-1/3"), Some(SizeValue::Str("33.33%")));
        assert_eq!(parse_width("w-64"), Some(SizeValue::Px(256)));
        assert_eq!(parse_width("w-full"), Some(SizeValue::Str("100%")));
        assert_eq!(parse_width("h-64"), None);
    }

    #[test]
    fn height_keywords() {
        assert_eq!(parse_height("h-screen"), Some(SizeValue::Str("100vh")));
        assert_eq!(parse_height("h-full"), Some(SizeValue::Str("100%")));
        assert_eq!(parse_height("h-16"), Some(SizeValue::Px(64)));
    }

    #[test]
    fn inset_all_sides_wins() {
        assert_eq!(parse_inset("inset-0"), Some(Sides::uniform(0)));
        assert_eq!(
            parse_inset("inset-x-4"),
            Some(Sides {
                left: Some(16),
                right: Some(16),
                ..Sides::default()
            })
        );
        assert_eq!(parse_inset("top-4"), None);
    }

    #[test]
    fn offsets_override_inset_when_overlaid() {
        let inset = parse_inset("inset-0").unwrap();
        let offsets = parse_offsets("top-4").unwrap();
        assert_eq!(
            inset.overlaid(&offsets),
            Sides {
                top: Some(16),
                right: Some(0),
                bottom: Some(0),
                left: Some(0),
            }
        );
    }

    #[test]
    fn column_width_rounding() {
        assert_eq!(column_width(3), 33.33);
        assert_eq!(column_width(4), 25.0);
    }
}
