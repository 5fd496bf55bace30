//! Visual effect utilities: opacity, shadows, radius, borders, transforms,
//! transitions and animations.

use serde::Serialize;

use super::palette::palette_color;

// ─────────────────────────── Tables ───────────────────────────

const OPACITY_MAP: &[(&str, f64)] = &[
    ("0", 0.0),
    ("5", 0.05),
    ("10", 0.1),
    ("20", 0.2),
    ("25", 0.25),
    ("30", 0.3),
    ("40", 0.4),
    ("50", 0.5),
    ("60", 0.6),
    ("70", 0.7),
    ("75", 0.75),
    ("80", 0.8),
    ("90", 0.9),
    ("95", 0.95),
    ("100", 1.0),
];

/// `rounded-{size}` to pixel radius; the bare `rounded` token maps to 4.
const BORDER_RADIUS_MAP: &[(&str, u32)] = &[
    ("none", 0),
    ("sm", 2),
    ("", 4),
    ("md", 6),
    ("lg", 8),
    ("xl", 12),
    ("2xl", 16),
    ("3xl", 24),
    ("full", 9999),
];

/// `shadow-{size}` to a CSS box-shadow value; the bare `shadow` token maps
/// to the default entry.
const SHADOW_MAP: &[(&str, &str)] = &[
    ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    ("", "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)"),
    ("md", "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)"),
    ("lg", "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)"),
    ("xl", "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)"),
    ("2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
    ("inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
    ("none", "none"),
];

const BACKDROP_BLUR_MAP: &[(&str, &str)] = &[
    ("none", "blur(0)"),
    ("sm", "blur(4px)"),
    ("", "blur(8px)"),
    ("md", "blur(12px)"),
    ("lg", "blur(16px)"),
    ("xl", "blur(24px)"),
    ("2xl", "blur(40px)"),
    ("3xl", "blur(64px)"),
];

fn table_lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Looks up a sized token like `shadow-lg` / `rounded` in a table where the
/// empty key holds the bare-token default.
fn sized_token<T: Copy>(token: &str, prefix: &str, table: &[(&str, T)]) -> Option<T> {
    if token == prefix {
        return table_lookup(table, "");
    }
    let rest = token.strip_prefix(prefix)?.strip_prefix('-')?;
    table_lookup(table, rest)
}

// ─────────────────────────── Simple effects ───────────────────────────

/// Resolves `opacity-{n}` to a 0..1 fraction. `opacity-50` → 0.5.
pub fn parse_opacity(classes: &str) -> Option<f64> {
    classes.split_whitespace().find_map(|token| {
        token
            .strip_prefix("opacity-")
            .and_then(|value| table_lookup(OPACITY_MAP, value))
    })
}

/// Resolves shadow classes to a CSS box-shadow string. The bare `shadow`
/// token yields the default shadow.
pub fn parse_shadow(classes: &str) -> Option<String> {
    classes
        .split_whitespace()
        .find_map(|token| sized_token(token, "shadow", SHADOW_MAP))
        .map(str::to_string)
}

/// Resolves `rounded` classes to a pixel radius. `rounded-lg` → 8.
pub fn parse_border_radius(classes: &str) -> Option<u32> {
    classes
        .split_whitespace()
        .find_map(|token| sized_token(token, "rounded", BORDER_RADIUS_MAP))
}

/// Resolves `backdrop-blur` classes to a CSS filter string.
pub fn parse_backdrop_blur(classes: &str) -> Option<String> {
    classes
        .split_whitespace()
        .find_map(|token| sized_token(token, "backdrop-blur", BACKDROP_BLUR_MAP))
        .map(str::to_string)
}

/// Resolves `object-{fit}` classes. `object-cover` → `cover`.
pub fn parse_object_fit(classes: &str) -> Option<&'static str> {
    classes.split_whitespace().find_map(|token| match token {
        "object-contain" => Some("contain"),
        "object-cover" => Some("cover"),
        "object-fill" => Some("fill"),
        "object-none" => Some("none"),
        "object-scale-down" => Some("scale-down"),
        _ => None,
    })
}

/// Resolves `animate-{name}`. `animate-none` suppresses any other
/// animation token; otherwise `spin` ranks over `ping` over `pulse` over
/// `bounce` when several appear, regardless of token order.
pub fn parse_animation(classes: &str) -> Option<&'static str> {
    let mut found = None;
    for token in classes.split_whitespace() {
        let rank = match token {
            "animate-none" => return None,
            "animate-spin" => Some((0, "spin")),
            "animate-ping" => Some((1, "ping")),
            "animate-pulse" => Some((2, "pulse")),
            "animate-bounce" => Some((3, "bounce")),
            _ => None,
        };
        if let Some((rank, value)) = rank {
            found = match found {
                Some((best, _)) if best <= rank => found,
                _ => Some((rank, value)),
            };
        }
    }
    found.map(|(_, value)| value)
}

// ─────────────────────────── Border left ───────────────────────────

/// Left border accent, as used on quote blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BorderLeft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Resolves `border-l` / `border-l-{n}` plus an optional `border-{color}`.
/// The width is the raw class number (border widths are not on the 4px
/// scale); a bare `border-l` is 1px.
pub fn parse_border_left(classes: &str) -> Option<BorderLeft> {
    let mut border = BorderLeft::default();

    for token in classes.split_whitespace() {
        if token == "border-l" {
            border.width = Some(1);
        } else if let Some(n) = token
            .strip_prefix("border-l-")
            .and_then(|n| n.parse::<u32>().ok())
        {
            border.width = Some(n);
        } else if let Some(name) = token.strip_prefix("border-") {
            if let Some(hex) = palette_color(name) {
                border.color = Some(hex.to_string());
            }
        }
    }

    if border.width.is_none() && border.color.is_none() {
        None
    } else {
        Some(border)
    }
}

// ─────────────────────────── Transform ───────────────────────────

/// Accumulated transform values. Translations are on the 4px scale,
/// scales are fractions of 1, rotations and skews are degrees.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skew_x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skew_y: Option<i32>,
}

impl Transform {
    fn is_empty(&self) -> bool {
        *self == Transform::default()
    }
}

/// Signed suffix after a prefix. A leading `-` on the whole token (the
/// Tailwind negative form, `-translate-x-4`) is stripped before matching,
/// so the sign lives in the digits part when present.
fn signed_suffix(token: &str, prefix: &str) -> Option<i32> {
    let token = token.strip_prefix('-').unwrap_or(token);
    token.strip_prefix(prefix)?.parse::<i32>().ok()
}

fn fraction_suffix(token: &str, prefix: &str) -> Option<f64> {
    let token = token.strip_prefix('-').unwrap_or(token);
    token
        .strip_prefix(prefix)?
        .parse::<u32>()
        .ok()
        .map(|n| n as f64 / 100.0)
}

/// Resolves translate/scale/rotate/skew classes into a [`Transform`].
/// Returns `None` when no transform class is present.
pub fn parse_transform(classes: &str) -> Option<Transform> {
    let mut t = Transform::default();

    for token in classes.split_whitespace() {
        if let Some(n) = signed_suffix(token, "translate-x-") {
            t.translate_x = Some(n * 4);
        } else if let Some(n) = signed_suffix(token, "translate-y-") {
            t.translate_y = Some(n * 4);
        } else if let Some(f) = fraction_suffix(token, "scale-x-") {
            t.scale_x = Some(f);
        } else if let Some(f) = fraction_suffix(token, "scale-y-") {
            t.scale_y = Some(f);
        } else if let Some(f) = fraction_suffix(token, "scale-") {
            t.scale = Some(f);
        } else if let Some(n) = signed_suffix(token, "rotate-") {
            t.rotate = Some(n);
        } else if let Some(n) = signed_suffix(token, "skew-x-") {
            t.skew_x = Some(n);
        } else if let Some(n) = signed_suffix(token, "skew-y-") {
            t.skew_y = Some(n);
        }
    }

    if t.is_empty() {
        None
    } else {
        Some(t)
    }
}

/// Resolves `origin-{corner}` to a CSS transform-origin value.
pub fn parse_transform_origin(classes: &str) -> Option<&'static str> {
    classes.split_whitespace().find_map(|token| match token {
        "origin-center" => Some("center"),
        "origin-top" => Some("top"),
        "origin-top-right" => Some("top right"),
        "origin-right" => Some("right"),
        "origin-bottom-right" => Some("bottom right"),
        "origin-bottom" => Some("bottom"),
        "origin-bottom-left" => Some("bottom left"),
        "origin-left" => Some("left"),
        "origin-top-left" => Some("top left"),
        _ => None,
    })
}

// ─────────────────────────── Transition ───────────────────────────

/// Transition settings. A transition exists only when a property token is
/// present; duration, easing and delay alone produce nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
}

/// Resolves transition classes. `transition-none` suppresses the whole
/// transition. Among property tokens, `transition-all` ranks highest and
/// the bare `transition` token lowest (also mapping to `all`).
pub fn parse_transition(classes: &str) -> Option<Transition> {
    let mut t = Transition::default();
    let mut property_rank = usize::MAX;

    for token in classes.split_whitespace() {
        let property = match token {
            "transition-none" => return None,
            "transition-all" => Some((0, "all")),
            "transition-colors" => Some((1, "colors")),
            "transition-opacity" => Some((2, "opacity")),
            "transition-shadow" => Some((3, "shadow")),
            "transition-transform" => Some((4, "transform")),
            "transition" => Some((5, "all")),
            _ => None,
        };
        if let Some((rank, value)) = property {
            if rank < property_rank {
                property_rank = rank;
                t.property = Some(value);
            }
            continue;
        }

        if let Some(ms) = token
            .strip_prefix("duration-")
            .and_then(|n| n.parse::<u32>().ok())
        {
            t.duration = Some(ms);
        } else if let Some(ms) = token
            .strip_prefix("delay-")
            .and_then(|n| n.parse::<u32>().ok())
        {
            t.delay = Some(ms);
        } else {
            t.ease = match token {
                "ease-linear" => Some("linear"),
                "ease-in-out" => Some("ease-in-out"),
                "ease-in" => Some("ease-in"),
                "ease-out" => Some("ease-out"),
                _ => t.ease,
            };
        }
    }

    if t.property.is_some() {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_table() {
        assert_eq!(parse_opacity("opacity-50"), Some(0.5));
        assert_eq!(parse_opacity("opacity-33"), None);
    }

    #[test]
    fn shadow_defaults_and_sizes() {
        assert_eq!(
            parse_shadow("shadow-lg").as_deref(),
            Some("0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)")
        );
        assert_eq!(
            parse_shadow("shadow").as_deref(),
            Some("0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)")
        );
        assert_eq!(parse_shadow("shadow-3xl"), None);
    }

    #[test]
    fn border_radius_defaults_and_sizes() {
        assert_eq!(parse_border_radius("rounded-lg"), Some(8));
        assert_eq!(parse_border_radius("rounded"), Some(4));
        assert_eq!(parse_border_radius("rounded-full"), Some(9999));
        assert_eq!(parse_border_radius("p-4"), None);
    }

    #[test]
    fn backdrop_blur_default() {
        assert_eq!(parse_backdrop_blur("backdrop-blur").as_deref(), Some("blur(8px)"));
        assert_eq!(
            parse_backdrop_blur("backdrop-blur-md").as_deref(),
            Some("blur(12px)")
        );
    }

    #[test]
    fn border_left_width_and_color() {
        assert_eq!(
            parse_border_left("border-l-4 border-blue-500"),
            Some(BorderLeft {
                width: Some(4),
                color: Some("#3b82f6".to_string()),
            })
        );
        assert_eq!(
            parse_border_left("border-l"),
            Some(BorderLeft {
                width: Some(1),
                color: None,
            })
        );
        assert_eq!(parse_border_left("border-dashed"), None);
    }

    #[test]
    fn transform_values() {
        let t = parse_transform("translate-x-4 scale-105 rotate-45").unwrap();
        assert_eq!(t.translate_x, Some(16));
        assert_eq!(t.scale, Some(1.05));
        assert_eq!(t.rotate, Some(45));
        assert_eq!(parse_transform("p-4"), None);
    }

    #[test]
    fn negative_transform_prefix_is_dropped() {
        // the leading minus form keeps the magnitude only
        let t = parse_transform("-translate-x-4").unwrap();
        assert_eq!(t.translate_x, Some(16));
        let t = parse_transform("translate-x--4").unwrap();
        assert_eq!(t.translate_x, Some(-16));
    }

    #[test]
    fn transform_origin_corners() {
        assert_eq!(parse_transform_origin("origin-top-right"), Some("top right"));
        assert_eq!(parse_transform_origin("origin-top"), Some("top"));
    }

    #[test]
    fn transition_requires_property() {
        let t = parse_transition("transition duration-300 ease-in-out").unwrap();
        assert_eq!(t.property, Some("all"));
        assert_eq!(t.duration, Some(300));
        assert_eq!(t.ease, Some("ease-in-out"));
        assert_eq!(parse_transition("duration-300"), None);
        assert_eq!(parse_transition("transition transition-none"), None);
    }

    #[test]
    fn animation_names() {
        assert_eq!(parse_animation("animate-spin"), Some("spin"));
        assert_eq!(parse_animation("animate-spin animate-none"), None);
        assert_eq!(parse_animation("p-4"), None);
    }

    #[test]
    fn animation_precedence_ignores_token_order() {
        assert_eq!(parse_animation("animate-bounce animate-spin"), Some("spin"));
        assert_eq!(parse_animation("animate-pulse animate-ping"), Some("ping"));
    }
}
