//! Color utilities: `text-{color}`, `bg-{color}` and alpha variants.

// ─────────────────────────── Color table ───────────────────────────

/// Supported palette: five hue families at shades 50-900 plus the named
/// colors `white`, `black` and `transparent`.
const COLOR_MAP: &[(&str, &str)] = &[
    ("gray-50", "#f9fafb"),
    ("gray-100", "#f3f4f6"),
    ("gray-200", "#e5e7eb"),
    ("gray-300", "#d1d5db"),
    ("gray-400", "#9ca3af"),
    ("gray-500", "#6b7280"),
    ("gray-600", "#4b5563"),
    ("gray-700", "#374151"),
    ("gray-800", "#1f2937"),
    ("gray-900", "#111827"),
    ("blue-50", "#eff6ff"),
    ("blue-100", "#dbeafe"),
    ("blue-200", "#bfdbfe"),
    ("blue-300", "#93c5fd"),
    ("blue-400", "#60a5fa"),
    ("blue-500", "#3b82f6"),
    ("blue-600", "#2563eb"),
    ("blue-700", "#1d4ed8"),
    ("blue-800", "#1e40af"),
    ("blue-900", "#1e3a8a"),
    ("red-50", "#fef2f2"),
    ("red-100", "#fee2e2"),
    ("red-200", "#fecaca"),
    ("red-300", "#fca5a5"),
    ("red-400", "#f87171"),
    ("red-500", "#ef4444"),
    ("red-600", "#dc2626"),
    ("red-700", "#b91c1c"),
    ("red-800", "#991b1b"),
    ("red-900", "#7f1d1d"),
    ("green-50", "#f0fdf4"),
    ("green-100", "#dcfce7"),
    ("green-200", "#bbf7d0"),
    ("green-300", "#86efac"),
    ("green-400", "#4ade80"),
    ("green-500", "#22c55e"),
    ("green-600", "#16a34a"),
    ("green-700", "#15803d"),
    ("green-800", "#166534"),
    ("green-900", "#14532d"),
    ("yellow-50", "#fefce8"),
    ("yellow-100", "#fef9c3"),
    ("yellow-200", "#fef08a"),
    ("yellow-300", "#fde047"),
    ("yellow-400", "#facc15"),
    ("yellow-500", "#eab308"),
    ("yellow-600", "#ca8a04"),
    ("yellow-700", "#a16207"),
    ("yellow-800", "#854d0e"),
    ("yellow-900", "#713f12"),
    ("white", "#ffffff"),
    ("black", "#000000"),
    ("transparent", "transparent"),
];

/// Looks up a palette name like `blue-600` or `white`.
pub fn palette_color(name: &str) -> Option<&'static str> {
    COLOR_MAP
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, hex)| *hex)
}

// ─────────────────────────── Parsers ───────────────────────────

/// Resolves `text-{color}` to a hex value. `text-blue-600` → `#2563eb`.
pub fn parse_text_color(classes: &str) -> Option<String> {
    prefixed_color(classes, "text-")
}

/// Resolves `bg-{color}` to a hex value. `bg-gray-100` → `#f3f4f6`.
pub fn parse_background_color(classes: &str) -> Option<String> {
    prefixed_color(classes, "bg-")
}

fn prefixed_color(classes: &str, prefix: &str) -> Option<String> {
    for token in classes.split_whitespace() {
        if let Some(rest) = token.strip_prefix(prefix) {
            if let Some(hex) = palette_color(rest) {
                return Some(hex.to_string());
            }
        }
    }
    None
}

/// Resolves alpha color tokens like `bg-white/50` to an `rgba()` string.
///
/// Only named colors resolve here (`white`, `black`); shaded names contain
/// a `-` and the alpha form applies to the bare color name. `transparent`
/// has no channel values and never matches.
pub fn parse_alpha_color(classes: &str, prefix: &str) -> Option<String> {
    for token in classes.split_whitespace() {
        let rest = match token.strip_prefix(prefix) {
            Some(rest) => rest,
            None => continue,
        };
        let rest = match rest.strip_prefix('-') {
            Some(rest) => rest,
            None => continue,
        };
        let (name, alpha) = match rest.split_once('/') {
            Some(parts) => parts,
            None => continue,
        };
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            continue;
        }
        let alpha: u32 = match alpha.parse() {
            Ok(n) => n,
            Err(_) => continue,
        };
        let hex = match palette_color(name) {
            Some("transparent") | None => continue,
            Some(hex) => hex,
        };
        let (r, g, b) = hex_channels(hex)?;
        return Some(format!("rgba({}, {}, {}, {})", r, g, b, format_alpha(alpha)));
    }
    None
}

fn hex_channels(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Formats the alpha fraction without a trailing zero: 50 → `0.5`,
/// 100 → `1`, 25 → `0.25`.
fn format_alpha(percent: u32) -> String {
    let value = percent as f64 / 100.0;
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
