//! Typography utilities: `text-{size}` and `text-{align}`.

/// `text-{size}` to pixel size.
const FONT_SIZE_MAP: &[(&str, u32)] = &[
    ("xs", 12),
    ("sm", 14),
    ("base", 16),
    ("lg", 18),
    ("xl", 20),
    ("2xl", 24),
    ("3xl", 30),
    ("4xl", 36),
    ("5xl", 48),
    ("6xl", 60),
    ("7xl", 72),
    ("8xl", 96),
    ("9xl", 128),
];

/// Resolves `text-{size}` to a pixel value. `text-3xl` → 30.
pub fn parse_font_size(classes: &str) -> Option<u32> {
    for token in classes.split_whitespace() {
        if let Some(size) = token.strip_prefix("text-") {
            if let Some(&(_, px)) = FONT_SIZE_MAP.iter().find(|(key, _)| *key == size) {
                return Some(px);
            }
        }
    }
    None
}

/// Resolves text alignment. `left` wins over `center` wins over `right`
/// wins over `justify` when several appear.
pub fn parse_text_align(classes: &str) -> Option<&'static str> {
    let mut found = None;
    for token in classes.split_whitespace() {
        let rank = match token {
            "text-left" => Some((0, "left")),
            "text-center" => Some((1, "center")),
            "text-right" => Some((2, "right")),
            "text-justify" => Some((3, "justify")),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_from_map() {
        assert_eq!(parse_font_size("text-3xl font-bold"), Some(30));
        assert_eq!(parse_font_size("text-base"), Some(16));
        assert_eq!(parse_font_size("text-blue-600"), None);
    }

    #[test]
    fn text_align_precedence() {
        assert_eq!(parse_text_align("text-center"), Some("center"));
        assert_eq!(parse_text_align("text-right text-left"), Some("left"));
        assert_eq!(parse_text_align("text-justify text-center"), Some("center"));
        assert_eq!(parse_text_align("text-xl"), None);
    }
}
