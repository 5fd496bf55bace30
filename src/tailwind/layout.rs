//! Layout utilities: grid and flex detection, direction, alignment,
//! positioning and span classes.

/// True when a bare `grid` token is present.
pub fn has_grid(classes: &str) -> bool {
    classes.split_whitespace().any(|token| token == "grid")
}

/// True when a bare `flex` token is present. `flex-col` alone does not
/// count as a flex container.
pub fn has_flex(classes: &str) -> bool {
    classes.split_whitespace().any(|token| token == "flex")
}

/// Resolves `grid-cols-{n}` to a column count.
pub fn parse_grid_cols(classes: &str) -> Option<u32> {
    classes.split_whitespace().find_map(|token| {
        token
            .strip_prefix("grid-cols-")
            .and_then(|n| n.parse::<u32>().ok())
    })
}

/// Resolves flex direction. `flex-col` → `column`.
pub fn parse_flex_direction(classes: &str) -> Option<&'static str> {
    classes.split_whitespace().find_map(|token| match token {
        "flex-col-reverse" => Some("column-reverse"),
        "flex-col" => Some("column"),
        "flex-row-reverse" => Some("row-reverse"),
        "flex-row" => Some("row"),
        _ => None,
    })
}

/// Resolves flex wrap. `flex-wrap` → `wrap`.
pub fn parse_flex_wrap(classes: &str) -> Option<&'static str> {
    classes.split_whitespace().find_map(|token| match token {
        "flex-wrap-reverse" => Some("wrap-reverse"),
        "flex-wrap" => Some("wrap"),
        "flex-nowrap" => Some("nowrap"),
        _ => None,
    })
}

/// Resolves `justify-{x}` to a CSS justify-content value.
pub fn parse_justify_content(classes: &str) -> Option<&'static str> {
    classes.split_whitespace().find_map(|token| match token {
        "justify-start" => Some("flex-start"),
        "justify-end" => Some("flex-end"),
        "justify-center" => Some("center"),
        "justify-between" => Some("space-between"),
        "justify-around" => Some("space-around"),
        "justify-evenly" => Some("space-evenly"),
        _ => None,
    })
}

/// Resolves `items-{x}` to a CSS align-items value.
pub fn parse_align_items(classes: &str) -> Option<&'static str> {
    classes.split_whitespace().find_map(|token| match token {
        "items-start" => Some("flex-start"),
        "items-end" => Some("flex-end"),
        "items-center" => Some("center"),
        "items-baseline" => Some("baseline"),
        "items-stretch" => Some("stretch"),
        _ => None,
    })
}

/// Resolves a positioning mode token. `absolute` wins over `relative`
/// when both appear.
pub fn parse_position(classes: &str) -> Option<&'static str> {
    let mut found = None;
    for token in classes.split_whitespace() {
        let rank = match token {
            "absolute" => Some((0, "absolute")),
            "fixed" => Some((1, "fixed")),
            "sticky" => Some((2, "sticky")),
            "relative" => Some((3, "relative")),
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

/// Resolves `z-{n}` to a stacking index.
pub fn parse_z_index(classes: &str) -> Option<u32> {
    classes.split_whitespace().find_map(|token| {
        token.strip_prefix("z-").and_then(|n| n.parse::<u32>().ok())
    })
}

/// Resolves `col-span-{n}`; `col-span-full` spans all 12 grid columns.
pub fn parse_col_span(classes: &str) -> Option<u32> {
    classes.split_whitespace().find_map(|token| {
        let rest = token.strip_prefix("col-span-")?;
        if rest == "full" {
            Some(12)
        } else {
            rest.parse::<u32>().ok()
        }
    })
}

/// Resolves `row-span-{n}`; `row-span-full` spans all 6 grid rows.
pub fn parse_row_span(classes: &str) -> Option<u32> {
    classes.split_whitespace().find_map(|token| {
        let rest = token.strip_prefix("row-span-")?;
        if rest == "full" {
            Some(6)
        } else {
            rest.parse::<u32>().ok()
        }
    })
}
