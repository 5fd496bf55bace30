//! # Tailwind utility-class mapper
//!
//! Translates Tailwind utility classes into normalized block attribute
//! values. Each concern (color, spacing, typography, layout, effects) is an
//! independent pure function over one space-separated class string: the
//! string is tokenized once and each function scans the token list for the
//! tokens it understands. Unrecognized or absent tokens always resolve to
//! `None` — no defaults are invented; the block mapper drops `None` values
//! before they reach the output.
//!
//! All pixel scales use a 4px base unit (`p-4` → 16px); computed
//! percentages round half-up to 2 decimal places.

pub mod effects;
pub mod layout;
pub mod palette;
pub mod spacing;
pub mod typography;

pub use effects::{
    parse_animation, parse_backdrop_blur, parse_border_left, parse_border_radius,
    parse_object_fit, parse_opacity, parse_shadow, parse_transform, parse_transform_origin,
    parse_transition, BorderLeft, Transform, Transition,
};
pub use layout::{
    has_flex, has_grid, parse_align_items, parse_col_span, parse_flex_direction,
    parse_flex_wrap, parse_grid_cols, parse_justify_content, parse_position, parse_row_span,
    parse_z_index,
};
pub use palette::{parse_alpha_color, parse_background_color, parse_text_color};
pub use spacing::{
    column_width, column_width_for_span, parse_gap, parse_height, parse_inset, parse_offsets,
    parse_padding, parse_width, Sides, SizeValue,
};
pub use typography::{parse_font_size, parse_text_align};

/// Rounds to 2 decimal places, half-up.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn round2_half_up() {
        assert_eq!(round2(100.0 / 3.0), 33.33);
        assert_eq!(round2(200.0 / 3.0), 66.67);
        assert_eq!(round2(12.125), 12.13);
    }
}
