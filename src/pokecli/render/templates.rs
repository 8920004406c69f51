//! Templates are minijinja sources kept in stand-alone files and included here
//! as string constants.
//!
//! Layout (widths, padding, wrapping) is never done in a template. The Rust side
//! hands over pre-measured segments and the template only picks styles and
//! stitches lines together. Line breaks are explicit; watch the `-%}` trims
//! when editing the loops.

pub const ABILITY_TEMPLATE: &str = include_str!("templates/ability.tmp");
pub const BLOCK_TEMPLATE: &str = include_str!("templates/block.tmp");
pub const RELATED_TEMPLATE: &str = include_str!("templates/related.tmp");
pub const ERROR_TEMPLATE: &str = include_str!("templates/error.tmp");

pub const ALL: &[(&str, &str)] = &[
    ("ability", ABILITY_TEMPLATE),
    ("block", BLOCK_TEMPLATE),
    ("related", RELATED_TEMPLATE),
    ("error", ERROR_TEMPLATE),
];
