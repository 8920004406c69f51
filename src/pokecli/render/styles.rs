use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style names referenced by the templates.
pub mod names {
    pub const PLAIN: &str = "plain";
    pub const TITLE: &str = "title";
    pub const BULLET: &str = "bullet";
    pub const LABEL: &str = "label";
    pub const VALUE: &str = "value";
    pub const HINT: &str = "hint";
    pub const HELP_BORDER: &str = "help_border";
    pub const ERROR: &str = "error";
    pub const INDEX: &str = "index";
    pub const TYPE_DEFAULT: &str = "type_default";
    pub const HEADER_DEFAULT: &str = "header_default";
}

/// Elemental type -> border/header color.
pub const TYPE_PALETTE: &[(&str, (u8, u8, u8))] = &[
    ("normal", (0xB7, 0xB7, 0xA9)),
    ("fire", (0xFF, 0x44, 0x22)),
    ("water", (0x34, 0x99, 0xFF)),
    ("electric", (0xFF, 0xCC, 0x33)),
    ("grass", (0x77, 0xCC, 0x55)),
    ("ice", (0x66, 0xCC, 0xFF)),
    ("fighting", (0xBB, 0x55, 0x44)),
    ("poison", (0xAA, 0x56, 0x99)),
    ("ground", (0xDE, 0xBB, 0x55)),
    ("flying", (0x88, 0x9A, 0xFF)),
    ("psychic", (0xFF, 0x55, 0x99)),
    ("bug", (0xAA, 0xBB, 0x22)),
    ("rock", (0xBB, 0xAA, 0x66)),
    ("ghost", (0x66, 0x66, 0xBB)),
    ("dragon", (0x77, 0x66, 0xEE)),
    ("dark", (0x77, 0x55, 0x44)),
    ("steel", (0xAA, 0xAA, 0xBB)),
    ("fairy", (0xEE, 0x99, 0xEE)),
];

const ACCENT: (u8, u8, u8) = (0xFF, 0xCC, 0x00);

/// A collection of named styles, applied by the `style` template filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Apply a named style. Unknown names leave the text untouched.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            _ => text.to_string(),
        }
    }
}

pub static POKE_THEME: Lazy<Theme> = Lazy::new(|| {
    let accent = rgb_to_ansi256(ACCENT);
    let theme = Theme::new()
        .add(names::PLAIN, Style::new())
        .add(names::TITLE, Style::new().bold())
        .add(names::BULLET, Style::new().color256(accent))
        .add(names::LABEL, Style::new().bold())
        .add(names::VALUE, Style::new().dim())
        .add(names::HINT, Style::new().italic())
        .add(names::HELP_BORDER, Style::new().color256(accent))
        .add(names::ERROR, Style::new().red().bold())
        .add(names::INDEX, Style::new().dim())
        .add(names::TYPE_DEFAULT, Style::new())
        .add(names::HEADER_DEFAULT, Style::new().bold());

    TYPE_PALETTE.iter().fold(theme, |theme, (name, rgb)| {
        let color = rgb_to_ansi256(*rgb);
        theme
            .add(&format!("type_{}", name), Style::new().color256(color))
            .add(&format!("header_{}", name), Style::new().color256(color).bold())
    })
});

/// Border style name for an elemental type, falling back to the default.
pub fn border_style_for(type_name: Option<&str>) -> String {
    type_name
        .map(|t| format!("type_{}", t.to_lowercase()))
        .filter(|name| POKE_THEME.has(name))
        .unwrap_or_else(|| names::TYPE_DEFAULT.to_string())
}

/// Header style name for an elemental type, falling back to the default.
pub fn header_style_for(type_name: Option<&str>) -> String {
    type_name
        .map(|t| format!("header_{}", t.to_lowercase()))
        .filter(|name| POKE_THEME.has(name))
        .unwrap_or_else(|| names::HEADER_DEFAULT.to_string())
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_palette_type_has_styles() {
        for (name, _) in TYPE_PALETTE {
            assert!(POKE_THEME.has(&format!("type_{}", name)));
            assert!(POKE_THEME.has(&format!("header_{}", name)));
        }
    }

    #[test]
    fn test_border_style_lookup() {
        assert_eq!(border_style_for(Some("fire")), "type_fire");
        assert_eq!(border_style_for(Some("Water")), "type_water");
        assert_eq!(border_style_for(Some("stellar")), names::TYPE_DEFAULT);
        assert_eq!(border_style_for(None), names::TYPE_DEFAULT);
        assert_eq!(header_style_for(Some("fire")), "header_fire");
        assert_eq!(header_style_for(None), names::HEADER_DEFAULT);
    }

    #[test]
    fn test_apply_without_color_is_plain() {
        assert_eq!(POKE_THEME.apply(names::TITLE, "Stench", false), "Stench");
    }

    #[test]
    fn test_apply_with_color_emits_ansi() {
        let styled = POKE_THEME.apply(names::TITLE, "Stench", true);
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("Stench"));
    }

    #[test]
    fn test_unknown_style_is_untouched() {
        assert_eq!(POKE_THEME.apply("nope", "text", true), "text");
    }

    #[test]
    fn test_rgb_to_ansi256() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
    }
}
