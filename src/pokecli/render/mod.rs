//! # Rendering
//!
//! Turns resolved data into styled terminal text. Rendering is the last stage
//! of the pipeline and consumes only plain structured values
//! ([`ResolvedFields`], [`EnrichmentResult`]); it never sees a raw API record.
//!
//! Layout calculations (width, wrapping, padding) stay in Rust because they
//! need Unicode-aware measuring. Templates handle presentation:
//! - Style selection by name (`{{ text | style("title") }}`)
//! - Joining pre-measured segments into lines
//!
//! Rendering never fails. If a template errors, a plain-text fallback of the
//! same content is returned instead.

pub mod layout;
pub mod styles;
pub mod templates;
pub mod usage;

use crate::model::{Category, EnrichmentResult, Generation, ResolvedFields, UsageTopic};
use console::Term;
use layout::{
    boxed, line_width, pad_to_width, title_case, wrap_text, BoxData, Line, Segment, BLOCK_PADDING,
    BLOCK_WIDTH, LABEL_WIDTH, ROUNDED_BORDER, THICK_BORDER,
};
use minijinja::{Environment, Value};
use serde::Serialize;
use styles::{border_style_for, header_style_for, names, POKE_THEME};
use tracing::warn;
use unicode_width::UnicodeWidthStr;

const BULLET: &str = "•";
const RELATED_COLUMNS: usize = 3;
const RELATED_NAME_WIDTH: usize = 18;

#[derive(Serialize)]
struct AbilityData {
    title: String,
    bullet: &'static str,
    generation: Option<String>,
    effect: String,
}

#[derive(Serialize)]
struct RelatedCell {
    number: String,
    name: String,
    fill: String,
}

#[derive(Serialize)]
struct RelatedData {
    heading: String,
    rows: Vec<Vec<RelatedCell>>,
}

#[derive(Serialize)]
struct ErrorData {
    prefix: &'static str,
    message: String,
}

/// Template renderer with the theme's `style` filter registered.
pub struct Renderer {
    env: Environment<'static>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Creates a renderer with automatic terminal color detection.
    pub fn new() -> Self {
        Self::with_color(Term::stdout().features().colors_supported())
    }

    /// Creates a renderer with explicit color control.
    pub fn with_color(use_color: bool) -> Self {
        let mut env = Environment::new();
        env.add_filter("style", move |value: Value, name: String| -> String {
            POKE_THEME.apply(&name, &value.to_string(), use_color)
        });
        for &(name, source) in templates::ALL {
            if let Err(e) = env.add_template(name, source) {
                warn!(template = name, error = %e, "template failed to compile");
            }
        }
        Self { env }
    }

    fn render_template<T: Serialize>(&self, name: &str, data: &T) -> Option<String> {
        let result = self
            .env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(data));
        match result {
            Ok(out) => Some(out),
            Err(e) => {
                warn!(template = name, error = %e, "render failed, using plain fallback");
                None
            }
        }
    }

    /// Title line plus generation and effect bullets.
    pub fn render_ability(&self, fields: &ResolvedFields) -> String {
        let data = AbilityData {
            title: title_case(&fields.name),
            bullet: BULLET,
            generation: match &fields.generation {
                Generation::Introduced(numeral) => Some(numeral.clone()),
                Generation::Unknown => None,
            },
            effect: fields.effect.clone(),
        };

        let body = self
            .render_template("ability", &data)
            .unwrap_or_else(|| plain_ability(&data));
        format!("{}\n", body)
    }

    /// Info block followed by the effect block, both bordered in the type color.
    pub fn render_move(&self, fields: &ResolvedFields) -> String {
        let border_style = border_style_for(fields.type_name.as_deref());
        let info = boxed(
            move_info_lines(fields),
            BLOCK_WIDTH,
            BLOCK_PADDING,
            THICK_BORDER,
            &border_style,
        );
        let effect = boxed(
            move_effect_lines(fields),
            BLOCK_WIDTH,
            BLOCK_PADDING,
            THICK_BORDER,
            &border_style,
        );

        format!("{}\n{}\n", self.render_block(&info), self.render_block(&effect))
    }

    /// Numbered, three-column list of related Pokémon.
    pub fn render_enrichment(&self, related: &EnrichmentResult) -> String {
        let subject = title_case(&related.entity_name);
        let heading = match related.category {
            Category::Ability => format!("Pokémon with {}", subject),
            Category::Move => format!("Pokémon that learn {}", subject),
        };

        let number_width = related.names.len().to_string().len();
        let cells: Vec<RelatedCell> = related
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| RelatedCell {
                number: format!("{:>width$}.", i + 1, width = number_width),
                name: title_case(name),
                fill: String::new(),
            })
            .collect();

        let mut rows: Vec<Vec<RelatedCell>> = Vec::new();
        for cell in cells {
            match rows.last_mut() {
                Some(row) if row.len() < RELATED_COLUMNS => row.push(cell),
                _ => rows.push(vec![cell]),
            }
        }
        for row in &mut rows {
            let last = row.len().saturating_sub(1);
            for cell in row.iter_mut().take(last) {
                cell.fill = pad_to_width("", RELATED_NAME_WIDTH.saturating_sub(cell.name.width()));
            }
        }
        if rows.is_empty() {
            rows.push(vec![RelatedCell {
                number: String::new(),
                name: "No Pokémon found.".to_string(),
                fill: String::new(),
            }]);
        }

        let data = RelatedData { heading, rows };
        self.render_template("related", &data)
            .unwrap_or_else(|| plain_related(&data))
    }

    /// Bordered usage text for a command (or the whole tool).
    pub fn render_usage(&self, topic: UsageTopic) -> String {
        let lines = usage::usage_lines(topic);
        let width = lines.iter().map(|l| line_width(l)).max().unwrap_or(0) + BLOCK_PADDING * 2;
        let data = boxed(lines, width, BLOCK_PADDING, ROUNDED_BORDER, names::HELP_BORDER);
        format!("{}\n", self.render_block(&data))
    }

    /// One-line error, used when an error has to live inside the output text.
    pub fn render_error(&self, message: &str) -> String {
        let data = ErrorData {
            prefix: "Error:",
            message: message.to_string(),
        };
        let line = self
            .render_template("error", &data)
            .unwrap_or_else(|| format!("{} {}", data.prefix, data.message));
        format!("{}\n", line)
    }

    fn render_block(&self, data: &BoxData) -> String {
        self.render_template("block", data)
            .unwrap_or_else(|| plain_block(data))
    }
}

fn move_info_lines(fields: &ResolvedFields) -> Vec<Line> {
    let content_width = BLOCK_WIDTH - BLOCK_PADDING * 2;
    let header_style = header_style_for(fields.type_name.as_deref());
    let number = |n: Option<i64>| n.map(|v| v.to_string()).unwrap_or_default();

    let rows = [
        ("Type", fields.type_name.as_deref().map(title_case).unwrap_or_default()),
        ("Power", number(fields.power)),
        ("PP", number(fields.pp)),
        ("Accuracy", number(fields.accuracy)),
        ("Category", fields.damage_class.as_deref().map(title_case).unwrap_or_default()),
        (
            "Effect Chance",
            fields.effect_chance.map(|c| format!("{}%", c)).unwrap_or_default(),
        ),
        ("Priority", number(fields.priority)),
    ];

    let mut lines: Vec<Line> = wrap_text(&title_case(&fields.name), content_width)
        .into_iter()
        .map(|text| vec![Segment::new(text, &header_style)])
        .collect();
    lines.push(vec![Segment::plain("")]);
    lines.extend(rows.into_iter().map(|(label, value)| {
        vec![
            Segment::new(pad_to_width(label, LABEL_WIDTH), names::LABEL),
            Segment::plain("|"),
            Segment::new(value, names::VALUE),
        ]
    }));
    lines
}

fn move_effect_lines(fields: &ResolvedFields) -> Vec<Line> {
    let content_width = BLOCK_WIDTH - BLOCK_PADDING * 2;
    let mut lines = vec![vec![Segment::new("Effect:", names::TITLE)]];
    lines.extend(
        wrap_text(&fields.effect, content_width)
            .into_iter()
            .map(|text| vec![Segment::plain(text)]),
    );
    lines
}

fn plain_ability(data: &AbilityData) -> String {
    let generation = match &data.generation {
        Some(numeral) => format!("First introduced in generation {}", numeral),
        None => "Generation: Unknown".to_string(),
    };
    format!(
        "{}\n{} {}\n{} Effect: {}",
        data.title, data.bullet, generation, data.bullet, data.effect
    )
}

fn plain_block(data: &BoxData) -> String {
    let mut out = vec![data.top.clone()];
    for line in &data.lines {
        let text: String = line.iter().map(|s| s.text.as_str()).collect();
        out.push(format!("{}{}{}", data.side, text, data.side));
    }
    out.push(data.bottom.clone());
    out.join("\n")
}

fn plain_related(data: &RelatedData) -> String {
    let mut out = format!("{}\n", data.heading);
    for row in &data.rows {
        for cell in row {
            out.push_str(&format!("{} {}{}", cell.number, cell.name, cell.fill));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flamethrower() -> ResolvedFields {
        ResolvedFields {
            category: Category::Move,
            name: "flamethrower".to_string(),
            effect: "The target is scorched with an intense blast of fire. This may also leave the target with a burn.".to_string(),
            generation: Generation::Introduced("I".to_string()),
            type_name: Some("fire".to_string()),
            damage_class: Some("special".to_string()),
            power: Some(90),
            pp: Some(15),
            accuracy: Some(100),
            effect_chance: Some(10),
            priority: Some(0),
        }
    }

    fn stench() -> ResolvedFields {
        ResolvedFields {
            category: Category::Ability,
            name: "stench".to_string(),
            effect: "Has a 10% chance of making target Pokémon flinch with each hit.".to_string(),
            generation: Generation::Introduced("III".to_string()),
            type_name: None,
            damage_class: None,
            power: None,
            pp: None,
            accuracy: None,
            effect_chance: None,
            priority: None,
        }
    }

    #[test]
    fn test_render_ability_plain() {
        let out = Renderer::with_color(false).render_ability(&stench());
        assert_eq!(
            out,
            "Stench\n\
             • First introduced in generation III\n\
             • Effect: Has a 10% chance of making target Pokémon flinch with each hit.\n"
        );
    }

    #[test]
    fn test_render_ability_unknown_generation() {
        let mut fields = stench();
        fields.generation = Generation::Unknown;
        let out = Renderer::with_color(false).render_ability(&fields);
        assert!(out.contains("• Generation: Unknown\n"));
    }

    #[test]
    fn test_render_ability_empty_effect_keeps_line() {
        let mut fields = stench();
        fields.effect = String::new();
        let out = Renderer::with_color(false).render_ability(&fields);
        assert!(out.ends_with("• Effect: \n"));
    }

    #[test]
    fn test_render_move_has_two_blocks_with_seven_rows() {
        let out = Renderer::with_color(false).render_move(&flamethrower());

        assert_eq!(out.matches('┏').count(), 2);
        assert_eq!(out.matches('┗').count(), 2);
        assert_eq!(out.matches('|').count(), 7);

        for row in [
            "Type           |Fire",
            "Power          |90",
            "PP             |15",
            "Accuracy       |100",
            "Category       |Special",
            "Effect Chance  |10%",
            "Priority       |0",
        ] {
            assert!(out.contains(row), "missing row {:?}", row);
        }
        assert!(out.contains("Flamethrower"));
        assert!(out.contains("Effect:"));
        assert!(out.contains("The target is scorched with"));
    }

    #[test]
    fn test_render_move_lines_are_aligned() {
        let out = Renderer::with_color(false).render_move(&flamethrower());
        for line in out.lines() {
            assert_eq!(line.width(), BLOCK_WIDTH + 2, "misaligned: {:?}", line);
        }
    }

    #[test]
    fn test_render_move_missing_values_keep_rows() {
        let mut fields = flamethrower();
        fields.power = None;
        fields.effect_chance = None;
        let out = Renderer::with_color(false).render_move(&fields);
        assert!(out.contains("Power          |  "));
        assert!(out.contains("Effect Chance  |  "));
        assert_eq!(out.matches('|').count(), 7);
    }

    #[test]
    fn test_render_move_with_color_uses_ansi() {
        let out = Renderer::with_color(true).render_move(&flamethrower());
        assert!(out.contains("\u{1b}["));
    }

    #[test]
    fn test_render_enrichment_columns() {
        let related = EnrichmentResult {
            category: Category::Ability,
            entity_name: "stench".to_string(),
            names: vec!["gloom".into(), "grimer".into(), "muk".into(), "stunky".into()],
        };
        let out = Renderer::with_color(false).render_enrichment(&related);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Pokémon with Stench");
        assert!(lines[1].starts_with("1. Gloom"));
        assert!(lines[1].contains("2. Grimer"));
        assert!(lines[1].ends_with("3. Muk"));
        assert_eq!(lines[2], "4. Stunky");
    }

    #[test]
    fn test_render_enrichment_empty() {
        let related = EnrichmentResult {
            category: Category::Move,
            entity_name: "struggle".to_string(),
            names: vec![],
        };
        let out = Renderer::with_color(false).render_enrichment(&related);
        assert!(out.starts_with("Pokémon that learn Struggle\n"));
        assert!(out.contains("No Pokémon found."));
    }

    #[test]
    fn test_render_usage_is_bordered() {
        let out = Renderer::with_color(false).render_usage(UsageTopic::Command(Category::Move));
        assert!(out.starts_with('╭'));
        assert!(out.contains("poke-cli move <move-name> [flag]"));
        let widths: Vec<usize> = out.lines().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_render_error_line() {
        let out = Renderer::with_color(false).render_error("boom");
        assert_eq!(out, "Error: boom\n");
    }
}
