//! # Field Resolution
//!
//! Turns a raw [`RemoteRecord`] into the flat [`ResolvedFields`] the renderer
//! consumes. Everything here is pure: no I/O, no formatting, no styling.
//!
//! Abilities and moves pick their effect text differently:
//!
//! - **Abilities** take the first English effect entry's short effect, and fall
//!   back to the first English flavor text when that is missing or blank
//!   (recent generations often ship without a short effect).
//! - **Moves** take the English flavor text of one fixed version group and
//!   nothing else. There is no fallback to other version groups.

use crate::model::{Category, Generation, RemoteRecord, ResolvedFields};
use tracing::debug;

pub const TARGET_LOCALE: &str = "en";
pub const REFERENCE_VERSION_GROUP: &str = "scarlet-violet";

pub fn resolve(record: &RemoteRecord, category: Category) -> ResolvedFields {
    let effect = match category {
        Category::Ability => ability_effect(record),
        Category::Move => move_flavor_text(record),
    };

    ResolvedFields {
        category,
        name: record.name.clone(),
        effect,
        generation: generation_label(record.generation.as_ref().map(|g| g.name.as_str())),
        type_name: record.type_.as_ref().map(|t| t.name.clone()),
        damage_class: record.damage_class.as_ref().map(|d| d.name.clone()),
        power: record.power,
        pp: record.pp,
        accuracy: record.accuracy,
        effect_chance: record.effect_chance,
        priority: record.priority,
    }
}

fn ability_effect(record: &RemoteRecord) -> String {
    let short_effect = record
        .effect_entries
        .iter()
        .find(|entry| entry.language.name == TARGET_LOCALE)
        .map(|entry| entry.short_effect.as_str())
        .filter(|text| !text.is_empty());

    if let Some(text) = short_effect {
        return text.to_string();
    }

    debug!(ability = %record.name, "no short effect, falling back to flavor text");
    record
        .flavor_text_entries
        .iter()
        .find(|entry| entry.language.name == TARGET_LOCALE)
        .map(|entry| entry.flavor_text.clone())
        .unwrap_or_default()
}

fn move_flavor_text(record: &RemoteRecord) -> String {
    record
        .flavor_text_entries
        .iter()
        .find(|entry| {
            entry.language.name == TARGET_LOCALE
                && entry
                    .version_group
                    .as_ref()
                    .is_some_and(|vg| vg.name == REFERENCE_VERSION_GROUP)
        })
        .map(|entry| entry.flavor_text.clone())
        .unwrap_or_default()
}

/// `generation-ix` -> `Introduced("IX")`; anything without a second segment
/// is `Unknown`.
pub fn generation_label(identifier: Option<&str>) -> Generation {
    match identifier.and_then(|id| id.split('-').nth(1)) {
        Some(suffix) if !suffix.is_empty() => Generation::Introduced(suffix.to_uppercase()),
        _ => Generation::Unknown,
    }
}
