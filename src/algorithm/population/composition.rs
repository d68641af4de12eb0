//! Participant composition breakdowns
//!
//! Groups program entries by a category name and sums their participants,
//! keeping categories in the order they are first seen.

use rustc_hash::FxHashMap;

use crate::models::program::{ActivityProgram, PaProgram, SportProgram};
use crate::models::results::{Composition, CompositionEntry};

/// Category name used when an entry has none
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Normalise a grouping key: trimmed, and "Unknown" when blank
#[must_use]
pub fn normalise_group_key(key: Option<&str>) -> String {
    let trimmed = key.unwrap_or(UNKNOWN_CATEGORY).trim();
    if trimmed.is_empty() {
        UNKNOWN_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Sum `value_fn` per `key_fn` category, ordered by first appearance
///
/// Zero contributions are dropped rather than creating empty categories.
pub fn group_sum<'a, T, K, V>(items: &'a [T], key_fn: K, value_fn: V) -> Vec<CompositionEntry>
where
    K: Fn(&'a T) -> Option<&'a str>,
    V: Fn(&T) -> u64,
{
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut entries: Vec<CompositionEntry> = Vec::new();

    for item in items {
        let value = value_fn(item);
        if value == 0 {
            continue;
        }

        let key = normalise_group_key(key_fn(item));
        match index.get(&key) {
            Some(&i) => entries[i].value = entries[i].value.saturating_add(value),
            None => {
                index.insert(key.clone(), entries.len());
                entries.push(CompositionEntry::new(key, value));
            }
        }
    }

    entries
}

/// Sports participants grouped by type of sport ("Sport" when unnamed)
#[must_use]
pub fn sports_by_type(sports: &[SportProgram]) -> Vec<CompositionEntry> {
    group_sum(
        sports,
        |s| Some(s.type_of_sport.as_deref().unwrap_or("Sport")),
        ActivityProgram::counted_participants,
    )
}

/// Physical-activity participants grouped by program name ("Program" when unnamed)
#[must_use]
pub fn pa_by_name(pa: &[PaProgram]) -> Vec<CompositionEntry> {
    group_sum(
        pa,
        |p| Some(p.name.as_deref().unwrap_or("Program")),
        ActivityProgram::counted_participants,
    )
}

/// Participants grouped by location
#[must_use]
pub fn by_location<T: ActivityProgram>(items: &[T]) -> Vec<CompositionEntry> {
    group_sum(items, ActivityProgram::location, ActivityProgram::counted_participants)
}

/// All four breakdowns for the enabled lists
#[must_use]
pub fn build_composition(sports: &[SportProgram], pa: &[PaProgram]) -> Composition {
    Composition {
        sports_by_type: sports_by_type(sports),
        sports_by_location: by_location(sports),
        pa_by_name: pa_by_name(pa),
        pa_by_location: by_location(pa),
    }
}
