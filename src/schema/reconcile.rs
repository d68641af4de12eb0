//! Schema-tolerant field lookup.
//!
//! Program records change shape between form versions: fields get renamed,
//! moved under a sub-object, or nested one level deeper. The reconciler
//! finds a numeric quantity by trying known exact paths first and falling
//! back to a breadth-first scan for keys that mention the right words.
//!
//! Records are `serde_json::Value` trees, so the scan cannot revisit a node
//! and always terminates.

use std::collections::VecDeque;

use log::debug;
use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;

use crate::schema::conversions::as_finite_number;

/// Look up the value at a dotted path such as `inclusive.school`
///
/// Numeric segments index into arrays, so `sports.0.participants` works.
#[must_use]
pub fn lookup_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let segments: SmallVec<[&str; 4]> = path.split('.').collect();
    let mut current = record;
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Return the first finite number found at any of the candidate paths
#[must_use]
pub fn resolve_number(record: &Value, candidate_paths: &[&str]) -> Option<f64> {
    candidate_paths
        .iter()
        .find_map(|path| lookup_path(record, path).and_then(as_finite_number))
}

/// Breadth-first scan for a numeric field whose key mentions every token
///
/// A key matches when its dotted path from the root, lowercased, contains
/// all tokens as substrings. Array indices are not part of the path. The
/// first match in breadth-first order wins.
#[must_use]
pub fn scan_for_tokens(record: &Value, tokens: &[&str]) -> Option<f64> {
    if tokens.is_empty() {
        return None;
    }
    let wanted: SmallVec<[String; 4]> = tokens.iter().map(|t| t.to_lowercase()).collect();

    let mut queue: VecDeque<(String, &Value)> = VecDeque::new();
    queue.push_back((String::new(), record));

    while let Some((prefix, node)) = queue.pop_front() {
        match node {
            Value::Array(items) => {
                for item in items {
                    queue.push_back((prefix.clone(), item));
                }
            }
            Value::Object(map) => {
                for (key, value) in map {
                    let key_path = if prefix.is_empty() {
                        key.to_lowercase()
                    } else {
                        format!("{prefix}.{}", key.to_lowercase())
                    };

                    if wanted.iter().all(|t| key_path.contains(t.as_str())) {
                        if let Some(number) = as_finite_number(value) {
                            debug!("Token scan {tokens:?} matched '{key_path}' = {number}");
                            return Some(number);
                        }
                    }

                    if matches!(value, Value::Object(_) | Value::Array(_)) {
                        queue.push_back((key_path, value));
                    }
                }
            }
            _ => {}
        }
    }

    None
}

/// Where a reconciled value came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ResolutionSource {
    /// Exact dotted path
    Path(&'static str),
    /// Fuzzy token scan
    Scan(&'static [&'static str]),
}

/// A value found by a [`FieldRule`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved {
    /// The numeric value
    pub value: f64,
    /// Which path or token set produced it
    pub source: ResolutionSource,
}

/// Ordered lookup rule for one logical quantity
///
/// Exact paths are tried before token scans; within each group the first
/// defined value wins.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Name of the quantity, for logging
    pub name: &'static str,
    /// Exact dotted paths, in priority order
    pub exact_paths: &'static [&'static str],
    /// Token sets for the fallback scan, in priority order
    pub token_sets: &'static [&'static [&'static str]],
    /// Whether a stored zero counts as a value or is skipped
    pub accept_zero: bool,
}

impl FieldRule {
    /// Resolve the quantity in `record`, reporting the source used
    #[must_use]
    pub fn resolve(&self, record: &Value) -> Option<Resolved> {
        let usable = |v: &f64| self.accept_zero || *v != 0.0;

        for path in self.exact_paths {
            if let Some(value) = lookup_path(record, path)
                .and_then(as_finite_number)
                .filter(usable)
            {
                return Some(Resolved {
                    value,
                    source: ResolutionSource::Path(*path),
                });
            }
        }

        for tokens in self.token_sets {
            if let Some(value) = scan_for_tokens(record, tokens).filter(usable) {
                debug!("Field '{}' resolved by token scan {tokens:?}", self.name);
                return Some(Resolved {
                    value,
                    source: ResolutionSource::Scan(*tokens),
                });
            }
        }

        None
    }

    /// Resolved value, or 0 for use in sums
    #[must_use]
    pub fn value_or_zero(&self, record: &Value) -> f64 {
        self.resolve(record).map_or(0.0, |r| r.value)
    }
}
