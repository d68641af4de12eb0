//! Program record model
//!
//! A program record is the snapshot the data-entry form hands over: an
//! optional list of sports programs, an optional list of structured
//! physical-activity programs, an inclusion block and, in older snapshots,
//! plain top-level totals. Field names and nesting vary between form
//! versions, so the typed view is built leniently and the raw tree is kept
//! for the field reconciler.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::schema::conversions::{
    array_items, first_non_empty_str, headcount_of, is_truthy, non_empty_str, number_or_zero,
};

/// Sessions per week implied by the form's "More" option
pub const MORE_SESSIONS_PER_WEEK: f64 = 6.0;

/// Delivery mode of a structured physical-activity program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaMode {
    /// Delivered to a group; participants as stated
    Group,
    /// Delivered one-on-one; always counts a single participant
    OneOnOne,
    /// Mode not chosen
    Unspecified,
}

impl From<&str> for PaMode {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "group" => PaMode::Group,
            "1 on 1" | "one-on-one" | "one on one" | "1:1" | "1-on-1" | "individual" => {
                PaMode::OneOnOne
            }
            _ => PaMode::Unspecified,
        }
    }
}

impl fmt::Display for PaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaMode::Group => write!(f, "Group"),
            PaMode::OneOnOne => write!(f, "One-on-one"),
            PaMode::Unspecified => write!(f, "Unspecified"),
        }
    }
}

/// Common view of a program instance for aggregation
pub trait ActivityProgram {
    /// Participants this instance contributes to the totals
    fn counted_participants(&self) -> u64;
    /// Sessions per week
    fn sessions_per_week(&self) -> f64;
    /// Minutes per session
    fn minutes_per_session(&self) -> f64;
    /// Where the program runs, if given
    fn location(&self) -> Option<&str>;
}

/// Read sessions per week, deriving it from the dropdown option when the
/// numeric field is missing
fn read_sessions_per_week(item: &Value) -> f64 {
    let sessions = number_or_zero(item.get("sessionsPerWeek"));
    if sessions > 0.0 {
        return sessions;
    }

    match non_empty_str(item.get("sessionsPerWeekOpt")).map(str::trim) {
        Some(opt) if opt.eq_ignore_ascii_case("more") => MORE_SESSIONS_PER_WEEK,
        Some(opt) => opt.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0),
        None => sessions,
    }
}

fn read_string(item: &Value, key: &str) -> Option<String> {
    non_empty_str(item.get(key)).map(str::to_string)
}

/// One sports program entry
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SportProgram {
    /// Type of sport, from `typeOfSport`, `sport` or `type`
    pub type_of_sport: Option<String>,
    /// Stated participants
    pub participants: u64,
    /// Location of the program
    pub location: Option<String>,
    /// Sessions per week
    pub sessions_per_week: f64,
    /// Minutes per session
    pub minutes_per_session: f64,
}

impl SportProgram {
    /// Build from a raw list item; non-objects yield an empty entry
    #[must_use]
    pub fn from_value(item: &Value) -> Self {
        Self {
            type_of_sport: first_non_empty_str(item, &["typeOfSport", "sport", "type"])
                .map(str::to_string),
            participants: headcount_of(item.get("participants")),
            location: read_string(item, "location"),
            sessions_per_week: read_sessions_per_week(item),
            minutes_per_session: number_or_zero(item.get("minutesPerSession")),
        }
    }
}

impl ActivityProgram for SportProgram {
    fn counted_participants(&self) -> u64 {
        self.participants
    }

    fn sessions_per_week(&self) -> f64 {
        self.sessions_per_week
    }

    fn minutes_per_session(&self) -> f64 {
        self.minutes_per_session
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

/// One structured physical-activity program entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaProgram {
    /// Program name, from `programName` or `name`
    pub name: Option<String>,
    /// Delivery mode
    pub mode: PaMode,
    /// Stated participants (ignored for one-on-one programs)
    pub participants: u64,
    /// Location of the program
    pub location: Option<String>,
    /// Sessions per week
    pub sessions_per_week: f64,
    /// Minutes per session
    pub minutes_per_session: f64,
}

impl Default for PaProgram {
    fn default() -> Self {
        Self {
            name: None,
            mode: PaMode::Unspecified,
            participants: 0,
            location: None,
            sessions_per_week: 0.0,
            minutes_per_session: 0.0,
        }
    }
}

impl PaProgram {
    /// Build from a raw list item; non-objects yield an empty entry
    #[must_use]
    pub fn from_value(item: &Value) -> Self {
        Self {
            name: first_non_empty_str(item, &["programName", "name"]).map(str::to_string),
            mode: non_empty_str(item.get("mode")).map_or(PaMode::Unspecified, PaMode::from),
            participants: headcount_of(item.get("participants")),
            location: read_string(item, "location"),
            sessions_per_week: read_sessions_per_week(item),
            minutes_per_session: number_or_zero(item.get("minutesPerSession")),
        }
    }
}

impl ActivityProgram for PaProgram {
    fn counted_participants(&self) -> u64 {
        match self.mode {
            PaMode::OneOnOne => 1,
            PaMode::Group | PaMode::Unspecified => self.participants,
        }
    }

    fn sessions_per_week(&self) -> f64 {
        self.sessions_per_week
    }

    fn minutes_per_session(&self) -> f64 {
        self.minutes_per_session
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

/// Snapshot of an organisation's programs, as produced by the form
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramRecord {
    /// Whether the sports list is switched on
    pub sports_enabled: bool,
    /// Sports programs (empty when the list is missing or malformed)
    pub sports: Vec<SportProgram>,
    /// Whether the physical-activity list is switched on
    pub pa_enabled: bool,
    /// Physical-activity programs (empty when missing or malformed)
    pub pa: Vec<PaProgram>,
    raw: Value,
}

impl ProgramRecord {
    /// Build the typed view of a raw record
    #[must_use]
    pub fn from_value(raw: Value) -> Self {
        let sports = array_items(raw.get("sports"))
            .iter()
            .map(SportProgram::from_value)
            .collect();
        let pa = array_items(raw.get("pa"))
            .iter()
            .map(PaProgram::from_value)
            .collect();

        Self {
            sports_enabled: is_truthy(raw.get("sportsEnabled")),
            sports,
            pa_enabled: is_truthy(raw.get("paEnabled")),
            pa,
            raw,
        }
    }

    /// An empty record: nothing enabled, no fallback fields
    #[must_use]
    pub fn empty() -> Self {
        Self::from_value(Value::Object(serde_json::Map::new()))
    }

    /// The raw tree, for schema-tolerant lookups
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Sports programs that count, i.e. none when the list is switched off
    #[must_use]
    pub fn enabled_sports(&self) -> &[SportProgram] {
        if self.sports_enabled { &self.sports } else { &[] }
    }

    /// Physical-activity programs that count
    #[must_use]
    pub fn enabled_pa(&self) -> &[PaProgram] {
        if self.pa_enabled { &self.pa } else { &[] }
    }
}

impl From<Value> for ProgramRecord {
    fn from(raw: Value) -> Self {
        Self::from_value(raw)
    }
}
