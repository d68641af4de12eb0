//! Known locations of the quantities the aggregator reconciles.
//!
//! Each rule lists the field names used by past and present form versions,
//! most specific first.

use crate::schema::reconcile::FieldRule;

/// School participants with disability
pub const SCHOOL_DISABILITY: FieldRule = FieldRule {
    name: "school_disability_participants",
    exact_paths: &[
        "inclusive.school",
        "inclusiveSchool",
        "inclusion.school",
        "inclusivePrograms.school",
        "inclusive.schoolParticipants",
        "schoolDisabilityParticipants",
        "schoolParticipantsDisability",
    ],
    token_sets: &[&["school", "disab"], &["school"]],
    accept_zero: true,
};

/// Special-needs participants
pub const SPECIAL_NEEDS: FieldRule = FieldRule {
    name: "special_needs_participants",
    exact_paths: &[
        "inclusive.specialNeeds",
        "inclusiveSpecialNeeds",
        "inclusion.specialNeeds",
        "inclusivePrograms.specialNeeds",
        "inclusive.specialNeedsParticipants",
        "specialNeedsParticipants",
    ],
    token_sets: &[&["special", "needs"], &["special"]],
    accept_zero: true,
};

/// Legacy enrolled headcount
pub const LEGACY_ENROLLED: FieldRule = FieldRule {
    name: "legacy_enrolled_participants",
    exact_paths: &["enrolledParticipants", "participantsEnrolled"],
    token_sets: &[],
    accept_zero: false,
};

/// Legacy headcount meeting the weekly guideline
pub const LEGACY_ACTIVE: FieldRule = FieldRule {
    name: "legacy_active_participants",
    exact_paths: &["participantsMeeting150", "activeParticipants"],
    token_sets: &[],
    accept_zero: false,
};

/// Toggles that switch the inclusion block on, in any form version
pub const INCLUSION_TOGGLES: &[&str] = &[
    "inclusiveEnabled",
    "inclusion.enabled",
    "inclusiveProgramsEnabled",
];
