//! Note constants and validation functions.
//!
//! Defines the entry kinds and weight levels a note can carry, the
//! validation rules applied at the API boundary, and the weight ranking
//! used by every weight-ordered listing.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a note title in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a note description in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

/// Entry kind: what flavour of entry a note is.
///
/// `note` entries form the free-text journal; the other kinds are dated
/// tasks that appear on the weekly board and the day lists.
pub const KIND_NOTE: &str = "note";
pub const KIND_TODO: &str = "todo";
pub const KIND_EVENT: &str = "event";
pub const KIND_HOLIDAY: &str = "holiday";

/// All valid kind values.
pub const VALID_KINDS: &[&str] = &[KIND_NOTE, KIND_TODO, KIND_EVENT, KIND_HOLIDAY];

/// Kind applied when a create request omits one.
pub const DEFAULT_KIND: &str = KIND_TODO;

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Weight level: how urgent an entry is.
pub const WEIGHT_LOW: &str = "low";
pub const WEIGHT_NORMAL: &str = "normal";
pub const WEIGHT_HIGH: &str = "high";

/// All valid weight values.
pub const VALID_WEIGHTS: &[&str] = &[WEIGHT_LOW, WEIGHT_NORMAL, WEIGHT_HIGH];

/// Weight applied when a create request omits one.
pub const DEFAULT_WEIGHT: &str = WEIGHT_NORMAL;

/// Sort rank for a weight value: `high` sorts before `normal` before `low`.
///
/// Unknown values rank last; they cannot reach the database through the
/// validated API paths.
pub fn weight_rank(weight: &str) -> i16 {
    match weight {
        WEIGHT_HIGH => 0,
        WEIGHT_NORMAL => 1,
        WEIGHT_LOW => 2,
        _ => 3,
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that the kind is one of the allowed values.
pub fn validate_kind(kind: &str) -> Result<(), String> {
    if VALID_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(format!(
            "Invalid kind '{kind}'. Must be one of: {}",
            VALID_KINDS.join(", ")
        ))
    }
}

/// Validate that the weight is one of the allowed values.
pub fn validate_weight(weight: &str) -> Result<(), String> {
    if VALID_WEIGHTS.contains(&weight) {
        Ok(())
    } else {
        Err(format!(
            "Invalid weight '{weight}'. Must be one of: {}",
            VALID_WEIGHTS.join(", ")
        ))
    }
}

/// Validate a note title: non-blank and within the length limit.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title cannot be empty".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a note description against the length limit.
pub fn validate_description(description: &str) -> Result<(), String> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(format!(
            "Description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"
        ));
    }
    Ok(())
}
