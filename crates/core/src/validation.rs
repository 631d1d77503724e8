//! Field validation rules shared by tasks and sprints.
//!
//! Each check records its violations into a [`Violations`] collector so a
//! multi-field input reports every offending field in one pass. Length
//! checks count characters, not bytes, and titles are trimmed before the
//! length check (the trimmed form is what gets stored).

use crate::error::Violations;
use crate::types::CalendarDate;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Minimum title length for tasks and sprints.
pub const TITLE_MIN_LEN: usize = 3;
/// Maximum title length for tasks and sprints.
pub const TITLE_MAX_LEN: usize = 200;
/// Maximum task description length.
pub const DESCRIPTION_MAX_LEN: usize = 500;
/// Maximum sprint goal length.
pub const GOAL_MAX_LEN: usize = 500;

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Check a (pre-trimmed) title against the shared length bounds.
pub fn check_title(v: &mut Violations, title: &str) {
    let len = title.chars().count();
    if len < TITLE_MIN_LEN {
        v.push(
            "title",
            format!("must be at least {TITLE_MIN_LEN} characters"),
        );
    } else if len > TITLE_MAX_LEN {
        v.push("title", format!("must be at most {TITLE_MAX_LEN} characters"));
    }
}

/// Check an optional task description against its length cap.
pub fn check_description(v: &mut Violations, description: Option<&str>) {
    if let Some(d) = description {
        if d.chars().count() > DESCRIPTION_MAX_LEN {
            v.push(
                "description",
                format!("must be at most {DESCRIPTION_MAX_LEN} characters"),
            );
        }
    }
}

/// Check an optional sprint goal against its length cap.
pub fn check_goal(v: &mut Violations, goal: Option<&str>) {
    if let Some(g) = goal {
        if g.chars().count() > GOAL_MAX_LEN {
            v.push("goal", format!("must be at most {GOAL_MAX_LEN} characters"));
        }
    }
}

/// Estimated hours, when present, must be strictly positive and finite.
pub fn check_estimated_hours(v: &mut Violations, hours: Option<f64>) {
    if let Some(h) = hours {
        if !h.is_finite() || h <= 0.0 {
            v.push("estimated_hours", "must be greater than zero");
        }
    }
}

/// A sprint's end date must be strictly after its start date.
pub fn check_date_range(v: &mut Violations, start: CalendarDate, end: CalendarDate) {
    if end <= start {
        v.push("end_date", "must be after start_date");
    }
}
