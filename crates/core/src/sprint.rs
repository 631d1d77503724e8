//! Sprint status values and the sprint numbering policy.

use crate::error::CoreError;

/// Sprint lifecycle status.
///
/// Transitions are unguarded: any status may change to any other. The
/// convention that exactly one sprint per project is `Active` at a time is
/// applied by callers when selecting a default sprint, not stored or
/// enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SprintStatus {
    Planned,
    Active,
    Completed,
}

impl SprintStatus {
    /// Canonical stored form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "PLANNED",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
        }
    }

    /// Parse a status value, case-insensitively.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value.trim().to_ascii_uppercase().as_str() {
            "PLANNED" => Ok(Self::Planned),
            "ACTIVE" => Ok(Self::Active),
            "COMPLETED" => Ok(Self::Completed),
            other => Err(CoreError::invalid(
                "status",
                format!("unknown sprint status '{other}'"),
            )),
        }
    }
}

impl std::fmt::Display for SprintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Next sprint number for a project: `1 + max(existing)`, or `1` when the
/// project has no sprints yet.
///
/// The number is assigned by the caller before creation; the database
/// enforces `UNIQUE (project_id, sprint_number)` so the loser of a
/// concurrent race gets a constraint failure instead of a duplicate.
pub fn next_sprint_number(max_existing: Option<i32>) -> i32 {
    max_existing.map_or(1, |n| n + 1)
}
