use std::fmt;

/// Validation failure naming every offending field.
///
/// Input validation collects all issues before failing, so a caller sees
/// the complete list of missing/invalid fields in one error rather than
/// fixing them one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

/// A single invalid field and the reason it was rejected.
/// Field names match the canonical persisted shape (camelCase).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    /// Start an empty issue collector.
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Single-field failure.
    pub fn single(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            issues: vec![FieldIssue {
                field,
                reason: reason.into(),
            }],
        }
    }

    /// Record an issue against a field.
    pub fn push(&mut self, field: &'static str, reason: impl Into<String>) {
        self.issues.push(FieldIssue {
            field,
            reason: reason.into(),
        });
    }

    /// True when no issues were recorded.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// `Ok(())` when empty, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    fn describe(&self) -> String {
        self.issues
            .iter()
            .map(|i| format!("{}: {}", i.field, i.reason))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Default for ValidationError {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: {}", self.describe())
    }
}

impl std::error::Error for ValidationError {}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}
