//! Change types offered by the first question.

use std::fmt;

/// The fixed set of change types, in the order they are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Maint,
    Bug,
    Feat,
    Enh,
    Fix,
    Docs,
}

impl ChangeType {
    pub const ALL: [ChangeType; 6] = [
        ChangeType::Maint,
        ChangeType::Bug,
        ChangeType::Feat,
        ChangeType::Enh,
        ChangeType::Fix,
        ChangeType::Docs,
    ];

    /// Parse a stored `change_type` answer. Codes are matched exactly.
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == code)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Maint => "maint",
            ChangeType::Bug => "bug",
            ChangeType::Feat => "feat",
            ChangeType::Enh => "enh",
            ChangeType::Fix => "fix",
            ChangeType::Docs => "docs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChangeType::Maint => {
                "maint: General maintenance (Writing Automatic tests, Updating dependencies...)"
            }
            ChangeType::Bug => "bug: Internal bug fixing (not reported in bug tracking system)",
            ChangeType::Feat => "feat: A new feature",
            ChangeType::Enh => "enh: An enhancement",
            ChangeType::Fix => "fix: PR issued in Jira/ClearQuest",
            ChangeType::Docs => "docs: Update documentation",
        }
    }

    /// Whether an issue number must be given for this type.
    pub fn issue_required(&self) -> bool {
        matches!(self, ChangeType::Feat | ChangeType::Enh | ChangeType::Fix)
    }

    /// Internal bugs are never tied to a tracker issue.
    pub fn omits_issue(&self) -> bool {
        matches!(self, ChangeType::Bug)
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
