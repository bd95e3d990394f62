use std::fmt;

/// Warnings about the shape of the history being summarised.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The walked history has no commits at all
    EmptyHistory { branch: String },
    /// Commits exist but none start with a recognised type prefix
    NoConventionalCommits { total: usize },
    /// No tag in the history matches the release pattern
    NoReleaseTags { pattern: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::EmptyHistory { branch } => {
                write!(f, "No commits found on '{}'", branch)
            }
            BoundaryWarning::NoConventionalCommits { total } => {
                write!(
                    f,
                    "None of the {} commits start with feat, fix or change",
                    total
                )
            }
            BoundaryWarning::NoReleaseTags { pattern } => {
                write!(
                    f,
                    "No tag matches '{}'; every change is listed as unreleased",
                    pattern
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_display() {
        let warning = BoundaryWarning::EmptyHistory {
            branch: "main".to_string(),
        };
        assert_eq!(warning.to_string(), "No commits found on 'main'");
    }

    #[test]
    fn test_no_conventional_commits_display() {
        let warning = BoundaryWarning::NoConventionalCommits { total: 12 };
        assert!(warning.to_string().contains("12 commits"));
    }

    #[test]
    fn test_no_release_tags_display() {
        let warning = BoundaryWarning::NoReleaseTags {
            pattern: "^v\\d+$".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("^v\\d+$"));
        assert!(msg.contains("unreleased"));
    }
}
