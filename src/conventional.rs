use crate::domain::{CommitKind, ConventionalCommit, RawCommit, Tag, TagMap};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Description used when a commit has no usable first line
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Where the scanner is within a commit message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Title,
    Body,
    Footer,
}

/// A commit message broken into description, body and footers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageParts {
    pub description: String,
    pub body: Option<String>,
    pub footers: BTreeMap<String, String>,
}

/// Parse a raw commit into a conventional commit.
///
/// Returns `None` when the message does not start with `feat`, `fix` or `change`.
pub fn parse_conventional_commit(raw: &RawCommit, tags: BTreeSet<Tag>) -> Option<ConventionalCommit> {
    let kind = CommitKind::classify(&raw.message)?;
    let MessageParts {
        description,
        body,
        footers,
    } = split_message(&raw.message);

    Some(ConventionalCommit {
        kind,
        tags,
        description,
        body,
        footers,
        time_of_commit: raw.time,
    })
}

/// Parse a newest-first commit history, keeping only conventional commits.
///
/// Commits without tags are kept; their tag set is simply empty.
pub fn parse_history(commits: &[RawCommit], tags: &TagMap) -> Vec<ConventionalCommit> {
    let parsed: Vec<ConventionalCommit> = commits
        .iter()
        .filter_map(|raw| {
            let commit_tags = tags.get(&raw.id).cloned().unwrap_or_default();
            parse_conventional_commit(raw, commit_tags)
        })
        .collect();

    debug!(
        total = commits.len(),
        conventional = parsed.len(),
        "parsed commit history"
    );
    parsed
}

/// Split a commit message into its description, body and footers.
///
/// The description is the first line after its last colon. A blank line
/// after the title opens the body; inside the body, a blank line followed by
/// a `Key: value` or `#ref` style line switches to footers for the rest of
/// the message. Body lines are joined without a separator.
pub fn split_message(message: &str) -> MessageParts {
    let lines: Vec<&str> = message.lines().collect();

    let description = lines
        .first()
        .filter(|first| !first.trim().is_empty())
        .map(|first| after_last_colon(first).trim().to_string())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    let mut section = Section::Title;
    let mut body: Option<String> = None;
    let mut footers = BTreeMap::new();

    for (i, line) in lines.iter().enumerate().skip(1) {
        if line.trim().is_empty() {
            section = match section {
                Section::Title => Section::Body,
                Section::Body if lines.get(i + 1).is_some_and(|next| starts_footer(next)) => {
                    Section::Footer
                }
                other => other,
            };
            continue;
        }

        match section {
            // Text directly under the title without a blank separator is not part of the body
            Section::Title => {}
            Section::Body => body.get_or_insert_with(String::new).push_str(line),
            Section::Footer => {
                let parts: Vec<&str> = line.split(':').collect();
                if let [key, value] = parts.as_slice() {
                    footers.insert(key.to_string(), value.to_string());
                }
            }
        }
    }

    MessageParts {
        description,
        body,
        footers,
    }
}

fn after_last_colon(line: &str) -> &str {
    match line.rfind(':') {
        Some(idx) => &line[idx + 1..],
        None => line,
    }
}

/// A line looks like a footer when it has a `:` or `#` that is not its last character
fn starts_footer(line: &str) -> bool {
    let inner = |c: char| line.find(c).is_some_and(|idx| idx + 1 < line.len());
    inner(':') || inner('#')
}
