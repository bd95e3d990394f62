use super::directive::{emit, Directive};
use super::{CategoryNode, ChangelogTemplate, EachNode, TextNode, VersionNode};
use crate::domain::{CommitKind, ConventionalCommit, ReleaseBucketMap, ReleaseType};
use tracing::debug;

const DEFAULT_TITLE: &str = "Change Log";

/// Line emitted for a category with no commits in a release
fn placeholder(kind: CommitKind) -> &'static str {
    match kind {
        CommitKind::Feature => "No new features added.",
        CommitKind::Fix => "No new bugs addressed.",
        CommitKind::Change => "No new changes to existing features.",
    }
}

/// Renders grouped releases to Markdown by walking a [ChangelogTemplate]
pub struct MarkdownRenderer<'a> {
    template: &'a ChangelogTemplate,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new(template: &'a ChangelogTemplate) -> Self {
        MarkdownRenderer { template }
    }

    /// Render the whole changelog document.
    ///
    /// Unreleased changes come first, then releases in the order they appear
    /// in `releases`. With no commits at all the unreleased section is still
    /// rendered, showing only placeholders.
    pub fn render(&self, releases: &ReleaseBucketMap) -> String {
        let mut out = String::new();

        match &self.template.title {
            Some(node) if node.text.is_some() => render_text_node(&mut out, node, None),
            _ => {
                emit(&mut out, DEFAULT_TITLE, Some(&Directive::Heading1));
                emit(&mut out, "", Some(&Directive::HorizontalRule));
            }
        }

        if let Some(intro) = &self.template.introduction {
            if intro.text.is_some() {
                render_text_node(&mut out, intro, None);
            }
        }

        if let Some(each_version) = &self.template.each_version {
            let unreleased = releases.unreleased();
            if !unreleased.is_empty() || releases.is_empty() {
                render_release(&mut out, each_version, &ReleaseType::Unreleased, unreleased);
            }
            for (release, commits) in releases.iter().filter(|(r, _)| r.is_released()) {
                render_release(&mut out, each_version, release, commits);
            }
        }

        debug!(
            releases = releases.len(),
            output_len = out.len(),
            "changelog rendered"
        );
        out
    }
}

/// Emit a node's own text (or `text` when given) followed by its break
fn render_text_node(out: &mut String, node: &TextNode, text: Option<&str>) {
    let text = text.or(node.text.as_deref()).unwrap_or_default();
    emit(out, text, node.attr.as_ref());
    if let Some(break_after) = &node.break_after {
        emit(out, "", Some(break_after));
    }
}

fn render_release(
    out: &mut String,
    layout: &VersionNode,
    release: &ReleaseType,
    commits: &[ConventionalCommit],
) {
    if let Some(tag) = &layout.tag {
        render_text_node(out, tag, Some(release.heading()));
    }

    for kind in CommitKind::ALL {
        if let Some(category) = layout.category(kind) {
            render_category(out, category, kind, commits);
        }
    }

    emit(out, "", Some(&Directive::NewLine));
    emit(out, "", Some(&Directive::HorizontalRule));
}

fn render_category(
    out: &mut String,
    category: &CategoryNode,
    kind: CommitKind,
    commits: &[ConventionalCommit],
) {
    if let Some(title) = &category.title {
        if title.text.is_some() {
            render_text_node(out, title, None);
        }
    }

    let mut entries: Vec<&ConventionalCommit> = commits.iter().filter(|c| c.kind == kind).collect();
    // Stable, so commits made in the same second keep their history order
    entries.sort_by_key(|c| c.time_of_commit);

    if entries.is_empty() {
        emit(out, placeholder(kind), None);
        return;
    }

    if let Some(each) = &category.each {
        for commit in entries {
            render_commit(out, each, commit);
        }
    }
}

fn render_commit(out: &mut String, layout: &EachNode, commit: &ConventionalCommit) {
    if let Some(description) = &layout.description {
        render_text_node(out, description, Some(&commit.description));
    }

    if let (Some(body_node), Some(body)) = (&layout.body, commit.body_text()) {
        render_text_node(out, body_node, Some(body));
    }

    if let Some(footer) = &layout.footer {
        for (key, value) in &commit.footers {
            emit(out, &format!("{} : {}", key, value), footer.attr.as_ref());
            out.push('\n');
        }
        if !commit.footers.is_empty() {
            if let Some(break_after) = &footer.break_after {
                emit(out, "", Some(break_after));
            }
        }
    }
}
