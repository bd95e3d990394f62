//! Main workflow orchestration logic
//!
//! Wires the parser, grouper and renderer together and owns the file I/O
//! around them. CLI argument parsing stays in main.rs so the workflow can be
//! called programmatically without depending on clap.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::analyzer::ReleaseGrouper;
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::conventional;
use crate::domain::TagPattern;
use crate::git::{Git2Repository, Repository};
use crate::template::{ChangelogTemplate, MarkdownRenderer};

/// Arguments for the changelog workflow
///
/// Every `Some` value overrides the corresponding configuration file entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangelogWorkflowArgs {
    pub regex_for_sem_ver_tag: Option<String>,

    pub json_change_log_format_file_path: Option<PathBuf>,

    pub git_file_path: Option<PathBuf>,

    pub main_branch: Option<String>,

    pub output_file: Option<PathBuf>,

    /// Return the document without writing the output file
    pub stdout: bool,
}

impl ChangelogWorkflowArgs {
    /// Layer these arguments over a loaded configuration
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(regex) = &self.regex_for_sem_ver_tag {
            config.regex_for_sem_ver_tag = regex.clone();
        }
        if let Some(path) = &self.json_change_log_format_file_path {
            config.json_change_log_format_file_path = Some(path.clone());
        }
        if let Some(path) = &self.git_file_path {
            config.git_file_path = Some(path.clone());
        }
        if let Some(branch) = &self.main_branch {
            config.main_branch = Some(branch.clone());
        }
        if let Some(path) = &self.output_file {
            config.output_file = path.clone();
        }
        config
    }
}

/// A rendered changelog and what went into it
#[derive(Debug, Clone, PartialEq)]
pub struct Changelog {
    pub markdown: String,
    /// Number of release buckets, including unreleased
    pub release_count: usize,
    /// Number of conventional commits listed
    pub commit_count: usize,
    pub warnings: Vec<BoundaryWarning>,
}

/// Result of a successful changelog workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub changelog: Changelog,

    /// Where the changelog was written; `None` when it was only returned
    pub written_to: Option<PathBuf>,
}

/// Build the changelog for a repository: read history, parse, group, render
pub fn generate_changelog<R: Repository>(
    repo: &R,
    branch: Option<&str>,
    pattern: &TagPattern,
    template: &ChangelogTemplate,
) -> crate::Result<Changelog> {
    let tags = repo.tags()?;
    let history = repo.commits(branch)?;

    let parsed = conventional::parse_history(&history, &tags);
    let commit_count = parsed.len();

    let releases = ReleaseGrouper::new(pattern.clone()).group(parsed);
    let markdown = MarkdownRenderer::new(template).render(&releases);

    let mut warnings = Vec::new();
    if history.is_empty() {
        warnings.push(BoundaryWarning::EmptyHistory {
            branch: branch.unwrap_or("HEAD").to_string(),
        });
    } else if commit_count == 0 {
        warnings.push(BoundaryWarning::NoConventionalCommits {
            total: history.len(),
        });
    } else if releases.released().next().is_none() {
        warnings.push(BoundaryWarning::NoReleaseTags {
            pattern: pattern.as_str().to_string(),
        });
    }

    info!(
        commits = commit_count,
        releases = releases.len(),
        "changelog generated"
    );

    Ok(Changelog {
        markdown,
        release_count: releases.len(),
        commit_count,
        warnings,
    })
}

/// Main changelog workflow
///
/// Orchestrates the entire run:
/// 1. Merge arguments over the configuration
/// 2. Compile the tag pattern and load the template
/// 3. Open the repository
/// 4. Generate the changelog
/// 5. Write the output file (unless `stdout` is set)
///
/// Every fatal error happens before the output file is touched.
pub fn run_changelog_workflow(args: &ChangelogWorkflowArgs, config: Config) -> Result<WorkflowResult> {
    let config = args.apply_to(config);

    let pattern = TagPattern::new(&config.regex_for_sem_ver_tag)
        .with_context(|| format!("Invalid tag pattern '{}'", config.regex_for_sem_ver_tag))?;
    let template =
        ChangelogTemplate::load_or_default(config.json_change_log_format_file_path.as_deref())?;

    let git_root = config.git_root();
    let repo = Git2Repository::open(&git_root)
        .with_context(|| format!("Cannot open git repository at '{}'", git_root.display()))?;

    let changelog = generate_changelog(
        &repo,
        config.main_branch.as_deref(),
        &pattern,
        &template,
    )?;

    if args.stdout {
        return Ok(WorkflowResult {
            changelog,
            written_to: None,
        });
    }

    let output = config.output_file;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create '{}'", parent.display()))?;
    }
    fs::write(&output, &changelog.markdown)
        .with_context(|| format!("Cannot write '{}'", output.display()))?;
    info!(path = %output.display(), "changelog written");

    Ok(WorkflowResult {
        changelog,
        written_to: Some(output),
    })
}
