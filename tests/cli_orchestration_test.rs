// tests/cli_orchestration_test.rs
mod common;

use common::TestRepo;
use git_changelog::cli::orchestration::{run_changelog_workflow, ChangelogWorkflowArgs};
use git_changelog::config::Config;
use std::fs;

fn args_for(test_repo: &TestRepo) -> ChangelogWorkflowArgs {
    ChangelogWorkflowArgs {
        git_file_path: Some(test_repo.dir.path().to_path_buf()),
        output_file: Some(test_repo.dir.path().join("build").join("CHANGELOG.md")),
        ..Default::default()
    }
}

#[test]
fn test_workflow_writes_changelog_file() {
    let test_repo = TestRepo::with_release_history();
    let args = args_for(&test_repo);

    let result = run_changelog_workflow(&args, Config::default()).unwrap();

    let output = test_repo.dir.path().join("build").join("CHANGELOG.md");
    assert_eq!(result.written_to.as_deref(), Some(output.as_path()));
    assert_eq!(result.changelog.commit_count, 3);
    assert_eq!(result.changelog.release_count, 3);
    assert!(result.changelog.warnings.is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, result.changelog.markdown);

    let unreleased = written.find("## Unreleased Changes").unwrap();
    let renamed = written.find("**rename config key**").unwrap();
    let v2 = written.find("## v0.2.0").unwrap();
    let fix = written.find("**reject empty names**").unwrap();
    let v1 = written.find("## v0.1.0").unwrap();
    let feature = written.find("**initial api**").unwrap();
    assert!(unreleased < renamed && renamed < v2 && v2 < fix && fix < v1 && v1 < feature);

    assert!(written.contains("- Names are now validated.\n"));
    assert!(written.contains("Closes :  #7\n"));
    assert!(!written.contains("tidy"));
}

#[test]
fn test_workflow_stdout_does_not_write() {
    let test_repo = TestRepo::with_release_history();
    let args = ChangelogWorkflowArgs {
        stdout: true,
        ..args_for(&test_repo)
    };

    let result = run_changelog_workflow(&args, Config::default()).unwrap();

    assert!(result.written_to.is_none());
    assert!(result.changelog.markdown.starts_with("# Change Log\n---\n"));
    assert!(!test_repo.dir.path().join("build").exists());
}

#[test]
fn test_workflow_overwrites_existing_output() {
    let test_repo = TestRepo::with_release_history();
    let args = args_for(&test_repo);
    let output = args.output_file.clone().unwrap();
    fs::create_dir_all(output.parent().unwrap()).unwrap();
    fs::write(&output, "stale").unwrap();

    run_changelog_workflow(&args, Config::default()).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(!written.contains("stale"));
    assert!(written.starts_with("# Change Log"));
}

#[test]
fn test_workflow_uses_template_file() {
    let test_repo = TestRepo::with_release_history();
    let template = test_repo.dir.path().join("format.json");
    fs::write(
        &template,
        r#"{
            "title": {"attr": "H2", "text": "Releases", "breakAfter": "newLine"},
            "eachVersion": {
                "tag": {"attr": "H3"},
                "feat": {"each": {"description": {"attr": "bullet"}}}
            }
        }"#,
    )
    .unwrap();

    let args = ChangelogWorkflowArgs {
        json_change_log_format_file_path: Some(template),
        stdout: true,
        ..args_for(&test_repo)
    };
    let markdown = run_changelog_workflow(&args, Config::default())
        .unwrap()
        .changelog
        .markdown;

    assert!(markdown.starts_with("## Releases\n\n### Unreleased Changes\n"));
    assert!(markdown.contains("### v0.1.0\n- initial api\n"));
    assert!(!markdown.contains("Bugs Addressed"));
}

#[test]
fn test_workflow_custom_tag_pattern() {
    let test_repo = TestRepo::with_release_history();
    let args = ChangelogWorkflowArgs {
        regex_for_sem_ver_tag: Some(r"^v0\.1\.\d+$".to_string()),
        stdout: true,
        ..args_for(&test_repo)
    };

    let changelog = run_changelog_workflow(&args, Config::default())
        .unwrap()
        .changelog;

    assert!(changelog.markdown.contains("## v0.1.0"));
    assert!(!changelog.markdown.contains("## v0.2.0"));
    assert_eq!(changelog.release_count, 2);
}

#[test]
fn test_workflow_unknown_branch_fails_without_output() {
    let test_repo = TestRepo::with_release_history();
    let args = ChangelogWorkflowArgs {
        main_branch: Some("no-such-branch".to_string()),
        ..args_for(&test_repo)
    };

    assert!(run_changelog_workflow(&args, Config::default()).is_err());
    assert!(!args.output_file.unwrap().exists());
}
