// tests/config_test.rs
use git_changelog::config::{load_config, Config, CONFIG_FILE_NAME};
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(
        config.regex_for_sem_ver_tag,
        r"^v\d{1,20}.\d{1,20}.\d{1,20}$"
    );
    assert_eq!(config.output_file, PathBuf::from("build/CHANGELOG.md"));
    assert_eq!(config.json_change_log_format_file_path, None);
    assert_eq!(config.git_file_path, None);
    assert_eq!(config.main_branch, None);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
regex_for_sem_ver_tag = "^release-\\d+$"
json_change_log_format_file_path = "changelog-format.json"
git_file_path = "../repo"
main_branch = "develop"
output_file = "docs/CHANGELOG.md"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.regex_for_sem_ver_tag, "^release-\\d+$");
    assert_eq!(
        config.json_change_log_format_file_path,
        Some(PathBuf::from("changelog-format.json"))
    );
    assert_eq!(config.git_file_path, Some(PathBuf::from("../repo")));
    assert_eq!(config.main_branch.as_deref(), Some("develop"));
    assert_eq!(config.output_file, PathBuf::from("docs/CHANGELOG.md"));
}

#[test]
fn test_invalid_file_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"main_branch = [1, 2").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_project_file_in_current_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "main_branch = \"trunk\"\n",
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(config.unwrap().main_branch.as_deref(), Some("trunk"));
}
