//! Pure formatting functions for UI output.
//!
//! Status lines go to stderr so that `--stdout` output stays clean for piping.

use std::path::Path;

use console::style;

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// One-line summary of a generated changelog.
pub fn summary_line(commit_count: usize, release_count: usize, written_to: Option<&Path>) -> String {
    let noun = if commit_count == 1 { "change" } else { "changes" };
    let sections = if release_count == 1 { "section" } else { "sections" };
    match written_to {
        Some(path) => format!(
            "Wrote {} {} in {} release {} to {}",
            commit_count,
            noun,
            release_count,
            sections,
            path.display()
        ),
        None => format!(
            "Rendered {} {} in {} release {}",
            commit_count, noun, release_count, sections
        ),
    }
}

/// Display the summary of a generated changelog.
pub fn display_summary(commit_count: usize, release_count: usize, written_to: Option<&Path>) {
    display_success(&summary_line(commit_count, release_count, written_to));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_functions_do_not_panic() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
        display_success("test success");
        display_status("test status");
        display_boundary_warning(&BoundaryWarning::NoConventionalCommits { total: 3 });
    }

    #[test]
    fn test_summary_line_written() {
        let line = summary_line(4, 2, Some(Path::new("build/CHANGELOG.md")));
        assert_eq!(
            line,
            "Wrote 4 changes in 2 release sections to build/CHANGELOG.md"
        );
    }

    #[test]
    fn test_summary_line_singular() {
        assert_eq!(summary_line(1, 1, None), "Rendered 1 change in 1 release section");
    }
}
