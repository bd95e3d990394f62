//! User interface module - terminal output.
//!
//! - `formatter` - Status, warning and summary lines (stderr)
//! - This module - Writing the rendered document itself (stdout)

use std::io::{self, Write};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_status, display_success, display_summary,
};

/// Write a rendered changelog document to stdout.
pub fn print_document(markdown: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(markdown.as_bytes())?;
    stdout.flush()
}
