use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_changelog::cli::orchestration::{run_changelog_workflow, ChangelogWorkflowArgs};
use git_changelog::config;
use git_changelog::template::ChangelogTemplate;
use git_changelog::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-changelog",
    version,
    about = "Generate a Markdown changelog from conventional commits and release tags"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Regex a tag must match to mark a release")]
    regex_for_sem_ver_tag: Option<String>,

    #[arg(long, help = "JSON template file controlling the changelog layout")]
    json_change_log_format_file_path: Option<PathBuf>,

    #[arg(long, help = "Path inside the git repository to read")]
    git_file_path: Option<PathBuf>,

    #[arg(short = 'b', long, help = "Branch whose history is summarised (default: HEAD)")]
    main_branch: Option<String>,

    #[arg(short, long, help = "Where to write the changelog")]
    output_file: Option<PathBuf>,

    #[arg(long, help = "Print the changelog instead of writing the output file")]
    stdout: bool,

    #[arg(long, help = "Print the built-in template as JSON and exit")]
    print_default_template: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

impl From<&Args> for ChangelogWorkflowArgs {
    fn from(args: &Args) -> Self {
        ChangelogWorkflowArgs {
            regex_for_sem_ver_tag: args.regex_for_sem_ver_tag.clone(),
            json_change_log_format_file_path: args.json_change_log_format_file_path.clone(),
            git_file_path: args.git_file_path.clone(),
            main_branch: args.main_branch.clone(),
            output_file: args.output_file.clone(),
            stdout: args.stdout,
        }
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if args.print_default_template {
        let json = ChangelogTemplate::default().to_json_pretty()?;
        ui::print_document(&format!("{}\n", json))?;
        return Ok(());
    }

    let config = config::load_config(args.config.as_deref())?;

    ui::display_status("Generating changelog...");
    let result = run_changelog_workflow(&ChangelogWorkflowArgs::from(args), config)?;
    let changelog = &result.changelog;

    for warning in &changelog.warnings {
        ui::display_boundary_warning(warning);
    }

    if result.written_to.is_none() {
        ui::print_document(&changelog.markdown)?;
    }

    ui::display_summary(
        changelog.commit_count,
        changelog.release_count,
        result.written_to.as_deref(),
    );
    Ok(())
}

/// Console logging controlled by RUST_LOG (default: warn), or debug with --verbose
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
