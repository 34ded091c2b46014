use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::Value;
use tracing::{debug, error};

use doc_versions::config::{self, VersionsConfig};
use doc_versions::git::{BranchSource, Git2Repository};
use doc_versions::{context, logging, ui, VersionCatalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(clap::Parser)]
#[command(
    name = "doc-versions",
    version,
    about = "List documentation versions derived from git branches"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, default_value = ".", help = "Path inside the git repository")]
    repo: String,

    #[arg(long, help = "Override the branch pattern (needs a 'version' group)")]
    include_branch_pattern: Option<String>,

    #[arg(long, help = "Override the develop branch name")]
    develop_branch: Option<String>,

    #[arg(long, help = "Use this as the current branch instead of HEAD")]
    current_branch: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json, help = "Output format")]
    format: OutputFormat,

    #[arg(long, help = "Existing HTML context (JSON object) to merge into")]
    html_context: Option<String>,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

/// Reports a fixed current branch, delegating branch listing to the repository.
struct PinnedCurrentBranch<'a> {
    inner: &'a Git2Repository,
    current: String,
}

impl BranchSource for PinnedCurrentBranch<'_> {
    fn current_branch(&self) -> doc_versions::Result<String> {
        Ok(self.current.clone())
    }

    fn branch_names(&self) -> doc_versions::Result<Vec<String>> {
        self.inner.branch_names()
    }
}

fn main() {
    let args = Args::parse();

    // CLI works without logging
    let _ = logging::init_logging(args.verbose);

    if let Err(e) = run(args) {
        error!(error = %e, "Command failed");
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    let versions: VersionsConfig = config
        .versions
        .with_overrides(args.include_branch_pattern, args.develop_branch);
    debug!(
        pattern = %versions.include_branch_pattern,
        develop_branch = %versions.develop_branch,
        "Loaded configuration"
    );

    let repo = Git2Repository::open(&args.repo)
        .with_context(|| format!("Not in a git repository: {}", args.repo))?;

    let catalog = match args.current_branch {
        Some(current) => VersionCatalog::from_source(
            &versions,
            &PinnedCurrentBranch {
                inner: &repo,
                current,
            },
        )?,
        None => VersionCatalog::from_source(&versions, &repo)?,
    };

    match args.format {
        OutputFormat::Text => ui::display_catalog(&catalog),
        OutputFormat::Json => {
            let mut html_context = match &args.html_context {
                Some(path) => {
                    let raw = fs::read_to_string(path)
                        .with_context(|| format!("Cannot read HTML context '{}'", path))?;
                    serde_json::from_str(&raw)
                        .with_context(|| format!("Cannot parse HTML context '{}'", path))?
                }
                None => Value::Null,
            };
            context::inject(&mut html_context, &catalog)?;
            println!("{}", context::to_json_string(&html_context)?);
        }
    }

    Ok(())
}
