use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use commitlink_core::CommitlinkConfig;
use commitlink_its::JiraClient;
use miette::{IntoDiagnostic, Result, WrapErr};

#[derive(Parser)]
#[command(
    name = "commitlink",
    version,
    about = "Link issue-tracker records to the commits that resolved them",
    long_about = "Commitlink builds a joined issue/commit dataset for empirical\n\
                  software-engineering research.\n\n\
                  It runs a strict three-stage pipeline: synchronize the source\n\
                  repository, fetch matching tracker issues, and correlate commit\n\
                  messages against issue keys. All three CSV artifacts land in the\n\
                  configured output directory.\n\n\
                  Examples:\n  \
                    commitlink init            Create a .commitlink.toml template\n  \
                    commitlink                 Run the full pipeline\n  \
                    commitlink --config my.toml"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (default: .commitlink.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Create a default .commitlink.toml configuration file
    #[command(long_about = "Create a default .commitlink.toml configuration file.\n\n\
        Generates a template with example values for every required field.\n\
        Fails if .commitlink.toml already exists.")]
    Init,
}

const DEFAULT_CONFIG: &str = r#"# commitlink configuration
# Every field is required; edit the example values below.

[tracker]
# Jira base URL and query filters. Only issues matching all four sets and
# created more than created_before_days days ago are fetched.
base_url = "https://issues.apache.org/jira"
projects = ["AMQ"]
issue_types = ["Bug", "Test"]
statuses = ["Resolved", "Closed"]
resolutions = ["Fixed"]
created_before_days = 90

[repo]
# Remote to clone or pull, the local working copy directory, and the
# substring a commit message must contain to be considered project-related.
remote_url = "https://github.com/apache/activemq.git"
local_dir = "local_repo"
marker = "AMQ"

[output]
# Directory for issues.csv, commits.csv, and final_dataset.csv.
dir = "output"
"#;

fn run_init() -> Result<()> {
    let path = Path::new(".commitlink.toml");
    if path.exists() {
        miette::bail!(".commitlink.toml already exists; refusing to overwrite");
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .into_diagnostic()
        .wrap_err("writing .commitlink.toml")?;
    eprintln!("created .commitlink.toml — edit it before running commitlink");
    Ok(())
}

async fn run_pipeline(config: &CommitlinkConfig) -> Result<()> {
    let local_dir = Path::new(&config.repo.local_dir);
    let output_dir = Path::new(&config.output.dir);

    eprintln!("syncing repository from {} ...", config.repo.remote_url);
    commitlink_scm::sync::clone_or_pull(&config.repo.remote_url, local_dir).into_diagnostic()?;

    eprintln!("fetching issues from {} ...", config.tracker.base_url);
    let client = JiraClient::new(&config.tracker.base_url);
    let fetched = commitlink_its::fetch_all(&client, &config.tracker)
        .await
        .into_diagnostic()?;
    let issues = commitlink_its::collapse_consecutive(&fetched);
    commitlink_dataset::store::write_issues(output_dir, &issues).into_diagnostic()?;
    eprintln!("  {} issues written", issues.len());

    eprintln!("filtering commits in {} ...", local_dir.display());
    let commits =
        commitlink_scm::filter::collect_commits(local_dir, &config.repo.marker).into_diagnostic()?;
    commitlink_dataset::store::write_commits(output_dir, &commits).into_diagnostic()?;
    eprintln!("  {} commits kept", commits.len());

    eprintln!("joining issues with their corresponding commits ...");
    let issues = commitlink_dataset::store::read_issues(output_dir).into_diagnostic()?;
    let commits = commitlink_dataset::store::read_commits(output_dir).into_diagnostic()?;
    let dataset = commitlink_dataset::correlate(&issues, &commits);
    let path = commitlink_dataset::store::write_dataset(output_dir, &dataset).into_diagnostic()?;
    eprintln!("  {} records written to {}", dataset.len(), path.display());

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .expect("miette handler");
    human_panic::setup_panic!();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Init) => run_init(),
        None => {
            let config_path = cli
                .config
                .unwrap_or_else(|| PathBuf::from(".commitlink.toml"));
            if !config_path.exists() {
                miette::bail!(miette::miette!(
                    help = "run 'commitlink init' to create a template",
                    "configuration file {} not found",
                    config_path.display()
                ));
            }
            let config = CommitlinkConfig::from_file(&config_path)
                .into_diagnostic()
                .wrap_err(format!("loading {}", config_path.display()))?;
            run_pipeline(&config).await
        }
    }
}
