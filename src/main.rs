use anyhow::Result;
use clap::{Parser, Subcommand};
use std::future::Future;

use git_tags::{config, logging, ui, GitTags};

#[derive(Parser)]
#[command(
    name = "git-tags",
    version,
    about = "List and query semantic-version tags of a git repository"
)]
struct Args {
    #[arg(short = 'C', long = "repo", help = "Repository path (defaults to the current directory)")]
    repo: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Log git invocations to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print all semver tags, newest first
    List,
    /// Print the newest semver tag
    Latest,
    /// Print the oldest semver tag
    Oldest,
    /// Print the semver components of a tag
    Parse { tag: String },
    /// Print a tag as major.minor.patch
    Mmp { tag: String },
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let repo = args.repo.as_deref();
    let config_path = args.config.as_deref();

    match args.command {
        Command::List => {
            let tags = load_query(config_path)?;
            ui::display_tags(&block_on(tags.get(repo))??);
        }
        Command::Latest => {
            let tags = load_query(config_path)?;
            ui::display_optional_tag(block_on(tags.latest(repo))??.as_ref());
        }
        Command::Oldest => {
            let tags = load_query(config_path)?;
            ui::display_optional_tag(block_on(tags.oldest(repo))??.as_ref());
        }
        Command::Parse { tag } => ui::display_version(&git_tags::parse(&tag)?),
        Command::Mmp { tag } => println!("{}", git_tags::mmp(&tag)?),
    }
    Ok(())
}

fn load_query(config_path: Option<&str>) -> Result<GitTags> {
    let config = config::load_config(config_path)?;
    Ok(GitTags::from_config(&config))
}

fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}
