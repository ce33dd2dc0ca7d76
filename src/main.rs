use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use mygit::CommitDisplayFormat;
use mygit::areas::repository::Repository;
use mygit::commands::porcelain::log::LogOptions;
use mygit::config::RepositoryConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mygit",
    version = "0.1.0",
    about = "A minimal local version tracker",
    long_about = "Stage files into a content-addressed staging directory and bundle \
    them into timestamped commits. Commit history is kept for the lifetime of the \
    process; use `session` to make and list several commits in one run.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "MYGIT_DIR",
        help = "The repository root (defaults to the current directory)"
    )]
    repo: Option<PathBuf>,
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the metadata and staging directories \
        in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "hash-object",
        about = "Compute the content digest of a file and optionally stage it"
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Stage the file as well")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command copies files into the staging directory, keyed by \
        their content digest. Directories are expanded to the files they contain."
    )]
    Add {
        #[arg(required = true, help = "Files or directories to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command folds every staged file into a new commit \
        and clears the staging directory."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "status", about = "List staged files")]
    Status,
    #[command(name = "log", about = "Show the commits made by this process")]
    Log {
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
    },
    #[command(
        name = "session",
        about = "Run commands read from stdin against one repository",
        long_about = "This command reads add, commit, status and log commands from \
        stdin, one per line, so that the commit history accumulates across them."
    )]
    Session,
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = RepositoryConfig::load_from_env()?;
    let root = match (&cli.command, cli.repo) {
        (Commands::Init { path: Some(path) }, _) => path.clone(),
        (_, Some(repo)) => repo,
        (_, None) => std::env::current_dir()?,
    };
    if let Commands::Init { .. } = cli.command {
        std::fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create {}", root.display()))?;
    }
    let mut repository = Repository::new(&root, config, Box::new(std::io::stdout()))?;

    match cli.command {
        Commands::Init { .. } => repository.init()?,
        Commands::HashObject { write, file } => repository.hash_object(&file, write)?,
        Commands::Add { paths } => repository.add(&paths)?,
        Commands::Commit { message } => repository.record(&message)?,
        Commands::Status => repository.status()?,
        Commands::Log { oneline } => {
            let format = if oneline {
                CommitDisplayFormat::OneLine
            } else {
                CommitDisplayFormat::Medium
            };
            repository.log(&LogOptions { format })?
        }
        Commands::Session => repository.session(std::io::stdin().lock())?,
    }

    Ok(())
}
