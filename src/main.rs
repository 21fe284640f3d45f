use clap::{Parser, Subcommand};
use clap::error::ErrorKind;
use is_terminal::IsTerminal;
use jot::areas::repository::Repository;
use jot::areas::workspace::METADATA_DIR;
use jot::artifacts::core::PagerWriter;
use jot::artifacts::errors::Error;
use minus::Pager;

#[derive(Parser)]
#[command(
    name = "jot",
    version = "0.1.0",
    about = "A simple local version-control engine",
    long_about = "jot snapshots a working directory over time, moves between \
    snapshots, and combines divergent histories. It is a learning-sized \
    version-control engine, not a git replacement.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "init", about = "Initialize a new repository here")]
    Init,
    #[command(name = "add", about = "Stage a file for addition")]
    Add {
        #[arg(index = 1, value_name = "FILE")]
        file: String,
    },
    #[command(name = "commit", about = "Commit the staged changes")]
    Commit {
        #[arg(index = 1, value_name = "MESSAGE")]
        message: String,
    },
    #[command(name = "rm", about = "Stage a file for removal")]
    Rm {
        #[arg(index = 1, value_name = "FILE")]
        file: String,
    },
    #[command(name = "log", about = "Show the current branch's history")]
    Log,
    #[command(name = "global-log", about = "Show every commit on every branch")]
    GlobalLog,
    #[command(name = "find", about = "Find commits by exact message")]
    Find {
        #[arg(index = 1, value_name = "MESSAGE")]
        message: String,
    },
    #[command(name = "status", about = "Show the working-tree status")]
    Status,
    #[command(
        name = "checkout",
        about = "Switch branches or restore files",
        long_about = "Three forms: `checkout <branch>` switches branches, \
        `checkout -- <file>` restores a file from HEAD, and \
        `checkout <commit-id> -- <file>` restores a file from a commit."
    )]
    Checkout {
        #[arg(index = 1, value_name = "TARGET")]
        target: Option<String>,
        #[arg(last = true, value_name = "FILE")]
        file: Vec<String>,
    },
    #[command(name = "branch", about = "Create a branch at HEAD")]
    Branch {
        #[arg(index = 1, value_name = "NAME")]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1, value_name = "NAME")]
        name: String,
    },
    #[command(name = "reset", about = "Move the current branch to a commit")]
    Reset {
        #[arg(index = 1, value_name = "COMMIT_ID")]
        commit_id: String,
    },
    #[command(name = "merge", about = "Merge a branch into the current one")]
    Merge {
        #[arg(index = 1, value_name = "BRANCH")]
        branch: String,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
            ErrorKind::InvalidSubcommand => fail(&Error::UnknownCommand),
            _ => fail(&Error::IncorrectOperands),
        },
    };

    if let Err(err) = run(cli) {
        fail(&err);
    }
}

fn fail(err: &Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}

fn run(cli: Cli) -> jot::artifacts::errors::Result<()> {
    let pwd = std::env::current_dir()?;

    if !matches!(cli.command, Commands::Init) && !pwd.join(METADATA_DIR).is_dir() {
        return Err(Error::UninitializedDirectory);
    }

    // log output goes through the pager when stdout is an interactive
    // terminal and the user has not opted out
    let paged = matches!(cli.command, Commands::Log | Commands::GlobalLog)
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_PAGER").is_none();

    let pager = paged.then(Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };

    let repository = Repository::new(&pwd, writer)?;

    match &cli.command {
        Commands::Init => repository.init()?,
        Commands::Add { file } => repository.add(file)?,
        Commands::Commit { message } => repository.commit(message)?,
        Commands::Rm { file } => repository.rm(file)?,
        Commands::Log => repository.log()?,
        Commands::GlobalLog => repository.global_log()?,
        Commands::Find { message } => repository.find(message)?,
        Commands::Status => repository.status()?,
        Commands::Checkout { target, file } => match (target, file.as_slice()) {
            (Some(branch), []) => repository.checkout_branch(branch)?,
            (None, [file]) => repository.checkout_file(file)?,
            (Some(commit_id), [file]) => {
                repository.checkout_file_from_commit(commit_id, file)?
            }
            _ => return Err(Error::IncorrectOperands),
        },
        Commands::Branch { name } => repository.branch(name)?,
        Commands::RmBranch { name } => repository.rm_branch(name)?,
        Commands::Reset { commit_id } => repository.reset(commit_id)?,
        Commands::Merge { branch } => repository.merge(branch)?,
    }

    if let Some(pager) = pager {
        minus::page_all(pager).map_err(|err| anyhow::anyhow!("Pager failure: {err}"))?;
    }

    Ok(())
}
