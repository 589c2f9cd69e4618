use anyhow::Result;
use bit::areas::repository::Repository;
use bit::commands::plumbing::cat_file::CatFileMode;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A content-addressable object store",
    long_about = "This is a minimal content-addressable object store modeled on git's plumbing, \
    written in Rust. It stores file content as blobs and directory snapshots as trees, \
    each keyed by the SHA-1 of its own encoded bytes.",
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
        short = 'C',
        global = true,
        value_name = "PATH",
        help = "Run as if started in <PATH> instead of the current directory"
    )]
    work_tree: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "cat-file",
        about = "Print the content, type, or size of an object",
        long_about = "This command prints information about an object in the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[command(flatten)]
        mode: CatFileArgs,
        #[arg(index = 1, value_parser = parse_object_id, help = "The object SHA")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash an object and optionally write it to the object database",
        long_about = "This command hashes an object file and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(
        name = "ls-tree",
        about = "List the contents of a tree object",
        long_about = "This command lists the entries of a tree object, one level deep, \
        in the order they are stored."
    )]
    LsTree {
        #[arg(long, help = "List only the entry names")]
        name_only: bool,
        #[arg(index = 1, value_parser = parse_object_id, help = "The tree SHA")]
        sha: String,
    },
    #[command(
        name = "write-tree",
        about = "Create a tree object from the working directory",
        long_about = "This command snapshots the working directory, excluding the .git directory, \
        stores every blob and tree it produces, and prints the SHA of the root tree."
    )]
    WriteTree,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct CatFileArgs {
    #[arg(short = 'p', help = "Pretty-print the object's content")]
    pretty: bool,
    #[arg(short = 't', help = "Show the object's type")]
    kind: bool,
    #[arg(short = 's', help = "Show the object's size")]
    size: bool,
}

impl From<&CatFileArgs> for CatFileMode {
    fn from(args: &CatFileArgs) -> Self {
        match (args.pretty, args.kind, args.size) {
            (_, true, _) => CatFileMode::Type,
            (_, _, true) => CatFileMode::Size,
            _ => CatFileMode::Pretty,
        }
    }
}

fn parse_object_id(sha: &str) -> Result<String, String> {
    if sha.len() == 40 && sha.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(sha.to_string())
    } else {
        Err(format!("{sha:?} is not a 40-character hexadecimal object id"))
    }
}

fn open_repository(path: &Path) -> Result<Repository> {
    Repository::new(path, Box::new(std::io::stdout()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let root = match cli.work_tree {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    match &cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => root.join(path),
                None => root,
            };
            std::fs::create_dir_all(&path)?;

            open_repository(&path)?.init()?
        }
        Commands::CatFile { mode, sha } => open_repository(&root)?.cat_file(sha, mode.into())?,
        Commands::HashObject { write, file } => {
            open_repository(&root)?.hash_object(file, *write)?
        }
        Commands::LsTree { name_only, sha } => open_repository(&root)?.ls_tree(sha, *name_only)?,
        Commands::WriteTree => open_repository(&root)?.write_tree()?,
    }

    Ok(())
}
