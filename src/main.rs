//! commonkit - small file helpers from the command line.
//!
//! Usage:
//!   commonkit ls DIR [--hidden]                List files in a directory
//!   commonkit mkdir PATH [--strict]            Create a folder
//!   commonkit copy FROM TO                     Copy every file
//!   commonkit move FROM TO                     Move every file
//!   commonkit rm DIR                           Remove every file
//!   commonkit rm-prefix DIR PREFIX...          Remove files by name prefix
//!   commonkit rename DIR OLD NEW               Rename one file
//!   commonkit rename-many DIR OLD=NEW...       Rename several files in order
//!   commonkit --help                           Show help

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use commonkit_fs::{
    copy_all, create_folder, list_files, move_all, remove_all, remove_by_prefix, rename_many,
    rename_one, CopyOptions, Either, ErrorKind, FileEntry, FsResult, ListOptions, ListOrder,
    MoveOptions, Predicate, RenameSpec,
};

#[derive(Parser)]
#[command(
    name = "commonkit",
    version,
    about = "Small file-system helpers",
    long_about = "commonkit copies, moves, removes and renames the files of a single \
                  directory.\n\nBatch commands stop at the first error and do not undo \
                  the files they already handled."
)]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Log every file-system call (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the regular files in a directory
    Ls {
        /// Directory to list
        dir: PathBuf,

        /// Include hidden files (starting with '.')
        #[arg(short = 'a', long)]
        hidden: bool,

        /// Order of the listing
        #[arg(short, long, default_value = "sorted")]
        order: OrderArg,

        /// Keep only names starting with one of these prefixes
        #[arg(short, long)]
        prefix: Vec<String>,

        /// Keep only names ending with one of these suffixes
        #[arg(short, long)]
        suffix: Vec<String>,
    },

    /// Create a folder and any missing parents
    Mkdir {
        /// Folder to create
        path: PathBuf,

        /// Fail if the folder already exists
        #[arg(long)]
        strict: bool,
    },

    /// Copy every file of a directory into another
    Copy {
        /// Source directory
        from: PathBuf,

        /// Destination directory
        to: PathBuf,

        /// Do not carry timestamps over to the copies
        #[arg(long)]
        no_preserve_timestamps: bool,
    },

    /// Move every file of a directory into another
    Move {
        /// Source directory
        from: PathBuf,

        /// Destination directory
        to: PathBuf,

        /// What to do when a file already exists at the destination
        #[arg(long, default_value = "overwrite")]
        on_conflict: ConflictArg,
    },

    /// Remove every file in a directory
    Rm {
        /// Directory to empty
        dir: PathBuf,
    },

    /// Remove the files whose names start with the given prefixes
    RmPrefix {
        /// Directory to clean
        dir: PathBuf,

        /// Name prefixes, matched as `<PREFIX>*` globs
        #[arg(required = true)]
        prefixes: Vec<String>,
    },

    /// Rename one file inside a directory
    Rename {
        /// Directory holding the file
        dir: PathBuf,

        /// Current name
        old: String,

        /// New name
        new: String,
    },

    /// Rename several files in order; earlier renames are kept on failure
    RenameMany {
        /// Directory holding the files
        dir: PathBuf,

        /// Renames as OLD=NEW
        #[arg(required = true, value_parser = parse_rename)]
        renames: Vec<RenameSpec>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderArg {
    Sorted,
    Enumeration,
}

impl From<OrderArg> for ListOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Sorted => ListOrder::Sorted,
            OrderArg::Enumeration => ListOrder::Enumeration,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConflictArg {
    /// Replace the existing file
    Overwrite,
    /// Stop the batch with an error
    Fail,
}

/// JSON shape of a successful command.
#[derive(Serialize)]
struct SuccessReport<'a, T> {
    status: &'static str,
    value: &'a T,
}

/// JSON shape of a failed command.
#[derive(Serialize)]
struct FailureReport {
    status: &'static str,
    kind: ErrorKind,
    message: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let format = cli.format;

    match cli.command {
        Command::Ls {
            dir,
            hidden,
            order,
            prefix,
            suffix,
        } => {
            let options = ListOptions {
                include_hidden: hidden,
                order: order.into(),
            };
            let predicates = name_filters(&prefix, &suffix);
            let result = list_files(&dir, &options, &predicates)
                .map(|files| files.iter().map(FileEntry::to_string).collect::<Vec<_>>());
            finish(format, "List", result, |names| names.join("\n"))
        }
        Command::Mkdir { path, strict } => {
            finish(format, "Create folder", create_folder(&path, !strict), |p| {
                format!("Created {}", p.display())
            })
        }
        Command::Copy {
            from,
            to,
            no_preserve_timestamps,
        } => {
            let options = CopyOptions {
                preserve_timestamps: !no_preserve_timestamps,
            };
            finish(format, "Copy", copy_all(&from, &to, &options), |n| {
                format!("Copied {n} files")
            })
        }
        Command::Move {
            from,
            to,
            on_conflict,
        } => {
            let options = MoveOptions {
                overwrite: matches!(on_conflict, ConflictArg::Overwrite),
            };
            finish(format, "Move", move_all(&from, &to, &options), |n| {
                format!("Moved {n} files")
            })
        }
        Command::Rm { dir } => finish(format, "Remove", remove_all(&dir), |n| {
            format!("Removed {n} files")
        }),
        Command::RmPrefix { dir, prefixes } => {
            finish(format, "Remove", remove_by_prefix(&prefixes, &dir), |n| {
                format!("Removed {n} files")
            })
        }
        Command::Rename { dir, old, new } => {
            finish(format, "Rename", rename_one(&old, &new, &dir), |p| {
                format!("Renamed to {}", p.display())
            })
        }
        Command::RenameMany { dir, renames } => {
            finish(format, "Rename", rename_many(&renames, &dir), |paths| {
                paths
                    .iter()
                    .map(|p| format!("Renamed to {}", p.display()))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
    }
}

/// Install the stderr log subscriber.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the `ls` name filters: one predicate per non-empty option.
fn name_filters<'a>(
    prefixes: &'a [String],
    suffixes: &'a [String],
) -> Vec<Predicate<'a, FileEntry>> {
    let mut filters = Vec::new();
    if !prefixes.is_empty() {
        filters.push(Predicate::new(move |entry: &FileEntry| {
            prefixes.iter().any(|p| entry.starts_with(p))
        }));
    }
    if !suffixes.is_empty() {
        filters.push(Predicate::new(move |entry: &FileEntry| {
            suffixes.iter().any(|s| entry.ends_with(s))
        }));
    }
    filters
}

/// Print the outcome of a command, turning a failure into an error exit.
fn finish<T: Serialize>(
    format: OutputFormat,
    action: &str,
    result: FsResult<T>,
    render: impl FnOnce(&T) -> String,
) -> Result<()> {
    let value = match result {
        Either::Success(value) => value,
        Either::Failure(error) => {
            if let OutputFormat::Json = format {
                let report = FailureReport {
                    status: "failure",
                    kind: error.kind(),
                    message: error.to_string(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            return Err(error).wrap_err(format!("{action} failed"));
        }
    };

    match format {
        OutputFormat::Text => {
            let text = render(&value);
            if !text.is_empty() {
                println!("{text}");
            }
        }
        OutputFormat::Json => {
            let report = SuccessReport {
                status: "success",
                value: &value,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// Parse an `OLD=NEW` rename argument.
fn parse_rename(s: &str) -> Result<RenameSpec, String> {
    match s.split_once('=') {
        Some((from, to)) if !from.is_empty() && !to.is_empty() => Ok(RenameSpec::new(from, to)),
        _ => Err(format!("expected OLD=NEW, got '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rename() {
        assert_eq!(
            parse_rename("tiger.txt=rabbit.txt").unwrap(),
            RenameSpec::new("tiger.txt", "rabbit.txt")
        );
        assert!(parse_rename("tiger.txt").is_err());
        assert!(parse_rename("=rabbit.txt").is_err());
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        let err = Cli::try_parse_from(["commonkit", "move", "a", "b", "--on-conflict", "skip"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("overwrite"));
    }

    #[test]
    fn test_name_filters() {
        let prefixes = vec!["ti".to_string()];
        let suffixes = vec!["le.txt".to_string()];
        let filters = name_filters(&prefixes, &suffixes);
        assert_eq!(filters.len(), 2);
        assert!(filters.iter().all(|f| f.test(&FileEntry::new("tile.txt"))));
        assert!(!filters[1].test(&FileEntry::new("tiger.txt")));
        assert!(name_filters(&[], &[]).is_empty());
    }
}
