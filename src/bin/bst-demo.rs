//! Walks a [`Tree`] through its life: build, inspect, skew it with inserts,
//! rebalance, and query it.

use std::fs;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use std::process;

use bisect_bst::Tree;
use clap::{ArgAction, Parser};
use thiserror::Error;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_VALUES: [i64; 14] = [1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324];

/// Build a binary search tree, skew it, and rebalance it
#[derive(Parser, Debug)]
#[command(name = "bst-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Values to build the tree from (duplicates are dropped)
    #[arg(conflicts_with = "file")]
    values: Vec<i64>,

    /// Read whitespace separated values from a file instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Values inserted after the tree is built
    #[arg(short, long, num_args = 1.., default_values_t = [105, 110, 115, 120])]
    insert: Vec<i64>,

    /// Value to look up at the end
    #[arg(long, default_value_t = 20)]
    find: i64,

    /// Log verbosity, repeat for more (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

#[derive(Error, Debug)]
enum DemoError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid value {token:?} in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

impl DemoError {
    fn exit_code(&self) -> i32 {
        match self {
            DemoError::Io { .. } => 74,
            DemoError::Parse { .. } => 65,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn input_values(cli: &Cli) -> Result<Vec<i64>, DemoError> {
    match &cli.file {
        Some(path) => read_values(path),
        None if cli.values.is_empty() => Ok(DEFAULT_VALUES.to_vec()),
        None => Ok(cli.values.clone()),
    }
}

fn read_values(path: &Path) -> Result<Vec<i64>, DemoError> {
    let contents = fs::read_to_string(path).map_err(|source| DemoError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    contents
        .split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|source| DemoError::Parse {
                path: path.to_path_buf(),
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    let values = input_values(cli)?;
    info!(count = values.len(), "building tree");
    let mut tree = Tree::new(values);

    println!("balanced: {}", tree.is_balanced());
    println!("level order: {:?}", tree.level_order());
    println!("inorder:     {:?}", tree.inorder());
    println!("preorder:    {:?}", tree.preorder());
    println!("postorder:   {:?}", tree.postorder());
    print!("{tree}");

    for value in &cli.insert {
        if !tree.insert(*value) {
            info!(value, "already present");
        }
    }
    println!("balanced after inserts: {}", tree.is_balanced());
    print!("{tree}");

    tree.rebalance();
    println!("balanced after rebalance: {}", tree.is_balanced());
    print!("{tree}");

    match tree.find(&cli.find) {
        Some(node) => println!(
            "found {} (height {}, depth {})",
            node.value(),
            node.height(),
            tree.depth(&cli.find).unwrap_or_default()
        ),
        None => println!("{} not found", cli.find),
    }
    println!("height: {}", tree.height());

    Ok(())
}
