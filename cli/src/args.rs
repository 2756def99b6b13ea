//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for blindset
#[derive(Parser, Debug)]
#[command(name = "blindset")]
#[command(author, version, about = "Assemble a blind evaluation dataset from a graded item pool")]
#[command(long_about = r#"
Blindset turns a pool of graded answer items into a blind evaluation run.

From the pool it selects one complete document (5 questions, each with a
canonical answer and 12 degraded variants), partitions it into 5 balanced
blocks, hands each of 5 evaluators two adjacent blocks on a ring, reorders
every evaluator's sheet to break same-question adjacency, and replaces all
item labels with opaque blind identifiers. The de-blinding audit map is
written to a separate file.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./blindset.toml     Project-level config
3. ~/.config/blindset/config.toml   Global config

Example:
  blindset --input pool.json --out run1/
  blindset --input pool.json --out run1/ --seed 42
  blindset --input pool.json --out run1/ -e alice -e bob -e carol -e dave -e erin
"#)]
pub struct Cli {
    /// Path to the graded item pool (JSON array)
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Directory to write assignments, audit map and manifest into
    #[arg(short, long, value_name = "DIR", default_value = "out")]
    pub out: PathBuf,

    /// Seed for a reproducible run (defaults to a fresh random seed)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Evaluator name, in ring order (specify exactly five times)
    #[arg(short, long = "evaluator", value_name = "NAME")]
    pub evaluator: Vec<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the console summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
