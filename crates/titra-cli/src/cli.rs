use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use titra::engine::config::GroupingStrategy;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "titra - Exclusive-occupancy titration curves from constant-pH simulation logs.",
    long_about = "Reads constant-pH simulation logs, merges the cycles of runs performed at the same pH, \
                  and prints, for each pH in ascending order, the fraction of cycles in which exactly one \
                  of the two titratable sites is protonated together with its binomial standard error.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Constant-pH log files to analyze. Files are read in the order given.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// How runs are assigned to pH groups.
    #[arg(long, value_enum, default_value_t = GroupBy::Value, value_name = "KEY")]
    pub group_by: GroupBy,

    /// Do not draw the progress bar on stderr.
    #[arg(long)]
    pub no_progress: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    /// Exact equality of the parsed pH value.
    Value,
    /// Equality of the pH text as written in the header.
    Label,
}

impl From<GroupBy> for GroupingStrategy {
    fn from(key: GroupBy) -> Self {
        match key {
            GroupBy::Value => GroupingStrategy::Value,
            GroupBy::Label => GroupingStrategy::Label,
        }
    }
}
