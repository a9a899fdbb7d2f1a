use clap::Parser;
use std::path::PathBuf;

use yum_deps::prelude::*;

/// Options after merging command-line flags, config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub input_root: String,
    pub output_format: OutputFormat,
    pub include_external: bool,
    pub verbosity: Verbosity,
}

/// Render yum package dependency reports as text, CSV or wiki tables
#[derive(Parser, Debug)]
#[command(name = "yum-deps")]
#[command(version)]
#[command(
    about = "Render yum package dependency reports as text, CSV or wiki tables",
    long_about = "Reads <root>.info (captured with `yum info`) and <root>.dep (captured with \
                  `yum deplist`) and prints the dependencies of every listed package."
)]
pub struct Args {
    /// Input file root name; <ROOT>.info and <ROOT>.dep are read [default: pkg]
    #[arg(short, long = "input-root", value_name = "ROOT")]
    pub input_root: Option<String>,

    /// Output format: text, csv or wiki [default: wiki]
    #[arg(short, long = "output-format", value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,

    /// Print all dependencies, including those without an internal provider
    #[arg(short, long)]
    pub all: bool,

    /// Config file path (defaults to ./yum-deps.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print errors to stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Merges the flags with an optional config file.
    ///
    /// Precedence: command-line flag, then config value, then default.
    pub fn resolve(&self, config: Option<&ConfigFile>) -> Result<RunOptions> {
        let input_root = self
            .input_root
            .clone()
            .or_else(|| config.and_then(|c| c.input_root.clone()))
            .unwrap_or_else(|| DEFAULT_INPUT_ROOT.to_string());

        let output_format = match self.output_format {
            Some(format) => format,
            None => match config {
                Some(c) => c.parsed_output_format()?.unwrap_or_default(),
                None => OutputFormat::default(),
            },
        };

        let include_external = self.all || config.and_then(|c| c.all).unwrap_or(false);
        let verbose = self.verbose || config.and_then(|c| c.verbose).unwrap_or(false);

        Ok(RunOptions {
            input_root,
            output_format,
            include_external,
            verbosity: Verbosity::from_flags(self.quiet, verbose),
        })
    }
}
