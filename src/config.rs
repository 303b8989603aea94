use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Extract the rows of a delimited file whose column matches a value.
#[derive(Debug, Parser)]
#[command(name = "rusty-sieve", version, about)]
pub struct Cli {
    /// Input CSV file.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output CSV file (replaced if it exists).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Column the filter applies to.
    #[arg(short, long, value_name = "NAME")]
    pub column: Option<String>,

    /// Value a row must carry in the filter column to survive.
    #[arg(short, long, value_name = "VALUE")]
    pub equals: Option<String>,

    /// JSON config file; command-line flags take precedence over it.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Job configuration
// ---------------------------------------------------------------------------

/// Resolved pipeline configuration.
///
/// The defaults reproduce the original airport extraction; a JSON config
/// file and command-line flags can override each knob independently
/// (flag > file > default).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub filter_column: String,
    pub filter_value: String,
}

impl Default for JobConfig {
    fn default() -> Self {
        JobConfig {
            input_path: PathBuf::from("airport_data.csv"),
            output_path: PathBuf::from("large_airports.csv"),
            filter_column: "type".to_string(),
            filter_value: "large_airport".to_string(),
        }
    }
}

impl JobConfig {
    /// Parse a JSON config file. Missing fields keep their defaults;
    /// unknown fields are rejected.
    pub fn from_file(path: &Path) -> Result<JobConfig> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Build the effective configuration from the command line.
    pub fn resolve(cli: &Cli) -> Result<JobConfig> {
        let mut config = match &cli.config {
            Some(path) => JobConfig::from_file(path)?,
            None => JobConfig::default(),
        };
        if let Some(input) = &cli.input {
            config.input_path = input.clone();
        }
        if let Some(output) = &cli.output {
            config.output_path = output.clone();
        }
        if let Some(column) = &cli.column {
            config.filter_column = column.clone();
        }
        if let Some(value) = &cli.equals {
            config.filter_value = value.clone();
        }
        Ok(config)
    }
}
