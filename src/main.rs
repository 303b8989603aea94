mod config;
mod data;

use anyhow::{Context, Result};
use clap::Parser;

use config::{Cli, JobConfig};
use data::filter::filter_equals;
use data::loader::load_table;
use data::model::CellValue;
use data::writer::write_table;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let job = JobConfig::resolve(&cli)?;
    run(&job)
}

/// Load → filter → write, once.
fn run(job: &JobConfig) -> Result<()> {
    let table = load_table(&job.input_path)
        .with_context(|| format!("loading {}", job.input_path.display()))?;
    log::info!(
        "loaded {} rows x {} columns from {}",
        table.len(),
        table.columns.len(),
        job.input_path.display()
    );

    let wanted = CellValue::parse(&job.filter_value);
    let matching = filter_equals(&table, &job.filter_column, &wanted).context("applying filter")?;
    if matching.is_empty() {
        log::warn!(
            "no rows have {} == {}; writing header only",
            job.filter_column,
            job.filter_value
        );
    } else {
        log::info!(
            "{} of {} rows have {} == {}",
            matching.len(),
            table.len(),
            job.filter_column,
            job.filter_value
        );
    }

    write_table(&matching, &job.output_path)
        .with_context(|| format!("writing {}", job.output_path.display()))?;
    log::info!("wrote {}", job.output_path.display());

    Ok(())
}
